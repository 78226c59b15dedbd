//! Incremental month state.
//!
//! The ledger owns a month's shifts and keeps each day's breakdown and the
//! running [`MonthlyTotal`] in sync. An edit recomputes only the touched
//! day and moves the month total with subtract/accumulate.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::{EngineConfig, HolidayNames};
use crate::error::{EngineError, EngineResult};
use crate::models::{DayBreakdown, MonthlyTotal, Shift};

use super::calendar::CalendarSource;
use super::day_calculator::DayCalculator;
use super::day_classification::classify_date;

/// A calendar month of shifts with derived day and month breakdowns.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::{MonthLedger, StaticCalendar};
/// use pay_breakdown_engine::config::EngineConfig;
/// use pay_breakdown_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// let mut ledger = MonthLedger::new(2024, 9, &config, StaticCalendar::new()).unwrap();
///
/// ledger.add_shift(Shift {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
///     start_time: NaiveDateTime::parse_from_str("2024-09-04 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2024-09-04 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_field_duty_shift: false,
/// }).unwrap();
///
/// assert_eq!(ledger.total().worked_days, 1);
/// assert_eq!(ledger.total().totals.total_hours, Decimal::new(8, 0));
///
/// ledger.remove_shift("shift_001").unwrap();
/// assert_eq!(ledger.total().worked_days, 0);
/// ```
#[derive(Debug, Clone)]
pub struct MonthLedger<C: CalendarSource> {
    year: i32,
    month: u32,
    calendar: C,
    holidays: HolidayNames,
    calculator: DayCalculator,
    shifts: BTreeMap<NaiveDate, Vec<Shift>>,
    days: BTreeMap<NaiveDate, DayBreakdown>,
    total: MonthlyTotal,
}

impl<C: CalendarSource> MonthLedger<C> {
    /// Creates an empty ledger for `year`/`month`.
    ///
    /// Thresholds come from `config`; rates are those effective in the month.
    pub fn new(year: i32, month: u32, config: &EngineConfig, calendar: C) -> EngineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidMonth { year, month });
        }

        Ok(Self {
            year,
            month,
            calendar,
            holidays: config.holidays().clone(),
            calculator: DayCalculator::for_month(config, year, month),
            shifts: BTreeMap::new(),
            days: BTreeMap::new(),
            total: MonthlyTotal::new(year, month),
        })
    }

    /// Creates a ledger and records every shift in order.
    pub fn with_shifts<I>(
        year: i32,
        month: u32,
        config: &EngineConfig,
        calendar: C,
        shifts: I,
    ) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Shift>,
    {
        let mut ledger = Self::new(year, month, config, calendar)?;
        for shift in shifts {
            ledger.add_shift(shift)?;
        }
        Ok(ledger)
    }

    /// The ledger's year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The ledger's month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The running month total.
    pub fn total(&self) -> &MonthlyTotal {
        &self.total
    }

    /// The breakdown of a worked day, `None` when the day has no shifts.
    pub fn day(&self, date: NaiveDate) -> Option<&DayBreakdown> {
        self.days.get(&date)
    }

    /// Worked days in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayBreakdown> {
        self.days.values()
    }

    /// Looks up a recorded shift.
    pub fn shift(&self, shift_id: &str) -> Option<&Shift> {
        self.shifts
            .values()
            .flat_map(|shifts| shifts.iter())
            .find(|s| s.id == shift_id)
    }

    /// Records a new shift and returns its recomputed day.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DateOutsideMonth`] when the shift's day is in another month
    /// - [`EngineError::InvalidShift`] when the ID is empty or already recorded,
    ///   or the shift starts on another date than its day
    pub fn add_shift(&mut self, shift: Shift) -> EngineResult<DayBreakdown> {
        self.ensure_in_month(shift.date)?;
        ensure_starts_on_date(&shift)?;
        if shift.id.is_empty() {
            return Err(EngineError::InvalidShift {
                shift_id: shift.id,
                message: "shift id must not be empty".to_string(),
            });
        }
        if self.shift(&shift.id).is_some() {
            return Err(EngineError::InvalidShift {
                shift_id: shift.id,
                message: "duplicate shift id".to_string(),
            });
        }

        debug!(shift_id = %shift.id, date = %shift.date, "Adding shift");

        let date = shift.date;
        self.shifts.entry(date).or_default().push(shift);
        Ok(self.recompute_day(date))
    }

    /// Replaces the recorded shift with the same ID.
    ///
    /// When the shift moves to another date both days are recomputed.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ShiftNotFound`] when no shift has the ID
    /// - [`EngineError::DateOutsideMonth`] when the new day is in another month
    /// - [`EngineError::InvalidShift`] when the shift starts on another date than its day
    pub fn update_shift(&mut self, shift: Shift) -> EngineResult<DayBreakdown> {
        self.ensure_in_month(shift.date)?;
        ensure_starts_on_date(&shift)?;
        let old_date = self
            .shift(&shift.id)
            .map(|s| s.date)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift.id.clone(),
            })?;

        debug!(
            shift_id = %shift.id,
            old_date = %old_date,
            new_date = %shift.date,
            "Updating shift"
        );

        let new_date = shift.date;
        self.take_shift(old_date, &shift.id);
        if old_date != new_date {
            self.recompute_day(old_date);
        }
        self.shifts.entry(new_date).or_default().push(shift);
        Ok(self.recompute_day(new_date))
    }

    /// Removes a shift and recomputes its day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftNotFound`] when no shift has the ID.
    pub fn remove_shift(&mut self, shift_id: &str) -> EngineResult<Shift> {
        let date = self
            .shift(shift_id)
            .map(|s| s.date)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })?;

        debug!(shift_id = %shift_id, date = %date, "Removing shift");

        let removed = self
            .take_shift(date, shift_id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })?;
        self.recompute_day(date);
        Ok(removed)
    }

    fn ensure_in_month(&self, date: NaiveDate) -> EngineResult<()> {
        if date.year() == self.year && date.month() == self.month {
            Ok(())
        } else {
            Err(EngineError::DateOutsideMonth {
                date,
                year: self.year,
                month: self.month,
            })
        }
    }

    fn take_shift(&mut self, date: NaiveDate, shift_id: &str) -> Option<Shift> {
        let shifts = self.shifts.get_mut(&date)?;
        let index = shifts.iter().position(|s| s.id == shift_id)?;
        let removed = shifts.remove(index);
        if shifts.is_empty() {
            self.shifts.remove(&date);
        }
        Some(removed)
    }

    /// Recomputes one day and moves the month total from its old to its new breakdown.
    fn recompute_day(&mut self, date: NaiveDate) -> DayBreakdown {
        let meta = classify_date(date, &self.calendar, &self.holidays);
        let shifts = self.shifts.get(&date).map(Vec::as_slice).unwrap_or_default();
        let updated = self.calculator.calculate(&meta, shifts);

        self.total = match self.days.get(&date) {
            Some(previous) => self.total.replace_day(previous, &updated),
            None => self.total.add_day(&updated),
        };

        debug!(
            date = %date,
            type_day = %meta.type_day,
            day_hours = %updated.totals.total_hours,
            month_hours = %self.total.totals.total_hours,
            "Recomputed day"
        );

        if updated.is_worked() {
            self.days.insert(date, updated.clone());
        } else {
            self.days.remove(&date);
        }
        updated
    }
}

/// A shift belongs to the date it starts on.
fn ensure_starts_on_date(shift: &Shift) -> EngineResult<()> {
    if shift.start_time.date() == shift.date {
        Ok(())
    } else {
        Err(EngineError::InvalidShift {
            shift_id: shift.id.clone(),
            message: format!(
                "shift starts on {} but is recorded for {}",
                shift.start_time.date(),
                shift.date
            ),
        })
    }
}
