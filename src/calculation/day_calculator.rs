//! Full breakdown of a single calendar day.
//!
//! Orchestrates segmentation, overtime allocation, premium sums, per-diem
//! and meal allowances for the shifts owned by one date.

use rust_decimal::Decimal;

use crate::config::{AllocationMode, EngineConfig, MealAllowanceRates};
use crate::models::{
    DayBreakdown, ExtraBreakdown, PayBreakdown, Shift, ShiftBreakdown, SpecialBreakdown,
    WorkDayMeta,
};

use super::accumulators::Accumulate;
use super::extra_hours::{calculate_extra_hours, calculate_special_hours};
use super::meal_allowance::{
    MealAllowanceInput, calculate_large_meal_allowance, calculate_small_meal_allowance,
    shift_has_morning, shift_has_night,
};
use super::per_diem::{PerDiemShift, calculate_per_diem, field_duty_hours, is_field_duty_day};
use super::regular_hours::RegularHoursAllocator;
use super::segment_resolver::ShiftSegmentResolver;

/// Calculates day breakdowns with the thresholds and rates of one month.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::DayCalculator;
/// use pay_breakdown_engine::config::EngineConfig;
/// use pay_breakdown_engine::models::{Shift, WorkDayMeta, WorkDayType};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     date,
///     start_time: NaiveDateTime::parse_from_str("2024-09-04 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2024-09-04 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     is_field_duty_shift: false,
/// };
/// let meta = WorkDayMeta {
///     date,
///     type_day: WorkDayType::Regular,
///     cross_day_continuation: false,
///     special_entry_minute: 1080,
///     next_special_entry_minute: 1080,
/// };
///
/// let calculator = DayCalculator::for_month(&EngineConfig::default(), 2024, 9);
/// let day = calculator.calculate(&meta, &[shift]);
/// assert_eq!(day.totals.total_hours, Decimal::new(8, 0));
/// assert_eq!(day.totals.regular.hours100.hours, Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DayCalculator {
    resolver: ShiftSegmentResolver,
    allocator: RegularHoursAllocator,
    allocation_mode: AllocationMode,
    per_diem_rate: Decimal,
    meal_rates: MealAllowanceRates,
}

impl DayCalculator {
    /// Creates a calculator from explicit thresholds and rates.
    pub fn new(
        allocator: RegularHoursAllocator,
        allocation_mode: AllocationMode,
        per_diem_rate: Decimal,
        meal_rates: MealAllowanceRates,
    ) -> Self {
        Self {
            resolver: ShiftSegmentResolver::new(),
            allocator,
            allocation_mode,
            per_diem_rate,
            meal_rates,
        }
    }

    /// Creates a calculator with the settings and the rates effective in `year`/`month`.
    pub fn for_month(config: &EngineConfig, year: i32, month: u32) -> Self {
        let settings = config.settings();
        Self::new(
            RegularHoursAllocator::new(settings.standard_hours, settings.mid_tier_threshold),
            settings.allocation_mode,
            config.per_diem().resolve(year, month),
            config.meal_allowance().resolve(year, month),
        )
    }

    /// Per-diem amount per point.
    pub fn per_diem_rate(&self) -> Decimal {
        self.per_diem_rate
    }

    /// Meal allowance amounts per point.
    pub fn meal_rates(&self) -> MealAllowanceRates {
        self.meal_rates
    }

    fn breakdown_shift(&self, shift: &Shift, meta: &WorkDayMeta) -> ShiftBreakdown {
        let point = shift.point();
        let segments = self.resolver.resolve(point, meta);
        ShiftBreakdown {
            shift_id: shift.id.clone(),
            point,
            hours: shift.worked_hours(),
            is_field_duty_shift: shift.is_field_duty_shift,
            extra: calculate_extra_hours(&segments),
            special: calculate_special_hours(&segments),
            segments,
        }
    }

    /// Calculates the breakdown of the day described by `meta`.
    ///
    /// Shifts are processed in start-time order (ties broken by ID), which
    /// is the order overtime tiers fill up in.
    pub fn calculate(&self, meta: &WorkDayMeta, shifts: &[Shift]) -> DayBreakdown {
        let mut ordered: Vec<&Shift> = shifts.iter().collect();
        ordered.sort_by(|a, b| (a.start_time, &a.id).cmp(&(b.start_time, &b.id)));

        let shift_breakdowns: Vec<ShiftBreakdown> = ordered
            .iter()
            .map(|shift| self.breakdown_shift(shift, meta))
            .collect();

        let total_hours: Decimal = shift_breakdowns.iter().map(|s| s.hours).sum();

        let regular = match self.allocation_mode {
            AllocationMode::PerShift => self
                .allocator
                .allocate_shifts(shift_breakdowns.iter().map(|s| s.hours), meta),
            AllocationMode::PerDay => self.allocator.allocate_day(total_hours, meta),
        };

        let extra = shift_breakdowns
            .iter()
            .fold(ExtraBreakdown::empty(), |acc, s| acc.accumulate(&s.extra));
        let special = shift_breakdowns
            .iter()
            .fold(SpecialBreakdown::empty(), |acc, s| acc.accumulate(&s.special));

        let per_diem_shifts: Vec<PerDiemShift> =
            ordered.iter().map(|shift| PerDiemShift::from(*shift)).collect();
        let per_diem = calculate_per_diem(&per_diem_shifts, self.per_diem_rate);

        let meal_input = MealAllowanceInput {
            total_hours,
            has_morning: shift_breakdowns.iter().any(|s| shift_has_morning(&s.point)),
            has_night: shift_breakdowns.iter().any(|s| shift_has_night(&s.point)),
            is_field_duty_day: is_field_duty_day(&per_diem_shifts),
        };

        DayBreakdown {
            meta: *meta,
            has_morning: meal_input.has_morning,
            has_night: meal_input.has_night,
            is_field_duty_day: meal_input.is_field_duty_day,
            field_duty_hours: field_duty_hours(&per_diem_shifts),
            shifts: shift_breakdowns,
            totals: PayBreakdown {
                total_hours,
                regular,
                extra,
                special,
                per_diem,
                small_meal_allowance: calculate_small_meal_allowance(
                    &meal_input,
                    self.meal_rates.small,
                ),
                large_meal_allowance: calculate_large_meal_allowance(
                    &meal_input,
                    self.meal_rates.large,
                ),
            },
        }
    }
}
