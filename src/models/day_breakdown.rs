//! Day-level and month-level results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExtraBreakdown, LabeledSegmentRange, PayBreakdown, Point, SpecialBreakdown, WorkDayMeta};

/// The segmentation of a single shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBreakdown {
    /// The ID of the shift.
    pub shift_id: String,
    /// The shift interval in minutes from its day's midnight.
    pub point: Point,
    /// Worked hours.
    pub hours: Decimal,
    /// Whether the shift is a field-duty shift.
    pub is_field_duty_shift: bool,
    /// Labeled segments sorted by start.
    pub segments: Vec<LabeledSegmentRange>,
    /// Evening/night premiums of this shift.
    pub extra: ExtraBreakdown,
    /// Sabbath/holiday hours of this shift.
    pub special: SpecialBreakdown,
}

/// The complete breakdown of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// The day's classification.
    pub meta: WorkDayMeta,
    /// Whether any shift covers the morning window.
    pub has_morning: bool,
    /// Whether any shift covers the night window.
    pub has_night: bool,
    /// Whether any shift is a field-duty shift.
    pub is_field_duty_day: bool,
    /// Hours of field-duty shifts only.
    pub field_duty_hours: Decimal,
    /// Per-shift segmentation, sorted by start time.
    pub shifts: Vec<ShiftBreakdown>,
    /// The day's pay categories.
    pub totals: PayBreakdown,
}

impl DayBreakdown {
    /// Returns true when the day has at least one shift.
    pub fn is_worked(&self) -> bool {
        !self.shifts.is_empty()
    }
}

/// The running total of a calendar month.
///
/// Maintained incrementally: days are added and removed with
/// accumulate/subtract rather than re-deriving the whole month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// Number of days with at least one shift.
    pub worked_days: u32,
    /// Aggregated pay categories.
    pub totals: PayBreakdown,
}

impl MonthlyTotal {
    /// An empty total for the given month.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            worked_days: 0,
            totals: PayBreakdown::default(),
        }
    }
}
