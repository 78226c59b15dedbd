//! Core data models for the pay breakdown engine.
//!
//! This module contains the shift, day classification, segment and
//! breakdown value types shared by every calculation.

mod breakdown;
mod day_breakdown;
mod segment;
mod shift;
mod work_day;

pub use breakdown::{
    ExtraBreakdown, HoursBucket, MealAllowance, PayBreakdown, PerDiemInfo, PerDiemTier,
    RegularBreakdown, SpecialBreakdown,
};
pub use day_breakdown::{DayBreakdown, MonthlyTotal, ShiftBreakdown};
pub use segment::{LabeledSegmentRange, SegmentKey, hours_for_key};
pub use shift::{MINUTES_PER_DAY, Point, Shift, minutes_to_hours};
pub use work_day::{WorkDayMeta, WorkDayType};
