//! Calculation logic for the pay breakdown engine.
//!
//! This module contains calendar-day classification, time-of-day segment
//! resolution for shifts crossing midnight or the start of a Sabbath,
//! tiered overtime allocation, evening/night and Sabbath hour sums,
//! field-duty per-diem, meal allowances, effective-dated rate lookup and
//! the invertible day/month aggregation used by the month ledger.

mod accumulators;
mod calendar;
mod day_calculator;
mod day_classification;
mod extra_hours;
mod meal_allowance;
mod month_ledger;
mod per_diem;
mod rate_timeline;
mod regular_hours;
mod segment_resolver;

pub use accumulators::Accumulate;
pub use calendar::{
    CalendarDay, CalendarSource, DAYLIGHT_UTC_OFFSET_MINUTES, STANDARD_UTC_OFFSET_MINUTES,
    StaticCalendar,
};
pub use day_calculator::DayCalculator;
pub use day_classification::{
    EVE_PREFIX, FRIDAY, SATURDAY, SPECIAL_ENTRY_DAYLIGHT, SPECIAL_ENTRY_STANDARD,
    classify_date, classify_day_type, special_entry_minute,
};
pub use extra_hours::{calculate_extra_hours, calculate_special_hours};
pub use meal_allowance::{
    LARGE_MEAL_MIN_HOURS, MealAllowanceInput, calculate_large_meal_allowance,
    calculate_small_meal_allowance, shift_has_morning, shift_has_night,
};
pub use month_ledger::MonthLedger;
pub use per_diem::{
    PerDiemShift, TIER_A_MIN_HOURS, TIER_B_MIN_HOURS, TIER_C_MIN_HOURS, calculate_per_diem,
    field_duty_hours, is_field_duty_day, per_diem_tier,
};
pub use rate_timeline::{RateEntry, RateTimeline, resolve_rates};
pub use regular_hours::{DEFAULT_MID_TIER_THRESHOLD, RegularHoursAllocator};
pub use segment_resolver::{
    BoundaryEntry, DAY_END, DAY_START, EVENING_END, EVENING_START, FULL_DAY_LIMIT,
    REGULAR_EXCLUSIVE_TABLE, REGULAR_TABLE, ShiftSegmentResolver, resolve_against_table,
    special_table,
};
