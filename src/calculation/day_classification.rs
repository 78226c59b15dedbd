//! Calendar-day classification.
//!
//! Determines whether a date is a regular day, the eve of a Sabbath or
//! holiday, or a Sabbath/holiday itself, and whether the following day
//! continues a special period.

use chrono::{Datelike, NaiveDate};

use crate::config::HolidayNames;
use crate::models::{WorkDayMeta, WorkDayType};

use super::calendar::{CalendarSource, DAYLIGHT_UTC_OFFSET_MINUTES};

/// Weekday index of Friday (0 = Sunday).
pub const FRIDAY: u32 = 5;

/// Weekday index of Saturday (0 = Sunday).
pub const SATURDAY: u32 = 6;

/// Prefix of eve titles.
pub const EVE_PREFIX: &str = "Erev";

/// Special rates start at 17:00 on standard time.
pub const SPECIAL_ENTRY_STANDARD: i64 = 17 * 60;

/// Special rates start at 18:00 while daylight saving time is in effect.
pub const SPECIAL_ENTRY_DAYLIGHT: i64 = 18 * 60;

fn matches_any(title: &str, names: &[String]) -> bool {
    names.iter().any(|name| title.starts_with(name.as_str()))
}

/// Classifies a day from its weekday and event titles.
///
/// Priority, highest first:
/// 1. Saturday
/// 2. A paid holiday title
/// 3. Friday
/// 4. An "Erev" title or a known partial-start title
/// 5. Otherwise a regular day
///
/// Unknown titles are ignored.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::classify_day_type;
/// use pay_breakdown_engine::config::HolidayNames;
/// use pay_breakdown_engine::models::WorkDayType;
///
/// let names = HolidayNames::default();
/// let events = vec!["Erev Pesach".to_string()];
/// assert_eq!(classify_day_type(2, &events, &names), WorkDayType::SpecialPartialStart);
/// assert_eq!(classify_day_type(6, &[], &names), WorkDayType::SpecialFull);
/// ```
pub fn classify_day_type(
    weekday_index: u32,
    events: &[String],
    holidays: &HolidayNames,
) -> WorkDayType {
    if weekday_index == SATURDAY {
        return WorkDayType::SpecialFull;
    }
    if events
        .iter()
        .any(|title| matches_any(title, &holidays.paid_holidays))
    {
        return WorkDayType::SpecialFull;
    }
    if weekday_index == FRIDAY {
        return WorkDayType::SpecialPartialStart;
    }
    if events.iter().any(|title| {
        title.starts_with(EVE_PREFIX) || matches_any(title, &holidays.partial_start_days)
    }) {
        return WorkDayType::SpecialPartialStart;
    }
    WorkDayType::Regular
}

/// Minute at which special rates begin, given the local UTC offset.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::special_entry_minute;
///
/// assert_eq!(special_entry_minute(180), 1080);
/// assert_eq!(special_entry_minute(120), 1020);
/// ```
pub fn special_entry_minute(utc_offset_minutes: i32) -> i64 {
    if utc_offset_minutes == DAYLIGHT_UTC_OFFSET_MINUTES {
        SPECIAL_ENTRY_DAYLIGHT
    } else {
        SPECIAL_ENTRY_STANDARD
    }
}

fn classify_on<C: CalendarSource + ?Sized>(
    date: NaiveDate,
    calendar: &C,
    holidays: &HolidayNames,
) -> WorkDayType {
    classify_day_type(
        date.weekday().num_days_from_sunday(),
        &calendar.events_on(date),
        holidays,
    )
}

/// Classifies `date`, looking one day ahead for cross-day continuation.
pub fn classify_date<C: CalendarSource + ?Sized>(
    date: NaiveDate,
    calendar: &C,
    holidays: &HolidayNames,
) -> WorkDayMeta {
    let next = date.succ_opt();
    let cross_day_continuation = next
        .map(|next| classify_on(next, calendar, holidays) == WorkDayType::SpecialFull)
        .unwrap_or(false);
    let entry = special_entry_minute(calendar.utc_offset_minutes(date));

    WorkDayMeta {
        date,
        type_day: classify_on(date, calendar, holidays),
        cross_day_continuation,
        special_entry_minute: entry,
        next_special_entry_minute: next
            .map(|next| special_entry_minute(calendar.utc_offset_minutes(next)))
            .unwrap_or(entry),
    }
}
