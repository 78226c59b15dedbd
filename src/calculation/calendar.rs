//! Calendar data consumed by the day classifier.
//!
//! Holiday data acquisition is left to the caller: anything able to list a
//! date's event titles and its UTC offset can drive classification.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// UTC offset of local standard time, in minutes.
pub const STANDARD_UTC_OFFSET_MINUTES: i32 = 120;

/// UTC offset while daylight saving time is in effect, in minutes.
pub const DAYLIGHT_UTC_OFFSET_MINUTES: i32 = 180;

/// A source of per-date calendar information.
pub trait CalendarSource {
    /// Holiday and event titles falling on `date`.
    fn events_on(&self, date: NaiveDate) -> Vec<String>;

    /// Local UTC offset on `date`, in minutes.
    fn utc_offset_minutes(&self, date: NaiveDate) -> i32;
}

/// Calendar information for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The date described.
    pub date: NaiveDate,
    /// Holiday and event titles.
    #[serde(default)]
    pub events: Vec<String>,
    /// Local UTC offset in minutes; the calendar default when absent.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

/// An in-memory calendar.
///
/// Dates without an entry have no events and the default offset.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::{CalendarSource, StaticCalendar};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 10, 12).unwrap();
/// let calendar = StaticCalendar::new().with_events(date, &["Yom Kippur"]);
/// assert_eq!(calendar.events_on(date), vec!["Yom Kippur".to_string()]);
/// assert_eq!(calendar.utc_offset_minutes(date), 120);
/// ```
#[derive(Debug, Clone)]
pub struct StaticCalendar {
    days: HashMap<NaiveDate, CalendarDay>,
    default_utc_offset_minutes: i32,
}

impl Default for StaticCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCalendar {
    /// An empty calendar on standard time.
    pub fn new() -> Self {
        Self {
            days: HashMap::new(),
            default_utc_offset_minutes: STANDARD_UTC_OFFSET_MINUTES,
        }
    }

    /// Builds a calendar from day entries.
    pub fn from_days(days: impl IntoIterator<Item = CalendarDay>) -> Self {
        let mut calendar = Self::new();
        for day in days {
            calendar.insert(day);
        }
        calendar
    }

    /// Sets the offset used for dates without an explicit one.
    pub fn with_default_offset(mut self, utc_offset_minutes: i32) -> Self {
        self.default_utc_offset_minutes = utc_offset_minutes;
        self
    }

    /// Adds event titles to `date`.
    pub fn with_events(mut self, date: NaiveDate, events: &[&str]) -> Self {
        let day = self.entry(date);
        day.events.extend(events.iter().map(|e| e.to_string()));
        self
    }

    /// Sets the UTC offset of `date`.
    pub fn with_offset(mut self, date: NaiveDate, utc_offset_minutes: i32) -> Self {
        self.entry(date).utc_offset_minutes = Some(utc_offset_minutes);
        self
    }

    /// Inserts or replaces the entry for a date.
    pub fn insert(&mut self, day: CalendarDay) {
        self.days.insert(day.date, day);
    }

    fn entry(&mut self, date: NaiveDate) -> &mut CalendarDay {
        self.days.entry(date).or_insert_with(|| CalendarDay {
            date,
            events: Vec::new(),
            utc_offset_minutes: None,
        })
    }
}

impl CalendarSource for StaticCalendar {
    fn events_on(&self, date: NaiveDate) -> Vec<String> {
        self.days
            .get(&date)
            .map(|day| day.events.clone())
            .unwrap_or_default()
    }

    fn utc_offset_minutes(&self, date: NaiveDate) -> i32 {
        self.days
            .get(&date)
            .and_then(|day| day.utc_offset_minutes)
            .unwrap_or(self.default_utc_offset_minutes)
    }
}
