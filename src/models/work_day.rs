//! Calendar-day classification results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The pay category of a calendar day.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::models::WorkDayType;
///
/// let day_type = WorkDayType::SpecialFull;
/// assert_eq!(day_type.to_string(), "SpecialFull");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkDayType {
    /// An ordinary working day.
    Regular,
    /// The eve of a Sabbath or holiday: special rates start at the entry minute.
    SpecialPartialStart,
    /// A Sabbath or paid holiday: special rates all day.
    SpecialFull,
}

impl std::fmt::Display for WorkDayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkDayType::Regular => write!(f, "Regular"),
            WorkDayType::SpecialPartialStart => write!(f, "SpecialPartialStart"),
            WorkDayType::SpecialFull => write!(f, "SpecialFull"),
        }
    }
}

/// Classification of one calendar day, created once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayMeta {
    /// The classified date.
    pub date: NaiveDate,
    /// The day's pay category.
    pub type_day: WorkDayType,
    /// True when the following date is a [`WorkDayType::SpecialFull`] day.
    pub cross_day_continuation: bool,
    /// Minute from local midnight at which Sabbath/holiday rates begin.
    pub special_entry_minute: i64,
    /// Entry minute of the following date, used for hours past 06:00 next morning.
    pub next_special_entry_minute: i64,
}

impl WorkDayMeta {
    /// Returns true when every hour of the day is paid at the flat special rate.
    ///
    /// A special day followed by another special day is tiered normally, the
    /// premium having already been attributed by segment resolution.
    pub fn is_flat_special(&self) -> bool {
        self.type_day == WorkDayType::SpecialFull && !self.cross_day_continuation
    }
}
