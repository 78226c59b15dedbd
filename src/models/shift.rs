//! Shift model and the minute-offset interval derived from it.
//!
//! Shifts are recorded as local wall-clock timestamps. All segmentation
//! works on [`Point`]s: minute offsets from the owning day's local midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Converts a minute count to hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// A half-open interval `[start, end)` in minutes from a day's local midnight.
///
/// `end` may exceed [`MINUTES_PER_DAY`] for intervals that cross midnight.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::models::Point;
/// use rust_decimal::Decimal;
///
/// // 22:00 to 06:00 the next morning
/// let point = Point::new(1320, 1800);
/// assert_eq!(point.duration_minutes(), 480);
/// assert_eq!(point.hours(), Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Start offset in minutes.
    pub start: i64,
    /// End offset in minutes (exclusive).
    pub end: i64,
}

impl Point {
    /// Creates a new interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Returns true when the interval has no positive duration.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Duration in minutes, zero for empty or inverted intervals.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    /// Duration in hours.
    pub fn hours(&self) -> Decimal {
        minutes_to_hours(self.duration_minutes())
    }

    /// Intersection with another interval, `None` when it has no positive duration.
    pub fn clip(&self, other: &Point) -> Option<Point> {
        let clipped = Point::new(self.start.max(other.start), self.end.min(other.end));
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Returns the same interval moved by `minutes`.
    pub fn shifted(&self, minutes: i64) -> Point {
        Point::new(self.start + minutes, self.end + minutes)
    }

    /// Returns true when the two intervals share a positive duration.
    pub fn overlaps(&self, other: &Point) -> bool {
        self.clip(other).is_some()
    }
}

/// A single clock-in/clock-out record.
///
/// The shift belongs to the calendar day `date`; its start and end are
/// measured from that day's local midnight, so a shift ending after
/// midnight produces a [`Point`] whose end exceeds 1440.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The calendar day owning the shift.
    pub date: NaiveDate,
    /// Clock-in time.
    pub start_time: NaiveDateTime,
    /// Clock-out time.
    pub end_time: NaiveDateTime,
    /// Whether the shift counts toward field-duty per-diem and meal rules.
    #[serde(default)]
    pub is_field_duty_shift: bool,
}

impl Shift {
    /// Projects the shift onto minute offsets from its day's local midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_breakdown_engine::models::{Point, Shift};
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
    ///     start_time: NaiveDateTime::parse_from_str("2024-09-04 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2024-09-05 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     is_field_duty_shift: false,
    /// };
    /// assert_eq!(shift.point(), Point::new(1320, 1800));
    /// ```
    pub fn point(&self) -> Point {
        let midnight = self.date.and_time(NaiveTime::default());
        Point::new(
            (self.start_time - midnight).num_minutes(),
            (self.end_time - midnight).num_minutes(),
        )
    }

    /// Worked hours; zero when the shift ends at or before its start.
    pub fn worked_hours(&self) -> Decimal {
        self.point().hours()
    }
}
