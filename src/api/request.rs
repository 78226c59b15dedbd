//! Request types for the pay breakdown API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::{CalendarDay, StaticCalendar};
use crate::models::Shift;

/// Request body for the `/calculate` endpoint.
///
/// Contains the month to calculate, the calendar information needed to
/// classify its days, and the shifts worked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// Event titles and UTC offsets per date. Include the first day of the
    /// following month so the month's last day sees its continuation.
    #[serde(default)]
    pub calendar: Vec<CalendarDay>,
    /// UTC offset for dates without an explicit one.
    #[serde(default)]
    pub default_utc_offset_minutes: Option<i32>,
    /// The shifts worked during the month.
    pub shifts: Vec<ShiftRequest>,
}

impl CalculationRequest {
    /// Builds the in-memory calendar described by the request.
    pub fn static_calendar(&self) -> StaticCalendar {
        let calendar = StaticCalendar::from_days(self.calendar.iter().cloned());
        match self.default_utc_offset_minutes {
            Some(offset) => calendar.with_default_offset(offset),
            None => calendar,
        }
    }
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The calendar day owning the shift.
    pub date: NaiveDate,
    /// Clock-in time.
    pub start_time: NaiveDateTime,
    /// Clock-out time.
    pub end_time: NaiveDateTime,
    /// Whether the shift is a field-duty shift.
    #[serde(default)]
    pub is_field_duty_shift: bool,
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            is_field_duty_shift: req.is_field_duty_shift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::CalendarSource;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "year": 2024,
            "month": 10,
            "calendar": [
                { "date": "2024-10-02", "events": ["Erev Rosh Hashana"], "utc_offset_minutes": 180 }
            ],
            "shifts": [
                {
                    "id": "shift_001",
                    "date": "2024-10-02",
                    "start_time": "2024-10-02T09:00:00",
                    "end_time": "2024-10-02T17:00:00"
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 2024);
        assert_eq!(request.month, 10);
        assert_eq!(request.shifts.len(), 1);
        assert!(!request.shifts[0].is_field_duty_shift);

        let calendar = request.static_calendar();
        let date = NaiveDate::from_ymd_opt(2024, 10, 2).unwrap();
        assert_eq!(calendar.events_on(date), vec!["Erev Rosh Hashana".to_string()]);
        assert_eq!(calendar.utc_offset_minutes(date), 180);
    }

    #[test]
    fn test_calendar_is_optional() {
        let json = r#"{ "year": 2024, "month": 9, "default_utc_offset_minutes": 180, "shifts": [] }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.calendar.is_empty());

        let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
        assert_eq!(request.static_calendar().utc_offset_minutes(date), 180);
    }

    #[test]
    fn test_shift_conversion() {
        let req = ShiftRequest {
            id: "shift_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
            start_time: NaiveDate::from_ymd_opt(2024, 9, 4)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
            end_time: NaiveDate::from_ymd_opt(2024, 9, 4)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
            is_field_duty_shift: true,
        };

        let shift: Shift = req.into();
        assert_eq!(shift.id, "shift_001");
        assert!(shift.is_field_duty_shift);
        assert_eq!(shift.point().start, 420);
    }
}
