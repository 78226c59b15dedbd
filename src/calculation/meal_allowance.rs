//! Small and large meal allowances.
//!
//! Both rules are independent boolean thresholds over day-level flags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{MINUTES_PER_DAY, MealAllowance, Point};

/// Minimum day hours for the large meal allowance.
pub const LARGE_MEAL_MIN_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// 06:00 to 14:00.
pub const MORNING_WINDOW: Point = Point { start: 360, end: 840 };

/// 22:00 to 06:00 of the following day.
pub const NIGHT_WINDOW: Point = Point { start: 1320, end: 1800 };

/// 00:00 to 06:00 of the shift's own day.
pub const EARLY_NIGHT_WINDOW: Point = Point { start: 0, end: 360 };

/// Day-level facts the meal rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealAllowanceInput {
    /// Worked hours of the day.
    pub total_hours: Decimal,
    /// Any shift covers the morning window.
    pub has_morning: bool,
    /// Any shift covers the night window.
    pub has_night: bool,
    /// Any shift is a field-duty shift.
    pub is_field_duty_day: bool,
}

/// Whether a shift overlaps 06:00 to 14:00 of its day.
pub fn shift_has_morning(point: &Point) -> bool {
    point.overlaps(&MORNING_WINDOW)
}

/// Whether a shift overlaps a night window: before 06:00, or 22:00 through
/// 06:00 the next morning. Shifts running into a second night also count.
pub fn shift_has_night(point: &Point) -> bool {
    point.overlaps(&EARLY_NIGHT_WINDOW)
        || point.overlaps(&NIGHT_WINDOW)
        || point.overlaps(&NIGHT_WINDOW.shifted(MINUTES_PER_DAY))
}

/// One point at `rate` iff the day has night work.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::{MealAllowanceInput, calculate_small_meal_allowance};
/// use rust_decimal::Decimal;
///
/// let input = MealAllowanceInput { has_night: true, ..Default::default() };
/// let meal = calculate_small_meal_allowance(&input, Decimal::new(145, 1));
/// assert_eq!(meal.points, 1);
/// assert_eq!(meal.amount, Decimal::new(145, 1));
/// ```
pub fn calculate_small_meal_allowance(input: &MealAllowanceInput, rate: Decimal) -> MealAllowance {
    if input.has_night {
        MealAllowance::one_point(rate)
    } else {
        MealAllowance::default()
    }
}

/// One point at `rate` for days of at least ten hours, except field-duty
/// days that include morning work.
pub fn calculate_large_meal_allowance(input: &MealAllowanceInput, rate: Decimal) -> MealAllowance {
    if input.total_hours < LARGE_MEAL_MIN_HOURS {
        return MealAllowance::default();
    }
    if input.has_morning && input.is_field_duty_day {
        return MealAllowance::default();
    }
    MealAllowance::one_point(rate)
}
