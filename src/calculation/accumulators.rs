//! Combining and un-combining pay breakdowns.
//!
//! Day results are folded into month totals with [`Accumulate::accumulate`]
//! and taken out again with [`Accumulate::subtract`] when a day is edited
//! or removed. Subtraction clamps every quantity at zero, so it is only an
//! exact inverse while no field would have gone negative.

use rust_decimal::Decimal;

use crate::models::{
    DayBreakdown, ExtraBreakdown, HoursBucket, MealAllowance, MonthlyTotal, PayBreakdown,
    PerDiemInfo, RegularBreakdown, SpecialBreakdown,
};

/// Field-wise combination of breakdown values.
///
/// Percents are taken from `self` and never change.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::Accumulate;
/// use pay_breakdown_engine::models::{HoursBucket, RegularBreakdown};
/// use rust_decimal::Decimal;
///
/// let a = RegularBreakdown {
///     hours100: HoursBucket::with_hours(100, Decimal::new(8, 0)),
///     ..RegularBreakdown::empty()
/// };
/// let b = RegularBreakdown {
///     hours100: HoursBucket::with_hours(100, Decimal::new(3, 0)),
///     ..RegularBreakdown::empty()
/// };
/// assert_eq!(a.accumulate(&b).hours100.hours, Decimal::new(11, 0));
/// assert_eq!(b.subtract(&a).hours100.hours, Decimal::ZERO);
/// assert_eq!(RegularBreakdown::empty().hours125.percent, 125);
/// ```
pub trait Accumulate: Sized {
    /// The neutral value.
    fn empty() -> Self;

    /// Field-wise sum.
    fn accumulate(&self, other: &Self) -> Self;

    /// Field-wise difference, clamped at zero.
    fn subtract(&self, other: &Self) -> Self;
}

fn clamped_sub(a: Decimal, b: Decimal) -> Decimal {
    (a - b).max(Decimal::ZERO)
}

/// Bucket arithmetic for the breakdown accumulators. A bare bucket has no
/// category percent, so it does not implement [`Accumulate`].
impl HoursBucket {
    /// Sum of the hours, keeping `self`'s percent.
    pub fn plus(&self, other: &Self) -> Self {
        HoursBucket::with_hours(self.percent, self.hours + other.hours)
    }

    /// Difference of the hours clamped at zero, keeping `self`'s percent.
    pub fn minus(&self, other: &Self) -> Self {
        HoursBucket::with_hours(self.percent, clamped_sub(self.hours, other.hours))
    }
}

impl Accumulate for RegularBreakdown {
    fn empty() -> Self {
        Self::default()
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self {
            hours100: self.hours100.plus(&other.hours100),
            hours125: self.hours125.plus(&other.hours125),
            hours150: self.hours150.plus(&other.hours150),
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            hours100: self.hours100.minus(&other.hours100),
            hours125: self.hours125.minus(&other.hours125),
            hours150: self.hours150.minus(&other.hours150),
        }
    }
}

impl Accumulate for ExtraBreakdown {
    fn empty() -> Self {
        Self::default()
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self {
            hours20: self.hours20.plus(&other.hours20),
            hours50: self.hours50.plus(&other.hours50),
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            hours20: self.hours20.minus(&other.hours20),
            hours50: self.hours50.minus(&other.hours50),
        }
    }
}

impl Accumulate for SpecialBreakdown {
    fn empty() -> Self {
        Self::default()
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self {
            shabbat150: self.shabbat150.plus(&other.shabbat150),
            shabbat200: self.shabbat200.plus(&other.shabbat200),
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            shabbat150: self.shabbat150.minus(&other.shabbat150),
            shabbat200: self.shabbat200.minus(&other.shabbat200),
        }
    }
}

/// Aggregates carry no tier: it only describes a single day.
impl Accumulate for PerDiemInfo {
    fn empty() -> Self {
        Self::default()
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self {
            tier: None,
            points: self.points.saturating_add(other.points),
            amount: self.amount + other.amount,
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            tier: None,
            points: self.points.saturating_sub(other.points),
            amount: clamped_sub(self.amount, other.amount),
        }
    }
}

impl Accumulate for MealAllowance {
    fn empty() -> Self {
        Self::default()
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self {
            points: self.points.saturating_add(other.points),
            amount: self.amount + other.amount,
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            points: self.points.saturating_sub(other.points),
            amount: clamped_sub(self.amount, other.amount),
        }
    }
}

impl Accumulate for PayBreakdown {
    fn empty() -> Self {
        Self::default()
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self {
            total_hours: self.total_hours + other.total_hours,
            regular: self.regular.accumulate(&other.regular),
            extra: self.extra.accumulate(&other.extra),
            special: self.special.accumulate(&other.special),
            per_diem: self.per_diem.accumulate(&other.per_diem),
            small_meal_allowance: self
                .small_meal_allowance
                .accumulate(&other.small_meal_allowance),
            large_meal_allowance: self
                .large_meal_allowance
                .accumulate(&other.large_meal_allowance),
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            total_hours: clamped_sub(self.total_hours, other.total_hours),
            regular: self.regular.subtract(&other.regular),
            extra: self.extra.subtract(&other.extra),
            special: self.special.subtract(&other.special),
            per_diem: self.per_diem.subtract(&other.per_diem),
            small_meal_allowance: self
                .small_meal_allowance
                .subtract(&other.small_meal_allowance),
            large_meal_allowance: self
                .large_meal_allowance
                .subtract(&other.large_meal_allowance),
        }
    }
}

impl MonthlyTotal {
    /// Folds a day into the month. Worked days count days with shifts.
    pub fn add_day(&self, day: &DayBreakdown) -> MonthlyTotal {
        MonthlyTotal {
            year: self.year,
            month: self.month,
            worked_days: self.worked_days + u32::from(day.is_worked()),
            totals: self.totals.accumulate(&day.totals),
        }
    }

    /// Takes a previously added day back out of the month.
    pub fn remove_day(&self, day: &DayBreakdown) -> MonthlyTotal {
        MonthlyTotal {
            year: self.year,
            month: self.month,
            worked_days: self.worked_days.saturating_sub(u32::from(day.is_worked())),
            totals: self.totals.subtract(&day.totals),
        }
    }

    /// Replaces `old` with `new`: subtract, then accumulate.
    pub fn replace_day(&self, old: &DayBreakdown, new: &DayBreakdown) -> MonthlyTotal {
        self.remove_day(old).add_day(new)
    }
}
