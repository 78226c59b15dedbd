//! Pay breakdown value objects.
//!
//! Every field pairs a fixed category percent with a mutable quantity.
//! Values are combined with [`Accumulate`](crate::calculation::Accumulate),
//! never mutated in place by other components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours attributed to a single percent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBucket {
    /// The category percent. Never changed by accumulate/subtract.
    pub percent: u32,
    /// Hours in the category, always >= 0.
    pub hours: Decimal,
}

impl HoursBucket {
    /// An empty bucket for `percent`.
    pub fn empty(percent: u32) -> Self {
        Self {
            percent,
            hours: Decimal::ZERO,
        }
    }

    /// A bucket holding `hours`.
    pub fn with_hours(percent: u32, hours: Decimal) -> Self {
        Self { percent, hours }
    }
}

/// Ordinary and overtime tiers.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::models::RegularBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = RegularBreakdown::default();
/// assert_eq!(breakdown.hours125.percent, 125);
/// assert_eq!(breakdown.total_hours(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularBreakdown {
    /// Hours up to the standard daily threshold.
    pub hours100: HoursBucket,
    /// First overtime tier.
    pub hours125: HoursBucket,
    /// Second overtime tier.
    pub hours150: HoursBucket,
}

impl Default for RegularBreakdown {
    fn default() -> Self {
        Self {
            hours100: HoursBucket::empty(100),
            hours125: HoursBucket::empty(125),
            hours150: HoursBucket::empty(150),
        }
    }
}

impl RegularBreakdown {
    /// Sum of all tiers.
    pub fn total_hours(&self) -> Decimal {
        self.hours100.hours + self.hours125.hours + self.hours150.hours
    }
}

/// Evening and night premiums. These stack on top of the regular tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraBreakdown {
    /// Evening premium hours.
    pub hours20: HoursBucket,
    /// Night premium hours.
    pub hours50: HoursBucket,
}

impl Default for ExtraBreakdown {
    fn default() -> Self {
        Self {
            hours20: HoursBucket::empty(20),
            hours50: HoursBucket::empty(50),
        }
    }
}

/// Sabbath and holiday hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialBreakdown {
    /// Daytime special hours.
    pub shabbat150: HoursBucket,
    /// Night and evening special hours.
    pub shabbat200: HoursBucket,
}

impl Default for SpecialBreakdown {
    fn default() -> Self {
        Self {
            shabbat150: HoursBucket::empty(150),
            shabbat200: HoursBucket::empty(200),
        }
    }
}

/// Field-duty day category by cumulative field-duty hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerDiemTier {
    /// 4 to 8 hours.
    A,
    /// 8 to 12 hours.
    B,
    /// 12 hours and more.
    C,
}

impl PerDiemTier {
    /// Allowance points granted by the tier.
    pub fn points(self) -> u32 {
        match self {
            PerDiemTier::A => 1,
            PerDiemTier::B => 2,
            PerDiemTier::C => 3,
        }
    }
}

/// Field-duty per-diem. `tier` is only meaningful for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerDiemInfo {
    /// The day's tier, `None` for non field-duty days and aggregates.
    pub tier: Option<PerDiemTier>,
    /// Allowance points.
    pub points: u32,
    /// Monetary amount.
    pub amount: Decimal,
}

/// A meal allowance grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealAllowance {
    /// Allowance points.
    pub points: u32,
    /// Monetary amount.
    pub amount: Decimal,
}

impl MealAllowance {
    /// A single-point grant at `rate`.
    pub fn one_point(rate: Decimal) -> Self {
        Self {
            points: 1,
            amount: rate,
        }
    }
}

/// Every pay category of a day or a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Ordinary and overtime tiers.
    pub regular: RegularBreakdown,
    /// Evening and night premiums.
    pub extra: ExtraBreakdown,
    /// Sabbath and holiday hours.
    pub special: SpecialBreakdown,
    /// Field-duty per-diem.
    pub per_diem: PerDiemInfo,
    /// Small meal allowance.
    pub small_meal_allowance: MealAllowance,
    /// Large meal allowance.
    pub large_meal_allowance: MealAllowance,
}
