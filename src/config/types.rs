//! Configuration types for the pay breakdown engine.
//!
//! These are deserialized from the YAML files in a configuration directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_MID_TIER_THRESHOLD, RateEntry, RateTimeline};

/// How overtime tiers are allocated across the shifts of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationMode {
    /// Fold every shift, in start-time order, into the day's running breakdown.
    #[default]
    PerShift,
    /// Allocate the day's total hours in a single step.
    PerDay,
}

/// Overtime thresholds from engine.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Daily hours paid at 100% before overtime starts.
    pub standard_hours: Decimal,
    /// Hours paid at 125% before spilling to 150%.
    #[serde(default = "default_mid_tier_threshold")]
    pub mid_tier_threshold: Decimal,
    /// Allocation granularity.
    #[serde(default)]
    pub allocation_mode: AllocationMode,
}

fn default_mid_tier_threshold() -> Decimal {
    DEFAULT_MID_TIER_THRESHOLD
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            standard_hours: Decimal::new(86, 1),
            mid_tier_threshold: DEFAULT_MID_TIER_THRESHOLD,
            allocation_mode: AllocationMode::PerShift,
        }
    }
}

/// Event titles recognised by the day classifier, from holidays.yaml.
///
/// A title matches a name when it equals it or starts with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayNames {
    /// Paid holidays, classified like a Sabbath.
    #[serde(default = "default_paid_holidays")]
    pub paid_holidays: Vec<String>,
    /// Eves classified like a Friday, in addition to any "Erev" title.
    #[serde(default = "default_partial_start_days")]
    pub partial_start_days: Vec<String>,
}

fn default_paid_holidays() -> Vec<String> {
    [
        "Rosh Hashana",
        "Yom Kippur",
        "Sukkot I",
        "Shmini Atzeret",
        "Pesach I",
        "Pesach VII",
        "Shavuot",
        "Yom HaAtzma'ut",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_partial_start_days() -> Vec<String> {
    ["Hoshana Raba", "Yom HaZikaron"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for HolidayNames {
    fn default() -> Self {
        Self {
            paid_holidays: default_paid_holidays(),
            partial_start_days: default_partial_start_days(),
        }
    }
}

/// Meal allowance amounts per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealAllowanceRates {
    /// Small (night) meal allowance rate.
    pub small: Decimal,
    /// Large (long day) meal allowance rate.
    pub large: Decimal,
}

/// Effective-dated rate tables from rates.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Per-diem amount per point.
    #[serde(default)]
    pub per_diem: Vec<RateEntry<Decimal>>,
    /// Meal allowance amounts per point.
    #[serde(default)]
    pub meal_allowance: Vec<RateEntry<MealAllowanceRates>>,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    settings: EngineSettings,
    holidays: HolidayNames,
    per_diem: RateTimeline<Decimal>,
    meal_allowance: RateTimeline<MealAllowanceRates>,
}

impl EngineConfig {
    /// Creates a configuration from its parts. Rate tables are sorted oldest first.
    pub fn new(settings: EngineSettings, holidays: HolidayNames, rates: RatesConfig) -> Self {
        Self {
            settings,
            holidays,
            per_diem: RateTimeline::new(rates.per_diem),
            meal_allowance: RateTimeline::new(rates.meal_allowance),
        }
    }

    /// Returns the overtime settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the recognised holiday names.
    pub fn holidays(&self) -> &HolidayNames {
        &self.holidays
    }

    /// Returns the per-diem timeline.
    pub fn per_diem(&self) -> &RateTimeline<Decimal> {
        &self.per_diem
    }

    /// Returns the meal allowance timeline.
    pub fn meal_allowance(&self) -> &RateTimeline<MealAllowanceRates> {
        &self.meal_allowance
    }
}
