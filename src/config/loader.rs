//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineSettings, HolidayNames, MealAllowanceRates, RatesConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Standard hours, mid-tier threshold, allocation mode
/// ├── holidays.yaml  # Paid holiday and partial-start event names
/// └── rates.yaml     # Per-diem and meal allowance rate timelines
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_breakdown_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let meal = loader.meal_allowance_rates(2024, 9);
/// println!("Large meal allowance: {}", meal.large);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let holidays = Self::load_yaml::<HolidayNames>(&path.join("holidays.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;

        debug!(
            path = %path.display(),
            standard_hours = %settings.standard_hours,
            per_diem_entries = rates.per_diem.len(),
            meal_allowance_entries = rates.meal_allowance.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(settings, holidays, rates),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Per-diem amount per point effective for the given month.
    pub fn per_diem_rate(&self, year: i32, month: u32) -> Decimal {
        self.config.per_diem().resolve(year, month)
    }

    /// Meal allowance amounts effective for the given month.
    pub fn meal_allowance_rates(&self, year: i32, month: u32) -> MealAllowanceRates {
        self.config.meal_allowance().resolve(year, month)
    }
}
