//! Configuration loading for the pay breakdown engine.
//!
//! Thresholds, recognised holiday names and effective-dated allowance
//! rates are read from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pay_breakdown_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Standard hours: {}", loader.config().settings().standard_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllocationMode, EngineConfig, EngineSettings, HolidayNames, MealAllowanceRates, RatesConfig,
};
