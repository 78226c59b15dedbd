//! Error types for the pay breakdown engine.
//!
//! The calculation core is infallible: malformed shifts degrade to empty
//! segments and zero hours. Errors only arise at the edges of the crate:
//! configuration loading, month ledger bookkeeping and the HTTP layer.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the pay breakdown engine.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift could not be recorded.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// No shift with the given ID is recorded in the ledger.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The ID that was looked up.
        shift_id: String,
    },

    /// A shift's day does not belong to the ledger's month.
    #[error("Date {date} is outside of month {year}-{month:02}")]
    DateOutsideMonth {
        /// The offending date.
        date: NaiveDate,
        /// The ledger year.
        year: i32,
        /// The ledger month.
        month: u32,
    },

    /// The year/month pair does not name a calendar month.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
