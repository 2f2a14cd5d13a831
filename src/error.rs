//! Error types for the rota engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can abort a roster computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the rota engine.
///
/// Missing contracted hours, shifts or cycle fields are never errors; they
/// simply mean a staff member is not working through that pathway. Only
/// conditions that make the whole roster impossible end up here.
///
/// # Example
///
/// ```
/// use rota_engine::error::RotaError;
///
/// let error = RotaError::ConfigNotFound {
///     path: "/missing/rota.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rota.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RotaError {
    /// The cycle epoch (app zero date) is not configured in the data store.
    #[error("App zero date not configured")]
    ZeroDateNotConfigured,

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

    /// A date string was not in `YYYY-MM-DD` form.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A time string was not in `HH:MM` or `HH:MM:SS` form.
    #[error("Invalid time '{value}': expected HH:MM or HH:MM:SS")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange {
        /// First date of the range.
        start: NaiveDate,
        /// Last date of the range.
        end: NaiveDate,
    },

    /// The data-access collaborator failed.
    #[error("Data access error: {message}")]
    DataAccess {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return RotaError.
pub type RotaResult<T> = Result<T, RotaError>;
