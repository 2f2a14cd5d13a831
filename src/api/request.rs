//! Request types for the rota API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::parse_date;

use super::response::ApiError;

/// Query string of `GET /rota`.
///
/// Both fields are kept as raw strings so that missing and malformed
/// values produce the API's own validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotaRangeQuery {
    /// First date of the range (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Last date of the range, inclusive (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

impl RotaRangeQuery {
    /// Parses both bounds. Ordering is checked by the engine.
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), ApiError> {
        let start = parse_param("start_date", self.start_date.as_deref())?;
        let end = parse_param("end_date", self.end_date.as_deref())?;
        Ok((start, end))
    }
}

/// Parses a path or query date, mapping failures to `VALIDATION_ERROR`.
pub fn parse_date_param(value: &str) -> Result<NaiveDate, ApiError> {
    parse_date(value).map_err(|err| ApiError::validation_error(err.to_string()))
}

fn parse_param(name: &str, value: Option<&str>) -> Result<NaiveDate, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => parse_date_param(value),
        _ => Err(ApiError::missing_parameter(name)),
    }
}
