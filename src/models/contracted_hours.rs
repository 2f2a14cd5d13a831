//! Contracted hours: a per-weekday working window independent of any cycle.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::staff::StaffId;
use super::time_format::{clock_time, iso_weekday};

/// One contracted working window for a staff member on a weekday.
///
/// `end_time` may be earlier than `start_time` for windows that cross
/// midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffContractedHours {
    /// Unique identifier for the row.
    #[serde(default)]
    pub id: i64,
    /// The staff member the hours belong to.
    pub staff_id: StaffId,
    /// ISO day of week (1 = Monday .. 7 = Sunday on the wire).
    #[serde(with = "iso_weekday")]
    pub day_of_week: Weekday,
    /// Window start.
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    /// Window end.
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
}

/// Pre-fetched contracted hours keyed by staff id.
pub type ContractedHoursMap = HashMap<StaffId, Vec<StaffContractedHours>>;
