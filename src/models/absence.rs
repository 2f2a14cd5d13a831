//! Absence records attached to roster entries.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::staff::StaffId;

/// The reason a staff member is away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    /// Off sick.
    Sickness,
    /// Booked leave.
    AnnualLeave,
    /// Away on training.
    Training,
    /// Any other absence.
    Absence,
}

/// A period during which a staff member is absent.
///
/// Absences annotate roster entries; they never remove anyone from duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    /// Unique identifier for the absence.
    pub id: i64,
    /// The absent staff member.
    pub staff_id: StaffId,
    /// The reason for the absence.
    pub absence_type: AbsenceType,
    /// Start of the absence.
    pub start_datetime: NaiveDateTime,
    /// End of the absence.
    pub end_datetime: NaiveDateTime,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Absence {
    /// Returns true if the absence overlaps any part of `date`
    /// (00:00:00 to 23:59:59, both ends inclusive).
    pub fn is_active_on_date(&self, date: NaiveDate) -> bool {
        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = date.and_hms_opt(23, 59, 59).unwrap_or(day_start);
        self.start_datetime <= day_end && self.end_datetime >= day_start
    }
}
