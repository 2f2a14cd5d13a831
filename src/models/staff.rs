//! Staff member model and related types.
//!
//! This module defines the StaffMember struct and StaffStatus enum
//! for representing the people placed on the rota.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::shift::{Shift, ShiftId};
use super::time_format::option_clock_time;

/// Identifier of a staff record.
pub type StaffId = i64;

/// Represents the employment status that drives duty computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffStatus {
    /// Rotates with their shift's cycle.
    Regular,
    /// Works only when manually assigned.
    Relief,
    /// Follows the 16-day supervisor pattern.
    Supervisor,
}

/// Represents a staff member, with their shift populated where they have one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: StaffId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Employment status.
    pub status: StaffStatus,
    /// The shift the staff member is assigned to, if any.
    #[serde(default)]
    pub shift_id: Option<ShiftId>,
    /// The populated shift record for `shift_id`.
    #[serde(default)]
    pub shift: Option<Shift>,
    /// Personal cycle offset; `0` is read as "use the shift offset".
    #[serde(default)]
    pub days_offset: Option<i64>,
    /// Supervisor cycle offset (0, 4, 8 or 12).
    #[serde(default)]
    pub supervisor_offset: Option<i64>,
    /// Custom start time overriding every other source.
    #[serde(default, with = "option_clock_time")]
    pub custom_shift_start: Option<NaiveTime>,
    /// Custom end time overriding every other source.
    #[serde(default, with = "option_clock_time")]
    pub custom_shift_end: Option<NaiveTime>,
    /// Pool staff flag: work contracted hours instead of the cycle.
    #[serde(default)]
    pub use_contracted_hours_for_shift: bool,
    /// Floating staff not permanently allocated to an area.
    #[serde(default)]
    pub is_pool_staff: bool,
    /// Working day (1-4) of each on-duty block that finishes an hour early.
    #[serde(default)]
    pub early_finish_day: Option<u8>,
    /// Whether the staff member is current.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl StaffMember {
    /// Returns true if the staff member only works through manual assignments.
    pub fn is_relief(&self) -> bool {
        self.status == StaffStatus::Relief
    }

    /// Returns true if the staff member follows the supervisor cycle.
    pub fn is_supervisor(&self) -> bool {
        self.status == StaffStatus::Supervisor
    }

    /// Returns the custom start/end pair when both halves are set.
    pub fn custom_shift_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.custom_shift_start.zip(self.custom_shift_end)
    }

    /// Returns "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_staff_member() {
        let json = r#"{
            "id": 7,
            "firstName": "Ada",
            "lastName": "Byron",
            "status": "Regular"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, 7);
        assert_eq!(staff.status, StaffStatus::Regular);
        assert!(staff.shift.is_none());
        assert!(staff.days_offset.is_none());
        assert!(!staff.is_pool_staff);
        assert!(staff.is_active);
    }

    #[test]
    fn test_deserialize_custom_times() {
        let json = r#"{
            "id": 8,
            "firstName": "Grace",
            "lastName": "Hopper",
            "status": "Supervisor",
            "supervisorOffset": 8,
            "customShiftStart": "07:00",
            "customShiftEnd": "15:30:00"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert!(staff.is_supervisor());
        assert_eq!(
            staff.custom_shift_times(),
            Some((
                NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(15, 30, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_custom_times_require_both_halves() {
        let json = r#"{
            "id": 9,
            "firstName": "Half",
            "lastName": "Set",
            "status": "Regular",
            "customShiftStart": "07:00"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.custom_shift_times(), None);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&StaffStatus::Relief).unwrap(),
            "\"Relief\""
        );
        let staff: StaffStatus = serde_json::from_str("\"Supervisor\"").unwrap();
        assert_eq!(staff, StaffStatus::Supervisor);
    }
}
