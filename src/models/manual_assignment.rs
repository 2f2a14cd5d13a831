//! Manual assignment (override) model.
//!
//! Overrides are entered by an operator and always win over computed duty
//! for the staff member and date they cover.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::shift::ShiftType;
use super::staff::StaffId;
use super::time_format::option_clock_time;

/// The kind of area an assignment or allocation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    /// A hospital department.
    Department,
    /// A service (e.g. portering, transport).
    Service,
}

/// An operator-entered override of computed duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAssignment {
    /// Unique identifier for the override.
    pub id: i64,
    /// The staff member being assigned.
    pub staff_id: StaffId,
    /// First (or only) date the override covers.
    pub assignment_date: NaiveDate,
    /// Last date of a multi-day override.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The panel the staff member is assigned to.
    pub shift_type: ShiftType,
    /// Area type of a temporary area assignment.
    #[serde(default)]
    pub area_type: Option<AreaType>,
    /// Area id of a temporary area assignment.
    #[serde(default)]
    pub area_id: Option<i64>,
    /// Explicit panel start time.
    #[serde(default, with = "option_clock_time")]
    pub shift_start: Option<NaiveTime>,
    /// Explicit panel end time.
    #[serde(default, with = "option_clock_time")]
    pub shift_end: Option<NaiveTime>,
    /// Start time inside the temporary area.
    #[serde(default, with = "option_clock_time")]
    pub start_time: Option<NaiveTime>,
    /// End time inside the temporary area.
    #[serde(default, with = "option_clock_time")]
    pub end_time: Option<NaiveTime>,
    /// Free-text operator notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ManualAssignment {
    /// Returns true when the override places the staff member in a specific
    /// department or service; such overrides never appear in shift panels.
    pub fn is_temporary_area_assignment(&self) -> bool {
        self.area_type.is_some() && self.area_id.is_some()
    }

    /// Returns true when the override targets a day/night panel.
    pub fn is_shift_pool_assignment(&self) -> bool {
        !self.is_temporary_area_assignment()
    }

    /// Returns true if the override applies on `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use rota_engine::models::{ManualAssignment, ShiftType};
    /// use chrono::NaiveDate;
    ///
    /// let assignment = ManualAssignment {
    ///     id: 1,
    ///     staff_id: 4,
    ///     assignment_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
    ///     end_date: Some(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()),
    ///     shift_type: ShiftType::Day,
    ///     area_type: None,
    ///     area_id: None,
    ///     shift_start: None,
    ///     shift_end: None,
    ///     start_time: None,
    ///     end_time: None,
    ///     notes: None,
    /// };
    /// assert!(assignment.covers_date(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()));
    /// assert!(!assignment.covers_date(NaiveDate::from_ymd_opt(2025, 11, 4).unwrap()));
    /// ```
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        match self.end_date {
            Some(end) => self.assignment_date <= date && date <= end,
            None => self.assignment_date == date,
        }
    }

    /// Returns the explicit panel times when both halves are set.
    pub fn explicit_shift_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.shift_start.zip(self.shift_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_assignment() -> ManualAssignment {
        serde_json::from_str(
            r#"{
                "id": 1,
                "staffId": 12,
                "assignmentDate": "2025-11-01",
                "shiftType": "night"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_single_day_assignment_covers_only_its_date() {
        let assignment = create_assignment();
        assert!(assignment.covers_date(make_date("2025-11-01")));
        assert!(!assignment.covers_date(make_date("2025-10-31")));
        assert!(!assignment.covers_date(make_date("2025-11-02")));
    }

    #[test]
    fn test_temporary_area_requires_type_and_id() {
        let mut assignment = create_assignment();
        assert!(assignment.is_shift_pool_assignment());

        assignment.area_type = Some(AreaType::Department);
        assert!(!assignment.is_temporary_area_assignment());

        assignment.area_id = Some(31);
        assert!(assignment.is_temporary_area_assignment());
        assert!(!assignment.is_shift_pool_assignment());
    }

    #[test]
    fn test_deserialize_area_assignment_with_times() {
        let json = r#"{
            "id": 2,
            "staffId": 12,
            "assignmentDate": "2025-11-01",
            "shiftType": "day",
            "areaType": "service",
            "areaId": 5,
            "startTime": "09:00",
            "endTime": "13:00",
            "notes": "cover for transport"
        }"#;

        let assignment: ManualAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.area_type, Some(AreaType::Service));
        assert!(assignment.is_temporary_area_assignment());
        assert_eq!(
            assignment.start_time,
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
        assert_eq!(assignment.explicit_shift_times(), None);
    }
}
