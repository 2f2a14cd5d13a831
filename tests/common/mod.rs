//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use rota_engine::error::{RotaError, RotaResult};
use rota_engine::models::{
    Absence, AreaAllocation, ContractedHoursMap, ManualAssignment, Shift, ShiftId, StaffId,
    StaffMember,
};
use rota_engine::store::{InMemoryStore, RotaStore, StaffFilter};

/// A ward snapshot with zero date Sunday 2025-10-26.
///
/// On Monday 2025-10-27 (cycle day 1):
///
/// | id | who                         | expected                         |
/// |----|-----------------------------|----------------------------------|
/// | 1  | Adams, Day A, allocated     | day panel, allocation flag       |
/// | 2  | Diaz, Night A               | night panel only                 |
/// | 3  | Zed, supervisor             | day panel, first                 |
/// | 4  | Baker, pool on Day A        | day panel                        |
/// | 5  | Clark, shiftless Mon 09-17  | day panel, contracted times      |
/// | 6  | Grant, shiftless, allocated | nowhere                          |
/// | 7  | Frost, Day A, night override| night panel, manual              |
/// | 8  | Irwin, Day A, area override | nowhere                          |
/// | 9  | Evans, Day A, annual leave  | day panel, absence attached      |
/// | 10 | Jones, relief               | nowhere                          |
/// | 11 | Hill, Day B, night override on 10-26 | previous night only     |
/// | 12 | Lee, Night C, last night 10-26 | previous night only           |
pub const WARD_SNAPSHOT: &str = r#"{
    "appZeroDate": "2025-10-26",
    "shifts": [
        { "id": 1, "name": "Day A", "type": "day", "cycleType": "4-on-4-off", "cycleLength": 8 },
        {
            "id": 2, "name": "Night A", "type": "night",
            "cycleType": "4-on-4-off", "cycleLength": 8
        },
        {
            "id": 3, "name": "Day B", "type": "day",
            "cycleType": "4-on-4-off", "cycleLength": 8, "daysOffset": 4
        },
        {
            "id": 4, "name": "Night C", "type": "night",
            "cycleType": "4-on-4-off", "cycleLength": 8, "daysOffset": 5
        }
    ],
    "staff": [
        { "id": 1, "firstName": "Ana", "lastName": "Adams", "status": "Regular", "shiftId": 1 },
        { "id": 2, "firstName": "Dev", "lastName": "Diaz", "status": "Regular", "shiftId": 2 },
        {
            "id": 3, "firstName": "Zoe", "lastName": "Zed",
            "status": "Supervisor", "supervisorOffset": 0
        },
        {
            "id": 4, "firstName": "Ben", "lastName": "Baker",
            "status": "Regular", "shiftId": 1, "isPoolStaff": true
        },
        { "id": 5, "firstName": "Cal", "lastName": "Clark", "status": "Regular" },
        { "id": 6, "firstName": "Gil", "lastName": "Grant", "status": "Regular" },
        { "id": 7, "firstName": "Fay", "lastName": "Frost", "status": "Regular", "shiftId": 1 },
        { "id": 8, "firstName": "Ivy", "lastName": "Irwin", "status": "Regular", "shiftId": 1 },
        { "id": 9, "firstName": "Eli", "lastName": "Evans", "status": "Regular", "shiftId": 1 },
        { "id": 10, "firstName": "Jo", "lastName": "Jones", "status": "Relief" },
        { "id": 11, "firstName": "Hal", "lastName": "Hill", "status": "Regular", "shiftId": 3 },
        { "id": 12, "firstName": "Lou", "lastName": "Lee", "status": "Regular", "shiftId": 4 }
    ],
    "manualAssignments": [
        { "id": 1, "staffId": 7, "assignmentDate": "2025-10-27", "shiftType": "night" },
        { "id": 2, "staffId": 8, "assignmentDate": "2025-10-27", "shiftType": "day",
          "areaType": "department", "areaId": 3 },
        { "id": 3, "staffId": 11, "assignmentDate": "2025-10-26", "shiftType": "night" }
    ],
    "contractedHours": [
        { "id": 1, "staffId": 5, "dayOfWeek": 1, "startTime": "09:00", "endTime": "17:00" },
        { "id": 2, "staffId": 6, "dayOfWeek": 1, "startTime": "09:00", "endTime": "17:00" }
    ],
    "allocations": [
        { "id": 1, "staffId": 1, "areaType": "department", "areaId": 1 },
        { "id": 2, "staffId": 6, "areaType": "service", "areaId": 2 }
    ],
    "absences": [
        { "id": 1, "staffId": 9, "absenceType": "annual_leave",
          "startDatetime": "2025-10-27T00:00:00", "endDatetime": "2025-10-27T23:59:59" }
    ]
}"#;

pub fn ward_store() -> InMemoryStore {
    InMemoryStore::from_json(WARD_SNAPSHOT).expect("Failed to load ward snapshot")
}

pub fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn make_datetime(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// A store whose zero date resolves but whose collections are unreachable.
pub struct FailingStore;

fn unavailable<T>() -> RotaResult<T> {
    Err(RotaError::DataAccess {
        message: "connection refused".to_string(),
    })
}

#[async_trait]
impl RotaStore for FailingStore {
    async fn get_app_zero_date(&self) -> RotaResult<Option<NaiveDate>> {
        Ok(Some(make_date("2025-10-26")))
    }

    async fn find_all_shifts(&self, _include_inactive: bool) -> RotaResult<Vec<Shift>> {
        unavailable()
    }

    async fn find_staff_by_shift_ids(
        &self,
        _shift_ids: &[ShiftId],
    ) -> RotaResult<Vec<StaffMember>> {
        unavailable()
    }

    async fn find_all_staff(&self, _filter: StaffFilter) -> RotaResult<Vec<StaffMember>> {
        unavailable()
    }

    async fn find_staff_with_no_shift(&self) -> RotaResult<Vec<StaffMember>> {
        unavailable()
    }

    async fn find_staff_by_ids(&self, _ids: &[StaffId]) -> RotaResult<Vec<StaffMember>> {
        unavailable()
    }

    async fn get_manual_assignments_for_date(
        &self,
        _date: NaiveDate,
    ) -> RotaResult<Vec<ManualAssignment>> {
        unavailable()
    }

    async fn batch_fetch_contracted_hours(
        &self,
        _staff_ids: &[StaffId],
    ) -> RotaResult<ContractedHoursMap> {
        unavailable()
    }

    async fn find_all_allocations(&self) -> RotaResult<Vec<AreaAllocation>> {
        unavailable()
    }

    async fn find_absences_for_date(
        &self,
        _staff_ids: &[StaffId],
        _date: NaiveDate,
    ) -> RotaResult<HashMap<StaffId, Absence>> {
        unavailable()
    }
}
