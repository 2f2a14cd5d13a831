//! Snapshot-backed [`RotaStore`] implementation.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{RotaError, RotaResult};
use crate::models::{
    Absence, AreaAllocation, ContractedHoursMap, ManualAssignment, Shift, ShiftId,
    StaffContractedHours, StaffId, StaffMember,
};
use crate::rota::dates::previous_day;

use super::{RotaStore, StaffFilter};

/// An in-memory snapshot of every collection the engine reads.
///
/// Deserializes from camelCase JSON with one array per collection.
///
/// # Example
///
/// ```
/// use rota_engine::store::InMemoryStore;
///
/// let store = InMemoryStore::from_json(r#"{
///     "appZeroDate": "2025-10-26",
///     "shifts": [{ "id": 1, "name": "Day A", "type": "day",
///                  "cycleType": "4-on-4-off", "cycleLength": 8 }],
///     "staff": [{ "id": 1, "firstName": "Sam", "lastName": "Reed",
///                 "status": "Regular", "shiftId": 1 }]
/// }"#).unwrap();
/// assert_eq!(store.staff.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryStore {
    /// The cycle epoch.
    #[serde(default)]
    pub app_zero_date: Option<NaiveDate>,
    /// All shifts.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// All staff; `shift` is populated from `shifts` on read.
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    /// All manual overrides.
    #[serde(default)]
    pub manual_assignments: Vec<ManualAssignment>,
    /// All contracted-hours rows.
    #[serde(default)]
    pub contracted_hours: Vec<StaffContractedHours>,
    /// All permanent allocations.
    #[serde(default)]
    pub allocations: Vec<AreaAllocation>,
    /// All absences.
    #[serde(default)]
    pub absences: Vec<Absence>,
}

impl InMemoryStore {
    /// Parses a JSON snapshot.
    pub fn from_json(json: &str) -> RotaResult<Self> {
        serde_json::from_str(json).map_err(|e| RotaError::DataAccess {
            message: format!("invalid store snapshot: {}", e),
        })
    }

    fn with_shift(&self, staff: &StaffMember) -> StaffMember {
        let mut staff = staff.clone();
        staff.shift = staff
            .shift_id
            .and_then(|id| self.shifts.iter().find(|shift| shift.id == id))
            .cloned();
        staff
    }

    fn active_staff(&self, predicate: impl Fn(&StaffMember) -> bool) -> Vec<StaffMember> {
        self.staff
            .iter()
            .filter(|staff| staff.is_active && predicate(staff))
            .map(|staff| self.with_shift(staff))
            .collect()
    }
}

#[async_trait]
impl RotaStore for InMemoryStore {
    async fn get_app_zero_date(&self) -> RotaResult<Option<NaiveDate>> {
        Ok(self.app_zero_date)
    }

    async fn find_all_shifts(&self, include_inactive: bool) -> RotaResult<Vec<Shift>> {
        Ok(self
            .shifts
            .iter()
            .filter(|shift| include_inactive || shift.is_active)
            .cloned()
            .collect())
    }

    async fn find_staff_by_shift_ids(&self, shift_ids: &[ShiftId]) -> RotaResult<Vec<StaffMember>> {
        let ids: HashSet<ShiftId> = shift_ids.iter().copied().collect();
        Ok(self.active_staff(|staff| staff.shift_id.is_some_and(|id| ids.contains(&id))))
    }

    async fn find_all_staff(&self, filter: StaffFilter) -> RotaResult<Vec<StaffMember>> {
        Ok(self.active_staff(|staff| filter.matches(staff)))
    }

    async fn find_staff_with_no_shift(&self) -> RotaResult<Vec<StaffMember>> {
        Ok(self.active_staff(|staff| staff.shift_id.is_none()))
    }

    async fn find_staff_by_ids(&self, ids: &[StaffId]) -> RotaResult<Vec<StaffMember>> {
        let ids: HashSet<StaffId> = ids.iter().copied().collect();
        Ok(self
            .staff
            .iter()
            .filter(|staff| ids.contains(&staff.id))
            .map(|staff| self.with_shift(staff))
            .collect())
    }

    async fn get_manual_assignments_for_date(
        &self,
        date: NaiveDate,
    ) -> RotaResult<Vec<ManualAssignment>> {
        let yesterday = previous_day(date);
        Ok(self
            .manual_assignments
            .iter()
            .filter(|assignment| assignment.covers_date(date) || assignment.covers_date(yesterday))
            .cloned()
            .collect())
    }

    async fn batch_fetch_contracted_hours(
        &self,
        staff_ids: &[StaffId],
    ) -> RotaResult<ContractedHoursMap> {
        let ids: HashSet<StaffId> = staff_ids.iter().copied().collect();
        let mut map = ContractedHoursMap::new();
        for row in self.contracted_hours.iter().filter(|row| ids.contains(&row.staff_id)) {
            map.entry(row.staff_id).or_default().push(row.clone());
        }
        Ok(map)
    }

    async fn find_all_allocations(&self) -> RotaResult<Vec<AreaAllocation>> {
        Ok(self.allocations.clone())
    }

    async fn find_absences_for_date(
        &self,
        staff_ids: &[StaffId],
        date: NaiveDate,
    ) -> RotaResult<HashMap<StaffId, Absence>> {
        let ids: HashSet<StaffId> = staff_ids.iter().copied().collect();
        let mut map = HashMap::new();
        for absence in self
            .absences
            .iter()
            .filter(|absence| ids.contains(&absence.staff_id) && absence.is_active_on_date(date))
        {
            map.entry(absence.staff_id).or_insert_with(|| absence.clone());
        }
        Ok(map)
    }
}
