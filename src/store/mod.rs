//! Data access for roster computation.
//!
//! The engine reads everything through the [`RotaStore`] trait, one call per
//! collection, and never writes back. [`InMemoryStore`] is a snapshot-backed
//! implementation used by tests, benchmarks and the HTTP demo state.

mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::RotaResult;
use crate::models::{
    Absence, AreaAllocation, ContractedHoursMap, ManualAssignment, Shift, ShiftId, StaffId,
    StaffMember, StaffStatus,
};

pub use memory::InMemoryStore;

/// Filter for [`RotaStore::find_all_staff`]. Unset fields match everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaffFilter {
    /// Only staff with this status.
    pub status: Option<StaffStatus>,
    /// Only staff with this pool flag.
    pub is_pool_staff: Option<bool>,
}

impl StaffFilter {
    /// All staff with the given status.
    pub fn status(status: StaffStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// All pool staff.
    pub fn pool_staff() -> Self {
        Self {
            is_pool_staff: Some(true),
            ..Self::default()
        }
    }

    /// Returns true if the staff member passes the filter.
    pub fn matches(&self, staff: &StaffMember) -> bool {
        self.status.is_none_or(|status| staff.status == status)
            && self.is_pool_staff.is_none_or(|pool| staff.is_pool_staff == pool)
    }
}

/// Read-only access to the data a roster is computed from.
///
/// Staff are returned with `shift` populated where they have one. Failures
/// surface as [`crate::error::RotaError::DataAccess`] and abort the roster.
#[async_trait]
pub trait RotaStore: Send + Sync {
    /// The cycle epoch, if configured.
    async fn get_app_zero_date(&self) -> RotaResult<Option<NaiveDate>>;

    /// All shifts, optionally including inactive ones.
    async fn find_all_shifts(&self, include_inactive: bool) -> RotaResult<Vec<Shift>>;

    /// Active staff assigned to any of the given shifts.
    async fn find_staff_by_shift_ids(&self, shift_ids: &[ShiftId]) -> RotaResult<Vec<StaffMember>>;

    /// Active staff matching the filter.
    async fn find_all_staff(&self, filter: StaffFilter) -> RotaResult<Vec<StaffMember>>;

    /// Active staff with no shift.
    async fn find_staff_with_no_shift(&self) -> RotaResult<Vec<StaffMember>>;

    /// Staff with the given ids.
    async fn find_staff_by_ids(&self, ids: &[StaffId]) -> RotaResult<Vec<StaffMember>>;

    /// Overrides covering `date` or the day before.
    async fn get_manual_assignments_for_date(
        &self,
        date: NaiveDate,
    ) -> RotaResult<Vec<ManualAssignment>>;

    /// Contracted hours for the given staff, keyed by staff id.
    async fn batch_fetch_contracted_hours(
        &self,
        staff_ids: &[StaffId],
    ) -> RotaResult<ContractedHoursMap>;

    /// All permanent area allocations.
    async fn find_all_allocations(&self) -> RotaResult<Vec<AreaAllocation>>;

    /// The absence active on `date` for each of the given staff, where one exists.
    async fn find_absences_for_date(
        &self,
        staff_ids: &[StaffId],
        date: NaiveDate,
    ) -> RotaResult<HashMap<StaffId, Absence>>;
}
