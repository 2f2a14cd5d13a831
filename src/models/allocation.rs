//! Permanent area allocations.

use serde::{Deserialize, Serialize};

use super::manual_assignment::AreaType;
use super::staff::StaffId;

/// A staff member's permanent allocation to a department or service.
///
/// The engine only looks at `staff_id`: allocated staff are kept out of the
/// contracted-hours pool and flagged on their roster entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaAllocation {
    /// Unique identifier for the allocation.
    pub id: i64,
    /// The allocated staff member.
    pub staff_id: StaffId,
    /// Department or service.
    pub area_type: AreaType,
    /// Id of the department or service.
    pub area_id: i64,
}
