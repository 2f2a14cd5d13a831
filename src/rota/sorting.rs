//! Roster ordering.

use std::cmp::Ordering;

use crate::models::ShiftAssignment;

use super::cycle::effective_offset;

/// Compares two roster entries.
///
/// Order: status (active, pending, expired), supervisors before everyone
/// else, effective offset ascending, last name, first name, then staff id so
/// the order is total.
pub fn compare_entries(a: &ShiftAssignment, b: &ShiftAssignment) -> Ordering {
    a.status
        .sort_rank()
        .cmp(&b.status.sort_rank())
        .then_with(|| b.staff.is_supervisor().cmp(&a.staff.is_supervisor()))
        .then_with(|| effective_offset(&a.staff).cmp(&effective_offset(&b.staff)))
        .then_with(|| a.staff.last_name.cmp(&b.staff.last_name))
        .then_with(|| a.staff.first_name.cmp(&b.staff.first_name))
        .then_with(|| a.staff.id.cmp(&b.staff.id))
}

/// Sorts a panel in roster order.
pub fn sort_entries(entries: &mut [ShiftAssignment]) {
    entries.sort_by(compare_entries);
}
