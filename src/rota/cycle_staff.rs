//! Cycle-based processing for non-pool staff.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{ShiftAssignment, StaffId, StaffMember};

use super::context::RotaContext;
use super::cycle::is_staff_on_duty;
use super::shift_time::resolve_shift_times;
use super::status::calculate_shift_status;

/// Places staff from today's cycle-active shifts and supervisors.
///
/// Pool staff and staff already handled are skipped. A staff member is
/// emitted only when the cycle puts them on duty and the shift-time resolver
/// yields times; emitted staff are added to `handled`.
pub fn process_cycle_staff<'s>(
    candidates: impl IntoIterator<Item = &'s StaffMember>,
    ctx: &RotaContext<'_>,
    handled: &mut HashSet<StaffId>,
) -> Vec<ShiftAssignment> {
    let mut entries = Vec::new();

    for staff in candidates {
        if staff.is_pool_staff || handled.contains(&staff.id) {
            continue;
        }

        let Some(shift_type) = is_staff_on_duty(staff, ctx.target_date, ctx.zero_date).duty() else {
            continue;
        };

        let Some(times) = resolve_shift_times(staff, shift_type, ctx) else {
            debug!(staff_id = staff.id, "On duty by cycle but not working by contracted hours");
            continue;
        };

        handled.insert(staff.id);
        entries.push(ShiftAssignment::new(
            staff.clone(),
            shift_type,
            times,
            calculate_shift_status(ctx.target_date, times, ctx.now),
            ctx.target_date,
        ));
    }

    debug!(date = %ctx.target_date, count = entries.len(), "Processed cycle staff");
    entries
}
