//! Pool-staff processor.
//!
//! Pool staff float between areas but still appear in the day/night panels.
//! Each works in one of two modes:
//!
//! * contracted-hours mode: on duty when they have contracted hours for the
//!   weekday, in the panel of their assigned shift;
//! * cycle mode: the ordinary cycle verdict for their own shift.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{ContractedHoursMap, ShiftAssignment, ShiftType, StaffId, StaffMember};

use super::context::RotaContext;
use super::cycle::is_staff_on_duty;
use super::shift_time::{has_contracted_hours_for_day, resolve_shift_times};
use super::status::calculate_shift_status;

/// Returns the panel a pool staff member is on duty in, if any.
///
/// Relief staff are never on duty outside manual assignments.
pub fn pool_staff_duty(
    staff: &StaffMember,
    date: NaiveDate,
    zero_date: NaiveDate,
    contracted_hours: &ContractedHoursMap,
) -> Option<ShiftType> {
    if staff.is_relief() {
        return None;
    }

    if staff.use_contracted_hours_for_shift {
        let shift = staff.shift.as_ref()?;
        has_contracted_hours_for_day(staff.id, date, contracted_hours).then_some(shift.shift_type)
    } else {
        is_staff_on_duty(staff, date, zero_date).duty()
    }
}

/// Places pool staff who are on duty on the context's date.
///
/// Non-pool and already-handled staff are skipped; emitted staff are added
/// to `handled`.
pub fn process_pool_staff<'s>(
    pool_staff: impl IntoIterator<Item = &'s StaffMember>,
    ctx: &RotaContext<'_>,
    handled: &mut HashSet<StaffId>,
) -> Vec<ShiftAssignment> {
    let mut entries = Vec::new();

    for staff in pool_staff {
        if !staff.is_pool_staff || handled.contains(&staff.id) {
            continue;
        }

        let Some(shift_type) =
            pool_staff_duty(staff, ctx.target_date, ctx.zero_date, ctx.contracted_hours)
        else {
            continue;
        };

        let Some(times) = resolve_shift_times(staff, shift_type, ctx) else {
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

    debug!(date = %ctx.target_date, count = entries.len(), "Processed pool staff");
    entries
}
