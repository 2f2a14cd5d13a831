//! Staff-level working predicate used by allocation features.

use chrono::NaiveDate;

use crate::models::{ContractedHoursMap, Shift, ShiftType, StaffMember};

use super::cycle::{calculate_cycle_status, is_staff_on_duty};
use super::dates::days_since_zero;
use super::shift_time::has_contracted_hours_for_day;

/// Returns true if a staff member works at all on `date`.
///
/// * Relief staff never do.
/// * Contracted-hours staff (pool staff in contracted mode, or shiftless
///   staff with contracted rows) work when they have a row for the weekday.
/// * With a `reference_shift` carrying a cycle, that shift's cycle at its
///   own offset decides.
/// * Otherwise the staff member's own cycle verdict decides.
pub fn is_staff_working_on_date(
    staff: &StaffMember,
    date: NaiveDate,
    zero_date: NaiveDate,
    contracted_hours: &ContractedHoursMap,
    reference_shift: Option<&Shift>,
) -> bool {
    if staff.is_relief() {
        return false;
    }

    let has_rows = contracted_hours.get(&staff.id).is_some_and(|rows| !rows.is_empty());
    let works_contracted_hours = (staff.is_pool_staff && staff.use_contracted_hours_for_shift)
        || (staff.shift.is_none() && has_rows);
    if works_contracted_hours {
        return has_contracted_hours_for_day(staff.id, date, contracted_hours);
    }

    if let Some(shift) = reference_shift {
        if let Some(cycle_type) = shift.cycle_type {
            return calculate_cycle_status(
                cycle_type,
                days_since_zero(date, zero_date),
                shift.days_offset,
                ShiftType::Day,
            )
            .on_duty;
        }
    }

    is_staff_on_duty(staff, date, zero_date).on_duty
}
