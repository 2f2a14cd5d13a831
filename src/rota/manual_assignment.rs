//! Manual-assignment processor.
//!
//! Turns operator overrides into roster entries. Overrides run first in the
//! pipeline, so every staff member they touch is marked handled and no
//! computed pathway can place them again for the same date.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{
    ManualAssignment, ShiftAssignment, ShiftStatus, ShiftTimes, ShiftType, StaffId, StaffMember,
};

use super::StaffMap;
use super::context::RotaContext;
use super::dates::previous_day;
use super::shift_time::{default_shift_times, resolve_shift_times};
use super::status::calculate_shift_status;

/// Overrides relevant to one roster date, split by the day they apply to.
#[derive(Debug, Clone, Default)]
pub struct ManualAssignmentsForDate {
    /// Overrides covering the target date.
    pub today: Vec<ManualAssignment>,
    /// Night overrides covering the day before the target date.
    pub yesterday_nights: Vec<ManualAssignment>,
    /// Staff with any override covering the day before the target date.
    pub handled_yesterday: HashSet<StaffId>,
}

impl ManualAssignmentsForDate {
    /// Splits overrides fetched for `date` and the day before.
    pub fn split(assignments: Vec<ManualAssignment>, date: NaiveDate) -> Self {
        let yesterday = previous_day(date);
        let mut split = Self::default();

        for assignment in assignments {
            if assignment.covers_date(yesterday) {
                split.handled_yesterday.insert(assignment.staff_id);
                if assignment.shift_type == ShiftType::Night {
                    split.yesterday_nights.push(assignment.clone());
                }
            }
            if assignment.covers_date(date) {
                split.today.push(assignment);
            }
        }

        split
    }

    /// Every staff id referenced by an override.
    pub fn staff_ids(&self) -> impl Iterator<Item = StaffId> + '_ {
        self.today
            .iter()
            .chain(self.yesterday_nights.iter())
            .map(|assignment| assignment.staff_id)
    }
}

/// Resolves the panel times for an override.
///
/// Explicit override times win, then the staff member's resolved times, then
/// the default window for the override's panel; a shift-pool override always
/// produces times.
pub fn manual_assignment_times(
    assignment: &ManualAssignment,
    staff: &StaffMember,
    ctx: &RotaContext<'_>,
) -> ShiftTimes {
    if let Some((start, end)) = assignment.explicit_shift_times() {
        return ShiftTimes::new(start, end);
    }

    resolve_shift_times(staff, assignment.shift_type, ctx)
        .unwrap_or_else(|| default_shift_times(assignment.shift_type, ctx.config))
}

fn manual_entry(
    assignment: &ManualAssignment,
    staff: &StaffMember,
    ctx: &RotaContext<'_>,
) -> ShiftAssignment {
    let times = manual_assignment_times(assignment, staff, ctx);
    let status = calculate_shift_status(ctx.target_date, times, ctx.now);

    ShiftAssignment::new(
        staff.clone(),
        assignment.shift_type,
        times,
        status,
        ctx.target_date,
    )
    .manual()
}

/// Processes today's overrides.
///
/// Every override whose staff member resolves marks them handled.
/// Temporary area overrides stop there; shift-pool overrides also emit a
/// manual panel entry.
pub fn process_manual_assignments(
    assignments: &[ManualAssignment],
    staff_map: &StaffMap,
    ctx: &RotaContext<'_>,
    handled: &mut HashSet<StaffId>,
) -> Vec<ShiftAssignment> {
    let mut entries = Vec::new();

    for assignment in assignments {
        let Some(staff) = staff_map.get(&assignment.staff_id) else {
            warn!(
                assignment_id = assignment.id,
                staff_id = assignment.staff_id,
                "Manual assignment references unknown staff, skipping"
            );
            continue;
        };

        if !handled.insert(staff.id) {
            debug!(staff_id = staff.id, "Staff already handled by an earlier override");
            continue;
        }

        if assignment.is_temporary_area_assignment() {
            debug!(
                staff_id = staff.id,
                area_id = assignment.area_id,
                "Temporary area assignment, no panel entry"
            );
            continue;
        }

        entries.push(manual_entry(assignment, staff, ctx));
    }

    debug!(date = %ctx.target_date, count = entries.len(), "Processed manual assignments");
    entries
}

/// Returns yesterday's night overrides that are still running at `now`.
///
/// `ctx` is today's context; times and status are resolved against
/// yesterday's date.
pub fn previous_night_manual_assignments(
    assignments: &[ManualAssignment],
    staff_map: &StaffMap,
    ctx: &RotaContext<'_>,
) -> Vec<ShiftAssignment> {
    let yesterday_ctx = ctx.for_date(previous_day(ctx.target_date));

    assignments
        .iter()
        .filter(|assignment| {
            assignment.shift_type == ShiftType::Night && assignment.is_shift_pool_assignment()
        })
        .filter_map(|assignment| {
            let staff = staff_map.get(&assignment.staff_id)?;
            let entry = manual_entry(assignment, staff, &yesterday_ctx);
            (entry.status == ShiftStatus::Active).then_some(entry)
        })
        .collect()
}
