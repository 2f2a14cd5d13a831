//! Previous-night continuation.
//!
//! Night duties that started yesterday run into today's morning. They are
//! listed separately so today's panels only hold duties starting today.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{ShiftAssignment, ShiftStatus, ShiftType, StaffId, StaffMember};

use super::context::RotaContext;
use super::cycle::is_staff_on_duty;
use super::dates::previous_day;
use super::shift_time::resolve_shift_times;
use super::status::calculate_shift_status;

/// Returns yesterday's cycle night duties still active at today's `now`.
///
/// `ctx` is today's context. Candidates are the staff from yesterday's
/// cycle-active shifts and supervisors. Staff with any override yesterday
/// (`handled_yesterday`) and pool staff working contracted hours are
/// skipped; their night, if any, comes from the override pathway.
pub fn previous_night_cycle_staff<'s>(
    candidates: impl IntoIterator<Item = &'s StaffMember>,
    handled_yesterday: &HashSet<StaffId>,
    ctx: &RotaContext<'_>,
) -> Vec<ShiftAssignment> {
    let yesterday = previous_day(ctx.target_date);
    let yesterday_ctx = ctx.for_date(yesterday);

    candidates
        .into_iter()
        .filter(|staff| !handled_yesterday.contains(&staff.id))
        .filter(|staff| !(staff.is_pool_staff && staff.use_contracted_hours_for_shift))
        .filter(|staff| {
            is_staff_on_duty(staff, yesterday, ctx.zero_date).duty() == Some(ShiftType::Night)
        })
        .filter_map(|staff| {
            let times = resolve_shift_times(staff, ShiftType::Night, &yesterday_ctx)?;
            let status = calculate_shift_status(yesterday, times, ctx.now);
            (status == ShiftStatus::Active).then(|| {
                ShiftAssignment::new(staff.clone(), ShiftType::Night, times, status, yesterday)
            })
        })
        .collect()
}

/// Merges override and cycle continuations, keeping the first entry per
/// staff member. Overrides go first.
///
/// Staff in `tonight` are already on today's night panel and are dropped,
/// so nobody is listed in both.
pub fn merge_previous_night(
    manual: Vec<ShiftAssignment>,
    cycle: Vec<ShiftAssignment>,
    tonight: &HashSet<StaffId>,
) -> Vec<ShiftAssignment> {
    let mut seen = tonight.clone();
    let merged: Vec<ShiftAssignment> = manual
        .into_iter()
        .chain(cycle)
        .filter(|entry| seen.insert(entry.staff.id))
        .collect();

    debug!(count = merged.len(), "Computed previous night continuation");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotaConfig;
    use crate::models::{ContractedHoursMap, CycleType, Shift, StaffStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn night_staff(id: StaffId) -> StaffMember {
        StaffMember {
            id,
            first_name: "Night".to_string(),
            last_name: format!("Staff{}", id),
            status: StaffStatus::Regular,
            shift_id: Some(2),
            shift: Some(Shift {
                id: 2,
                name: "Night A".to_string(),
                shift_type: ShiftType::Night,
                cycle_type: Some(CycleType::FourOnFourOff),
                cycle_length: Some(8),
                days_offset: 0,
                is_active: true,
            }),
            days_offset: None,
            supervisor_offset: None,
            custom_shift_start: None,
            custom_shift_end: None,
            use_contracted_hours_for_shift: false,
            is_pool_staff: false,
            early_finish_day: None,
            is_active: true,
        }
    }

    fn continuation(
        staff: &[StaffMember],
        handled: &HashSet<StaffId>,
        today: &str,
        now: &str,
    ) -> Vec<ShiftAssignment> {
        let config = RotaConfig::default();
        let hours = ContractedHoursMap::new();
        let ctx = RotaContext::new(
            make_date(today),
            make_date("2025-10-26"),
            make_datetime(now),
            &config,
            &hours,
        );
        previous_night_cycle_staff(staff, handled, &ctx)
    }

    #[test]
    fn test_night_from_last_block_day_continues_into_morning() {
        // Working day 4 is 2025-10-29; the night runs to 08:00 on the 30th.
        let entries = continuation(
            &[night_staff(1)],
            &HashSet::new(),
            "2025-10-30",
            "2025-10-30 07:00:00",
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].assignment_date, make_date("2025-10-29"));
        assert_eq!(entries[0].status, ShiftStatus::Active);
        assert_eq!(entries[0].shift_type, ShiftType::Night);
    }

    #[test]
    fn test_finished_night_is_dropped() {
        let entries = continuation(
            &[night_staff(1)],
            &HashSet::new(),
            "2025-10-30",
            "2025-10-30 08:01:00",
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_day_staff_and_manually_handled_staff_excluded() {
        let mut day_staff = night_staff(1);
        if let Some(shift) = day_staff.shift.as_mut() {
            shift.shift_type = ShiftType::Day;
        }
        let handled = HashSet::from([2]);

        let entries = continuation(
            &[day_staff, night_staff(2)],
            &handled,
            "2025-10-30",
            "2025-10-30 07:00:00",
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_contracted_mode_pool_staff_excluded() {
        let mut pool = night_staff(1);
        pool.is_pool_staff = true;
        pool.use_contracted_hours_for_shift = true;

        let entries = continuation(&[pool], &HashSet::new(), "2025-10-30", "2025-10-30 07:00:00");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_merge_keeps_first_entry_per_staff() {
        let a = continuation(
            &[night_staff(1)],
            &HashSet::new(),
            "2025-10-30",
            "2025-10-30 07:00:00",
        );
        let mut manual = a.clone();
        manual[0].is_manual_assignment = true;

        let merged = merge_previous_night(manual, a, &HashSet::new());
        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_manual_assignment);
    }

    #[test]
    fn test_merge_drops_staff_already_on_tonights_panel() {
        let cycle = continuation(
            &[night_staff(1), night_staff(2)],
            &HashSet::new(),
            "2025-10-30",
            "2025-10-30 07:00:00",
        );
        let mut manual = continuation(
            &[night_staff(3)],
            &HashSet::new(),
            "2025-10-30",
            "2025-10-30 07:00:00",
        );
        manual[0].is_manual_assignment = true;
        let tonight = HashSet::from([2, 3]);

        let merged = merge_previous_night(manual, cycle, &tonight);
        let ids: Vec<StaffId> = merged.iter().map(|entry| entry.staff.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
