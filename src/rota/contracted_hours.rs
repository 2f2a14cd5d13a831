//! Contracted-hours-only processor.
//!
//! Staff without a shift who work purely from their weekly contracted hours
//! are placed in the panel their window overlaps most.

use std::collections::HashSet;

use chrono::NaiveTime;
use tracing::debug;

use crate::config::RotaConfig;
use crate::models::{ShiftAssignment, ShiftTimes, ShiftType, StaffId, StaffMember};

use super::context::RotaContext;
use super::dates::{minutes_of_day, span_overlap_minutes};
use super::shift_time::contracted_hours_for_day;
use super::status::calculate_shift_status;

/// Classifies a contracted window into the day or night panel.
///
/// The window is overlapped (in whole minutes) with the configured day and
/// night windows. The configured windows may wrap midnight; the contracted
/// window is taken as written, so one ending after midnight overlaps
/// nothing. The larger overlap wins. On a tie, including no overlap at all,
/// a window starting before the cutoff is `day` and any other is `night`.
///
/// # Example
///
/// ```
/// use rota_engine::config::RotaConfig;
/// use rota_engine::models::{ShiftTimes, ShiftType};
/// use rota_engine::rota::contracted_hours::classify_contracted_window;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let config = RotaConfig::default();
/// let office = ShiftTimes::new(t(9, 0), t(17, 0));
/// let late = ShiftTimes::new(t(22, 0), t(6, 0));
/// assert_eq!(classify_contracted_window(office, &config), ShiftType::Day);
/// assert_eq!(classify_contracted_window(late, &config), ShiftType::Night);
/// ```
pub fn classify_contracted_window(window: ShiftTimes, config: &RotaConfig) -> ShiftType {
    let span = (window.start, window.end);
    let day = config.window(ShiftType::Day);
    let night = config.window(ShiftType::Night);

    let day_overlap = span_overlap_minutes(span, (day.start, day.end));
    let night_overlap = span_overlap_minutes(span, (night.start, night.end));

    if day_overlap > night_overlap {
        ShiftType::Day
    } else if night_overlap > day_overlap {
        ShiftType::Night
    } else {
        tie_break(window.start, config.day_panel_cutoff())
    }
}

fn tie_break(start: NaiveTime, cutoff: NaiveTime) -> ShiftType {
    if minutes_of_day(start) < minutes_of_day(cutoff) {
        ShiftType::Day
    } else {
        ShiftType::Night
    }
}

/// Places shiftless, non-pool, non-relief staff from their contracted hours.
///
/// Staff in `allocated` (permanently allocated to an area) and staff already
/// handled are skipped, as is anyone without a contracted row for the
/// weekday. Emitted staff are added to `handled`.
pub fn process_contracted_hours_staff<'s>(
    candidates: impl IntoIterator<Item = &'s StaffMember>,
    allocated: &HashSet<StaffId>,
    ctx: &RotaContext<'_>,
    handled: &mut HashSet<StaffId>,
) -> Vec<ShiftAssignment> {
    let mut entries = Vec::new();

    for staff in candidates {
        if staff.shift_id.is_some()
            || staff.shift.is_some()
            || staff.is_pool_staff
            || staff.is_relief()
            || allocated.contains(&staff.id)
            || handled.contains(&staff.id)
        {
            continue;
        }

        let rows = ctx.contracted_hours_for(staff.id);
        let Some(row) = contracted_hours_for_day(rows, ctx.target_date) else {
            continue;
        };

        let window = ShiftTimes::new(row.start_time, row.end_time);
        let times = staff
            .custom_shift_times()
            .map(|(start, end)| ShiftTimes::new(start, end))
            .unwrap_or(window);
        let shift_type = classify_contracted_window(window, ctx.config);

        debug!(staff_id = staff.id, %shift_type, "Classified contracted hours");

        handled.insert(staff.id);
        entries.push(ShiftAssignment::new(
            staff.clone(),
            shift_type,
            times,
            calculate_shift_status(ctx.target_date, times, ctx.now),
            ctx.target_date,
        ));
    }

    debug!(date = %ctx.target_date, count = entries.len(), "Processed contracted-hours staff");
    entries
}
