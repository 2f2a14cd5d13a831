//! Shift-time resolver.
//!
//! Resolves the start and end time of a staff member's duty on a date using
//! a fixed priority chain:
//!
//! 1. Custom start and end on the staff record.
//! 2. Contracted hours for the target weekday. Staff with contracted hours
//!    on other weekdays only are not working at all.
//! 3. The configured default window for the panel, shortened on the staff
//!    member's early-finish day.

use chrono::{Datelike, NaiveDate};

use crate::config::RotaConfig;
use crate::models::{
    ContractedHoursMap, ShiftTimes, ShiftType, StaffContractedHours, StaffId, StaffMember,
};

use super::context::RotaContext;
use super::cycle::working_day_of_cycle;
use super::dates::subtract_minutes;

/// Returns the configured default window for a panel.
pub fn default_shift_times(shift_type: ShiftType, config: &RotaConfig) -> ShiftTimes {
    config.window(shift_type).times()
}

/// Returns the first contracted-hours row for the ISO weekday of `date`.
pub fn contracted_hours_for_day(
    rows: &[StaffContractedHours],
    date: NaiveDate,
) -> Option<&StaffContractedHours> {
    let weekday = date.weekday();
    rows.iter().find(|row| row.day_of_week == weekday)
}

/// Returns true if the staff member has a contracted-hours row for the
/// weekday of `date`.
pub fn has_contracted_hours_for_day(
    staff_id: StaffId,
    date: NaiveDate,
    contracted_hours: &ContractedHoursMap,
) -> bool {
    contracted_hours
        .get(&staff_id)
        .is_some_and(|rows| contracted_hours_for_day(rows, date).is_some())
}

/// Resolves a staff member's duty times for the context's target date.
///
/// Returns `None` when the staff member has contracted hours but none for
/// this weekday, which suppresses any cycle-implied duty.
///
/// # Example
///
/// ```
/// use rota_engine::config::RotaConfig;
/// use rota_engine::models::{ContractedHoursMap, ShiftType, StaffMember, StaffStatus};
/// use rota_engine::rota::{RotaContext, shift_time::resolve_shift_times};
/// use chrono::NaiveDate;
///
/// let staff: StaffMember = serde_json::from_value(serde_json::json!({
///     "id": 1, "firstName": "Jo", "lastName": "Hale", "status": "Regular"
/// })).unwrap();
/// let config = RotaConfig::default();
/// let hours = ContractedHoursMap::new();
/// let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
/// let now = date.and_hms_opt(12, 0, 0).unwrap();
/// let ctx = RotaContext::new(date, date, now, &config, &hours);
///
/// let times = resolve_shift_times(&staff, ShiftType::Night, &ctx).unwrap();
/// assert_eq!(times.start.to_string(), "20:00:00");
/// assert_eq!(times.end.to_string(), "08:00:00");
/// ```
pub fn resolve_shift_times(
    staff: &StaffMember,
    shift_type: ShiftType,
    ctx: &RotaContext<'_>,
) -> Option<ShiftTimes> {
    if let Some((start, end)) = staff.custom_shift_times() {
        return Some(ShiftTimes::new(start, end));
    }

    let rows = ctx.contracted_hours_for(staff.id);
    if !rows.is_empty() {
        return contracted_hours_for_day(rows, ctx.target_date)
            .map(|row| ShiftTimes::new(row.start_time, row.end_time));
    }

    let mut times = default_shift_times(shift_type, ctx.config);

    if let Some(early_finish_day) = staff.early_finish_day {
        if working_day_of_cycle(staff, ctx.target_date, ctx.zero_date) == Some(early_finish_day) {
            times.end = subtract_minutes(times.end, ctx.config.early_finish_minutes);
            tracing::debug!(
                staff_id = staff.id,
                date = %ctx.target_date,
                end = %times.end,
                "Applied early finish"
            );
        }
    }

    Some(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CycleType, Shift, StaffStatus};
    use chrono::{NaiveTime, Weekday};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn create_staff(id: StaffId) -> StaffMember {
        StaffMember {
            id,
            first_name: "Test".to_string(),
            last_name: "Staff".to_string(),
            status: StaffStatus::Regular,
            shift_id: Some(1),
            shift: Some(Shift {
                id: 1,
                name: "Day A".to_string(),
                shift_type: ShiftType::Day,
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

    fn hours(
        staff_id: StaffId,
        day: Weekday,
        start: (u32, u32),
        end: (u32, u32),
    ) -> StaffContractedHours {
        StaffContractedHours {
            id: 0,
            staff_id,
            day_of_week: day,
            start_time: make_time(start.0, start.1),
            end_time: make_time(end.0, end.1),
        }
    }

    // 2025-10-26 is a Sunday and the zero date.
    fn resolve(
        staff: &StaffMember,
        shift_type: ShiftType,
        date: &str,
        map: &ContractedHoursMap,
    ) -> Option<ShiftTimes> {
        let config = RotaConfig::default();
        let date = make_date(date);
        let ctx = RotaContext::new(
            date,
            make_date("2025-10-26"),
            date.and_hms_opt(12, 0, 0).unwrap(),
            &config,
            map,
        );
        resolve_shift_times(staff, shift_type, &ctx)
    }

    #[test]
    fn test_custom_times_win_over_everything() {
        let mut staff = create_staff(1);
        staff.custom_shift_start = Some(make_time(7, 0));
        staff.custom_shift_end = Some(make_time(15, 0));
        staff.early_finish_day = Some(1);

        let mut map = ContractedHoursMap::new();
        map.insert(1, vec![hours(1, Weekday::Mon, (9, 0), (17, 0))]);

        let times = resolve(&staff, ShiftType::Day, "2025-10-26", &map).unwrap();
        assert_eq!(times, ShiftTimes::new(make_time(7, 0), make_time(15, 0)));
    }

    #[test]
    fn test_contracted_hours_for_weekday() {
        let staff = create_staff(1);
        let mut map = ContractedHoursMap::new();
        map.insert(
            1,
            vec![
                hours(1, Weekday::Sun, (10, 0), (18, 0)),
                hours(1, Weekday::Sun, (6, 0), (9, 0)),
            ],
        );

        let times = resolve(&staff, ShiftType::Day, "2025-10-26", &map).unwrap();
        assert_eq!(times, ShiftTimes::new(make_time(10, 0), make_time(18, 0)));
    }

    #[test]
    fn test_contracted_hours_on_other_days_suppress_duty() {
        let staff = create_staff(1);
        let mut map = ContractedHoursMap::new();
        map.insert(1, vec![hours(1, Weekday::Mon, (9, 0), (17, 0))]);

        assert_eq!(resolve(&staff, ShiftType::Day, "2025-10-26", &map), None);
        assert!(resolve(&staff, ShiftType::Day, "2025-10-27", &map).is_some());
    }

    #[test]
    fn test_default_windows() {
        let staff = create_staff(1);
        let map = ContractedHoursMap::new();

        assert_eq!(
            resolve(&staff, ShiftType::Day, "2025-10-26", &map),
            Some(ShiftTimes::new(make_time(8, 0), make_time(20, 0)))
        );
        assert_eq!(
            resolve(&staff, ShiftType::Night, "2025-10-26", &map),
            Some(ShiftTimes::new(make_time(20, 0), make_time(8, 0)))
        );
    }

    #[test]
    fn test_early_finish_only_on_matching_working_day() {
        let mut staff = create_staff(1);
        staff.early_finish_day = Some(2);
        let map = ContractedHoursMap::new();

        // Working day 1 of the block.
        assert_eq!(
            resolve(&staff, ShiftType::Day, "2025-10-26", &map).unwrap().end,
            make_time(20, 0)
        );
        // Working day 2 of the block.
        assert_eq!(
            resolve(&staff, ShiftType::Day, "2025-10-27", &map).unwrap().end,
            make_time(19, 0)
        );
        // Working day 2 of the next block.
        assert_eq!(
            resolve(&staff, ShiftType::Night, "2025-11-04", &map).unwrap().end,
            make_time(7, 0)
        );
    }

    #[test]
    fn test_has_contracted_hours_for_day() {
        let mut map = ContractedHoursMap::new();
        map.insert(5, vec![hours(5, Weekday::Wed, (9, 0), (17, 0))]);

        assert!(has_contracted_hours_for_day(5, make_date("2025-10-29"), &map));
        assert!(!has_contracted_hours_for_day(5, make_date("2025-10-30"), &map));
        assert!(!has_contracted_hours_for_day(6, make_date("2025-10-29"), &map));
    }
}
