//! Roster orchestrator.
//!
//! Fetches everything a roster needs in one round trip per collection, runs
//! the processors in priority order and assembles the sorted [`DayRota`].

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::config::RotaConfig;
use crate::error::{RotaError, RotaResult};
use crate::models::{
    Absence, DayRota, Shift, ShiftAssignment, ShiftId, ShiftType, StaffId, StaffMember, StaffStatus,
};
use crate::store::{RotaStore, StaffFilter};

use super::StaffMap;
use super::context::RotaContext;
use super::contracted_hours::process_contracted_hours_staff;
use super::cycle::calculate_active_shifts;
use super::cycle_staff::process_cycle_staff;
use super::dates::{date_range, days_since_zero, previous_day};
use super::manual_assignment::{
    ManualAssignmentsForDate, previous_night_manual_assignments, process_manual_assignments,
};
use super::pool_staff::process_pool_staff;
use super::previous_night::{merge_previous_night, previous_night_cycle_staff};
use super::sorting::sort_entries;

fn active_shift_ids(shifts: &[Shift], days: i64) -> Vec<ShiftId> {
    calculate_active_shifts(shifts, days)
        .iter()
        .map(|shift| shift.id)
        .collect()
}

fn ids_of<'a>(groups: impl IntoIterator<Item = &'a Vec<StaffMember>>) -> BTreeSet<StaffId> {
    groups
        .into_iter()
        .flat_map(|group| group.iter().map(|staff| staff.id))
        .collect()
}

fn resolve<'m>(
    ids: &'m BTreeSet<StaffId>,
    staff_map: &'m StaffMap,
) -> impl Iterator<Item = &'m StaffMember> {
    ids.iter().filter_map(|id| staff_map.get(id))
}

/// Builds the roster for `date` with statuses derived against `now`.
///
/// The pipeline runs in a fixed order, each step skipping staff already
/// placed by an earlier one:
///
/// 1. manual overrides;
/// 2. cycle-based staff from today's active shifts and supervisors;
/// 3. pool staff;
/// 4. shiftless staff working contracted hours (excluding allocated staff).
///
/// Yesterday's nights still running at `now` go to `previous_night_shift`,
/// unless the staff member is also on tonight's night panel.
/// Entries are then flagged for permanent allocations, annotated with
/// absences, split by panel and sorted.
///
/// # Errors
///
/// Returns [`RotaError::ZeroDateNotConfigured`] when the store has no zero
/// date, and propagates any store failure unchanged.
///
/// # Example
///
/// ```
/// use rota_engine::config::RotaConfig;
/// use rota_engine::rota::build_day_rota;
/// use rota_engine::store::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::from_json(r#"{
///     "appZeroDate": "2025-10-26",
///     "shifts": [{ "id": 1, "name": "Day A", "type": "day",
///                  "cycleType": "4-on-4-off", "cycleLength": 8 }],
///     "staff": [{ "id": 1, "firstName": "Sam", "lastName": "Reed",
///                 "status": "Regular", "shiftId": 1 }]
/// }"#).unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 10, 27).unwrap();
/// let now = date.and_hms_opt(9, 0, 0).unwrap();
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let rota = runtime
///     .block_on(build_day_rota(&store, &RotaConfig::default(), date, now))
///     .unwrap();
/// assert_eq!(rota.day_shifts.len(), 1);
/// ```
pub async fn build_day_rota<S>(
    store: &S,
    config: &RotaConfig,
    date: NaiveDate,
    now: NaiveDateTime,
) -> RotaResult<DayRota>
where
    S: RotaStore + ?Sized,
{
    let started = Instant::now();

    let zero_date = store
        .get_app_zero_date()
        .await?
        .ok_or(RotaError::ZeroDateNotConfigured)?;
    let yesterday = previous_day(date);

    let shifts = store.find_all_shifts(false).await?;
    let today_shift_ids = active_shift_ids(&shifts, days_since_zero(date, zero_date));
    let yesterday_shift_ids = active_shift_ids(&shifts, days_since_zero(yesterday, zero_date));

    let (
        today_shift_staff,
        yesterday_shift_staff,
        supervisors,
        pool_staff,
        shiftless,
        assignments,
        allocations,
    ) = tokio::try_join!(
        store.find_staff_by_shift_ids(&today_shift_ids),
        store.find_staff_by_shift_ids(&yesterday_shift_ids),
        store.find_all_staff(StaffFilter::status(StaffStatus::Supervisor)),
        store.find_all_staff(StaffFilter::pool_staff()),
        store.find_staff_with_no_shift(),
        store.get_manual_assignments_for_date(date),
        store.find_all_allocations(),
    )?;

    let mut manual = ManualAssignmentsForDate::split(assignments, date);
    manual.today.sort_by_key(|assignment| assignment.id);
    manual.yesterday_nights.sort_by_key(|assignment| assignment.id);

    let cycle_ids = ids_of([&today_shift_staff, &supervisors]);
    let yesterday_cycle_ids = ids_of([&yesterday_shift_staff, &supervisors]);
    let pool_ids = ids_of([&pool_staff]);
    let shiftless_ids = ids_of([&shiftless]);

    let mut staff_map: StaffMap = BTreeMap::new();
    for staff in [today_shift_staff, yesterday_shift_staff, supervisors, pool_staff, shiftless]
        .into_iter()
        .flatten()
    {
        staff_map.entry(staff.id).or_insert(staff);
    }

    let missing: Vec<StaffId> = manual
        .staff_ids()
        .filter(|id| !staff_map.contains_key(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !missing.is_empty() {
        debug!(count = missing.len(), "Loading staff referenced by manual assignments");
        for staff in store.find_staff_by_ids(&missing).await? {
            staff_map.entry(staff.id).or_insert(staff);
        }
    }

    let all_ids: Vec<StaffId> = staff_map.keys().copied().collect();
    let contracted_hours = store.batch_fetch_contracted_hours(&all_ids).await?;
    let allocated: HashSet<StaffId> = allocations.iter().map(|a| a.staff_id).collect();

    let ctx = RotaContext::new(date, zero_date, now, config, &contracted_hours);
    let mut handled: HashSet<StaffId> = HashSet::new();

    let mut today = process_manual_assignments(&manual.today, &staff_map, &ctx, &mut handled);
    today.extend(process_cycle_staff(resolve(&cycle_ids, &staff_map), &ctx, &mut handled));
    today.extend(process_pool_staff(resolve(&pool_ids, &staff_map), &ctx, &mut handled));
    today.extend(process_contracted_hours_staff(
        resolve(&shiftless_ids, &staff_map),
        &allocated,
        &ctx,
        &mut handled,
    ));

    let tonight: HashSet<StaffId> = today
        .iter()
        .filter(|entry| entry.shift_type == ShiftType::Night)
        .map(|entry| entry.staff.id)
        .collect();
    let previous_night = merge_previous_night(
        previous_night_manual_assignments(&manual.yesterday_nights, &staff_map, &ctx),
        previous_night_cycle_staff(
            resolve(&yesterday_cycle_ids, &staff_map),
            &manual.handled_yesterday,
            &ctx,
        ),
        &tonight,
    );

    let (mut day_shifts, mut night_shifts): (Vec<_>, Vec<_>) = today
        .into_iter()
        .partition(|entry| entry.shift_type == ShiftType::Day);
    let mut previous_night_shift = previous_night;

    let rostered: Vec<StaffId> = day_shifts
        .iter()
        .chain(night_shifts.iter())
        .chain(previous_night_shift.iter())
        .map(|entry| entry.staff.id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let absences = store.find_absences_for_date(&rostered, date).await?;

    for entry in day_shifts
        .iter_mut()
        .chain(night_shifts.iter_mut())
        .chain(previous_night_shift.iter_mut())
    {
        annotate(entry, &allocated, absences.get(&entry.staff.id));
    }

    sort_entries(&mut day_shifts);
    sort_entries(&mut night_shifts);
    sort_entries(&mut previous_night_shift);

    let rota = DayRota {
        date,
        day_shifts,
        night_shifts,
        previous_night_shift,
    };

    info!(
        date = %date,
        day = rota.day_shifts.len(),
        night = rota.night_shifts.len(),
        previous_night = rota.previous_night_shift.len(),
        absent = absences.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Built day rota"
    );

    Ok(rota)
}

fn annotate(
    entry: &mut ShiftAssignment,
    allocated: &HashSet<StaffId>,
    absence: Option<&Absence>,
) {
    entry.has_area_allocation = allocated.contains(&entry.staff.id);
    entry.current_absence = absence.cloned();
}

/// Builds one [`DayRota`] per date from `start` to `end` inclusive.
///
/// # Errors
///
/// Returns [`RotaError::InvalidDateRange`] when `end` is before `start`,
/// and otherwise the first error from [`build_day_rota`].
pub async fn build_rota_range<S>(
    store: &S,
    config: &RotaConfig,
    start: NaiveDate,
    end: NaiveDate,
    now: NaiveDateTime,
) -> RotaResult<Vec<DayRota>>
where
    S: RotaStore + ?Sized,
{
    if end < start {
        return Err(RotaError::InvalidDateRange { start, end });
    }

    let mut days = Vec::new();
    for date in date_range(start, end) {
        days.push(build_day_rota(store, config, date, now).await?);
    }

    info!(start = %start, end = %end, days = days.len(), "Built rota range");
    Ok(days)
}
