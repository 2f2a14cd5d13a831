//! Cycle calculator.
//!
//! Pure functions that turn "days since the zero date" and an offset into a
//! position within a repeating duty cycle, and that position into an on/off
//! duty verdict. No I/O; the zero date is always an explicit argument.

use chrono::NaiveDate;

use crate::models::{CycleType, Shift, ShiftType, StaffMember, StaffStatus};

use super::dates::days_since_zero;

/// Length of the 4-on-4-off cycle.
pub const REGULAR_CYCLE_LENGTH: i64 = 8;

/// Length of the 16-day supervisor cycle.
pub const SUPERVISOR_CYCLE_LENGTH: i64 = 16;

/// Number of consecutive days in one on-duty block.
pub const ON_DUTY_BLOCK: i64 = 4;

/// The supervisor offsets that together cover every day of the 16-day cycle.
pub const SUPERVISOR_OFFSET_GROUPS: [i64; 4] = [0, 4, 8, 12];

/// Offset of the regular "Shift A" group.
pub const SHIFT_A_OFFSET: i64 = 0;

/// Offset of the regular "Shift B" group.
pub const SHIFT_B_OFFSET: i64 = 4;

/// A duty verdict from the cycle calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    /// Whether the cycle puts the staff member on duty.
    pub on_duty: bool,
    /// The panel of the duty; `None` when off duty.
    pub shift_type: Option<ShiftType>,
}

impl CycleStatus {
    /// The off-duty verdict.
    pub const OFF: CycleStatus = CycleStatus {
        on_duty: false,
        shift_type: None,
    };

    /// An on-duty verdict for the given panel.
    pub fn on(shift_type: ShiftType) -> Self {
        Self {
            on_duty: true,
            shift_type: Some(shift_type),
        }
    }

    /// Returns the panel when on duty.
    pub fn duty(&self) -> Option<ShiftType> {
        if self.on_duty { self.shift_type } else { None }
    }
}

/// Returns the zero-based position within a cycle.
///
/// Always non-negative, including for dates before the zero date and for
/// negative or oversized offsets. A non-positive cycle length yields 0.
///
/// # Example
///
/// ```
/// use rota_engine::rota::cycle::cycle_position;
///
/// assert_eq!(cycle_position(10, 2, 8), 0);
/// assert_eq!(cycle_position(-1, 0, 8), 7);
/// assert_eq!(cycle_position(3, -13, 16), 0);
/// ```
pub fn cycle_position(days_since_zero: i64, offset: i64, cycle_length: i64) -> i64 {
    if cycle_length <= 0 {
        return 0;
    }
    (days_since_zero - offset).rem_euclid(cycle_length)
}

/// Returns the duty verdict for a cycle type on a given day.
///
/// * `4-on-4-off`: positions 0-3 on duty as `configured_type`, 4-7 off.
/// * `16-day-supervisor`: positions 0-3 on `day`, 8-11 on `night`, others off.
/// * `relief` and `fixed`: always off.
pub fn calculate_cycle_status(
    cycle_type: CycleType,
    days_since_zero: i64,
    offset: i64,
    configured_type: ShiftType,
) -> CycleStatus {
    match cycle_type {
        CycleType::FourOnFourOff => {
            let position = cycle_position(days_since_zero, offset, REGULAR_CYCLE_LENGTH);
            if position < ON_DUTY_BLOCK {
                CycleStatus::on(configured_type)
            } else {
                CycleStatus::OFF
            }
        }
        CycleType::SixteenDaySupervisor => {
            match cycle_position(days_since_zero, offset, SUPERVISOR_CYCLE_LENGTH) {
                0..=3 => CycleStatus::on(ShiftType::Day),
                8..=11 => CycleStatus::on(ShiftType::Night),
                _ => CycleStatus::OFF,
            }
        }
        CycleType::Relief | CycleType::Fixed => CycleStatus::OFF,
    }
}

/// Returns the offset a staff member's cycle is measured from.
///
/// Supervisors use their supervisor offset (default 0). Everyone else uses a
/// set, non-zero personal offset, falling back to their shift's offset; a
/// personal offset of exactly 0 means "use the shift offset".
pub fn effective_offset(staff: &StaffMember) -> i64 {
    if staff.is_supervisor() {
        return staff.supervisor_offset.unwrap_or(0);
    }

    match staff.days_offset {
        Some(offset) if offset != 0 => offset,
        _ => staff.shift.as_ref().map_or(0, |shift| shift.days_offset),
    }
}

/// The cycle a staff member follows, with its offset and configured panel.
fn staff_cycle(staff: &StaffMember) -> Option<(CycleType, i64, ShiftType)> {
    match staff.status {
        StaffStatus::Relief => None,
        StaffStatus::Supervisor => Some((
            CycleType::SixteenDaySupervisor,
            effective_offset(staff),
            ShiftType::Day,
        )),
        StaffStatus::Regular => {
            let shift = staff.shift.as_ref()?;
            (shift.cycle_type == Some(CycleType::FourOnFourOff)).then(|| {
                (
                    CycleType::FourOnFourOff,
                    effective_offset(staff),
                    shift.shift_type,
                )
            })
        }
    }
}

/// Returns a staff member's cycle verdict for `date`.
///
/// Relief staff are always off. Supervisors follow the 16-day cycle at their
/// supervisor offset. Regular staff whose shift is `4-on-4-off` follow the
/// 8-day cycle with their effective offset, on duty in their shift's panel.
/// Everyone else is off.
///
/// # Example
///
/// ```
/// use rota_engine::models::{CycleType, Shift, ShiftType, StaffMember, StaffStatus};
/// use rota_engine::rota::cycle::is_staff_on_duty;
/// use chrono::NaiveDate;
///
/// let shift = Shift {
///     id: 1,
///     name: "Day A".to_string(),
///     shift_type: ShiftType::Day,
///     cycle_type: Some(CycleType::FourOnFourOff),
///     cycle_length: Some(8),
///     days_offset: 0,
///     is_active: true,
/// };
/// let staff = StaffMember {
///     id: 1,
///     first_name: "Sam".to_string(),
///     last_name: "Reed".to_string(),
///     status: StaffStatus::Regular,
///     shift_id: Some(1),
///     shift: Some(shift),
///     days_offset: None,
///     supervisor_offset: None,
///     custom_shift_start: None,
///     custom_shift_end: None,
///     use_contracted_hours_for_shift: false,
///     is_pool_staff: false,
///     early_finish_day: None,
///     is_active: true,
/// };
///
/// let zero = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
/// let on = is_staff_on_duty(&staff, NaiveDate::from_ymd_opt(2025, 10, 29).unwrap(), zero);
/// let off = is_staff_on_duty(&staff, NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(), zero);
/// assert_eq!(on.duty(), Some(ShiftType::Day));
/// assert!(!off.on_duty);
/// ```
pub fn is_staff_on_duty(staff: &StaffMember, date: NaiveDate, zero_date: NaiveDate) -> CycleStatus {
    match staff_cycle(staff) {
        Some((cycle_type, offset, configured_type)) => calculate_cycle_status(
            cycle_type,
            days_since_zero(date, zero_date),
            offset,
            configured_type,
        ),
        None => CycleStatus::OFF,
    }
}

/// Returns the 1-based day within the current on-duty block (1-4), or
/// `None` when the staff member's cycle has them off on `date`.
pub fn working_day_of_cycle(
    staff: &StaffMember,
    date: NaiveDate,
    zero_date: NaiveDate,
) -> Option<u8> {
    let (cycle_type, offset, _) = staff_cycle(staff)?;
    let length = i64::from(cycle_type.cycle_length()?);
    let position = cycle_position(days_since_zero(date, zero_date), offset, length);

    let within_block = match cycle_type {
        CycleType::FourOnFourOff if position < ON_DUTY_BLOCK => position,
        CycleType::SixteenDaySupervisor if position < ON_DUTY_BLOCK => position,
        CycleType::SixteenDaySupervisor if (8..12).contains(&position) => position - 8,
        _ => return None,
    };

    u8::try_from(within_block + 1).ok()
}

/// Returns true if a shift's cycle puts it on duty.
///
/// Shifts with incomplete cycle data, and relief or fixed shifts, are never
/// active. A supervisor shift is active when any of its four offset groups
/// is on duty.
pub fn is_shift_active_on_date(shift: &Shift, days_since_zero: i64) -> bool {
    let Some(cycle_type) = shift.cycle() else {
        return false;
    };

    match cycle_type {
        CycleType::SixteenDaySupervisor => SUPERVISOR_OFFSET_GROUPS.iter().any(|group| {
            calculate_cycle_status(
                cycle_type,
                days_since_zero,
                shift.days_offset + group,
                shift.shift_type,
            )
            .on_duty
        }),
        _ => {
            calculate_cycle_status(cycle_type, days_since_zero, shift.days_offset, shift.shift_type)
                .on_duty
        }
    }
}

/// Returns the shifts whose cycle is active on the given day.
pub fn calculate_active_shifts(shifts: &[Shift], days_since_zero: i64) -> Vec<Shift> {
    let active: Vec<Shift> = shifts
        .iter()
        .filter(|shift| is_shift_active_on_date(shift, days_since_zero))
        .cloned()
        .collect();

    tracing::debug!(
        days_since_zero,
        active = active.len(),
        total = shifts.len(),
        "Calculated active shifts"
    );

    active
}

/// Returns which regular shift group (Shift A = 0, Shift B = 4) a supervisor
/// lines up with on a given day.
///
/// Positions 0-4 and 8-12 of the 16-day cycle align with Shift A, positions
/// 5-7 and 13-15 with Shift B. Supervisors in offset groups 1 and 3
/// (offsets 4-7 and 12-15) take the opposite group.
///
/// # Example
///
/// ```
/// use rota_engine::rota::cycle::supervisor_regular_shift_offset;
///
/// assert_eq!(supervisor_regular_shift_offset(0, 0), 0);
/// assert_eq!(supervisor_regular_shift_offset(5, 0), 4);
/// assert_eq!(supervisor_regular_shift_offset(4, 4), 4);
/// ```
pub fn supervisor_regular_shift_offset(days_since_zero: i64, supervisor_offset: i64) -> i64 {
    let position = cycle_position(days_since_zero, supervisor_offset, SUPERVISOR_CYCLE_LENGTH);
    let group = supervisor_offset.rem_euclid(SUPERVISOR_CYCLE_LENGTH) / ON_DUTY_BLOCK;

    let base = match position {
        5..=7 | 13..=15 => SHIFT_B_OFFSET,
        _ => SHIFT_A_OFFSET,
    };

    match (group, base) {
        (1 | 3, SHIFT_A_OFFSET) => SHIFT_B_OFFSET,
        (1 | 3, _) => SHIFT_A_OFFSET,
        _ => base,
    }
}
