//! Roster output models.
//!
//! This module contains the [`DayRota`] type and the [`ShiftAssignment`]
//! entries it is made of, which together capture everything the engine
//! produces for one calendar date.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::absence::Absence;
use super::shift::ShiftType;
use super::staff::StaffMember;
use super::time_format::clock_time;

/// A resolved start/end pair for one duty.
///
/// # Example
///
/// ```
/// use rota_engine::models::ShiftTimes;
/// use chrono::NaiveTime;
///
/// let night = ShiftTimes::new(
///     NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// );
/// assert!(night.is_overnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTimes {
    /// Clock time the duty starts.
    pub start: NaiveTime,
    /// Clock time the duty ends; earlier than `start` when it crosses midnight.
    pub end: NaiveTime,
}

impl ShiftTimes {
    /// Creates a new start/end pair.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns true when the window ends on the following calendar day.
    ///
    /// Compared at minute granularity, so `20:00`-`08:00` is overnight and
    /// `08:00`-`08:00` is not.
    pub fn is_overnight(&self) -> bool {
        crate::rota::dates::minutes_of_day(self.end)
            < crate::rota::dates::minutes_of_day(self.start)
    }
}

/// Where a duty sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    /// Not started yet.
    Pending,
    /// In progress.
    Active,
    /// Finished.
    Expired,
}

impl ShiftStatus {
    /// Position of the status in roster ordering: active, then pending,
    /// then expired.
    pub fn sort_rank(self) -> u8 {
        match self {
            ShiftStatus::Active => 0,
            ShiftStatus::Pending => 1,
            ShiftStatus::Expired => 2,
        }
    }
}

/// One staff member's place in a panel of the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    /// The staff member on duty.
    pub staff: StaffMember,
    /// The panel the entry belongs to.
    pub shift_type: ShiftType,
    /// Start time of the duty.
    #[serde(with = "clock_time")]
    pub shift_start: NaiveTime,
    /// End time of the duty.
    #[serde(with = "clock_time")]
    pub shift_end: NaiveTime,
    /// Status relative to the roster's "now".
    pub status: ShiftStatus,
    /// True when the entry comes from a manual override.
    pub is_manual_assignment: bool,
    /// The date the duty starts on.
    pub assignment_date: NaiveDate,
    /// True when the staff member has a permanent area allocation.
    #[serde(default)]
    pub has_area_allocation: bool,
    /// An absence overlapping the roster date, if any.
    #[serde(default)]
    pub current_absence: Option<Absence>,
}

impl ShiftAssignment {
    /// Creates a computed (non-manual) entry with no allocation or absence.
    pub fn new(
        staff: StaffMember,
        shift_type: ShiftType,
        times: ShiftTimes,
        status: ShiftStatus,
        assignment_date: NaiveDate,
    ) -> Self {
        Self {
            staff,
            shift_type,
            shift_start: times.start,
            shift_end: times.end,
            status,
            is_manual_assignment: false,
            assignment_date,
            has_area_allocation: false,
            current_absence: None,
        }
    }

    /// Marks the entry as coming from a manual override.
    pub fn manual(mut self) -> Self {
        self.is_manual_assignment = true;
        self
    }

    /// Returns the entry's start/end pair.
    pub fn times(&self) -> ShiftTimes {
        ShiftTimes::new(self.shift_start, self.shift_end)
    }
}

/// The complete roster for one calendar date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRota {
    /// The roster date.
    pub date: NaiveDate,
    /// Day panel entries, sorted.
    pub day_shifts: Vec<ShiftAssignment>,
    /// Night panel entries, sorted.
    pub night_shifts: Vec<ShiftAssignment>,
    /// Yesterday's night duties still running at "now", sorted.
    pub previous_night_shift: Vec<ShiftAssignment>,
}

impl DayRota {
    /// Total number of entries across all three lists.
    pub fn len(&self) -> usize {
        self.day_shifts.len() + self.night_shifts.len() + self.previous_night_shift.len()
    }

    /// Returns true when nobody is rostered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates every entry in panel order: day, night, previous night.
    pub fn entries(&self) -> impl Iterator<Item = &ShiftAssignment> {
        self.day_shifts
            .iter()
            .chain(self.night_shifts.iter())
            .chain(self.previous_night_shift.iter())
    }
}
