//! Core data models for the rota engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod allocation;
mod contracted_hours;
mod manual_assignment;
mod roster;
mod shift;
mod staff;
pub mod time_format;

pub use absence::{Absence, AbsenceType};
pub use allocation::AreaAllocation;
pub use contracted_hours::{ContractedHoursMap, StaffContractedHours};
pub use manual_assignment::{AreaType, ManualAssignment};
pub use roster::{DayRota, ShiftAssignment, ShiftStatus, ShiftTimes};
pub use shift::{CycleType, Shift, ShiftId, ShiftType};
pub use staff::{StaffId, StaffMember, StaffStatus};
pub use time_format::{format_clock_time, parse_clock_time, parse_date, weekday_from_iso};
