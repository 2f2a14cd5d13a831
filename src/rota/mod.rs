//! Duty resolution for the rota engine.
//!
//! This module contains the cycle calculator, the shift-time resolver, the
//! four staff processors (manual overrides, cycle-based staff, pool staff
//! and contracted-hours-only staff), previous-night continuation, roster
//! ordering and the orchestrator that ties them together.
//!
//! Everything except the orchestrator is synchronous and pure; the zero
//! date and "now" are always explicit inputs.

use std::collections::BTreeMap;

use crate::models::{StaffId, StaffMember};

pub mod contracted_hours;
pub mod context;
pub mod cycle;
pub mod cycle_staff;
pub mod dates;
pub mod manual_assignment;
pub mod orchestrator;
pub mod pool_staff;
pub mod previous_night;
pub mod shift_time;
pub mod sorting;
pub mod status;
pub mod working;

/// Staff loaded for one roster computation, keyed by id.
pub type StaffMap = BTreeMap<StaffId, StaffMember>;

pub use context::RotaContext;
pub use contracted_hours::classify_contracted_window;
pub use cycle::{
    CycleStatus, calculate_active_shifts, calculate_cycle_status, cycle_position, effective_offset,
    is_shift_active_on_date, is_staff_on_duty, supervisor_regular_shift_offset,
    working_day_of_cycle,
};
pub use orchestrator::{build_day_rota, build_rota_range};
pub use shift_time::{
    contracted_hours_for_day, default_shift_times, has_contracted_hours_for_day,
    resolve_shift_times,
};
pub use status::calculate_shift_status;
pub use working::is_staff_working_on_date;
