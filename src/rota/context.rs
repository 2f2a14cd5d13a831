//! Per-computation context threaded through the rota processors.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::RotaConfig;
use crate::models::{ContractedHoursMap, StaffContractedHours, StaffId};

/// Read-only inputs shared by every processor for one roster date.
#[derive(Debug, Clone, Copy)]
pub struct RotaContext<'a> {
    /// The date being rostered.
    pub target_date: NaiveDate,
    /// The cycle epoch.
    pub zero_date: NaiveDate,
    /// The instant statuses are derived against.
    pub now: NaiveDateTime,
    /// Shift windows and classification settings.
    pub config: &'a RotaConfig,
    /// Contracted hours prefetched for every staff member in play.
    pub contracted_hours: &'a ContractedHoursMap,
}

impl<'a> RotaContext<'a> {
    /// Creates a context for `target_date`.
    pub fn new(
        target_date: NaiveDate,
        zero_date: NaiveDate,
        now: NaiveDateTime,
        config: &'a RotaConfig,
        contracted_hours: &'a ContractedHoursMap,
    ) -> Self {
        Self {
            target_date,
            zero_date,
            now,
            config,
            contracted_hours,
        }
    }

    /// The same context re-targeted at another date, keeping `now`.
    pub fn for_date(&self, date: NaiveDate) -> Self {
        Self {
            target_date: date,
            ..*self
        }
    }

    /// The prefetched contracted-hours rows for a staff member.
    pub fn contracted_hours_for(&self, staff_id: StaffId) -> &'a [StaffContractedHours] {
        self.contracted_hours
            .get(&staff_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
