//! Shift status derivation.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{ShiftStatus, ShiftTimes};

use super::dates::shift_window;

/// Derives a duty's status relative to `now`.
///
/// The duty starts at `date` + start and ends at `date` + end, or on the
/// following day when the window is overnight. Before the start it is
/// pending, after the end it is expired, otherwise active (both boundary
/// instants count as active).
///
/// # Example
///
/// ```
/// use rota_engine::models::{ShiftStatus, ShiftTimes};
/// use rota_engine::rota::status::calculate_shift_status;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
/// let night = ShiftTimes::new(
///     NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// );
/// let next_morning = NaiveDate::from_ymd_opt(2025, 10, 27)
///     .unwrap()
///     .and_hms_opt(6, 0, 0)
///     .unwrap();
/// assert_eq!(calculate_shift_status(date, night, next_morning), ShiftStatus::Active);
/// ```
pub fn calculate_shift_status(
    date: NaiveDate,
    times: ShiftTimes,
    now: NaiveDateTime,
) -> ShiftStatus {
    let (start, end) = shift_window(date, times);

    if now < start {
        ShiftStatus::Pending
    } else if now > end {
        ShiftStatus::Expired
    } else {
        ShiftStatus::Active
    }
}
