//! Date and clock arithmetic shared by the rota processors.
//!
//! Everything here works on `chrono` values. Clock comparisons are done at
//! minute granularity: seconds are carried through to the output but never
//! change which side of a boundary a time falls on.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::models::ShiftTimes;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Returns the minutes elapsed since midnight, ignoring seconds.
///
/// # Example
///
/// ```
/// use rota_engine::rota::dates::minutes_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(minutes_of_day(NaiveTime::from_hms_opt(13, 59, 59).unwrap()), 839);
/// assert_eq!(minutes_of_day(NaiveTime::from_hms_opt(14, 0, 0).unwrap()), 840);
/// ```
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Signed number of calendar days from `zero_date` to `date`.
pub fn days_since_zero(date: NaiveDate, zero_date: NaiveDate) -> i64 {
    date.signed_duration_since(zero_date).num_days()
}

/// The calendar day before `date`.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// The calendar day after `date`.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// Builds the start and end instants of a duty starting on `date`.
///
/// An overnight window ends on the following calendar day.
pub fn shift_window(date: NaiveDate, times: ShiftTimes) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(times.start);
    let end_date = if times.is_overnight() {
        next_day(date)
    } else {
        date
    };
    (start, end_date.and_time(times.end))
}

/// Moves a clock time back by `minutes`, wrapping past midnight.
pub fn subtract_minutes(time: NaiveTime, minutes: u32) -> NaiveTime {
    time.overflowing_sub_signed(TimeDelta::minutes(i64::from(minutes)))
        .0
}

/// Iterates every date from `start` to `end`, both inclusive.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Splits a clock window into non-wrapping minute intervals `[from, to)`.
///
/// A window whose end precedes its start is split at midnight; a window
/// whose start and end fall in the same minute is empty.
pub fn minute_intervals(start: NaiveTime, end: NaiveTime) -> Vec<(u32, u32)> {
    let start = minutes_of_day(start);
    let end = minutes_of_day(end);

    if start == end {
        Vec::new()
    } else if end < start {
        vec![(start, MINUTES_PER_DAY), (0, end)]
    } else {
        vec![(start, end)]
    }
}

/// Minutes a literal span shares with a clock window.
///
/// The span is taken as written: one whose end precedes its start covers
/// nothing. Only the window is split at midnight when it wraps.
///
/// # Example
///
/// ```
/// use rota_engine::rota::dates::span_overlap_minutes;
/// use chrono::NaiveTime;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// // 04:00-10:00 against the 20:00-08:00 night window
/// assert_eq!(span_overlap_minutes((t(4), t(10)), (t(20), t(8))), 4 * 60);
/// // 18:00-02:00 is not a forward span
/// assert_eq!(span_overlap_minutes((t(18), t(2)), (t(20), t(8))), 0);
/// ```
pub fn span_overlap_minutes(span: (NaiveTime, NaiveTime), window: (NaiveTime, NaiveTime)) -> u32 {
    let from = minutes_of_day(span.0);
    let to = minutes_of_day(span.1);

    minute_intervals(window.0, window.1)
        .iter()
        .map(|&(w_from, w_to)| to.min(w_to).saturating_sub(from.max(w_from)))
        .sum()
}
