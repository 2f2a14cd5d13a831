//! String boundary for dates, clock times and weekdays.
//!
//! The engine works on `chrono` values throughout. Strings only appear when
//! records are deserialized from the data store or an HTTP request, and when
//! the roster is serialized back out. The serde helper modules here are used
//! with `#[serde(with = "...")]` on the model fields.

use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};

use crate::error::{RotaError, RotaResult};

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Example
///
/// ```
/// use rota_engine::models::parse_date;
///
/// let date = parse_date("2025-10-26").unwrap();
/// assert_eq!(date.to_string(), "2025-10-26");
/// assert!(parse_date("26/10/2025").is_err());
/// ```
pub fn parse_date(value: &str) -> RotaResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| RotaError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses an `HH:MM` or `HH:MM:SS` clock time.
///
/// # Example
///
/// ```
/// use rota_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:00").unwrap(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// assert_eq!(parse_clock_time("13:59:59").unwrap(), NaiveTime::from_hms_opt(13, 59, 59).unwrap());
/// assert!(parse_clock_time("8am").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> RotaResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| RotaError::InvalidTime {
            value: value.to_string(),
        })
}

/// Formats a clock time as `HH:MM`, keeping seconds only when they are set.
pub fn format_clock_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Converts an ISO day number (1 = Monday .. 7 = Sunday) into a [`Weekday`].
pub fn weekday_from_iso(day: u8) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Serde helpers for a required `HH:MM[:SS]` field.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes as `HH:MM` (or `HH:MM:SS` when seconds are non-zero).
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock_time(*time))
    }

    /// Deserializes from `HH:MM` or `HH:MM:SS`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_clock_time(&value).map_err(serde::de::Error::custom)
    }
}

/// Serde helpers for an optional `HH:MM[:SS]` field.
///
/// Pair with `#[serde(default)]` so a missing field reads as `None`.
pub mod option_clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `Some` as a clock string and `None` as null.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&super::format_clock_time(*t)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes null or a clock string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|v| super::parse_clock_time(&v).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Serde helpers for an ISO day-of-week number (1 = Monday .. 7 = Sunday).
pub mod iso_weekday {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes the weekday as its ISO number.
    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(day.number_from_monday())
    }

    /// Deserializes an ISO number, rejecting anything outside 1-7.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let day = u8::deserialize(deserializer)?;
        super::weekday_from_iso(day).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid day of week {day}: expected 1-7"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_parse_clock_time_accepts_both_forms() {
        assert_eq!(parse_clock_time("20:00").unwrap(), make_time(20, 0, 0));
        assert_eq!(parse_clock_time("20:00:00").unwrap(), make_time(20, 0, 0));
        assert_eq!(parse_clock_time(" 07:30 ").unwrap(), make_time(7, 30, 0));
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        for bad in ["", "24:00", "7", "07:60", "noon"] {
            match parse_clock_time(bad) {
                Err(RotaError::InvalidTime { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidTime for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("20251026").is_err());
        assert_eq!(
            parse_date("2025-10-26").unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 26).unwrap()
        );
    }

    #[test]
    fn test_format_clock_time_drops_zero_seconds() {
        assert_eq!(format_clock_time(make_time(8, 0, 0)), "08:00");
        assert_eq!(format_clock_time(make_time(13, 59, 59)), "13:59:59");
    }

    #[test]
    fn test_weekday_from_iso() {
        assert_eq!(weekday_from_iso(1), Some(Weekday::Mon));
        assert_eq!(weekday_from_iso(7), Some(Weekday::Sun));
        assert_eq!(weekday_from_iso(0), None);
        assert_eq!(weekday_from_iso(8), None);
    }
}
