//! Configuration types for the rota engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `rota.yaml`.

use chrono::NaiveTime;
use serde::Deserialize;

use crate::models::time_format::clock_time;
use crate::models::{ShiftTimes, ShiftType};

/// One default duty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShiftWindow {
    /// Window start.
    #[serde(with = "clock_time")]
    pub start: NaiveTime,
    /// Window end; earlier than `start` when the window crosses midnight.
    #[serde(with = "clock_time")]
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// Returns the window as a start/end pair.
    pub fn times(&self) -> ShiftTimes {
        ShiftTimes::new(self.start, self.end)
    }
}

/// Default windows for the two panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShiftWindows {
    /// Day panel window.
    pub day: ShiftWindow,
    /// Night panel window.
    pub night: ShiftWindow,
}

/// Settings for placing contracted-hours-only staff in a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClassificationConfig {
    /// On an overlap tie, a window starting before this time is a day duty.
    #[serde(with = "clock_time")]
    pub day_panel_cutoff: NaiveTime,
}

/// The complete rota configuration.
///
/// # Example
///
/// ```
/// use rota_engine::config::RotaConfig;
/// use rota_engine::models::ShiftType;
///
/// let config = RotaConfig::default();
/// let night = config.window(ShiftType::Night);
/// assert_eq!(night.start.to_string(), "20:00:00");
/// assert_eq!(config.early_finish_minutes, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RotaConfig {
    /// Default day and night windows.
    pub shift_times: ShiftWindows,
    /// Contracted-hours classification settings.
    pub classification: ClassificationConfig,
    /// Minutes cut from the end of a duty on the staff member's early-finish day.
    pub early_finish_minutes: u32,
}

impl RotaConfig {
    /// Returns the default window for a panel.
    pub fn window(&self, shift_type: ShiftType) -> &ShiftWindow {
        match shift_type {
            ShiftType::Day => &self.shift_times.day,
            ShiftType::Night => &self.shift_times.night,
        }
    }

    /// Returns the configured day/night tie-break cutoff.
    pub fn day_panel_cutoff(&self) -> NaiveTime {
        self.classification.day_panel_cutoff
    }
}

fn clock(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for RotaConfig {
    fn default() -> Self {
        Self {
            shift_times: ShiftWindows {
                day: ShiftWindow {
                    start: clock(8),
                    end: clock(20),
                },
                night: ShiftWindow {
                    start: clock(20),
                    end: clock(8),
                },
            },
            classification: ClassificationConfig {
                day_panel_cutoff: clock(14),
            },
            early_finish_minutes: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows() {
        let config = RotaConfig::default();
        let day = config.window(ShiftType::Day).times();
        let night = config.window(ShiftType::Night).times();

        assert_eq!(day.start, clock(8));
        assert_eq!(day.end, clock(20));
        assert!(!day.is_overnight());
        assert!(night.is_overnight());
        assert_eq!(config.day_panel_cutoff(), clock(14));
    }

    #[test]
    fn test_deserialize_custom_windows() {
        let yaml = r#"
shift_times:
  day: { start: "07:00", end: "19:00" }
  night: { start: "19:00", end: "07:00" }
classification:
  day_panel_cutoff: "13:30"
early_finish_minutes: 30
"#;
        let config: RotaConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.shift_times.day.start, clock(7));
        assert_eq!(config.shift_times.night.end, clock(7));
        assert_eq!(
            config.day_panel_cutoff(),
            NaiveTime::from_hms_opt(13, 30, 0).unwrap()
        );
        assert_eq!(config.early_finish_minutes, 30);
    }

    #[test]
    fn test_rejects_bad_clock_time() {
        let yaml = r#"
shift_times:
  day: { start: "7am", end: "19:00" }
  night: { start: "19:00", end: "07:00" }
classification:
  day_panel_cutoff: "14:00"
early_finish_minutes: 60
"#;
        let result: Result<RotaConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
