//! Shift model and related types.
//!
//! A shift is a named group of staff that rotate together through a duty
//! cycle, e.g. "Day A" on a 4-on-4-off pattern.

use serde::{Deserialize, Serialize};

/// Identifier of a shift record.
pub type ShiftId = i64;

/// The panel a duty belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// Daytime duty (08:00-20:00 by default).
    Day,
    /// Overnight duty (20:00-08:00 by default).
    Night,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Day => write!(f, "day"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

/// The repeating duty pattern a shift follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleType {
    /// Four days on, four days off (8-day cycle).
    #[serde(rename = "4-on-4-off")]
    FourOnFourOff,
    /// Four days, four off, four nights, four off (16-day cycle).
    #[serde(rename = "16-day-supervisor")]
    SixteenDaySupervisor,
    /// No cycle; staff work only through manual assignments.
    #[serde(rename = "relief")]
    Relief,
    /// No cycle; hours come from elsewhere.
    #[serde(rename = "fixed")]
    Fixed,
}

impl CycleType {
    /// Returns the canonical cycle length in days, or `None` for patterns
    /// that are not cycle-driven.
    ///
    /// # Example
    ///
    /// ```
    /// use rota_engine::models::CycleType;
    ///
    /// assert_eq!(CycleType::FourOnFourOff.cycle_length(), Some(8));
    /// assert_eq!(CycleType::SixteenDaySupervisor.cycle_length(), Some(16));
    /// assert_eq!(CycleType::Relief.cycle_length(), None);
    /// ```
    pub fn cycle_length(self) -> Option<u32> {
        match self {
            CycleType::FourOnFourOff => Some(8),
            CycleType::SixteenDaySupervisor => Some(16),
            CycleType::Relief | CycleType::Fixed => None,
        }
    }
}

/// A rota shift: the cycle and panel shared by the staff assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: ShiftId,
    /// Display name, e.g. "Day A".
    pub name: String,
    /// The panel the shift's staff appear in.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// The duty pattern, if the shift is cycle-driven.
    #[serde(default)]
    pub cycle_type: Option<CycleType>,
    /// Stored cycle length; a shift without one is never cycle-active.
    #[serde(default)]
    pub cycle_length: Option<u32>,
    /// Offset in days from the zero date at which the cycle starts.
    #[serde(default)]
    pub days_offset: i64,
    /// Whether the shift is in use.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Shift {
    /// Returns the cycle type when the shift carries complete cycle data.
    pub fn cycle(&self) -> Option<CycleType> {
        match (self.cycle_type, self.cycle_length) {
            (Some(cycle_type), Some(length)) if length > 0 => Some(cycle_type),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": 3,
            "name": "Night B",
            "type": "night",
            "cycleType": "4-on-4-off",
            "cycleLength": 8,
            "daysOffset": 4
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.shift_type, ShiftType::Night);
        assert_eq!(shift.cycle_type, Some(CycleType::FourOnFourOff));
        assert_eq!(shift.days_offset, 4);
        assert!(shift.is_active);
    }

    #[test]
    fn test_shift_without_cycle_fields_has_no_cycle() {
        let json = r#"{ "id": 9, "name": "Relief", "type": "day", "cycleType": "relief" }"#;
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.cycle(), None);
        assert_eq!(shift.days_offset, 0);
    }

    #[test]
    fn test_zero_cycle_length_has_no_cycle() {
        let shift = Shift {
            id: 1,
            name: "Broken".to_string(),
            shift_type: ShiftType::Day,
            cycle_type: Some(CycleType::FourOnFourOff),
            cycle_length: Some(0),
            days_offset: 0,
            is_active: true,
        };
        assert_eq!(shift.cycle(), None);
    }

    #[test]
    fn test_cycle_type_serialization() {
        assert_eq!(
            serde_json::to_string(&CycleType::FourOnFourOff).unwrap(),
            "\"4-on-4-off\""
        );
        assert_eq!(
            serde_json::to_string(&CycleType::SixteenDaySupervisor).unwrap(),
            "\"16-day-supervisor\""
        );
    }

    #[test]
    fn test_shift_type_display() {
        assert_eq!(ShiftType::Day.to_string(), "day");
        assert_eq!(ShiftType::Night.to_string(), "night");
    }
}
