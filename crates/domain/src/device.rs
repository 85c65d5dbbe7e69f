//! Device kinds, per-kind state, and status snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownKindError;

/// Set-point a thermostat starts with, in degrees Celsius.
pub const DEFAULT_TEMPERATURE: i32 = 24;

/// The closed set of device variants the hub knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Light,
    Thermostat,
    DoorLock,
}

impl DeviceKind {
    /// Every known kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Thermostat, Self::DoorLock];

    /// The lowercase type tag accepted by factories.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat",
            Self::DoorLock => "doorlock",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("Light"),
            Self::Thermostat => f.write_str("Thermostat"),
            Self::DoorLock => f.write_str("DoorLock"),
        }
    }
}

impl FromStr for DeviceKind {
    type Err = UnknownKindError;

    /// Parse a type tag, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKindError { tag: s.to_string() })
    }
}

/// Binary power state of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    On,
    #[default]
    Off,
}

impl Power {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for Power {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// Bolt state of a door lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => f.write_str("LOCKED"),
            Self::Unlocked => f.write_str("UNLOCKED"),
        }
    }
}

/// Point-in-time status reported by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceStatus {
    Light { power: Power },
    Thermostat { temperature: i32 },
    DoorLock { lock: LockState },
}

impl DeviceStatus {
    /// The kind of device this snapshot came from.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light { .. } => DeviceKind::Light,
            Self::Thermostat { .. } => DeviceKind::Thermostat,
            Self::DoorLock { .. } => DeviceKind::DoorLock,
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light { power } => write!(f, "Status: {power}"),
            Self::Thermostat { temperature } => write!(f, "Temp: {temperature}\u{b0}C"),
            Self::DoorLock { lock } => write!(f, "Status: {lock}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_kind_case_insensitively() {
        assert_eq!("light".parse::<DeviceKind>().unwrap(), DeviceKind::Light);
        assert_eq!("LIGHT".parse::<DeviceKind>().unwrap(), DeviceKind::Light);
        assert_eq!(
            "Thermostat".parse::<DeviceKind>().unwrap(),
            DeviceKind::Thermostat
        );
        assert_eq!(
            "DoorLock".parse::<DeviceKind>().unwrap(),
            DeviceKind::DoorLock
        );
    }

    #[test]
    fn should_reject_unknown_tag() {
        let err = "toaster".parse::<DeviceKind>().unwrap_err();
        assert_eq!(err.tag, "toaster");
    }

    #[test]
    fn should_reject_tag_with_separator() {
        assert!("door_lock".parse::<DeviceKind>().is_err());
        assert!("".parse::<DeviceKind>().is_err());
    }

    #[test]
    fn should_display_kind_in_pascal_case() {
        assert_eq!(DeviceKind::DoorLock.to_string(), "DoorLock");
    }

    #[test]
    fn should_default_light_to_off_and_lock_to_locked() {
        assert_eq!(Power::default(), Power::Off);
        assert_eq!(LockState::default(), LockState::Locked);
    }

    #[test]
    fn should_map_bool_to_power() {
        assert!(Power::from(true).is_on());
        assert!(!Power::from(false).is_on());
    }

    #[test]
    fn should_display_status_per_kind() {
        let light = DeviceStatus::Light { power: Power::On };
        let thermostat = DeviceStatus::Thermostat { temperature: 21 };
        let lock = DeviceStatus::DoorLock {
            lock: LockState::Unlocked,
        };
        assert_eq!(light.to_string(), "Status: ON");
        assert_eq!(thermostat.to_string(), "Temp: 21\u{b0}C");
        assert_eq!(lock.to_string(), "Status: UNLOCKED");
    }

    #[test]
    fn should_report_kind_of_status() {
        let status = DeviceStatus::Thermostat {
            temperature: DEFAULT_TEMPERATURE,
        };
        assert_eq!(status.kind(), DeviceKind::Thermostat);
    }

    #[test]
    fn should_serialize_status_with_kind_tag() {
        let status = DeviceStatus::DoorLock {
            lock: LockState::Locked,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "door_lock", "lock": "locked"})
        );
    }
}
