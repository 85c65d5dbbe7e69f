//! Typed identifier newtypes.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a device, unique within a hub.
///
/// Bound when the device is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u32);

impl DeviceId {
    /// Wrap a raw integer identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Unique identifier for an [`Event`](crate::event::Event), backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(uuid::Uuid);

impl Default for EventId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl EventId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_device_id_as_plain_integer() {
        assert_eq!(DeviceId::new(42).to_string(), "42");
    }

    #[test]
    fn should_parse_device_id_from_str() {
        let id: DeviceId = "7".parse().unwrap();
        assert_eq!(id, DeviceId::new(7));
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_device_id() {
        assert!(DeviceId::from_str("seven").is_err());
    }

    #[test]
    fn should_order_device_ids_numerically() {
        assert!(DeviceId::new(2) < DeviceId::new(10));
    }

    #[test]
    fn should_serialize_device_id_transparently() {
        let json = serde_json::to_string(&DeviceId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_generate_unique_event_ids_when_called_twice() {
        let a = EventId::new();
        let b = EventId::new();
        assert_ne!(a, b);
    }
}
