//! Event — an immutable record of a change the hub made.
//!
//! Events are produced when a device is registered, switched, or has its
//! set-point changed, and are fanned out to every observer. The
//! [`Display`](std::fmt::Display) form is the human-readable notification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;
use crate::id::{DeviceId, EventId};
use crate::time::{Timestamp, now};

/// What happened to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    DeviceAdded,
    PowerChanged { on: bool },
    TemperatureSet { temperature: i32 },
}

/// A notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub device_id: DeviceId,
    pub kind: DeviceKind,
    pub payload: EventPayload,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(device_id: DeviceId, kind: DeviceKind, payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            device_id,
            kind,
            payload,
            timestamp: now(),
        }
    }

    #[must_use]
    pub fn device_added(device_id: DeviceId, kind: DeviceKind) -> Self {
        Self::new(device_id, kind, EventPayload::DeviceAdded)
    }

    #[must_use]
    pub fn power_changed(device_id: DeviceId, kind: DeviceKind, on: bool) -> Self {
        Self::new(device_id, kind, EventPayload::PowerChanged { on })
    }

    #[must_use]
    pub fn temperature_set(device_id: DeviceId, kind: DeviceKind, temperature: i32) -> Self {
        Self::new(device_id, kind, EventPayload::TemperatureSet { temperature })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            device_id, kind, ..
        } = self;
        match self.payload {
            EventPayload::DeviceAdded => write!(f, "Device added: {kind} {device_id}"),
            EventPayload::PowerChanged { on } => {
                let word = if on { "ON" } else { "OFF" };
                write!(f, "{kind} {device_id} turned {word}")
            }
            EventPayload::TemperatureSet { temperature } => {
                write!(f, "{kind} {device_id} set to {temperature}\u{b0}C")
            }
        }
    }
}
