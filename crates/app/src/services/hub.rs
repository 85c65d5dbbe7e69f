//! Hub — the device registry that routes control commands and fans out
//! notifications.

use std::collections::BTreeMap;
use std::fmt;

use smarthub_domain::device::DeviceStatus;
use smarthub_domain::error::SmartHubError;
use smarthub_domain::event::Event;
use smarthub_domain::id::DeviceId;

use crate::ports::{Device, Observer};

/// Result of a command addressed to a device id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// The device was found and the command applied.
    Applied,
    /// No device is registered under the id; nothing changed.
    NotFound,
}

/// Registry of devices keyed by id, plus the observers notified after
/// every change.
///
/// The hub is an ordinary value: build one at the composition root and pass
/// it by reference. Every mutation takes `&mut self`, so a lookup, the state
/// change, and the resulting notification happen as one exclusive step.
/// Devices are kept in ascending id order.
#[derive(Default)]
pub struct Hub {
    devices: BTreeMap<DeviceId, Box<dyn Device>>,
    observers: Vec<Box<dyn Observer>>,
}

impl Hub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer. Observers are notified in registration order;
    /// registering the same observer twice notifies it twice.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register a device, replacing any device already stored under the
    /// same id, then notify observers.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id(), kind = %device.identify()))]
    pub fn add_device(&mut self, device: impl Device + 'static) {
        let id = device.id();
        let kind = device.identify();
        if self.devices.insert(id, Box::new(device)).is_some() {
            tracing::warn!("replaced device registered under the same id");
        }
        self.notify(&Event::device_added(id, kind));
    }

    /// Turn a device on or off, then notify observers.
    ///
    /// An unknown id is not an error: it is logged and reported as
    /// [`ControlOutcome::NotFound`] without notifying anyone.
    ///
    /// # Errors
    ///
    /// Propagates the device's error (e.g. [`SmartHubError::AccessDenied`]
    /// from a denying proxy). Observers are not notified in that case.
    #[tracing::instrument(skip(self, id), fields(device_id = %id))]
    pub fn control_device(
        &mut self,
        id: DeviceId,
        on: bool,
    ) -> Result<ControlOutcome, SmartHubError> {
        let Some(device) = self.devices.get_mut(&id) else {
            tracing::warn!("device not found");
            return Ok(ControlOutcome::NotFound);
        };
        if on {
            device.turn_on()?;
        } else {
            device.turn_off()?;
        }
        let event = Event::power_changed(id, device.identify(), on);
        self.notify(&event);
        Ok(ControlOutcome::Applied)
    }

    /// Change a device's temperature set-point, then notify observers.
    ///
    /// Unknown ids are handled like in [`control_device`](Self::control_device).
    ///
    /// # Errors
    ///
    /// Returns [`SmartHubError::Unsupported`] when the device has no
    /// set-point, or [`SmartHubError::AccessDenied`] from a denying proxy.
    #[tracing::instrument(skip(self, id), fields(device_id = %id))]
    pub fn set_temperature(
        &mut self,
        id: DeviceId,
        celsius: i32,
    ) -> Result<ControlOutcome, SmartHubError> {
        let Some(device) = self.devices.get_mut(&id) else {
            tracing::warn!("device not found");
            return Ok(ControlOutcome::NotFound);
        };
        device.set_temperature(celsius)?;
        let event = Event::temperature_set(id, device.identify(), celsius);
        self.notify(&event);
        Ok(ControlOutcome::Applied)
    }

    /// Ask every registered device for its status, in id order.
    ///
    /// # Errors
    ///
    /// Stops at the first device that refuses (a denying proxy) and returns
    /// its error.
    pub fn show_status(&self) -> Result<Vec<(DeviceId, DeviceStatus)>, SmartHubError> {
        self.devices
            .iter()
            .map(|(id, device)| -> Result<_, SmartHubError> {
                let status = device.status()?;
                tracing::info!(device_id = %id, "{} {id} {status}", device.identify());
                Ok((*id, status))
            })
            .collect()
    }

    /// Look up a registered device.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&dyn Device> {
        self.devices.get(&id).map(Box::as_ref)
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self, event: &Event) {
        for observer in &self.observers {
            observer.receive(event);
        }
    }
}

impl fmt::Debug for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("devices", &self.devices.keys().collect::<Vec<_>>())
            .field("observers", &self.observers.len())
            .finish()
    }
}
