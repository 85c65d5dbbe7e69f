//! Access-control proxy for devices.

use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::error::{AccessDeniedError, SmartHubError};
use smarthub_domain::id::DeviceId;

use crate::ports::Device;

/// Wraps a device and gates every state-touching call behind a permit flag
/// fixed at construction.
///
/// When access is denied the wrapped device is never called.
/// [`identify`](Device::identify) and [`id`](Device::id) always pass through.
#[derive(Debug)]
pub struct DeviceProxy<D> {
    inner: D,
    permit: bool,
}

impl<D: Device> DeviceProxy<D> {
    /// Wrap `inner`, allowing gated calls only when `permit` is `true`.
    pub fn new(inner: D, permit: bool) -> Self {
        Self { inner, permit }
    }

    /// Wrap `inner` with access granted.
    pub fn allowed(inner: D) -> Self {
        Self::new(inner, true)
    }

    /// Wrap `inner` with access refused.
    pub fn denied(inner: D) -> Self {
        Self::new(inner, false)
    }

    #[must_use]
    pub fn is_permitted(&self) -> bool {
        self.permit
    }

    /// Borrow the wrapped device without going through the gate.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwrap the proxy, returning the device it guarded.
    pub fn into_inner(self) -> D {
        self.inner
    }

    fn check_access(&self) -> Result<(), AccessDeniedError> {
        if self.permit {
            return Ok(());
        }
        let kind = self.inner.identify();
        tracing::warn!(device_id = %self.inner.id(), %kind, "access denied");
        Err(AccessDeniedError { kind })
    }
}

impl<D: Device> Device for DeviceProxy<D> {
    fn id(&self) -> DeviceId {
        self.inner.id()
    }

    fn identify(&self) -> DeviceKind {
        self.inner.identify()
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        self.check_access()?;
        self.inner.turn_on()
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        self.check_access()?;
        self.inner.turn_off()
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        self.check_access()?;
        self.inner.status()
    }

    fn set_temperature(&mut self, celsius: i32) -> Result<(), SmartHubError> {
        self.check_access()?;
        self.inner.set_temperature(celsius)
    }
}
