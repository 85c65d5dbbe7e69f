//! Device port — the capability every controllable device exposes.

use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::error::{SmartHubError, UnsupportedOperationError};
use smarthub_domain::id::DeviceId;

/// A controllable device registered with the hub.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`), while
/// decorators such as [`DeviceProxy`](crate::proxy::DeviceProxy) wrap another
/// device and expose the same capability, so the hub never knows whether it
/// holds the real thing or a wrapper.
///
/// Fallible operations return [`SmartHubError`] because a wrapper may refuse
/// the call; concrete devices themselves never fail on `turn_on`,
/// `turn_off`, or `status`.
pub trait Device {
    /// Identifier bound when the device was created.
    fn id(&self) -> DeviceId;

    /// The kind of device. Never gated by access control.
    fn identify(&self) -> DeviceKind;

    /// Switch the device "on" (for a door lock: unlock it).
    fn turn_on(&mut self) -> Result<(), SmartHubError>;

    /// Switch the device "off" (for a door lock: lock it).
    fn turn_off(&mut self) -> Result<(), SmartHubError>;

    /// Report the current state.
    fn status(&self) -> Result<DeviceStatus, SmartHubError>;

    /// Change the temperature set-point.
    ///
    /// # Errors
    ///
    /// The default implementation returns
    /// [`SmartHubError::Unsupported`]; only devices with a set-point override it.
    fn set_temperature(&mut self, celsius: i32) -> Result<(), SmartHubError> {
        let _ = celsius;
        Err(UnsupportedOperationError {
            kind: self.identify(),
            operation: "set_temperature",
        }
        .into())
    }
}

impl<D: Device + ?Sized> Device for Box<D> {
    fn id(&self) -> DeviceId {
        (**self).id()
    }

    fn identify(&self) -> DeviceKind {
        (**self).identify()
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        (**self).turn_on()
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        (**self).turn_off()
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        (**self).status()
    }

    fn set_temperature(&mut self, celsius: i32) -> Result<(), SmartHubError> {
        (**self).set_temperature(celsius)
    }
}
