//! Factory port — builds devices from a type tag.

use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

use crate::ports::Device;

/// Creates fresh devices in their default state.
pub trait DeviceFactory {
    /// The device type this factory produces.
    type Device: Device;

    /// Build a device of the kind named by `kind` (matched ignoring case),
    /// with `id` bound.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHubError::UnknownKind`] when `kind` names no known
    /// device kind.
    fn create(&self, kind: &str, id: DeviceId) -> Result<Self::Device, SmartHubError>;
}
