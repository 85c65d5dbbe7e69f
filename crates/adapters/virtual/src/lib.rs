//! # smarthub-adapter-virtual
//!
//! Simulated devices and the factory that builds them.
//!
//! ## Provided devices
//!
//! | Tag | Device | Default state | `turn_on` / `turn_off` |
//! |-----|--------|---------------|------------------------|
//! | `light` | [`VirtualLight`] | off | on / off |
//! | `thermostat` | [`VirtualThermostat`] | 24 °C | logged only |
//! | `doorlock` | [`VirtualDoorLock`] | locked | unlock / lock |
//!
//! ## Dependency rule
//!
//! Depends on `smarthub-app` (port traits) and `smarthub-domain` only.

mod devices;

use smarthub_app::ports::DeviceFactory;
use smarthub_domain::device::DeviceKind;
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

pub use devices::{VirtualDevice, VirtualDoorLock, VirtualLight, VirtualThermostat};

/// Builds [`VirtualDevice`]s from a case-insensitive type tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualDeviceFactory;

impl DeviceFactory for VirtualDeviceFactory {
    type Device = VirtualDevice;

    fn create(&self, kind: &str, id: DeviceId) -> Result<VirtualDevice, SmartHubError> {
        let kind: DeviceKind = kind.parse()?;
        tracing::debug!(%kind, device_id = %id, "creating virtual device");
        Ok(VirtualDevice::new(kind, id))
    }
}
