//! Virtual device implementations — light, thermostat, door lock.

mod door_lock;
mod light;
mod thermostat;

pub use door_lock::VirtualDoorLock;
pub use light::VirtualLight;
pub use thermostat::VirtualThermostat;

use smarthub_app::ports::Device;
use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

/// Wrapper enum for the concrete virtual device types.
#[derive(Debug, Clone)]
pub enum VirtualDevice {
    Light(VirtualLight),
    Thermostat(VirtualThermostat),
    DoorLock(VirtualDoorLock),
}

impl VirtualDevice {
    /// Build the variant matching `kind` in its default state.
    #[must_use]
    pub fn new(kind: DeviceKind, id: DeviceId) -> Self {
        match kind {
            DeviceKind::Light => Self::Light(VirtualLight::new(id)),
            DeviceKind::Thermostat => Self::Thermostat(VirtualThermostat::new(id)),
            DeviceKind::DoorLock => Self::DoorLock(VirtualDoorLock::new(id)),
        }
    }

    fn as_device(&self) -> &dyn Device {
        match self {
            Self::Light(d) => d,
            Self::Thermostat(d) => d,
            Self::DoorLock(d) => d,
        }
    }

    fn as_device_mut(&mut self) -> &mut dyn Device {
        match self {
            Self::Light(d) => d,
            Self::Thermostat(d) => d,
            Self::DoorLock(d) => d,
        }
    }
}

impl Device for VirtualDevice {
    fn id(&self) -> DeviceId {
        self.as_device().id()
    }

    fn identify(&self) -> DeviceKind {
        self.as_device().identify()
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        self.as_device_mut().turn_on()
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        self.as_device_mut().turn_off()
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        self.as_device().status()
    }

    fn set_temperature(&mut self, celsius: i32) -> Result<(), SmartHubError> {
        self.as_device_mut().set_temperature(celsius)
    }
}

impl From<VirtualLight> for VirtualDevice {
    fn from(device: VirtualLight) -> Self {
        Self::Light(device)
    }
}

impl From<VirtualThermostat> for VirtualDevice {
    fn from(device: VirtualThermostat) -> Self {
        Self::Thermostat(device)
    }
}

impl From<VirtualDoorLock> for VirtualDevice {
    fn from(device: VirtualDoorLock) -> Self {
        Self::DoorLock(device)
    }
}
