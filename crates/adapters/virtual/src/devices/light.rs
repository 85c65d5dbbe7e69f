//! Virtual light — a plain on/off switch.

use smarthub_app::ports::Device;
use smarthub_domain::device::{DeviceKind, DeviceStatus, Power};
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

/// A simulated light, off until told otherwise.
#[derive(Debug, Clone)]
pub struct VirtualLight {
    id: DeviceId,
    power: Power,
}

impl VirtualLight {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            power: Power::Off,
        }
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    fn switch(&mut self, power: Power) {
        self.power = power;
        tracing::info!(device_id = %self.id, "light {} is {power}", self.id);
    }
}

impl Device for VirtualLight {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn identify(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        self.switch(Power::On);
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        self.switch(Power::Off);
        Ok(())
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        Ok(DeviceStatus::Light { power: self.power })
    }
}
