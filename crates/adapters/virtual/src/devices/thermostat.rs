//! Virtual thermostat — holds a temperature set-point.

use smarthub_app::ports::Device;
use smarthub_domain::device::{DEFAULT_TEMPERATURE, DeviceKind, DeviceStatus};
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

/// A simulated thermostat.
///
/// It has no on/off state of its own: `turn_on` and `turn_off` are only
/// logged. The set-point is the only thing that changes.
#[derive(Debug, Clone)]
pub struct VirtualThermostat {
    id: DeviceId,
    temperature: i32,
}

impl VirtualThermostat {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }
}

impl Device for VirtualThermostat {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn identify(&self) -> DeviceKind {
        DeviceKind::Thermostat
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        tracing::info!(
            device_id = %self.id,
            temperature = self.temperature,
            "thermostat {} is ON",
            self.id
        );
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        tracing::info!(device_id = %self.id, "thermostat {} is OFF", self.id);
        Ok(())
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        Ok(DeviceStatus::Thermostat {
            temperature: self.temperature,
        })
    }

    fn set_temperature(&mut self, celsius: i32) -> Result<(), SmartHubError> {
        self.temperature = celsius;
        tracing::info!(device_id = %self.id, "thermostat {} set to {celsius}\u{b0}C", self.id);
        Ok(())
    }
}
