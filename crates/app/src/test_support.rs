//! Test doubles shared by the unit tests of this crate.

use std::cell::Cell;

use smarthub_domain::device::{DeviceKind, DeviceStatus, LockState, Power};
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

use crate::ports::Device;

/// In-memory device that counts every call it receives.
pub struct FakeDevice {
    pub id: DeviceId,
    pub kind: DeviceKind,
    pub on: bool,
    pub temperature: i32,
    pub calls: Cell<usize>,
}

impl FakeDevice {
    pub fn new(id: u32, kind: DeviceKind) -> Self {
        Self {
            id: DeviceId::new(id),
            kind,
            on: false,
            temperature: 24,
            calls: Cell::new(0),
        }
    }

    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl Device for FakeDevice {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn identify(&self) -> DeviceKind {
        self.kind
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        self.hit();
        self.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        self.hit();
        self.on = false;
        Ok(())
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        self.hit();
        Ok(match self.kind {
            DeviceKind::Light => DeviceStatus::Light {
                power: Power::from(self.on),
            },
            DeviceKind::Thermostat => DeviceStatus::Thermostat {
                temperature: self.temperature,
            },
            DeviceKind::DoorLock => DeviceStatus::DoorLock {
                lock: if self.on {
                    LockState::Unlocked
                } else {
                    LockState::Locked
                },
            },
        })
    }

    fn set_temperature(&mut self, celsius: i32) -> Result<(), SmartHubError> {
        self.hit();
        self.temperature = celsius;
        Ok(())
    }
}
