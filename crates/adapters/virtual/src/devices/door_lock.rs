//! Virtual door lock — "on" unlocks, "off" locks.

use smarthub_app::ports::Device;
use smarthub_domain::device::{DeviceKind, DeviceStatus, LockState};
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

/// A simulated door lock, locked until told otherwise.
///
/// Turning the lock on *unlocks* the door; turning it off locks it.
#[derive(Debug, Clone)]
pub struct VirtualDoorLock {
    id: DeviceId,
    lock: LockState,
}

impl VirtualDoorLock {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            lock: LockState::Locked,
        }
    }

    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    fn set(&mut self, lock: LockState) {
        self.lock = lock;
        tracing::info!(device_id = %self.id, "door {} is {lock}", self.id);
    }
}

impl Device for VirtualDoorLock {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn identify(&self) -> DeviceKind {
        DeviceKind::DoorLock
    }

    fn turn_on(&mut self) -> Result<(), SmartHubError> {
        self.set(LockState::Unlocked);
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), SmartHubError> {
        self.set(LockState::Locked);
        Ok(())
    }

    fn status(&self) -> Result<DeviceStatus, SmartHubError> {
        Ok(DeviceStatus::DoorLock { lock: self.lock })
    }
}
