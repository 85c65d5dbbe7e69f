//! Wiring of the configured home: observers, devices, and commands.

use smarthub_app::observers::LoggingObserver;
use smarthub_app::ports::DeviceFactory;
use smarthub_app::proxy::DeviceProxy;
use smarthub_app::services::hub::{ControlOutcome, Hub};
use smarthub_domain::error::SmartHubError;

use crate::config::{Access, CommandConfig, DeviceConfig, ObserverConfig};

/// Register one logging observer per configured name.
pub fn register_observers(hub: &mut Hub, observers: &[ObserverConfig]) {
    for observer in observers {
        hub.add_observer(LoggingObserver::new(observer.name.clone()));
    }
}

/// Build every configured device, then register them with the hub.
///
/// All devices are created before the first one is registered, so an
/// unknown kind leaves the hub untouched.
///
/// # Errors
///
/// Returns [`SmartHubError::UnknownKind`] for the first unrecognised tag.
pub fn register_devices<F>(
    hub: &mut Hub,
    factory: &F,
    devices: &[DeviceConfig],
) -> Result<(), SmartHubError>
where
    F: DeviceFactory,
    F::Device: 'static,
{
    let built = devices
        .iter()
        .map(|cfg| -> Result<_, SmartHubError> {
            Ok((factory.create(&cfg.kind, cfg.id)?, cfg.access))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (device, access) in built {
        match access {
            Access::Direct => hub.add_device(device),
            Access::Allowed => hub.add_device(DeviceProxy::allowed(device)),
            Access::Denied => hub.add_device(DeviceProxy::denied(device)),
        }
    }
    Ok(())
}

/// Issue every command in order, stopping at the first failure.
///
/// Commands addressed to unknown ids are skipped (the hub logs them).
///
/// # Errors
///
/// Propagates the first hub error, e.g. [`SmartHubError::AccessDenied`].
pub fn run_commands(hub: &mut Hub, commands: &[CommandConfig]) -> Result<usize, SmartHubError> {
    let mut applied = 0;
    for command in commands {
        let outcome = match *command {
            CommandConfig::Control { id, on } => hub.control_device(id, on)?,
            CommandConfig::SetTemperature { id, temperature } => {
                hub.set_temperature(id, temperature)?
            }
        };
        if outcome == ControlOutcome::Applied {
            applied += 1;
        }
    }
    Ok(applied)
}
