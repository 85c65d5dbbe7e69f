//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthub.toml` in the working directory (or the path in
//! `SMARTHUB_CONFIG`). Every field has a default so the file is optional;
//! the defaults describe the stock demo home. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use smarthub_domain::id::DeviceId;

const DEFAULT_PATH: &str = "smarthub.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Observers registered with the hub, in notification order.
    pub observers: Vec<ObserverConfig>,
    /// Devices built by the factory and registered with the hub.
    pub devices: Vec<DeviceConfig>,
    /// Commands issued through the hub once every device is registered.
    pub commands: Vec<CommandConfig>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// A named logging observer.
#[derive(Debug, Clone, Deserialize)]
pub struct ObserverConfig {
    pub name: String,
}

/// One device to create.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Factory type tag (`light`, `thermostat`, `doorlock`; any case).
    pub kind: String,
    pub id: DeviceId,
    #[serde(default)]
    pub access: Access,
}

/// How a device is exposed to the hub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Registered as is.
    #[default]
    Direct,
    /// Wrapped in a proxy that lets every call through.
    Allowed,
    /// Wrapped in a proxy that refuses every gated call.
    Denied,
}

/// A command sent to the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CommandConfig {
    Control { id: DeviceId, on: bool },
    SetTemperature { id: DeviceId, temperature: i32 },
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed or fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SMARTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.observers.iter().any(|o| o.name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "observer name must not be empty".to_string(),
            ));
        }
        if let Some(device) = self.devices.iter().find(|d| d.kind.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "device {} has an empty kind",
                device.id
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            observers: vec![ObserverConfig {
                name: "Admin".to_string(),
            }],
            devices: vec![
                DeviceConfig {
                    kind: "light".to_string(),
                    id: DeviceId::new(1),
                    access: Access::Allowed,
                },
                DeviceConfig {
                    kind: "thermostat".to_string(),
                    id: DeviceId::new(2),
                    access: Access::Direct,
                },
                DeviceConfig {
                    kind: "doorlock".to_string(),
                    id: DeviceId::new(3),
                    access: Access::Denied,
                },
            ],
            commands: vec![
                CommandConfig::Control {
                    id: DeviceId::new(1),
                    on: true,
                },
                CommandConfig::Control {
                    id: DeviceId::new(2),
                    on: true,
                },
                CommandConfig::Control {
                    id: DeviceId::new(3),
                    on: true,
                },
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthubd=info,smarthub_app=info,smarthub_adapter_virtual=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_demo_home_by_default() {
        let config = Config::default();
        assert_eq!(config.observers.len(), 1);
        assert_eq!(config.observers[0].name, "Admin");
        assert_eq!(config.devices.len(), 3);
        assert_eq!(config.devices[0].access, Access::Allowed);
        assert_eq!(config.devices[1].access, Access::Direct);
        assert_eq!(config.devices[2].access, Access::Denied);
        assert_eq!(config.commands.len(), 3);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.devices.len(), 3);
        assert!(config.logging.filter.contains("smarthubd=info"));
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [[observers]]
            name = 'Kitchen panel'

            [[observers]]
            name = 'Phone'

            [[devices]]
            kind = 'Thermostat'
            id = 10
            access = 'denied'

            [[devices]]
            kind = 'light'
            id = 11

            [[commands]]
            action = 'set_temperature'
            id = 10
            temperature = 19

            [[commands]]
            action = 'control'
            id = 11
            on = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.observers.len(), 2);
        assert_eq!(config.observers[1].name, "Phone");
        assert_eq!(config.devices[0].kind, "Thermostat");
        assert_eq!(config.devices[0].id, DeviceId::new(10));
        assert_eq!(config.devices[0].access, Access::Denied);
        assert_eq!(config.devices[1].access, Access::Direct);
        assert_eq!(
            config.commands,
            vec![
                CommandConfig::SetTemperature {
                    id: DeviceId::new(10),
                    temperature: 19
                },
                CommandConfig::Control {
                    id: DeviceId::new(11),
                    on: false
                },
            ]
        );
    }

    #[test]
    fn should_keep_default_devices_when_only_commands_given() {
        let toml = "
            [[commands]]
            action = 'control'
            id = 1
            on = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.devices.len(), 3);
        assert_eq!(config.commands.len(), 1);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.devices.len(), 3);
    }

    #[test]
    fn should_reject_empty_observer_name() {
        let mut config = Config::default();
        config.observers.push(ObserverConfig {
            name: "  ".to_string(),
        });
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_device_kind() {
        let mut config = Config::default();
        config.devices[1].kind = String::new();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: device 2 has an empty kind"
        );
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_unknown_action() {
        let toml = "
            [[commands]]
            action = 'explode'
            id = 1
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
