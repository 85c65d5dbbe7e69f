//! # smarthubd — smarthub daemon
//!
//! Composition root that wires the virtual devices into a hub and runs the
//! configured scenario.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Build the hub, registering observers and factory-made devices
//!   (optionally behind an access-control proxy)
//! - Issue the configured commands, then log a status report
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod scenario;

use anyhow::Context;
use smarthub_adapter_virtual::VirtualDeviceFactory;
use smarthub_app::services::hub::Hub;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::new(&config.logging.filter))
        .init();

    if let Err(err) = run(&config) {
        tracing::error!("smarthubd stopped: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut hub = Hub::new();
    scenario::register_observers(&mut hub, &config.observers);
    scenario::register_devices(&mut hub, &VirtualDeviceFactory, &config.devices)
        .context("failed to register devices")?;
    tracing::info!(devices = hub.len(), observers = hub.observer_count(), "hub ready");

    let applied =
        scenario::run_commands(&mut hub, &config.commands).context("command aborted")?;
    tracing::info!(applied, "commands done");

    tracing::info!("device status");
    hub.show_status().context("failed to report device status")?;
    Ok(())
}
