//! # smarthub-domain
//!
//! Pure domain model for the smarthub home hub.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **device kinds** (light, thermostat, door lock) and their states
//! - Define **status snapshots** reported by devices
//! - Define **events** (notifications fanned out by the hub)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All behaviour boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod event;
