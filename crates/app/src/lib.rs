//! # smarthub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `Device` — the capability every controllable device exposes
//!   - `DeviceFactory` — builds devices from a type tag
//!   - `Observer` — receives hub notifications
//! - Provide the **hub** use-case: registry, control, status, fan-out
//! - Provide in-process infrastructure that doesn't need IO: the
//!   access-control proxy and the built-in observers
//!
//! ## Dependency rule
//! Depends on `smarthub-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod observers;
pub mod ports;
pub mod proxy;
pub mod services;

#[cfg(test)]
mod test_support;
