//! Application services — use-case implementations.
//!
//! Services own their collaborators (constructor injection) and are passed
//! around explicitly; there is no process-wide instance.

pub mod hub;
