//! Infrastructure implementations.
//!
//! Environment-backed configuration, logging setup and the system clock.

pub mod clock;
pub mod config;
pub mod ports;
pub mod telemetry;
