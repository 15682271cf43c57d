//! Registrar engine library.
//!
//! Application layer over `registrar-domain`: a [`Registrar`] service that
//! owns one university, plus the configuration, logging and clock it needs.
//!
//! ## Structure
//!
//! - `use_cases/` - Registry operations, one module per area
//! - `infrastructure/` - Environment config, tracing setup, clock port
//! - `app` - Application composition
//!
//! ## Startup
//!
//! ```no_run
//! use registrar_engine::{init_tracing, Registrar, RegistrarConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RegistrarConfig::from_env()?;
//! init_tracing(&config.log_filter);
//! let registrar = Registrar::from_config(&config);
//! # let _ = registrar;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{GroupHandle, Registrar};
pub use infrastructure::config::RegistrarConfig;
pub use infrastructure::telemetry::init_tracing;
