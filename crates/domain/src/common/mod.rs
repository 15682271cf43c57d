//! Pure helper functions shared by the domain types.
//!
//! Callers that need a deterministic "now" pass the date in; `today()` is
//! the only function that reads the system clock.

pub mod datetime;

pub use datetime::{age_on, today};
