//! Port traits for the registrar's external dependencies.

use chrono::NaiveDate;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Current calendar date in the local time zone.
    fn today(&self) -> NaiveDate;
}
