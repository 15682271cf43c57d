//! Clock implementations.

use crate::infrastructure::ports::ClockPort;
use chrono::NaiveDate;

/// System clock - uses the local calendar date.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        registrar_domain::common::today()
    }
}

/// Fixed clock, for reproducible ages in tests.
pub struct FixedClock(pub NaiveDate);

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
