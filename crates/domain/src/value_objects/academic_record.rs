use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Upper bound of the grade point scale.
pub const MAX_GPA: f64 = 4.0;

/// A student's running academic performance.
///
/// `total_credits` grows with every successful enrollment. `gpa` is
/// maintained separately and is never derived from enrollment history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicRecord {
    pub total_credits: i64,
    pub gpa: f64,
}

impl AcademicRecord {
    /// Add `credits` to the running total and return the new total.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if the total would overflow; the record is
    /// left unchanged.
    pub(crate) fn add_credits(&mut self, credits: i64) -> Result<i64, DomainError> {
        let total = self.total_credits.checked_add(credits).ok_or_else(|| {
            DomainError::validation(format!(
                "credit total {} cannot absorb {} more credits",
                self.total_credits, credits
            ))
        })?;
        self.total_credits = total;
        Ok(total)
    }

    pub(crate) fn set_gpa(&mut self, gpa: f64) -> Result<(), DomainError> {
        if !gpa.is_finite() {
            return Err(DomainError::validation("GPA must be a finite number"));
        }
        if !(0.0..=MAX_GPA).contains(&gpa) {
            return Err(DomainError::validation(format!(
                "GPA must be between 0.0 and {}, got {}",
                MAX_GPA, gpa
            )));
        }
        self.gpa = gpa;
        Ok(())
    }
}
