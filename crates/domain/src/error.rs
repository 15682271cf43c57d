//! Unified error type for registry operations
//!
//! Every variant is a recoverable constraint violation: an operation that
//! returns one of these has left the model untouched. Programming errors
//! (a person whose role tag disagrees with its concrete kind) are not
//! represented here; they panic.

use thiserror::Error;

use crate::ids::PersonId;
use crate::value_objects::AcademicStatus;

/// Registry constraint violation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The student instance is already on the group's roster
    #[error("Student {student} is already in group '{group}'")]
    DuplicateMember { group: String, student: PersonId },

    /// No roster member carries the given id
    #[error("Student {student} not found in group '{group}'")]
    MemberNotFound { group: String, student: PersonId },

    /// Another person with this id is already registered
    #[error("Person {person} is already registered")]
    DuplicatePerson { person: PersonId },

    /// Enrollment requires `AcademicStatus::Active`
    #[error("Cannot enroll: student {student} is not in active status ({status})")]
    InactiveEnrollment {
        student: PersonId,
        status: AcademicStatus,
    },

    /// Rejected by a strict status policy
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: AcademicStatus,
        to: AcademicStatus,
    },

    /// A value is outside its allowed range
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A label did not match any known variant
    #[error("Parse error: {0}")]
    Parse(String),

    /// Lookup by id found nothing
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },
}

impl DomainError {
    /// Creates a validation error for out-of-range values.
    ///
    /// # Example
    /// ```ignore
    /// if !(0.0..=4.0).contains(&gpa) {
    ///     return Err(DomainError::validation("GPA must be between 0.0 and 4.0"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub(crate) fn duplicate_member(group: &str, student: PersonId) -> Self {
        Self::DuplicateMember {
            group: group.to_string(),
            student,
        }
    }

    pub(crate) fn member_not_found(group: &str, student: PersonId) -> Self {
        Self::MemberNotFound {
            group: group.to_string(),
            student,
        }
    }
}
