//! Student-related mutation outcomes

use crate::value_objects::AcademicStatus;

/// Outcome of a successful course enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// Name of the course enrolled in
    pub course: String,
    /// Credit weight added to the student's record
    pub credits_added: i64,
    /// Running credit total after the enrollment
    pub total_credits: i64,
}

/// Outcome of an academic status update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Changed {
        from: AcademicStatus,
        to: AcademicStatus,
    },
    Unchanged {
        status: AcademicStatus,
    },
}

impl StatusChange {
    pub(crate) fn between(from: AcademicStatus, to: AcademicStatus) -> Self {
        if from == to {
            Self::Unchanged { status: to }
        } else {
            Self::Changed { from, to }
        }
    }

    /// The status in effect after the update
    pub fn current(&self) -> AcademicStatus {
        match self {
            Self::Changed { to, .. } => *to,
            Self::Unchanged { status } => *status,
        }
    }
}
