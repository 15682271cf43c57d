//! Student academic status and transition policies

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A student's enrollment-eligibility state
///
/// # State Transitions
///
/// Under the default [`StatusPolicy::Permissive`] every state may follow
/// every other state. [`StatusPolicy::Strict`] narrows this to:
///
/// ```text
/// Active <-> AcademicLeave
/// Active | AcademicLeave -> Graduated
/// Active | AcademicLeave -> Expelled
/// Graduated, Expelled: terminal
/// ```
///
/// # Examples
///
/// ```
/// use registrar_domain::value_objects::AcademicStatus;
///
/// assert!(AcademicStatus::Active.is_active());
/// assert!(!AcademicStatus::AcademicLeave.is_active());
/// assert!(AcademicStatus::Graduated.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AcademicStatus {
    #[default]
    Active,
    AcademicLeave,
    Graduated,
    Expelled,
}

impl AcademicStatus {
    pub const ALL: [AcademicStatus; 4] = [
        AcademicStatus::Active,
        AcademicStatus::AcademicLeave,
        AcademicStatus::Graduated,
        AcademicStatus::Expelled,
    ];

    /// Returns true if the student may enroll in courses
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true for states that end a student's academic career
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Graduated | Self::Expelled)
    }
}

impl std::fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::AcademicLeave => write!(f, "academic leave"),
            Self::Graduated => write!(f, "graduated"),
            Self::Expelled => write!(f, "expelled"),
        }
    }
}

impl std::str::FromStr for AcademicStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "active" => Ok(AcademicStatus::Active),
            "academic leave" | "academicleave" => Ok(AcademicStatus::AcademicLeave),
            "graduated" => Ok(AcademicStatus::Graduated),
            "expelled" => Ok(AcademicStatus::Expelled),
            _ => Err(DomainError::parse(format!("Unknown academic status: {}", s))),
        }
    }
}

/// Which academic status transitions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum StatusPolicy {
    /// Any state may follow any state.
    #[default]
    Permissive,
    /// Graduated and Expelled are terminal; leave can only be taken from
    /// and returned to Active.
    Strict,
}

impl StatusPolicy {
    /// Returns true if `from -> to` is allowed. Staying in the same state
    /// is always allowed.
    pub fn allows(self, from: AcademicStatus, to: AcademicStatus) -> bool {
        use AcademicStatus::*;

        if from == to {
            return true;
        }
        match self {
            Self::Permissive => true,
            Self::Strict => match from {
                terminal if terminal.is_terminal() => false,
                AcademicLeave => matches!(to, Active | Graduated | Expelled),
                _ => true,
            },
        }
    }

    /// Returns `Ok(())` or the transition error for `from -> to`.
    pub fn check(self, from: AcademicStatus, to: AcademicStatus) -> Result<(), DomainError> {
        if self.allows(from, to) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition { from, to })
        }
    }
}

impl std::fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for StatusPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(StatusPolicy::Permissive),
            "strict" => Ok(StatusPolicy::Strict),
            _ => Err(DomainError::parse(format!("Unknown status policy: {}", s))),
        }
    }
}
