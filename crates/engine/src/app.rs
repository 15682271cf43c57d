//! Application state and composition.

use std::fmt;
use std::sync::Arc;

use registrar_domain::{
    DomainError, Group, PersonId, StatusPolicy, StudentRef, TeacherRef, University,
};

use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::RegistrarConfig;
use crate::infrastructure::ports::ClockPort;

/// Position of a group inside the university's group list.
///
/// Groups are never removed, so a handle stays valid for the lifetime of
/// the registrar that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(usize);

impl GroupHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The registry service.
///
/// Owns one [`University`] and applies the configured [`StatusPolicy`] to
/// status changes. Operations live in `use_cases`, grouped by area; every
/// state change is logged.
pub struct Registrar {
    university: University,
    policy: StatusPolicy,
    clock: Arc<dyn ClockPort>,
}

impl Registrar {
    pub fn new(university_name: impl Into<String>, policy: StatusPolicy) -> Self {
        Self::with_clock(university_name, policy, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(
        university_name: impl Into<String>,
        policy: StatusPolicy,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let university = University::new(university_name);
        tracing::info!(
            university = university.name(),
            %policy,
            "Registrar initialized"
        );
        Self {
            university,
            policy,
            clock,
        }
    }

    pub fn from_config(config: &RegistrarConfig) -> Self {
        Self::new(config.university_name.clone(), config.status_policy)
    }

    #[inline]
    pub fn university(&self) -> &University {
        &self.university
    }

    #[inline]
    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    #[inline]
    pub(crate) fn clock(&self) -> &dyn ClockPort {
        self.clock.as_ref()
    }

    #[inline]
    pub(crate) fn university_mut(&mut self) -> &mut University {
        &mut self.university
    }

    // =========================================================================
    // Lookups shared by the use cases
    // =========================================================================

    pub fn student(&self, id: PersonId) -> Result<StudentRef, DomainError> {
        self.university
            .get_student_by_id(id)
            .ok_or_else(|| DomainError::not_found("Student", id))
    }

    pub fn teacher(&self, id: PersonId) -> Result<TeacherRef, DomainError> {
        self.university
            .get_teacher_by_id(id)
            .ok_or_else(|| DomainError::not_found("Teacher", id))
    }

    pub fn group(&self, handle: GroupHandle) -> Result<&Group, DomainError> {
        self.university
            .group(handle.0)
            .ok_or_else(|| DomainError::not_found("Group", handle))
    }

    pub(crate) fn group_mut(&mut self, handle: GroupHandle) -> Result<&mut Group, DomainError> {
        self.university
            .group_mut(handle.0)
            .ok_or_else(|| DomainError::not_found("Group", handle))
    }

    pub(crate) fn next_group_handle(&self) -> GroupHandle {
        GroupHandle(self.university.groups().len())
    }

    pub(crate) fn handle_at(index: usize) -> GroupHandle {
        GroupHandle(index)
    }
}

impl fmt::Debug for Registrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrar")
            .field("university", &self.university.name())
            .field("policy", &self.policy)
            .finish()
    }
}
