//! Enrollment use cases.
//!
//! Course enrollment, academic status changes and GPA recording for a
//! single student.

use registrar_domain::{
    AcademicStatus, CourseRef, DomainError, Enrollment, PersonId, StatusChange,
};

use crate::app::Registrar;

impl Registrar {
    /// Enroll a student in `course`.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown student id.
    /// - `InactiveEnrollment` unless the student is active; nothing changes.
    pub fn enroll(&mut self, student_id: PersonId, course: &CourseRef) -> Result<Enrollment, DomainError> {
        let student = self.student(student_id)?;
        let result = student.borrow_mut().enroll_course(CourseRef::clone(course));

        match &result {
            Ok(outcome) => tracing::info!(
                %student_id,
                course = %outcome.course,
                credits_added = outcome.credits_added,
                total_credits = outcome.total_credits,
                "Student enrolled"
            ),
            Err(e) => tracing::warn!(
                %student_id,
                course = course.name(),
                error = %e,
                "Enrollment rejected"
            ),
        }
        result
    }

    /// Move a student to `status`, subject to the registrar's policy.
    pub fn change_status(
        &mut self,
        student_id: PersonId,
        status: AcademicStatus,
    ) -> Result<StatusChange, DomainError> {
        let policy = self.policy();
        let student = self.student(student_id)?;
        let result = student.borrow_mut().transition_status(status, policy);

        match &result {
            Ok(StatusChange::Changed { from, to }) => {
                tracing::info!(%student_id, %from, %to, "Academic status changed")
            }
            Ok(StatusChange::Unchanged { status }) => {
                tracing::debug!(%student_id, %status, "Academic status unchanged")
            }
            Err(e) => tracing::warn!(%student_id, %policy, error = %e, "Status change rejected"),
        }
        result
    }

    /// Record an externally computed GPA.
    pub fn record_gpa(&mut self, student_id: PersonId, gpa: f64) -> Result<(), DomainError> {
        let student = self.student(student_id)?;
        let result = student.borrow_mut().set_gpa(gpa);

        match &result {
            Ok(()) => tracing::info!(%student_id, gpa, "GPA recorded"),
            Err(e) => tracing::warn!(%student_id, gpa, error = %e, "GPA rejected"),
        }
        result
    }
}
