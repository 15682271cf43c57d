//! Student entity
//!
//! Students carry the only state machine in the registry: their
//! [`AcademicStatus`] gates enrollment.

use std::cell::RefCell;
use std::rc::Rc;

use crate::entities::course::CourseRef;
use crate::entities::person::{Person, PersonProfile};
use crate::error::DomainError;
use crate::events::{Enrollment, StatusChange};
use crate::ids::PersonIdAllocator;
use crate::value_objects::{AcademicRecord, AcademicStatus, PersonInfo, Role, StatusPolicy};

/// Shared, mutable handle to a student.
///
/// Group rosters and the university hold the same student instance, so a
/// status change made through one handle is seen through all of them.
pub type StudentRef = Rc<RefCell<Student>>;

/// A student with an academic status, enrollments and a performance record
///
/// # Invariants
///
/// - `role()` is always `Role::Student`.
/// - A new student is `AcademicStatus::Active`.
/// - `enrolled_courses` only grows while the student is active.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_domain::entities::{Course, Student};
/// use registrar_domain::value_objects::{Discipline, Gender, PersonInfo};
/// use registrar_domain::University;
///
/// let mut uni = University::new("Example U");
/// let info = PersonInfo::new(
///     "Marie",
///     "Curie",
///     NaiveDate::from_ymd_opt(1867, 11, 7).unwrap(),
///     Gender::Female,
///     "marie@example.org",
///     "555-0102",
/// );
/// let mut student = Student::new(uni.ids(), info);
/// let outcome = student
///     .enroll_course(Course::shared("Radiochemistry", Discipline::Chemistry, 4))
///     .unwrap();
///
/// assert_eq!(outcome.total_credits, 4);
/// ```
#[derive(Debug)]
pub struct Student {
    profile: PersonProfile,
    status: AcademicStatus,
    enrolled_courses: Vec<CourseRef>,
    academic_performance: AcademicRecord,
}

impl Student {
    pub fn new(ids: &mut PersonIdAllocator, info: PersonInfo) -> Self {
        Self {
            profile: PersonProfile::new(ids, info, Role::Student),
            status: AcademicStatus::Active,
            enrolled_courses: Vec::new(),
            academic_performance: AcademicRecord::default(),
        }
    }

    /// Wrap this student in a shared handle.
    pub fn into_shared(self) -> StudentRef {
        Rc::new(RefCell::new(self))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn status(&self) -> AcademicStatus {
        self.status
    }

    #[inline]
    pub fn academic_performance(&self) -> AcademicRecord {
        self.academic_performance
    }

    /// The externally maintained GPA, returned as stored.
    #[inline]
    pub fn average_score(&self) -> f64 {
        self.academic_performance.gpa
    }

    /// Enrolled courses, in enrollment order.
    pub fn enrolled_courses(&self) -> Vec<CourseRef> {
        self.enrolled_courses.clone()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Enroll in `course`, adding its credit weight to the running total.
    ///
    /// # Errors
    ///
    /// - `DomainError::InactiveEnrollment` if the student is not active.
    /// - `DomainError::Validation` if the credit total would overflow.
    ///
    /// On error the enrollment list and credit total are left unchanged.
    pub fn enroll_course(&mut self, course: CourseRef) -> Result<Enrollment, DomainError> {
        if !self.status.is_active() {
            return Err(DomainError::InactiveEnrollment {
                student: self.profile.id(),
                status: self.status,
            });
        }

        let credits_added = course.credits();
        let total_credits = self.academic_performance.add_credits(credits_added)?;
        let name = course.name().to_string();
        self.enrolled_courses.push(course);

        Ok(Enrollment {
            course: name,
            credits_added,
            total_credits,
        })
    }

    /// Move to `new_status` unconditionally. Any state may follow any state.
    pub fn update_academic_status(&mut self, new_status: AcademicStatus) -> StatusChange {
        let change = StatusChange::between(self.status, new_status);
        self.status = new_status;
        change
    }

    /// Move to `new_status` if `policy` allows it.
    pub fn transition_status(
        &mut self,
        new_status: AcademicStatus,
        policy: StatusPolicy,
    ) -> Result<StatusChange, DomainError> {
        policy.check(self.status, new_status)?;
        Ok(self.update_academic_status(new_status))
    }

    /// Record a new GPA.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if `gpa` is not a finite value in
    /// `0.0..=4.0`; the previous GPA is kept.
    pub fn set_gpa(&mut self, gpa: f64) -> Result<(), DomainError> {
        self.academic_performance.set_gpa(gpa)
    }
}

impl Person for Student {
    fn profile(&self) -> &PersonProfile {
        &self.profile
    }
}

// ============================================================================
// Tests
// ============================================================================
