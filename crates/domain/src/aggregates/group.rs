//! Group aggregate - one course, one teacher, a roster of students

use std::rc::Rc;

use crate::entities::{CourseRef, Person, StudentRef, TeacherRef};
use crate::error::DomainError;
use crate::ids::PersonId;

/// A teaching group
///
/// # Invariants
///
/// - The course and teacher are fixed at construction.
/// - A student instance appears at most once on the roster.
/// - The roster keeps insertion order.
///
/// The group shares its course, teacher and students with the rest of the
/// model; it only owns roster membership.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_domain::aggregates::Group;
/// use registrar_domain::entities::{Course, Student, Teacher};
/// use registrar_domain::value_objects::{Discipline, Gender, PersonInfo};
/// use registrar_domain::University;
///
/// let mut uni = University::new("Example U");
/// let born = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
/// let teacher = Teacher::new(
///     uni.ids(),
///     PersonInfo::new("Alan", "Kay", born, Gender::Male, "a@k.org", "1"),
///     vec![Discipline::ComputerScience],
/// )
/// .into_shared();
/// let student = Student::new(
///     uni.ids(),
///     PersonInfo::new("Bea", "Ray", born, Gender::Female, "b@r.org", "2"),
/// )
/// .into_shared();
///
/// let course = Course::shared("Smalltalk", Discipline::ComputerScience, 3);
/// let mut group = Group::new("ST-1", course, teacher);
/// group.add_student(student.clone()).unwrap();
/// assert!(group.add_student(student).is_err());
/// assert_eq!(group.len(), 1);
/// ```
#[derive(Debug)]
pub struct Group {
    name: String,
    course: CourseRef,
    teacher: TeacherRef,
    students: Vec<StudentRef>,
}

impl Group {
    pub fn new(name: impl Into<String>, course: CourseRef, teacher: TeacherRef) -> Self {
        Self {
            name: name.into(),
            course,
            teacher,
            students: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn course(&self) -> &CourseRef {
        &self.course
    }

    #[inline]
    pub fn teacher(&self) -> &TeacherRef {
        &self.teacher
    }

    /// Roster in insertion order. The returned vector is independent of the
    /// group; the handles inside it point at the same students.
    pub fn students(&self) -> Vec<StudentRef> {
        self.students.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns true if a roster member carries `id`.
    pub fn contains(&self, id: PersonId) -> bool {
        self.students.iter().any(|s| s.borrow().id() == id)
    }

    // =========================================================================
    // Roster mutations
    // =========================================================================

    /// Add `student` to the roster.
    ///
    /// # Errors
    ///
    /// `DomainError::DuplicateMember` if this exact student instance is
    /// already on the roster.
    pub fn add_student(&mut self, student: StudentRef) -> Result<(), DomainError> {
        if self.students.iter().any(|s| Rc::ptr_eq(s, &student)) {
            let id = student.borrow().id();
            return Err(DomainError::duplicate_member(&self.name, id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Remove the first roster member with `id` and hand it back.
    ///
    /// # Errors
    ///
    /// `DomainError::MemberNotFound` if no member carries `id`.
    pub fn remove_student_by_id(&mut self, id: PersonId) -> Result<StudentRef, DomainError> {
        let index = self
            .students
            .iter()
            .position(|s| s.borrow().id() == id)
            .ok_or_else(|| DomainError::member_not_found(&self.name, id))?;
        Ok(self.students.remove(index))
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Mean of the members' average scores, or 0.0 for an empty roster.
    pub fn average_group_score(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .students
            .iter()
            .map(|s| s.borrow().average_score())
            .sum();
        total / self.students.len() as f64
    }
}

// ============================================================================
// Tests
// ============================================================================
