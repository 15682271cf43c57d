//! Teacher entity

use std::cell::RefCell;
use std::rc::Rc;

use crate::entities::course::CourseRef;
use crate::entities::person::{Person, PersonProfile};
use crate::events::CoursesRemoved;
use crate::ids::PersonIdAllocator;
use crate::value_objects::{Discipline, PersonInfo, Role};

/// Shared, mutable handle to a teacher.
///
/// Groups and the university hold the same teacher instance.
pub type TeacherRef = Rc<RefCell<Teacher>>;

/// A teacher with subject specializations and assigned courses
///
/// # Invariants
///
/// - `role()` is always `Role::Teacher`.
/// - Specializations are informational; nothing checks assigned courses
///   against them.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_domain::entities::{Course, Person, Teacher};
/// use registrar_domain::value_objects::{Discipline, Gender, PersonInfo, Role};
/// use registrar_domain::University;
///
/// let mut uni = University::new("Example U");
/// let info = PersonInfo::new(
///     "Emmy",
///     "Noether",
///     NaiveDate::from_ymd_opt(1882, 3, 23).unwrap(),
///     Gender::Female,
///     "emmy@example.org",
///     "555-0101",
/// );
/// let mut teacher = Teacher::new(uni.ids(), info, vec![Discipline::Mathematics]);
/// teacher.assign_course(Course::shared("Abstract Algebra", Discipline::Mathematics, 5));
///
/// assert_eq!(teacher.role(), Role::Teacher);
/// assert_eq!(teacher.courses().len(), 1);
/// ```
#[derive(Debug)]
pub struct Teacher {
    profile: PersonProfile,
    specializations: Vec<Discipline>,
    courses: Vec<CourseRef>,
}

impl Teacher {
    pub fn new(
        ids: &mut PersonIdAllocator,
        info: PersonInfo,
        specializations: Vec<Discipline>,
    ) -> Self {
        Self {
            profile: PersonProfile::new(ids, info, Role::Teacher),
            specializations,
            courses: Vec::new(),
        }
    }

    /// Wrap this teacher in a shared handle.
    pub fn into_shared(self) -> TeacherRef {
        Rc::new(RefCell::new(self))
    }

    pub fn specializations(&self) -> &[Discipline] {
        &self.specializations
    }

    /// Append a course to this teacher's assignments. Repeated assignment
    /// of the same course is kept as a separate entry.
    pub fn assign_course(&mut self, course: CourseRef) {
        self.courses.push(course);
    }

    /// Drop every assigned course whose name equals `course_name`.
    pub fn remove_course(&mut self, course_name: &str) -> CoursesRemoved {
        let before = self.courses.len();
        self.courses.retain(|course| course.name() != course_name);
        CoursesRemoved {
            name: course_name.to_string(),
            removed: before - self.courses.len(),
        }
    }

    /// Assigned courses, in assignment order.
    pub fn courses(&self) -> Vec<CourseRef> {
        self.courses.clone()
    }
}

impl Person for Teacher {
    fn profile(&self) -> &PersonProfile {
        &self.profile
    }
}
