//! Course - an immutable catalog entry

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::value_objects::Discipline;

/// Shared handle to a course.
///
/// The same course is referenced by the university catalog, by teachers'
/// assignments, by groups and by students' enrollments. Two handles denote
/// the same course only if they point at the same allocation.
pub type CourseRef = Rc<Course>;

/// A course in the catalog
///
/// # Invariants
///
/// - Fields never change after construction; there are no `&mut` methods.
/// - `credits` is taken as given: zero or negative weights are accepted.
///
/// # Example
///
/// ```
/// use registrar_domain::entities::Course;
/// use registrar_domain::value_objects::Discipline;
///
/// let algebra = Course::shared("Linear Algebra", Discipline::Mathematics, 4);
/// assert_eq!(algebra.name(), "Linear Algebra");
/// assert_eq!(algebra.credits(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    name: String,
    discipline: Discipline,
    credits: i64,
}

impl Course {
    pub fn new(name: impl Into<String>, discipline: Discipline, credits: i64) -> Self {
        Self {
            name: name.into(),
            discipline,
            credits,
        }
    }

    /// Construct a course directly behind a shared handle.
    pub fn shared(name: impl Into<String>, discipline: Discipline, credits: i64) -> CourseRef {
        Rc::new(Self::new(name, discipline, credits))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    #[inline]
    pub fn credits(&self) -> i64 {
        self.credits
    }

    /// Reference identity: true only for handles to the same course instance.
    #[inline]
    pub fn same(a: &CourseRef, b: &CourseRef) -> bool {
        Rc::ptr_eq(a, b)
    }
}
