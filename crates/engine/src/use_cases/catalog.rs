//! Catalog use cases.

use registrar_domain::{Course, CourseRef, Discipline};

use crate::app::{GroupHandle, Registrar};

impl Registrar {
    /// Create a course and add it to the catalog.
    ///
    /// Courses are not deduplicated: opening the same name twice yields two
    /// distinct courses.
    pub fn open_course(
        &mut self,
        name: impl Into<String>,
        discipline: Discipline,
        credits: i64,
    ) -> CourseRef {
        let course = Course::shared(name, discipline, credits);
        self.university_mut().add_course(course.clone());
        tracing::info!(
            course = course.name(),
            %discipline,
            credits,
            "Course opened"
        );
        course
    }

    pub fn courses(&self) -> Vec<CourseRef> {
        self.university().courses()
    }

    /// Handle of the first group taught for this exact course instance.
    pub fn group_for_course(&self, course: &CourseRef) -> Option<GroupHandle> {
        let found = self
            .university()
            .groups()
            .iter()
            .position(|g| Course::same(g.course(), course))
            .map(Registrar::handle_at);
        tracing::debug!(course = course.name(), found = found.is_some(), "Group lookup by course");
        found
    }
}
