//! Group and teaching-assignment use cases.

use registrar_domain::{CourseRef, CoursesRemoved, DomainError, Group, PersonId, StudentRef};

use crate::app::{GroupHandle, Registrar};

impl Registrar {
    // =========================================================================
    // Teaching assignments
    // =========================================================================

    /// Add `course` to a teacher's assignments. Repeats are kept.
    pub fn assign_course(&mut self, teacher_id: PersonId, course: &CourseRef) -> Result<(), DomainError> {
        let teacher = self.teacher(teacher_id)?;
        teacher.borrow_mut().assign_course(CourseRef::clone(course));
        tracing::info!(%teacher_id, course = course.name(), "Course assigned to teacher");
        Ok(())
    }

    /// Drop every assignment named `course_name` from a teacher.
    pub fn unassign_course(
        &mut self,
        teacher_id: PersonId,
        course_name: &str,
    ) -> Result<CoursesRemoved, DomainError> {
        let teacher = self.teacher(teacher_id)?;
        let outcome = teacher.borrow_mut().remove_course(course_name);
        tracing::info!(
            %teacher_id,
            course = %outcome.name,
            removed = outcome.removed,
            "Courses unassigned from teacher"
        );
        Ok(outcome)
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Create a group for `course` taught by `teacher_id` and register it.
    pub fn form_group(
        &mut self,
        name: impl Into<String>,
        course: &CourseRef,
        teacher_id: PersonId,
    ) -> Result<GroupHandle, DomainError> {
        let teacher = self.teacher(teacher_id)?;
        let group = Group::new(name, CourseRef::clone(course), teacher);
        let handle = self.next_group_handle();

        tracing::info!(
            group = group.name(),
            %handle,
            course = course.name(),
            %teacher_id,
            "Group formed"
        );
        self.university_mut().add_group(group);
        Ok(handle)
    }

    pub fn add_to_group(&mut self, handle: GroupHandle, student_id: PersonId) -> Result<(), DomainError> {
        let student = self.student(student_id)?;
        let group = self.group_mut(handle)?;

        match group.add_student(student) {
            Ok(()) => {
                tracing::info!(
                    group = group.name(),
                    %student_id,
                    size = group.len(),
                    "Student added to group"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(group = group.name(), %student_id, error = %e, "Group add rejected");
                Err(e)
            }
        }
    }

    pub fn remove_from_group(
        &mut self,
        handle: GroupHandle,
        student_id: PersonId,
    ) -> Result<StudentRef, DomainError> {
        let group = self.group_mut(handle)?;

        match group.remove_student_by_id(student_id) {
            Ok(student) => {
                tracing::info!(
                    group = group.name(),
                    %student_id,
                    size = group.len(),
                    "Student removed from group"
                );
                Ok(student)
            }
            Err(e) => {
                tracing::warn!(group = group.name(), %student_id, error = %e, "Group removal rejected");
                Err(e)
            }
        }
    }

    /// Mean GPA of a group's roster; 0.0 for an empty group.
    pub fn group_average(&self, handle: GroupHandle) -> Result<f64, DomainError> {
        let group = self.group(handle)?;
        let average = group.average_group_score();
        tracing::debug!(group = group.name(), size = group.len(), average, "Group average computed");
        Ok(average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{info, registrar};
    use registrar_domain::{Discipline, Person, StatusPolicy};
    use std::rc::Rc;

    struct Fixture {
        reg: Registrar,
        teacher: PersonId,
        course: CourseRef,
    }

    fn fixture() -> Fixture {
        let mut reg = registrar(StatusPolicy::Permissive);
        let teacher = reg.hire_teacher(info("Grace", (1966, 12, 9)), vec![Discipline::ComputerScience]);
        let teacher = teacher.borrow().id();
        let course = reg.open_course("Compilers", Discipline::ComputerScience, 5);
        Fixture { reg, teacher, course }
    }

    fn admit(reg: &mut Registrar, first: &str, gpa: f64) -> PersonId {
        let student = reg.admit_student(info(first, (2003, 6, 1)));
        let id = student.borrow().id();
        reg.record_gpa(id, gpa).unwrap();
        id
    }

    mod assignments {
        use super::*;

        #[test]
        fn assign_then_unassign_by_name() {
            let mut f = fixture();
            f.reg.assign_course(f.teacher, &f.course).unwrap();
            f.reg.assign_course(f.teacher, &f.course).unwrap();

            let outcome = f.reg.unassign_course(f.teacher, "Compilers").unwrap();

            assert_eq!(outcome.removed, 2);
            assert!(f.reg.teacher(f.teacher).unwrap().borrow().courses().is_empty());
        }

        #[test]
        fn students_cannot_be_assigned_courses() {
            let mut f = fixture();
            let student = admit(&mut f.reg, "Ann", 3.0);

            let err = f.reg.assign_course(student, &f.course).unwrap_err();

            assert!(matches!(err, DomainError::NotFound { entity_type: "Teacher", .. }));
        }
    }

    mod roster {
        use super::*;

        #[test]
        fn form_group_returns_sequential_handles() {
            let mut f = fixture();
            let first = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            let second = f.reg.form_group("C-2", &f.course, f.teacher).unwrap();

            assert_eq!(first.index(), 0);
            assert_eq!(second.index(), 1);
            assert_eq!(f.reg.group(second).unwrap().name(), "C-2");
        }

        #[test]
        fn add_twice_is_duplicate_member() {
            let mut f = fixture();
            let group = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            let ann = admit(&mut f.reg, "Ann", 3.0);

            f.reg.add_to_group(group, ann).unwrap();
            let err = f.reg.add_to_group(group, ann).unwrap_err();

            assert!(matches!(err, DomainError::DuplicateMember { .. }));
            assert_eq!(f.reg.group(group).unwrap().len(), 1);
        }

        #[test]
        fn remove_returns_the_shared_student() {
            let mut f = fixture();
            let group = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            let ann = admit(&mut f.reg, "Ann", 3.0);
            f.reg.add_to_group(group, ann).unwrap();

            let removed = f.reg.remove_from_group(group, ann).unwrap();

            assert!(Rc::ptr_eq(&removed, &f.reg.student(ann).unwrap()));
            assert!(f.reg.group(group).unwrap().is_empty());
        }

        #[test]
        fn remove_non_member_is_member_not_found() {
            let mut f = fixture();
            let group = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            let ann = admit(&mut f.reg, "Ann", 3.0);

            let err = f.reg.remove_from_group(group, ann).unwrap_err();

            assert!(matches!(err, DomainError::MemberNotFound { .. }));
        }

        #[test]
        fn unknown_handle_is_not_found() {
            let mut f = fixture();
            let ann = admit(&mut f.reg, "Ann", 3.0);
            let bogus = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            let bogus = Registrar::handle_at(bogus.index() + 1);

            assert!(matches!(
                f.reg.add_to_group(bogus, ann),
                Err(DomainError::NotFound { entity_type: "Group", .. })
            ));
        }
    }

    mod average {
        use super::*;

        #[test]
        fn empty_group_averages_zero() {
            let mut f = fixture();
            let group = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            assert_eq!(f.reg.group_average(group).unwrap(), 0.0);
        }

        #[test]
        fn average_tracks_roster() {
            let mut f = fixture();
            let group = f.reg.form_group("C-1", &f.course, f.teacher).unwrap();
            let ann = admit(&mut f.reg, "Ann", 4.0);
            let bob = admit(&mut f.reg, "Bob", 2.0);
            f.reg.add_to_group(group, ann).unwrap();
            f.reg.add_to_group(group, bob).unwrap();

            assert!((f.reg.group_average(group).unwrap() - 3.0).abs() < f64::EPSILON);

            f.reg.remove_from_group(group, bob).unwrap();
            assert_eq!(f.reg.group_average(group).unwrap(), 4.0);
        }
    }
}
