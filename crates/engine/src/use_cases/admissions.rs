//! Admissions use cases.
//!
//! Registering people and querying them by role. Ids come from the
//! university's own allocator, so they are unique within this registrar.

use registrar_domain::{
    Discipline, DomainError, Member, Person, PersonId, PersonInfo, Role, StudentRef, TeacherRef,
};

use crate::app::Registrar;

impl Registrar {
    pub fn hire_teacher(
        &mut self,
        info: PersonInfo,
        specializations: Vec<Discipline>,
    ) -> TeacherRef {
        let teacher = self.university_mut().hire_teacher(info, specializations);
        {
            let t = teacher.borrow();
            tracing::info!(
                person_id = %t.id(),
                name = %t.full_name(),
                specializations = t.specializations().len(),
                "Teacher hired"
            );
        }
        teacher
    }

    pub fn admit_student(&mut self, info: PersonInfo) -> StudentRef {
        let student = self.university_mut().admit_student(info);
        {
            let s = student.borrow();
            tracing::info!(
                person_id = %s.id(),
                name = %s.full_name(),
                "Student admitted"
            );
        }
        student
    }

    /// Everyone holding `role`, in registration order.
    ///
    /// # Panics
    ///
    /// If a registered person's role tag disagrees with its kind.
    pub fn people_by_role(&self, role: Role) -> Vec<Member> {
        let people = self.university().get_all_people_by_role(role);
        tracing::debug!(%role, count = people.len(), "People listed by role");
        people
    }

    /// Age in whole years of any registered person, as of the registrar's
    /// clock.
    pub fn age_of(&self, id: PersonId) -> Result<i32, DomainError> {
        let member = self
            .university()
            .people()
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| DomainError::not_found("Person", id))?;
        Ok(member.profile().age_on(self.clock().today()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{info, registrar};
    use crate::infrastructure::ports::MockClockPort;
    use chrono::NaiveDate;
    use registrar_domain::StatusPolicy;
    use std::sync::Arc;

    #[test]
    fn ids_increase_across_kinds() {
        let mut reg = registrar(StatusPolicy::Permissive);
        let t = reg.hire_teacher(info("Tess", (1970, 1, 1)), vec![Discipline::Biology]);
        let s = reg.admit_student(info("Sam", (2004, 1, 1)));
        let u = reg.admit_student(info("Uma", (2004, 1, 1)));

        let ids = [t.borrow().id(), s.borrow().id(), u.borrow().id()];
        assert!(ids[0] < ids[1] && ids[1] < ids[2]);
    }

    #[test]
    fn people_by_role_partitions_in_order() {
        let mut reg = registrar(StatusPolicy::Permissive);
        let s1 = reg.admit_student(info("S1", (2003, 5, 5)));
        let t1 = reg.hire_teacher(info("T1", (1975, 5, 5)), vec![]);
        let s2 = reg.admit_student(info("S2", (2003, 5, 5)));

        let students = reg.people_by_role(Role::Student);
        let teachers = reg.people_by_role(Role::Teacher);

        let student_ids: Vec<_> = students.iter().map(Member::id).collect();
        assert_eq!(student_ids, vec![s1.borrow().id(), s2.borrow().id()]);
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].id(), t1.borrow().id());
    }

    #[test]
    fn age_uses_registrar_clock() {
        // Clock reads 2024-09-01.
        let mut reg = registrar(StatusPolicy::Permissive);
        let today = reg.admit_student(info("Today", (2004, 9, 1)));
        let tomorrow = reg.admit_student(info("Tomorrow", (2004, 9, 2)));

        assert_eq!(reg.age_of(today.borrow().id()).unwrap(), 20);
        assert_eq!(reg.age_of(tomorrow.borrow().id()).unwrap(), 19);
    }

    #[test]
    fn age_reads_clock_once_per_call() {
        let mut clock = MockClockPort::new();
        let day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        clock.expect_today().times(1).returning(move || day);

        let mut reg = Registrar::with_clock("Mocked", StatusPolicy::Permissive, Arc::new(clock));
        let s = reg.admit_student(info("Mo", (2000, 1, 1)));

        assert_eq!(reg.age_of(s.borrow().id()).unwrap(), 30);
    }

    #[test]
    fn age_of_unknown_person_is_not_found() {
        let reg = registrar(StatusPolicy::Permissive);
        let stranger = reg.university().peek_id();
        let err = reg.age_of(stranger).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "Person", .. }));
    }
}
