//! University aggregate - the registry root
//!
//! Owns the person id allocator and three independent collections:
//! courses, groups and people. People are stored together and partitioned
//! by role only when queried.

use std::rc::Rc;

use crate::aggregates::Group;
use crate::entities::{
    Course, CourseRef, Person, PersonProfile, Student, StudentRef, Teacher, TeacherRef,
};
use crate::error::DomainError;
use crate::ids::{PersonId, PersonIdAllocator};
use crate::value_objects::{Discipline, PersonInfo, Role};

/// A registered person of either kind.
#[derive(Debug, Clone)]
pub enum Member {
    Student(StudentRef),
    Teacher(TeacherRef),
}

impl Member {
    pub fn id(&self) -> PersonId {
        match self {
            Self::Student(s) => s.borrow().id(),
            Self::Teacher(t) => t.borrow().id(),
        }
    }

    /// The role tag recorded in the person's profile.
    pub fn role(&self) -> Role {
        match self {
            Self::Student(s) => s.borrow().role(),
            Self::Teacher(t) => t.borrow().role(),
        }
    }

    /// The role implied by the concrete kind.
    pub fn kind(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Teacher(_) => Role::Teacher,
        }
    }

    pub fn full_name(&self) -> String {
        match self {
            Self::Student(s) => s.borrow().full_name(),
            Self::Teacher(t) => t.borrow().full_name(),
        }
    }

    /// Snapshot of the shared person data.
    pub fn profile(&self) -> PersonProfile {
        match self {
            Self::Student(s) => s.borrow().profile().clone(),
            Self::Teacher(t) => t.borrow().profile().clone(),
        }
    }

    pub fn as_student(&self) -> Option<&StudentRef> {
        match self {
            Self::Student(s) => Some(s),
            Self::Teacher(_) => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&TeacherRef> {
        match self {
            Self::Teacher(t) => Some(t),
            Self::Student(_) => None,
        }
    }

    /// Returns true if both members are handles to the same instance.
    pub fn same(&self, other: &Member) -> bool {
        match (self, other) {
            (Self::Student(a), Self::Student(b)) => Rc::ptr_eq(a, b),
            (Self::Teacher(a), Self::Teacher(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Panics if the role tag disagrees with the concrete kind. Such a
    /// member cannot be built through the public constructors.
    fn assert_consistent(&self) {
        let (tag, kind) = (self.role(), self.kind());
        assert_eq!(
            tag,
            kind,
            "person {} carries role tag '{}' but is a {}",
            self.id(),
            tag,
            kind
        );
    }
}

impl From<StudentRef> for Member {
    fn from(value: StudentRef) -> Self {
        Self::Student(value)
    }
}

impl From<TeacherRef> for Member {
    fn from(value: TeacherRef) -> Self {
        Self::Teacher(value)
    }
}

impl From<Student> for Member {
    fn from(value: Student) -> Self {
        Self::Student(value.into_shared())
    }
}

impl From<Teacher> for Member {
    fn from(value: Teacher) -> Self {
        Self::Teacher(value.into_shared())
    }
}

/// The registry root for one academic institution
///
/// # Invariants
///
/// - Every person built through [`ids`](University::ids),
///   [`admit_student`](University::admit_student) or
///   [`hire_teacher`](University::hire_teacher) has an id unique within
///   this university, and ids increase in creation order.
/// - No two registered people share an id; [`add_person`](University::add_person)
///   rejects a person whose id collides with a different registered person.
/// - Add operations never deduplicate: the same instance may be added twice.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_domain::aggregates::University;
/// use registrar_domain::value_objects::{Gender, PersonInfo, Role};
///
/// let mut uni = University::new("Polytechnic");
/// let born = NaiveDate::from_ymd_opt(1999, 2, 3).unwrap();
/// let teacher = uni.hire_teacher(
///     PersonInfo::new("T", "One", born, Gender::Male, "t@p.edu", "1"),
///     vec![],
/// );
/// let student = uni.admit_student(PersonInfo::new("S", "Two", born, Gender::Female, "s@p.edu", "2"));
///
/// assert_eq!(uni.get_all_people_by_role(Role::Student).len(), 1);
/// assert!(uni.get_student_by_id(uni.get_all_people_by_role(Role::Student)[0].id()).is_some());
/// # let _ = (teacher, student);
/// ```
#[derive(Debug)]
pub struct University {
    name: String,
    ids: PersonIdAllocator,
    courses: Vec<CourseRef>,
    groups: Vec<Group>,
    people: Vec<Member>,
}

impl University {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ids: PersonIdAllocator::new(),
            courses: Vec::new(),
            groups: Vec::new(),
            people: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The allocator every person of this university must be built with.
    #[inline]
    pub fn ids(&mut self) -> &mut PersonIdAllocator {
        &mut self.ids
    }

    /// The id the next person built by this university will receive.
    #[inline]
    pub fn peek_id(&self) -> PersonId {
        self.ids.peek()
    }

    // =========================================================================
    // Inserts
    // =========================================================================

    pub fn add_course(&mut self, course: CourseRef) {
        self.courses.push(course);
    }

    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Register a person built with this university's [`ids`](Self::ids).
    ///
    /// Registering the same instance again is allowed and adds a second
    /// entry.
    ///
    /// # Errors
    ///
    /// - `DomainError::DuplicatePerson` if a different person with the same
    ///   id is already registered.
    /// - `DomainError::Validation` if the id was never issued by this
    ///   university's allocator.
    pub fn add_person(&mut self, person: impl Into<Member>) -> Result<(), DomainError> {
        let person = person.into();
        let id = person.id();
        if id.get() > self.ids.issued() {
            return Err(DomainError::validation(format!(
                "person {} was not issued by university '{}'",
                id, self.name
            )));
        }
        if self
            .people
            .iter()
            .any(|existing| existing.id() == id && !existing.same(&person))
        {
            return Err(DomainError::DuplicatePerson { person: id });
        }
        self.people.push(person);
        Ok(())
    }

    /// Build a student from this university's allocator and register it.
    pub fn admit_student(&mut self, info: PersonInfo) -> StudentRef {
        let student = Student::new(&mut self.ids, info).into_shared();
        self.people.push(Member::Student(Rc::clone(&student)));
        student
    }

    /// Build a teacher from this university's allocator and register it.
    pub fn hire_teacher(&mut self, info: PersonInfo, specializations: Vec<Discipline>) -> TeacherRef {
        let teacher = Teacher::new(&mut self.ids, info, specializations).into_shared();
        self.people.push(Member::Teacher(Rc::clone(&teacher)));
        teacher
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// First group, in insertion order, bound to this exact course instance.
    pub fn find_group_by_course(&self, course: &CourseRef) -> Option<&Group> {
        self.groups.iter().find(|g| Course::same(g.course(), course))
    }

    pub fn find_group_by_course_mut(&mut self, course: &CourseRef) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| Course::same(g.course(), course))
    }

    /// The student with `id`, if a person with that id is registered as a
    /// student.
    pub fn get_student_by_id(&self, id: PersonId) -> Option<StudentRef> {
        self.people.iter().find_map(|member| match member {
            Member::Student(s) if member.role() == Role::Student && member.id() == id => {
                Some(Rc::clone(s))
            }
            _ => None,
        })
    }

    pub fn get_teacher_by_id(&self, id: PersonId) -> Option<TeacherRef> {
        self.people.iter().find_map(|member| match member {
            Member::Teacher(t) if member.role() == Role::Teacher && member.id() == id => {
                Some(Rc::clone(t))
            }
            _ => None,
        })
    }

    /// Every registered person holding `role`, in registration order.
    ///
    /// # Panics
    ///
    /// If any person's role tag disagrees with its concrete kind.
    pub fn get_all_people_by_role(&self, role: Role) -> Vec<Member> {
        self.people.iter().for_each(Member::assert_consistent);
        match role {
            Role::Student => self.people_tagged(Role::Student),
            Role::Teacher => self.people_tagged(Role::Teacher),
        }
    }

    fn people_tagged(&self, role: Role) -> Vec<Member> {
        self.people
            .iter()
            .filter(|member| member.role() == role)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn courses(&self) -> Vec<CourseRef> {
        self.courses.clone()
    }

    pub fn people(&self) -> Vec<Member> {
        self.people.clone()
    }

    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[inline]
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    #[inline]
    pub fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Gender;
    use chrono::NaiveDate;

    fn info(first: &str) -> PersonInfo {
        PersonInfo::new(
            first,
            "Doe",
            NaiveDate::from_ymd_opt(1995, 7, 14).unwrap(),
            Gender::Other,
            format!("{}@uni.edu", first.to_lowercase()),
            "555-1000",
        )
    }

    fn ids_of(members: &[Member]) -> Vec<u64> {
        members.iter().map(|m| m.id().get()).collect()
    }

    mod identity {
        use super::*;

        #[test]
        fn students_and_teachers_share_one_sequence() {
            let mut uni = University::new("U");
            for name in ["T1", "T2", "T3"] {
                uni.hire_teacher(info(name), vec![]);
            }
            let student = uni.admit_student(info("S1"));

            assert_eq!(student.borrow().id().get(), 4);
        }

        #[test]
        fn ids_are_unique_and_increasing() {
            let mut uni = University::new("U");
            for i in 0..10 {
                if i % 3 == 0 {
                    uni.hire_teacher(info("T"), vec![]);
                } else {
                    uni.admit_student(info("S"));
                }
            }
            let student = Student::new(uni.ids(), info("Manual"));
            uni.add_person(student).unwrap();

            let ids = ids_of(&uni.people());
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(ids.len(), 11);
        }

        #[test]
        fn person_from_another_university_cannot_reuse_an_id() {
            let mut uni = University::new("U");
            let registered = uni.admit_student(info("A"));
            let mut other = University::new("Other");
            let outsider = Student::new(other.ids(), info("B"));
            assert_eq!(outsider.id(), registered.borrow().id());

            let err = uni.add_person(outsider).unwrap_err();

            assert_eq!(err, DomainError::DuplicatePerson { person: registered.borrow().id() });
            assert_eq!(ids_of(&uni.people()), vec![1]);
        }

        #[test]
        fn id_not_issued_here_is_rejected() {
            let mut uni = University::new("U");
            let mut other = University::new("Other");
            other.admit_student(info("Filler"));
            let outsider = Teacher::new(other.ids(), info("B"), vec![]);

            assert!(matches!(uni.add_person(outsider), Err(DomainError::Validation(_))));
            assert!(uni.people().is_empty());
        }

        #[test]
        fn ids_stay_unique_after_manual_registration() {
            let mut uni = University::new("U");
            uni.admit_student(info("A"));
            let built = Student::new(uni.ids(), info("B"));
            let teacher = Teacher::new(uni.ids(), info("C"), vec![]);
            uni.add_person(teacher).unwrap();
            uni.add_person(built).unwrap();

            let mut ids = ids_of(&uni.people());
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids, vec![1, 2, 3]);
            assert_eq!(uni.peek_id().get(), 4);
        }

        #[test]
        fn same_distinguishes_instances() {
            let mut uni = University::new("U");
            let a = Member::from(uni.admit_student(info("A")));
            let a_again = a.clone();
            let b = Member::from(uni.admit_student(info("B")));

            assert!(a.same(&a_again));
            assert!(!a.same(&b));
        }
    }

    mod inserts {
        use super::*;

        #[test]
        fn add_operations_do_not_deduplicate() {
            let mut uni = University::new("U");
            let course = Course::shared("Biochem", Discipline::Biology, 3);
            uni.add_course(course.clone());
            uni.add_course(course);

            let teacher = uni.hire_teacher(info("T"), vec![]);
            uni.add_person(Rc::clone(&teacher)).unwrap();

            assert_eq!(uni.courses().len(), 2);
            assert_eq!(uni.get_all_people_by_role(Role::Teacher).len(), 2);
        }

        #[test]
        fn collections_are_independent_copies() {
            let mut uni = University::new("U");
            uni.add_course(Course::shared("Biochem", Discipline::Biology, 3));
            uni.admit_student(info("S"));

            let mut courses = uni.courses();
            courses.clear();
            let mut people = uni.people();
            people.clear();

            assert_eq!(uni.courses().len(), 1);
            assert_eq!(uni.people().len(), 1);
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn find_group_by_course_uses_instance_identity() {
            let mut uni = University::new("U");
            let teacher = uni.hire_teacher(info("T"), vec![Discipline::Physics]);
            let course = Course::shared("Optics", Discipline::Physics, 3);
            let lookalike = Course::shared("Optics", Discipline::Physics, 3);

            uni.add_group(Group::new("first", course.clone(), Rc::clone(&teacher)));
            uni.add_group(Group::new("second", course.clone(), teacher));

            assert_eq!(uni.find_group_by_course(&course).map(Group::name), Some("first"));
            assert!(uni.find_group_by_course(&lookalike).is_none());
        }

        #[test]
        fn find_group_by_course_mut_edits_stored_group() {
            let mut uni = University::new("U");
            let teacher = uni.hire_teacher(info("T"), vec![]);
            let student = uni.admit_student(info("S"));
            let course = Course::shared("Optics", Discipline::Physics, 3);
            uni.add_group(Group::new("G", course.clone(), teacher));

            uni.find_group_by_course_mut(&course)
                .unwrap()
                .add_student(student)
                .unwrap();

            assert_eq!(uni.groups()[0].len(), 1);
        }

        #[test]
        fn get_student_by_id_ignores_teachers() {
            let mut uni = University::new("U");
            let teacher = uni.hire_teacher(info("T"), vec![]);
            let student = uni.admit_student(info("S"));
            let teacher_id = teacher.borrow().id();
            let student_id = student.borrow().id();

            assert!(uni.get_student_by_id(teacher_id).is_none());
            let found = uni.get_student_by_id(student_id).unwrap();
            assert!(Rc::ptr_eq(&found, &student));
            assert!(uni.get_teacher_by_id(teacher_id).is_some());
            assert!(uni.get_teacher_by_id(student_id).is_none());
        }
    }

    mod roles {
        use super::*;

        #[test]
        fn partition_by_role_keeps_insertion_order() {
            let mut uni = University::new("U");
            let t1 = uni.hire_teacher(info("T1"), vec![]);
            uni.admit_student(info("S1"));
            let t2 = uni.hire_teacher(info("T2"), vec![]);
            uni.admit_student(info("S2"));

            let teachers = uni.get_all_people_by_role(Role::Teacher);
            let students = uni.get_all_people_by_role(Role::Student);

            assert_eq!(
                ids_of(&teachers),
                vec![t1.borrow().id().get(), t2.borrow().id().get()]
            );
            assert!(teachers.iter().all(|m| m.kind() == Role::Teacher));
            assert!(students.iter().all(|m| m.as_student().is_some()));
            assert_eq!(students.len(), 2);
        }

        #[test]
        fn role_tag_matches_constructor() {
            let mut uni = University::new("U");
            uni.hire_teacher(info("T"), vec![]);
            uni.admit_student(info("S"));

            for member in uni.people() {
                assert_eq!(member.role(), member.kind());
            }
        }
    }
}
