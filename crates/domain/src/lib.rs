//! Registrar domain model
//!
//! An in-memory academic-records registry: people (students and teachers),
//! courses, teaching groups, and the relationships among them.
//!
//! The crate is pure: no I/O, no logging, no global state. Person ids come
//! from an explicit [`PersonIdAllocator`] owned by the [`University`].

extern crate self as registrar_domain;

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Group, Member, University};
pub use entities::{
    Course, CourseRef, Person, PersonProfile, Student, StudentRef, Teacher, TeacherRef,
};
pub use error::DomainError;
pub use events::{CoursesRemoved, Enrollment, StatusChange};
pub use ids::{PersonId, PersonIdAllocator};
pub use value_objects::{
    AcademicRecord, AcademicStatus, ContactInfo, Discipline, Gender, PersonInfo, Role,
    StatusPolicy,
};
