//! Domain entities - core business objects with identity

mod course;
mod person;
mod student;
mod teacher;

pub use course::{Course, CourseRef};
pub use person::{Person, PersonProfile};
pub use student::{Student, StudentRef};
pub use teacher::{Teacher, TeacherRef};
