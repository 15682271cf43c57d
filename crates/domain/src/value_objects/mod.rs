//! Value objects - small immutable types with no identity of their own

mod academic_record;
mod academic_status;
mod discipline;
mod person_info;
mod role;

pub use academic_record::{AcademicRecord, MAX_GPA};
pub use academic_status::{AcademicStatus, StatusPolicy};
pub use discipline::Discipline;
pub use person_info::{ContactInfo, Gender, PersonInfo};
pub use role::Role;
