//! Aggregate roots - domain objects that own their related data
//!
//! - `Group` owns roster membership over shared course, teacher and
//!   student instances.
//! - `University` owns the id allocator and the course, group and people
//!   collections.
//!
//! Mutations return `Result<_, DomainError>` and leave the aggregate
//! untouched on failure.

pub mod group;
pub mod university;

pub use group::Group;
pub use university::{Member, University};
