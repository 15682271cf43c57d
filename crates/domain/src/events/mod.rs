//! Mutation outcomes
//!
//! Aggregate and entity mutations return these values to tell the caller
//! what actually changed, so the application layer can log or react
//! without re-reading state.

pub mod student_events;
pub mod teacher_events;

pub use student_events::*;
pub use teacher_events::*;
