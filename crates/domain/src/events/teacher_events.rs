//! Teacher-related mutation outcomes

/// Outcome of removing courses from a teacher by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursesRemoved {
    pub name: String,
    /// How many assignments carried that name; zero if none did
    pub removed: usize,
}
