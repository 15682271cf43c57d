use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a person (student or teacher) within one registry.
///
/// Values are minted only by [`PersonIdAllocator`], so every id held by a
/// model was issued by an allocator and is unique within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing person identifiers, starting at 1.
///
/// Students and teachers share one sequence: a student created after three
/// teachers receives id 4.
///
/// Only a [`University`](crate::University) creates allocators; callers
/// reach its allocator through [`University::ids`](crate::University::ids).
///
/// # Example
///
/// ```
/// use registrar_domain::University;
///
/// let mut uni = University::new("Polytechnic");
/// let ids = uni.ids();
/// assert_eq!(ids.next().get(), 1);
/// assert_eq!(ids.next().get(), 2);
/// assert_eq!(ids.peek().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PersonIdAllocator {
    next: u64,
}

impl PersonIdAllocator {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns a fresh identifier and advances the sequence.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> PersonId {
        let id = PersonId(self.next);
        self.next += 1;
        id
    }

    /// Returns the identifier the next call to [`next`](Self::next) will issue.
    pub fn peek(&self) -> PersonId {
        PersonId(self.next)
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}
