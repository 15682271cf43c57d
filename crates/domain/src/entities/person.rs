//! Person - attributes shared by students and teachers

use chrono::NaiveDate;
use serde::Serialize;

use crate::common::{age_on, today};
use crate::ids::{PersonId, PersonIdAllocator};
use crate::value_objects::{ContactInfo, Gender, PersonInfo, Role};

/// Common identity and contact data of a registered person.
///
/// A profile can only be built by the `Student` and `Teacher` constructors,
/// which supply their own role. The id comes from the allocator passed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonProfile {
    id: PersonId,
    first_name: String,
    last_name: String,
    birth_day: NaiveDate,
    gender: Gender,
    contact_info: ContactInfo,
    role: Role,
}

impl PersonProfile {
    pub(crate) fn new(ids: &mut PersonIdAllocator, info: PersonInfo, role: Role) -> Self {
        let PersonInfo {
            first_name,
            last_name,
            birth_day,
            gender,
            email,
            phone,
        } = info;

        Self {
            id: ids.next(),
            first_name,
            last_name,
            birth_day,
            gender,
            contact_info: ContactInfo { email, phone },
            role,
        }
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[inline]
    pub fn birth_day(&self) -> NaiveDate {
        self.birth_day
    }

    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[inline]
    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }

    /// "Last First"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Age in full years as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birth_day, today)
    }

    /// Age in full years as of the current UTC date.
    pub fn age(&self) -> i32 {
        self.age_on(today())
    }
}

/// Capability shared by every kind of registered person.
///
/// Implementors only provide [`profile`](Person::profile); everything else
/// is derived from it.
pub trait Person {
    fn profile(&self) -> &PersonProfile;

    fn id(&self) -> PersonId {
        self.profile().id()
    }

    fn role(&self) -> Role {
        self.profile().role()
    }

    fn full_name(&self) -> String {
        self.profile().full_name()
    }

    fn contact_info(&self) -> &ContactInfo {
        self.profile().contact_info()
    }

    fn age(&self) -> i32 {
        self.profile().age()
    }

    fn age_on(&self, today: NaiveDate) -> i32 {
        self.profile().age_on(today)
    }
}
