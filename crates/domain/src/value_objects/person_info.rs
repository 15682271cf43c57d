//! Personal details supplied when a person is registered

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(DomainError::parse(format!("Unknown gender: {}", s))),
        }
    }
}

/// How to reach a person. Formats are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// Input record for constructing a student or teacher.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_domain::value_objects::{Gender, PersonInfo};
///
/// let info = PersonInfo::new(
///     "Ada",
///     "Lovelace",
///     NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
///     Gender::Female,
///     "ada@example.org",
///     "+44 20 0000 0000",
/// );
/// assert_eq!(info.contact_info().email, "ada@example.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub first_name: String,
    pub last_name: String,
    pub birth_day: NaiveDate,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
}

impl PersonInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_day: NaiveDate,
        gender: Gender,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_day,
            gender,
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn contact_info(&self) -> ContactInfo {
        ContactInfo {
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}
