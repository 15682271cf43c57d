//! Use cases - registry operations.
//!
//! Each module adds one area's operations to [`Registrar`](crate::Registrar).
//! Operations addressed by person id or group handle fail with
//! `DomainError::NotFound` when nothing matches.

pub mod admissions;
pub mod catalog;
pub mod enrollment;
pub mod groups;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use std::sync::Arc;

    use registrar_domain::{Gender, PersonInfo, StatusPolicy};

    use crate::infrastructure::clock::FixedClock;
    use crate::Registrar;

    pub fn registrar(policy: StatusPolicy) -> Registrar {
        let today = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        Registrar::with_clock("Test University", policy, Arc::new(FixedClock(today)))
    }

    pub fn info(first: &str, birth: (i32, u32, u32)) -> PersonInfo {
        PersonInfo::new(
            first,
            "Doe",
            NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            Gender::Other,
            format!("{}@test.edu", first.to_lowercase()),
            "555-0100",
        )
    }
}
