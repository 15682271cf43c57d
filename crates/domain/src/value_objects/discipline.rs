//! Academic disciplines

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Field of study a course belongs to or a teacher specializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Discipline {
    ComputerScience,
    Mathematics,
    Physics,
    Biology,
    Chemistry,
}

impl Discipline {
    pub const ALL: [Discipline; 5] = [
        Discipline::ComputerScience,
        Discipline::Mathematics,
        Discipline::Physics,
        Discipline::Biology,
        Discipline::Chemistry,
    ];

    /// Human-readable label, e.g. "Computer Science".
    pub fn label(self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
            Self::Biology => "Biology",
            Self::Chemistry => "Chemistry",
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Discipline {
    type Err = DomainError;

    /// Accepts the label ("Computer Science") as well as compact forms
    /// ("computer_science", "computerScience", "ComputerScience").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "computerscience" => Ok(Discipline::ComputerScience),
            "mathematics" => Ok(Discipline::Mathematics),
            "physics" => Ok(Discipline::Physics),
            "biology" => Ok(Discipline::Biology),
            "chemistry" => Ok(Discipline::Chemistry),
            _ => Err(DomainError::parse(format!("Unknown discipline: {}", s))),
        }
    }
}
