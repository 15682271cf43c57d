//! Registrar configuration loaded from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `REGISTRAR_UNIVERSITY_NAME` | `University` |
//! | `REGISTRAR_STATUS_POLICY` | `permissive` |
//! | `REGISTRAR_LOG_FILTER` | `registrar_engine=info` |

use std::path::Path;

use anyhow::{Context, Result};
use registrar_domain::StatusPolicy;

pub const UNIVERSITY_NAME_VAR: &str = "REGISTRAR_UNIVERSITY_NAME";
pub const STATUS_POLICY_VAR: &str = "REGISTRAR_STATUS_POLICY";
pub const LOG_FILTER_VAR: &str = "REGISTRAR_LOG_FILTER";

pub const DEFAULT_UNIVERSITY_NAME: &str = "University";
pub const DEFAULT_LOG_FILTER: &str = "registrar_engine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarConfig {
    pub university_name: String,
    pub status_policy: StatusPolicy,
    pub log_filter: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            university_name: DEFAULT_UNIVERSITY_NAME.to_string(),
            status_policy: StatusPolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RegistrarConfig {
    /// Load from the process environment, after reading `.env.local` and
    /// `.env` from the repository root.
    pub fn from_env() -> Result<Self> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(name) = get(UNIVERSITY_NAME_VAR) {
            config.university_name = name;
        }
        if let Some(raw) = get(STATUS_POLICY_VAR) {
            config.status_policy = raw
                .parse::<StatusPolicy>()
                .with_context(|| format!("invalid {STATUS_POLICY_VAR}: {raw:?}"))?;
        }
        if let Some(filter) = get(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Variables already set in the process environment are not overridden.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
