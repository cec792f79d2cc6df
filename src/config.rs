//! Runtime configuration.
//!
//! Limits are admin-configurable bounds on comparison size; the engine
//! only ever reads them through this struct, so changing a bound never
//! touches comparison logic.

use serde::{Deserialize, Serialize};

const DEFAULT_MAX_SITIOS: usize = 4;
const DEFAULT_MAX_YEARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonLimits {
    /// Maximum sitios or entities in a spatial/aggregate comparison.
    pub max_sitios: usize,
    /// Maximum years in a temporal comparison.
    pub max_years: usize,
}

impl Default for ComparisonLimits {
    fn default() -> Self {
        Self {
            max_sitios: DEFAULT_MAX_SITIOS,
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

impl ComparisonLimits {
    /// Read limits from `SITIOMETRICS_MAX_SITIOS` / `SITIOMETRICS_MAX_YEARS`,
    /// falling back to the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            max_sitios: env_usize("SITIOMETRICS_MAX_SITIOS", DEFAULT_MAX_SITIOS),
            max_years: env_usize("SITIOMETRICS_MAX_YEARS", DEFAULT_MAX_YEARS),
        }
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}
