//! Solver settings, optionally loaded from a TOML file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::PsmcError;

/// Default wall-clock budget for one solve, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub time_limit_secs: f64,
    pub num_workers: Option<i32>,
    pub random_seed: Option<i32>,
    pub log_search_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            num_workers: None,
            random_seed: None,
            log_search_progress: false,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, PsmcError> {
        let config: SolverConfig =
            toml::from_str(text).map_err(|e| PsmcError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, PsmcError> {
        let text = std::fs::read_to_string(path).map_err(|source| PsmcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), PsmcError> {
        if !self.time_limit_secs.is_finite() || self.time_limit_secs <= 0.0 {
            return Err(PsmcError::Config(format!(
                "time limit must be a positive number of seconds, got {}",
                self.time_limit_secs
            )));
        }
        if let Some(workers) = self.num_workers {
            if workers < 1 {
                return Err(PsmcError::Config(format!(
                    "worker count must be at least 1, got {}",
                    workers
                )));
            }
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs_f64(self.time_limit_secs)
    }
}
