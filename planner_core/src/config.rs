//! Planner configuration file support.
//!
//! Reads simulation options from a `planner.toml` file. Every field has a
//! default, so an absent or partial file still yields a working
//! configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::allocation::MAX_SIMULATED_DAYS;
use crate::algorithms::rate_curve::BoundaryPolicy;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("No planner.toml found in standard locations")]
    NotFound,
}

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Options for the allocation simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Capacity-curve behaviour outside the sampled window. Clamping is the
    /// default; extrapolation must be asked for explicitly.
    #[serde(default)]
    pub boundary_policy: BoundaryPolicy,
    /// Hard cap on simulated days before a run is abandoned.
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

fn default_max_days() -> u32 {
    MAX_SIMULATED_DAYS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            boundary_policy: BoundaryPolicy::default(),
            max_days: default_max_days(),
        }
    }
}

impl PlannerConfig {
    /// Load planner configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load planner configuration from the default locations, in order:
    /// `planner.toml` in the current directory, `config/planner.toml`, then
    /// the parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("planner.toml"),
            PathBuf::from("config/planner.toml"),
            PathBuf::from("../planner.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }
}
