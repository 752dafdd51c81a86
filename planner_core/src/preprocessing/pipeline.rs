use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::Scenario;
use crate::parsing::json_parser;
use crate::preprocessing::normalizer::ScenarioNormalizer;
use crate::preprocessing::validator::{ScenarioValidator, ValidationResult};

/// Result of a preprocessing run.
pub struct PreprocessResult {
    pub scenario: Scenario,
    pub validation: ValidationResult,
    pub total_projects: usize,
    pub active_rate_points: usize,
}

/// Configuration for the preprocessing pipeline.
pub struct PreprocessConfig {
    pub normalize: bool,
    pub validate: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            validate: true,
        }
    }
}

/// Main preprocessing pipeline: parse, normalize, validate.
pub struct PreprocessPipeline {
    config: PreprocessConfig,
}

impl PreprocessPipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self {
            config: PreprocessConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Process a scenario JSON file into a normalized, validated snapshot.
    pub fn process(&self, scenario_path: &Path) -> Result<PreprocessResult> {
        let scenario = json_parser::parse_scenario_json(scenario_path)
            .context("Failed to parse scenario file")?;

        Ok(self.finish(scenario))
    }

    /// Process from a JSON string (useful for testing or API usage).
    pub fn process_json_str(&self, json_str: &str) -> Result<PreprocessResult> {
        let scenario = json_parser::parse_scenario_json_str(json_str)
            .context("Failed to parse scenario JSON")?;

        Ok(self.finish(scenario))
    }

    fn finish(&self, scenario: Scenario) -> PreprocessResult {
        let scenario = if self.config.normalize {
            ScenarioNormalizer::normalize(scenario)
        } else {
            scenario
        };

        let validation = if self.config.validate {
            ScenarioValidator::validate(&scenario)
        } else {
            ValidationResult::new()
        };

        let total_projects = scenario.projects.len();
        let active_rate_points = scenario.rate_points.iter().filter(|p| p.active).count();

        PreprocessResult {
            scenario,
            validation,
            total_projects,
            active_rate_points,
        }
    }
}

impl Default for PreprocessPipeline {
    fn default() -> Self {
        Self::new()
    }
}
