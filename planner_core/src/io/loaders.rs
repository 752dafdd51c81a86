use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::Scenario;
use crate::preprocessing::pipeline::PreprocessPipeline;
use crate::preprocessing::validator::ValidationResult;

/// Result of loading scenario data.
#[derive(Debug)]
pub struct ScenarioLoadResult {
    pub scenario: Scenario,
    pub validation: ValidationResult,
    pub num_projects: usize,
    pub num_rate_points: usize,
}

/// Unified interface for loading scenario data from JSON exports.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a file. Only `.json` exports are supported.
    pub fn load_from_file(path: &Path) -> Result<ScenarioLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => {
                let result = PreprocessPipeline::new()
                    .process(path)
                    .context("Failed to load scenario file")?;
                Ok(Self::to_load_result(result))
            }
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load a scenario from a JSON string.
    pub fn load_from_json_str(json_str: &str) -> Result<ScenarioLoadResult> {
        let result = PreprocessPipeline::new()
            .process_json_str(json_str)
            .context("Failed to load scenario JSON")?;
        Ok(Self::to_load_result(result))
    }

    fn to_load_result(
        result: crate::preprocessing::pipeline::PreprocessResult,
    ) -> ScenarioLoadResult {
        let num_projects = result.scenario.projects.len();
        let num_rate_points = result.scenario.rate_points.len();
        ScenarioLoadResult {
            scenario: result.scenario,
            validation: result.validation,
            num_projects,
            num_rate_points,
        }
    }
}
