//! Scenario validation with detailed error and warning reporting.
//!
//! Checks project and rate-point data for the issues that would make a
//! schedule meaningless (negative areas, duplicate identities) or surprising
//! (priorities that can never receive capacity, an empty capacity curve).
//! Errors make a scenario invalid; warnings are informational.

use serde::{Deserialize, Serialize};

use crate::core::domain::Scenario;

/// Comprehensive validation result with categorized issues and statistics.
///
/// # Examples
///
/// ```
/// use planner_core::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Negative area".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_projects: usize,
    pub muted_projects: usize,
    pub total_rate_points: usize,
    pub active_rate_points: usize,
    pub duplicate_project_ids: usize,
    pub duplicate_rate_dates: usize,
    pub invalid_areas: usize,
    pub nonpositive_priorities: usize,
    pub nonpositive_complexities: usize,
    pub negative_rates: usize,
}

impl ValidationResult {
    /// Creates a new validation result with valid status and empty
    /// error/warning lists.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for scenario snapshots.
///
/// # Examples
///
/// ```no_run
/// use planner_core::preprocessing::validator::ScenarioValidator;
/// use planner_core::core::domain::Scenario;
///
/// # fn example(scenario: &Scenario) {
/// let result = ScenarioValidator::validate(scenario);
/// if !result.is_valid {
///     eprintln!("Validation failed: {:?}", result.errors);
/// }
/// # }
/// ```
pub struct ScenarioValidator;

impl ScenarioValidator {
    /// Validates a scenario, assuming it has already been normalized (sorted
    /// rate points, finite numeric fields).
    pub fn validate(scenario: &Scenario) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.stats.total_projects = scenario.projects.len();
        result.stats.muted_projects = scenario.projects.iter().filter(|p| p.muted).count();
        result.stats.total_rate_points = scenario.rate_points.len();
        result.stats.active_rate_points =
            scenario.rate_points.iter().filter(|p| p.active).count();

        Self::check_duplicate_ids(scenario, &mut result);
        Self::check_projects(scenario, &mut result);
        Self::check_rate_points(scenario, &mut result);

        if result.stats.active_rate_points == 0 {
            result.add_warning(
                "No active rate points: the capacity curve is empty and nothing can be scheduled"
                    .to_string(),
            );
        }

        result
    }

    fn check_duplicate_ids(scenario: &Scenario, result: &mut ValidationResult) {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for project in &scenario.projects {
            if !seen.insert(project.id) {
                result.stats.duplicate_project_ids += 1;
                if result.stats.duplicate_project_ids <= 5 {
                    result.add_error(format!("Duplicate project id: {}", project.id));
                }
            }
        }

        if result.stats.duplicate_project_ids > 5 {
            result.add_error(format!(
                "Total duplicate project ids: {} (showing first 5)",
                result.stats.duplicate_project_ids
            ));
        }
    }

    fn check_projects(scenario: &Scenario, result: &mut ValidationResult) {
        for project in &scenario.projects {
            if project.area_m2 < 0.0 {
                result.stats.invalid_areas += 1;
                result.add_error(format!(
                    "Project {} has negative area: {}",
                    project.id, project.area_m2
                ));
            }

            if project.priority <= 0.0 {
                result.stats.nonpositive_priorities += 1;
                result.add_warning(format!(
                    "Project {} has priority {} and will never receive capacity",
                    project.id, project.priority
                ));
            }

            if project.complexity <= 0.0 {
                result.stats.nonpositive_complexities += 1;
                result.add_warning(format!(
                    "Project {} has non-positive complexity: {}",
                    project.id, project.complexity
                ));
            }
        }
    }

    fn check_rate_points(scenario: &Scenario, result: &mut ValidationResult) {
        for pair in scenario.rate_points.windows(2) {
            if pair[0].date == pair[1].date {
                result.stats.duplicate_rate_dates += 1;
                if result.stats.duplicate_rate_dates <= 5 {
                    result.add_error(format!("Duplicate rate point date: {}", pair[0].date));
                }
            }
        }

        if result.stats.duplicate_rate_dates > 5 {
            result.add_error(format!(
                "Total duplicate rate point dates: {} (showing first 5)",
                result.stats.duplicate_rate_dates
            ));
        }

        for point in &scenario.rate_points {
            if point.rate < 0.0 {
                result.stats.negative_rates += 1;
                result.add_warning(format!(
                    "Rate point {} has negative rate {}; it is treated as zero capacity",
                    point.date, point.rate
                ));
            }
        }
    }
}
