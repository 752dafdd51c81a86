//! Scenario normalization before validation and simulation.
//!
//! Repairs the gaps a stored scenario may carry (non-finite numeric fields
//! from legacy records) and establishes the rate-point invariants the curve
//! relies on: ascending order and at most one point per date.

use crate::core::domain::{Project, RatePoint, Scenario, BASELINE_COMPLEXITY, DEFAULT_PRIORITY};

/// Normalizer for scenario snapshots.
///
/// Consumes and returns the scenario; the caller's canonical records are
/// never touched.
pub struct ScenarioNormalizer;

impl ScenarioNormalizer {
    pub fn normalize(scenario: Scenario) -> Scenario {
        Scenario {
            name: scenario.name,
            projects: Self::normalize_projects(scenario.projects),
            rate_points: Self::normalize_rate_points(scenario.rate_points),
        }
    }

    /// Replaces non-finite numeric fields with their documented defaults.
    fn normalize_projects(projects: Vec<Project>) -> Vec<Project> {
        projects
            .into_iter()
            .map(|mut p| {
                if !p.area_m2.is_finite() {
                    p.area_m2 = 0.0;
                }
                if !p.complexity.is_finite() {
                    p.complexity = BASELINE_COMPLEXITY;
                }
                if !p.priority.is_finite() {
                    p.priority = DEFAULT_PRIORITY;
                }
                p
            })
            .collect()
    }

    /// Sorts ascending by date and collapses same-date points, keeping the
    /// latest record for each date.
    fn normalize_rate_points(points: Vec<RatePoint>) -> Vec<RatePoint> {
        let mut points: Vec<RatePoint> = points
            .into_iter()
            .map(|mut p| {
                if !p.rate.is_finite() {
                    p.rate = 0.0;
                }
                p
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points.dedup_by(|later, earlier| {
            if later.date == earlier.date {
                *earlier = *later;
                true
            } else {
                false
            }
        });
        points
    }
}
