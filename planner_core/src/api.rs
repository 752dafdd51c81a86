//! Function-call boundary consumed by the UI and persistence layers.
//!
//! The caller owns the canonical project and rate-point records; every
//! function here takes immutable snapshots and returns fresh derived values,
//! so rapid repeated invocations (one per user edit) never interfere.

use crate::algorithms::allocation::{simulate, simulate_with_config};
use crate::config::SimulationConfig;
use crate::core::domain::{DateRange, Project, RatePoint, Scenario, ScheduledProject};
use crate::services::timeline::{compute_timeline_data, TimelineData};

/// Compute per-project start/end dates and durations with default options.
pub fn compute_schedule(projects: &[Project], rate_points: &[RatePoint]) -> Vec<ScheduledProject> {
    simulate(projects, rate_points).schedule
}

/// Compute per-project start/end dates and durations with explicit options.
pub fn compute_schedule_with_config(
    projects: &[Project],
    rate_points: &[RatePoint],
    config: &SimulationConfig,
) -> Vec<ScheduledProject> {
    simulate_with_config(projects, rate_points, config).schedule
}

/// Compute the full timeline payload (schedule, summary, capacity grid,
/// display window) with default options.
pub fn compute_timeline(scenario: &Scenario, range: Option<&DateRange>) -> TimelineData {
    compute_timeline_data(scenario, range, &SimulationConfig::default())
}

/// Compute the full timeline payload with explicit options.
pub fn compute_timeline_with_config(
    scenario: &Scenario,
    range: Option<&DateRange>,
    config: &SimulationConfig,
) -> TimelineData {
    compute_timeline_data(scenario, range, config)
}
