//! Day-stepping capacity allocation across concurrent projects.
//!
//! The simulator advances a virtual clock one calendar day at a time from the
//! earliest project start. Each day it queries the capacity curve, converts
//! the nominal rate to a working-day-adjusted rate, and splits it across the
//! active projects proportionally to their priority weights, recording each
//! project's end date the first time its remaining equivalent area is
//! depleted. The run is a pure function of its inputs: caller collections are
//! never mutated and no state survives between invocations.

use chrono::NaiveDate;
use log::warn;

use crate::algorithms::rate_curve::RateCurve;
use crate::config::SimulationConfig;
use crate::core::domain::{Project, ProjectId, RatePoint, ScheduledProject};
use crate::time::days_between;

/// Calendar-day to working-day conversion: roughly 250 working days per
/// 365-day year. The clock advances in calendar days but each tick only
/// allocates working-day-equivalent capacity.
pub const WORKING_DAY_FACTOR: f64 = 250.0 / 365.0;

/// Default upper bound on simulated days (about 27 years). Guarantees
/// termination when capacity never materializes.
pub const MAX_SIMULATED_DAYS: u32 = 10_000;

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Completed projects, sorted by display order. Muted projects appear as
    /// zero-duration entries ending on their own start date.
    pub schedule: Vec<ScheduledProject>,
    /// True when the day cap was hit first; projects still unfinished at that
    /// point are absent from `schedule`.
    pub truncated: bool,
}

impl SimulationOutcome {
    fn empty() -> Self {
        Self {
            schedule: Vec::new(),
            truncated: false,
        }
    }
}

/// Working copy of one non-muted project during a run.
struct WorkItem {
    project_id: ProjectId,
    start: NaiveDate,
    priority: f64,
    display_order: i32,
    remaining: f64,
    end: Option<NaiveDate>,
}

/// Runs the allocation simulation with default options (clamping curve,
/// default day cap).
pub fn simulate(projects: &[Project], rate_points: &[RatePoint]) -> SimulationOutcome {
    simulate_with_config(projects, rate_points, &SimulationConfig::default())
}

/// Runs the allocation simulation.
///
/// Degenerate inputs (no projects, no active rate points, all-muted
/// scenarios) yield an empty or trivial schedule rather than an error.
pub fn simulate_with_config(
    projects: &[Project],
    rate_points: &[RatePoint],
    config: &SimulationConfig,
) -> SimulationOutcome {
    let curve = RateCurve::new(rate_points, config.boundary_policy);
    if projects.is_empty() || curve.is_empty() {
        return SimulationOutcome::empty();
    }

    let mut items: Vec<WorkItem> = projects
        .iter()
        .filter(|p| !p.muted)
        .map(|p| WorkItem {
            project_id: p.id,
            start: p.start,
            priority: p.priority,
            display_order: p.display_order,
            remaining: p.equivalent_area(),
            end: None,
        })
        .collect();

    // Muted starts still count: the timeline begins at the earliest start
    // over all projects.
    let mut clock = match projects.iter().map(|p| p.start).min() {
        Some(earliest) => earliest,
        None => return SimulationOutcome::empty(),
    };

    let mut truncated = false;
    let mut steps: u32 = 0;

    while items.iter().any(|item| item.remaining > 0.0) {
        if steps >= config.max_days {
            warn!(
                "simulation exceeded {} days; unfinished projects are dropped from the schedule",
                config.max_days
            );
            truncated = true;
            break;
        }
        steps += 1;

        let active: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.start <= clock && item.remaining > 0.0)
            .map(|(idx, _)| idx)
            .collect();

        if !active.is_empty() {
            let day_rate = curve.rate_at(clock) * WORKING_DAY_FACTOR;
            if day_rate > 0.0 {
                let weights: Vec<f64> = active.iter().map(|&idx| items[idx].priority).collect();
                // None when the day's total priority is not positive; the day
                // then passes without allocation, like a zero-rate day.
                if let Some(allocations) = daily_allocations(day_rate, &weights) {
                    // The active set is fixed for the day: a completion never
                    // changes a peer's share within the same tick.
                    for (&idx, allocation) in active.iter().zip(allocations) {
                        let item = &mut items[idx];
                        item.remaining -= allocation;
                        if item.remaining <= 0.0 && item.end.is_none() {
                            item.end = Some(clock);
                        }
                    }
                }
            }
        }

        match clock.succ_opt() {
            Some(next) => clock = next,
            None => {
                truncated = true;
                break;
            }
        }
    }

    let mut entries: Vec<(i32, ScheduledProject)> = Vec::new();
    for item in items {
        let end = match item.end {
            Some(end) => end,
            // a project with no work never enters the loop; it ends where it starts
            None if item.remaining <= 0.0 => item.start,
            // unfinished at the safety cap
            None => continue,
        };
        entries.push((item.display_order, entry(item.project_id, item.start, end)));
    }
    for p in projects.iter().filter(|p| p.muted) {
        entries.push((p.display_order, entry(p.id, p.start, p.start)));
    }
    entries.sort_by_key(|(order, _)| *order);

    SimulationOutcome {
        schedule: entries.into_iter().map(|(_, e)| e).collect(),
        truncated,
    }
}

/// Each active project's slice of the day's capacity, proportional to its
/// priority weight. Returns `None` when the weights sum to zero or less, in
/// which case nobody is allocated anything that day.
fn daily_allocations(day_rate: f64, weights: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }
    Some(weights.iter().map(|w| day_rate * w / total).collect())
}

fn entry(project_id: ProjectId, start: NaiveDate, end: NaiveDate) -> ScheduledProject {
    ScheduledProject {
        project_id,
        start,
        end,
        duration_days: (days_between(start, end) + 1).max(1),
    }
}
