//! Domain models for production-planning scenarios.
//!
//! This module provides the core data structures handed across the scheduling
//! boundary: projects competing for capacity, the sparse samples that define
//! the capacity curve, and the derived schedule entries returned to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::normalize_month;

crate::define_id_type!(i64, ProjectId);

/// Complexity factor a project's complexity is measured against. A project at
/// baseline complexity consumes exactly its nominal area.
pub const BASELINE_COMPLEXITY: f64 = 4.5;

/// Priority weight assigned to projects that do not declare one.
pub const DEFAULT_PRIORITY: f64 = 10.0;

/// A project competing for production capacity.
///
/// Optional wire fields (`complexity`, `priority`, `muted`, `display_order`)
/// are already defaulted by the time a `Project` exists; the simulator never
/// sees a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Built area the project requires, in m².
    pub area_m2: f64,
    /// Complexity factor relative to [`BASELINE_COMPLEXITY`].
    pub complexity: f64,
    /// Priority weight governing the project's share of each day's capacity.
    pub priority: f64,
    /// First day the project may consume capacity.
    pub start: NaiveDate,
    /// Muted projects never consume capacity and are reported as zero-duration.
    pub muted: bool,
    /// Presentation order in the timeline. Not a scheduling input.
    pub display_order: i32,
}

impl Project {
    /// Effective amount of capacity-consuming work the project requires:
    /// nominal area scaled by complexity relative to the baseline.
    pub fn equivalent_area(&self) -> f64 {
        self.area_m2 * self.complexity / BASELINE_COMPLEXITY
    }
}

/// A sample on the production-capacity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    /// Nominal production rate in m² per working day.
    pub rate: f64,
    /// Only active points shape the interpolated curve; inactive points are
    /// grid placeholders with no simulation meaning.
    pub active: bool,
}

impl RatePoint {
    pub fn new(date: NaiveDate, rate: f64) -> Self {
        Self {
            date,
            rate,
            active: true,
        }
    }
}

/// Month-granularity display window for the capacity curve grid.
///
/// Independent of project dates; it never bounds the simulation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range with both endpoints normalized to the first of their
    /// month. Endpoints are reordered if given backwards.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let start = normalize_month(start);
        let end = normalize_month(end);
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }
}

/// Derived schedule entry for one project. Recomputed on every input change,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProject {
    pub project_id: ProjectId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Inclusive calendar-day span, at least 1.
    pub duration_days: i64,
}

/// Immutable scenario snapshot handed to the scheduling core: one project
/// list and one capacity curve. The caller retains ownership of the canonical
/// records; the core only derives from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub projects: Vec<Project>,
    pub rate_points: Vec<RatePoint>,
}
