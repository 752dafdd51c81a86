//! Timeline payload assembly for the Gantt view.
//!
//! Bundles everything the renderer needs for one scenario: the computed
//! schedule, the aggregate summary, the monthly capacity-curve grid, and the
//! padded display window.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithms::allocation::simulate_with_config;
use crate::algorithms::rate_curve::{BoundaryPolicy, RateCurve};
use crate::config::SimulationConfig;
use crate::core::domain::{DateRange, RatePoint, Scenario, ScheduledProject};
use crate::services::insights::{compute_summary, project_insights, ProjectInsight, ScenarioSummary};
use crate::time::{add_months, month_key};

/// Days of slack added on each side of the scheduled bars.
const WINDOW_PADDING_DAYS: i64 = 5;

/// One month on the editable capacity-curve grid. Months carrying a stored
/// active sample keep their own rate; every other month shows the
/// interpolated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSeriesPoint {
    pub month: NaiveDate,
    pub rate: f64,
    pub active: bool,
}

/// Day-granularity span the timeline should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Everything the timeline renderer needs for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineData {
    pub schedule: Vec<ScheduledProject>,
    pub insights: Vec<ProjectInsight>,
    pub summary: Option<ScenarioSummary>,
    pub rate_series: Vec<RateSeriesPoint>,
    /// Absent only when the scenario holds no dated input at all.
    pub window: Option<DisplayWindow>,
    /// True when the simulation hit its day cap and dropped unfinished
    /// projects.
    pub truncated: bool,
}

/// Compute the complete timeline payload for a scenario.
///
/// `range` is the user-chosen display window for the capacity grid; when
/// absent the grid spans the computed schedule instead.
pub fn compute_timeline_data(
    scenario: &Scenario,
    range: Option<&DateRange>,
    config: &SimulationConfig,
) -> TimelineData {
    let outcome = simulate_with_config(&scenario.projects, &scenario.rate_points, config);
    let window = display_window(&outcome.schedule, range, &scenario.rate_points);

    let series_range = range
        .copied()
        .or_else(|| window.map(|w| DateRange::new(w.start, w.end)));
    let rate_series = series_range
        .map(|r| build_monthly_series(&scenario.rate_points, &r))
        .unwrap_or_default();

    let insights = project_insights(&scenario.projects, &outcome.schedule);
    let summary = compute_summary(&scenario.projects, &outcome.schedule);

    TimelineData {
        schedule: outcome.schedule,
        insights,
        summary,
        rate_series,
        window,
        truncated: outcome.truncated,
    }
}

/// The span to render: the scheduled bars padded by a few days, or the
/// explicit range, or the extent of the rate points. Never derived from the
/// wall clock, so identical inputs always produce identical payloads.
fn display_window(
    schedule: &[ScheduledProject],
    range: Option<&DateRange>,
    rate_points: &[RatePoint],
) -> Option<DisplayWindow> {
    if !schedule.is_empty() {
        let min_start = schedule.iter().map(|s| s.start).min()?;
        let max_end = schedule.iter().map(|s| s.end).max()?;
        return Some(DisplayWindow {
            start: min_start - Duration::days(WINDOW_PADDING_DAYS),
            end: max_end + Duration::days(WINDOW_PADDING_DAYS),
        });
    }

    if let Some(range) = range {
        return Some(DisplayWindow {
            start: range.start,
            end: range.end,
        });
    }

    let first = rate_points.iter().map(|p| p.date).min()?;
    let last = rate_points.iter().map(|p| p.date).max()?;
    Some(DisplayWindow {
        start: first,
        end: last,
    })
}

/// Build the month-by-month capacity grid over `range`.
///
/// A month holding a stored active point keeps that point's rate and is
/// flagged active; all other months carry the interpolated (clamped) curve
/// value and are editable placeholders.
pub fn build_monthly_series(points: &[RatePoint], range: &DateRange) -> Vec<RateSeriesPoint> {
    let curve = RateCurve::new(points, BoundaryPolicy::Clamp);
    let stored: HashMap<String, &RatePoint> = points
        .iter()
        .map(|p| (month_key(p.date), p))
        .collect();

    let mut series = Vec::new();
    let mut cursor = range.start;
    while cursor <= range.end {
        let point = match stored.get(&month_key(cursor)) {
            Some(p) if p.active => RateSeriesPoint {
                month: cursor,
                rate: p.rate,
                active: true,
            },
            _ => RateSeriesPoint {
                month: cursor,
                rate: curve.rate_at(cursor),
                active: false,
            },
        };
        series.push(point);
        cursor = add_months(cursor, 1);
    }
    series
}
