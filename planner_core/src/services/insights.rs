//! Per-project and scenario-level derived metrics.
//!
//! Pure, read-only projections over the project list and the computed
//! schedule; recomputed on demand, never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::domain::{Project, ProjectId, ScheduledProject};

/// Per-project metrics for table rows and bar tooltips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInsight {
    pub project_id: ProjectId,
    pub name: String,
    pub area_m2: f64,
    /// Equivalent area, rounded to the nearest m².
    pub equivalent_area_m2: f64,
    pub complexity: f64,
    pub priority: f64,
    pub muted: bool,
    /// Present when the project appears in the computed schedule.
    pub duration_days: Option<i64>,
}

/// Aggregate summary over the scheduled, non-muted projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub total_projects: usize,
    pub aggregate_area_m2: f64,
    pub average_complexity: f64,
    pub earliest_start: NaiveDate,
    pub latest_end: NaiveDate,
}

/// Compute per-project insights, in display order.
pub fn project_insights(
    projects: &[Project],
    schedule: &[ScheduledProject],
) -> Vec<ProjectInsight> {
    let durations: HashMap<ProjectId, i64> = schedule
        .iter()
        .map(|entry| (entry.project_id, entry.duration_days))
        .collect();

    let mut insights: Vec<(i32, ProjectInsight)> = projects
        .iter()
        .map(|p| {
            (
                p.display_order,
                ProjectInsight {
                    project_id: p.id,
                    name: p.name.clone(),
                    area_m2: p.area_m2,
                    equivalent_area_m2: p.equivalent_area().round(),
                    complexity: p.complexity,
                    priority: p.priority,
                    muted: p.muted,
                    duration_days: durations.get(&p.id).copied(),
                },
            )
        })
        .collect();
    insights.sort_by_key(|(order, _)| *order);
    insights.into_iter().map(|(_, insight)| insight).collect()
}

/// Compute the aggregate summary shown in the timeline header.
///
/// Muted projects are ignored; returns `None` when no non-muted project was
/// scheduled, so there is never a mean over zero projects.
pub fn compute_summary(
    projects: &[Project],
    schedule: &[ScheduledProject],
) -> Option<ScenarioSummary> {
    let by_id: HashMap<ProjectId, &Project> = projects.iter().map(|p| (p.id, p)).collect();

    let mut total_projects = 0usize;
    let mut aggregate_area_m2 = 0.0;
    let mut complexity_sum = 0.0;
    let mut earliest_start: Option<NaiveDate> = None;
    let mut latest_end: Option<NaiveDate> = None;

    for entry in schedule {
        let project = match by_id.get(&entry.project_id) {
            Some(p) if !p.muted => p,
            _ => continue,
        };

        total_projects += 1;
        aggregate_area_m2 += project.area_m2;
        complexity_sum += project.complexity;
        earliest_start = Some(earliest_start.map_or(entry.start, |d| d.min(entry.start)));
        latest_end = Some(latest_end.map_or(entry.end, |d| d.max(entry.end)));
    }

    if total_projects == 0 {
        return None;
    }

    Some(ScenarioSummary {
        total_projects,
        aggregate_area_m2,
        average_complexity: complexity_sum / total_projects as f64,
        earliest_start: earliest_start?,
        latest_end: latest_end?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::BASELINE_COMPLEXITY;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: i64, area: f64, complexity: f64, muted: bool) -> Project {
        Project {
            id: ProjectId::new(id),
            name: format!("P{}", id),
            area_m2: area,
            complexity,
            priority: 10.0,
            start: date(2024, 1, 1),
            muted,
            display_order: id as i32,
        }
    }

    fn entry(id: i64, start: NaiveDate, end: NaiveDate) -> ScheduledProject {
        ScheduledProject {
            project_id: ProjectId::new(id),
            start,
            end,
            duration_days: (end - start).num_days() + 1,
        }
    }

    #[test]
    fn test_equivalent_area_is_rounded() {
        let projects = [project(1, 1000.0, 7.0, false)];
        let insights = project_insights(&projects, &[]);
        // 1000 * 7 / 4.5 = 1555.55…
        assert_eq!(insights[0].equivalent_area_m2, 1556.0);
        assert!(insights[0].duration_days.is_none());
    }

    #[test]
    fn test_insights_join_schedule_durations() {
        let projects = [project(1, 100.0, BASELINE_COMPLEXITY, false)];
        let schedule = [entry(1, date(2024, 1, 1), date(2024, 1, 10))];
        let insights = project_insights(&projects, &schedule);
        assert_eq!(insights[0].duration_days, Some(10));
    }

    #[test]
    fn test_insights_follow_display_order() {
        let mut a = project(1, 100.0, BASELINE_COMPLEXITY, false);
        a.display_order = 5;
        let mut b = project(2, 100.0, BASELINE_COMPLEXITY, false);
        b.display_order = 1;

        let insights = project_insights(&[a, b], &[]);
        assert_eq!(insights[0].project_id, ProjectId::new(2));
    }

    #[test]
    fn test_summary_over_non_muted_projects() {
        let projects = [
            project(1, 100.0, 4.0, false),
            project(2, 300.0, 6.0, false),
            project(3, 9999.0, 9.0, true),
        ];
        let schedule = [
            entry(1, date(2024, 1, 1), date(2024, 2, 1)),
            entry(2, date(2024, 1, 15), date(2024, 3, 1)),
            entry(3, date(2024, 1, 1), date(2024, 1, 1)),
        ];

        let summary = compute_summary(&projects, &schedule).unwrap();
        assert_eq!(summary.total_projects, 2);
        assert_eq!(summary.aggregate_area_m2, 400.0);
        assert_eq!(summary.average_complexity, 5.0);
        assert_eq!(summary.earliest_start, date(2024, 1, 1));
        assert_eq!(summary.latest_end, date(2024, 3, 1));
    }

    #[test]
    fn test_summary_is_none_when_all_muted() {
        let projects = [project(1, 100.0, 4.0, true)];
        let schedule = [entry(1, date(2024, 1, 1), date(2024, 1, 1))];
        assert!(compute_summary(&projects, &schedule).is_none());
    }

    #[test]
    fn test_summary_is_none_for_empty_schedule() {
        let projects = [project(1, 100.0, 4.0, false)];
        assert!(compute_summary(&projects, &[]).is_none());
    }
}
