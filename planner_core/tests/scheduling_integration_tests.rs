use chrono::NaiveDate;
use proptest::prelude::*;

use planner_core::algorithms::allocation::{simulate, WORKING_DAY_FACTOR};
use planner_core::compute_timeline;
use planner_core::core::domain::{
    Project, ProjectId, RatePoint, Scenario, BASELINE_COMPLEXITY, DEFAULT_PRIORITY,
};
use planner_core::io::ScenarioLoader;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn project(id: i64, area: f64, priority: f64, start: NaiveDate) -> Project {
    Project {
        id: ProjectId::new(id),
        name: format!("P{}", id),
        area_m2: area,
        complexity: BASELINE_COMPLEXITY,
        priority,
        start,
        muted: false,
        display_order: id as i32,
    }
}

fn flat_curve(rate: f64) -> Vec<RatePoint> {
    vec![
        RatePoint::new(date(2024, 1, 1), rate),
        RatePoint::new(date(2025, 1, 1), rate),
    ]
}

#[test]
fn flat_rate_project_completes_in_about_fifteen_days() {
    // 1000 m² at nominal 100/day: the working-day adjustment makes the
    // effective rate ~68.49/day, so completion lands on the 15th day.
    let projects = [project(1, 1000.0, DEFAULT_PRIORITY, date(2024, 1, 1))];
    let outcome = simulate(&projects, &flat_curve(100.0));

    assert!(!outcome.truncated);
    let scheduled = &outcome.schedule[0];
    assert!((14..=16).contains(&scheduled.duration_days));
    // the convention this implementation fixes: inclusive day count
    assert_eq!(scheduled.end, date(2024, 1, 15));
    assert_eq!(scheduled.duration_days, 15);
}

#[test]
fn higher_priority_finishes_proportionally_sooner() {
    // Equal work, priorities 10 vs 30: B draws three quarters of each day's
    // capacity and finishes first; A then runs alone.
    let a = project(1, 300.0, 10.0, date(2024, 1, 1));
    let b = project(2, 300.0, 30.0, date(2024, 1, 1));
    let outcome = simulate(&[a, b], &flat_curve(100.0));

    let a_entry = &outcome.schedule[0];
    let b_entry = &outcome.schedule[1];
    assert_eq!(a_entry.project_id, ProjectId::new(1));
    assert_eq!(b_entry.project_id, ProjectId::new(2));

    assert_eq!(b_entry.end, date(2024, 1, 6));
    assert_eq!(b_entry.duration_days, 6);
    assert_eq!(a_entry.end, date(2024, 1, 9));
    assert_eq!(a_entry.duration_days, 9);
    assert!(b_entry.end < a_entry.end);
}

#[test]
fn json_export_round_trips_into_a_timeline() {
    let json = r#"{
        "name": "Two towers",
        "projects": [
            { "id": 1, "name": "North", "m2": 1000, "start": "2024-01-01" },
            { "id": 2, "name": "South", "m2": 500, "priority": 20, "start": "2024-01-08" }
        ],
        "productionRatePoints": [
            { "date": "2024-01-01", "rate": 100 },
            { "date": "2025-01-01", "rate": 100 }
        ]
    }"#;

    let loaded = ScenarioLoader::load_from_json_str(json).unwrap();
    assert!(loaded.validation.is_valid);

    let data = compute_timeline(&loaded.scenario, None);
    assert!(!data.truncated);
    assert_eq!(data.schedule.len(), 2);

    let summary = data.summary.unwrap();
    assert_eq!(summary.total_projects, 2);
    assert_eq!(summary.aggregate_area_m2, 1500.0);
    assert_eq!(summary.earliest_start, date(2024, 1, 1));

    let window = data.window.unwrap();
    assert_eq!(window.start, date(2023, 12, 27));
    assert!(!data.rate_series.is_empty());

    // baseline complexity leaves the equivalent area equal to the raw area
    assert_eq!(data.insights[0].equivalent_area_m2, 1000.0);
    assert_eq!(data.insights[1].equivalent_area_m2, 500.0);
}

#[test]
fn pathological_zero_capacity_scenario_is_reported_not_raised() {
    let projects = [project(1, 1000.0, DEFAULT_PRIORITY, date(2024, 1, 1))];
    let outcome = simulate(&projects, &flat_curve(0.0));
    assert!(outcome.truncated);
    assert!(outcome.schedule.is_empty());
}

proptest! {
    // A lone project at baseline complexity must finish on the first day its
    // cumulative allocation covers the area, and not a day earlier.
    #[test]
    fn single_project_duration_covers_the_area(
        area in 1.0f64..20_000.0,
        rate in 10.0f64..400.0,
    ) {
        let projects = [project(1, area, DEFAULT_PRIORITY, date(2024, 1, 1))];
        let outcome = simulate(&projects, &flat_curve(rate));
        prop_assert!(!outcome.truncated);

        let duration = outcome.schedule[0].duration_days;
        let daily = rate * WORKING_DAY_FACTOR;
        prop_assert!(duration as f64 * daily >= area - 1e-6);
        prop_assert!((duration - 1) as f64 * daily < area + 1e-6);
    }

    // Identical inputs always produce identical outputs.
    #[test]
    fn simulation_is_deterministic(
        areas in prop::collection::vec(0.0f64..5_000.0, 1..6),
        rate in 1.0f64..300.0,
    ) {
        let projects: Vec<Project> = areas
            .iter()
            .enumerate()
            .map(|(idx, &area)| {
                let start = date(2024, 1, 1) + chrono::Duration::days(idx as i64 * 7);
                project(idx as i64 + 1, area, 10.0 + idx as f64, start)
            })
            .collect();
        let points = flat_curve(rate);

        let first = simulate(&projects, &points);
        let second = simulate(&projects, &points);
        prop_assert_eq!(first, second);
    }

    // Muted projects are zero-duration regardless of curve or priority.
    #[test]
    fn muted_projects_are_always_zero_duration(
        area in 0.0f64..50_000.0,
        rate in 0.0f64..300.0,
        priority in -10.0f64..50.0,
    ) {
        let mut muted = project(1, area, priority, date(2024, 2, 15));
        muted.muted = true;
        let worker = project(2, 100.0, DEFAULT_PRIORITY, date(2024, 1, 1));

        let outcome = simulate(&[muted, worker], &flat_curve(rate.max(1.0)));
        let entry = &outcome.schedule[0];
        prop_assert_eq!(entry.project_id, ProjectId::new(1));
        prop_assert_eq!(entry.end, entry.start);
        prop_assert_eq!(entry.duration_days, 1);
    }
}

#[test]
fn scenario_snapshot_is_never_mutated() {
    let scenario = Scenario {
        name: "Immutability".to_string(),
        projects: vec![project(1, 1000.0, DEFAULT_PRIORITY, date(2024, 1, 1))],
        rate_points: flat_curve(100.0),
    };
    let before = scenario.clone();

    let _ = compute_timeline(&scenario, None);
    assert_eq!(scenario, before);
}
