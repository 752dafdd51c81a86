use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::core::domain::{
    Project, ProjectId, RatePoint, Scenario, BASELINE_COMPLEXITY, DEFAULT_PRIORITY,
};

/// Custom deserializer that accepts either an RFC 3339 timestamp (as the
/// scenario store emits) or a plain `YYYY-MM-DD` date. Sub-day precision is
/// discarded; the planner works at day granularity.
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| D::Error::custom(format!("expected RFC 3339 or YYYY-MM-DD date, got {raw:?}")))
}

fn default_true() -> bool {
    true
}

/// Raw JSON structure for a project record.
#[derive(Debug, Deserialize)]
struct RawProject {
    id: i64,
    name: String,
    m2: f64,
    gg: Option<f64>,
    priority: Option<f64>,
    #[serde(deserialize_with = "deserialize_date")]
    start: NaiveDate,
    #[serde(default)]
    muted: bool,
    #[serde(rename = "displayOrder")]
    display_order: Option<i32>,
}

/// Raw JSON structure for a production-rate point.
#[derive(Debug, Deserialize)]
struct RawRatePoint {
    #[serde(deserialize_with = "deserialize_date")]
    date: NaiveDate,
    rate: f64,
    #[serde(rename = "isActive", default = "default_true")]
    is_active: bool,
}

/// Raw JSON structure for one scenario export.
#[derive(Debug, Deserialize)]
struct RawScenario {
    #[serde(default)]
    name: String,
    projects: Vec<RawProject>,
    #[serde(rename = "productionRatePoints")]
    production_rate_points: Vec<RawRatePoint>,
}

/// Parse a scenario JSON file into a [`Scenario`].
pub fn parse_scenario_json(json_path: &Path) -> Result<Scenario> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_scenario_json_str(&json_content)
}

/// Parse scenario JSON from a string.
pub fn parse_scenario_json_str(json_str: &str) -> Result<Scenario> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: RawScenario = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| anyhow::anyhow!("Invalid scenario JSON at `{}`: {}", e.path(), e.inner()))?;

    Ok(convert_raw_to_domain(raw))
}

/// Convert the raw wire structures to domain models, filling optional fields
/// with their documented defaults.
fn convert_raw_to_domain(raw: RawScenario) -> Scenario {
    let projects = raw
        .projects
        .into_iter()
        .enumerate()
        .map(|(idx, p)| Project {
            id: ProjectId::new(p.id),
            name: p.name,
            area_m2: p.m2,
            complexity: p.gg.unwrap_or(BASELINE_COMPLEXITY),
            priority: p.priority.unwrap_or(DEFAULT_PRIORITY),
            start: p.start,
            muted: p.muted,
            display_order: p.display_order.unwrap_or(idx as i32),
        })
        .collect();

    let rate_points = raw
        .production_rate_points
        .into_iter()
        .map(|p| RatePoint {
            date: p.date,
            rate: p.rate,
            active: p.is_active,
        })
        .collect();

    Scenario {
        name: raw.name,
        projects,
        rate_points,
    }
}
