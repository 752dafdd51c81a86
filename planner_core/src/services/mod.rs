//! Derived views over simulation results for the timeline renderer.

pub mod insights;
pub mod timeline;

pub use insights::{compute_summary, project_insights, ProjectInsight, ScenarioSummary};
pub use timeline::{build_monthly_series, compute_timeline_data, RateSeriesPoint, TimelineData};
