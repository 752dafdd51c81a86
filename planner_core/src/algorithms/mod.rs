//! Scheduling algorithms: capacity-curve interpolation and the day-stepping
//! allocation simulation.

pub mod rate_curve;
pub mod allocation;

pub use allocation::{simulate, simulate_with_config, SimulationOutcome};
pub use rate_curve::{BoundaryPolicy, RateCurve};
