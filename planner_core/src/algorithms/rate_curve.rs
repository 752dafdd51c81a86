//! Piecewise-linear interpolation over sparse capacity samples.
//!
//! The curve is defined by the *active* rate points only. Between two
//! consecutive samples the rate is linearly interpolated; outside the sampled
//! window the behaviour is governed by [`BoundaryPolicy`]. Rates are never
//! negative regardless of the inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::domain::RatePoint;
use crate::time::days_between;

/// How the curve behaves for dates outside the sampled window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Hold the first/last sample's value. Monotonic-safe and the default:
    /// queries far outside the window can never run away or go negative.
    #[default]
    Clamp,
    /// Project the nearest segment's slope past the boundary, floored at
    /// zero. Opt-in only.
    Extrapolate,
}

/// A capacity curve built once per simulation run from the active samples.
///
/// Construction filters inactive points, sorts ascending by date, and keeps
/// the last sample when several share a date, so `rate_at` works on a clean
/// strictly-increasing sequence.
#[derive(Debug, Clone)]
pub struct RateCurve {
    samples: Vec<(NaiveDate, f64)>,
    policy: BoundaryPolicy,
}

impl RateCurve {
    pub fn new(points: &[RatePoint], policy: BoundaryPolicy) -> Self {
        let mut samples: Vec<(NaiveDate, f64)> = points
            .iter()
            .filter(|p| p.active)
            .map(|p| (p.date, p.rate))
            .collect();
        samples.sort_by_key(|(date, _)| *date);
        samples.dedup_by(|later, earlier| {
            if later.0 == earlier.0 {
                // last sample for a date wins
                earlier.1 = later.1;
                true
            } else {
                false
            }
        });
        Self { samples, policy }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Interpolated rate for `date`, in m² per working day. Never negative.
    pub fn rate_at(&self, date: NaiveDate) -> f64 {
        let rate = match self.samples.as_slice() {
            [] => return 0.0,
            [(_, rate)] => *rate,
            samples => {
                let (first_date, first_rate) = samples[0];
                let (last_date, last_rate) = samples[samples.len() - 1];
                if date <= first_date {
                    match self.policy {
                        BoundaryPolicy::Clamp => first_rate,
                        BoundaryPolicy::Extrapolate => {
                            let (d2, r2) = samples[1];
                            first_rate
                                + segment_slope(first_date, first_rate, d2, r2)
                                    * days_between(first_date, date) as f64
                        }
                    }
                } else if date >= last_date {
                    match self.policy {
                        BoundaryPolicy::Clamp => last_rate,
                        BoundaryPolicy::Extrapolate => {
                            let (d1, r1) = samples[samples.len() - 2];
                            last_rate
                                + segment_slope(d1, r1, last_date, last_rate)
                                    * days_between(last_date, date) as f64
                        }
                    }
                } else {
                    interpolate_between(samples, date)
                }
            }
        };
        rate.max(0.0)
    }
}

fn segment_slope(d1: NaiveDate, r1: f64, d2: NaiveDate, r2: f64) -> f64 {
    let span = days_between(d1, d2);
    if span == 0 {
        0.0
    } else {
        (r2 - r1) / span as f64
    }
}

fn interpolate_between(samples: &[(NaiveDate, f64)], date: NaiveDate) -> f64 {
    for pair in samples.windows(2) {
        let (d1, r1) = pair[0];
        let (d2, r2) = pair[1];
        if date >= d1 && date <= d2 {
            let span = days_between(d1, d2);
            if span == 0 {
                return r1;
            }
            let ratio = days_between(d1, date) as f64 / span as f64;
            return r1 + ratio * (r2 - r1);
        }
    }
    0.0
}

/// One-off query against the active points with the default clamping policy.
///
/// Callers that query many dates should build a [`RateCurve`] once instead of
/// re-sorting per call.
pub fn interpolate_rate(date: NaiveDate, points: &[RatePoint]) -> f64 {
    RateCurve::new(points, BoundaryPolicy::Clamp).rate_at(date)
}
