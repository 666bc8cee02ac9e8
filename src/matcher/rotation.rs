//! Golden-section rotation search
//!
//! Finds the rotation of the candidate (within a bounded window) that
//! minimizes the index-aligned distance to a template. Derivative-free:
//! two interior probes related by the golden ratio narrow the bracket
//! until it is smaller than the configured precision.

use crate::gesture::{self, Point};

/// Half-width of the rotation search window, in radians (45 degrees).
pub const DEFAULT_ANGLE_RANGE: f64 = 45.0 * std::f64::consts::PI / 180.0;

/// Bracket width at which the search stops, in radians (2 degrees).
pub const DEFAULT_ANGLE_PRECISION: f64 = 2.0 * std::f64::consts::PI / 180.0;

/// Golden ratio conjugate, (sqrt(5) - 1) / 2.
const PHI: f64 = 0.618_033_988_749_894_9;

/// Tuning for the rotation search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationConfig {
    /// The search covers `[-angle_range, +angle_range]` around the
    /// candidate's normalized orientation.
    pub angle_range: f64,
    /// Stop once the bracket narrows below this width.
    pub angle_precision: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angle_range: DEFAULT_ANGLE_RANGE,
            angle_precision: DEFAULT_ANGLE_PRECISION,
        }
    }
}

/// Mean distance between index-aligned points of two equal-length
/// sequences.
fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(p, q)| gesture::euclidean_distance(p, q))
        .sum();
    sum / a.len() as f64
}

/// Path distance with the candidate rotated by `theta` about its own
/// centroid.
fn distance_at_angle(candidate: &[Point], template: &[Point], theta: f64) -> f64 {
    let c = gesture::centroid(candidate);
    let rotated = gesture::rotate_by(candidate, theta, &c);
    path_distance(&rotated, template)
}

/// Minimal path distance over the rotation window. The optimal angle
/// itself is not reported; callers only score the distance.
pub fn distance_at_best_angle(
    candidate: &[Point],
    template: &[Point],
    config: &RotationConfig,
) -> f64 {
    let mut a = -config.angle_range;
    let mut b = config.angle_range;
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(candidate, template, x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(candidate, template, x2);

    while (b - a).abs() > config.angle_precision {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(candidate, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(candidate, template, x2);
        }
    }
    f1.min(f2)
}
