//! Matching strategies - turn a normalized candidate/template pair into
//! a distance, and a distance into a bounded similarity score

mod cloud;
mod rotation;

pub use cloud::{greedy_cloud_match, CloudConfig, DEFAULT_START_EXPONENT};
pub use rotation::{
    distance_at_best_angle, RotationConfig, DEFAULT_ANGLE_PRECISION, DEFAULT_ANGLE_RANGE,
};

use crate::gesture::Point;

/// How candidates are compared against templates. Picked once per
/// recognizer; each variant carries its own tuning constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchStrategy {
    /// Index-aligned comparison with a bounded rotation search. Assumes
    /// both sequences encode the same drawing order; gestures rotated
    /// beyond the window are not matched.
    Rotation(RotationConfig),
    /// Greedy point-cloud correspondence from several start offsets.
    /// Robust to stroke order and rotation without any rotation
    /// preprocessing.
    Cloud(CloudConfig),
}

impl Default for MatchStrategy {
    fn default() -> Self {
        MatchStrategy::Cloud(CloudConfig::default())
    }
}

impl MatchStrategy {
    /// Raw distance between a normalized candidate and template. Both
    /// sides must already be resampled to the same length.
    pub fn distance(&self, candidate: &[Point], template: &[Point]) -> f64 {
        match self {
            MatchStrategy::Rotation(cfg) => distance_at_best_angle(candidate, template, cfg),
            MatchStrategy::Cloud(cfg) => greedy_cloud_match(candidate, template, cfg),
        }
    }

    /// Convert a raw distance into a similarity score in `[0, 1]`.
    ///
    /// `square_size` is the reference size gestures were scaled into;
    /// both formulas normalize by it, so the score is scale-consistent
    /// for any configured size.
    pub fn score(&self, distance: f64, square_size: f64) -> f64 {
        let score = match self {
            MatchStrategy::Rotation(_) => {
                let half_diagonal = 0.5 * std::f64::consts::SQRT_2 * square_size;
                1.0 - distance / half_diagonal
            }
            MatchStrategy::Cloud(_) => {
                let ceiling = 2.0 * square_size;
                (ceiling - distance) / ceiling
            }
        };
        score.clamp(0.0, 1.0)
    }

    /// Whether normalization should also rotate to the indicative
    /// angle. Only the rotation search wants its input pre-oriented.
    pub(crate) fn normalizes_rotation(&self) -> bool {
        matches!(self, MatchStrategy::Rotation(_))
    }
}
