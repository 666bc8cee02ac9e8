//! Gesture module - raw stroke data and its geometric preprocessing

mod geometry;
mod normalize;
mod resample;

pub use geometry::{
    bounding_box, centroid, euclidean_distance, path_length, rotate_by, BoundingBox,
};
pub use normalize::{
    indicative_angle, rotate_to_zero, scale_to_square, translate_to, MIN_EXTENT,
};
pub use resample::resample;

use serde::{Deserialize, Serialize};

/// A single captured pen/finger sample.
///
/// Points arrive in drawing order; the order is significant. On the
/// wire a point is `{"X": .., "Y": .., "ID": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in capture space
    #[serde(rename = "X")]
    pub x: f64,
    /// Y coordinate in capture space
    #[serde(rename = "Y")]
    pub y: f64,
    /// Which contiguous pen-down stroke this sample belongs to.
    /// Consecutive samples are only connected when their ids match.
    #[serde(rename = "ID")]
    pub stroke_id: i32,
}

impl Point {
    /// Create a point on the given stroke.
    pub fn new(x: f64, y: f64, stroke_id: i32) -> Self {
        Self { x, y, stroke_id }
    }

    /// Create a single-stroke point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0)
    }
}
