//! Geometric primitives shared by the resampler, normalizer, and matchers

use super::Point;

/// Euclidean distance between two points.
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the drawn path: the sum of distances between consecutive
/// samples on the same stroke. Pairs spanning a pen lift contribute
/// nothing, so a multi-stroke gesture is never measured across the gap.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .filter(|w| w[0].stroke_id == w[1].stroke_id)
        .map(|w| euclidean_distance(&w[0], &w[1]))
        .sum()
}

/// Mean position of a non-empty point set.
pub fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n, 0)
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The longer of the two sides.
    pub fn longer_side(&self) -> f64 {
        self.width().max(self.height())
    }
}

/// Compute the bounding box of a non-empty point set.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let mut bb = BoundingBox {
        min_x: f64::MAX,
        min_y: f64::MAX,
        max_x: f64::MIN,
        max_y: f64::MIN,
    };
    for p in points {
        bb.min_x = bb.min_x.min(p.x);
        bb.min_y = bb.min_y.min(p.y);
        bb.max_x = bb.max_x.max(p.x);
        bb.max_y = bb.max_y.max(p.y);
    }
    bb
}

/// Rotate every point by `theta` radians about `center`.
pub fn rotate_by(points: &[Point], theta: f64, center: &Point) -> Vec<Point> {
    let (sin, cos) = theta.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            Point::new(
                dx * cos - dy * sin + center.x,
                dx * sin + dy * cos + center.y,
                p.stroke_id,
            )
        })
        .collect()
}
