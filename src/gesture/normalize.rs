//! Scale and position normalization

use super::{geometry, Point};

/// Smallest bounding-box extent that participates in scaling. Keeps a
/// single point or a perfectly axis-aligned stroke from dividing by
/// zero.
pub const MIN_EXTENT: f64 = 1.0;

/// Scale uniformly so the longer bounding-box side equals `size`.
///
/// Both axes divide by the same factor, so aspect ratio survives; a
/// tall narrow gesture stays tall and narrow.
pub fn scale_to_square(points: &[Point], size: f64) -> Vec<Point> {
    let bb = geometry::bounding_box(points);
    let scale = bb.longer_side().max(MIN_EXTENT);
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - bb.min_x) / scale * size,
                (p.y - bb.min_y) / scale * size,
                p.stroke_id,
            )
        })
        .collect()
}

/// Translate so the centroid lands on `origin`.
pub fn translate_to(points: &[Point], origin: &Point) -> Vec<Point> {
    let c = geometry::centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + origin.x - c.x, p.y + origin.y - c.y, p.stroke_id))
        .collect()
}

/// Angle from the centroid to the first sample, in radians. The
/// rotation matcher searches around this baseline orientation.
pub fn indicative_angle(points: &[Point]) -> f64 {
    let c = geometry::centroid(points);
    (c.y - points[0].y).atan2(c.x - points[0].x)
}

/// Rotate about the centroid so the indicative angle becomes zero.
pub fn rotate_to_zero(points: &[Point]) -> Vec<Point> {
    let c = geometry::centroid(points);
    geometry::rotate_by(points, -indicative_angle(points), &c)
}
