//! Arc-length resampling of raw strokes

use super::{geometry, Point};
use crate::error::EngineError;

/// Resample a gesture into exactly `n` points spaced evenly along its
/// drawn path.
///
/// The input is left untouched; a fresh sequence is returned. Segments
/// longer than the sampling interval contribute several output points,
/// and pairs spanning a pen lift are skipped entirely, so no point is
/// ever synthesized between two strokes. Interpolated points carry the
/// stroke id of the segment they fall on.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>, EngineError> {
    if points.len() < 2 || n < 2 {
        return Err(EngineError::InsufficientPoints {
            got: points.len(),
            need: 2,
        });
    }
    let total = geometry::path_length(points);
    if total <= 0.0 {
        return Err(EngineError::DegenerateGeometry("zero path length".into()));
    }

    let interval = total / (n - 1) as f64;
    let mut resampled = Vec::with_capacity(n);
    resampled.push(points[0]);
    // Distance accumulated since the last emitted point.
    let mut carried = 0.0;

    for i in 1..points.len() {
        if points[i].stroke_id != points[i - 1].stroke_id {
            continue;
        }
        let mut dist = geometry::euclidean_distance(&points[i - 1], &points[i]);
        if carried + dist >= interval {
            let mut prev = points[i - 1];
            while carried + dist >= interval && resampled.len() < n {
                let t = ((interval - carried) / dist).clamp(0.0, 1.0);
                let q = Point::new(
                    prev.x + t * (points[i].x - prev.x),
                    prev.y + t * (points[i].y - prev.y),
                    points[i].stroke_id,
                );
                resampled.push(q);
                // Keep the remainder of the segment in play; a long
                // segment yields several samples.
                dist = carried + dist - interval;
                carried = 0.0;
                prev = q;
            }
            carried = dist;
        } else {
            carried += dist;
        }
    }

    // Floating-point error can leave us one point short of n.
    if resampled.len() == n - 1 {
        if let Some(last) = points.last() {
            resampled.push(*last);
        }
    }
    Ok(resampled)
}
