//! Greedy point-cloud matching
//!
//! Treats both gestures as clouds of points and computes a
//! correspondence-based distance that does not care which stroke came
//! first or where the drawing started. Robustness comes from trying the
//! greedy walk from several start offsets and in both directions.

use crate::gesture::{self, Point};

/// Exponent controlling how many start offsets are tried: the walk
/// restarts every `floor(n^(1 - e))` indices. Larger values try more
/// offsets, trading speed for accuracy.
pub const DEFAULT_START_EXPONENT: f64 = 0.5;

/// Tuning for the greedy cloud match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudConfig {
    /// See [`DEFAULT_START_EXPONENT`].
    pub start_exponent: f64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            start_exponent: DEFAULT_START_EXPONENT,
        }
    }
}

/// Minimum cloud distance over the sampled start offsets, taking each
/// offset in both match directions; whichever side fits more tightly
/// wins.
pub fn greedy_cloud_match(candidate: &[Point], template: &[Point], config: &CloudConfig) -> f64 {
    let n = candidate.len().min(template.len());
    let step = ((n as f64).powf(1.0 - config.start_exponent).floor() as usize).max(1);

    let mut min_distance = f64::MAX;
    for start in (0..n).step_by(step) {
        let d1 = cloud_distance(candidate, template, start);
        let d2 = cloud_distance(template, candidate, start);
        min_distance = min_distance.min(d1).min(d2);
    }
    min_distance
}

/// Greedy bipartite assignment: walk `from` circularly beginning at
/// `start`; each step claims the nearest still-unmatched point of `to`
/// and accumulates its distance, weighted so points visited early in
/// the walk count more.
fn cloud_distance(from: &[Point], to: &[Point], start: usize) -> f64 {
    let n = from.len().min(to.len());
    let mut matched = vec![false; n];
    let mut sum = 0.0;
    let mut i = start;

    loop {
        let mut best = 0;
        let mut best_dist = f64::MAX;
        for (j, used) in matched.iter().enumerate() {
            if !used {
                let d = gesture::euclidean_distance(&from[i], &to[j]);
                if d < best_dist {
                    best_dist = d;
                    best = j;
                }
            }
        }
        matched[best] = true;
        let weight = 1.0 - ((i + n - start) % n) as f64 / n as f64;
        sum += weight * best_dist;
        i = (i + 1) % n;
        if i == start {
            break;
        }
    }
    sum
}
