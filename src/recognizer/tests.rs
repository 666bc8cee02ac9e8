//! Facade-level recognition scenarios

use super::*;
use crate::matcher::{CloudConfig, RotationConfig};

fn line(from: (f64, f64), to: (f64, f64), count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            Point::xy(from.0 + t * (to.0 - from.0), from.1 + t * (to.1 - from.1))
        })
        .collect()
}

/// Regular polygon approximating a circle; `closed` repeats the first
/// vertex at the end so the drawn path loops all the way around.
fn circle(center: (f64, f64), radius: f64, vertices: usize, closed: bool) -> Vec<Point> {
    let mut points: Vec<Point> = (0..vertices)
        .map(|i| {
            let theta = i as f64 / vertices as f64 * std::f64::consts::TAU;
            Point::xy(center.0 + radius * theta.cos(), center.1 + radius * theta.sin())
        })
        .collect();
    if closed {
        points.push(points[0]);
    }
    points
}

fn rotate_about(points: &[Point], theta: f64, center: (f64, f64)) -> Vec<Point> {
    crate::gesture::rotate_by(points, theta, &Point::xy(center.0, center.1))
}

#[test]
fn test_scaled_and_shifted_copy_matches() {
    let mut recognizer = Recognizer::new();
    recognizer.enroll("T", &line((0.0, 0.0), (100.0, 100.0), 10)).unwrap();

    let candidate = line((200.0, 200.0), (250.0, 250.0), 10);
    let result = recognizer.recognize(&candidate);

    assert_eq!(result.name, "T");
    assert!(result.score > 0.9, "score was {}", result.score);
}

#[test]
fn test_translation_invariance() {
    let mut recognizer = Recognizer::new();
    recognizer.enroll("vee", &[
        Point::xy(0.0, 0.0),
        Point::xy(25.0, 50.0),
        Point::xy(50.0, 10.0),
        Point::xy(75.0, 55.0),
        Point::xy(100.0, 0.0),
    ]).unwrap();

    let gesture = line((10.0, 20.0), (90.0, 70.0), 12);
    let shifted: Vec<Point> = gesture
        .iter()
        .map(|p| Point::new(p.x + 431.0, p.y - 77.5, p.stroke_id))
        .collect();

    let base = recognizer.recognize(&gesture);
    let moved = recognizer.recognize(&shifted);
    assert!((base.score - moved.score).abs() < 1e-6);
}

#[test]
fn test_uniform_scale_invariance() {
    let mut recognizer = Recognizer::new();
    recognizer.enroll("arc", &circle((50.0, 50.0), 40.0, 16, false)).unwrap();

    let gesture = circle((0.0, 0.0), 30.0, 16, false);
    let grown: Vec<Point> = gesture
        .iter()
        .map(|p| Point::new(p.x * 3.7, p.y * 3.7, p.stroke_id))
        .collect();

    let base = recognizer.recognize(&gesture);
    let scaled = recognizer.recognize(&grown);
    assert!((base.score - scaled.score).abs() < 1e-6);
}

#[test]
fn test_half_turn_rotation_still_matches() {
    // 33 samples make 32 equal arcs around a closed path, so a half
    // turn lands samples exactly on samples.
    let mut recognizer = Recognizer::with_config(RecognizerConfig {
        resample_count: 33,
        ..RecognizerConfig::default()
    });
    let template = circle((100.0, 100.0), 80.0, 40, true);
    recognizer.enroll("loop", &template).unwrap();

    let rotated = rotate_about(&template, std::f64::consts::PI, (100.0, 100.0));
    let result = recognizer.recognize(&rotated);

    assert_eq!(result.name, "loop");
    assert!(result.score > 0.85, "score was {}", result.score);
}

#[test]
fn test_reversed_drawing_order_scores_close() {
    let mut recognizer = Recognizer::new();
    let template = circle((0.0, 0.0), 60.0, 24, true);
    recognizer.enroll("loop", &template).unwrap();

    let forward = circle((10.0, -5.0), 55.0, 24, true);
    let backward: Vec<Point> = forward.iter().rev().copied().collect();

    let f = recognizer.recognize(&forward);
    let b = recognizer.recognize(&backward);
    assert!((f.score - b.score).abs() < 0.05, "forward {} backward {}", f.score, b.score);
}

#[test]
fn test_circle_beats_line_for_noisy_circle() {
    let noisy: Vec<Point> = (0..12)
        .map(|i| {
            let theta = i as f64 / 12.0 * std::f64::consts::TAU;
            // Deterministic radial wobble, a few percent of the radius.
            let r = 50.0 * (1.0 + 0.04 * (7.0 * theta).sin());
            Point::xy(r * theta.cos(), r * theta.sin())
        })
        .collect();

    let mut recognizer = Recognizer::new();
    recognizer.enroll("circle", &circle((0.0, 0.0), 50.0, 12, false)).unwrap();
    recognizer.enroll("line", &line((0.0, 0.0), (100.0, 20.0), 8)).unwrap();

    let result = recognizer.recognize(&noisy);
    assert_eq!(result.name, "circle");

    // The raw similarity against the circle alone must strictly beat
    // the similarity against the line alone.
    let mut only_circle = Recognizer::new();
    only_circle.enroll("circle", &circle((0.0, 0.0), 50.0, 12, false)).unwrap();
    let mut only_line = Recognizer::new();
    only_line.enroll("line", &line((0.0, 0.0), (100.0, 20.0), 8)).unwrap();
    assert!(only_circle.recognize(&noisy).score > only_line.recognize(&noisy).score);
}

#[test]
fn test_empty_store_yields_no_match() {
    let recognizer = Recognizer::new();
    let result = recognizer.recognize(&line((0.0, 0.0), (100.0, 100.0), 10));
    assert_eq!(result, RecognitionResult::no_match());
    assert!(!result.is_match());
}

#[test]
fn test_sparse_input_rejected() {
    let mut recognizer = Recognizer::new();
    recognizer.enroll("T", &line((0.0, 0.0), (100.0, 100.0), 10)).unwrap();

    let sparse = line((0.0, 0.0), (100.0, 100.0), 4);
    let result = recognizer.recognize(&sparse);
    assert_eq!(result.name, NO_MATCH);
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_enroll_returns_growing_count() {
    let mut recognizer = Recognizer::new();
    let first = recognizer.enroll("a", &line((0.0, 0.0), (50.0, 0.0), 8)).unwrap();
    let second = recognizer.enroll("b", &line((0.0, 0.0), (0.0, 50.0), 8)).unwrap();
    assert_eq!((first, second), (1, 2));
}

#[test]
fn test_append_mode_keeps_every_sample() {
    let mut recognizer = Recognizer::new();
    recognizer.enroll("z", &line((0.0, 0.0), (80.0, 0.0), 10)).unwrap();
    let count = recognizer.enroll("z", &line((0.0, 0.0), (82.0, 3.0), 10)).unwrap();
    assert_eq!(count, 2);
    assert_eq!(recognizer.template_names().collect::<Vec<_>>(), ["z", "z"]);
}

#[test]
fn test_replace_mode_drops_prior_samples() {
    let mut recognizer = Recognizer::with_config(RecognizerConfig {
        enroll_mode: EnrollMode::Replace,
        ..RecognizerConfig::default()
    });
    recognizer.enroll("z", &line((0.0, 0.0), (80.0, 0.0), 10)).unwrap();
    recognizer.enroll("other", &line((0.0, 0.0), (0.0, 80.0), 10)).unwrap();
    let count = recognizer.enroll("z", &line((0.0, 0.0), (82.0, 3.0), 10)).unwrap();
    assert_eq!(count, 2);
    assert_eq!(recognizer.template_count(), 2);
}

#[test]
fn test_enroll_single_point_fails() {
    let mut recognizer = Recognizer::new();
    let err = recognizer.enroll("dot", &[Point::xy(5.0, 5.0)]).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientPoints { got: 1, .. }));
}

#[test]
fn test_enroll_stationary_gesture_fails() {
    let mut recognizer = Recognizer::new();
    let stationary = vec![Point::xy(5.0, 5.0); 10];
    let err = recognizer.enroll("dot", &stationary).unwrap_err();
    assert!(matches!(err, EngineError::DegenerateGeometry(_)));
}

#[test]
fn test_recognize_degenerate_candidate_is_no_match() {
    let mut recognizer = Recognizer::new();
    recognizer.enroll("T", &line((0.0, 0.0), (100.0, 100.0), 10)).unwrap();
    let stationary = vec![Point::xy(5.0, 5.0); 10];
    assert_eq!(recognizer.recognize(&stationary), RecognitionResult::no_match());
}

#[test]
fn test_rotation_strategy_matches_tilted_copy() {
    let mut recognizer = Recognizer::with_config(RecognizerConfig {
        strategy: MatchStrategy::Rotation(RotationConfig::default()),
        resample_count: 64,
        ..RecognizerConfig::default()
    });
    let template = line((0.0, 0.0), (100.0, 40.0), 12);
    recognizer.enroll("slash", &template).unwrap();

    let tilted = rotate_about(&template, 10f64.to_radians(), (50.0, 20.0));
    let result = recognizer.recognize(&tilted);
    assert_eq!(result.name, "slash");
    assert!(result.score > 0.9, "score was {}", result.score);
}

#[test]
fn test_multi_stroke_gesture_round_trip() {
    // A plus sign drawn as two strokes.
    let mut cross = line((50.0, 0.0), (50.0, 100.0), 8);
    cross.extend(
        line((0.0, 50.0), (100.0, 50.0), 8)
            .into_iter()
            .map(|p| Point::new(p.x, p.y, 1)),
    );

    let mut recognizer = Recognizer::new();
    recognizer.enroll("plus", &cross).unwrap();
    let result = recognizer.recognize(&cross);
    assert_eq!(result.name, "plus");
    assert!(result.score > 0.95, "score was {}", result.score);
}

#[test]
fn test_wire_format_gesture() {
    let raw = r#"[
        {"X": 0.0, "Y": 0.0, "ID": 0},
        {"X": 25.0, "Y": 25.0, "ID": 0},
        {"X": 50.0, "Y": 50.0, "ID": 0},
        {"X": 75.0, "Y": 75.0, "ID": 0},
        {"X": 100.0, "Y": 100.0, "ID": 0}
    ]"#;
    let points: Vec<Point> = serde_json::from_str(raw).unwrap();

    let mut recognizer = Recognizer::new();
    recognizer.enroll("diag", &points).unwrap();
    assert_eq!(recognizer.recognize(&points).name, "diag");
}

#[test]
fn test_import_template_restores_store() {
    let mut source = Recognizer::new();
    source.enroll("T", &line((0.0, 0.0), (100.0, 100.0), 10)).unwrap();

    let mut restored = Recognizer::new();
    for template in source.templates() {
        restored.import_template(template.clone());
    }
    let result = restored.recognize(&line((200.0, 200.0), (250.0, 250.0), 10));
    assert_eq!(result.name, "T");
}

#[test]
fn test_shared_recognizer_across_threads() {
    let shared = SharedRecognizer::new(Recognizer::new());
    shared.enroll("T", &line((0.0, 0.0), (100.0, 100.0), 10)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let offset = i as f64 * 10.0;
                let candidate = line((offset, offset), (offset + 50.0, offset + 50.0), 10);
                shared.recognize(&candidate)
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.name, "T");
    }
    assert_eq!(shared.template_count(), 1);
}

#[test]
fn test_cloud_config_is_overridable() {
    let mut recognizer = Recognizer::with_config(RecognizerConfig {
        strategy: MatchStrategy::Cloud(CloudConfig { start_exponent: 1.0 }),
        ..RecognizerConfig::default()
    });
    let template = circle((0.0, 0.0), 40.0, 20, true);
    recognizer.enroll("loop", &template).unwrap();
    assert_eq!(recognizer.recognize(&template).name, "loop");
}
