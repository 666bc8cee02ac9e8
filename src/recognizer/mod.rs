//! Recognizer facade - template store, enrollment, and recognition

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::gesture::{self, Point};
use crate::matcher::MatchStrategy;

#[cfg(test)]
mod tests;

/// Name reported when no template wins.
pub const NO_MATCH: &str = "No match";

/// Default resample target: every gesture and template is reduced to
/// this many points before comparison.
pub const DEFAULT_RESAMPLE_COUNT: usize = 32;

/// Default side length of the reference square gestures are scaled
/// into.
pub const DEFAULT_SQUARE_SIZE: f64 = 250.0;

/// Gestures with fewer samples than this are rejected outright.
pub const MIN_GESTURE_POINTS: usize = 5;

/// What enrolling an already-known name does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollMode {
    /// Keep every sample; recognition is nearest-neighbor across all
    /// stored exemplars of the name.
    #[default]
    Append,
    /// Drop previous templates with the same name first.
    Replace,
}

/// Recognizer settings, fixed at construction.
///
/// Enrollment and recognition must run under identical settings; a
/// mismatch does not fail, it silently degrades every score.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Points per normalized gesture.
    pub resample_count: usize,
    /// Side of the reference square.
    pub square_size: f64,
    /// Minimum raw samples a gesture needs to be considered.
    pub min_points: usize,
    /// Where the centroid of a normalized gesture lands.
    pub origin: Point,
    /// How candidates are compared against templates.
    pub strategy: MatchStrategy,
    /// Re-enrollment policy.
    pub enroll_mode: EnrollMode,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            resample_count: DEFAULT_RESAMPLE_COUNT,
            square_size: DEFAULT_SQUARE_SIZE,
            min_points: MIN_GESTURE_POINTS,
            origin: Point::xy(0.0, 0.0),
            strategy: MatchStrategy::default(),
            enroll_mode: EnrollMode::default(),
        }
    }
}

/// A named, normalized exemplar gesture. Immutable once built; lives as
/// long as the recognizer that owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    name: String,
    points: Vec<Point>,
}

impl Template {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized point sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Outcome of a recognition attempt. Sparse input, a degenerate
/// candidate, or an empty store all come back as the zero-confidence
/// result rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Winning template name, or [`NO_MATCH`].
    pub name: String,
    /// Similarity in `[0, 1]`.
    pub score: f64,
}

impl RecognitionResult {
    /// The zero-confidence outcome.
    pub fn no_match() -> Self {
        Self {
            name: NO_MATCH.into(),
            score: 0.0,
        }
    }

    /// Whether a stored template actually won.
    pub fn is_match(&self) -> bool {
        self.name != NO_MATCH
    }
}

/// In-memory gesture recognizer.
///
/// Owns its template store; independent instances share nothing and may
/// run in parallel freely. A single instance is not safe for concurrent
/// calls - wrap it in a [`SharedRecognizer`] if several threads touch
/// the same store.
pub struct Recognizer {
    config: RecognizerConfig,
    templates: Vec<Template>,
}

impl Recognizer {
    /// Create a recognizer with default settings (cloud matching,
    /// append enrollment).
    pub fn new() -> Self {
        Self::with_config(RecognizerConfig::default())
    }

    /// Create with custom settings.
    pub fn with_config(config: RecognizerConfig) -> Self {
        Self {
            config,
            templates: Vec::new(),
        }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Number of stored templates.
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Stored template names, in insertion order. Duplicates appear
    /// once per enrolled sample.
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(Template::name)
    }

    /// Stored templates, in insertion order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Enroll a raw gesture under `name`. Returns the new template
    /// count.
    ///
    /// Degenerate input errors out instead of being stored: a template
    /// with no usable geometry would corrupt every later score.
    pub fn enroll(&mut self, name: &str, points: &[Point]) -> Result<usize, EngineError> {
        let normalized = self.prepare(points)?;
        if self.config.enroll_mode == EnrollMode::Replace {
            self.templates.retain(|t| t.name != name);
        }
        self.templates.push(Template {
            name: name.to_owned(),
            points: normalized,
        });
        tracing::debug!(
            "enrolled template '{}' ({} samples stored)",
            name,
            self.templates.len()
        );
        Ok(self.templates.len())
    }

    /// Re-insert a template produced by an earlier [`Recognizer::enroll`]
    /// on identical settings, e.g. when an external store rehydrates a
    /// session. The points are taken as already normalized.
    pub fn import_template(&mut self, template: Template) -> usize {
        if self.config.enroll_mode == EnrollMode::Replace {
            self.templates.retain(|t| t.name != template.name);
        }
        self.templates.push(template);
        self.templates.len()
    }

    /// Score a raw gesture against every stored template and return the
    /// best-scoring name.
    ///
    /// Never fails. Fewer than `min_points` samples, a degenerate path,
    /// or an empty store all yield the no-match result.
    pub fn recognize(&self, points: &[Point]) -> RecognitionResult {
        if points.len() < self.config.min_points {
            return RecognitionResult::no_match();
        }
        if self.templates.is_empty() {
            tracing::debug!("recognize called with an empty template store");
            return RecognitionResult::no_match();
        }
        let candidate = match self.prepare(points) {
            Ok(candidate) => candidate,
            Err(err) => {
                tracing::debug!("candidate rejected: {err}");
                return RecognitionResult::no_match();
            }
        };

        let mut best_distance = f64::MAX;
        let mut best: Option<&Template> = None;
        for template in &self.templates {
            let d = self.config.strategy.distance(&candidate, &template.points);
            if d < best_distance {
                best_distance = d;
                best = Some(template);
            }
        }

        match best {
            Some(template) => {
                let score = self
                    .config
                    .strategy
                    .score(best_distance, self.config.square_size);
                tracing::debug!(
                    "best match '{}' at distance {:.4} (score {:.3})",
                    template.name,
                    best_distance,
                    score
                );
                RecognitionResult {
                    name: template.name.clone(),
                    score,
                }
            }
            None => RecognitionResult::no_match(),
        }
    }

    /// Resample, orient (rotation strategy only), scale, and center a
    /// raw gesture.
    fn prepare(&self, points: &[Point]) -> Result<Vec<Point>, EngineError> {
        if points.len() < self.config.min_points {
            return Err(EngineError::InsufficientPoints {
                got: points.len(),
                need: self.config.min_points,
            });
        }
        let mut processed = gesture::resample(points, self.config.resample_count)?;
        if self.config.strategy.normalizes_rotation() {
            processed = gesture::rotate_to_zero(&processed);
        }
        let processed = gesture::scale_to_square(&processed, self.config.square_size);
        Ok(gesture::translate_to(&processed, &self.config.origin))
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe handle around a single recognizer.
///
/// Enroll and recognize both touch the template store, so concurrent
/// use of one instance goes through this one guard. Cheap to clone;
/// clones share the store.
#[derive(Clone)]
pub struct SharedRecognizer {
    inner: Arc<Mutex<Recognizer>>,
}

impl SharedRecognizer {
    pub fn new(recognizer: Recognizer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(recognizer)),
        }
    }

    pub fn enroll(&self, name: &str, points: &[Point]) -> Result<usize, EngineError> {
        self.inner.lock().enroll(name, points)
    }

    pub fn recognize(&self, points: &[Point]) -> RecognitionResult {
        self.inner.lock().recognize(points)
    }

    pub fn template_count(&self) -> usize {
        self.inner.lock().template_count()
    }
}
