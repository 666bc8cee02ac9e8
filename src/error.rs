//! Engine error types

use thiserror::Error;

/// Errors that can occur while preparing a gesture for matching.
///
/// Recognition itself never surfaces these; a candidate that fails
/// preparation simply scores as no match. Enrollment propagates them,
/// since a degenerate template would poison every later comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("insufficient points: gesture has {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("degenerate gesture geometry: {0}")]
    DegenerateGeometry(String),
}

impl From<EngineError> for String {
    fn from(err: EngineError) -> Self {
        err.to_string()
    }
}
