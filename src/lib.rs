//! Glyphlock - gesture authentication matching engine
//!
//! Turns raw, variable-speed pen/finger strokes into canonical point
//! sequences and scores candidates against enrolled templates. The
//! pipeline is resample -> normalize -> match: gestures are reduced to
//! a fixed number of equidistant points, scaled into a reference square
//! and centered, then compared with either a bounded rotation search or
//! a greedy point-cloud correspondence.
//!
//! Transport, template persistence, and the accept/reject policy live
//! outside this crate; it only consumes captured point sequences and
//! produces `(name, score)` results.

pub mod error;
pub mod gesture;
pub mod matcher;
pub mod recognizer;

pub use error::EngineError;
pub use gesture::Point;
pub use matcher::{CloudConfig, MatchStrategy, RotationConfig};
pub use recognizer::{
    EnrollMode, RecognitionResult, Recognizer, RecognizerConfig, SharedRecognizer, Template,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for binaries and benches that embed the engine.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glyphlock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Glyphlock engine initializing...");
}
