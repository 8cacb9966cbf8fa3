//! signstream - Gesture stream aggregation for sign-language chat
//!
//! Turns a noisy, low-frequency stream of single-letter gesture
//! classifications into debounced, corrected words and a running sentence.
//! The crate is purely reactive: the host polls its classifier, passes each
//! result to [`AggregationSession::on_sample`] with a timestamp, and forwards
//! the [`CompletedWord`] events it gets back. Capture, classification,
//! persistence, and rendering stay on the host's side of the boundary.

// Error handling discipline: propagate, don't panic
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod aggregation;
pub mod config;
pub mod correction;
pub mod defaults;
pub mod error;
pub mod lexicon;
pub mod report;
pub mod stream;

// Core session (single entry point per capture run)
pub use aggregation::sample::{ClassificationSample, CompletedWord};
pub use aggregation::session::{AggregationSession, SessionConfig};

// Building blocks
pub use aggregation::segmenter::{AbsenceTimer, CloseReason, Segmenter};
pub use aggregation::sentence::SentenceBuffer;
pub use aggregation::stability::StabilityWindow;
pub use aggregation::word::WordAccumulator;

// Correction
pub use correction::corrector::{LexiconCorrector, PassthroughCorrector, WordCorrector};
pub use lexicon::Lexicon;

// Host integration
pub use config::Config;
pub use report::WordReport;
pub use stream::station::{AggregatorStation, StreamFrame};

// Error handling
pub use error::{Result, SignstreamError};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
