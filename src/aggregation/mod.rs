//! Gesture stream aggregation.
//!
//! Turns the classifier's noisy per-poll letter stream into corrected words
//! and a running sentence:
//!
//! ```text
//! ┌────────────┐    ┌───────────┐    ┌─────────────┐    ┌───────────┐
//! │ Classifier │───▶│ Stability │───▶│    Word     │───▶│ Segmenter │──▶ close
//! │   sample   │    │  window   │    │ accumulator │    │           │
//! └────────────┘    └───────────┘    └─────────────┘    └───────────┘
//!                                                             │
//!                                        corrected word ◀─────┘
//!                                        + sentence append
//! ```
//!
//! All of it is owned by a single [`session::AggregationSession`], driven one
//! sample at a time by the host's capture cadence.

pub mod sample;
pub mod segmenter;
pub mod sentence;
pub mod session;
pub mod stability;
pub mod word;

pub use sample::{ClassificationSample, CompletedWord};
pub use segmenter::{AbsenceTimer, CloseReason, Segmenter};
pub use sentence::SentenceBuffer;
pub use session::{AggregationSession, SessionConfig};
pub use stability::StabilityWindow;
pub use word::WordAccumulator;
