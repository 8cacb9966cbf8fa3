//! Default tuning constants for signstream.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

use std::time::Duration;

/// Capacity of the label stability window.
///
/// Seven accepted labels cover roughly the last dozen seconds of polling at the
/// suggested cadence, enough to out-vote single misclassifications without
/// lagging noticeably behind a deliberate hand-shape change.
pub const WINDOW_CAPACITY: usize = 7;

/// Minimum classifier confidence for a label to be accepted.
///
/// Samples at or below this value never reach the stability window.
/// The comparison is strict (`confidence > 0.70`).
pub const CONFIDENCE_THRESHOLD: f64 = 0.70;

/// Hand-absence duration after which an in-progress word is closed.
///
/// The comparison is strict: absence must exceed this duration. A hand-present
/// sample resets the absence clock entirely.
pub const ABSENCE_CLOSE_MS: u64 = 500;

/// Maximum letters in a word before it is closed.
///
/// Fingerspelled words longer than this are rare, and capping keeps a missed
/// segmentation boundary from swallowing the rest of the sentence.
pub const WORD_LENGTH_CAP: usize = 5;

/// Maximum time a word may stay in progress before it is closed.
///
/// The comparison is strict (`elapsed > 3000 ms`). Applies regardless of hand
/// presence.
pub const WORD_ELAPSED_CAP_MS: u64 = 3000;

/// Minimum similarity ratio for a lexicon candidate to replace the raw word.
///
/// The comparison is strict (`similarity > 0.70`).
pub const CORRECTION_SIMILARITY_THRESHOLD: f64 = 0.70;

/// Suggested interval between classification polls, in milliseconds.
///
/// The polling cadence is owned by the host's capture loop, not this crate;
/// this value is informational only.
pub const SUGGESTED_POLL_INTERVAL_MS: u64 = 2000;

/// Absence-close threshold as a [`Duration`].
pub fn absence_close() -> Duration {
    Duration::from_millis(ABSENCE_CLOSE_MS)
}

/// Word elapsed-time cap as a [`Duration`].
pub fn word_elapsed_cap() -> Duration {
    Duration::from_millis(WORD_ELAPSED_CAP_MS)
}
