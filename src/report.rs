//! JSON payload for forwarding completed words to the host's backend.

use crate::aggregation::sample::CompletedWord;
use serde::{Deserialize, Serialize};

/// One completed word together with the sentence it joined.
///
/// Hosts POST this to their word-storage endpoint after each close; the
/// session itself never performs the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    /// The corrected word that was appended to the sentence.
    pub word: String,
    /// The sentence after the append, trailing space included.
    pub sentence: String,
    /// Confidence carried by the completed word.
    pub confidence: f64,
}

impl WordReport {
    /// Builds a report from a completed word and the current sentence.
    pub fn new(completed: &CompletedWord, sentence: &str) -> Self {
        Self {
            word: completed.corrected.clone(),
            sentence: sentence.to_string(),
            confidence: completed.confidence,
        }
    }

    /// Serialize report to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize report from JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
