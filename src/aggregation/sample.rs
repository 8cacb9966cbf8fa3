//! Data types flowing through the aggregation session.

use std::time::Instant;

/// One observation from the gesture classifier.
///
/// Created once per poll by the host and consumed by
/// [`AggregationSession::on_sample`](crate::aggregation::AggregationSession::on_sample).
#[derive(Debug, Clone)]
pub struct ClassificationSample {
    /// Classified letter, if the classifier produced one.
    pub label: Option<char>,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    /// Whether a hand was detected in the frame.
    pub hand_present: bool,
    /// Timestamp of the observation, supplied by the host.
    pub observed_at: Instant,
}

impl ClassificationSample {
    /// Creates a new sample.
    pub fn new(label: Option<char>, confidence: f64, hand_present: bool, observed_at: Instant) -> Self {
        Self {
            label,
            confidence,
            hand_present,
            observed_at,
        }
    }

    /// Convenience constructor for a frame with no hand in view.
    pub fn absent(observed_at: Instant) -> Self {
        Self::new(None, 0.0, false, observed_at)
    }
}

/// A finished word, emitted synchronously from the closing sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedWord {
    /// Letters exactly as accumulated.
    pub raw: String,
    /// Word after lexical correction.
    pub corrected: String,
    /// Confidence of the most recent accepted sample.
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_creation() {
        let now = Instant::now();
        let sample = ClassificationSample::new(Some('A'), 0.92, true, now);

        assert_eq!(sample.label, Some('A'));
        assert_eq!(sample.confidence, 0.92);
        assert!(sample.hand_present);
        assert_eq!(sample.observed_at, now);
    }

    #[test]
    fn test_absent_sample() {
        let now = Instant::now();
        let sample = ClassificationSample::absent(now);

        assert_eq!(sample.label, None);
        assert_eq!(sample.confidence, 0.0);
        assert!(!sample.hand_present);
    }

    #[test]
    fn test_completed_word_equality() {
        let a = CompletedWord {
            raw: "HI".to_string(),
            corrected: "hi".to_string(),
            confidence: 0.9,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
