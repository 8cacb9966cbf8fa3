//! The aggregation session: one capture run's worth of mutable state.

use crate::aggregation::sample::{ClassificationSample, CompletedWord};
use crate::aggregation::segmenter::Segmenter;
use crate::aggregation::sentence::SentenceBuffer;
use crate::aggregation::stability::StabilityWindow;
use crate::aggregation::word::WordAccumulator;
use crate::correction::corrector::{LexiconCorrector, WordCorrector};
use crate::defaults;
use crate::error::{Result, SignstreamError};
use crate::lexicon::Lexicon;
use std::time::{Duration, Instant};

/// Tuning knobs for one aggregation session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Capacity of the label stability window.
    pub window_capacity: usize,
    /// Minimum classifier confidence for a label to be accepted (strict).
    pub confidence_threshold: f64,
    /// Hand-absence duration after which a word closes (strict, ms).
    pub absence_close_ms: u64,
    /// Maximum letters in a word before it closes.
    pub word_length_cap: usize,
    /// Maximum time a word may stay in progress (strict, ms).
    pub word_elapsed_cap_ms: u64,
    /// Minimum similarity for a lexicon candidate to replace a word (strict).
    pub correction_similarity_threshold: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_capacity: defaults::WINDOW_CAPACITY,
            confidence_threshold: defaults::CONFIDENCE_THRESHOLD,
            absence_close_ms: defaults::ABSENCE_CLOSE_MS,
            word_length_cap: defaults::WORD_LENGTH_CAP,
            word_elapsed_cap_ms: defaults::WORD_ELAPSED_CAP_MS,
            correction_similarity_threshold: defaults::CORRECTION_SIMILARITY_THRESHOLD,
        }
    }
}

/// All mutable state of one gesture-capture session.
///
/// The host owns the session and drives it one sample at a time; every
/// mutation happens inside [`on_sample`](Self::on_sample),
/// [`force_complete_current_word`](Self::force_complete_current_word), or
/// [`reset`](Self::reset). The session performs no I/O, owns no timers, and
/// never blocks; time only advances through the timestamps the host passes
/// in.
pub struct AggregationSession {
    config: SessionConfig,
    window: StabilityWindow,
    word: WordAccumulator,
    segmenter: Segmenter,
    sentence: SentenceBuffer,
    corrector: Box<dyn WordCorrector>,
    last_confidence: f64,
    last_observed: Option<Instant>,
}

impl AggregationSession {
    /// Creates a session over the given lexicon with default configuration.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(SessionConfig::default(), lexicon)
    }

    /// Creates a session with custom configuration.
    pub fn with_config(config: SessionConfig, lexicon: Lexicon) -> Self {
        let corrector =
            LexiconCorrector::with_threshold(lexicon, config.correction_similarity_threshold);
        Self::with_corrector(config, Box::new(corrector))
    }

    /// Creates a session with a custom corrector implementation.
    pub fn with_corrector(config: SessionConfig, corrector: Box<dyn WordCorrector>) -> Self {
        Self {
            window: StabilityWindow::with_capacity(config.window_capacity),
            word: WordAccumulator::new(),
            segmenter: Segmenter::with_limits(
                Duration::from_millis(config.absence_close_ms),
                config.word_length_cap,
                Duration::from_millis(config.word_elapsed_cap_ms),
            ),
            sentence: SentenceBuffer::new(),
            corrector,
            last_confidence: 0.0,
            last_observed: None,
            config,
        }
    }

    /// Processes one classification sample.
    ///
    /// Called once per poll by the host, samples in timestamp order. Returns
    /// the completed word when this sample closed one, `Ok(None)` otherwise.
    ///
    /// Confidence outside `[0, 1]` and timestamps running backwards are
    /// contract violations and fail fast; clamping either would corrupt the
    /// vote and timing logic.
    pub fn on_sample(&mut self, sample: ClassificationSample) -> Result<Option<CompletedWord>> {
        if !(0.0..=1.0).contains(&sample.confidence) {
            return Err(SignstreamError::ConfidenceOutOfRange {
                value: sample.confidence,
            });
        }
        if let Some(prev) = self.last_observed
            && sample.observed_at < prev
        {
            return Err(SignstreamError::NonMonotonicTimestamp);
        }
        self.last_observed = Some(sample.observed_at);

        if sample.hand_present
            && sample.confidence > self.config.confidence_threshold
            && let Some(label) = sample.label
        {
            self.window.accept(label);
            if let Some(stable) = self.window.majority() {
                self.word.observe_stable_letter(stable, sample.observed_at);
            }
            self.last_confidence = sample.confidence;
        }

        let closed = self
            .segmenter
            .evaluate(sample.hand_present, sample.observed_at, &self.word)
            .map(|_| self.close_word());
        Ok(closed)
    }

    /// Closes the in-progress word on request, regardless of triggers.
    ///
    /// Returns `None` when no word is in progress.
    pub fn force_complete_current_word(&mut self) -> Option<CompletedWord> {
        if self.word.is_empty() {
            None
        } else {
            Some(self.close_word())
        }
    }

    /// Letters of the word currently being built, for live display.
    pub fn current_word(&self) -> String {
        self.word.text()
    }

    /// The sentence accumulated so far, for live display.
    pub fn current_sentence(&self) -> &str {
        self.sentence.as_str()
    }

    /// Discards all session state without emitting anything.
    ///
    /// Any in-progress word is dropped, not completed; call
    /// [`force_complete_current_word`](Self::force_complete_current_word)
    /// first to keep it.
    pub fn reset(&mut self) {
        self.window.clear();
        self.word.reset();
        self.segmenter.reset();
        self.sentence.clear();
        self.last_confidence = 0.0;
        self.last_observed = None;
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn close_word(&mut self) -> CompletedWord {
        let raw = self.word.text();
        let corrected = self.corrector.correct(&raw);
        self.sentence.append(&corrected);
        self.word.reset();
        // Stale labels must not vote on the next word
        self.window.clear();
        CompletedWord {
            raw,
            corrected,
            confidence: self.last_confidence,
        }
    }
}
