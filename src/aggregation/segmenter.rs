//! Per-sample decision of when the in-progress word must close.

use crate::aggregation::word::WordAccumulator;
use crate::defaults;
use std::time::{Duration, Instant};

/// Why a word was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The hand left the frame for longer than the absence threshold.
    HandAbsence,
    /// The word reached the letter cap.
    LengthCap,
    /// The word stayed in progress past the elapsed-time cap.
    ElapsedCap,
}

/// Tracks how long the hand has been continuously out of frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsenceTimer {
    since: Option<Instant>,
}

impl AbsenceTimer {
    /// Creates a timer with no absence recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of an absence if one is not already running.
    pub fn start(&mut self, now: Instant) {
        if self.since.is_none() {
            self.since = Some(now);
        }
    }

    /// Clears the absence clock. Any later absence starts from scratch.
    pub fn clear(&mut self) {
        self.since = None;
    }

    /// When the current absence began, if one is running.
    pub fn since(&self) -> Option<Instant> {
        self.since
    }
}

/// Evaluates the three independent close triggers on every sample.
///
/// Word state lives in the [`WordAccumulator`]; the segmenter owns only the
/// absence clock and the trigger thresholds. At most one close is reported
/// per sample, absence checked first.
#[derive(Debug, Clone)]
pub struct Segmenter {
    absence: AbsenceTimer,
    absence_close: Duration,
    length_cap: usize,
    elapsed_cap: Duration,
}

impl Segmenter {
    /// Creates a segmenter with the default thresholds.
    pub fn new() -> Self {
        Self::with_limits(
            defaults::absence_close(),
            defaults::WORD_LENGTH_CAP,
            defaults::word_elapsed_cap(),
        )
    }

    /// Creates a segmenter with custom thresholds.
    pub fn with_limits(absence_close: Duration, length_cap: usize, elapsed_cap: Duration) -> Self {
        Self {
            absence: AbsenceTimer::new(),
            absence_close,
            length_cap,
            elapsed_cap,
        }
    }

    /// Processes one sample's hand-presence and word state.
    ///
    /// Runs after the sample's letter (if any) has been accumulated, so a
    /// word closes on the very sample that produced its capping letter. The
    /// comparisons are strict: absence and elapsed time must exceed their
    /// thresholds.
    pub fn evaluate(
        &mut self,
        hand_present: bool,
        now: Instant,
        word: &WordAccumulator,
    ) -> Option<CloseReason> {
        let mut reason = None;

        if hand_present {
            self.absence.clear();
        } else {
            match self.absence.since() {
                None => self.absence.start(now),
                Some(since) => {
                    if now.duration_since(since) > self.absence_close && !word.is_empty() {
                        reason = Some(CloseReason::HandAbsence);
                        self.absence.clear();
                    }
                }
            }
        }

        // Length and elapsed caps apply regardless of hand presence
        if reason.is_none() && !word.is_empty() {
            if word.len() >= self.length_cap {
                reason = Some(CloseReason::LengthCap);
            } else if let Some(started) = word.started_at()
                && now.duration_since(started) > self.elapsed_cap
            {
                reason = Some(CloseReason::ElapsedCap);
            }
        }

        reason
    }

    /// Clears the absence clock, e.g. on session reset.
    pub fn reset(&mut self) {
        self.absence.clear();
    }

    /// The absence clock, for inspection.
    pub fn absence(&self) -> &AbsenceTimer {
        &self.absence
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
