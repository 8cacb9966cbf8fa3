//! Accumulator for the word currently being fingerspelled.

use std::time::Instant;

/// Mutable state of the in-progress word.
///
/// Invariant: `started_at` is `Some` exactly while the word is non-empty.
#[derive(Debug, Clone, Default)]
pub struct WordAccumulator {
    letters: Vec<char>,
    started_at: Option<Instant>,
}

impl WordAccumulator {
    /// Creates an empty accumulator (no word in progress).
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a stabilized letter.
    ///
    /// The letter is appended only if it differs from the last letter already
    /// in the word: holding the same hand shape across many polls yields one
    /// letter, while returning to a shape after a different one yields a
    /// second occurrence. The first letter of a new word records `now` as the
    /// word's start time.
    pub fn observe_stable_letter(&mut self, letter: char, now: Instant) {
        if self.letters.last() == Some(&letter) {
            return;
        }
        if self.letters.is_empty() {
            self.started_at = Some(now);
        }
        self.letters.push(letter);
    }

    /// Clears the word and its start time.
    pub fn reset(&mut self) {
        self.letters.clear();
        self.started_at = None;
    }

    /// Current letters joined into a raw word.
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Number of letters accumulated so far.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true when no word is in progress.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// When the first letter of the current word arrived.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}
