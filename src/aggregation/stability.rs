//! Sliding window of accepted labels with majority voting.

use crate::defaults;
use std::collections::VecDeque;

/// Bounded FIFO of recently accepted labels.
///
/// Callers are expected to filter before pushing: only labels from samples
/// with `hand_present`, a classified letter, and confidence above the
/// acceptance threshold belong in the window.
#[derive(Debug, Clone)]
pub struct StabilityWindow {
    entries: VecDeque<char>,
    capacity: usize,
}

impl StabilityWindow {
    /// Creates a window with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(defaults::WINDOW_CAPACITY)
    }

    /// Creates a window with a custom capacity. A zero capacity is clamped to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a label, evicting the oldest entry when at capacity.
    pub fn accept(&mut self, label: char) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(label);
    }

    /// Majority label of the window, or `None` when empty.
    ///
    /// The winner is the label with the strictly highest occurrence count.
    /// When several labels share the highest count, the first of them to
    /// appear in the window wins. Callers depend on this tie-break for
    /// deterministic smoothing of noisy input.
    pub fn majority(&self) -> Option<char> {
        // Counts in first-appearance order; only a strictly greater count
        // displaces the current winner.
        let mut counts: Vec<(char, usize)> = Vec::new();
        for &label in &self.entries {
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }

        let (mut winner, mut winner_count) = *counts.first()?;
        for &(label, count) in counts.iter().skip(1) {
            if count > winner_count {
                winner = label;
                winner_count = count;
            }
        }
        Some(winner)
    }

    /// Number of labels currently in the window.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no labels have been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for StabilityWindow {
    fn default() -> Self {
        Self::new()
    }
}
