//! Fixed word set used by the lexical corrector.
//!
//! Entries are case-folded and deduplicated at insertion, and iteration
//! preserves first-insertion order. The corrector's tie-break depends on that
//! order, so it is part of this type's contract, not an implementation detail.

use crate::error::{Result, SignstreamError};
use std::collections::HashSet;
use std::path::Path;

/// Stock English word list shipped with the chat product.
pub const DEFAULT_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "hello", "world", "good",
    "morning", "afternoon", "evening", "night", "day", "week", "month", "year", "time", "work",
    "play", "eat", "drink", "sleep", "walk", "run", "talk", "listen", "see", "hear", "feel",
    "think", "know", "want", "need", "like", "love", "hate", "help", "please", "thank", "sorry",
    "yes", "no", "maybe", "okay", "fine", "great", "bad", "big", "small", "hot", "cold", "new",
    "old", "young", "fast", "slow", "high", "low", "up", "down", "left", "right", "front", "back",
    "inside", "outside", "here", "there", "now", "then", "today", "tomorrow", "yesterday", "this",
    "these", "those", "my", "your", "his", "her", "their", "our", "we", "you", "they", "me", "him",
    "us", "them", "i", "am", "do", "can", "would", "could", "should", "may", "might", "must",
    "shall", "have", "had", "been", "being", "get", "got", "getting", "go", "went", "going",
    "gone", "come", "came", "coming", "make", "made", "making", "take", "took", "taking", "taken",
    "give", "gave", "giving", "given", "say", "said", "saying", "tell", "told", "telling", "saw",
    "seeing", "seen", "look", "looked", "looking", "find", "found", "finding", "thought",
    "thinking", "knew", "knowing", "known", "felt", "feeling", "wanted", "wanting", "needed",
    "needing", "liked", "liking", "loved", "loving", "helped", "helping", "pleased", "pleasing",
    "thanked", "thanking", "excuse", "pardon", "forgive", "forgave", "forgiving", "forgiven",
];

/// Read-only word set with deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    order: Vec<String>,
    members: HashSet<String>,
}

impl Lexicon {
    /// Creates an empty lexicon. Every correction against it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexicon containing [`DEFAULT_WORDS`].
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_WORDS.iter().copied())
    }

    /// Creates a lexicon from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Loads a lexicon from a file with one word per line.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SignstreamError::LexiconRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::from_words(
            content.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }

    /// Inserts a word, case-folded. Returns false for duplicates and empty input.
    pub fn insert(&mut self, word: &str) -> bool {
        let folded = word.trim().to_lowercase();
        if folded.is_empty() || self.members.contains(&folded) {
            return false;
        }
        self.order.push(folded.clone());
        self.members.insert(folded);
        true
    }

    /// Returns true if the case-folded form of `word` is a member.
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(&word.to_lowercase())
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
