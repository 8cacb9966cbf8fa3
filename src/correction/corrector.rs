//! Corrector trait and the lexicon-backed implementation.

use crate::correction::levenshtein::{edit_distance, similarity};
use crate::defaults;
use crate::lexicon::Lexicon;

/// Trait for correcting a completed raw word before it joins the sentence.
pub trait WordCorrector: Send + 'static {
    /// Correct a raw word. Always returns a word, never fails.
    fn correct(&self, raw: &str) -> String;

    /// Return the name of this corrector for logging.
    fn name(&self) -> &str;
}

/// Passthrough corrector that returns the case-folded word unchanged.
///
/// Used when lexical correction is disabled by the host.
pub struct PassthroughCorrector;

impl WordCorrector for PassthroughCorrector {
    fn correct(&self, raw: &str) -> String {
        raw.to_lowercase()
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

/// Approximate corrector scanning a fixed lexicon.
///
/// Lexicon members pass through case-folded. For anything else the scan keeps
/// the entry with the highest edit distance from the input (ties keep the
/// earliest entry in lexicon order) and accepts it only when the similarity
/// ratio against that entry clears the threshold; otherwise the folded input
/// is returned unchanged.
// TODO: confirm with the product whether the scan should prefer the nearest
// entry instead; shipping behavior keeps the highest-distance one.
pub struct LexiconCorrector {
    lexicon: Lexicon,
    similarity_threshold: f64,
}

impl LexiconCorrector {
    /// Creates a corrector over the given lexicon with the default threshold.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_threshold(lexicon, defaults::CORRECTION_SIMILARITY_THRESHOLD)
    }

    /// Creates a corrector with a custom similarity threshold.
    pub fn with_threshold(lexicon: Lexicon, similarity_threshold: f64) -> Self {
        Self {
            lexicon,
            similarity_threshold,
        }
    }

    /// The lexicon this corrector scans.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl WordCorrector for LexiconCorrector {
    fn correct(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let folded = raw.to_lowercase();
        if self.lexicon.contains(&folded) {
            return folded;
        }

        let mut best: Option<&str> = None;
        let mut best_score = 0usize;
        for entry in self.lexicon.iter() {
            let score = edit_distance(&folded, entry);
            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        let Some(candidate) = best else {
            // Empty lexicon: nothing to correct against
            return folded;
        };

        if similarity(&folded, candidate) > self.similarity_threshold {
            candidate.to_string()
        } else {
            folded
        }
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
