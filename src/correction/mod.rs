//! Approximate lexical correction for completed words.

pub mod corrector;
pub mod levenshtein;

pub use corrector::{LexiconCorrector, PassthroughCorrector, WordCorrector};
pub use levenshtein::{edit_distance, similarity};
