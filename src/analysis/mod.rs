//! Analysis primitives
//!
//! Frequency counting, n-gram windows and part-of-speech extraction over
//! already-tokenized text.

pub mod extract;
pub mod frequency;
pub mod ngrams;

pub use extract::{extract_words, WordClass};
pub use frequency::FrequencyDistribution;
pub use ngrams::{joined_ngrams, ngrams};
