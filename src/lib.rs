//! Stateless text analysis helpers.
//!
//! Tokenization, stopword and punctuation stripping, n-grams, word
//! frequencies and part-of-speech extraction over plain `&str` input.
//!
//! Every operation is available as a method on [`TextAnalyzer`] and as a free
//! function at the crate root that uses [`TextAnalyzer::shared`].
//!
//! ```rust
//! let nouns = nlp_utilities::nouns("The dog chased the cats.");
//! assert_eq!(nouns, vec!["cats", "dog"]);
//!
//! let top = nlp_utilities::most_common_words("to be or not to be", 1).unwrap();
//! assert_eq!(top[0].word, "to");
//! assert_eq!(top[0].count, 2);
//! ```

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod errors;
pub mod nlp;
pub mod types;

pub use analysis::WordClass;
pub use analyzer::TextAnalyzer;
pub use config::AnalyzerConfig;
pub use errors::{NlpError, Result};
pub use types::{PosTag, TaggedToken, WordCount};

/// Lowercase text with ASCII punctuation removed
pub fn expunge_punctuation(text: &str) -> String {
    TextAnalyzer::shared().expunge_punctuation(text)
}

/// Lowercase text with English stopwords removed
pub fn expunge_stopwords(text: &str) -> String {
    TextAnalyzer::shared().expunge_stopwords(text)
}

/// Lowercase sentences
pub fn sentences(text: &str) -> Vec<String> {
    TextAnalyzer::shared().sentences(text)
}

/// Lowercase word and punctuation runs
pub fn word_punct(text: &str) -> Vec<String> {
    TextAnalyzer::shared().word_punct(text)
}

/// Lowercase Treebank-style word tokens
pub fn word_tokens(text: &str) -> Vec<String> {
    TextAnalyzer::shared().word_tokens(text)
}

/// Space-joined n-grams of word tokens
pub fn ngrams(text: &str, n: usize) -> Result<Vec<String>> {
    TextAnalyzer::shared().ngrams(text, n)
}

/// The `n` most frequent word tokens
pub fn most_common_words(text: &str, n: usize) -> Result<Vec<WordCount>> {
    TextAnalyzer::shared().most_common_words(text, n)
}

/// The `n` most frequent word tokens, with `n` coerced to an integer
pub fn frequency_distribution(text: &str, n: f64) -> Result<Vec<WordCount>> {
    TextAnalyzer::shared().frequency_distribution(text, n)
}

/// Word tokens with Penn Treebank tags
pub fn pos_tag(text: &str) -> Vec<TaggedToken> {
    TextAnalyzer::shared().pos_tag(text)
}

pub fn nouns(text: &str) -> Vec<String> {
    TextAnalyzer::shared().nouns(text)
}

pub fn pronouns(text: &str) -> Vec<String> {
    TextAnalyzer::shared().pronouns(text)
}

pub fn verbs(text: &str) -> Vec<String> {
    TextAnalyzer::shared().verbs(text)
}

pub fn adverbs(text: &str) -> Vec<String> {
    TextAnalyzer::shared().adverbs(text)
}

pub fn adjectives(text: &str) -> Vec<String> {
    TextAnalyzer::shared().adjectives(text)
}
