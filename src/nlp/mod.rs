//! Natural Language Processing components
//!
//! This module provides tokenization, sentence splitting, stopword and
//! punctuation sets, and part-of-speech tagging.

pub mod punctuation;
pub mod sentences;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
