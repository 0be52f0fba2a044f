//! Text analyzer: the public entry point for every analysis operation.
//!
//! A [`TextAnalyzer`] owns the read-only collaborators (stopword set,
//! sentence splitter and tagger) and lends them to each call. It holds no
//! mutable state, so one instance can be shared freely across threads.
//!
//! All operations lowercase their input first, so every returned token,
//! sentence and word is lowercase.
//!
//! # Quick start
//!
//! ```rust
//! use nlp_utilities::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! assert_eq!(analyzer.nouns("The dog chased the cats."), vec!["cats", "dog"]);
//! assert_eq!(
//!     analyzer.ngrams("up up and away", 2).unwrap(),
//!     vec!["up up", "up and", "and away"]
//! );
//! ```

use std::sync::OnceLock;

use crate::analysis::{extract_words, joined_ngrams, FrequencyDistribution, WordClass};
use crate::config::AnalyzerConfig;
use crate::errors::{NlpError, Result};
use crate::nlp::punctuation;
use crate::nlp::sentences::SentenceSplitter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::PosTagger;
use crate::nlp::tokenizer::{word_tokenize, wordpunct_tokenize};
use crate::types::{TaggedToken, WordCount};

/// Enter a tracing span for an analysis operation (when the `tracing`
/// feature is enabled). When disabled, this is a no-op.
macro_rules! trace_op {
    ($name:expr, $text:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("nlp_op", op = $name, input_len = $text.len()).entered();
    };
}

/// Separators used when stripping stopwords
const STOPWORD_SEPARATORS: [char; 3] = ['\'', '|', ' '];

/// Stateless text analysis over an immutable stopword set, sentence
/// splitter and part-of-speech tagger
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    stopwords: StopwordFilter,
    splitter: SentenceSplitter,
    tagger: PosTagger,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Create an analyzer with the standard English stopword list
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::english(),
            splitter: SentenceSplitter::new(),
            tagger: PosTagger::new(),
        }
    }

    /// Create an analyzer from a configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stopwords: config.stopword_filter(),
            splitter: SentenceSplitter::new().with_abbreviations(config.abbreviations.as_slice()),
            tagger: PosTagger::new(),
        })
    }

    /// Replace the stopword set
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the sentence splitter
    pub fn with_sentence_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// A process-wide default analyzer, built on first use and never mutated
    pub fn shared() -> &'static TextAnalyzer {
        static SHARED: OnceLock<TextAnalyzer> = OnceLock::new();
        SHARED.get_or_init(TextAnalyzer::new)
    }

    /// The stopword set in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Lowercase the text and remove every ASCII punctuation character.
    /// Whitespace is preserved.
    pub fn expunge_punctuation(&self, text: &str) -> String {
        trace_op!("expunge_punctuation", text);
        punctuation::strip(&text.to_lowercase())
    }

    /// Lowercase the text, split it on apostrophes, pipes and spaces, drop
    /// stopwords and re-join the remainder with single spaces.
    ///
    /// Empty pieces produced by adjacent separators are kept, so runs of
    /// separators collapse into runs of spaces rather than vanishing.
    pub fn expunge_stopwords(&self, text: &str) -> String {
        trace_op!("expunge_stopwords", text);
        text.to_lowercase()
            .split(STOPWORD_SEPARATORS)
            .filter(|piece| !self.stopwords.is_stopword(piece))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Split the text into lowercase sentences
    pub fn sentences(&self, text: &str) -> Vec<String> {
        trace_op!("sentences", text);
        self.splitter
            .split(&text.to_lowercase())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Split the text into lowercase word and punctuation runs
    pub fn word_punct(&self, text: &str) -> Vec<String> {
        trace_op!("word_punct", text);
        wordpunct_tokenize(&text.to_lowercase())
    }

    /// Split the text into lowercase Treebank-style word tokens
    pub fn word_tokens(&self, text: &str) -> Vec<String> {
        trace_op!("word_tokens", text);
        word_tokenize(&text.to_lowercase(), &self.splitter)
    }

    /// Space-joined n-grams of word tokens, in order.
    ///
    /// Returns an empty list when the text has fewer than `n` tokens.
    pub fn ngrams(&self, text: &str, n: usize) -> Result<Vec<String>> {
        trace_op!("ngrams", text);
        let n = positive(n, "ngrams")?;
        Ok(joined_ngrams(&self.word_tokens(text), n))
    }

    /// Up to `n` word tokens with their counts, most frequent first.
    /// Ties keep first-occurrence order.
    pub fn most_common_words(&self, text: &str, n: usize) -> Result<Vec<WordCount>> {
        trace_op!("most_common_words", text);
        let n = positive(n, "most_common_words")?;
        Ok(FrequencyDistribution::from_tokens(self.word_tokens(text)).most_common(n))
    }

    /// Same as [`most_common_words`](Self::most_common_words), with `n`
    /// truncated toward zero to an integer first
    pub fn frequency_distribution(&self, text: &str, n: f64) -> Result<Vec<WordCount>> {
        const OP: &str = "frequency_distribution";
        trace_op!(OP, text);
        if !n.is_finite() {
            return Err(NlpError::NonFiniteCount { operation: OP });
        }
        let n = n.trunc();
        if n < 0.0 {
            return Err(NlpError::NegativeCount {
                operation: OP,
                value: n,
            });
        }
        let n = positive(n as usize, OP)?;
        Ok(FrequencyDistribution::from_tokens(self.word_tokens(text)).most_common(n))
    }

    /// Tag every lowercase word token with its Penn Treebank tag
    pub fn pos_tag(&self, text: &str) -> Vec<TaggedToken> {
        trace_op!("pos_tag", text);
        self.tagger.tag(&self.word_tokens(text))
    }

    /// Distinct words of a word class, sorted
    pub fn extract(&self, text: &str, class: WordClass) -> Vec<String> {
        trace_op!(class.as_str(), text);
        extract_words(&self.pos_tag(text), class)
    }

    /// Nouns (`NN NNS NNP NNPS`), sorted and de-duplicated
    pub fn nouns(&self, text: &str) -> Vec<String> {
        self.extract(text, WordClass::Noun)
    }

    /// Pronouns (`PRP PRP$`), sorted and de-duplicated
    pub fn pronouns(&self, text: &str) -> Vec<String> {
        self.extract(text, WordClass::Pronoun)
    }

    /// Verbs (`VB VBD VBG VBN VBP VBZ`), sorted and de-duplicated
    pub fn verbs(&self, text: &str) -> Vec<String> {
        self.extract(text, WordClass::Verb)
    }

    /// Adverbs (`RB RBR RBS`), sorted and de-duplicated
    pub fn adverbs(&self, text: &str) -> Vec<String> {
        self.extract(text, WordClass::Adverb)
    }

    /// Adjectives (`JJ JJR JJS`), sorted and de-duplicated
    pub fn adjectives(&self, text: &str) -> Vec<String> {
        self.extract(text, WordClass::Adjective)
    }
}

fn positive(n: usize, operation: &'static str) -> Result<usize> {
    if n == 0 {
        return Err(NlpError::InvalidCount {
            operation,
            value: n,
        });
    }
    Ok(n)
}
