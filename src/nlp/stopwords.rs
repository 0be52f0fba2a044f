//! Stopword filtering
//!
//! English uses the standard 179-word list that ships with most NLP
//! toolkits. Other languages are loaded from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// The standard English stopword list
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A read-only set of stopwords
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create a filter for the given language, falling back to English for
    /// languages without a bundled list
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn new(language: &str) -> Self {
        Self::for_language(language).unwrap_or_else(Self::english)
    }

    /// Create a filter for the given language, or `None` if it is not supported
    pub fn for_language(language: &str) -> Option<Self> {
        Self::load_stopwords(language).map(|stopwords| Self { stopwords })
    }

    /// The standard English filter
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOPWORDS)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add stopwords, consuming and returning the filter
    pub fn with_additional<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
        self
    }

    /// Remove stopwords, consuming and returning the filter
    pub fn without<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
        self
    }

    /// Check if a word is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Whether a language code or name has a bundled list
    pub fn is_supported_language(language: &str) -> bool {
        Self::language_code(language).is_some()
    }

    fn language_code(language: &str) -> Option<Option<LANGUAGE>> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => return Some(None),
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(Some(lang))
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> Option<FxHashSet<String>> {
        match Self::language_code(language)? {
            None => Some(ENGLISH_STOPWORDS.iter().map(|s| s.to_string()).collect()),
            Some(lang) => Some(get(lang).iter().map(|s| s.to_lowercase()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert_eq!(filter.len(), 179);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("don't"));
        assert!(filter.is_stopword("t"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_custom_stopwords() {
        let filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        let filter = filter.with_additional(&["extra"]).without(&["custom"]);
        assert!(filter.is_stopword("extra"));
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert!(StopwordFilter::for_language("klingon").is_none());
        assert!(!StopwordFilter::is_supported_language("klingon"));
        assert!(StopwordFilter::is_supported_language("English"));

        let filter = StopwordFilter::new("klingon");
        assert_eq!(filter.len(), ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn test_lookup_ignores_case() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("THE"));
    }
}
