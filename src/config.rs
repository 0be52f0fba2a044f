//! Analyzer configuration.
//!
//! An [`AnalyzerConfig`] selects the stopword language, adjusts the stopword
//! set and extends the sentence splitter's abbreviation list. Every field is
//! optional; an empty object yields the standard English setup.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "language": "en",
//!   "extra_stopwords": ["foo"],
//!   "keep_stopwords": ["not"],
//!   "abbreviations": ["approx"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{NlpError, Result};
use crate::nlp::stopwords::StopwordFilter;

const DEFAULT_LANGUAGE: &str = "en";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Configuration for a [`TextAnalyzer`](crate::TextAnalyzer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Stopword language code or name (e.g., `"en"`, `"german"`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Words added to the stopword set
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Words removed from the stopword set
    #[serde(default)]
    pub keep_stopwords: Vec<String>,

    /// Extra abbreviations that do not end a sentence
    #[serde(default)]
    pub abbreviations: Vec<String>,

    /// If `true`, unknown fields and unsupported languages are errors; if
    /// `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            extra_stopwords: Vec::new(),
            keep_stopwords: Vec::new(),
            abbreviations: Vec::new(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check unknown fields and the stopword language.
    ///
    /// In strict mode either problem is an error. Otherwise it is logged and
    /// the analyzer falls back to defaults.
    pub fn validate(&self) -> Result<()> {
        if !self.unknown_fields.is_empty() {
            let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
            names.sort_unstable();
            let message = format!("unknown field(s): {}", names.join(", "));
            if self.strict {
                return Err(NlpError::InvalidConfig(message));
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(fields = ?names, "ignoring unknown configuration fields");
        }

        if !StopwordFilter::is_supported_language(&self.language) {
            if self.strict {
                return Err(NlpError::InvalidConfig(format!(
                    "unsupported language: {}",
                    self.language
                )));
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(
                language = %self.language,
                "unsupported stopword language, falling back to English"
            );
        }

        Ok(())
    }

    /// Build the stopword filter this configuration describes
    pub fn stopword_filter(&self) -> StopwordFilter {
        StopwordFilter::new(&self.language)
            .with_additional(self.extra_stopwords.as_slice())
            .without(self.keep_stopwords.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "language": "english",
            "extra_stopwords": ["Foo"],
            "keep_stopwords": ["not"],
            "abbreviations": ["approx"],
            "strict": true
        }"#;
        let config = AnalyzerConfig::from_json(json).unwrap();
        let filter = config.stopword_filter();

        assert!(filter.is_stopword("foo"));
        assert!(!filter.is_stopword("not"));
        assert!(filter.is_stopword("the"));
        assert_eq!(config.abbreviations, vec!["approx"]);
    }

    #[test]
    fn test_unknown_fields_warn_when_lenient() {
        let config = AnalyzerConfig::from_json(r#"{"colour": "blue"}"#).unwrap();
        assert!(config.unknown_fields.contains_key("colour"));
    }

    #[test]
    fn test_unknown_fields_rejected_when_strict() {
        let err = AnalyzerConfig::from_json(r#"{"strict": true, "zeta": 1, "alpha": 2}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: unknown field(s): alpha, zeta"
        );
    }

    #[test]
    fn test_unsupported_language() {
        let config = AnalyzerConfig::from_json(r#"{"language": "klingon"}"#).unwrap();
        assert_eq!(config.stopword_filter().len(), 179);

        let err = AnalyzerConfig::from_json(r#"{"language": "klingon", "strict": true}"#)
            .unwrap_err();
        assert!(matches!(err, NlpError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AnalyzerConfig::from_json("{\"language\": 3}").unwrap_err();
        assert!(matches!(err, NlpError::ConfigParse(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nlp.json");
        std::fs::write(&path, r#"{"extra_stopwords": ["lorem"]}"#).unwrap();

        let config = AnalyzerConfig::from_path(&path).unwrap();
        assert_eq!(config.extra_stopwords, vec!["lorem"]);

        let missing = AnalyzerConfig::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, NlpError::ConfigIo(_)));
    }
}
