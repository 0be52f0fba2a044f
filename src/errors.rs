//! Error types

use thiserror::Error;

/// Errors raised by analysis operations and configuration loading
#[derive(Debug, Error)]
pub enum NlpError {
    /// A count parameter was zero
    #[error("{operation}: count must be a positive integer, got {value}")]
    InvalidCount {
        operation: &'static str,
        value: usize,
    },

    /// A numeric count parameter was negative after integer coercion
    #[error("{operation}: count must not be negative, got {value}")]
    NegativeCount { operation: &'static str, value: f64 },

    /// A numeric count parameter was NaN or infinite
    #[error("{operation}: count must be a finite number")]
    NonFiniteCount { operation: &'static str },

    /// Configuration JSON could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration parsed but is not acceptable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NlpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NlpError::InvalidCount {
            operation: "ngrams",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "ngrams: count must be a positive integer, got 0"
        );

        let err = NlpError::NonFiniteCount {
            operation: "frequency_distribution",
        };
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NlpError = parse_err.into();
        assert!(matches!(err, NlpError::ConfigParse(_)));
    }
}
