//! Unified error types for the normalizer.

use std::path::PathBuf;

/// Main error type for normalizer construction and configuration.
///
/// Normalizing text never produces one of these; only building a
/// normalizer, loading configuration, or parsing user-facing codes can fail.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// Configuration value out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input provided (unknown language or currency code).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A recognition pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a pattern error with message.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Create a serialization error with message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormError::config("digit_threshold must be at least 1");
        assert_eq!(
            err.to_string(),
            "configuration error: digit_threshold must be at least 1"
        );

        let err = NormError::invalid_input("unknown language: fr");
        assert_eq!(err.to_string(), "invalid input: unknown language: fr");
    }

    #[test]
    fn test_error_constructors() {
        let err = NormError::pattern("unclosed group");
        assert!(matches!(err, NormError::Pattern(_)));

        let err = NormError::serialization("expected value");
        assert!(matches!(err, NormError::Serialization(_)));
    }

    #[test]
    fn test_config_load_display() {
        let err = NormError::ConfigLoad {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read missing.json: not found");
    }
}
