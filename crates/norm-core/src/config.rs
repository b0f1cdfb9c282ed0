//! Normalizer configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{NormError, NormResult};
use crate::types::{Currency, Lang};

/// Configuration for a single normalization call.
///
/// Immutable once handed to a normalizer. Every field has a serde default, so
/// a partial JSON document such as `{"language": "en"}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Target language.
    #[serde(default)]
    pub language: Lang,

    /// Currency spoken for an ambiguous sign such as a bare `$`.
    #[serde(default)]
    pub default_currency: Currency,

    /// Integers with at least this many digits are spelled digit by digit.
    #[serde(default = "default_digit_threshold")]
    pub digit_threshold: usize,

    /// Caller-supplied spoken currency names, overriding the language table.
    #[serde(default)]
    pub currency_names: BTreeMap<Currency, String>,
}

fn default_digit_threshold() -> usize {
    7
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: Lang::default(),
            default_currency: Currency::default(),
            digit_threshold: default_digit_threshold(),
            currency_names: BTreeMap::new(),
        }
    }
}

impl NormalizerConfig {
    /// Default configuration for the given language.
    pub fn for_language(language: Lang) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> NormResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| NormError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> NormResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| NormError::serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> NormResult<()> {
        if self.digit_threshold == 0 {
            return Err(NormError::config("digit_threshold must be at least 1"));
        }
        if let Some((currency, _)) = self
            .currency_names
            .iter()
            .find(|(_, name)| name.trim().is_empty())
        {
            return Err(NormError::config(format!(
                "currency name override for {currency} is empty"
            )));
        }
        Ok(())
    }

    /// Set the target language.
    pub fn with_language(mut self, language: Lang) -> Self {
        self.language = language;
        self
    }

    /// Set the currency used for ambiguous signs.
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Set the digit-by-digit threshold.
    pub fn with_digit_threshold(mut self, digit_threshold: usize) -> Self {
        self.digit_threshold = digit_threshold;
        self
    }

    /// Override the spoken name of a currency.
    pub fn with_currency_name(mut self, currency: Currency, name: impl Into<String>) -> Self {
        self.currency_names.insert(currency, name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = NormalizerConfig::default();
        assert_eq!(config.language, Lang::Es);
        assert_eq!(config.default_currency, Currency::Usd);
        assert_eq!(config.digit_threshold, 7);
        assert!(config.currency_names.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = NormalizerConfig::for_language(Lang::En)
            .with_default_currency(Currency::Gbp)
            .with_digit_threshold(5)
            .with_currency_name(Currency::Usd, "bucks");

        assert_eq!(config.language, Lang::En);
        assert_eq!(config.default_currency, Currency::Gbp);
        assert_eq!(config.digit_threshold, 5);
        assert_eq!(
            config.currency_names.get(&Currency::Usd).map(String::as_str),
            Some("bucks")
        );
    }

    #[test]
    fn test_config_partial_json() {
        let config = NormalizerConfig::from_json(r#"{"language": "en"}"#).unwrap();
        assert_eq!(config.language, Lang::En);
        assert_eq!(config.digit_threshold, 7);

        let config = NormalizerConfig::from_json(
            r#"{"default_currency": "crc", "currency_names": {"eur": "euritos"}}"#,
        )
        .unwrap();
        assert_eq!(config.default_currency, Currency::Crc);
        assert_eq!(
            config.currency_names.get(&Currency::Eur).map(String::as_str),
            Some("euritos")
        );
    }

    #[test]
    fn test_config_validation() {
        let config = NormalizerConfig::default().with_digit_threshold(0);
        assert!(matches!(config.validate(), Err(NormError::Config(_))));

        let config = NormalizerConfig::default().with_currency_name(Currency::Crc, "  ");
        assert!(config.validate().is_err());

        let result = NormalizerConfig::from_json(r#"{"digit_threshold": 0}"#);
        assert!(matches!(result, Err(NormError::Config(_))));

        let result = NormalizerConfig::from_json(r#"{"language": "fr"}"#);
        assert!(matches!(result, Err(NormError::Serialization(_))));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numspeak.json");
        std::fs::write(&path, r#"{"language": "en", "digit_threshold": 4}"#).unwrap();

        let config = NormalizerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.language, Lang::En);
        assert_eq!(config.digit_threshold, 4);
    }

    #[test]
    fn test_config_missing_file() {
        let result = NormalizerConfig::from_json_file("/nonexistent/numspeak.json");
        assert!(matches!(result, Err(NormError::ConfigLoad { .. })));
    }
}
