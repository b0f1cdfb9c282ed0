//! Core data types shared by the normalizer and its front ends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NormError;

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
}

impl Lang {
    /// All supported languages, in display order.
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    /// Short language code.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" => Ok(Lang::Es),
            "en" | "english" => Ok(Lang::En),
            _ => Err(NormError::invalid_input(format!(
                "unknown language: {s}, expected: es or en"
            ))),
        }
    }
}

/// Currencies the normalizer can speak.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Euro.
    Eur,
    /// Costa Rican colón.
    Crc,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Crc, Currency::Gbp];

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Crc => "CRC",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "CRC" => Ok(Currency::Crc),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(NormError::invalid_input(format!(
                "unknown currency: {s}, expected one of USD, EUR, CRC, GBP"
            ))),
        }
    }
}

/// Category of a recognized numeric expression.
///
/// Variants are listed in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `45%`, `12,5 %`.
    Percentage,
    /// `$19.99`, `₡1500`, `EUR 3,50`.
    Currency,
    /// Bare calendar year in 1000..=2099.
    Year,
    /// `3,5`, `0.25`.
    Decimal,
    /// Bare run of seven or more digits.
    LongRun,
    /// Any other bare digit run.
    Integer,
}

impl Category {
    /// Stable snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Percentage => "percentage",
            Category::Currency => "currency",
            Category::Year => "year",
            Category::Decimal => "decimal",
            Category::LongRun => "long_run",
            Category::Integer => "integer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric expression found in the input and the words it was rewritten to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericToken {
    /// Recognized category.
    pub category: Category,
    /// Matched source text.
    pub source: String,
    /// Spoken replacement.
    pub spoken: String,
}

impl NumericToken {
    /// Create a new token.
    pub fn new(category: Category, source: impl Into<String>, spoken: impl Into<String>) -> Self {
        Self {
            category,
            source: source.into(),
            spoken: spoken.into(),
        }
    }
}

/// Normalized text with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormText {
    /// The normalized text content.
    pub text: String,
    /// Language the text was normalized for.
    pub lang: Lang,
    /// Numeric tokens rewritten during normalization, in text order.
    pub tokens: Vec<NumericToken>,
}

impl NormText {
    /// Create a new NormText with no token information.
    pub fn new(text: impl Into<String>, lang: Lang) -> Self {
        Self {
            text: text.into(),
            lang,
            tokens: Vec::new(),
        }
    }

    /// Create NormText with token information.
    pub fn with_tokens(text: impl Into<String>, lang: Lang, tokens: Vec<NumericToken>) -> Self {
        Self {
            text: text.into(),
            lang,
            tokens,
        }
    }
}
