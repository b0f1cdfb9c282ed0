//! # text-normalizer
//!
//! Localized numeric text normalization for speech synthesis.
//!
//! Rewrites numeric expressions in free text into spoken words for Spanish
//! and English, handling:
//! - Percentages (`45%`)
//! - Currency amounts (`$19.99`, `₡1500`)
//! - Calendar years (`1984`)
//! - Decimals (`3,5`)
//! - Long digit runs, spelled digit by digit
//! - Integers
//!
//! URLs, email addresses and clock times are left exactly as written.
//!
//! # Example
//!
//! ```ignore
//! use norm_core::{Lang, NormalizerConfig};
//!
//! let config = NormalizerConfig::for_language(Lang::Es);
//! let text = text_normalizer::normalize("Subió un 45%", &config);
//! assert_eq!(text, "Subió un cuarenta y cinco por ciento");
//! ```

pub mod digits;
pub mod lang;
pub mod mask;
pub mod num2words;
pub mod rules;
pub mod segment;

use tracing::{debug, instrument, warn};

use norm_core::{NormResult, NormText, NormalizerConfig, TextNormalizer};

pub use digits::spell_digits;
pub use lang::{LanguageRules, rules_for};
pub use mask::{Masker, Placeholder, Placeholders};
pub use num2words::num_to_words;
pub use rules::Rule;

use rules::{AlphanumericSplit, RuleContext};

/// Numeric text normalizer for one configuration.
///
/// Build once and reuse: construction compiles every pattern, normalization
/// only reads them.
#[derive(Debug)]
pub struct Normalizer {
    config: NormalizerConfig,
    lang: &'static dyn LanguageRules,
    masker: Masker,
    split: Option<AlphanumericSplit>,
    rules: Vec<Box<dyn Rule>>,
}

impl Normalizer {
    /// Create a normalizer with the default rules for the configured language.
    pub fn new(config: NormalizerConfig) -> NormResult<Self> {
        let rules = rules::default_rules(rules_for(config.language))?;
        Self::with_rules(config, rules)
    }

    /// Create a normalizer with custom rules, applied in the given order.
    pub fn with_rules(config: NormalizerConfig, rules: Vec<Box<dyn Rule>>) -> NormResult<Self> {
        config.validate()?;
        let lang = rules_for(config.language);
        let split = if lang.splits_alphanumerics() {
            Some(AlphanumericSplit::new()?)
        } else {
            None
        };

        Ok(Self {
            lang,
            masker: Masker::new()?,
            split,
            rules,
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Convert a number to words in the configured language.
    pub fn to_words(&self, n: u64) -> String {
        num_to_words(n, self.config.language)
    }

    /// Spell a digit string in the configured language.
    pub fn spell_digits(&self, digits: &str) -> String {
        spell_digits(digits, self.config.language)
    }
}

impl TextNormalizer for Normalizer {
    #[instrument(skip(self, input), fields(lang = %self.config.language, input_len = input.len()))]
    fn normalize(&self, input: &str) -> NormText {
        let lang = self.config.language;
        if input.is_empty() {
            return NormText::new(input, lang);
        }

        let (masked, placeholders) = self.masker.mask(input);
        let mut segments = segment::split_protected(&masked, self.masker.token_pattern());

        if let Some(split) = &self.split {
            segments = segment::map_literals(segments, |text| split.apply(text).into_owned());
        }

        let ctx = RuleContext {
            lang: self.lang,
            config: &self.config,
        };
        for rule in &self.rules {
            segments = segment::apply_rule(segments, rule.as_ref(), &ctx);
        }

        let rendered = segment::render(&segments);
        let text = collapse_whitespace(&self.masker.unmask(&rendered, &placeholders));
        let tokens = segment::into_tokens(segments);

        debug!(
            tokens = tokens.len(),
            protected = placeholders.len(),
            "normalized text"
        );
        NormText::with_tokens(text, lang, tokens)
    }
}

/// Normalize numeric expressions in `text` for the given configuration.
///
/// Never fails: if no normalizer can be built for `config`, the input is
/// returned unchanged.
pub fn normalize(text: &str, config: &NormalizerConfig) -> String {
    if text.is_empty() {
        return String::new();
    }
    match Normalizer::new(config.clone()) {
        Ok(normalizer) => normalizer.normalize(text).text,
        Err(err) => {
            warn!(error = %err, "normalizer unavailable, returning input unchanged");
            text.to_string()
        }
    }
}

/// Collapse whitespace runs into single spaces and trim.
fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
