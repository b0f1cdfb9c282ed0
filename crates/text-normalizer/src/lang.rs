//! Per-language reading conventions.
//!
//! Each supported language is a unit struct implementing [`LanguageRules`].
//! The tables they reference are `const` data; [`rules_for`] hands out a
//! shared `&'static` instance, so no language state is ever mutated.

use std::fmt;

use norm_core::{Currency, Lang};

use crate::digits::spell_digits;
use crate::num2words::{apocope_es, num_to_words_en, num_to_words_es};

/// A currency sign as written in text, with the currency it denotes.
///
/// `None` marks an ambiguous sign that resolves to the configured default.
pub type CurrencySign = (&'static str, Option<Currency>);

/// Language-specific reading rules used by the classifiers.
pub trait LanguageRules: Send + Sync + fmt::Debug {
    /// Language these rules speak.
    fn lang(&self) -> Lang;

    /// Cardinal number words, or `None` past the largest known scale.
    fn cardinal(&self, n: u64) -> Option<String>;

    /// Digit-by-digit reading.
    fn spell(&self, digits: &str) -> String {
        spell_digits(digits, self.lang())
    }

    /// Reading of a calendar year in 1000..=2099.
    fn year_to_words(&self, year: u64) -> Option<String> {
        self.cardinal(year)
    }

    /// Word spoken for the decimal separator written in the source text.
    fn decimal_separator_word(&self, separator: char) -> &'static str;

    /// Word spoken between the whole and fractional part of a percentage.
    fn percent_separator_word(&self) -> &'static str;

    /// Word for "percent".
    fn percent_word(&self) -> &'static str;

    /// Currency signs and codes recognized in front of an amount.
    fn currency_signs(&self) -> &'static [CurrencySign];

    /// Spoken currency name agreeing with `amount`.
    fn currency_name(&self, currency: Currency, amount: u64) -> &'static str;

    /// Whole amount followed by the currency name.
    fn money(&self, amount: u64, name: &str) -> Option<String> {
        Some(format!("{} {name}", self.cardinal(amount)?))
    }

    /// Phrase for a one- or two-digit fractional amount, appended after [`money`].
    ///
    /// `None` means nothing is spoken for this fraction.
    ///
    /// [`money`]: LanguageRules::money
    fn cents(&self, currency: Currency, fraction: &str) -> Option<String>;

    /// Whether digits glued to letters (`3D`, `USB3`) are split apart first.
    fn splits_alphanumerics(&self) -> bool {
        false
    }
}

/// Shared rules instance for a language.
pub fn rules_for(lang: Lang) -> &'static dyn LanguageRules {
    match lang {
        Lang::Es => &SPANISH,
        Lang::En => &ENGLISH,
    }
}

static SPANISH: Spanish = Spanish;
static ENGLISH: English = English;

// ============================================================================
// Spanish
// ============================================================================

const ES_CURRENCY_SIGNS: [CurrencySign; 7] = [
    ("US$", Some(Currency::Usd)),
    ("USD", Some(Currency::Usd)),
    ("$", None),
    ("€", Some(Currency::Eur)),
    ("EUR", Some(Currency::Eur)),
    ("₡", Some(Currency::Crc)),
    ("CRC", Some(Currency::Crc)),
];

/// Spanish reading rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

impl LanguageRules for Spanish {
    fn lang(&self) -> Lang {
        Lang::Es
    }

    fn cardinal(&self, n: u64) -> Option<String> {
        num_to_words_es(n)
    }

    fn decimal_separator_word(&self, separator: char) -> &'static str {
        match separator {
            '.' => "punto",
            _ => "coma",
        }
    }

    fn percent_separator_word(&self) -> &'static str {
        "coma"
    }

    fn percent_word(&self) -> &'static str {
        "por ciento"
    }

    fn currency_signs(&self) -> &'static [CurrencySign] {
        &ES_CURRENCY_SIGNS
    }

    fn currency_name(&self, currency: Currency, amount: u64) -> &'static str {
        let singular = amount == 1;
        match currency {
            Currency::Usd if singular => "dólar",
            Currency::Usd => "dólares",
            Currency::Eur if singular => "euro",
            Currency::Eur => "euros",
            Currency::Crc if singular => "colón",
            Currency::Crc => "colones",
            Currency::Gbp if singular => "libra",
            Currency::Gbp => "libras",
        }
    }

    fn money(&self, amount: u64, name: &str) -> Option<String> {
        let words = apocope_es(&self.cardinal(amount)?);
        // "un millón de colones", but "un millón quinientos mil colones"
        let scale_only = ["millón", "millones", "billón", "billones"]
            .iter()
            .any(|scale| words.ends_with(scale));
        if scale_only {
            Some(format!("{words} de {name}"))
        } else {
            Some(format!("{words} {name}"))
        }
    }

    fn cents(&self, _currency: Currency, fraction: &str) -> Option<String> {
        if fraction.starts_with('0') {
            return Some(format!("con {}", self.spell(fraction)));
        }
        let value = fraction.parse::<u64>().ok()?;
        Some(format!("con {}", self.cardinal(value)?))
    }
}

// ============================================================================
// English
// ============================================================================

const EN_CURRENCY_SIGNS: [CurrencySign; 9] = [
    ("US$", Some(Currency::Usd)),
    ("USD", Some(Currency::Usd)),
    ("$", None),
    ("€", Some(Currency::Eur)),
    ("EUR", Some(Currency::Eur)),
    ("₡", Some(Currency::Crc)),
    ("CRC", Some(Currency::Crc)),
    ("£", Some(Currency::Gbp)),
    ("GBP", Some(Currency::Gbp)),
];

/// English reading rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl LanguageRules for English {
    fn lang(&self) -> Lang {
        Lang::En
    }

    fn cardinal(&self, n: u64) -> Option<String> {
        num_to_words_en(n)
    }

    /// 1984 -> "nineteen eighty-four", 1900 -> "nineteen hundred",
    /// 1905 -> "nineteen oh five", 2007 -> "two thousand seven",
    /// 2023 -> "twenty twenty-three".
    fn year_to_words(&self, year: u64) -> Option<String> {
        match year {
            1000 | 2000 => self.cardinal(year),
            1001..=1999 => {
                let century = self.cardinal(year / 100)?;
                match year % 100 {
                    0 => Some(format!("{century} hundred")),
                    tail @ 1..=9 => Some(format!("{century} oh {}", self.cardinal(tail)?)),
                    tail => Some(format!("{century} {}", self.cardinal(tail)?)),
                }
            }
            2001..=2009 => Some(format!("two thousand {}", self.cardinal(year - 2000)?)),
            2010..=2099 => Some(format!("twenty {}", self.cardinal(year % 100)?)),
            _ => self.cardinal(year),
        }
    }

    fn decimal_separator_word(&self, _separator: char) -> &'static str {
        "point"
    }

    fn percent_separator_word(&self) -> &'static str {
        "point"
    }

    fn percent_word(&self) -> &'static str {
        "percent"
    }

    fn currency_signs(&self) -> &'static [CurrencySign] {
        &EN_CURRENCY_SIGNS
    }

    fn currency_name(&self, currency: Currency, amount: u64) -> &'static str {
        let singular = amount == 1;
        match currency {
            Currency::Usd if singular => "dollar",
            Currency::Usd => "dollars",
            Currency::Eur if singular => "euro",
            Currency::Eur => "euros",
            Currency::Crc if singular => "colón",
            Currency::Crc => "colones",
            Currency::Gbp if singular => "pound",
            Currency::Gbp => "pounds",
        }
    }

    /// A zero fraction is not read: `$5.00` is "five dollars".
    fn cents(&self, currency: Currency, fraction: &str) -> Option<String> {
        let value = fraction.parse::<u64>().ok()?;
        if value == 0 {
            return None;
        }
        let unit = match currency {
            Currency::Gbp if value == 1 => "penny",
            Currency::Gbp => "pence",
            _ if value == 1 => "cent",
            _ => "cents",
        };
        Some(format!("and {} {unit}", self.cardinal(value)?))
    }

    fn splits_alphanumerics(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_for_language() {
        assert_eq!(rules_for(Lang::Es).lang(), Lang::Es);
        assert_eq!(rules_for(Lang::En).lang(), Lang::En);
        assert!(rules_for(Lang::En).splits_alphanumerics());
        assert!(!rules_for(Lang::Es).splits_alphanumerics());
    }

    #[test]
    fn test_english_years() {
        let en = English;
        assert_eq!(en.year_to_words(1984).unwrap(), "nineteen eighty-four");
        assert_eq!(en.year_to_words(1900).unwrap(), "nineteen hundred");
        assert_eq!(en.year_to_words(1905).unwrap(), "nineteen oh five");
        assert_eq!(en.year_to_words(1000).unwrap(), "one thousand");
        assert_eq!(en.year_to_words(1066).unwrap(), "ten sixty-six");
        assert_eq!(en.year_to_words(2000).unwrap(), "two thousand");
        assert_eq!(en.year_to_words(2007).unwrap(), "two thousand seven");
        assert_eq!(en.year_to_words(2010).unwrap(), "twenty ten");
        assert_eq!(en.year_to_words(2023).unwrap(), "twenty twenty-three");
    }

    #[test]
    fn test_spanish_years_read_as_numbers() {
        let es = Spanish;
        assert_eq!(
            es.year_to_words(1984).unwrap(),
            "mil novecientos ochenta y cuatro"
        );
        assert_eq!(es.year_to_words(2023).unwrap(), "dos mil veintitrés");
    }

    #[test]
    fn test_separator_words() {
        assert_eq!(Spanish.decimal_separator_word(','), "coma");
        assert_eq!(Spanish.decimal_separator_word('.'), "punto");
        assert_eq!(English.decimal_separator_word(','), "point");
        assert_eq!(Spanish.percent_separator_word(), "coma");
    }

    #[test]
    fn test_currency_names_agree_in_number() {
        assert_eq!(English.currency_name(Currency::Usd, 1), "dollar");
        assert_eq!(English.currency_name(Currency::Usd, 2), "dollars");
        assert_eq!(Spanish.currency_name(Currency::Crc, 1), "colón");
        assert_eq!(Spanish.currency_name(Currency::Crc, 0), "colones");
    }

    #[test]
    fn test_spanish_money() {
        assert_eq!(Spanish.money(1, "dólar").unwrap(), "un dólar");
        assert_eq!(Spanish.money(21, "dólares").unwrap(), "veintiún dólares");
        assert_eq!(
            Spanish.money(1_000_000, "colones").unwrap(),
            "un millón de colones"
        );
        assert_eq!(
            Spanish.money(1_500_000, "colones").unwrap(),
            "un millón quinientos mil colones"
        );
    }

    #[test]
    fn test_cents_diverge_per_language() {
        assert_eq!(
            English.cents(Currency::Usd, "05").unwrap(),
            "and five cents"
        );
        assert_eq!(English.cents(Currency::Usd, "01").unwrap(), "and one cent");
        assert_eq!(
            English.cents(Currency::Gbp, "50").unwrap(),
            "and fifty pence"
        );
        assert!(English.cents(Currency::Usd, "00").is_none());

        assert_eq!(Spanish.cents(Currency::Crc, "05").unwrap(), "con cero cinco");
        assert_eq!(
            Spanish.cents(Currency::Usd, "99").unwrap(),
            "con noventa y nueve"
        );
    }

    #[test]
    fn test_english_recognizes_pound_signs() {
        let signs: Vec<&str> = English.currency_signs().iter().map(|(s, _)| *s).collect();
        assert!(signs.contains(&"£"));
        assert!(signs.contains(&"GBP"));

        let signs: Vec<&str> = Spanish.currency_signs().iter().map(|(s, _)| *s).collect();
        assert!(!signs.contains(&"£"));
    }
}
