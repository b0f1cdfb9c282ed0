//! Numeric classification rules.
//!
//! Each rule recognizes one category of numeric expression and renders its
//! spoken replacement. The orchestrator applies them in the order returned
//! by [`default_rules`]; that order is part of the behavior.

use std::borrow::Cow;

use regex::{Captures, Regex};

use norm_core::{Category, Currency, NormError, NormResult, NormalizerConfig};

use crate::lang::{CurrencySign, LanguageRules};

/// Compile a pattern, mapping failures into [`NormError::Pattern`].
pub(crate) fn compile(pattern: &str) -> NormResult<Regex> {
    Regex::new(pattern).map_err(|e| NormError::pattern(e.to_string()))
}

/// Everything a rule needs to render a match.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Reading rules of the target language.
    pub lang: &'a dyn LanguageRules,
    /// Active configuration.
    pub config: &'a NormalizerConfig,
}

/// A numeric classification rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Category this rule recognizes.
    fn category(&self) -> Category;

    /// Get the rule name.
    fn name(&self) -> &str {
        self.category().as_str()
    }

    /// Pattern locating candidate matches.
    fn pattern(&self) -> &Regex;

    /// Spoken replacement for a match, or `None` to leave it unchanged.
    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String>;
}

/// Create the default rule set, in precedence order.
pub fn default_rules(lang: &dyn LanguageRules) -> NormResult<Vec<Box<dyn Rule>>> {
    Ok(vec![
        Box::new(PercentageRule::new()?),
        Box::new(CurrencyRule::new(lang)?),
        Box::new(YearRule::new()?),
        Box::new(DecimalRule::new()?),
        Box::new(LongRunRule::new()?),
        Box::new(IntegerRule::new()?),
    ])
}

/// `45%`, `12,5 %`.
#[derive(Debug)]
pub struct PercentageRule {
    pattern: Regex,
}

impl PercentageRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"(?P<int>[0-9]+)(?:[.,](?P<frac>[0-9]+))?\s*%")?,
        })
    }
}

impl Rule for PercentageRule {
    fn category(&self) -> Category {
        Category::Percentage
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String> {
        let whole = caps.name("int")?.as_str().parse::<u64>().ok()?;
        let words = ctx.lang.cardinal(whole)?;
        let percent = ctx.lang.percent_word();

        match caps.name("frac") {
            Some(frac) => Some(format!(
                "{words} {} {} {percent}",
                ctx.lang.percent_separator_word(),
                ctx.lang.spell(frac.as_str())
            )),
            None => Some(format!("{words} {percent}")),
        }
    }
}

/// A sign or code followed by an amount: `$19.99`, `₡1500`, `EUR 3,50`.
#[derive(Debug)]
pub struct CurrencyRule {
    pattern: Regex,
    signs: &'static [CurrencySign],
}

impl CurrencyRule {
    /// Build the rule for the signs the language recognizes.
    pub fn new(lang: &dyn LanguageRules) -> NormResult<Self> {
        let signs = lang.currency_signs();

        // Longest first so "US$" wins over "$".
        let mut alternatives: Vec<&str> = signs.iter().map(|(sign, _)| *sign).collect();
        alternatives.sort_by_key(|sign| std::cmp::Reverse(sign.len()));
        let alternatives = alternatives
            .iter()
            .map(|sign| regex::escape(sign))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = format!(r"(?P<sign>{alternatives})\s*(?P<amount>[0-9]+(?:[.,][0-9]+)*)");
        Ok(Self {
            pattern: compile(&pattern)?,
            signs,
        })
    }

    /// Currency a sign denotes, `None` if the sign is ambiguous.
    fn currency_for(&self, sign: &str) -> Option<Currency> {
        self.signs
            .iter()
            .find(|(candidate, _)| *candidate == sign)
            .and_then(|(_, currency)| *currency)
    }
}

impl Rule for CurrencyRule {
    fn category(&self) -> Category {
        Category::Currency
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String> {
        let sign = caps.name("sign")?.as_str();
        let amount = parse_amount(caps.name("amount")?.as_str())?;

        let currency = self
            .currency_for(sign)
            .unwrap_or(ctx.config.default_currency);
        let name = match ctx.config.currency_names.get(&currency) {
            Some(name) => name.as_str(),
            None => ctx.lang.currency_name(currency, amount.whole),
        };

        let mut spoken = ctx.lang.money(amount.whole, name)?;
        if let Some(cents) = amount
            .fraction
            .as_deref()
            .and_then(|fraction| ctx.lang.cents(currency, fraction))
        {
            spoken.push(' ');
            spoken.push_str(&cents);
        }
        Some(spoken)
    }
}

/// A currency amount split into whole units and a two-digit fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyAmount {
    /// Whole currency units.
    pub whole: u64,
    /// Fractional part as exactly two digits, if present.
    pub fraction: Option<String>,
}

/// Parse an amount written with mixed thousands and decimal separators.
///
/// When both `.` and `,` occur, the last one is the decimal separator. When
/// only one kind occurs, it is a thousands separator unless the final group
/// has one or two digits. The fraction keeps its digits as written (`1.5`
/// reads "con cinco"); longer fractions are dropped.
pub fn parse_amount(token: &str) -> Option<MoneyAmount> {
    let mixed = token.contains('.') && token.contains(',');

    let (whole, fraction) = match token.rfind(['.', ',']) {
        Some(idx) => {
            let tail = &token[idx + 1..];
            if mixed || (1..=2).contains(&tail.len()) {
                (&token[..idx], Some(tail))
            } else {
                (token, None)
            }
        }
        None => (token, None),
    };

    let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
    let whole = digits.parse::<u64>().ok()?;

    let fraction = fraction
        .filter(|f| (1..=2).contains(&f.len()))
        .map(str::to_string);

    Some(MoneyAmount { whole, fraction })
}

/// Bare calendar years, 1000-2099.
#[derive(Debug)]
pub struct YearRule {
    pattern: Regex,
}

impl YearRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b(?:1[0-9]{3}|20[0-9]{2})\b")?,
        })
    }
}

impl Rule for YearRule {
    fn category(&self) -> Category {
        Category::Year
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String> {
        let year = caps.get(0)?.as_str().parse::<u64>().ok()?;
        ctx.lang.year_to_words(year)
    }
}

/// `3,5`, `0.25`, `2.007`.
#[derive(Debug)]
pub struct DecimalRule {
    pattern: Regex,
}

impl DecimalRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b(?P<int>[0-9]+)(?P<sep>[.,])(?P<frac>[0-9]+)\b")?,
        })
    }
}

impl Rule for DecimalRule {
    fn category(&self) -> Category {
        Category::Decimal
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String> {
        let whole = caps.name("int")?.as_str().parse::<u64>().ok()?;
        let separator = caps.name("sep")?.as_str().chars().next()?;
        let frac = caps.name("frac")?.as_str();

        let spelled = frac.starts_with('0') || frac.len() > 2;
        let frac_words = match frac.parse::<u64>() {
            Ok(value) if !spelled => ctx.lang.cardinal(value)?,
            _ => ctx.lang.spell(frac),
        };

        Some(format!(
            "{} {} {frac_words}",
            ctx.lang.cardinal(whole)?,
            ctx.lang.decimal_separator_word(separator)
        ))
    }
}

/// Minimum run length that is always spelled digit by digit.
pub const LONG_RUN_DIGITS: usize = 7;

/// Bare runs of seven or more digits: phone numbers, account numbers.
#[derive(Debug)]
pub struct LongRunRule {
    pattern: Regex,
}

impl LongRunRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(&format!(r"\b[0-9]{{{LONG_RUN_DIGITS},}}\b"))?,
        })
    }
}

impl Rule for LongRunRule {
    fn category(&self) -> Category {
        Category::LongRun
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String> {
        Some(ctx.lang.spell(caps.get(0)?.as_str()))
    }
}

/// Any remaining bare digit run.
#[derive(Debug)]
pub struct IntegerRule {
    pattern: Regex,
}

impl IntegerRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b[0-9]+\b")?,
        })
    }
}

impl Rule for IntegerRule {
    fn category(&self) -> Category {
        Category::Integer
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn render(&self, caps: &Captures<'_>, ctx: &RuleContext<'_>) -> Option<String> {
        let digits = caps.get(0)?.as_str();
        if digits.len() >= ctx.config.digit_threshold {
            return Some(ctx.lang.spell(digits));
        }
        ctx.lang.cardinal(digits.parse::<u64>().ok()?)
    }
}

/// Separates digits glued to ASCII letters: `3D` -> `3 D`, `USB3` -> `USB 3`.
///
/// A plus sign right after a number is read out first: `18+` -> `18 plus`.
#[derive(Debug)]
pub struct AlphanumericSplit {
    plus: Regex,
    digit_letter: Regex,
    letter_digit: Regex,
}

impl AlphanumericSplit {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            plus: compile(r"([0-9])\+")?,
            digit_letter: compile(r"([0-9])([A-Za-z])")?,
            letter_digit: compile(r"([A-Za-z])([0-9])")?,
        })
    }

    /// Insert a space at every digit/letter boundary.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let passes = [
            (&self.plus, "$1 plus"),
            (&self.digit_letter, "$1 $2"),
            (&self.letter_digit, "$1 $2"),
        ];

        let mut out = Cow::Borrowed(text);
        for (pattern, replacement) in passes {
            let replaced = match pattern.replace_all(&out, replacement) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            out = Cow::Owned(replaced);
        }
        out
    }
}
