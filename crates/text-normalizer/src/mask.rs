//! Masking of substrings that must never be rewritten.
//!
//! URLs, email addresses and clock times are swapped for opaque
//! `__TAG_n__` tokens before classification and swapped back afterwards.

use regex::Regex;

use norm_core::NormResult;

use crate::rules::compile;

const URL_PATTERN: &str = r"(?i)https?://\S+";
const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+\.\w+";
// Only a following digit disqualifies a time, so `9:45am` and `14:30h` are kept.
const TIME_PATTERN: &str =
    r"\b(?P<span>(?:[01]?[0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?)(?:[^0-9]|$)";
const TOKEN_PATTERN: &str = r"__(?:URL|MAIL|TIME)_[0-9]+__";

/// One masked substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Kind of protected text (`URL`, `MAIL`, `TIME`).
    pub tag: &'static str,
    /// Text the token stands for.
    pub original: String,
    /// Position in insertion order, unique within a call.
    pub ordinal: usize,
}

impl Placeholder {
    /// Token written into the masked text.
    pub fn token(&self) -> String {
        format!("__{}_{}__", self.tag, self.ordinal)
    }
}

/// Ordered placeholder list for one normalization call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<Placeholder>,
}

impl Placeholders {
    /// Record a masked substring and return its token.
    fn insert(&mut self, tag: &'static str, original: &str) -> String {
        let placeholder = Placeholder {
            tag,
            original: original.to_string(),
            ordinal: self.entries.len(),
        };
        let token = placeholder.token();
        self.entries.push(placeholder);
        token
    }

    /// Number of masked substrings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was masked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }
}

/// Protected-span recognizer.
#[derive(Debug, Clone)]
pub struct Masker {
    url: Regex,
    email: Regex,
    time: Regex,
    token: Regex,
}

impl Masker {
    /// Compile the protected-span patterns.
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            url: compile(URL_PATTERN)?,
            email: compile(EMAIL_PATTERN)?,
            time: compile(TIME_PATTERN)?,
            token: compile(TOKEN_PATTERN)?,
        })
    }

    /// Pattern matching any placeholder token.
    pub fn token_pattern(&self) -> &Regex {
        &self.token
    }

    /// Replace URLs, then emails, then clock times with placeholder tokens.
    pub fn mask(&self, text: &str) -> (String, Placeholders) {
        let mut placeholders = Placeholders::default();
        let masked = mask_pass(&self.url, "URL", text, &mut placeholders);
        let masked = mask_pass(&self.email, "MAIL", &masked, &mut placeholders);
        let masked = mask_pass(&self.time, "TIME", &masked, &mut placeholders);
        (masked, placeholders)
    }

    /// Restore placeholders, last inserted first.
    pub fn unmask(&self, text: &str, placeholders: &Placeholders) -> String {
        placeholders
            .entries
            .iter()
            .rev()
            .fold(text.to_string(), |acc, placeholder| {
                acc.replace(&placeholder.token(), &placeholder.original)
            })
    }
}

fn mask_pass(
    pattern: &Regex,
    tag: &'static str,
    text: &str,
    placeholders: &mut Placeholders,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in pattern.captures_iter(text) {
        // A `span` group narrows the masked text to less than the whole match.
        let Some(m) = caps.name("span").or_else(|| caps.get(0)) else {
            continue;
        };
        out.push_str(&text[last..m.start()]);
        out.push_str(&placeholders.insert(tag, m.as_str()));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
