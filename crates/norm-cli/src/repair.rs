//! Cleanup of text extracted from documents before normalization.

use anyhow::Result;
use regex::Regex;

/// Joins words hyphenated across line breaks and flattens line breaks.
#[derive(Debug)]
pub struct TextRepair {
    hyphen_break: Regex,
    whitespace: Regex,
}

impl TextRepair {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hyphen_break: Regex::new(r"-\r?\n")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// `"nor-\nmal\ntext"` becomes `"normal text"`.
    pub fn repair(&self, text: &str) -> String {
        let joined = self.hyphen_break.replace_all(text, "");
        self.whitespace
            .replace_all(&joined, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_break_joined() {
        let repair = TextRepair::new().unwrap();
        assert_eq!(repair.repair("nor-\nmal"), "normal");
        assert_eq!(repair.repair("nor-\r\nmal"), "normal");
    }

    #[test]
    fn test_line_breaks_flattened() {
        let repair = TextRepair::new().unwrap();
        assert_eq!(
            repair.repair("First line\nsecond line.\nThird.\n"),
            "First line second line. Third."
        );
    }

    #[test]
    fn test_inline_hyphen_kept() {
        let repair = TextRepair::new().unwrap();
        assert_eq!(repair.repair("  well-known   fact "), "well-known fact");
    }
}
