//! Digits command implementation.

use anyhow::{Result, bail};
use norm_core::Lang;
use text_normalizer::spell_digits;

/// Run the digits command.
pub fn run(digits: &str, lang: Lang) -> Result<()> {
    if digits.is_empty() {
        bail!("nothing to spell");
    }
    println!("{}", spell_digits(digits, lang));
    Ok(())
}
