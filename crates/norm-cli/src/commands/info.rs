//! Info command implementation.

use anyhow::Result;
use norm_core::{Currency, Lang, NormalizerConfig};

/// Run the info command.
pub fn run(config: &NormalizerConfig) -> Result<()> {
    println!("numspeak numeric text normalizer");
    println!("================================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();

    let langs: Vec<&str> = Lang::ALL.iter().map(|lang| lang.code()).collect();
    println!("Languages:  {}", langs.join(", "));
    let currencies: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
    println!("Currencies: {}", currencies.join(", "));
    println!();

    println!("Active configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
