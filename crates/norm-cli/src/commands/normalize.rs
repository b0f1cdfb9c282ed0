//! Normalize command implementation.

use std::io::Read;

use anyhow::{Context, Result, bail};
use norm_core::{NormalizerConfig, TextNormalizer};
use text_normalizer::Normalizer;
use tracing::debug;

use crate::repair::TextRepair;

/// Options for the normalize command.
#[derive(Debug)]
pub struct NormalizeOptions {
    /// Literal text, `@path` for a file, or `-` for stdin.
    pub input: String,
    /// Run text repair before normalizing.
    pub repair: bool,
    /// Print the result with its tokens as JSON.
    pub json: bool,
}

/// Run the normalize command.
pub fn run(options: NormalizeOptions, config: NormalizerConfig) -> Result<()> {
    let mut text = read_input(&options.input)?;
    if options.repair {
        text = TextRepair::new()?.repair(&text);
        debug!(len = text.len(), "repaired input");
    }

    let normalizer = Normalizer::new(config).context("invalid normalizer configuration")?;
    let result = normalizer.normalize(&text);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.text);
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    match input.strip_prefix('@') {
        Some("") => bail!("missing file path after '@'"),
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => Ok(input.to_string()),
    }
}
