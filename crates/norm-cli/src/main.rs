//! numspeak command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use norm_core::{Currency, Lang, NormalizerConfig};
use std::path::PathBuf;
use tracing::info;

mod commands;
mod logging;
mod repair;

/// Numeric text normalizer for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "numspeak")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, default_value = "text", global = true)]
    log_format: LogFormatArg,

    /// Normalizer configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language (es or en), overrides the configuration file
    #[arg(long, global = true)]
    lang: Option<Lang>,

    /// Currency spoken for a bare `$` (usd, eur, crc, gbp)
    #[arg(long, global = true)]
    currency: Option<Currency>,

    /// Digit runs at least this long are spelled digit by digit
    #[arg(long, global = true)]
    digit_threshold: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite numbers in text as spoken words
    Normalize {
        /// Input text, @file.txt for file input, or - for stdin
        input: String,

        /// Join hyphenated line breaks and flatten newlines first
        #[arg(long)]
        repair: bool,

        /// Print the normalized text and its numeric tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a number to words
    Words {
        /// Non-negative integer
        number: u64,
    },

    /// Spell a digit string digit by digit
    Digits {
        /// Digits to spell
        digits: String,
    },

    /// Show version and configuration info
    Info,
}

impl Cli {
    /// Load the configuration file, then apply flag overrides.
    fn normalizer_config(&self) -> Result<NormalizerConfig> {
        let mut config = match &self.config {
            Some(path) => NormalizerConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => NormalizerConfig::default(),
        };

        if let Some(lang) = self.lang {
            config = config.with_language(lang);
        }
        if let Some(currency) = self.currency {
            config = config.with_default_currency(currency);
        }
        if let Some(threshold) = self.digit_threshold {
            config = config.with_digit_threshold(threshold);
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let format = match cli.log_format {
        LogFormatArg::Json => logging::LogFormat::Json,
        LogFormatArg::Text => logging::LogFormat::Text,
    };
    logging::init_logging(&cli.log_level, format);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting numspeak");

    let config = cli.normalizer_config()?;
    info!(lang = %config.language, currency = %config.default_currency, "configuration loaded");

    match cli.command {
        Commands::Normalize {
            input,
            repair,
            json,
        } => {
            let options = commands::normalize::NormalizeOptions {
                input,
                repair,
                json,
            };
            commands::normalize::run(options, config).context("normalization failed")?;
        }
        Commands::Words { number } => {
            commands::words::run(number, config.language);
        }
        Commands::Digits { digits } => {
            commands::digits::run(&digits, config.language).context("spelling failed")?;
        }
        Commands::Info => {
            commands::info::run(&config)?;
        }
    }

    Ok(())
}
