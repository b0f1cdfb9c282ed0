//! # norm-core
//!
//! Core types, traits, and error definitions for the numspeak normalizer.
//!
//! This crate provides the foundational abstractions used across all other
//! crates in the workspace, including:
//!
//! - Common data types (`Lang`, `Currency`, `NumericToken`, `NormText`)
//! - The `TextNormalizer` trait
//! - Unified error handling via `NormError`
//! - `NormalizerConfig`

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::NormalizerConfig;
pub use error::{NormError, NormResult};
pub use traits::TextNormalizer;
pub use types::{Category, Currency, Lang, NormText, NumericToken};
