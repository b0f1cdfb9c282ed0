//! Trait definitions for normalizer front ends.

use crate::types::NormText;

/// Text normalization trait.
///
/// Implementations rewrite numeric expressions in free text into their
/// spoken form. Normalization is total: malformed numeric-looking input is
/// left as written rather than reported as an error.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    ///
    /// # Arguments
    /// * `input` - Raw input text
    ///
    /// # Returns
    /// Normalized text with the numeric tokens that were rewritten.
    fn normalize(&self, input: &str) -> NormText;
}
