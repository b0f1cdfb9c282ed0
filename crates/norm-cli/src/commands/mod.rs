//! CLI command implementations.

pub mod digits;
pub mod info;
pub mod normalize;
pub mod words;
