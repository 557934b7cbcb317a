//! Error types for the text-facing edges of the crate.
//!
//! Shadow generation and serialization are total and never fail. Errors
//! only arise when parsing names or configuration supplied as text.

use thiserror::Error;

/// Errors raised while parsing caller-supplied text.
#[derive(Debug, Error)]
pub enum Error {
    /// Preset name not present in the built-in table.
    #[error("Unknown shadow preset: {0}")]
    UnknownPreset(String),

    /// Stylesheet format name not recognized.
    #[error("Unknown CSS format: {0} (expected \"class\" or \"css-variable\")")]
    UnknownFormat(String),

    /// Configuration JSON could not be parsed.
    #[error("Invalid shadow configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
