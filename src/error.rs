//! Error types for URL tokenization.

use thiserror::Error;

/// Errors raised while configuring or running URL tokenization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlTokenError {
    /// A configured part name does not match any URL part.
    #[error("Unrecognized URL part: {0}")]
    UnrecognizedPart(String),

    /// Strict URL parsing failed and malformed input is not allowed.
    #[error("Malformed URL: {input} ({reason})")]
    MalformedInput { input: String, reason: String },

    /// Percent-decoding of an extracted value failed and malformed input is
    /// not allowed.
    #[error("Failed to URL-decode '{value}': {reason}")]
    Decode { value: String, reason: String },
}

/// Result type for URL tokenization operations.
pub type Result<T> = std::result::Result<T, UrlTokenError>;
