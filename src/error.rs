//! Error types for the fallible edges of reply extraction
//!
//! Reply parsing itself is total over any input string. Errors only arise
//! when decoding a raw RFC 5322 message or loading cutoff options.

use thiserror::Error;

/// Errors that can occur while decoding input or loading options
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the raw message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode a body part
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Options document is not valid JSON for `CutoffOptions`
    #[error("Invalid options document: {0}")]
    Json(#[from] serde_json::Error),

    /// Options document parsed but holds an unusable value
    #[error("Invalid option {option}: {details}")]
    Config { option: String, details: String },
}

/// Result type for fallible reply extraction operations
pub type Result<T> = std::result::Result<T, ParseError>;
