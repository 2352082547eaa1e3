//! Unified error type for deckhand.
//!
//! Every fallible operation in the crate reports through [`Error`]. Content
//! problems (missing illustration, overflowing text, empty lists) are not
//! errors; only structural problems and I/O surface here.
use thiserror::Error;

/// Main error type for deckhand operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout constants that violate a geometric invariant
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Illustration bytes that cannot be used as an image
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Requested slide count outside the accepted range
    #[error("Invalid slide count {input:?}: {reason}")]
    InvalidSlideCount { input: String, reason: String },

    /// Malformed deck outline
    #[error("Outline error: {0}")]
    Outline(#[from] serde_json::Error),

    /// Malformed or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Illustration source failure
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deckhand operations.
pub type Result<T> = std::result::Result<T, Error>;
