//! Enum-Scribe: error-code enumerations from documentation pages
//!
//! This crate scrapes the headings and paragraphs of a documentation page
//! (by default the SQLite result code reference) and generates a C++
//! `enum class` listing with the descriptions embedded as doc comments.

pub mod config;
pub mod document;
pub mod generator;
pub mod output;

use thiserror::Error;

/// Main error type for Enum-Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Heading matches the code pattern but not the entry pattern: {text:?}")]
    HeadingMismatch { text: String },

    #[error("Invalid code number in heading {text:?}: {source}")]
    InvalidCode {
        text: String,
        source: std::num::ParseIntError,
    },

    #[error("Invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] output::ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Result type alias for Enum-Scribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use document::{parse_document, DocNode};
pub use generator::{generate, EnumEntry, GeneratedListing};
