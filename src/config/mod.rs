//! Configuration module for Enum-Scribe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section and key is optional; an absent file means [`Config::default`],
//! which reproduces the SQLite result code listing.
//!
//! # Example
//!
//! ```no_run
//! use enum_scribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scribe.toml")).unwrap();
//! println!("Headings are <{}> elements", config.selector.heading_tag);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClipboardConfig, Config, FormatConfig, SelectorConfig, TemplateConfig};

// Re-export parser functions
pub use parser::{
    compute_config_hash, hash_config_content, load_config, load_config_with_hash, parse_config,
};
pub use validation::validate;
