//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in a
//! config file:
//!
//! ```toml
//! # cz.toml
//! [conversion]
//! strings_only = false
//! delimiter = ";"
//! format = "json"
//! flush_each_record = true
//! buffer_capacity = 16384
//! ```
//!
//! Command-line flags take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use cz::writer::OutputFormat;

/// Root configuration structure for cz.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionSection,
}

/// Settings for the convert action.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSection {
    /// Keep every field as a string.
    pub strings_only: Option<bool>,

    /// Field delimiter.
    pub delimiter: Option<char>,

    /// Output format.
    pub format: Option<OutputFormat>,

    /// Flush output after every record.
    pub flush_each_record: Option<bool>,

    /// Output buffer size in bytes.
    pub buffer_capacity: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
