//! Formatter configuration.
//!
//! Every field has a default, so an empty or partial `config.toml` is valid:
//!
//! ```toml
//! numbered_headers = true
//! numbered_header_level = 2
//! keep_empty_headers = false
//!
//! [clean]
//! normalize_line_endings = true
//! strip_trailing_whitespace = true
//! collapse_blank_lines = true
//! trim = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::ConfigManager;

/// Settings for section parsing and text cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Promote `1. ALL CAPS PHRASE` lines to header sections.
    pub numbered_headers: bool,
    /// Header level assigned to numbered pseudo-headers (1 to 6).
    pub numbered_header_level: u8,
    /// Keep header sections whose content is empty, such as a bare
    /// `2. RISK ASSESSMENT` line.
    pub keep_empty_headers: bool,
    /// Options for the text-cleaning pass.
    pub clean: CleanOptions,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            numbered_headers: true,
            numbered_header_level: 2,
            keep_empty_headers: false,
            clean: CleanOptions::default(),
        }
    }
}

impl ConfigManager for FormatterConfig {
    fn project_name() -> &'static str {
        "blueprint"
    }

    fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.numbered_header_level) {
            return Err(Error::config(format!(
                "numbered_header_level must be between 1 and 6, got {}",
                self.numbered_header_level
            )));
        }
        Ok(())
    }
}

/// Which normalizations `clean_text` applies. All are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Convert `\r\n` and lone `\r` to `\n`.
    pub normalize_line_endings: bool,
    /// Remove trailing whitespace from every line.
    pub strip_trailing_whitespace: bool,
    /// Collapse runs of three or more newlines to two.
    pub collapse_blank_lines: bool,
    /// Trim leading and trailing whitespace from the whole text.
    pub trim: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
            strip_trailing_whitespace: true,
            collapse_blank_lines: true,
            trim: true,
        }
    }
}

impl CleanOptions {
    /// Options with every normalization disabled.
    pub fn none() -> Self {
        Self {
            normalize_line_endings: false,
            strip_trailing_whitespace: false,
            collapse_blank_lines: false,
            trim: false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
