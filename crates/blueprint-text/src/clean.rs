//! Whitespace normalization for raw AI output.
//!
//! Applied before parsing (or on its own) to tidy generated text. Each step
//! can be switched off through [`CleanOptions`]; with any combination of
//! options the operation is idempotent.

use std::sync::LazyLock;

use blueprint_core::CleanOptions;
use regex::Regex;

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank run regex is a valid constant"));

/// Normalize whitespace in `text`.
///
/// In order: line endings become `\n`, trailing whitespace is removed from
/// each line, runs of three or more newlines become two, and the whole text
/// is trimmed.
///
/// # Example
///
/// ```rust
/// use blueprint_text::clean_text;
/// use blueprint_core::CleanOptions;
///
/// let cleaned = clean_text("  Intro   \r\n\r\n\r\n\r\nBody  \n", &CleanOptions::default());
/// assert_eq!(cleaned, "Intro\n\nBody");
/// ```
pub fn clean_text(text: &str, options: &CleanOptions) -> String {
    let mut out = if options.normalize_line_endings {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    };

    if options.strip_trailing_whitespace {
        out = out
            .split('\n')
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n");
    }

    if options.collapse_blank_lines {
        out = BLANK_RUN.replace_all(&out, "\n\n").into_owned();
    }

    if options.trim {
        out = out.trim().to_string();
    }

    out
}

// ============================================================================
// Tests
// ============================================================================
