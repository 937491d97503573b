//! Text command handlers.
//!
//! Each handler takes the input text and returns what the command prints, so
//! the dispatch in `main` stays a thin match over [`Command`](crate::cli::Command).

use blueprint_core::Result;
use blueprint_text::TextFormatter;

/// `parse`: sections as JSON.
pub fn cmd_parse(formatter: &TextFormatter, text: &str, clean: bool, pretty: bool) -> Result<String> {
    let sections = if clean {
        formatter.parse_cleaned(text)
    } else {
        formatter.parse(text)
    };
    tracing::info!(sections = sections.len(), "Parsed input");

    let json = if pretty {
        serde_json::to_string_pretty(&sections)?
    } else {
        serde_json::to_string(&sections)?
    };
    Ok(json)
}

/// `clean`: normalized text.
pub fn cmd_clean(formatter: &TextFormatter, text: &str) -> String {
    formatter.clean(text)
}

/// `format`: canonical markdown.
pub fn cmd_format(formatter: &TextFormatter, text: &str, clean: bool) -> String {
    let sections = if clean {
        formatter.parse_cleaned(text)
    } else {
        formatter.parse(text)
    };
    formatter.format_for_display(&sections)
}

/// `outline`: one header per line, indented two spaces per level below 1.
pub fn cmd_outline(formatter: &TextFormatter, text: &str) -> String {
    let sections = formatter.parse(text);
    formatter
        .outline(&sections)
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            format!("{indent}{}", entry.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `excerpt`: preview text, empty when the input has no prose.
pub fn cmd_excerpt(formatter: &TextFormatter, text: &str, max_chars: usize) -> String {
    let sections = formatter.parse(text);
    formatter.excerpt(&sections, max_chars).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
