//! Plain-text extraction using `pulldown-cmark`.
//!
//! Strips inline formatting (bold, italic, links, inline code markers) and
//! block markers (list bullets, quote markers, header hashes) so section
//! content can be shown in previews or indexed for search.
//!
//! # Example
//!
//! ```rust
//! use blueprint_text::plain::{plain_text, truncate_text};
//!
//! let text = plain_text("Use the **`Result`** type, see [docs](https://doc.rust-lang.org).");
//! assert_eq!(text, "Use the Result type, see docs.");
//!
//! assert_eq!(truncate_text("a large and growing market", 12), "a large and...");
//! ```

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Extract plain text from markdown, stripping all formatting.
///
/// Fenced and indented code blocks are dropped; inline code keeps its text.
/// Whitespace is collapsed to single spaces.
pub fn plain_text(content: &str) -> String {
    let mut text = String::new();
    let mut in_code_block = false;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(t) | Event::Code(t) if !in_code_block => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::BlockQuote(_)
                | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    normalize_whitespace(&text)
}

/// Truncate text to at most `max_chars` characters, cutting at a word
/// boundary and appending `"..."` when anything was removed.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    let at = head.rfind(char::is_whitespace).unwrap_or(cut);
    format!("{}...", head[..at].trim_end())
}

/// Collapse runs of whitespace to single spaces and trim.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================
