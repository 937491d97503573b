//! The section data model.
//!
//! A [`Section`] is a contiguous, typed run of input lines. Its JSON shape is
//! what rendering code consumes:
//!
//! ```json
//! { "id": "section-0", "type": "header", "level": 2,
//!   "title": "MARKET OPPORTUNITY", "content": "large and growing",
//!   "metadata": { "numbered": true, "number": 1 } }
//! ```
//!
//! `level`, `title`, and `metadata` are omitted when absent.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::plain::plain_text;

static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+•]\s+(.*)$").expect("bullet marker regex is a valid constant")
});

static ORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s+(.*)$").expect("ordered marker regex is a valid constant")
});

/// The type of a section, which selects its rendering treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Markdown `#` header or numbered all-caps pseudo-header.
    Header,
    /// Bullet list (`-`, `*`, `+`, `•`).
    List,
    /// Ordered list (`1. item`).
    NumberedList,
    /// Blockquote (`>`).
    Quote,
    /// Fenced code block.
    Code,
    /// Anything else.
    Text,
}

impl SectionKind {
    /// The name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::List => "list",
            SectionKind::NumberedList => "numbered-list",
            SectionKind::Quote => "quote",
            SectionKind::Code => "code",
            SectionKind::Text => "text",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra data attached to code sections and numbered pseudo-headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionMetadata {
    /// Language tag from the opening fence (`"text"` when absent).
    Code {
        /// Language tag, e.g. `"javascript"`.
        language: String,
    },
    /// A header recognized from `<n>. ALL CAPS PHRASE` syntax.
    Numbered {
        /// Always `true`; kept so the serialized map matches what renderers expect.
        numbered: bool,
        /// The leading number.
        number: u64,
    },
}

/// A typed, contiguous block of the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Sequential id, unique within one parse (`section-0`, `section-1`, ...).
    pub id: String,
    /// Section type.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Header depth (1 to 6); only set on headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Header text without markers; only set on headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Accumulated lines, newline-joined.
    pub content: String,
    /// Code language or pseudo-header number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SectionMetadata>,
}

impl Section {
    /// Whether this is a header section.
    pub fn is_header(&self) -> bool {
        self.kind == SectionKind::Header
    }

    /// Language tag of a code section.
    pub fn language(&self) -> Option<&str> {
        match &self.metadata {
            Some(SectionMetadata::Code { language }) => Some(language),
            _ => None,
        }
    }

    /// Number of a numbered pseudo-header.
    pub fn number(&self) -> Option<u64> {
        match &self.metadata {
            Some(SectionMetadata::Numbered { number, .. }) => Some(*number),
            _ => None,
        }
    }

    /// Header body: content that follows the title.
    ///
    /// For markdown headers the content starts with the title line, which is
    /// skipped. Pseudo-headers store only the trailing text, so the whole
    /// content is the body. Empty for non-header sections.
    pub fn body(&self) -> &str {
        if !self.is_header() {
            return "";
        }
        if self.number().is_some() {
            return &self.content;
        }
        match self.content.split_once('\n') {
            Some((_, rest)) => rest,
            None => "",
        }
    }

    /// Items of a list or numbered-list section, markers removed.
    ///
    /// Blank lines are skipped. Returns an empty vec for other section types.
    pub fn list_items(&self) -> Vec<String> {
        let marker = match self.kind {
            SectionKind::List => &*BULLET_MARKER,
            SectionKind::NumberedList => &*ORDERED_MARKER,
            _ => return Vec::new(),
        };

        self.content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| match marker.captures(line) {
                Some(caps) => caps[1].trim().to_string(),
                None => line.trim().to_string(),
            })
            .collect()
    }

    /// Text of a quote section with the `>` markers removed.
    pub fn quote_text(&self) -> Option<String> {
        if self.kind != SectionKind::Quote {
            return None;
        }

        let text = self
            .content
            .lines()
            .map(|line| {
                let line = line.trim_start();
                let line = line.strip_prefix('>').unwrap_or(line);
                line.strip_prefix(' ').unwrap_or(line)
            })
            .collect::<Vec<_>>()
            .join("\n");
        Some(text)
    }

    /// Content with markdown formatting removed, for previews and search.
    ///
    /// Code sections are returned verbatim.
    pub fn plain_text(&self) -> String {
        match self.kind {
            SectionKind::Code => self.content.clone(),
            SectionKind::Header => {
                let title = self.title.as_deref().unwrap_or_default();
                let body = plain_text(self.body());
                if body.is_empty() {
                    title.to_string()
                } else {
                    format!("{title}\n{body}")
                }
            }
            _ => plain_text(&self.content),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn section(kind: SectionKind, content: &str) -> Section {
        Section {
            id: "section-0".to_string(),
            kind,
            level: None,
            title: None,
            content: content.to_string(),
            metadata: None,
        }
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SectionKind::NumberedList).unwrap();
        assert_eq!(json, "\"numbered-list\"");
        assert_eq!(SectionKind::NumberedList.to_string(), "numbered-list");
    }

    #[test]
    fn test_text_section_omits_optional_fields() {
        let json = serde_json::to_value(section(SectionKind::Text, "hello")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "section-0", "type": "text", "content": "hello" })
        );
    }

    #[test]
    fn test_numbered_header_json_shape() {
        let s = Section {
            id: "section-3".to_string(),
            kind: SectionKind::Header,
            level: Some(2),
            title: Some("MARKET OPPORTUNITY".to_string()),
            content: "large and growing".to_string(),
            metadata: Some(SectionMetadata::Numbered {
                numbered: true,
                number: 1,
            }),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "header");
        assert_eq!(json["level"], 2);
        assert_eq!(json["metadata"], serde_json::json!({ "numbered": true, "number": 1 }));

        let back: Section = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_code_metadata_json_shape() {
        let mut s = section(SectionKind::Code, "fn main() {}");
        s.metadata = Some(SectionMetadata::Code {
            language: "rust".to_string(),
        });
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["metadata"], serde_json::json!({ "language": "rust" }));
        assert_eq!(s.language(), Some("rust"));
        assert_eq!(s.number(), None);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[test]
    fn test_list_items_strip_markers() {
        let s = section(SectionKind::List, "- Strong market fit\n\n  * Clear differentiation\n• Timing");
        assert_eq!(
            s.list_items(),
            vec!["Strong market fit", "Clear differentiation", "Timing"]
        );
    }

    #[test]
    fn test_numbered_list_items_strip_numbers() {
        let s = section(SectionKind::NumberedList, "1. Buy milk\n2. Call bank");
        assert_eq!(s.list_items(), vec!["Buy milk", "Call bank"]);
    }

    #[test]
    fn test_list_items_empty_for_text() {
        assert!(section(SectionKind::Text, "- not a list").list_items().is_empty());
    }

    #[test]
    fn test_quote_text() {
        let s = section(SectionKind::Quote, "> Key insight:\n>timing matters.");
        assert_eq!(s.quote_text().unwrap(), "Key insight:\ntiming matters.");
        assert!(section(SectionKind::Text, "x").quote_text().is_none());
    }

    #[test]
    fn test_body_of_markdown_header() {
        let mut s = section(SectionKind::Header, "Title\nFirst paragraph.");
        s.title = Some("Title".to_string());
        s.level = Some(1);
        assert_eq!(s.body(), "First paragraph.");
    }

    #[test]
    fn test_body_of_pseudo_header() {
        let mut s = section(SectionKind::Header, "large and growing");
        s.title = Some("MARKET OPPORTUNITY".to_string());
        s.metadata = Some(SectionMetadata::Numbered {
            numbered: true,
            number: 1,
        });
        assert_eq!(s.body(), "large and growing");
    }

    #[test]
    fn test_plain_text_strips_emphasis() {
        let s = section(SectionKind::Text, "A **bold** and *quiet* claim.");
        assert_eq!(s.plain_text(), "A bold and quiet claim.");
    }

    #[test]
    fn test_plain_text_code_verbatim() {
        let s = section(SectionKind::Code, "let **x** = 1;");
        assert_eq!(s.plain_text(), "let **x** = 1;");
    }
}
