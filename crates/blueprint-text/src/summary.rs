//! Navigation and preview helpers over parsed sections.

use serde::{Deserialize, Serialize};

use crate::plain::truncate_text;
use crate::section::{Section, SectionKind};

/// One header in a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Id of the header section.
    pub id: String,
    /// Header level.
    pub level: u8,
    /// Header title.
    pub title: String,
}

/// Table of contents: every header section, in order.
pub fn outline(sections: &[Section]) -> Vec<OutlineEntry> {
    sections
        .iter()
        .filter(|s| s.is_header())
        .map(|s| OutlineEntry {
            id: s.id.clone(),
            level: s.level.unwrap_or(1),
            title: s.title.clone().unwrap_or_default(),
        })
        .collect()
}

/// A short plain-text preview: the first prose found, truncated.
///
/// Looks at text sections and header bodies in order and returns the first
/// non-empty one with formatting stripped, cut to `max_chars` at a word
/// boundary.
pub fn excerpt(sections: &[Section], max_chars: usize) -> Option<String> {
    sections
        .iter()
        .filter_map(|s| match s.kind {
            SectionKind::Text => Some(s.plain_text()),
            SectionKind::Header => Some(crate::plain::plain_text(s.body())),
            _ => None,
        })
        .find(|text| !text.is_empty())
        .map(|text| truncate_text(&text, max_chars))
}

// ============================================================================
// Tests
// ============================================================================
