//! Line classification.
//!
//! Rules are tried in a fixed order against the trimmed line; the first match
//! wins. The order matters for ambiguous lines: `1. MARKET OPPORTUNITY` is a
//! pseudo-header only because that rule runs before the ordered-list rule.
//!
//! 1. code fence
//! 2. markdown header
//! 3. numbered pseudo-header
//! 4. bullet item
//! 5. ordered item
//! 6. blockquote
//! 7. text

use std::sync::LazyLock;

use regex::Regex;

/// Opening/closing delimiter of a fenced code block.
pub(crate) const FENCE: &str = "```";

/// Language tag used when a fence has none.
pub(crate) const DEFAULT_LANGUAGE: &str = "text";

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+)$").expect("header regex is a valid constant")
});

// An all-caps phrase of at least two letters, then end of line or a colon
// and optional trailing text.
static NUMBERED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+([A-Z][A-Z\s]*[A-Z])(?:\s*:\s*(.*))?$")
        .expect("numbered header regex is a valid constant")
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+•]\s").expect("bullet regex is a valid constant"));

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("ordered item regex is a valid constant"));

/// What a single (non-code) line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// Triple-backtick fence; `language` is the trimmed text after it.
    Fence { language: &'a str },
    /// `#`-style header.
    Header { level: u8, title: &'a str },
    /// `<n>. ALL CAPS[: rest]` pseudo-header.
    NumberedHeader {
        number: u64,
        title: &'a str,
        rest: &'a str,
    },
    /// `-`, `*`, `+`, or `•` item.
    Bullet,
    /// `<n>. item` that is not a pseudo-header.
    Ordered,
    /// `>` line.
    Quote,
    /// Anything else.
    Text,
}

/// Whether a line opens or closes a code fence.
pub(crate) fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// Classify one line. `numbered_headers` enables rule 3.
pub(crate) fn classify(line: &str, numbered_headers: bool) -> LineClass<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(tag) = trimmed.strip_prefix(FENCE) {
        return LineClass::Fence {
            language: tag.trim(),
        };
    }

    if let Some(caps) = HEADER.captures(trimmed) {
        let (Some(hashes), Some(title)) = (caps.get(1), caps.get(2)) else {
            return LineClass::Text;
        };
        return LineClass::Header {
            level: hashes.as_str().len() as u8,
            title: title.as_str().trim(),
        };
    }

    if numbered_headers && let Some(class) = numbered_header(trimmed) {
        return class;
    }

    if BULLET.is_match(trimmed) {
        return LineClass::Bullet;
    }

    if ORDERED.is_match(trimmed) {
        return LineClass::Ordered;
    }

    if trimmed.starts_with('>') {
        return LineClass::Quote;
    }

    LineClass::Text
}

/// Match rule 3. A number too large for `u64` is not a pseudo-header.
fn numbered_header(trimmed: &str) -> Option<LineClass<'_>> {
    let caps = NUMBERED_HEADER.captures(trimmed)?;
    let number = caps.get(1)?.as_str().parse::<u64>().ok()?;
    let title = caps.get(2)?.as_str().trim();
    let rest = caps.get(3).map_or("", |m| m.as_str().trim());
    Some(LineClass::NumberedHeader {
        number,
        title,
        rest,
    })
}

// ============================================================================
// Tests
// ============================================================================
