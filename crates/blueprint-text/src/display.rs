//! Reassembly of sections into canonical markdown.
//!
//! The output is a cleaned-up rendering of the same structure, not a
//! byte-for-byte copy of the parsed input: headers are re-emitted with `#`
//! markers for their level, trailing whitespace and edge blank lines are
//! dropped, and sections are separated by exactly one blank line. Code
//! content is emitted verbatim between fences.

use crate::section::{Section, SectionKind};

/// Render sections back into a single markdown string.
///
/// # Example
///
/// ```rust
/// use blueprint_text::{format_for_display, parse};
///
/// let sections = parse("1. MARKET OPPORTUNITY: large and growing\n- SMB   \n- Mid-market\n\n\n");
/// assert_eq!(
///     format_for_display(&sections),
///     "## MARKET OPPORTUNITY\nlarge and growing\n\n- SMB\n- Mid-market"
/// );
/// ```
pub fn format_for_display(sections: &[Section]) -> String {
    sections
        .iter()
        .map(render_section)
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: &Section) -> String {
    match section.kind {
        SectionKind::Header => render_header(section),
        SectionKind::Code => render_code(section),
        SectionKind::List | SectionKind::NumberedList | SectionKind::Quote | SectionKind::Text => {
            tidy_block(&section.content)
        }
    }
}

fn render_header(section: &Section) -> String {
    let level = usize::from(section.level.unwrap_or(1).clamp(1, 6));
    let title = section.title.as_deref().unwrap_or_default();
    let mut out = format!("{} {}", "#".repeat(level), title.trim());

    let body = tidy_block(section.body());
    if !body.is_empty() {
        out.push('\n');
        out.push_str(&body);
    }
    out
}

fn render_code(section: &Section) -> String {
    let language = section.language().unwrap_or_default();
    if section.content.is_empty() {
        format!("```{language}\n```")
    } else {
        format!("```{language}\n{}\n```", section.content)
    }
}

/// Strip trailing whitespace per line and drop leading/trailing blank lines.
fn tidy_block(content: &str) -> String {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();
    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);

    lines[first..=last].join("\n")
}

// ============================================================================
// Tests
// ============================================================================
