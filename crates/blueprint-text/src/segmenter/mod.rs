//! Line-oriented segmentation of AI-generated text into [`Section`]s.
//!
//! The segmenter walks the input one line at a time, keeping a single open
//! section. Each line either continues the open section or closes it and
//! starts a new one:
//!
//! - fences open and close `code` sections; inside a fence every line is
//!   appended verbatim
//! - headers (markdown or numbered pseudo-headers) always start a new section
//! - bullet, ordered, quote, and text lines continue an open section of the
//!   same type and otherwise start one
//! - text directly under a header is the header's body and stays in it
//! - blank lines append an empty line to the open section
//!
//! A closed section is kept only if its content is non-empty after trimming,
//! or it is a code section. Ids are assigned to kept sections in order.
//!
//! # Example
//!
//! ```rust
//! use blueprint_text::{parse, SectionKind};
//!
//! let sections = parse("## Summary\nLooks promising.\n\n- Strong market fit\n- Clear differentiation");
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].kind, SectionKind::Header);
//! assert_eq!(sections[0].title.as_deref(), Some("Summary"));
//! assert_eq!(sections[1].kind, SectionKind::List);
//! assert_eq!(sections[1].id, "section-1");
//! ```

mod classify;

use blueprint_core::FormatterConfig;

use crate::section::{Section, SectionKind, SectionMetadata};
use classify::{DEFAULT_LANGUAGE, LineClass, classify, is_fence};

/// Parse text into sections with the default configuration.
pub fn parse(text: &str) -> Vec<Section> {
    parse_with(text, &FormatterConfig::default())
}

/// Parse text into sections.
///
/// Never fails: every input, including the empty string, produces a
/// (possibly empty) list of sections in input order.
pub fn parse_with(text: &str, config: &FormatterConfig) -> Vec<Section> {
    let mut segmenter = Segmenter::new(config);
    let mut line_count = 0usize;

    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        segmenter.feed(line);
        line_count += 1;
    }

    let sections = segmenter.finish();
    log::debug!(
        "Segmented {} lines into {} sections",
        line_count,
        sections.len()
    );
    sections
}

/// The section being accumulated.
#[derive(Debug)]
struct OpenSection {
    kind: SectionKind,
    level: Option<u8>,
    title: Option<String>,
    lines: Vec<String>,
    metadata: Option<SectionMetadata>,
}

impl OpenSection {
    fn block(kind: SectionKind, first_line: &str) -> Self {
        Self {
            kind,
            level: None,
            title: None,
            lines: vec![first_line.to_string()],
            metadata: None,
        }
    }

    fn code(language: &str) -> Self {
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };
        Self {
            kind: SectionKind::Code,
            level: None,
            title: None,
            lines: Vec::new(),
            metadata: Some(SectionMetadata::Code {
                language: language.to_string(),
            }),
        }
    }

    fn header(level: u8, title: &str) -> Self {
        Self {
            kind: SectionKind::Header,
            level: Some(level),
            title: Some(title.to_string()),
            lines: vec![title.to_string()],
            metadata: None,
        }
    }

    fn numbered_header(level: u8, number: u64, title: &str, rest: &str) -> Self {
        Self {
            kind: SectionKind::Header,
            level: Some(level),
            title: Some(title.to_string()),
            lines: if rest.is_empty() {
                Vec::new()
            } else {
                vec![rest.to_string()]
            },
            metadata: Some(SectionMetadata::Numbered {
                numbered: true,
                number,
            }),
        }
    }

    fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Per-call parsing state. Holds nothing between calls.
struct Segmenter<'c> {
    config: &'c FormatterConfig,
    sections: Vec<Section>,
    open: Option<OpenSection>,
    in_code: bool,
}

impl<'c> Segmenter<'c> {
    fn new(config: &'c FormatterConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
            open: None,
            in_code: false,
        }
    }

    fn feed(&mut self, line: &str) {
        if self.in_code {
            if is_fence(line) {
                self.flush();
                self.in_code = false;
            } else if let Some(open) = self.open.as_mut() {
                open.push(line);
            }
            return;
        }

        let class = classify(line, self.config.numbered_headers);
        log::trace!("{class:?}: {line:?}");

        match class {
            LineClass::Blank => {
                if let Some(open) = self.open.as_mut() {
                    open.push("");
                }
            }
            LineClass::Fence { language } => {
                self.start(OpenSection::code(language));
                self.in_code = true;
            }
            LineClass::Header { level, title } => {
                self.start(OpenSection::header(level, title));
            }
            LineClass::NumberedHeader {
                number,
                title,
                rest,
            } => {
                let level = self.config.numbered_header_level.clamp(1, 6);
                self.start(OpenSection::numbered_header(level, number, title, rest));
            }
            LineClass::Bullet => self.continue_or_start(SectionKind::List, line),
            LineClass::Ordered => self.continue_or_start(SectionKind::NumberedList, line),
            LineClass::Quote => self.continue_or_start(SectionKind::Quote, line),
            LineClass::Text => self.continue_or_start(SectionKind::Text, line),
        }
    }

    /// Append to the open section if it has the same kind (or is a header
    /// receiving its body text), otherwise start a new section.
    fn continue_or_start(&mut self, kind: SectionKind, line: &str) {
        let continues = self.open.as_ref().is_some_and(|open| {
            open.kind == kind || (kind == SectionKind::Text && open.kind == SectionKind::Header)
        });

        if !continues {
            self.start(OpenSection::block(kind, line));
        } else if let Some(open) = self.open.as_mut() {
            open.push(line);
        }
    }

    fn start(&mut self, section: OpenSection) {
        self.flush();
        self.open = Some(section);
    }

    fn flush(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };

        let content = open.content();
        let keep = !content.trim().is_empty()
            || open.kind == SectionKind::Code
            || (open.kind == SectionKind::Header && self.config.keep_empty_headers);

        if !keep {
            log::trace!("Dropping empty {} section", open.kind);
            return;
        }

        self.sections.push(Section {
            id: format!("section-{}", self.sections.len()),
            kind: open.kind,
            level: open.level,
            title: open.title,
            content,
            metadata: open.metadata,
        });
    }

    fn finish(mut self) -> Vec<Section> {
        if self.in_code {
            log::debug!("Input ended inside an unterminated code fence");
        }
        self.flush();
        self.sections
    }
}

// ============================================================================
// Tests
// ============================================================================
