//! [`TextFormatter`]: the formatter as a configured service object.
//!
//! Callers that load a [`FormatterConfig`] build one `TextFormatter` at
//! startup and pass it to whatever renders AI output. It holds no mutable
//! state, so a shared reference can be used from any number of threads.

use blueprint_core::FormatterConfig;

use crate::clean::clean_text;
use crate::display::format_for_display;
use crate::section::Section;
use crate::segmenter::parse_with;
use crate::summary::{OutlineEntry, excerpt, outline};

/// Text segmentation and formatting with an injected configuration.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: FormatterConfig,
}

impl TextFormatter {
    /// Create a formatter from a configuration.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Split text into typed sections.
    pub fn parse(&self, text: &str) -> Vec<Section> {
        parse_with(text, &self.config)
    }

    /// Clean text with the configured [`CleanOptions`](blueprint_core::CleanOptions).
    pub fn clean(&self, text: &str) -> String {
        clean_text(text, &self.config.clean)
    }

    /// Clean, then parse.
    pub fn parse_cleaned(&self, text: &str) -> Vec<Section> {
        self.parse(&self.clean(text))
    }

    /// Render sections back to canonical markdown.
    pub fn format_for_display(&self, sections: &[Section]) -> String {
        format_for_display(sections)
    }

    /// Table of contents of the parsed sections.
    pub fn outline(&self, sections: &[Section]) -> Vec<OutlineEntry> {
        outline(sections)
    }

    /// Plain-text preview of the parsed sections.
    pub fn excerpt(&self, sections: &[Section], max_chars: usize) -> Option<String> {
        excerpt(sections, max_chars)
    }
}
