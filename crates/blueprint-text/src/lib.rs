//! Segmentation and formatting of AI-generated text.
//!
//! # Modules
//!
//! - [`section`]: The [`Section`] data model
//! - [`segmenter`]: Line classification and section assembly ([`parse`])
//! - [`clean`]: Whitespace normalization ([`clean_text`])
//! - [`display`]: Reassembly into canonical markdown ([`format_for_display`])
//! - [`summary`]: Outline and excerpt helpers
//! - [`plain`]: Plain-text extraction via `pulldown-cmark`
//! - [`formatter`]: [`TextFormatter`], the configured service object
//!
//! # Example
//!
//! ```rust
//! use blueprint_text::{parse, SectionKind};
//!
//! let sections = parse("1. MARKET OPPORTUNITY: large and growing\n1. Buy milk");
//! assert_eq!(sections[0].kind, SectionKind::Header);
//! assert_eq!(sections[0].number(), Some(1));
//! assert_eq!(sections[1].kind, SectionKind::NumberedList);
//! ```

#![doc = include_str!("../README.md")]

pub mod clean;
pub mod display;
pub mod formatter;
pub mod plain;
pub mod section;
pub mod segmenter;
pub mod summary;

mod proptests;

// Re-export key types and functions
pub use clean::clean_text;
pub use display::format_for_display;
pub use formatter::TextFormatter;
pub use section::{Section, SectionKind, SectionMetadata};
pub use segmenter::{parse, parse_with};
pub use summary::{OutlineEntry, excerpt, outline};

// Re-export config types for convenience
pub use blueprint_core::{CleanOptions, FormatterConfig};
