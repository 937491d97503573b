//! Integration tests for the configured `TextFormatter`.

use blueprint_text::{FormatterConfig, SectionKind, TextFormatter};

use crate::common::{MVP_PROMPT, NUMBERED_REPORT, VALIDATION_RESPONSE, kinds};

#[test]
fn test_sections_serialize_for_rendering() {
    let formatter = TextFormatter::default();
    let sections = formatter.parse(VALIDATION_RESPONSE);
    let json = serde_json::to_value(&sections).unwrap();

    assert_eq!(json[0]["id"], "section-0");
    assert_eq!(json[0]["type"], "header");
    assert_eq!(json[0]["level"], 2);
    assert_eq!(json[1]["type"], "list");
    assert!(json[1].get("level").is_none());
    assert!(json[1].get("metadata").is_none());
    assert_eq!(json[2]["type"], "quote");
}

#[test]
fn test_code_metadata_serializes_language() {
    let sections = TextFormatter::default().parse(MVP_PROMPT);
    let json = serde_json::to_value(&sections[1]).unwrap();
    assert_eq!(json["type"], "code");
    assert_eq!(json["metadata"]["language"], "tsx");
}

#[test]
fn test_format_for_display_canonicalizes_report() {
    let formatter = TextFormatter::new(FormatterConfig {
        keep_empty_headers: true,
        ..Default::default()
    });
    let sections = formatter.parse(NUMBERED_REPORT);
    let rendered = formatter.format_for_display(&sections);

    assert!(rendered.starts_with("## MARKET OPPORTUNITY\nlarge and growing\nThe segment grew 30% last year."));
    assert!(rendered.contains("\n\n## RISK ASSESSMENT\n\n- Incumbents may copy the feature\n"));
    assert!(rendered.ends_with("## NEXT STEPS\n\n1. Interview ten customers\n2. Build a landing page"));

    let reparsed = formatter.parse(&rendered);
    assert_eq!(kinds(&reparsed), kinds(&sections));
}

#[test]
fn test_outline_and_excerpt() {
    let formatter = TextFormatter::default();
    let sections = formatter.parse(VALIDATION_RESPONSE);

    let outline = formatter.outline(&sections);
    assert_eq!(outline.len(), 1);
    assert_eq!(outline[0].title, "VALIDATION SCORE (85/100)");
    assert_eq!(outline[0].level, 2);

    assert_eq!(
        formatter.excerpt(&sections, 200).as_deref(),
        Some("This idea shows potential.")
    );
}

#[test]
fn test_parse_cleaned_handles_messy_output() {
    let formatter = TextFormatter::default();
    let sections =
        formatter.parse_cleaned("\r\n\r\n# Pitch   \r\n\r\n\r\n\r\n\r\n- fast\r\n- cheap   \r\n");
    assert_eq!(kinds(&sections), vec![SectionKind::Header, SectionKind::List]);
    assert_eq!(sections[0].content, "Pitch\n");
    assert_eq!(sections[1].content, "- fast\n- cheap");
}

#[test]
fn test_formatter_shared_across_threads() {
    let formatter = std::sync::Arc::new(TextFormatter::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let formatter = std::sync::Arc::clone(&formatter);
            std::thread::spawn(move || formatter.parse(VALIDATION_RESPONSE).len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
