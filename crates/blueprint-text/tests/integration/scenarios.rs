//! End-to-end segmentation scenarios.

use blueprint_text::{
    CleanOptions, FormatterConfig, SectionKind, SectionMetadata, clean_text, parse, parse_with,
};

use crate::common::{MVP_PROMPT, NUMBERED_REPORT, VALIDATION_RESPONSE, kinds, titles};

#[test]
fn test_validation_response_yields_three_sections() {
    let sections = parse(VALIDATION_RESPONSE);

    assert_eq!(
        kinds(&sections),
        vec![SectionKind::Header, SectionKind::List, SectionKind::Quote]
    );

    let header = &sections[0];
    assert_eq!(header.level, Some(2));
    assert_eq!(header.title.as_deref(), Some("VALIDATION SCORE (85/100)"));

    assert!(sections[1].content.contains("- Strong market fit"));
    assert!(sections[1].content.contains("- Clear differentiation"));
    assert!(sections[2].content.contains("> Key insight: timing matters."));
}

#[test]
fn test_header_level_extraction() {
    let sections = parse("## Foo\nbar");
    let first = &sections[0];
    assert_eq!(first.kind, SectionKind::Header);
    assert_eq!(first.level, Some(2));
    assert_eq!(first.title.as_deref(), Some("Foo"));
}

#[test]
fn test_numbered_pseudo_header_recognition() {
    let sections = parse("1. MARKET OPPORTUNITY: large and growing");
    assert_eq!(sections.len(), 1);

    let header = &sections[0];
    assert_eq!(header.kind, SectionKind::Header);
    assert_eq!(header.level, Some(2));
    assert_eq!(header.title.as_deref(), Some("MARKET OPPORTUNITY"));
    assert_eq!(
        header.metadata,
        Some(SectionMetadata::Numbered {
            numbered: true,
            number: 1
        })
    );
}

#[test]
fn test_ordered_list_not_promoted() {
    let sections = parse("1. Buy milk");
    assert_eq!(kinds(&sections), vec![SectionKind::NumberedList]);
    assert!(sections[0].title.is_none());
}

#[test]
fn test_code_fence_containment() {
    let input = "```javascript\nconst x = 1;\n\nconst y = 2;\n```";
    let sections = parse(input);

    let code: Vec<_> = sections
        .iter()
        .filter(|s| s.kind == SectionKind::Code)
        .collect();
    assert_eq!(code.len(), 1);
    assert_eq!(code[0].language(), Some("javascript"));
    assert!(code[0].content.contains("const x = 1;"));
    assert!(code[0].content.contains("const y = 2;"));
    assert!(code[0].content.contains("\n\n"));
}

#[test]
fn test_blank_lines_between_headers_add_nothing() {
    let sections = parse("# First\n\n\n   \n\n## Second");
    assert_eq!(kinds(&sections), vec![SectionKind::Header, SectionKind::Header]);
    assert_eq!(titles(&sections), vec!["First", "Second"]);
}

#[test]
fn test_order_preserved() {
    let sections = parse(MVP_PROMPT);
    assert_eq!(
        kinds(&sections),
        vec![SectionKind::Header, SectionKind::Code, SectionKind::Quote]
    );
    assert_eq!(sections[1].language(), Some("tsx"));
    assert!(sections[1].content.contains("export default function Page() {\n\n"));
    assert!(sections[0].content.contains("Build the following app:"));
}

#[test]
fn test_numbered_report_default_drops_bare_headers() {
    let sections = parse(NUMBERED_REPORT);
    assert_eq!(
        kinds(&sections),
        vec![
            SectionKind::Header,
            SectionKind::List,
            SectionKind::NumberedList
        ]
    );
    assert_eq!(titles(&sections), vec!["MARKET OPPORTUNITY"]);
    assert!(sections[0].content.contains("grew 30%"));
}

#[test]
fn test_numbered_report_keeps_bare_headers_when_configured() {
    let config = FormatterConfig {
        keep_empty_headers: true,
        ..Default::default()
    };
    let sections = parse_with(NUMBERED_REPORT, &config);

    assert_eq!(
        titles(&sections),
        vec!["MARKET OPPORTUNITY", "RISK ASSESSMENT", "NEXT STEPS"]
    );
    let numbers: Vec<_> = sections.iter().filter_map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(sections[4].list_items(), vec!["Interview ten customers", "Build a landing page"]);
}

#[test]
fn test_totality_on_awkward_inputs() {
    let inputs = [
        "",
        "   ",
        "\n\n\n",
        "```",
        "```rust\nfn main() {",
        "a\r\nb\nc\r\n",
        "\r",
        "####### seven",
        "• bullet\u{2028}separator",
        "1.",
        "> ",
    ];
    for input in inputs {
        let sections = parse(input);
        for (i, s) in sections.iter().enumerate() {
            assert_eq!(s.id, format!("section-{i}"), "input {input:?}");
        }
    }
}

#[test]
fn test_clean_then_parse_matches_parse_structure() {
    let raw = "  ## Title   \r\n\r\n\r\n\r\nBody\r\n- a  \r\n- b";
    let cleaned = clean_text(raw, &CleanOptions::default());
    assert_eq!(cleaned, "## Title\n\nBody\n- a\n- b");
    assert_eq!(kinds(&parse(&cleaned)), kinds(&parse(raw)));
}
