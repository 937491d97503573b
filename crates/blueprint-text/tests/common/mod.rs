//! Shared fixtures for blueprint-text integration tests.

#![allow(dead_code)]

use blueprint_text::{Section, SectionKind};

/// A validation response in the shape the idea-validation prompt returns.
pub const VALIDATION_RESPONSE: &str = "## VALIDATION SCORE (85/100)
This idea shows potential.

- Strong market fit
- Clear differentiation

> Key insight: timing matters.";

/// A response that numbers its sections in prose instead of using `#`.
pub const NUMBERED_REPORT: &str = "1. MARKET OPPORTUNITY: large and growing
The segment grew 30% last year.

2. RISK ASSESSMENT
- Incumbents may copy the feature
- Regulatory exposure in the EU

3. NEXT STEPS
1. Interview ten customers
2. Build a landing page";

/// An MVP prompt with an embedded code block.
pub const MVP_PROMPT: &str = "# MVP Prompt

Build the following app:

```tsx
export default function Page() {

  return <main>Hello</main>;
}
```

> Paste this into your builder tool.";

/// Section types in order.
pub fn kinds(sections: &[Section]) -> Vec<SectionKind> {
    sections.iter().map(|s| s.kind).collect()
}

/// Header titles in order.
pub fn titles(sections: &[Section]) -> Vec<&str> {
    sections
        .iter()
        .filter_map(|s| s.title.as_deref())
        .collect()
}
