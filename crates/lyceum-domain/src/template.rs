//! Section templates per output format
//!
//! Each slot carries an alias table so that synonymous headings
//! ("Results" for "Findings") land in the right slot.

/// Name of the abstract slot
pub const ABSTRACT_SLOT: &str = "Abstract";

/// A named section position mandated by an output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSlot {
    /// Canonical section name
    pub name: &'static str,
    /// Accepted synonyms, matched case-insensitively
    pub aliases: &'static [&'static str],
}

impl TemplateSlot {
    const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    /// Whether a heading names this slot (canonical name or alias)
    pub fn matches(&self, heading: &str) -> bool {
        let heading = heading.trim();
        heading.eq_ignore_ascii_case(self.name)
            || self.aliases.iter().any(|a| heading.eq_ignore_ascii_case(a))
    }
}

const ABSTRACT: TemplateSlot = TemplateSlot::new(ABSTRACT_SLOT, &["Summary", "Executive Summary"]);
const INTRODUCTION: TemplateSlot = TemplateSlot::new("Introduction", &["Overview"]);
const LITERATURE_REVIEW: TemplateSlot = TemplateSlot::new(
    "Literature Review",
    &["Related Work", "Prior Work", "Review of the Literature", "Background and Related Work"],
);
const METHODOLOGY: TemplateSlot = TemplateSlot::new(
    "Methodology",
    &["Methods", "Method", "Materials and Methods", "Research Design"],
);
const FINDINGS: TemplateSlot = TemplateSlot::new("Findings", &["Results", "Key Findings"]);
const DISCUSSION: TemplateSlot = TemplateSlot::new("Discussion", &["Interpretation"]);
const CONCLUSION: TemplateSlot = TemplateSlot::new(
    "Conclusion",
    &["Conclusions", "Concluding Remarks", "Summary and Conclusions"],
);

/// PAPER template
pub const PAPER: &[TemplateSlot] = &[
    ABSTRACT,
    INTRODUCTION,
    LITERATURE_REVIEW,
    METHODOLOGY,
    FINDINGS,
    DISCUSSION,
    CONCLUSION,
];

/// REVIEW template
pub const REVIEW: &[TemplateSlot] = &[
    ABSTRACT,
    INTRODUCTION,
    TemplateSlot::new("Thematic Analysis", &["Themes", "Thematic Synthesis"]),
    TemplateSlot::new("Research Gaps", &["Gaps", "Gaps in the Literature", "Knowledge Gaps"]),
    TemplateSlot::new("Future Directions", &["Future Research", "Future Work", "Recommendations for Future Research"]),
];

/// PROPOSAL template
pub const PROPOSAL: &[TemplateSlot] = &[
    TemplateSlot::new("Background", &["Introduction", "Context"]),
    TemplateSlot::new("Research Questions", &["Research Aims", "Objectives", "Aims and Objectives"]),
    LITERATURE_REVIEW,
    TemplateSlot::new("Proposed Methodology", &["Methodology", "Methods", "Research Design"]),
    TemplateSlot::new("Expected Outcomes", &["Expected Results", "Anticipated Outcomes"]),
    TemplateSlot::new("Timeline", &["Schedule", "Work Plan"]),
];

/// ABSTRACT template
pub const ABSTRACT_ONLY: &[TemplateSlot] = &[ABSTRACT];

/// PRESENTATION template
pub const PRESENTATION: &[TemplateSlot] = &[
    TemplateSlot::new("Key Points", &["Highlights", "Summary"]),
    TemplateSlot::new("Main Findings", &["Findings", "Results"]),
    TemplateSlot::new("Implications", &["Discussion", "Recommendations"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_matches_alias_case_insensitively() {
        assert!(FINDINGS.matches("results"));
        assert!(FINDINGS.matches("  Findings "));
        assert!(!FINDINGS.matches("Discussion"));
    }

    #[test]
    fn test_slot_names_unique_within_templates() {
        for template in [PAPER, REVIEW, PROPOSAL, ABSTRACT_ONLY, PRESENTATION] {
            for (i, a) in template.iter().enumerate() {
                for b in &template[i + 1..] {
                    assert!(!a.matches(b.name), "{} collides with {}", a.name, b.name);
                }
            }
        }
    }
}
