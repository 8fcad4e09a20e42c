//! Report assembly and structural validation

use crate::config::{AssemblerConfig, PreamblePolicy};
use crate::error::AssemblerError;
use crate::types::{AssemblyRequest, StructuralIssue};
use lyceum_domain::template::ABSTRACT_SLOT;
use lyceum_domain::{AcademicReport, OutputFormat, Section, TemplateSlot};
use std::collections::HashSet;
use tracing::{debug, info};

/// Places parsed sections into format templates and checks the result
pub struct ReportAssembler {
    config: AssemblerConfig,
}

impl ReportAssembler {
    /// Create a new assembler with the given configuration
    ///
    /// Fails when the configuration is invalid or adds aliases for a slot
    /// that no template defines.
    pub fn new(config: AssemblerConfig) -> Result<Self, AssemblerError> {
        config.validate().map_err(AssemblerError::Config)?;

        for slot in config.extra_aliases.keys() {
            let known = OutputFormat::ALL
                .iter()
                .flat_map(|format| format.template())
                .any(|s| s.name.eq_ignore_ascii_case(slot));
            if !known {
                return Err(AssemblerError::UnknownSlot(slot.clone()));
            }
        }

        Ok(Self { config })
    }

    /// Create an assembler with default configuration
    pub fn default_config() -> Self {
        Self {
            config: AssemblerConfig::default(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Build a report from parsed content
    ///
    /// Template slots come first in template order, each filled from the
    /// parsed sections that match its name or aliases (unmatched slots are
    /// created empty). The preamble is placed according to the configured
    /// policy, then the remaining parsed sections follow in parse order.
    pub fn assemble(&self, request: AssemblyRequest) -> AcademicReport {
        let AssemblyRequest {
            title,
            preamble,
            sections,
            bibliography,
            metadata,
            keywords,
            style,
            format,
        } = request;

        let template = format.template();
        let parsed: Vec<Section> = sections.into_iter().collect();
        let mut claimed = vec![false; parsed.len()];

        let mut report = AcademicReport::new(title, style, format);
        report.keywords = keywords;
        report.bibliography = bibliography;
        report.metadata = metadata;

        for slot in template {
            let mut content = String::new();
            for (idx, section) in parsed.iter().enumerate() {
                if claimed[idx] || !self.slot_matches(slot, &section.name) {
                    continue;
                }
                debug!("Section \"{}\" fills slot \"{}\"", section.name, slot.name);
                claimed[idx] = true;
                if !content.is_empty() && !section.content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&section.content);
            }
            report.sections.insert(slot.name, content);
        }

        self.place_preamble(&mut report, preamble);

        for (section, _) in parsed.into_iter().zip(claimed).filter(|(_, used)| !used) {
            debug!("Appending extra section \"{}\"", section.name);
            report.sections.append(section.name, &section.content);
        }

        if let Some(abstract_section) = report.sections.get(ABSTRACT_SLOT) {
            report.abstract_text = abstract_section.to_string();
        }
        report.refresh_word_count();

        info!(
            "Assembled {} report \"{}\" with {} sections ({} words)",
            format,
            report.title,
            report.sections.len(),
            report.word_count
        );

        report
    }

    /// Check a report for structural gaps without modifying it
    pub fn validate(&self, report: &AcademicReport) -> Vec<StructuralIssue> {
        let mut issues = Vec::new();

        if report.format.requires_abstract() && abstract_of(report).trim().is_empty() {
            issues.push(StructuralIssue::EmptyAbstract);
        }

        if report.compute_word_count() == 0 {
            issues.push(StructuralIssue::ZeroWordCount);
        }

        if report.format.requires_references() && report.bibliography.trim().is_empty() {
            issues.push(StructuralIssue::MissingBibliography);
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for name in report.sections.names() {
            let folded = name.to_lowercase();
            if !seen.insert(folded.clone()) && reported.insert(folded) {
                issues.push(StructuralIssue::DuplicateSection {
                    name: name.to_string(),
                });
            }
        }

        for slot in report.format.template() {
            let filled = report
                .sections
                .iter()
                .filter(|s| self.slot_matches(slot, &s.name))
                .any(|s| !s.content.trim().is_empty());
            let present = report.sections.iter().any(|s| self.slot_matches(slot, &s.name));

            if !present || (!filled && self.config.flag_empty_slots) {
                issues.push(StructuralIssue::MissingSection {
                    name: slot.name.to_string(),
                });
            }
        }

        debug!("Validation found {} issues", issues.len());
        issues
    }

    /// Word count of the report as it is now
    pub fn word_count(&self, report: &AcademicReport) -> usize {
        report.compute_word_count()
    }

    /// Add a section after the existing ones, merging into a same-named one
    ///
    /// Keeps `abstract_text` and the word count in step with the sections.
    pub fn append_section(&self, report: &mut AcademicReport, name: &str, content: &str) {
        let name = report
            .sections
            .get_ignore_case(name)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| name.to_string());

        report.sections.append(name.clone(), content);
        if name.eq_ignore_ascii_case(ABSTRACT_SLOT) {
            report.abstract_text = report.sections.get(&name).unwrap_or_default().to_string();
        }
        report.refresh_word_count();
    }

    /// Reorder sections explicitly (see [`AcademicReport::reorder_sections`])
    pub fn reorder_sections(&self, report: &mut AcademicReport, order: &[&str]) {
        report.reorder_sections(order);
    }

    fn slot_matches(&self, slot: &TemplateSlot, heading: &str) -> bool {
        slot.matches(heading)
            || self
                .config
                .aliases_for(slot.name)
                .any(|alias| alias.trim().eq_ignore_ascii_case(heading.trim()))
    }

    fn place_preamble(&self, report: &mut AcademicReport, preamble: String) {
        if preamble.trim().is_empty() {
            return;
        }

        let abstract_slot_empty = report
            .sections
            .get(ABSTRACT_SLOT)
            .is_some_and(|content| content.trim().is_empty());

        match self.config.preamble_policy {
            PreamblePolicy::Discard => debug!("Discarding preamble"),
            PreamblePolicy::Section => self.preamble_section(report, &preamble),
            PreamblePolicy::Auto | PreamblePolicy::Abstract if abstract_slot_empty => {
                debug!("Preamble fills the Abstract slot");
                report.sections.insert(ABSTRACT_SLOT, preamble);
            }
            PreamblePolicy::Abstract if !report.format.has_abstract_slot() => {
                report.abstract_text = preamble;
            }
            PreamblePolicy::Auto | PreamblePolicy::Abstract => self.preamble_section(report, &preamble),
        }
    }

    fn preamble_section(&self, report: &mut AcademicReport, preamble: &str) {
        report
            .sections
            .append(self.config.preamble_section_name.clone(), preamble);
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Abstract content, preferring the Abstract section
fn abstract_of(report: &AcademicReport) -> &str {
    report
        .sections
        .get_ignore_case(ABSTRACT_SLOT)
        .map(|s| s.content.as_str())
        .unwrap_or(&report.abstract_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyceum_domain::{CitationStyle, SectionMap};

    fn request(sections: &[(&str, &str)], format: OutputFormat) -> AssemblyRequest {
        AssemblyRequest {
            title: "Sleep and Memory".to_string(),
            sections: sections.iter().copied().collect::<SectionMap>(),
            bibliography: "Doe, J. (2021). Sleep. Nature.".to_string(),
            format,
            ..AssemblyRequest::default()
        }
    }

    #[test]
    fn test_template_order_then_extras() {
        let assembler = ReportAssembler::default();
        let report = assembler.assemble(request(
            &[
                ("Appendix", "extra"),
                ("Results", "r"),
                ("Introduction", "i"),
                ("Acknowledgements", "thanks"),
            ],
            OutputFormat::Paper,
        ));

        assert_eq!(
            report.sections.names(),
            vec![
                "Abstract",
                "Introduction",
                "Literature Review",
                "Methodology",
                "Findings",
                "Discussion",
                "Conclusion",
                "Appendix",
                "Acknowledgements",
            ]
        );
        assert_eq!(report.sections.get("Findings"), Some("r"));
    }

    #[test]
    fn test_aliases_merge_into_one_slot() {
        let assembler = ReportAssembler::default();
        let report = assembler.assemble(request(
            &[("Methods", "m1"), ("Materials and Methods", "m2")],
            OutputFormat::Paper,
        ));
        assert_eq!(report.sections.get("Methodology"), Some("m1\n\nm2"));
        assert!(!report.sections.contains("Methods"));
    }

    #[test]
    fn test_configured_alias() {
        let mut config = AssemblerConfig::default();
        config
            .extra_aliases
            .insert("Findings".to_string(), vec!["Outcomes".to_string()]);
        let assembler = ReportAssembler::new(config).unwrap();

        let report = assembler.assemble(request(&[("Outcomes", "o")], OutputFormat::Paper));
        assert_eq!(report.sections.get("Findings"), Some("o"));
    }

    #[test]
    fn test_unknown_slot_alias_rejected() {
        let mut config = AssemblerConfig::default();
        config
            .extra_aliases
            .insert("Epilogue".to_string(), vec!["Afterword".to_string()]);
        assert_eq!(
            ReportAssembler::new(config).err(),
            Some(AssemblerError::UnknownSlot("Epilogue".to_string()))
        );
    }

    #[test]
    fn test_preamble_fills_empty_abstract() {
        let assembler = ReportAssembler::default();
        let mut req = request(&[("Introduction", "i")], OutputFormat::Paper);
        req.preamble = "This review summarises sleep research.".to_string();

        let report = assembler.assemble(req);
        assert_eq!(report.abstract_text, "This review summarises sleep research.");
        assert_eq!(
            report.sections.get("Abstract"),
            Some("This review summarises sleep research.")
        );
        assert!(!report.sections.contains("Preamble"));
    }

    #[test]
    fn test_preamble_becomes_section_when_abstract_present() {
        let assembler = ReportAssembler::default();
        let mut req = request(&[("Summary", "s"), ("Introduction", "i")], OutputFormat::Paper);
        req.preamble = "Front matter.".to_string();

        let report = assembler.assemble(req);
        assert_eq!(report.abstract_text, "s");
        assert_eq!(report.sections.get("Preamble"), Some("Front matter."));
        assert_eq!(report.sections.names()[7], "Preamble");
    }

    #[test]
    fn test_preamble_policy_abstract_without_slot() {
        let config = AssemblerConfig {
            preamble_policy: PreamblePolicy::Abstract,
            ..AssemblerConfig::default()
        };
        let assembler = ReportAssembler::new(config).unwrap();
        let mut req = request(&[("Highlights", "h")], OutputFormat::Presentation);
        req.preamble = "Short summary.".to_string();

        let report = assembler.assemble(req);
        assert_eq!(report.abstract_text, "Short summary.");
        assert!(!report.sections.contains("Preamble"));
        assert_eq!(report.sections.get("Key Points"), Some("h"));
    }

    #[test]
    fn test_preamble_discarded() {
        let config = AssemblerConfig {
            preamble_policy: PreamblePolicy::Discard,
            ..AssemblerConfig::default()
        };
        let assembler = ReportAssembler::new(config).unwrap();
        let mut req = request(&[], OutputFormat::Paper);
        req.preamble = "Dropped.".to_string();

        let report = assembler.assemble(req);
        assert!(report.abstract_text.is_empty());
        assert_eq!(report.sections.len(), 7);
    }

    #[test]
    fn test_validate_reports_gaps() {
        let assembler = ReportAssembler::default();
        let mut req = request(&[("Introduction", "i")], OutputFormat::Paper);
        req.bibliography.clear();

        let issues = assembler.validate(&assembler.assemble(req));
        assert!(issues.contains(&StructuralIssue::EmptyAbstract));
        assert!(issues.contains(&StructuralIssue::MissingBibliography));
        assert!(!issues.contains(&StructuralIssue::ZeroWordCount));
        assert!(issues.contains(&StructuralIssue::MissingSection {
            name: "Conclusion".to_string()
        }));
    }

    #[test]
    fn test_validate_zero_words_and_duplicates() {
        let assembler = ReportAssembler::default();
        let mut report = AcademicReport::new("", CitationStyle::Apa, OutputFormat::Abstract);
        report.sections.insert("Notes", "");
        report.sections.insert("notes", "");

        let issues = assembler.validate(&report);
        assert!(issues.contains(&StructuralIssue::ZeroWordCount));
        assert!(issues.contains(&StructuralIssue::EmptyAbstract));
        assert_eq!(
            issues
                .iter()
                .filter(|i| matches!(i, StructuralIssue::DuplicateSection { .. }))
                .count(),
            1
        );
        assert!(!issues.contains(&StructuralIssue::MissingBibliography));
    }

    #[test]
    fn test_lenient_ignores_empty_slots() {
        let assembler = ReportAssembler::new(AssemblerConfig::lenient()).unwrap();
        let report = assembler.assemble(request(&[("Introduction", "i")], OutputFormat::Paper));
        let issues = assembler.validate(&report);
        assert!(!issues
            .iter()
            .any(|i| matches!(i, StructuralIssue::MissingSection { .. })));
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let assembler = ReportAssembler::default();
        let report = assembler.assemble(request(&[("Introduction", "one two")], OutputFormat::Review));
        let before = report.clone();
        let _ = assembler.validate(&report);
        assert_eq!(report, before);
    }

    #[test]
    fn test_append_section_updates_word_count() {
        let assembler = ReportAssembler::default();
        let mut report = assembler.assemble(request(&[("Introduction", "one two")], OutputFormat::Paper));
        let before = report.word_count;

        assembler.append_section(&mut report, "Interdisciplinary Synthesis", "three four five");
        assert_eq!(report.word_count, before + 3);
        assert_eq!(report.sections.names().last(), Some(&"Interdisciplinary Synthesis"));

        assembler.append_section(&mut report, "abstract", "Now filled.");
        assert_eq!(report.abstract_text, "Now filled.");
        assert_eq!(report.sections.len(), 8);
    }

    #[test]
    fn test_issue_display() {
        let issue = StructuralIssue::MissingSection {
            name: "Methodology".to_string(),
        };
        assert_eq!(issue.to_string(), "Section \"Methodology\" is missing or empty");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: sections are the template slots followed by the extras in parse order
        #[test]
        fn test_section_order_template_then_extras(
            extras in proptest::collection::hash_set("[A-Z][a-z]{4,9}x", 0..6)
        ) {
            let extras: Vec<String> = extras.into_iter().collect();
            let sections: lyceum_domain::SectionMap =
                extras.iter().map(|n| (n.clone(), "text".to_string())).collect();
            let request = AssemblyRequest {
                sections,
                format: OutputFormat::Review,
                ..AssemblyRequest::default()
            };

            let report = ReportAssembler::default().assemble(request);
            let expected: Vec<String> = OutputFormat::Review
                .template()
                .iter()
                .map(|s| s.name.to_string())
                .chain(extras.iter().cloned())
                .collect();
            let names: Vec<String> = report.sections.names().into_iter().map(str::to_string).collect();
            prop_assert_eq!(names, expected);
        }
    }
}
