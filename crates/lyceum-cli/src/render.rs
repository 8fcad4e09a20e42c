//! Report renderers.

use crate::error::CliError;
use lyceum_domain::traits::ReportRenderer;
use lyceum_domain::{AcademicReport, ResearchMetadata};
use serde_json::json;
use std::fmt::Write as _;

/// Heading under which the bibliography is printed.
pub const REFERENCES_HEADING: &str = "References";

/// Renders a report as Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    /// Append a metadata footer
    pub include_metadata: bool,
}

impl MarkdownRenderer {
    /// Create a renderer that also prints the metadata footer.
    pub fn with_metadata() -> Self {
        Self {
            include_metadata: true,
        }
    }
}

impl ReportRenderer for MarkdownRenderer {
    type Error = CliError;

    fn render(&self, report: &AcademicReport) -> Result<String, Self::Error> {
        let mut out = String::new();

        if !report.title.trim().is_empty() {
            let _ = writeln!(out, "# {}\n", report.title.trim());
        }
        if !report.keywords.is_empty() {
            let _ = writeln!(out, "**Keywords:** {}\n", report.keywords.join(", "));
        }

        for section in &report.sections {
            let _ = writeln!(out, "## {}\n", section.name);
            if !section.content.trim().is_empty() {
                let _ = writeln!(out, "{}\n", section.content.trim_end());
            }
        }

        if !report.bibliography.trim().is_empty() {
            let _ = writeln!(out, "## {}\n", REFERENCES_HEADING);
            let _ = writeln!(out, "{}\n", report.bibliography.trim_end());
        }

        if self.include_metadata {
            out.push_str("---\n\n");
            let _ = writeln!(
                out,
                "*Style: {} | Format: {} | Words: {}*",
                report.style, report.format, report.word_count
            );
            if let Some(metadata) = &report.metadata {
                write_metadata(&mut out, metadata);
            }
        }

        Ok(out.trim_end().to_string() + "\n")
    }
}

fn write_metadata(out: &mut String, metadata: &ResearchMetadata) {
    out.push('\n');
    let _ = writeln!(out, "- Question: {}", metadata.effective_question());
    let _ = writeln!(out, "- Discipline: {}", metadata.discipline());
    if metadata.sources_consulted() > 0 {
        let _ = writeln!(out, "- Sources consulted: {}", metadata.sources_consulted());
    }
    if let Some((start, end)) = metadata.date_range() {
        let _ = writeln!(out, "- Date range: {}-{}", start, end);
    }
    if !metadata.key_authors().is_empty() {
        let _ = writeln!(out, "- Key authors: {}", metadata.key_authors().join(", "));
    }
    if !metadata.key_theories().is_empty() {
        let _ = writeln!(out, "- Key theories: {}", metadata.key_theories().join(", "));
    }
    if !metadata.methodologies().is_empty() {
        let _ = writeln!(out, "- Methodologies: {}", metadata.methodologies().join(", "));
    }
}

/// Renders a report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    type Error = CliError;

    fn render(&self, report: &AcademicReport) -> Result<String, Self::Error> {
        let sections: Vec<serde_json::Value> = report
            .sections
            .iter()
            .map(|s| json!({ "name": s.name, "content": s.content }))
            .collect();

        let metadata = report.metadata.as_ref().map(|m| {
            json!({
                "original_question": m.original_question(),
                "refined_question": m.refined_question(),
                "discipline": m.discipline().to_string(),
                "sources_consulted": m.sources_consulted(),
                "peer_reviewed_sources": m.peer_reviewed_sources(),
                "date_range": m.date_range().map(|(start, end)| [start, end]),
                "key_authors": m.key_authors(),
                "key_theories": m.key_theories(),
                "methodologies": m.methodologies(),
                "created_at": m.created_at(),
            })
        });

        let value = json!({
            "id": report.id.to_string(),
            "title": report.title,
            "abstract": report.abstract_text,
            "keywords": report.keywords,
            "sections": sections,
            "bibliography": report.bibliography,
            "metadata": metadata,
            "style": report.style.as_str(),
            "format": report.format.as_str(),
            "word_count": report.word_count,
            "generated_at": report.generated_at,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyceum_domain::{CitationStyle, Discipline, DisciplineTag, OutputFormat};

    fn sample_report() -> AcademicReport {
        let mut report = AcademicReport::new("Sleep and Memory", CitationStyle::Apa, OutputFormat::Abstract);
        report.sections.insert("Abstract", "Sleep helps memory.");
        report.abstract_text = "Sleep helps memory.".to_string();
        report.keywords = vec!["Psychology".to_string()];
        report.set_bibliography("Walker, M. (2017). Why we sleep. Scribner.");
        report.attach_metadata(
            ResearchMetadata::builder("Does sleep help memory?")
                .discipline(DisciplineTag::Specific(Discipline::Psychology))
                .date_range(2017, 2010)
                .build(),
        );
        report.refresh_word_count();
        report
    }

    #[test]
    fn test_markdown_layout() {
        let output = MarkdownRenderer::default().render(&sample_report()).unwrap();
        assert_eq!(
            output,
            "# Sleep and Memory\n\n**Keywords:** Psychology\n\n## Abstract\n\nSleep helps memory.\n\n\
             ## References\n\nWalker, M. (2017). Why we sleep. Scribner.\n"
        );
    }

    #[test]
    fn test_markdown_metadata_footer() {
        let output = MarkdownRenderer::with_metadata().render(&sample_report()).unwrap();
        assert!(output.contains("*Style: APA | Format: abstract | Words: 6*"));
        assert!(output.contains("- Question: Does sleep help memory?"));
        assert!(output.contains("- Discipline: Psychology"));
        assert!(output.contains("- Date range: 2010-2017"));
    }

    #[test]
    fn test_empty_sections_keep_heading() {
        let mut report = AcademicReport::new("", CitationStyle::Apa, OutputFormat::Abstract);
        report.sections.insert("Abstract", "");
        let output = MarkdownRenderer::default().render(&report).unwrap();
        assert_eq!(output, "## Abstract\n");
    }

    #[test]
    fn test_json_fields() {
        let output = JsonRenderer.render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "Sleep and Memory");
        assert_eq!(value["style"], "APA");
        assert_eq!(value["sections"][0]["name"], "Abstract");
        assert_eq!(value["metadata"]["date_range"][0], 2010);
        assert_eq!(value["word_count"], 6);
    }
}
