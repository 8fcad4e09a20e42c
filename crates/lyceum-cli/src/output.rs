//! Output formatting for the CLI.

use crate::config::OutputMode;
use crate::error::Result;
use crate::render::{JsonRenderer, MarkdownRenderer};
use colored::*;
use lyceum_assembler::StructuralIssue;
use lyceum_citations::{CitationWarning, RenderedBibliography};
use lyceum_domain::traits::{DisciplineScore, ReportRenderer};
use lyceum_domain::{AcademicReport, Discipline};
use lyceum_synthesizer::{ConvergenceDivergenceInsight, TerminologyRow};
use serde_json::json;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    mode: OutputMode,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(mode: OutputMode, color_enabled: bool) -> Self {
        Self { mode, color_enabled }
    }

    /// Output mode in effect.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Format an assembled report.
    pub fn format_report(&self, report: &AcademicReport) -> Result<String> {
        match self.mode {
            OutputMode::Text => MarkdownRenderer::with_metadata().render(report),
            OutputMode::Json => JsonRenderer.render(report),
            OutputMode::Quiet => Ok(format!(
                "{} ({} sections, {} words)",
                report.id,
                report.sections.len(),
                report.word_count
            )),
        }
    }

    /// Format a rendered bibliography.
    pub fn format_bibliography(&self, bibliography: &RenderedBibliography) -> Result<String> {
        match self.mode {
            OutputMode::Json => {
                let warnings: Vec<String> = bibliography.warnings.iter().map(|w| w.to_string()).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "style": bibliography.style.as_str(),
                    "entries": bibliography.entries,
                    "warnings": warnings,
                }))?)
            }
            OutputMode::Text => {
                if bibliography.entries.is_empty() {
                    return Ok(self.colorize("No citations found.", "yellow"));
                }
                Ok(bibliography.to_text())
            }
            OutputMode::Quiet => Ok(bibliography.entries.len().to_string()),
        }
    }

    /// Format discipline scores.
    pub fn format_scores(&self, scores: &[DisciplineScore]) -> Result<String> {
        match self.mode {
            OutputMode::Json => {
                let rows: Vec<serde_json::Value> = scores
                    .iter()
                    .map(|s| {
                        json!({
                            "discipline": s.discipline.name(),
                            "id": s.discipline.id(),
                            "group": s.discipline.group().as_str(),
                            "score": s.score,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputMode::Text => {
                if scores.is_empty() {
                    return Ok(self.colorize("No disciplines identified.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rank", "Discipline", "Group", "Score"]);
                for (rank, score) in scores.iter().enumerate() {
                    builder.push_record([
                        (rank + 1).to_string(),
                        score.discipline.name().to_string(),
                        score.discipline.group().as_str().to_string(),
                        score.score.to_string(),
                    ]);
                }
                Ok(self.finish_table(builder))
            }
            OutputMode::Quiet => Ok(scores
                .iter()
                .map(|s| s.discipline.id())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format convergence and divergence themes.
    pub fn format_insight(&self, insight: &ConvergenceDivergenceInsight) -> Result<String> {
        match self.mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(&insight_json(insight))?),
            OutputMode::Quiet => Ok(insight
                .convergence
                .iter()
                .map(|t| t.theme.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputMode::Text => {
                if insight.is_empty() {
                    return Ok(self.colorize("No shared themes found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Theme", "Disciplines", "Framings"]);
                for theme in &insight.convergence {
                    let framings = insight
                        .divergence
                        .iter()
                        .find(|d| d.topic == theme.theme)
                        .map(|d| {
                            d.framings
                                .iter()
                                .map(|(discipline, terms)| {
                                    format!(
                                        "{}: {}",
                                        discipline,
                                        terms.iter().cloned().collect::<Vec<_>>().join(", ")
                                    )
                                })
                                .collect::<Vec<_>>()
                                .join("\n")
                        })
                        .unwrap_or_default();
                    builder.push_record([
                        theme.theme.clone(),
                        discipline_list(theme.disciplines.iter()),
                        framings,
                    ]);
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Format the translation of one term.
    pub fn format_translation(&self, term: &str, meanings: &BTreeMap<Discipline, &'static str>) -> Result<String> {
        let rows = [TerminologyRow {
            term: term.to_string(),
            meanings: meanings.clone(),
        }];
        if meanings.is_empty() && self.mode == OutputMode::Text {
            return Ok(self.warning(&format!("No glossary entry for '{}'", term)));
        }
        self.format_terminology(&rows)
    }

    /// Format terminology rows.
    pub fn format_terminology(&self, rows: &[TerminologyRow]) -> Result<String> {
        match self.mode {
            OutputMode::Json => {
                let value: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|row| {
                        let meanings: serde_json::Map<String, serde_json::Value> = row
                            .meanings
                            .iter()
                            .map(|(d, meaning)| (d.id(), json!(meaning)))
                            .collect();
                        json!({ "term": row.term, "meanings": meanings })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputMode::Quiet => Ok(rows.iter().map(|r| r.term.clone()).collect::<Vec<_>>().join("\n")),
            OutputMode::Text => {
                if rows.is_empty() {
                    return Ok(self.colorize("No glossary terms found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Term", "Discipline", "Meaning"]);
                for row in rows {
                    for (discipline, meaning) in &row.meanings {
                        builder.push_record([row.term.clone(), discipline.to_string(), meaning.to_string()]);
                    }
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Format structural issues, one per line.
    pub fn format_issues(&self, issues: &[StructuralIssue]) -> String {
        issues
            .iter()
            .map(|issue| self.warning(&issue.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format citation warnings, one per line.
    pub fn format_citation_warnings(&self, warnings: &[CitationWarning]) -> String {
        warnings
            .iter()
            .map(|w| self.warning(&w.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON view of an insight.
pub fn insight_json(insight: &ConvergenceDivergenceInsight) -> serde_json::Value {
    let convergence: Vec<serde_json::Value> = insight
        .convergence
        .iter()
        .map(|t| {
            json!({
                "theme": t.theme,
                "disciplines": t.disciplines.iter().map(|d| d.id()).collect::<Vec<_>>(),
            })
        })
        .collect();
    let divergence: Vec<serde_json::Value> = insight
        .divergence
        .iter()
        .map(|d| {
            let framings: serde_json::Map<String, serde_json::Value> =
                d.framings.iter().map(|(discipline, terms)| (discipline.id(), json!(terms))).collect();
            json!({ "topic": d.topic, "framings": framings })
        })
        .collect();
    json!({ "convergence": convergence, "divergence": divergence })
}

fn discipline_list<'a>(disciplines: impl Iterator<Item = &'a Discipline>) -> String {
    disciplines.map(|d| d.name()).collect::<Vec<_>>().join(", ")
}
