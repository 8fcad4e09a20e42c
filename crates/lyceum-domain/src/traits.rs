//! Trait definitions for pluggable collaborators
//!
//! These traits define the seams between the core and substitutable
//! implementations. Implementations live in other crates.

use crate::{AcademicReport, Discipline};

/// Score of one discipline against a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisciplineScore {
    /// Discipline scored
    pub discipline: Discipline,
    /// Non-negative match score; higher means stronger evidence
    pub score: u32,
}

/// Strategy for classifying text into academic disciplines
///
/// Implemented by the analysis layer (lyceum-synthesizer). Alternative
/// classifiers can be substituted without touching the analyzer.
pub trait DisciplineClassifier {
    /// Score every discipline the classifier knows about
    ///
    /// Disciplines with no evidence may be omitted or reported with 0.
    fn score(&self, text: &str) -> Vec<DisciplineScore>;

    /// Short classifier name for diagnostics
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Converts an assembled report into an output representation
///
/// Implemented by front ends (lyceum-cli provides Markdown).
pub trait ReportRenderer {
    /// Error type for rendering
    type Error;

    /// Render the report
    fn render(&self, report: &AcademicReport) -> Result<String, Self::Error>;
}
