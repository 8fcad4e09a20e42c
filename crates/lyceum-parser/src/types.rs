//! Parse results and diagnostics

use lyceum_domain::SectionMap;
use std::fmt;

/// Kind of recoverable problem found while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Non-empty input without any headings
    MalformedInput,
    /// Heading marker with no heading text
    EmptyHeading,
    /// Heading repeated; content was merged into the first occurrence
    DuplicateSection,
}

impl DiagnosticKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedInput => "malformed_input",
            DiagnosticKind::EmptyHeading => "empty_heading",
            DiagnosticKind::DuplicateSection => "duplicate_section",
        }
    }
}

/// A recoverable parsing problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// 1-based input line, 0 when the problem concerns the whole input
    pub line: usize,
    /// Human-readable detail
    pub message: String,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}: {}", self.kind.as_str(), self.message)
        } else {
            write!(f, "line {}: {}: {}", self.line, self.kind.as_str(), self.message)
        }
    }
}

/// Result of splitting a Markdown document into sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Text of a lone top-level heading above the section headings
    pub title: Option<String>,

    /// Content before the first section heading
    pub preamble: String,

    /// Sections in document order, bibliography excluded
    pub sections: SectionMap,

    /// Concatenated content of every reference-list section
    pub bibliography: String,

    /// Heading level that delimited sections, `None` when there were none
    pub heading_level: Option<u8>,

    /// Recoverable problems
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParsedDocument {
    /// Whether nothing at all was recovered
    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.sections.is_empty() && self.bibliography.is_empty()
    }

    /// Whether any diagnostic of the given kind was emitted
    pub fn has_diagnostic(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }
}
