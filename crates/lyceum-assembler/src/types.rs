//! Assembly inputs and validation findings

use lyceum_domain::{CitationStyle, OutputFormat, ResearchMetadata, SectionMap};
use lyceum_parser::ParsedDocument;
use std::fmt;

/// Everything needed to build one report
#[derive(Debug, Clone, Default)]
pub struct AssemblyRequest {
    /// Report title
    pub title: String,

    /// Text that preceded the first section heading
    pub preamble: String,

    /// Parsed sections in document order
    pub sections: SectionMap,

    /// Rendered bibliography
    pub bibliography: String,

    /// Research provenance
    pub metadata: Option<ResearchMetadata>,

    /// Report keywords
    pub keywords: Vec<String>,

    /// Citation style of the bibliography
    pub style: CitationStyle,

    /// Output format whose template is applied
    pub format: OutputFormat,
}

impl AssemblyRequest {
    /// Build a request from a parsed document
    ///
    /// The parsed title (if any) becomes the report title and the raw
    /// bibliography block is carried over unrendered.
    pub fn from_parsed(doc: ParsedDocument, style: CitationStyle, format: OutputFormat) -> Self {
        Self {
            title: doc.title.unwrap_or_default(),
            preamble: doc.preamble,
            sections: doc.sections,
            bibliography: doc.bibliography,
            metadata: None,
            keywords: Vec::new(),
            style,
            format,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the bibliography (typically with a rendered one)
    pub fn with_bibliography(mut self, bibliography: impl Into<String>) -> Self {
        self.bibliography = bibliography.into();
        self
    }

    /// Attach research metadata
    pub fn with_metadata(mut self, metadata: ResearchMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

/// A structural gap found by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralIssue {
    /// Format requires an abstract but it is empty
    EmptyAbstract,

    /// Report contains no words
    ZeroWordCount,

    /// Format requires references but the bibliography is empty
    MissingBibliography,

    /// Two sections share a name, ignoring case
    DuplicateSection {
        /// Name of the first colliding section
        name: String,
    },

    /// Template slot absent or empty
    MissingSection {
        /// Canonical slot name
        name: String,
    },
}

impl fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralIssue::EmptyAbstract => f.write_str("Abstract is empty"),
            StructuralIssue::ZeroWordCount => f.write_str("Report has no content"),
            StructuralIssue::MissingBibliography => f.write_str("Bibliography is missing"),
            StructuralIssue::DuplicateSection { name } => {
                write!(f, "Section \"{}\" appears more than once", name)
            }
            StructuralIssue::MissingSection { name } => {
                write!(f, "Section \"{}\" is missing or empty", name)
            }
        }
    }
}
