//! Citation styles and output formats

use crate::template::{self, TemplateSlot};
use std::fmt;

/// Supported bibliography styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CitationStyle {
    /// American Psychological Association, 7th edition
    #[default]
    Apa,
    /// Modern Language Association, 9th edition
    Mla,
    /// Chicago Manual of Style, author-date
    Chicago,
    /// Institute of Electrical and Electronics Engineers
    Ieee,
    /// American Medical Association
    Ama,
}

impl CitationStyle {
    /// Every style
    pub const ALL: [CitationStyle; 5] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Ieee,
        CitationStyle::Ama,
    ];

    /// Style name
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::Chicago => "Chicago",
            CitationStyle::Ieee => "IEEE",
            CitationStyle::Ama => "AMA",
        }
    }

    /// Parse a style name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "apa" => Some(CitationStyle::Apa),
            "mla" => Some(CitationStyle::Mla),
            "chicago" => Some(CitationStyle::Chicago),
            "ieee" => Some(CitationStyle::Ieee),
            "ama" => Some(CitationStyle::Ama),
            _ => None,
        }
    }

    /// Whether entries are listed in first-cited order and numbered
    pub fn is_numbered(&self) -> bool {
        matches!(self, CitationStyle::Ieee)
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid citation style: {}", s))
    }
}

/// Output document formats, each with a fixed section template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Full research paper
    #[default]
    Paper,
    /// Literature review
    Review,
    /// Research proposal
    Proposal,
    /// Stand-alone abstract
    Abstract,
    /// Presentation outline
    Presentation,
}

impl OutputFormat {
    /// Every format
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Paper,
        OutputFormat::Review,
        OutputFormat::Proposal,
        OutputFormat::Abstract,
        OutputFormat::Presentation,
    ];

    /// Format name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Paper => "paper",
            OutputFormat::Review => "review",
            OutputFormat::Proposal => "proposal",
            OutputFormat::Abstract => "abstract",
            OutputFormat::Presentation => "presentation",
        }
    }

    /// Parse a format name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paper" => Some(OutputFormat::Paper),
            "review" => Some(OutputFormat::Review),
            "proposal" => Some(OutputFormat::Proposal),
            "abstract" => Some(OutputFormat::Abstract),
            "presentation" => Some(OutputFormat::Presentation),
            _ => None,
        }
    }

    /// Ordered template slots for this format
    pub fn template(&self) -> &'static [TemplateSlot] {
        match self {
            OutputFormat::Paper => template::PAPER,
            OutputFormat::Review => template::REVIEW,
            OutputFormat::Proposal => template::PROPOSAL,
            OutputFormat::Abstract => template::ABSTRACT_ONLY,
            OutputFormat::Presentation => template::PRESENTATION,
        }
    }

    /// Whether a non-empty abstract is required
    pub fn requires_abstract(&self) -> bool {
        matches!(
            self,
            OutputFormat::Paper | OutputFormat::Review | OutputFormat::Abstract
        )
    }

    /// Whether a bibliography is required
    pub fn requires_references(&self) -> bool {
        matches!(
            self,
            OutputFormat::Paper | OutputFormat::Review | OutputFormat::Proposal
        )
    }

    /// Whether the template carries an Abstract slot
    pub fn has_abstract_slot(&self) -> bool {
        self.template().iter().any(|slot| slot.name == template::ABSTRACT_SLOT)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid output format: {}", s))
    }
}
