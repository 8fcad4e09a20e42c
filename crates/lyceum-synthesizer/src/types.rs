//! Analyzer session and insight types

use lyceum_domain::Discipline;
use std::collections::{BTreeMap, BTreeSet};

/// One discipline's view on the research question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplinaryPerspective {
    /// Discipline the perspective comes from
    pub discipline: Discipline,

    /// Content excerpt
    pub content: String,

    /// Source citation string
    pub source: String,

    /// Known theoretical frameworks named in the content
    pub frameworks: Vec<String>,

    /// Known methodologies named in the content
    pub methodologies: Vec<String>,
}

/// A phrase shared by two or more disciplines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvergenceTheme {
    /// Lowercase phrase
    pub theme: String,

    /// Disciplines whose perspectives contain it
    pub disciplines: BTreeSet<Discipline>,
}

/// A shared phrase that each discipline frames with different terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceTheme {
    /// Shared phrase
    pub topic: String,

    /// Qualifier terms per discipline, pairwise disjoint
    pub framings: BTreeMap<Discipline, BTreeSet<String>>,
}

/// Result of one convergence/divergence analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvergenceDivergenceInsight {
    /// Shared themes, broadest first
    pub convergence: Vec<ConvergenceTheme>,

    /// Shared themes framed differently
    pub divergence: Vec<DivergenceTheme>,
}

impl ConvergenceDivergenceInsight {
    /// True if nothing was shared
    pub fn is_empty(&self) -> bool {
        self.convergence.is_empty() && self.divergence.is_empty()
    }

    /// Convergence theme by phrase
    pub fn theme(&self, phrase: &str) -> Option<&ConvergenceTheme> {
        self.convergence.iter().find(|t| t.theme == phrase)
    }
}

/// Discipline-specific meanings of one glossary term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyRow {
    /// Glossary term
    pub term: String,

    /// Meaning per discipline
    pub meanings: BTreeMap<Discipline, &'static str>,
}
