//! Research session provenance

use crate::discipline::DisciplineTag;
use std::time::{SystemTime, UNIX_EPOCH};

/// Provenance of a research session
///
/// Immutable once built: fields are only reachable through accessors and
/// the only constructor is [`ResearchMetadataBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchMetadata {
    original_question: String,
    refined_question: Option<String>,
    discipline: DisciplineTag,
    search_strategy: String,
    sources_consulted: u32,
    peer_reviewed_sources: u32,
    date_range: Option<(u16, u16)>,
    key_authors: Vec<String>,
    key_theories: Vec<String>,
    methodologies: Vec<String>,
    created_at: u64,
}

impl ResearchMetadata {
    /// Start building metadata for a research question
    pub fn builder(original_question: impl Into<String>) -> ResearchMetadataBuilder {
        ResearchMetadataBuilder::new(original_question)
    }

    /// The question as originally asked
    pub fn original_question(&self) -> &str {
        &self.original_question
    }

    /// The refined question, if the session produced one
    pub fn refined_question(&self) -> Option<&str> {
        self.refined_question.as_deref()
    }

    /// The refined question when present, otherwise the original
    pub fn effective_question(&self) -> &str {
        self.refined_question().unwrap_or(&self.original_question)
    }

    /// Discipline tag
    pub fn discipline(&self) -> DisciplineTag {
        self.discipline
    }

    /// Search strategy description
    pub fn search_strategy(&self) -> &str {
        &self.search_strategy
    }

    /// Number of sources consulted
    pub fn sources_consulted(&self) -> u32 {
        self.sources_consulted
    }

    /// Number of peer-reviewed sources
    pub fn peer_reviewed_sources(&self) -> u32 {
        self.peer_reviewed_sources
    }

    /// Publication year range covered (inclusive)
    pub fn date_range(&self) -> Option<(u16, u16)> {
        self.date_range
    }

    /// Key authors in the field
    pub fn key_authors(&self) -> &[String] {
        &self.key_authors
    }

    /// Key theories
    pub fn key_theories(&self) -> &[String] {
        &self.key_theories
    }

    /// Methodologies encountered
    pub fn methodologies(&self) -> &[String] {
        &self.methodologies
    }

    /// Creation timestamp (Unix seconds)
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Share of peer-reviewed sources as a percentage in [0, 100]
    ///
    /// Returns 0 when no sources were consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lyceum_domain::ResearchMetadata;
    ///
    /// let metadata = ResearchMetadata::builder("How does sleep affect memory?")
    ///     .sources(40, 30)
    ///     .build();
    /// assert_eq!(metadata.peer_reviewed_percentage(), 75.0);
    /// ```
    pub fn peer_reviewed_percentage(&self) -> f64 {
        if self.sources_consulted == 0 {
            return 0.0;
        }
        f64::from(self.peer_reviewed_sources) / f64::from(self.sources_consulted) * 100.0
    }
}

/// Builder for [`ResearchMetadata`]
#[derive(Debug, Clone)]
pub struct ResearchMetadataBuilder {
    inner: ResearchMetadata,
}

impl ResearchMetadataBuilder {
    fn new(original_question: impl Into<String>) -> Self {
        Self {
            inner: ResearchMetadata {
                original_question: original_question.into().trim().to_string(),
                refined_question: None,
                discipline: DisciplineTag::General,
                search_strategy: String::new(),
                sources_consulted: 0,
                peer_reviewed_sources: 0,
                date_range: None,
                key_authors: Vec::new(),
                key_theories: Vec::new(),
                methodologies: Vec::new(),
                created_at: 0,
            },
        }
    }

    /// Set the refined question
    pub fn refined_question(mut self, question: impl Into<String>) -> Self {
        let question = question.into().trim().to_string();
        self.inner.refined_question = Some(question).filter(|q| !q.is_empty());
        self
    }

    /// Set the discipline tag
    pub fn discipline(mut self, discipline: DisciplineTag) -> Self {
        self.inner.discipline = discipline;
        self
    }

    /// Set the search strategy description
    pub fn search_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.inner.search_strategy = strategy.into();
        self
    }

    /// Set source counts
    ///
    /// The peer-reviewed count is clamped to the consulted count.
    pub fn sources(mut self, consulted: u32, peer_reviewed: u32) -> Self {
        self.inner.sources_consulted = consulted;
        self.inner.peer_reviewed_sources = peer_reviewed.min(consulted);
        self
    }

    /// Set the covered year range; reversed bounds are swapped
    pub fn date_range(mut self, start: u16, end: u16) -> Self {
        self.inner.date_range = Some((start.min(end), start.max(end)));
        self
    }

    /// Set key authors
    pub fn key_authors(mut self, authors: Vec<String>) -> Self {
        self.inner.key_authors = authors;
        self
    }

    /// Set key theories
    pub fn key_theories(mut self, theories: Vec<String>) -> Self {
        self.inner.key_theories = theories;
        self
    }

    /// Set methodologies
    pub fn methodologies(mut self, methodologies: Vec<String>) -> Self {
        self.inner.methodologies = methodologies;
        self
    }

    /// Override the creation timestamp (Unix seconds)
    pub fn created_at(mut self, timestamp: u64) -> Self {
        self.inner.created_at = timestamp;
        self
    }

    /// Finish building; stamps the current time unless overridden
    pub fn build(mut self) -> ResearchMetadata {
        if self.inner.created_at == 0 {
            self.inner.created_at = unix_now();
        }
        self.inner
    }
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
