//! Citation module - bibliographic records and their dedup identity

use crate::name::PersonName;
use std::fmt;

/// Number of normalized title characters that participate in the dedup key
pub const TITLE_KEY_PREFIX_LEN: usize = 48;

/// Resolver prefixes stripped from DOIs during normalization
const DOI_PREFIXES: &[&str] = &[
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
];

/// One bibliographic entry
///
/// Citations are created once from input data and read-only afterwards;
/// merging only happens at ingestion time inside a citation store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    /// Ordered list of full author names, casing as supplied
    pub authors: Vec<String>,

    /// Publication year
    pub year: Option<u16>,

    /// Work title
    pub title: String,

    /// Journal, conference, publisher or other container
    pub venue: String,

    /// Volume number
    pub volume: Option<String>,

    /// Issue number
    pub issue: Option<String>,

    /// Page range
    pub pages: Option<String>,

    /// Digital Object Identifier, without resolver prefix
    pub doi: Option<String>,

    /// Landing page URL
    pub url: Option<String>,

    /// Citation count reported by the retrieval source
    pub citation_count: Option<u32>,

    /// Abstract text
    pub abstract_text: Option<String>,
}

/// Mandatory bibliographic fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MandatoryField {
    /// At least one author
    Authors,
    /// Publication year
    Year,
    /// Title
    Title,
}

impl MandatoryField {
    /// Field name for diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            MandatoryField::Authors => "authors",
            MandatoryField::Year => "year",
            MandatoryField::Title => "title",
        }
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized (first-author surname, year, title prefix) identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CitationKey {
    /// Lowercased alphanumeric surname of the first author
    pub surname: String,
    /// Publication year
    pub year: Option<u16>,
    /// Normalized title prefix
    pub title_prefix: String,
}

impl fmt::Display for CitationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{}:{}:{}", self.surname, year, self.title_prefix),
            None => write!(f, "{}:n.d.:{}", self.surname, self.title_prefix),
        }
    }
}

impl Citation {
    /// Create a citation from its mandatory fields plus venue
    pub fn new(
        authors: Vec<String>,
        year: Option<u16>,
        title: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            authors,
            year,
            title: title.into(),
            venue: venue.into(),
            ..Self::default()
        }
    }

    /// Set volume
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    /// Set issue
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    /// Set pages
    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    /// Set DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Set URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set citation count
    pub fn with_citation_count(mut self, count: u32) -> Self {
        self.citation_count = Some(count);
        self
    }

    /// Set abstract
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    /// Trim every field, drop blank authors, collapse blank optionals to
    /// `None` and strip resolver prefixes from the DOI.
    ///
    /// Author casing is preserved.
    pub fn normalized(self) -> Self {
        let doi = clean_optional(self.doi).map(|doi| {
            let lower = doi.to_lowercase();
            DOI_PREFIXES
                .iter()
                .find(|prefix| lower.starts_with(*prefix))
                .map(|prefix| doi[prefix.len()..].trim().to_string())
                .unwrap_or(doi)
        });

        Self {
            authors: self
                .authors
                .into_iter()
                .map(|a| a.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|a| !a.is_empty())
                .collect(),
            year: self.year,
            title: self.title.trim().to_string(),
            venue: self.venue.trim().to_string(),
            volume: clean_optional(self.volume),
            issue: clean_optional(self.issue),
            pages: clean_optional(self.pages),
            doi: doi.filter(|d| !d.is_empty()),
            url: clean_optional(self.url),
            citation_count: self.citation_count,
            abstract_text: clean_optional(self.abstract_text),
        }
    }

    /// Parsed first author, if any
    pub fn first_author(&self) -> Option<PersonName> {
        self.authors.first().map(|a| PersonName::parse(a))
    }

    /// Family name of the first author as written
    pub fn first_author_surname(&self) -> Option<String> {
        self.first_author()
            .map(|n| n.family)
            .filter(|f| !f.is_empty())
    }

    /// Compute the dedup key
    ///
    /// # Examples
    ///
    /// ```
    /// use lyceum_domain::Citation;
    ///
    /// let a = Citation::new(vec!["Jane Doe".into()], Some(2021), "Sleep and Memory", "Nature");
    /// let b = Citation::new(vec!["Doe, J.".into()], Some(2021), "Sleep and memory.", "");
    /// assert_eq!(a.dedup_key(), b.dedup_key());
    /// ```
    pub fn dedup_key(&self) -> CitationKey {
        let surname = self
            .first_author_surname()
            .map(|s| s.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect())
            .unwrap_or_default();

        CitationKey {
            surname,
            year: self.year,
            title_prefix: normalize_title(&self.title)
                .chars()
                .take(TITLE_KEY_PREFIX_LEN)
                .collect::<String>()
                .trim_end()
                .to_string(),
        }
    }

    /// Mandatory fields that are absent
    pub fn missing_mandatory(&self) -> Vec<MandatoryField> {
        let mut missing = Vec::new();
        if self.authors.is_empty() {
            missing.push(MandatoryField::Authors);
        }
        if self.year.is_none() {
            missing.push(MandatoryField::Year);
        }
        if self.title.trim().is_empty() {
            missing.push(MandatoryField::Title);
        }
        missing
    }

    /// Number of populated fields, used to pick the richer record on merge
    pub fn populated_fields(&self) -> usize {
        [
            !self.authors.is_empty(),
            self.year.is_some(),
            !self.title.is_empty(),
            !self.venue.is_empty(),
            self.volume.is_some(),
            self.issue.is_some(),
            self.pages.is_some(),
            self.doi.is_some(),
            self.url.is_some(),
            self.citation_count.is_some(),
            self.abstract_text.is_some(),
        ]
        .iter()
        .filter(|populated| **populated)
        .count()
    }

    /// Merge a duplicate record into this one
    ///
    /// The record with more populated fields becomes the base; each field
    /// then keeps the non-empty, longer value. Author lists keep the longer
    /// list and citation counts keep the larger count.
    pub fn merge(&mut self, other: Citation) {
        let mut other = other;
        if other.populated_fields() > self.populated_fields() {
            std::mem::swap(self, &mut other);
        }

        if other.authors.len() > self.authors.len() {
            self.authors = other.authors;
        }
        self.year = self.year.or(other.year);
        merge_text(&mut self.title, other.title);
        merge_text(&mut self.venue, other.venue);
        merge_optional(&mut self.volume, other.volume);
        merge_optional(&mut self.issue, other.issue);
        merge_optional(&mut self.pages, other.pages);
        merge_optional(&mut self.doi, other.doi);
        merge_optional(&mut self.url, other.url);
        merge_optional(&mut self.abstract_text, other.abstract_text);
        self.citation_count = match (self.citation_count, other.citation_count) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }
}

/// Lowercase, replace non-alphanumerics with spaces, collapse whitespace
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn merge_text(target: &mut String, candidate: String) {
    if candidate.chars().count() > target.chars().count() {
        *target = candidate;
    }
}

fn merge_optional(target: &mut Option<String>, candidate: Option<String>) {
    match (target.as_mut(), candidate) {
        (None, candidate) => *target = candidate,
        (Some(current), Some(candidate)) => merge_text(current, candidate),
        (Some(_), None) => {}
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the dedup key ignores surrounding whitespace and title casing
        #[test]
        fn test_dedup_key_stable_under_normalization(
            surname in "[A-Z][a-z]{2,10}",
            title in "[A-Za-z ]{1,60}",
            year in 1900u16..2100,
        ) {
            let a = Citation::new(vec![format!("Ann {}", surname)], Some(year), title.clone(), "");
            let b = Citation::new(vec![format!("  Ann {}  ", surname)], Some(year), format!("  {}  ", title.to_uppercase()), "")
                .normalized();
            prop_assert_eq!(a.dedup_key(), b.dedup_key());
        }

        /// Property: merging a record with itself changes nothing
        #[test]
        fn test_self_merge_is_identity(title in "[A-Za-z ]{1,40}", count in proptest::option::of(0u32..1000)) {
            let citation = Citation {
                authors: vec!["Ann Lee".to_string()],
                year: Some(2000),
                title,
                citation_count: count,
                ..Citation::default()
            };
            let mut merged = citation.clone();
            merged.merge(citation.clone());
            prop_assert_eq!(merged, citation);
        }
    }
}
