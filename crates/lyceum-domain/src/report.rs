//! Report module - the assembled academic document

use crate::format::{CitationStyle, OutputFormat};
use crate::metadata::{unix_now, ResearchMetadata};
use crate::template::ABSTRACT_SLOT;
use std::fmt;

/// Unique identifier for a report based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable, so reports generated
/// in sequence list in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(u128);

impl ReportId {
    /// Generate a new UUIDv7-based ReportId
    ///
    /// # Examples
    ///
    /// ```
    /// use lyceum_domain::ReportId;
    ///
    /// let id = ReportId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ReportId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ReportId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Count whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A named block of report content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name (heading text)
    pub name: String,
    /// Section body
    pub content: String,
}

/// Ordered section-name to content mapping
///
/// Insertion order is document order. Names are unique by exact match;
/// inserting an existing name replaces its content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section, returning the previous content
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) -> Option<String> {
        let name = name.into();
        let content = content.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.sections[idx].content, content)),
            None => {
                self.sections.push(Section { name, content });
                None
            }
        }
    }

    /// Append content to a section, creating it if needed
    ///
    /// Existing non-empty content is separated from the new text by a
    /// blank line.
    pub fn append(&mut self, name: impl Into<String>, content: &str) {
        let name = name.into();
        match self.position(&name) {
            Some(idx) => {
                let existing = &mut self.sections[idx].content;
                if existing.is_empty() {
                    existing.push_str(content);
                } else if !content.is_empty() {
                    existing.push_str("\n\n");
                    existing.push_str(content);
                }
            }
            None => self.sections.push(Section {
                name,
                content: content.to_string(),
            }),
        }
    }

    /// Content by exact name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.sections[idx].content.as_str())
    }

    /// First section whose name matches case-insensitively
    pub fn get_ignore_case(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Whether a section with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove a section by exact name
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.sections.remove(idx).content)
    }

    /// Section names in document order
    pub fn names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Iterate sections in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether there are no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Move the named sections to the front in the given order
    ///
    /// Names that do not exist are ignored; sections not named keep their
    /// relative order after the reordered ones.
    pub fn reorder(&mut self, order: &[&str]) {
        let mut rest = std::mem::take(&mut self.sections);
        for name in order {
            if let Some(idx) = rest.iter().position(|s| s.name == *name) {
                self.sections.push(rest.remove(idx));
            }
        }
        self.sections.extend(rest);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }
}

impl IntoIterator for SectionMap {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for SectionMap {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut map = SectionMap::new();
        for (name, content) in iter {
            map.insert(name, content);
        }
        map
    }
}

/// The assembled academic document
///
/// Mutable while being assembled; renderers receive it by shared
/// reference. `word_count` is a snapshot taken at assembly time; call
/// [`AcademicReport::refresh_word_count`] after mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicReport {
    /// Unique identifier
    pub id: ReportId,

    /// Report title
    pub title: String,

    /// Abstract text
    pub abstract_text: String,

    /// Keywords
    pub keywords: Vec<String>,

    /// Ordered sections
    pub sections: SectionMap,

    /// Rendered bibliography
    pub bibliography: String,

    /// Research provenance
    pub metadata: Option<ResearchMetadata>,

    /// Citation style of the bibliography
    pub style: CitationStyle,

    /// Output format whose template governs the section order
    pub format: OutputFormat,

    /// Word count snapshot
    pub word_count: usize,

    /// Generation timestamp (Unix seconds)
    pub generated_at: u64,
}

impl AcademicReport {
    /// Create an empty report
    pub fn new(title: impl Into<String>, style: CitationStyle, format: OutputFormat) -> Self {
        Self {
            id: ReportId::new(),
            title: title.into(),
            abstract_text: String::new(),
            keywords: Vec::new(),
            sections: SectionMap::new(),
            bibliography: String::new(),
            metadata: None,
            style,
            format,
            word_count: 0,
            generated_at: unix_now(),
        }
    }

    /// Count words across title, abstract and sections
    ///
    /// The bibliography is excluded. When an Abstract section exists the
    /// abstract text is counted through that section only.
    pub fn compute_word_count(&self) -> usize {
        let abstract_words = if self.sections.get_ignore_case(ABSTRACT_SLOT).is_some() {
            0
        } else {
            count_words(&self.abstract_text)
        };

        count_words(&self.title)
            + abstract_words
            + self.sections.iter().map(|s| count_words(&s.content)).sum::<usize>()
    }

    /// Recompute and store the word count
    pub fn refresh_word_count(&mut self) -> usize {
        self.word_count = self.compute_word_count();
        self.word_count
    }

    /// Attach research metadata
    pub fn attach_metadata(&mut self, metadata: ResearchMetadata) {
        self.metadata = Some(metadata);
    }

    /// Replace the bibliography
    pub fn set_bibliography(&mut self, bibliography: impl Into<String>) {
        self.bibliography = bibliography.into();
    }

    /// Explicitly reorder sections (see [`SectionMap::reorder`])
    pub fn reorder_sections(&mut self, order: &[&str]) {
        self.sections.reorder(order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = SectionMap::new();
        map.insert("Introduction", "a");
        map.insert("Findings", "b");
        let previous = map.insert("Introduction", "c");

        assert_eq!(previous.as_deref(), Some("a"));
        assert_eq!(map.names(), vec!["Introduction", "Findings"]);
        assert_eq!(map.get("Introduction"), Some("c"));
    }

    #[test]
    fn test_append_merges_with_blank_line() {
        let mut map = SectionMap::new();
        map.append("Notes", "first");
        map.append("Notes", "second");
        assert_eq!(map.get("Notes"), Some("first\n\nsecond"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_reorder() {
        let mut map: SectionMap = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();
        map.reorder(&["C", "missing", "A"]);
        assert_eq!(map.names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_get_ignore_case() {
        let map: SectionMap = [("Methods", "x")].into_iter().collect();
        assert!(map.get_ignore_case("methods").is_some());
        assert!(map.get("methods").is_none());
    }

    #[test]
    fn test_word_count_excludes_bibliography() {
        let mut report = AcademicReport::new("Two words", CitationStyle::Apa, OutputFormat::Paper);
        report.sections.insert("Introduction", "one two three");
        report.set_bibliography("Smith, J. (2020). Many words here.");
        assert_eq!(report.compute_word_count(), 5);
    }

    #[test]
    fn test_word_count_counts_abstract_once() {
        let mut report = AcademicReport::new("", CitationStyle::Apa, OutputFormat::Paper);
        report.abstract_text = "four words of abstract".to_string();
        assert_eq!(report.compute_word_count(), 4);

        report.sections.insert("Abstract", "four words of abstract");
        assert_eq!(report.compute_word_count(), 4);
    }

    #[test]
    fn test_refresh_word_count() {
        let mut report = AcademicReport::new("Title", CitationStyle::Mla, OutputFormat::Review);
        assert_eq!(report.word_count, 0);
        report.sections.insert("Introduction", "alpha beta");
        assert_eq!(report.refresh_word_count(), 3);
        assert_eq!(report.word_count, 3);
    }

    #[test]
    fn test_report_id_round_trip() {
        let id = ReportId::new();
        let parsed = ReportId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(ReportId::from_string("not-a-uuid").is_err());
    }
}
