//! Deduplicating citation store
//!
//! Records are keyed by [`CitationKey`]. Adding a record whose key is
//! already present merges the two instead of inserting a duplicate.

use crate::reference::{parse_any, parse_reference, strip_list_marker};
use crate::styles::{format_in_text, format_reference, NO_DATE, UNKNOWN_AUTHOR, UNTITLED};
use lyceum_domain::citation::normalize_title;
use lyceum_domain::{Citation, CitationKey, CitationStyle, MandatoryField};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// A mandatory field that had to be replaced by a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationWarning {
    /// 1-based position of the entry in the rendered list
    pub entry: usize,
    /// Short human-readable label for the entry
    pub label: String,
    /// Field that was missing
    pub field: MandatoryField,
    /// Placeholder that was used
    pub placeholder: &'static str,
}

impl fmt::Display for CitationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry {} ({}): missing {}, rendered as \"{}\"",
            self.entry, self.label, self.field, self.placeholder
        )
    }
}

/// Output of [`CitationStore::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBibliography {
    /// Style the entries were rendered in
    pub style: CitationStyle,
    /// Rendered entries in output order
    pub entries: Vec<String>,
    /// Placeholder substitutions, in entry order
    pub warnings: Vec<CitationWarning>,
}

impl RenderedBibliography {
    /// Entries joined by newlines
    pub fn to_text(&self) -> String {
        self.entries.join("\n")
    }

    /// Whether no entries were rendered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counters returned by [`CitationStore::ingest_bibliography`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Lines parsed into citations
    pub parsed: usize,
    /// Parsed citations that created new records
    pub added: usize,
    /// Parsed citations merged into existing records
    pub merged: usize,
    /// Lines that could not be parsed, as given
    pub unparsed: Vec<String>,
}

/// Deduplicating citation collection
///
/// # Examples
///
/// ```
/// use lyceum_citations::CitationStore;
/// use lyceum_domain::{Citation, CitationStyle};
///
/// let mut store = CitationStore::new();
/// store.add(Citation::new(vec!["Jane Doe".into()], Some(2021), "Sleep and memory", "Nature"));
/// store.add(Citation::new(vec!["Doe, J.".into()], Some(2021), "Sleep and Memory", ""));
/// assert_eq!(store.len(), 1);
///
/// let bibliography = store.render(CitationStyle::Apa);
/// assert_eq!(bibliography.entries, vec!["Doe, J. (2021). Sleep and memory. Nature."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CitationStore {
    records: Vec<Citation>,
    index: HashMap<CitationKey, usize>,
}

impl CitationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and add a citation
    ///
    /// Returns `true` when a new record was created and `false` when the
    /// citation was merged into an existing one.
    pub fn add(&mut self, citation: Citation) -> bool {
        let citation = citation.normalized();
        let key = citation.dedup_key();

        match self.index.get(&key).copied() {
            Some(idx) => {
                debug!("Merging duplicate citation {}", key);
                self.records[idx].merge(citation);
                // A merge can fill year or title, so the merged record may
                // answer to a new key as well as the old one
                let merged_key = self.records[idx].dedup_key();
                self.index.entry(merged_key).or_insert(idx);
                false
            }
            None => {
                let idx = self.records.len();
                self.records.push(citation);
                self.index.insert(key, idx);
                true
            }
        }
    }

    /// Add several citations, returning how many created new records
    pub fn add_all<I>(&mut self, citations: I) -> usize
    where
        I: IntoIterator<Item = Citation>,
    {
        let mut added = 0;
        for citation in citations {
            if self.add(citation) {
                added += 1;
            }
        }
        added
    }

    /// Number of distinct records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Citation> {
        self.records.iter()
    }

    /// Record by insertion index
    pub fn get(&self, index: usize) -> Option<&Citation> {
        self.records.get(index)
    }

    /// Record by dedup key
    pub fn get_by_key(&self, key: &CitationKey) -> Option<&Citation> {
        self.index.get(key).map(|idx| &self.records[*idx])
    }

    /// Render every record in the given style
    ///
    /// Author-date styles and AMA are sorted by first-author surname, then
    /// year (undated last), then title. IEEE keeps insertion order and
    /// prefixes each entry with its number.
    pub fn render(&self, style: CitationStyle) -> RenderedBibliography {
        let mut entries = Vec::with_capacity(self.records.len());
        let mut warnings = Vec::new();

        for (position, idx) in self.render_order(style).into_iter().enumerate() {
            let citation = &self.records[idx];
            let formatted = format_reference(style, citation);
            let number = position + 1;

            for field in formatted.substituted {
                let warning = CitationWarning {
                    entry: number,
                    label: entry_label(citation),
                    field,
                    placeholder: placeholder_for(field),
                };
                warn!("Citation {}", warning);
                warnings.push(warning);
            }

            entries.push(if style.is_numbered() {
                format!("[{}] {}", number, formatted.text)
            } else {
                formatted.text
            });
        }

        info!(
            "Rendered {} citations in {} style ({} warnings)",
            entries.len(),
            style,
            warnings.len()
        );

        RenderedBibliography {
            style,
            entries,
            warnings,
        }
    }

    /// In-text marker for the record at an insertion index
    ///
    /// Numbered markers use the record's position in [`CitationStore::render`]
    /// output for the same style.
    pub fn in_text(&self, style: CitationStyle, index: usize) -> Option<String> {
        let citation = self.records.get(index)?;
        let number = self
            .render_order(style)
            .iter()
            .position(|i| *i == index)
            .map(|p| p + 1)
            .unwrap_or(index + 1);
        Some(format_in_text(style, citation, number))
    }

    /// In-text marker for the record with a dedup key
    pub fn in_text_by_key(&self, style: CitationStyle, key: &CitationKey) -> Option<String> {
        let index = *self.index.get(key)?;
        self.in_text(style, index)
    }

    /// Parse a bibliography block and add the recovered citations
    ///
    /// Blank lines and Markdown headings are skipped. With a style the
    /// line is parsed in that style first; otherwise the style is detected
    /// per line.
    pub fn ingest_bibliography(&mut self, text: &str, style: Option<CitationStyle>) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parsed = style
                .and_then(|s| parse_reference(s, &strip_list_marker(line)))
                .or_else(|| parse_any(line));

            match parsed {
                Some(reference) => {
                    summary.parsed += 1;
                    if self.add(reference.into_citation()) {
                        summary.added += 1;
                    } else {
                        summary.merged += 1;
                    }
                }
                None => {
                    debug!("Could not parse reference line: {}", line);
                    summary.unparsed.push(line.to_string());
                }
            }
        }

        if !summary.unparsed.is_empty() {
            warn!("{} bibliography lines could not be parsed", summary.unparsed.len());
        }
        info!(
            "Ingested bibliography: {} parsed, {} new, {} merged",
            summary.parsed, summary.added, summary.merged
        );

        summary
    }

    fn render_order(&self, style: CitationStyle) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        if !style.is_numbered() {
            order.sort_by(|a, b| compare_for_listing(&self.records[*a], &self.records[*b]));
        }
        order
    }
}

impl FromIterator<Citation> for CitationStore {
    fn from_iter<I: IntoIterator<Item = Citation>>(iter: I) -> Self {
        let mut store = CitationStore::new();
        store.add_all(iter);
        store
    }
}

fn sort_surname(citation: &Citation) -> String {
    citation
        .first_author_surname()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
        .to_lowercase()
}

fn compare_for_listing(a: &Citation, b: &Citation) -> Ordering {
    sort_surname(a)
        .cmp(&sort_surname(b))
        .then_with(|| match (a.year, b.year) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| normalize_title(&a.title).cmp(&normalize_title(&b.title)))
}

fn entry_label(citation: &Citation) -> String {
    if !citation.title.is_empty() {
        citation.title.clone()
    } else {
        citation
            .first_author_surname()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
    }
}

fn placeholder_for(field: MandatoryField) -> &'static str {
    match field {
        MandatoryField::Authors => UNKNOWN_AUTHOR,
        MandatoryField::Year => NO_DATE,
        MandatoryField::Title => UNTITLED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cite(author: &str, year: Option<u16>, title: &str) -> Citation {
        Citation::new(vec![author.to_string()], year, title, "")
    }

    #[test]
    fn test_add_returns_true_for_new_record() {
        let mut store = CitationStore::new();
        assert!(store.add(cite("Jane Doe", Some(2021), "Sleep")));
        assert!(store.add(cite("Jane Doe", Some(2022), "Sleep")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_merge_keeps_richer_fields() {
        let mut store = CitationStore::new();
        store.add(cite("Jane Doe", Some(2021), "Sleep and memory").with_citation_count(3));
        let added = store.add(
            Citation::new(
                vec!["Jane Doe".into(), "Kim Lee".into()],
                Some(2021),
                "Sleep and Memory.",
                "Nature",
            )
            .with_doi("https://doi.org/10.1/abc")
            .with_citation_count(1),
        );

        assert!(!added);
        assert_eq!(store.len(), 1);
        let record = store.get(0).unwrap();
        assert_eq!(record.authors.len(), 2);
        assert_eq!(record.venue, "Nature");
        assert_eq!(record.doi.as_deref(), Some("10.1/abc"));
        assert_eq!(record.citation_count, Some(3));
    }

    #[test]
    fn test_render_sorted_alphabetically() {
        let store: CitationStore = [
            cite("Zed Young", Some(2020), "Zeta"),
            cite("Amy Adams", None, "Alpha"),
            cite("Amy Adams", Some(2019), "Beta"),
        ]
        .into_iter()
        .collect();

        let rendered = store.render(CitationStyle::Apa);
        assert_eq!(
            rendered.entries,
            vec![
                "Adams, A. (2019). Beta.",
                "Adams, A. (n.d.). Alpha.",
                "Young, Z. (2020). Zeta.",
            ]
        );
        assert_eq!(rendered.warnings.len(), 1);
        assert_eq!(rendered.warnings[0].entry, 2);
        assert_eq!(rendered.warnings[0].field, MandatoryField::Year);
    }

    #[test]
    fn test_render_ieee_insertion_order() {
        let store: CitationStore = [cite("Zed Young", Some(2020), "Zeta"), cite("Amy Adams", Some(2019), "Alpha")]
            .into_iter()
            .collect();

        let rendered = store.render(CitationStyle::Ieee);
        assert_eq!(rendered.entries[0], "[1] Z. Young, \"Zeta,\" 2020.");
        assert_eq!(rendered.entries[1], "[2] A. Adams, \"Alpha,\" 2019.");
    }

    #[test]
    fn test_missing_fields_never_dropped() {
        let mut store = CitationStore::new();
        store.add(Citation::default());
        let rendered = store.render(CitationStyle::Mla);
        assert_eq!(rendered.entries.len(), 1);
        assert_eq!(rendered.warnings.len(), 3);
        assert!(rendered.warnings[0].to_string().contains("Unknown"));
    }

    #[test]
    fn test_in_text_numbering_follows_render_order() {
        let store: CitationStore = [cite("Zed Young", Some(2020), "Zeta"), cite("Amy Adams", Some(2019), "Alpha")]
            .into_iter()
            .collect();

        assert_eq!(store.in_text(CitationStyle::Ieee, 0).as_deref(), Some("[1]"));
        assert_eq!(store.in_text(CitationStyle::Ama, 0).as_deref(), Some("2"));
        assert_eq!(store.in_text(CitationStyle::Apa, 1).as_deref(), Some("(Adams, 2019)"));
        assert_eq!(store.in_text(CitationStyle::Apa, 5), None);

        let key = store.get(0).unwrap().dedup_key();
        assert_eq!(
            store.in_text_by_key(CitationStyle::Mla, &key).as_deref(),
            Some("(Young)")
        );
    }

    #[test]
    fn test_ingest_merges_with_existing() {
        let mut store = CitationStore::new();
        store.add(
            Citation::new(vec!["John Smith".into()], Some(2020), "Title", "Journal").with_doi("10.1/x"),
        );

        let summary = store.ingest_bibliography(
            "# References\n\n- Smith, J. (2020). Title. Journal.\nnot a reference\n",
            None,
        );

        assert_eq!(summary.parsed, 1);
        assert_eq!(summary.merged, 1);
        assert_eq!(summary.added, 0);
        assert_eq!(summary.unparsed, vec!["not a reference".to_string()]);
        assert_eq!(store.len(), 1);
    }
}
