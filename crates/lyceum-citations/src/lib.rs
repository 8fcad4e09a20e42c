//! Lyceum Citations
//!
//! Deduplicating citation store with bibliography rendering in five styles.
//!
//! # Overview
//!
//! Citations arrive from the retrieval component as structured records and
//! from model-written reference sections as plain text lines. Both paths end
//! in [`CitationStore::add`], which normalizes each record, computes its
//! dedup key and merges duplicates field by field.
//!
//! # Architecture
//!
//! ```text
//! Citation ─┐
//!           ├→ CitationStore (normalize, dedup, merge) → render(style) → RenderedBibliography
//! "Smith, J. (2020)..." → parse_reference ─┘
//! ```
//!
//! # Styles
//!
//! - **APA**: `Smith, J. A., & Doe, J. (2020). Title. Venue, 12(3), 45-67.`
//! - **MLA**: `Smith, John, and Jane Doe. "Title." Venue, vol. 12, no. 3, 2020, pp. 45-67.`
//! - **Chicago** (author-date): `Smith, John, and Jane Doe. 2020. "Title." Venue 12 (3): 45-67.`
//! - **IEEE**: `[1] J. A. Smith and J. Doe, "Title," Venue, vol. 12, no. 3, pp. 45-67, 2020.`
//! - **AMA**: `Smith JA, Doe J. Title. Venue. 2020;12(3):45-67.`
//!
//! Missing mandatory fields never drop an entry: they are rendered as
//! `Unknown`, `n.d.` or `Untitled` and reported as [`CitationWarning`]s.
//!
//! # Example Usage
//!
//! ```
//! use lyceum_citations::CitationStore;
//! use lyceum_domain::{Citation, CitationStyle};
//!
//! let mut store = CitationStore::new();
//! store.add(Citation::new(vec!["John Smith".into()], Some(2020), "Title", "Journal"));
//!
//! let summary = store.ingest_bibliography("Smith, J. (2020). Title. Journal.", None);
//! assert_eq!(summary.merged, 1);
//!
//! let rendered = store.render(CitationStyle::Ieee);
//! assert_eq!(rendered.to_text(), "[1] J. Smith, \"Title,\" Journal, 2020.");
//! ```

#![warn(missing_docs)]

mod error;
mod reference;
mod store;
mod styles;

pub use error::{resolve_style, CitationError};
pub use reference::{parse_any, parse_reference, ParsedReference};
pub use store::{CitationStore, CitationWarning, IngestSummary, RenderedBibliography};
pub use styles::{format_in_text, format_reference, FormattedReference, NO_DATE, UNKNOWN_AUTHOR, UNTITLED};
