//! Lyceum Section Parser
//!
//! Splits model-generated Markdown into named sections and a bibliography
//! block.
//!
//! # Overview
//!
//! Generated research text arrives as one blob with ATX headings
//! (`## Introduction`). The parser finds the structural heading level,
//! cuts the text at those headings and separates reference-list sections
//! from the body so the citation store can ingest them.
//!
//! # Architecture
//!
//! ```text
//! Markdown → SectionParser → ParsedDocument { title, preamble, sections, bibliography }
//!                                  ↓
//!                           ReportAssembler
//! ```
//!
//! # Key Features
//!
//! - **Level detection**: shallowest heading level, or the level below a lone H1 title
//! - **Heading cleanup**: closing hashes, emphasis and leading numbering removed
//! - **Reference separation**: `References`, `Bibliography`, `Works Cited` plus configured aliases
//! - **Fence awareness**: `#` lines inside fenced code stay content
//! - **Diagnostics**: malformed input is reported, never fatal
//!
//! # Example Usage
//!
//! ```
//! use lyceum_parser::{ParserConfig, SectionParser};
//!
//! let parser = SectionParser::new(ParserConfig::lenient()).unwrap();
//! let doc = parser.parse("# Sleep\n## 1. Introduction\nText.\n## Sources\nDoe, J. (2021). Sleep. Nature.");
//!
//! assert_eq!(doc.title.as_deref(), Some("Sleep"));
//! assert_eq!(doc.sections.names(), vec!["Introduction"]);
//! assert_eq!(doc.bibliography, "Doe, J. (2021). Sleep. Nature.");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod types;


pub use config::{ParserConfig, DEFAULT_REFERENCE_ALIASES};
pub use error::ParserError;
pub use parser::SectionParser;
pub use types::{DiagnosticKind, ParseDiagnostic, ParsedDocument};
