//! Lyceum Report Assembler
//!
//! Builds [`AcademicReport`](lyceum_domain::AcademicReport)s from parsed
//! sections and checks them against their output format.
//!
//! The assembler provides:
//! - Template placement (slots in template order, matched by name or alias)
//! - Preamble handling (abstract, separate section or discarded)
//! - Structural validation (empty abstract, missing slots, duplicates)
//! - Word counting and late section appends
//!
//! # Examples
//!
//! ```
//! use lyceum_assembler::{AssemblyRequest, ReportAssembler, StructuralIssue};
//! use lyceum_domain::{CitationStyle, OutputFormat};
//! use lyceum_parser::SectionParser;
//!
//! let doc = SectionParser::default().parse("## Introduction\nText.\n## Results\nMore text.");
//! let request = AssemblyRequest::from_parsed(doc, CitationStyle::Apa, OutputFormat::Paper);
//!
//! let assembler = ReportAssembler::default();
//! let report = assembler.assemble(request);
//! assert_eq!(report.sections.get("Findings"), Some("More text."));
//!
//! let issues = assembler.validate(&report);
//! assert!(issues.contains(&StructuralIssue::MissingBibliography));
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
mod error;
mod types;

pub use assembler::ReportAssembler;
pub use config::{AssemblerConfig, PreamblePolicy};
pub use error::AssemblerError;
pub use types::{AssemblyRequest, StructuralIssue};
