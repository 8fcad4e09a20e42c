//! Lyceum Domain Layer
//!
//! This crate contains the core data model for Lyceum's report assembly and
//! citation-synthesis engine. It depends only on `uuid` and defines the
//! records, value objects, fixed lookup tables and trait interfaces that all
//! other crates build upon.
//!
//! ## Key Concepts
//!
//! - **Citation**: A bibliographic record with a normalized dedup key
//! - **ResearchMetadata**: Immutable provenance of a research session
//! - **AcademicReport**: The assembled document with ordered sections
//! - **Discipline**: The fixed, enumerable set of academic fields
//! - **Template**: Ordered section slots mandated by an output format
//!
//! ## Architecture
//!
//! - Pure data and deterministic helpers only
//! - No I/O, no global mutable state
//! - Trait definitions for pluggable collaborators (classifiers, renderers)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod discipline;
pub mod format;
pub mod metadata;
pub mod name;
pub mod report;
pub mod template;
pub mod traits;

// Re-exports for convenience
pub use citation::{Citation, CitationKey, MandatoryField};
pub use discipline::{Discipline, DisciplineGroup, DisciplineTag};
pub use format::{CitationStyle, OutputFormat};
pub use metadata::{ResearchMetadata, ResearchMetadataBuilder};
pub use name::PersonName;
pub use report::{count_words, AcademicReport, ReportId, Section, SectionMap};
pub use template::TemplateSlot;
