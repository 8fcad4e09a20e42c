//! Lyceum Interdisciplinary Synthesizer
//!
//! Identifies the disciplines behind a text and compares perspectives from
//! several disciplines on one research question.
//!
//! # Overview
//!
//! A research question rarely belongs to a single field. The synthesizer
//! scores text against 25 discipline keyword profiles, collects
//! perspectives tagged with their discipline, and reports where they
//! converge on shared themes, where they frame a shared theme differently,
//! and how the same term means different things across fields.
//!
//! # Architecture
//!
//! ```text
//! text → DisciplineClassifier (KeywordClassifier by default) → ranked disciplines
//!
//! perspectives → InterdisciplinaryAnalyzer → ConvergenceDivergenceInsight
//!                          ↓                        ↓
//!                      glossary            generate_synthesis → Section
//! ```
//!
//! # Key Features
//!
//! - **Pluggable classification**: any `DisciplineClassifier` can replace the keyword profiles
//! - **Convergence**: phrases of up to three words shared by two or more disciplines
//! - **Divergence**: shared phrases framed by pairwise disjoint qualifier terms
//! - **Terminology**: curated per-discipline meanings for ambiguous terms
//! - **Determinism**: identical sessions always produce identical output
//!
//! # Example Usage
//!
//! ```
//! use lyceum_domain::Discipline;
//! use lyceum_synthesizer::InterdisciplinaryAnalyzer;
//!
//! let mut analyzer = InterdisciplinaryAnalyzer::default();
//! analyzer.add_perspective(
//!     Discipline::Psychology,
//!     "memory consolidation during sleep improves retention",
//!     "Walker (2017)",
//! );
//! analyzer.add_perspective(
//!     Discipline::Neuroscience,
//!     "hippocampal activity during sleep correlates with memory consolidation",
//!     "Diekelmann & Born (2010)",
//! );
//!
//! let insight = analyzer.analyze_convergence_divergence();
//! assert_eq!(insight.convergence[0].theme, "memory consolidation");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
pub mod glossary;
pub mod profiles;
mod text;
mod types;

pub use analyzer::{InterdisciplinaryAnalyzer, SYNTHESIS_SECTION};
pub use config::AnalyzerConfig;
pub use error::SynthesizerError;
pub use profiles::{extract_frameworks, extract_methodologies, resolve_discipline, KeywordClassifier};
pub use types::{
    ConvergenceDivergenceInsight, ConvergenceTheme, DisciplinaryPerspective, DivergenceTheme, TerminologyRow,
};
