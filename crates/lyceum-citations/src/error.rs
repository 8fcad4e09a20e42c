//! Error types for the citation layer

use lyceum_domain::CitationStyle;
use thiserror::Error;

/// Errors raised at the edges of the citation layer
///
/// Store operations never fail; incomplete records become warnings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CitationError {
    /// Citation style name not recognized
    #[error("Unknown citation style: {0} (expected apa, mla, chicago, ieee or ama)")]
    UnknownStyle(String),
}

/// Resolve a citation style by name, ignoring case
pub fn resolve_style(name: &str) -> Result<CitationStyle, CitationError> {
    CitationStyle::parse(name).ok_or_else(|| CitationError::UnknownStyle(name.trim().to_string()))
}
