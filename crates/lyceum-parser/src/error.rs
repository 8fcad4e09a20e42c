//! Error types for the section parser

use thiserror::Error;

/// Errors raised while setting up a parser
///
/// Parsing itself never fails; malformed input is reported through
/// [`crate::ParseDiagnostic`]s.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    /// Heading level outside the Markdown range
    #[error("Invalid heading level: {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
