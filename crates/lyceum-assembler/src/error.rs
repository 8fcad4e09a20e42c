//! Assembler error types

use thiserror::Error;

/// Errors raised while configuring the assembler
///
/// Assembly and validation never fail; structural problems are reported as
/// [`crate::StructuralIssue`]s.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssemblerError {
    /// Alias configured for a slot that no template defines
    #[error("Unknown template slot: {0}")]
    UnknownSlot(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
