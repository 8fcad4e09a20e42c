//! Error types for the Synthesizer

use thiserror::Error;

/// Errors that can occur while setting up an analysis session
///
/// Analysis itself never fails: unknown disciplines and terms yield empty
/// results.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SynthesizerError {
    /// Unrecognized discipline name
    #[error("Unknown discipline: {0}")]
    UnknownDiscipline(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
