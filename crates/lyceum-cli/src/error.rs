//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parser setup error
    #[error("Parser error: {0}")]
    Parser(#[from] lyceum_parser::ParserError),

    /// Assembler setup error
    #[error("Assembler error: {0}")]
    Assembler(#[from] lyceum_assembler::AssemblerError),

    /// Citation input error
    #[error("Citation error: {0}")]
    Citation(#[from] lyceum_citations::CitationError),

    /// Analyzer setup error
    #[error("Synthesizer error: {0}")]
    Synthesizer(#[from] lyceum_synthesizer::SynthesizerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation found structural issues
    #[error("Validation found {0} issue(s)")]
    ValidationFailed(usize),
}
