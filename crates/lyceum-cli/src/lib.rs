//! Lyceum CLI library.
//!
//! This library provides the core functionality for the Lyceum command-line interface,
//! including configuration management, command execution, report rendering and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod render;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use render::{JsonRenderer, MarkdownRenderer};
