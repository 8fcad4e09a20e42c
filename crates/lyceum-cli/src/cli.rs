//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lyceum CLI - Assemble and check academic reports from generated research text.
#[derive(Debug, Parser)]
#[command(name = "lyceum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output mode
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<CliOutput>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LYCEUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output mode options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliOutput {
    /// Markdown and tables (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (status only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assemble a report from generated Markdown
    Assemble(AssembleArgs),

    /// Report structural issues without printing the report
    Validate(ValidateArgs),

    /// Render a bibliography from citation records
    Cite(CiteArgs),

    /// Score text against the discipline profiles
    Classify(ClassifyArgs),

    /// Compare disciplinary perspectives
    Analyze(AnalyzeArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the assemble command.
#[derive(Debug, Parser)]
pub struct AssembleArgs {
    /// Markdown file with the generated text
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON file with structured citation records
    #[arg(long)]
    pub citations: Option<PathBuf>,

    /// Report title (defaults to the document's H1)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Research question recorded in the report metadata
    #[arg(short, long)]
    pub question: Option<String>,

    /// Citation style (apa, mla, chicago, ieee, ama)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Report format (paper, review, proposal, abstract, presentation)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Discipline tag ("general" or a discipline name)
    #[arg(short, long)]
    pub discipline: Option<String>,

    /// JSON file with disciplinary perspectives; adds a synthesis section
    #[arg(short, long)]
    pub perspectives: Option<PathBuf>,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Markdown file with the generated text
    #[arg(short, long)]
    pub input: PathBuf,

    /// Report format (paper, review, proposal, abstract, presentation)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the cite command.
#[derive(Debug, Parser)]
pub struct CiteArgs {
    /// JSON file with citation records
    #[arg(long)]
    pub citations: PathBuf,

    /// Citation style (apa, mla, chicago, ieee, ama)
    #[arg(short, long)]
    pub style: Option<String>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// JSON file with disciplinary perspectives
    #[arg(short, long)]
    pub perspectives: PathBuf,

    /// Glossary terms to translate (repeatable)
    #[arg(short, long = "term")]
    pub terms: Vec<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliOutput> for crate::config::OutputMode {
    fn from(output: CliOutput) -> Self {
        match output {
            CliOutput::Text => crate::config::OutputMode::Text,
            CliOutput::Json => crate::config::OutputMode::Json,
            CliOutput::Quiet => crate::config::OutputMode::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputMode;

    #[test]
    fn test_assemble_command() {
        let cli = Cli::parse_from([
            "lyceum",
            "assemble",
            "--input",
            "draft.md",
            "--style",
            "ieee",
            "--format",
            "review",
        ]);
        match cli.command {
            Command::Assemble(args) => {
                assert_eq!(args.input, PathBuf::from("draft.md"));
                assert_eq!(args.style.as_deref(), Some("ieee"));
                assert_eq!(args.format.as_deref(), Some("review"));
                assert!(args.citations.is_none());
            }
            _ => panic!("Expected Assemble command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["lyceum", "classify", "neurons fire", "-o", "json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.output, Some(CliOutput::Json)));
        match cli.command {
            Command::Classify(args) => assert_eq!(args.text.as_deref(), Some("neurons fire")),
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_classify_requires_input() {
        assert!(Cli::try_parse_from(["lyceum", "classify"]).is_err());
        assert!(Cli::try_parse_from(["lyceum", "classify", "x", "--file", "y"]).is_err());
    }

    #[test]
    fn test_repeated_terms() {
        let cli = Cli::parse_from([
            "lyceum",
            "analyze",
            "--perspectives",
            "p.json",
            "--term",
            "memory",
            "-t",
            "risk",
        ]);
        match cli.command {
            Command::Analyze(args) => assert_eq!(args.terms, vec!["memory", "risk"]),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["lyceum", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_output_conversion() {
        let mode: OutputMode = CliOutput::Quiet.into();
        assert_eq!(mode, OutputMode::Quiet);
    }
}
