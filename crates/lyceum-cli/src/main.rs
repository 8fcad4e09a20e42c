//! Lyceum CLI - Command-line interface for assembling academic reports.

use clap::Parser;
use lyceum_cli::commands;
use lyceum_cli::{Cli, CliError, Command, Config, Formatter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match e {
            CliError::ValidationFailed(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

/// Log to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> lyceum_cli::Result<()> {
    let path = Config::resolve_path(cli.config.as_deref())?;

    // A broken file must not block `config init --force`
    let config = match Config::load(&path) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Command::Config(_)) => {
            warn!("Ignoring unreadable configuration: {}", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let mode = cli.output.map(Into::into).unwrap_or(config.defaults.output);
    let color_enabled = !cli.no_color && config.defaults.color;
    let formatter = Formatter::new(mode, color_enabled);

    match cli.command {
        Command::Assemble(args) => commands::execute_assemble(args, &config, &formatter),
        Command::Validate(args) => commands::execute_validate(args, &config, &formatter),
        Command::Cite(args) => commands::execute_cite(args, &config, &formatter),
        Command::Classify(args) => commands::execute_classify(args, &config, &formatter),
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter),
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter),
    }
}
