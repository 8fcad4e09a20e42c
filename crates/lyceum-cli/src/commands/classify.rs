//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lyceum_synthesizer::InterdisciplinaryAnalyzer;
use std::fs;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Must specify either TEXT or --file".to_string(),
            ))
        }
    };

    let analyzer = InterdisciplinaryAnalyzer::with_config(config.analyzer.clone())?;
    let scores = analyzer.score_disciplines(&text);
    println!("{}", formatter.format_scores(&scores)?);

    Ok(())
}
