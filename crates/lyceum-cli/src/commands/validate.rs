//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::commands::assemble::{assemble, print_findings, AssemblyPlan};
use crate::config::{parse_format, Config, OutputMode};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use serde_json::json;

/// Execute the validate command.
///
/// Fails with [`CliError::ValidationFailed`] when any structural issue is
/// found so scripts can rely on the exit status.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let plan = AssemblyPlan {
        format: match args.format.as_deref() {
            Some(name) => parse_format(name)?,
            None => config.format()?,
        },
        style: config.style()?,
        discipline: config.discipline()?,
        input: args.input,
        citations: None,
        perspectives: None,
        title: None,
        question: None,
    };
    let outcome = assemble(&plan, config)?;

    match formatter.mode() {
        OutputMode::Json => {
            let issues: Vec<String> = outcome.issues.iter().map(|i| i.to_string()).collect();
            let value = json!({
                "format": plan.format.as_str(),
                "word_count": outcome.report.word_count,
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputMode::Quiet => {}
        OutputMode::Text => print_findings(&outcome, formatter),
    }

    if outcome.issues.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(outcome.issues.len()))
    }
}
