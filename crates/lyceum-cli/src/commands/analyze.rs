//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::{Config, OutputMode};
use crate::error::{CliError, Result};
use crate::output::{insight_json, Formatter};
use lyceum_domain::Discipline;
use lyceum_synthesizer::{resolve_discipline, InterdisciplinaryAnalyzer, KeywordClassifier};
use serde::Deserialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analyzer = InterdisciplinaryAnalyzer::with_config(config.analyzer.clone())?;
    load_perspectives_into(&mut analyzer, &args.perspectives)?;

    let insight = analyzer.analyze_convergence_divergence();
    let table = analyzer.terminology_table();

    match formatter.mode() {
        OutputMode::Json => {
            let translations: serde_json::Map<String, serde_json::Value> = args
                .terms
                .iter()
                .map(|term| {
                    let meanings: serde_json::Map<String, serde_json::Value> = analyzer
                        .translate_terminology(term)
                        .into_iter()
                        .map(|(d, meaning)| (d.id(), json!(meaning)))
                        .collect();
                    (term.clone(), serde_json::Value::Object(meanings))
                })
                .collect();
            let value = json!({
                "insight": insight_json(&insight),
                "translations": translations,
                "synthesis": analyzer.generate_synthesis(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputMode::Quiet => {
            println!("{}", formatter.format_insight(&insight)?);
        }
        OutputMode::Text => {
            println!("{}\n", formatter.format_insight(&insight)?);
            if args.terms.is_empty() {
                println!("{}\n", formatter.format_terminology(&table)?);
            }
            for term in &args.terms {
                let meanings = analyzer.translate_terminology(term);
                println!("{}\n", formatter.format_translation(term, &meanings)?);
            }
            println!("{}", analyzer.generate_synthesis());
        }
    }

    Ok(())
}

/// Read perspectives from a JSON array file into an analyzer session.
///
/// Entries without a discipline are classified from their content; entries
/// no profile matches are skipped with a warning.
pub fn load_perspectives_into(
    analyzer: &mut InterdisciplinaryAnalyzer<KeywordClassifier>,
    path: &Path,
) -> Result<usize> {
    let json_data = fs::read_to_string(path)?;
    let defs = parse_perspectives(&json_data)?;

    let mut added = 0;
    for def in defs {
        match def.discipline {
            Some(discipline) => {
                analyzer.add_perspective(discipline, def.content, def.source);
                added += 1;
            }
            None => {
                if analyzer.add_classified_perspective(def.content, def.source).is_some() {
                    added += 1;
                } else {
                    warn!("Skipped a perspective that matches no discipline profile");
                }
            }
        }
    }
    Ok(added)
}

/// A validated perspective entry.
#[derive(Debug)]
struct Perspective {
    discipline: Option<Discipline>,
    content: String,
    source: String,
}

/// Perspective as accepted in JSON input.
#[derive(Debug, Deserialize)]
struct PerspectiveDefinition {
    #[serde(default)]
    discipline: Option<String>,
    content: String,
    #[serde(default)]
    source: String,
}

fn parse_perspectives(json_data: &str) -> Result<Vec<Perspective>> {
    let defs: Vec<PerspectiveDefinition> = serde_json::from_str(json_data)?;
    if defs.is_empty() {
        return Err(CliError::InvalidInput("No perspectives provided".to_string()));
    }

    defs.into_iter()
        .map(|def| -> Result<Perspective> {
            let discipline = def.discipline.as_deref().map(resolve_discipline).transpose()?;
            Ok(Perspective {
                discipline,
                content: def.content,
                source: def.source,
            })
        })
        .collect()
}
