//! Cite command implementation.

use crate::cli::CiteArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lyceum_citations::{resolve_style, CitationStore};
use lyceum_domain::Citation;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Execute the cite command.
pub fn execute_cite(args: CiteArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let style = match args.style.as_deref() {
        Some(name) => resolve_style(name)?,
        None => config.style()?,
    };

    let mut store = CitationStore::new();
    let added = store.add_all(load_citations(&args.citations)?);
    info!("Loaded {} distinct citations", added);

    let rendered = store.render(style);
    println!("{}", formatter.format_bibliography(&rendered)?);
    if !rendered.warnings.is_empty() {
        eprintln!("{}", formatter.format_citation_warnings(&rendered.warnings));
    }

    Ok(())
}

/// Read citation records from a JSON array file.
pub fn load_citations(path: &Path) -> Result<Vec<Citation>> {
    let json_data = fs::read_to_string(path)?;
    parse_citations(&json_data)
}

/// Parse citation records from a JSON array.
pub fn parse_citations(json_data: &str) -> Result<Vec<Citation>> {
    let defs: Vec<CitationDefinition> = serde_json::from_str(json_data)?;
    if defs.is_empty() {
        return Err(CliError::InvalidInput("No citations provided".to_string()));
    }
    Ok(defs.into_iter().map(CitationDefinition::into_citation).collect())
}

/// Citation record as accepted in JSON input.
#[derive(Debug, Deserialize)]
struct CitationDefinition {
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    year: Option<u16>,
    #[serde(default)]
    title: String,
    #[serde(default, alias = "journal")]
    venue: String,
    #[serde(default)]
    volume: Option<String>,
    #[serde(default)]
    issue: Option<String>,
    #[serde(default)]
    pages: Option<String>,
    #[serde(default)]
    doi: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    citation_count: Option<u32>,
    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,
}

impl CitationDefinition {
    fn into_citation(self) -> Citation {
        let mut citation = Citation::new(self.authors, self.year, self.title, self.venue);
        citation.volume = self.volume;
        citation.issue = self.issue;
        citation.pages = self.pages;
        citation.doi = self.doi;
        citation.url = self.url;
        citation.citation_count = self.citation_count;
        citation.abstract_text = self.abstract_text;
        citation
    }
}
