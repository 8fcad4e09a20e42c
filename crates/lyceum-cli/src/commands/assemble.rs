//! Assemble command implementation.

use crate::cli::AssembleArgs;
use crate::commands::analyze::load_perspectives_into;
use crate::commands::cite::load_citations;
use crate::config::{parse_discipline_tag, parse_format, Config};
use crate::error::Result;
use crate::output::Formatter;
use lyceum_assembler::{AssemblyRequest, ReportAssembler, StructuralIssue};
use lyceum_citations::{resolve_style, CitationStore, CitationWarning};
use lyceum_domain::{AcademicReport, CitationStyle, DisciplineTag, OutputFormat, ResearchMetadata};
use lyceum_parser::{ParsedDocument, SectionParser};
use lyceum_synthesizer::{InterdisciplinaryAnalyzer, SYNTHESIS_SECTION};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const MAX_KEYWORDS: usize = 3;
const MAX_KEY_AUTHORS: usize = 5;

/// Everything one assembly run needs, resolved from flags and config.
#[derive(Debug)]
pub struct AssemblyPlan {
    /// Markdown input
    pub input: PathBuf,
    /// Structured citation records
    pub citations: Option<PathBuf>,
    /// Perspectives for the synthesis section
    pub perspectives: Option<PathBuf>,
    /// Title override
    pub title: Option<String>,
    /// Research question for the metadata
    pub question: Option<String>,
    /// Citation style
    pub style: CitationStyle,
    /// Report format
    pub format: OutputFormat,
    /// Discipline tag
    pub discipline: DisciplineTag,
}

impl AssemblyPlan {
    /// Resolve command-line flags against configuration defaults.
    pub fn from_args(args: AssembleArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            style: match args.style.as_deref() {
                Some(name) => resolve_style(name)?,
                None => config.style()?,
            },
            format: match args.format.as_deref() {
                Some(name) => parse_format(name)?,
                None => config.format()?,
            },
            discipline: match args.discipline.as_deref() {
                Some(name) => parse_discipline_tag(name)?,
                None => config.discipline()?,
            },
            input: args.input,
            citations: args.citations,
            perspectives: args.perspectives,
            title: args.title,
            question: args.question,
        })
    }
}

/// Assembled report plus everything found along the way.
#[derive(Debug)]
pub struct AssemblyOutcome {
    /// The report
    pub report: AcademicReport,
    /// Structural issues
    pub issues: Vec<StructuralIssue>,
    /// Placeholder substitutions in the bibliography
    pub citation_warnings: Vec<CitationWarning>,
    /// Bibliography lines that could not be parsed
    pub unparsed_references: Vec<String>,
    /// Parser diagnostics, formatted
    pub diagnostics: Vec<String>,
}

/// Execute the assemble command.
pub fn execute_assemble(args: AssembleArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let plan = AssemblyPlan::from_args(args, config)?;
    let outcome = assemble(&plan, config)?;

    println!("{}", formatter.format_report(&outcome.report)?);
    print_findings(&outcome, formatter);

    Ok(())
}

/// Print diagnostics, citation warnings and issues to stderr.
pub fn print_findings(outcome: &AssemblyOutcome, formatter: &Formatter) {
    for diagnostic in &outcome.diagnostics {
        eprintln!("{}", formatter.info(diagnostic));
    }
    for line in &outcome.unparsed_references {
        eprintln!("{}", formatter.warning(&format!("Unparsed reference kept verbatim: {}", line)));
    }
    if !outcome.citation_warnings.is_empty() {
        eprintln!("{}", formatter.format_citation_warnings(&outcome.citation_warnings));
    }
    if outcome.issues.is_empty() {
        eprintln!("{}", formatter.success("No structural issues"));
    } else {
        eprintln!("{}", formatter.format_issues(&outcome.issues));
    }
}

/// Run the full pipeline: parse, cite, synthesize, assemble, validate.
pub fn assemble(plan: &AssemblyPlan, config: &Config) -> Result<AssemblyOutcome> {
    let text = fs::read_to_string(&plan.input)?;
    let parser = SectionParser::new(config.parser.clone())?;
    let doc = parser.parse(&text);
    let diagnostics: Vec<String> = doc.diagnostics.iter().map(|d| d.to_string()).collect();

    let mut store = CitationStore::new();
    if let Some(path) = &plan.citations {
        let added = store.add_all(load_citations(path)?);
        debug!("Loaded {} structured citations", added);
    }
    let summary = store.ingest_bibliography(&doc.bibliography, None);
    info!(
        "Bibliography: {} parsed, {} added, {} merged, {} unparsed",
        summary.parsed,
        summary.added,
        summary.merged,
        summary.unparsed.len()
    );

    let rendered = store.render(plan.style);
    let mut bibliography = rendered.entries.clone();
    bibliography.extend(summary.unparsed.iter().cloned());

    let mut analyzer = InterdisciplinaryAnalyzer::with_config(config.analyzer.clone())?;
    if let Some(path) = &plan.perspectives {
        let added = load_perspectives_into(&mut analyzer, path)?;
        debug!("Loaded {} perspectives", added);
    }

    let keywords = keywords_for(&doc, plan.discipline, &analyzer);
    let metadata = metadata_for(plan, &doc, &store, &analyzer);

    let mut request = AssemblyRequest::from_parsed(doc, plan.style, plan.format)
        .with_bibliography(bibliography.join("\n"))
        .with_metadata(metadata)
        .with_keywords(keywords);
    if let Some(title) = &plan.title {
        request = request.with_title(title.clone());
    }

    let assembler = ReportAssembler::new(config.assembler.clone())?;
    let mut report = assembler.assemble(request);
    if !analyzer.perspectives().is_empty() {
        let section = analyzer.report_section();
        assembler.append_section(&mut report, SYNTHESIS_SECTION, &section.content);
    }

    let issues = assembler.validate(&report);
    if !issues.is_empty() {
        warn!("Report has {} structural issue(s)", issues.len());
    }

    Ok(AssemblyOutcome {
        report,
        issues,
        citation_warnings: rendered.warnings,
        unparsed_references: summary.unparsed,
        diagnostics,
    })
}

/// Keywords: the tagged discipline first, then disciplines identified in the body.
fn keywords_for(doc: &ParsedDocument, tag: DisciplineTag, analyzer: &InterdisciplinaryAnalyzer) -> Vec<String> {
    let body: String = doc
        .sections
        .iter()
        .map(|s| s.content.as_str())
        .chain(std::iter::once(doc.preamble.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    let mut keywords: Vec<String> = tag.discipline().map(|d| d.name().to_string()).into_iter().collect();
    for discipline in analyzer.identify_disciplines(&body) {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        let name = discipline.name().to_string();
        if !keywords.contains(&name) {
            keywords.push(name);
        }
    }
    keywords
}

fn metadata_for(
    plan: &AssemblyPlan,
    doc: &ParsedDocument,
    store: &CitationStore,
    analyzer: &InterdisciplinaryAnalyzer,
) -> ResearchMetadata {
    let question = plan
        .question
        .clone()
        .or_else(|| plan.title.clone())
        .or_else(|| doc.title.clone())
        .unwrap_or_default();

    let mut authors: Vec<String> = Vec::new();
    for surname in store.iter().filter_map(|c| c.first_author_surname()) {
        if authors.len() == MAX_KEY_AUTHORS {
            break;
        }
        if !authors.contains(&surname) {
            authors.push(surname);
        }
    }

    let mut theories: Vec<String> = Vec::new();
    let mut methods: Vec<String> = Vec::new();
    for perspective in analyzer.perspectives() {
        for framework in &perspective.frameworks {
            if !theories.contains(framework) {
                theories.push(framework.clone());
            }
        }
        for method in &perspective.methodologies {
            if !methods.contains(method) {
                methods.push(method.clone());
            }
        }
    }

    let mut builder = ResearchMetadata::builder(question)
        .discipline(plan.discipline)
        .sources(u32::try_from(store.len()).unwrap_or(u32::MAX), 0)
        .key_authors(authors)
        .key_theories(theories)
        .methodologies(methods);

    let years: Vec<u16> = store.iter().filter_map(|c| c.year).collect();
    if let (Some(first), Some(last)) = (years.iter().min(), years.iter().max()) {
        builder = builder.date_range(*first, *last);
    }
    builder.build()
}
