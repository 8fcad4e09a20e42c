//! Split Markdown text into named sections

use crate::config::ParserConfig;
use crate::error::ParserError;
use crate::types::{DiagnosticKind, ParseDiagnostic, ParsedDocument};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?P<marks>#{1,6})(?:[ \t]+(?P<text>.*?))?[ \t]*$").expect("heading pattern is valid")
});

static CLOSING_HASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[ \t]+)#+$").expect("closing hash pattern is valid"));

/// "1.", "1)", "2.3", "IV." or "A." before the heading text; a bare
/// number such as "2020" belongs to the name
static NUMBERING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d+)+\.?|\d+[.)]|[IVXLC]+\.|[A-Z]\.)(?:\s+|$)").expect("numbering pattern is valid")
});

/// Punctuation stripped from both ends of a heading
const HEADING_TRIM: &[char] = &['*', '_', ':', '.', ';', ',', '-', '=', '`', '~', '#'];

/// A heading line found outside fenced code
struct Heading {
    index: usize,
    level: u8,
    name: String,
}

/// Splits Markdown-heading text into sections and a bibliography block
///
/// # Examples
///
/// ```
/// use lyceum_parser::SectionParser;
///
/// let parser = SectionParser::default();
/// let doc = parser.parse("## Introduction\nNeural activation increases...\n## References\nSmith, J. (2020). Title. Journal.");
///
/// assert_eq!(doc.sections.get("Introduction"), Some("Neural activation increases..."));
/// assert_eq!(doc.bibliography, "Smith, J. (2020). Title. Journal.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionParser {
    config: ParserConfig,
}

impl SectionParser {
    /// Create a parser, validating the configuration
    pub fn new(config: ParserConfig) -> Result<Self, ParserError> {
        if let Some(level) = config.heading_level {
            if !(1..=6).contains(&level) {
                return Err(ParserError::InvalidHeadingLevel(level));
            }
        }
        config.validate().map_err(ParserError::Config)?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a document
    ///
    /// Never fails: problems are reported as diagnostics on the result.
    pub fn parse(&self, text: &str) -> ParsedDocument {
        let mut doc = ParsedDocument::default();
        if text.trim().is_empty() {
            return doc;
        }

        let lines: Vec<&str> = text.lines().collect();
        let headings = self.scan_headings(&lines, &mut doc.diagnostics);

        if headings.is_empty() {
            warn!("Input has no headings; treating it as a single preamble block");
            doc.diagnostics.push(ParseDiagnostic {
                kind: DiagnosticKind::MalformedInput,
                line: 0,
                message: "no section headings found".to_string(),
            });
            doc.preamble = trim_block(&lines);
            return doc;
        }

        let (level, title_index) = self.section_level(&headings);
        doc.heading_level = Some(level);
        debug!("Sections start at heading level {}", level);

        // Headings at or above the section level delimit sections; deeper
        // ones stay in the content
        let boundaries: Vec<&Heading> = headings
            .iter()
            .filter(|h| h.level <= level && Some(h.index) != title_index)
            .collect();

        let preamble_end = boundaries.first().map(|h| h.index).unwrap_or(lines.len());
        let preamble: Vec<&str> = (0..preamble_end)
            .filter(|i| Some(*i) != title_index)
            .map(|i| lines[i])
            .collect();
        doc.preamble = trim_block(&preamble);

        if let Some(index) = title_index {
            doc.title = headings.iter().find(|h| h.index == index).map(|h| h.name.clone());
        }

        for (n, heading) in boundaries.iter().enumerate() {
            let end = boundaries.get(n + 1).map(|h| h.index).unwrap_or(lines.len());
            let body: Vec<&str> = (heading.index + 1..end)
                .filter(|i| Some(*i) != title_index)
                .map(|i| lines[i])
                .collect();
            let content = trim_block(&body);

            if self.config.is_reference_heading(&heading.name) {
                if !doc.bibliography.is_empty() && !content.is_empty() {
                    doc.bibliography.push('\n');
                }
                doc.bibliography.push_str(&content);
                continue;
            }

            if doc.sections.contains(&heading.name) {
                warn!("Repeated section heading \"{}\"; merging content", heading.name);
                doc.diagnostics.push(ParseDiagnostic {
                    kind: DiagnosticKind::DuplicateSection,
                    line: heading.index + 1,
                    message: format!("section \"{}\" repeated; content merged", heading.name),
                });
            }
            doc.sections.append(heading.name.clone(), &content);
        }

        info!(
            "Parsed {} sections ({} bibliography lines, {} diagnostics)",
            doc.sections.len(),
            doc.bibliography.lines().filter(|l| !l.trim().is_empty()).count(),
            doc.diagnostics.len()
        );

        doc
    }

    /// Find heading lines outside fenced code blocks
    fn scan_headings(&self, lines: &[&str], diagnostics: &mut Vec<ParseDiagnostic>) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut fence: Option<(char, usize)> = None;

        for (index, line) in lines.iter().enumerate() {
            if let Some((marker, width)) = fence_marker(line) {
                match fence {
                    None => fence = Some((marker, width)),
                    Some((open, open_width)) if open == marker && width >= open_width => fence = None,
                    Some(_) => {}
                }
                continue;
            }
            if fence.is_some() {
                continue;
            }

            let Some(caps) = HEADING.captures(line) else {
                continue;
            };
            let level = caps["marks"].len() as u8;
            let raw = caps.name("text").map(|m| m.as_str()).unwrap_or_default();
            let name = self.clean_heading(raw);

            if name.is_empty() {
                warn!("Heading marker without text on line {}", index + 1);
                diagnostics.push(ParseDiagnostic {
                    kind: DiagnosticKind::EmptyHeading,
                    line: index + 1,
                    message: "heading marker has no text; kept as content".to_string(),
                });
                continue;
            }

            headings.push(Heading { index, level, name });
        }

        headings
    }

    /// Pick the section level and, when present, the title heading's line
    fn section_level(&self, headings: &[Heading]) -> (u8, Option<usize>) {
        let top_level_count = headings.iter().filter(|h| h.level == 1).count();
        let deeper_level = headings.iter().filter(|h| h.level > 1).map(|h| h.level).min();

        // A lone H1 above deeper headings names the document
        let title_index = match (top_level_count, deeper_level) {
            (1, Some(_)) => headings.iter().find(|h| h.level == 1).map(|h| h.index),
            _ => None,
        };

        let level = match (self.config.heading_level, title_index, deeper_level) {
            (Some(level), _, _) => level,
            (None, Some(_), Some(deeper)) => deeper,
            _ => headings.iter().map(|h| h.level).min().unwrap_or(1),
        };

        // An explicit level-1 configuration keeps the H1 as a section
        let title_index = title_index.filter(|_| level > 1);
        (level, title_index)
    }

    fn clean_heading(&self, raw: &str) -> String {
        let text = CLOSING_HASHES.replace(raw.trim(), "");
        let mut name = text.trim().trim_matches(HEADING_TRIM).trim().to_string();
        if self.config.strip_numbering {
            name = NUMBERING
                .replace(&name, "")
                .trim()
                .trim_matches(HEADING_TRIM)
                .trim()
                .to_string();
        }
        name
    }
}

/// Opening or closing code fence: marker character and run length
fn fence_marker(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let width = trimmed.chars().take_while(|c| *c == marker).count();
    (width >= 3).then_some((marker, width))
}

/// Join lines, dropping blank lines at both ends and trailing whitespace
fn trim_block(lines: &[&str]) -> String {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n").trim_end().to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedDocument {
        SectionParser::default().parse(text)
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("   \n\n");
        assert!(doc.is_empty());
        assert!(doc.diagnostics.is_empty());
    }

    #[test]
    fn test_no_headings_is_malformed() {
        let doc = parse("\nJust a blob of text.\nSecond line.\n");
        assert_eq!(doc.preamble, "Just a blob of text.\nSecond line.");
        assert!(doc.sections.is_empty());
        assert!(doc.has_diagnostic(DiagnosticKind::MalformedInput));
    }

    #[test]
    fn test_lone_h1_becomes_title() {
        let doc = parse("# Sleep and Memory\nIntro blurb.\n## Introduction\nBody.\n### Detail\nMore.\n");
        assert_eq!(doc.title.as_deref(), Some("Sleep and Memory"));
        assert_eq!(doc.preamble, "Intro blurb.");
        assert_eq!(doc.heading_level, Some(2));
        assert_eq!(doc.sections.names(), vec!["Introduction"]);
        assert_eq!(doc.sections.get("Introduction"), Some("Body.\n### Detail\nMore."));
    }

    #[test]
    fn test_shallowest_level_detected() {
        let doc = parse("# Introduction\na\n# Methods\nb\n## Sampling\nc\n");
        assert_eq!(doc.title, None);
        assert_eq!(doc.heading_level, Some(1));
        assert_eq!(doc.sections.names(), vec!["Introduction", "Methods"]);
        assert_eq!(doc.sections.get("Methods"), Some("b\n## Sampling\nc"));
    }

    #[test]
    fn test_explicit_level() {
        let config = ParserConfig {
            heading_level: Some(3),
            ..ParserConfig::default()
        };
        let parser = SectionParser::new(config).unwrap();
        let doc = parser.parse("## Part\nx\n### A\ny\n### B\nz\n");
        assert_eq!(doc.sections.names(), vec!["Part", "A", "B"]);
        assert_eq!(doc.sections.get("Part"), Some("x"));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = ParserConfig {
            heading_level: Some(0),
            ..ParserConfig::default()
        };
        assert_eq!(
            SectionParser::new(config).unwrap_err(),
            ParserError::InvalidHeadingLevel(0)
        );
    }

    #[test]
    fn test_heading_cleanup() {
        let doc = parse("## 1. Introduction ##\na\n## 2.3 **Results:**\nb\n## IV. Discussion\nc\n");
        assert_eq!(doc.sections.names(), vec!["Introduction", "Results", "Discussion"]);
    }

    #[test]
    fn test_leading_numbers_in_names_are_kept() {
        let doc = parse("## 2020 Outlook\na\n## 3D Imaging\nb\n## 4) Limitations\nc\n## A. Appendix\nd\n");
        assert_eq!(doc.sections.names(), vec!["2020 Outlook", "3D Imaging", "Limitations", "Appendix"]);
    }

    #[test]
    fn test_numbering_kept_when_disabled() {
        let parser = SectionParser::new(ParserConfig::strict()).unwrap();
        let doc = parser.parse("## 1. Introduction\na\n");
        assert_eq!(doc.sections.names(), vec!["1. Introduction"]);
    }

    #[test]
    fn test_headings_in_code_fences_are_content() {
        let doc = parse("## Methods\n```bash\n# not a heading\n```\n## Findings\nok\n");
        assert_eq!(doc.sections.names(), vec!["Methods", "Findings"]);
        assert_eq!(doc.sections.get("Methods"), Some("```bash\n# not a heading\n```"));
    }

    #[test]
    fn test_references_separated_and_concatenated() {
        let doc = parse("## Introduction\nx\n## References\nA (2020).\n## Works Cited\nB (2021).\n");
        assert_eq!(doc.sections.names(), vec!["Introduction"]);
        assert_eq!(doc.bibliography, "A (2020).\nB (2021).");
    }

    #[test]
    fn test_duplicate_headings_merge() {
        let doc = parse("## Notes\nfirst\n## Other\nx\n## Notes\nsecond\n");
        assert_eq!(doc.sections.names(), vec!["Notes", "Other"]);
        assert_eq!(doc.sections.get("Notes"), Some("first\n\nsecond"));
        assert!(doc.has_diagnostic(DiagnosticKind::DuplicateSection));
    }

    #[test]
    fn test_empty_heading_is_content() {
        let doc = parse("## Introduction\nx\n##\ny\n");
        assert_eq!(doc.sections.get("Introduction"), Some("x\n##\ny"));
        assert!(doc.has_diagnostic(DiagnosticKind::EmptyHeading));
    }

    #[test]
    fn test_hashtag_is_not_heading() {
        let doc = parse("## Introduction\n#hashtag text\n");
        assert_eq!(doc.sections.get("Introduction"), Some("#hashtag text"));
    }

    #[test]
    fn test_preamble_before_first_heading() {
        let doc = parse("This study examines sleep.\n\n## Introduction\nx\n");
        assert_eq!(doc.preamble, "This study examines sleep.");
        assert_eq!(doc.title, None);
    }
}
