//! Parse formatted reference lines back into bibliographic fields
//!
//! Recovers authors, year, title and venue from references in
//! any supported style. APA and AMA titles are unquoted, so their end is
//! found at the first period that does not close an abbreviation
//! ("U.S.", "Dr.", "vs."); AMA titles are further bounded by the
//! year locator.

use crate::styles::{NO_DATE, UNKNOWN_AUTHOR};
use lyceum_domain::{Citation, CitationStyle};
use regex::Regex;
use std::sync::LazyLock;

static APA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<authors>.+?)\s*\((?P<year>\d{4})[a-z]?\)\.\s*(?P<rest>.*)$|^(?P<nd_authors>.+?)\s*\(n\.d\.\)\.\s*(?P<nd_rest>.*)$")
        .expect("APA pattern is valid")
});

static CHICAGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<authors>.+?)\.?\s+(?P<year>\d{4}[a-z]?|n\.d\.)\.?\s+"(?P<title>[^"]+?[.?!])"\s*(?P<rest>.*)$"#)
        .expect("Chicago pattern is valid")
});

static MLA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<authors>[^"]+?)\s+"(?P<title>[^"]+?[.?!])"\s*(?P<rest>.*)$"#).expect("MLA pattern is valid")
});

static IEEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:\[\d+\]\s*)?(?P<authors>[^"]+?),\s+"(?P<title>[^"]+?[,?!])"\s*(?P<rest>.*)$"#)
        .expect("IEEE pattern is valid")
});

static AMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<authors>[^.]+)\.\s+(?P<rest>.+)$").expect("AMA pattern is valid")
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s,;(])(?P<year>\d{4}|n\.d\.)(?:[a-z])?(?:[,;.)(]|$)").expect("year pattern is valid")
});

/// AMA locator: "2020;12(3):45-67." or "n.d."
static LOCATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{4}[a-z]?(?:[;.(:]|$)|n\.d\.(?:\s|$))").expect("locator pattern is valid"));

/// Abbreviations whose period does not end a title
const ABBREVIATIONS: &[&str] = &[
    "Dr", "Mr", "Mrs", "Ms", "Prof", "St", "Jr", "Sr", "No", "Vol", "Inc", "vs", "cf",
];

static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[\d+\]").expect("number pattern is valid"));

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•]|\d{1,3}\.)\s+").expect("list marker pattern is valid")
});

/// Fields recovered from one reference line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Style the line was parsed as
    pub style: CitationStyle,
    /// Author names; compact AMA initials are expanded to "Family, J. A."
    pub authors: Vec<String>,
    /// Family name of the first author
    pub first_author_surname: String,
    /// Publication year, `None` for "n.d."
    pub year: Option<u16>,
    /// Title without trailing separator punctuation
    pub title: String,
    /// Container title, empty when absent
    pub venue: String,
}

impl ParsedReference {
    /// Convert into a citation record
    ///
    /// The "Unknown" author placeholder becomes an empty author list.
    pub fn into_citation(self) -> Citation {
        let authors = if self.authors.len() == 1 && self.authors[0] == UNKNOWN_AUTHOR {
            Vec::new()
        } else {
            self.authors
        };
        Citation::new(authors, self.year, self.title, self.venue)
    }
}

/// Parse a reference formatted in a known style
pub fn parse_reference(style: CitationStyle, line: &str) -> Option<ParsedReference> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parsed = match style {
        CitationStyle::Apa => parse_apa(line),
        CitationStyle::Mla => parse_mla(line),
        CitationStyle::Chicago => parse_chicago(line),
        CitationStyle::Ieee => parse_ieee(line),
        CitationStyle::Ama => parse_ama(line),
    }?;

    (!parsed.title.is_empty()).then_some(parsed)
}

/// Parse a reference line in whichever style matches first
///
/// Leading list markers ("- ", "1. ") are ignored. Lines starting with a
/// bracketed number are treated as IEEE.
pub fn parse_any(line: &str) -> Option<ParsedReference> {
    let line = strip_list_marker(line);
    if NUMBERED.is_match(&line) {
        return parse_reference(CitationStyle::Ieee, &line);
    }

    [
        CitationStyle::Apa,
        CitationStyle::Chicago,
        CitationStyle::Mla,
        CitationStyle::Ieee,
        CitationStyle::Ama,
    ]
    .into_iter()
    .find_map(|style| parse_reference(style, &line))
}

/// Remove a leading bullet or "1." marker
pub(crate) fn strip_list_marker(line: &str) -> std::borrow::Cow<'_, str> {
    LIST_MARKER.replace(line.trim(), "")
}

fn parse_apa(line: &str) -> Option<ParsedReference> {
    let caps = APA.captures(line)?;
    let (authors, year, rest) = match caps.name("authors") {
        Some(authors) => (authors.as_str(), parse_year(&caps["year"]), caps.name("rest")?.as_str()),
        None => (caps.name("nd_authors")?.as_str(), None, caps.name("nd_rest")?.as_str()),
    };

    let (title, remainder) = split_title(rest);
    let authors = split_inverted_initials(authors);
    let first_author_surname = authors.first().map(|a| surname_before_comma(a)).unwrap_or_default();

    Some(ParsedReference {
        style: CitationStyle::Apa,
        first_author_surname,
        authors,
        year,
        title,
        venue: venue_segment(remainder),
    })
}

fn parse_mla(line: &str) -> Option<ParsedReference> {
    let caps = MLA.captures(line)?;
    let authors_text = caps["authors"].trim();
    let authors_text = authors_text.strip_suffix('.').unwrap_or(authors_text);
    let rest = caps["rest"].trim();

    let venue = venue_segment(rest);

    let authors = split_mla_authors(authors_text);
    let first_author_surname = authors.first().map(|a| surname_before_comma(a)).unwrap_or_default();

    Some(ParsedReference {
        style: CitationStyle::Mla,
        first_author_surname,
        authors,
        year: find_year(rest),
        title: clean_quoted_title(&caps["title"]),
        venue,
    })
}

fn parse_chicago(line: &str) -> Option<ParsedReference> {
    let caps = CHICAGO.captures(line)?;
    let authors = split_mla_authors(caps["authors"].trim());
    let first_author_surname = authors.first().map(|a| surname_before_comma(a)).unwrap_or_default();

    let rest = caps["rest"].trim();
    let venue_end = rest
        .char_indices()
        .find(|(i, c)| {
            matches!(c, ',' | ':')
                || (*c == '.' && rest[i + 1..].starts_with(' '))
                || (*c == '.' && i + 1 == rest.len())
                || (*c == ' ' && rest[i + 1..].starts_with(|n: char| n.is_ascii_digit() || n == '('))
        })
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Some(ParsedReference {
        style: CitationStyle::Chicago,
        first_author_surname,
        authors,
        year: parse_year(&caps["year"]),
        title: clean_quoted_title(&caps["title"]),
        venue: if rest.starts_with("http") || rest.starts_with("doi:") {
            String::new()
        } else {
            rest[..venue_end].trim().to_string()
        },
    })
}

fn parse_ieee(line: &str) -> Option<ParsedReference> {
    let caps = IEEE.captures(line)?;
    let rest = caps["rest"].trim();

    let venue = venue_segment(rest);

    let authors: Vec<String> = split_conjoined(caps["authors"].trim());
    let first_author_surname = authors
        .first()
        .map(|a| family_after_initials(a))
        .unwrap_or_default();

    Some(ParsedReference {
        style: CitationStyle::Ieee,
        first_author_surname,
        authors,
        year: find_last_year(rest),
        title: clean_quoted_title(&caps["title"]),
        venue,
    })
}

fn parse_ama(line: &str) -> Option<ParsedReference> {
    let caps = AMA.captures(line)?;
    let (head, locator) = split_locator(caps["rest"].trim());
    let (title, remainder) = split_title(head);

    let (venue, year) = if locator.is_empty() {
        let venue = match YEAR.find(remainder).map(|m| m.start()) {
            Some(0) | None => String::new(),
            Some(start) => remainder[..start].trim().trim_end_matches('.').to_string(),
        };
        (venue, find_year(remainder))
    } else {
        (remainder.trim().trim_end_matches('.').trim().to_string(), find_year(locator))
    };

    let authors: Vec<String> = caps["authors"]
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty() && *a != "et al")
        .map(invert_compact_initials)
        .collect();
    let first_author_surname = authors.first().map(|a| surname_before_comma(a)).unwrap_or_default();

    Some(ParsedReference {
        style: CitationStyle::Ama,
        first_author_surname,
        authors,
        year,
        title,
        venue,
    })
}

fn parse_year(text: &str) -> Option<u16> {
    if text.starts_with(NO_DATE) {
        return None;
    }
    text.get(..4)?.parse().ok()
}

fn find_year(text: &str) -> Option<u16> {
    YEAR.captures(text).and_then(|c| parse_year(&c["year"]))
}

fn find_last_year(text: &str) -> Option<u16> {
    YEAR.captures_iter(text).last().and_then(|c| parse_year(&c["year"]))
}

fn is_year_like(text: &str) -> bool {
    text.is_empty() || text.starts_with("n.d") || (text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()))
}

/// Split at the first sentence terminator followed by a space or the end;
/// "?" and "!" stay with the title
fn split_title(text: &str) -> (String, &str) {
    let text = text.trim();
    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | '?' | '!') {
            continue;
        }
        let after = &text[i + c.len_utf8()..];
        if !after.is_empty() && !after.starts_with(' ') {
            continue;
        }
        if c == '.' && !after.is_empty() && closes_abbreviation(&text[..i]) {
            continue;
        }
        let title = if c == '.' { &text[..i] } else { &text[..i + c.len_utf8()] };
        return (title.trim().to_string(), after.trim());
    }
    (text.to_string(), "")
}

/// Split an AMA body before its year locator
///
/// The head keeps its closing period; without a locator the whole text is
/// the head.
fn split_locator(text: &str) -> (&str, &str) {
    for (i, c) in text.char_indices() {
        if c != '.' {
            continue;
        }
        let after = &text[i + 1..];
        if after.starts_with(' ') && LOCATOR.is_match(after.trim_start()) {
            return (&text[..=i], after.trim());
        }
    }
    (text, "")
}

/// Whether a period right after `before` closes an abbreviation: a single
/// letter, a dotted run such as "U.S" or "e.g", or a listed short form
fn closes_abbreviation(before: &str) -> bool {
    let token = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(['(', '"', '\'']);
    if token.is_empty() {
        return false;
    }

    let single_letter = token.chars().count() == 1 && token.chars().all(char::is_alphabetic);
    let dotted = token.contains('.')
        && token
            .split('.')
            .all(|part| (1..=2).contains(&part.chars().count()) && part.chars().all(char::is_alphabetic));

    single_letter || dotted || ABBREVIATIONS.contains(&token)
}

/// Leading segment unless it is a year, a link or a DOI
fn venue_segment(text: &str) -> String {
    let segment = leading_segment(text);
    if is_year_like(&segment) || segment.starts_with("http") || segment.starts_with("doi:") {
        String::new()
    } else {
        segment
    }
}

/// Text up to the first comma or sentence-ending period
fn leading_segment(text: &str) -> String {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|(i, c)| {
            *c == ','
                || (*c == '.'
                    && (i + 1 == text.len() || (text[i + 1..].starts_with(' ') && !closes_abbreviation(&text[..*i]))))
        })
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end].trim().to_string()
}

fn clean_quoted_title(title: &str) -> String {
    title.trim().trim_end_matches([',', '.']).trim().to_string()
}

fn surname_before_comma(author: &str) -> String {
    author.split(',').next().unwrap_or_default().trim().to_string()
}

/// "J. A. van Beethoven" -> "van Beethoven"
fn family_after_initials(author: &str) -> String {
    let tokens: Vec<&str> = author.split_whitespace().collect();
    let start = tokens
        .iter()
        .rposition(|t| is_initial(t))
        .map(|i| i + 1)
        .unwrap_or(0);
    if start >= tokens.len() {
        return tokens.last().map(|t| t.to_string()).unwrap_or_default();
    }
    tokens[start..].join(" ")
}

/// "van Beethoven LW" -> "van Beethoven, L. W."
fn invert_compact_initials(author: &str) -> String {
    let tokens: Vec<&str> = author.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() && last.chars().all(|c| c.is_uppercase()) => {
            let initials: Vec<String> = last.chars().map(|c| format!("{}.", c)).collect();
            format!("{}, {}", rest.join(" "), initials.join(" "))
        }
        _ => author.trim().to_string(),
    }
}

fn is_initial(token: &str) -> bool {
    token
        .split('-')
        .all(|part| {
            let mut chars = part.chars();
            matches!((chars.next(), chars.next(), chars.next()), (Some(c), Some('.'), None) if c.is_uppercase())
        })
}

/// "Smith, J. A., & Doe, J." -> ["Smith, J. A.", "Doe, J."]
fn split_inverted_initials(text: &str) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for token in text.split(", ") {
        let token = token.trim().trim_start_matches("& ").trim();
        if token.is_empty() || token.starts_with(". . .") {
            if let Some(rest) = token.strip_prefix(". . .") {
                if !rest.trim().is_empty() {
                    authors.push(rest.trim().to_string());
                }
            }
            continue;
        }
        let looks_like_initials = token.split_whitespace().all(is_initial);
        match authors.last_mut() {
            Some(last) if looks_like_initials && !last.contains(',') => {
                last.push_str(", ");
                last.push_str(token);
            }
            _ => authors.push(token.to_string()),
        }
    }
    authors
}

/// "Smith, John, and Jane Doe" -> ["Smith, John", "Jane Doe"]
///
/// Only the first author is inverted; a first author without given names
/// is followed directly by "and".
fn split_mla_authors(text: &str) -> Vec<String> {
    let text = text.trim().trim_end_matches('.');
    let text = text.strip_suffix(" et al").unwrap_or(text).trim_end_matches(',');

    let Some((family, rest)) = text.split_once(", ") else {
        return split_conjoined(text);
    };
    if rest.starts_with("and ") {
        return split_conjoined(text);
    }

    let (given, others) = rest.split_once(", ").unwrap_or((rest, ""));
    let mut authors = vec![format!("{}, {}", family, given)];
    authors.extend(split_conjoined(others.trim_start_matches("and ")));
    authors
}

/// Split "a, b, and c" / "a and b" / "a et al." into names
fn split_conjoined(text: &str) -> Vec<String> {
    let text = text.trim().trim_end_matches('.');
    let text = text.strip_suffix(" et al").unwrap_or(text);
    text.replace(", and ", ", ")
        .replace(" and ", ", ")
        .split(", ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
