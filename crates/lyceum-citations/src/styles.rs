//! Per-style reference and in-text formatting
//!
//! Every formatter omits absent optional fields together with their
//! punctuation. Missing mandatory fields are replaced by placeholders and
//! reported back to the caller.

use lyceum_domain::{Citation, CitationStyle, MandatoryField, PersonName};

/// Placeholder for a missing author list
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Placeholder for a missing year
pub const NO_DATE: &str = "n.d.";

/// Placeholder for a missing title
pub const UNTITLED: &str = "Untitled";

/// A formatted reference plus the placeholders it needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReference {
    /// Reference text, without any list number
    pub text: String,
    /// Mandatory fields that were replaced by placeholders
    pub substituted: Vec<MandatoryField>,
}

/// Format one citation in the given style
pub fn format_reference(style: CitationStyle, citation: &Citation) -> FormattedReference {
    let names: Vec<PersonName> = citation.authors.iter().map(|a| PersonName::parse(a)).collect();
    let year = citation
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| NO_DATE.to_string());
    let title = if citation.title.trim().is_empty() {
        UNTITLED
    } else {
        citation.title.trim()
    };

    let text = match style {
        CitationStyle::Apa => apa(citation, &names, &year, title),
        CitationStyle::Mla => mla(citation, &names, &year, title),
        CitationStyle::Chicago => chicago(citation, &names, &year, title),
        CitationStyle::Ieee => ieee(citation, &names, &year, title),
        CitationStyle::Ama => ama(citation, &names, &year, title),
    };

    FormattedReference {
        text,
        substituted: citation.missing_mandatory(),
    }
}

/// In-text marker for a citation
///
/// `number` is the entry's position in the rendered list and is only used
/// by the numbered styles (IEEE, AMA).
pub fn format_in_text(style: CitationStyle, citation: &Citation, number: usize) -> String {
    let surnames: Vec<String> = citation
        .authors
        .iter()
        .map(|a| PersonName::parse(a).family)
        .collect();
    let year = citation
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| NO_DATE.to_string());

    let lead = |and: &str, et_al: &str| match surnames.as_slice() {
        [] => UNKNOWN_AUTHOR.to_string(),
        [one] => one.clone(),
        [a, b] => format!("{} {} {}", a, and, b),
        [first, ..] => format!("{} {}", first, et_al),
    };

    match style {
        CitationStyle::Apa => format!("({}, {})", lead("&", "et al."), year),
        CitationStyle::Chicago => format!("({} {})", lead("and", "et al."), year),
        CitationStyle::Mla => format!("({})", lead("and", "et al.")),
        CitationStyle::Ieee => format!("[{}]", number),
        CitationStyle::Ama => number.to_string(),
    }
}

/// Append a period unless the text already ends in terminal punctuation
pub(crate) fn terminate(text: &str) -> String {
    if text.ends_with(['.', '?', '!']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

fn doi_link(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}

fn page_label(pages: &str) -> &'static str {
    if pages.contains(['-', '–', ',']) {
        "pp."
    } else {
        "p."
    }
}

/// Join with commas and a final conjunction; `serial` adds the comma
/// before the conjunction for lists of two
fn join_list(items: &[String], conjunction: &str, serial_for_two: bool) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] if serial_for_two => format!("{}, {} {}", a, conjunction, b),
        [a, b] => format!("{} {} {}", a, conjunction, b),
        [init @ .., last] => format!("{}, {} {}", init.join(", "), conjunction, last),
    }
}

fn with_initials(family: &str, initials: &str, inverted: bool) -> String {
    match (initials.is_empty(), inverted) {
        (true, _) => family.to_string(),
        (false, true) => format!("{}, {}", family, initials),
        (false, false) => format!("{} {}", initials, family),
    }
}

// APA: Smith, J. A., & Doe, J. (2020). Title. Venue, 12(3), 45-67. https://doi.org/...
fn apa(citation: &Citation, names: &[PersonName], year: &str, title: &str) -> String {
    let formatted: Vec<String> = names
        .iter()
        .map(|n| with_initials(&n.family, &n.initials(), true))
        .collect();

    let authors = match formatted.len() {
        0 => UNKNOWN_AUTHOR.to_string(),
        n if n > 20 => format!("{}, . . . {}", formatted[..19].join(", "), formatted[n - 1]),
        _ => join_list(&formatted, "&", true),
    };

    let mut parts = vec![format!("{} ({}).", authors, year), terminate(title)];

    if !citation.venue.is_empty() {
        let mut container = citation.venue.clone();
        match (&citation.volume, &citation.issue) {
            (Some(volume), Some(issue)) => container.push_str(&format!(", {}({})", volume, issue)),
            (Some(volume), None) => container.push_str(&format!(", {}", volume)),
            (None, Some(issue)) => container.push_str(&format!(", ({})", issue)),
            (None, None) => {}
        }
        if let Some(pages) = &citation.pages {
            container.push_str(&format!(", {}", pages));
        }
        parts.push(terminate(&container));
    }

    if let Some(doi) = &citation.doi {
        parts.push(doi_link(doi));
    } else if let Some(url) = &citation.url {
        parts.push(url.clone());
    }

    parts.join(" ")
}

// MLA: Smith, John, and Jane Doe. "Title." Venue, vol. 12, no. 3, 2020, pp. 45-67. https://doi.org/....
fn mla(citation: &Citation, names: &[PersonName], year: &str, title: &str) -> String {
    let authors = match names {
        [] => UNKNOWN_AUTHOR.to_string(),
        [one] => one.inverted(),
        [a, b] => format!("{}, and {}", a.inverted(), b.display_full()),
        [first, ..] => format!("{}, et al.", first.inverted()),
    };

    let mut container = Vec::new();
    if !citation.venue.is_empty() {
        container.push(citation.venue.clone());
        if let Some(volume) = &citation.volume {
            container.push(format!("vol. {}", volume));
        }
        if let Some(issue) = &citation.issue {
            container.push(format!("no. {}", issue));
        }
    }
    container.push(year.to_string());
    if !citation.venue.is_empty() {
        if let Some(pages) = &citation.pages {
            container.push(format!("{} {}", page_label(pages), pages));
        }
    }

    let mut parts = vec![
        terminate(&authors),
        format!("\"{}\"", terminate(title)),
        terminate(&container.join(", ")),
    ];

    if let Some(doi) = &citation.doi {
        parts.push(terminate(&doi_link(doi)));
    } else if let Some(url) = &citation.url {
        parts.push(terminate(url));
    }

    parts.join(" ")
}

// Chicago author-date: Smith, John, and Jane Doe. 2020. "Title." Venue 12 (3): 45-67. https://doi.org/....
fn chicago(citation: &Citation, names: &[PersonName], year: &str, title: &str) -> String {
    let mut formatted: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, n)| if i == 0 { n.inverted() } else { n.display_full() })
        .collect();

    let authors = match formatted.len() {
        0 => UNKNOWN_AUTHOR.to_string(),
        n if n > 10 => {
            formatted.truncate(7);
            format!("{}, et al.", formatted.join(", "))
        }
        _ => join_list(&formatted, "and", true),
    };

    let mut parts = vec![
        terminate(&authors),
        terminate(year),
        format!("\"{}\"", terminate(title)),
    ];

    if !citation.venue.is_empty() {
        let mut container = citation.venue.clone();
        if let Some(volume) = &citation.volume {
            container.push_str(&format!(" {}", volume));
        }
        if let Some(issue) = &citation.issue {
            container.push_str(&format!(" ({})", issue));
        }
        if let Some(pages) = &citation.pages {
            let has_locator = citation.volume.is_some() || citation.issue.is_some();
            container.push_str(&format!("{} {}", if has_locator { ":" } else { "," }, pages));
        }
        parts.push(terminate(&container));
    }

    if let Some(doi) = &citation.doi {
        parts.push(terminate(&doi_link(doi)));
    } else if let Some(url) = &citation.url {
        parts.push(terminate(url));
    }

    parts.join(" ")
}

// IEEE: J. A. Smith and J. Doe, "Title," Venue, vol. 12, no. 3, pp. 45-67, 2020, doi: 10.x.
fn ieee(citation: &Citation, names: &[PersonName], year: &str, title: &str) -> String {
    let formatted: Vec<String> = names
        .iter()
        .map(|n| with_initials(&n.family, &n.initials(), false))
        .collect();

    let authors = match formatted.len() {
        0 => UNKNOWN_AUTHOR.to_string(),
        n if n > 6 => format!("{} et al.", formatted[0]),
        _ => join_list(&formatted, "and", false),
    };

    let quoted_title = if title.ends_with(['?', '!']) {
        format!("\"{}\"", title)
    } else {
        format!("\"{},\"", title.trim_end_matches('.'))
    };

    let mut details = Vec::new();
    if !citation.venue.is_empty() {
        details.push(citation.venue.clone());
        if let Some(volume) = &citation.volume {
            details.push(format!("vol. {}", volume));
        }
        if let Some(issue) = &citation.issue {
            details.push(format!("no. {}", issue));
        }
        if let Some(pages) = &citation.pages {
            details.push(format!("{} {}", page_label(pages), pages));
        }
    }
    details.push(year.to_string());
    if let Some(doi) = &citation.doi {
        details.push(format!("doi: {}", doi));
    }

    let mut text = format!("{}, {} {}", authors, quoted_title, terminate(&details.join(", ")));
    if citation.doi.is_none() {
        if let Some(url) = &citation.url {
            text.push_str(&format!(" [Online]. Available: {}", url));
        }
    }
    text
}

// AMA: Smith JA, Doe J. Title. Venue. 2020;12(3):45-67. doi:10.x
fn ama(citation: &Citation, names: &[PersonName], year: &str, title: &str) -> String {
    let formatted: Vec<String> = names
        .iter()
        .map(|n| {
            let initials = n.initials_compact();
            if initials.is_empty() {
                n.family.clone()
            } else {
                format!("{} {}", n.family, initials)
            }
        })
        .collect();

    let authors = match formatted.len() {
        0 => UNKNOWN_AUTHOR.to_string(),
        n if n > 6 => format!("{}, et al", formatted[..3].join(", ")),
        _ => formatted.join(", "),
    };

    let mut locator = year.to_string();
    if !citation.venue.is_empty() {
        if let Some(volume) = &citation.volume {
            locator.push_str(&format!(";{}", volume));
        }
        if let Some(issue) = &citation.issue {
            locator.push_str(&format!("({})", issue));
        }
        if let Some(pages) = &citation.pages {
            locator.push_str(&format!(":{}", pages));
        }
    }

    let mut parts = vec![terminate(&authors), terminate(title)];
    if !citation.venue.is_empty() {
        parts.push(terminate(&citation.venue));
    }
    parts.push(terminate(&locator));

    if let Some(doi) = &citation.doi {
        parts.push(format!("doi:{}", doi));
    } else if let Some(url) = &citation.url {
        parts.push(url.clone());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Citation {
        Citation::new(
            vec!["John A. Smith".to_string(), "Jane Doe".to_string()],
            Some(2020),
            "Neural correlates of risky choice",
            "Journal of Neuroscience",
        )
        .with_volume("12")
        .with_issue("3")
        .with_pages("45-67")
        .with_doi("10.1000/jn.2020.1")
    }

    fn minimal() -> Citation {
        Citation::new(vec!["John Smith".to_string()], Some(2020), "Title", "")
    }

    #[test]
    fn test_apa_full() {
        let formatted = format_reference(CitationStyle::Apa, &full());
        assert_eq!(
            formatted.text,
            "Smith, J. A., & Doe, J. (2020). Neural correlates of risky choice. Journal of Neuroscience, 12(3), 45-67. https://doi.org/10.1000/jn.2020.1"
        );
        assert!(formatted.substituted.is_empty());
    }

    #[test]
    fn test_apa_minimal_has_no_stray_punctuation() {
        let formatted = format_reference(CitationStyle::Apa, &minimal());
        assert_eq!(formatted.text, "Smith, J. (2020). Title.");
    }

    #[test]
    fn test_apa_many_authors_ellipsis() {
        let authors = (0..25).map(|i| format!("Ann Author{}", i)).collect();
        let citation = Citation::new(authors, Some(2020), "Big team", "");
        let text = format_reference(CitationStyle::Apa, &citation).text;
        assert!(text.contains(". . . Author24, A."));
        assert!(!text.contains("Author20,"));
    }

    #[test]
    fn test_mla_full() {
        let formatted = format_reference(CitationStyle::Mla, &full());
        assert_eq!(
            formatted.text,
            "Smith, John A., and Jane Doe. \"Neural correlates of risky choice.\" Journal of Neuroscience, vol. 12, no. 3, 2020, pp. 45-67. https://doi.org/10.1000/jn.2020.1."
        );
    }

    #[test]
    fn test_mla_three_authors_et_al() {
        let mut citation = minimal();
        citation.authors = vec!["John Smith".into(), "Jane Doe".into(), "Kim Lee".into()];
        let text = format_reference(CitationStyle::Mla, &citation).text;
        assert_eq!(text, "Smith, John, et al. \"Title.\" 2020.");
    }

    #[test]
    fn test_chicago_full() {
        let formatted = format_reference(CitationStyle::Chicago, &full());
        assert_eq!(
            formatted.text,
            "Smith, John A., and Jane Doe. 2020. \"Neural correlates of risky choice.\" Journal of Neuroscience 12 (3): 45-67. https://doi.org/10.1000/jn.2020.1."
        );
    }

    #[test]
    fn test_chicago_minimal() {
        let text = format_reference(CitationStyle::Chicago, &minimal()).text;
        assert_eq!(text, "Smith, John. 2020. \"Title.\"");
    }

    #[test]
    fn test_ieee_full() {
        let formatted = format_reference(CitationStyle::Ieee, &full());
        assert_eq!(
            formatted.text,
            "J. A. Smith and J. Doe, \"Neural correlates of risky choice,\" Journal of Neuroscience, vol. 12, no. 3, pp. 45-67, 2020, doi: 10.1000/jn.2020.1."
        );
    }

    #[test]
    fn test_ieee_minimal() {
        let text = format_reference(CitationStyle::Ieee, &minimal()).text;
        assert_eq!(text, "J. Smith, \"Title,\" 2020.");
    }

    #[test]
    fn test_ieee_question_title_keeps_mark() {
        let mut citation = minimal();
        citation.title = "Does sleep help?".to_string();
        let text = format_reference(CitationStyle::Ieee, &citation).text;
        assert_eq!(text, "J. Smith, \"Does sleep help?\" 2020.");
    }

    #[test]
    fn test_ama_full() {
        let formatted = format_reference(CitationStyle::Ama, &full());
        assert_eq!(
            formatted.text,
            "Smith JA, Doe J. Neural correlates of risky choice. Journal of Neuroscience. 2020;12(3):45-67. doi:10.1000/jn.2020.1"
        );
    }

    #[test]
    fn test_ama_many_authors() {
        let authors = (0..8).map(|i| format!("Ann Author{}", i)).collect();
        let citation = Citation::new(authors, Some(2019), "Team", "");
        let text = format_reference(CitationStyle::Ama, &citation).text;
        assert_eq!(text, "Author0 A, Author1 A, Author2 A, et al. Team. 2019.");
    }

    #[test]
    fn test_placeholders_reported() {
        let citation = Citation::default();
        for style in CitationStyle::ALL {
            let formatted = format_reference(style, &citation);
            assert!(formatted.text.contains(UNKNOWN_AUTHOR), "{}: {}", style, formatted.text);
            assert!(formatted.text.contains(NO_DATE), "{}: {}", style, formatted.text);
            assert!(formatted.text.contains(UNTITLED), "{}: {}", style, formatted.text);
            assert_eq!(formatted.substituted.len(), 3);
        }
    }

    #[test]
    fn test_ama_no_date() {
        let citation = Citation::new(vec!["John Smith".into()], None, "Title", "");
        let text = format_reference(CitationStyle::Ama, &citation).text;
        assert_eq!(text, "Smith J. Title. n.d.");
    }

    #[test]
    fn test_url_used_when_no_doi() {
        let citation = minimal().with_url("https://example.org/paper");
        let text = format_reference(CitationStyle::Apa, &citation).text;
        assert!(text.ends_with("Title. https://example.org/paper"));
    }

    #[test]
    fn test_in_text_markers() {
        let one = minimal();
        let two = full();
        let mut three = full();
        three.authors.push("Kim Lee".to_string());

        assert_eq!(format_in_text(CitationStyle::Apa, &one, 1), "(Smith, 2020)");
        assert_eq!(format_in_text(CitationStyle::Apa, &two, 1), "(Smith & Doe, 2020)");
        assert_eq!(format_in_text(CitationStyle::Apa, &three, 1), "(Smith et al., 2020)");
        assert_eq!(format_in_text(CitationStyle::Chicago, &two, 1), "(Smith and Doe 2020)");
        assert_eq!(format_in_text(CitationStyle::Mla, &one, 1), "(Smith)");
        assert_eq!(format_in_text(CitationStyle::Ieee, &one, 4), "[4]");
        assert_eq!(format_in_text(CitationStyle::Ama, &one, 2), "2");
    }
}
