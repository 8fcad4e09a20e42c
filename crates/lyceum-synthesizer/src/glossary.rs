//! Curated cross-discipline glossary
//!
//! Each term maps to the meaning it carries in the disciplines that use it
//! with a distinct sense. Lookups ignore case; unknown terms yield an empty
//! map.

use crate::profiles::keyword_regex;
use lyceum_domain::Discipline;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

type Meanings = &'static [(Discipline, &'static str)];

const GLOSSARY: &[(&str, Meanings)] = &[
    (
        "significance",
        &[
            (Discipline::Mathematics, "probability bound under which a result is unlikely to arise by chance"),
            (Discipline::Psychology, "statistical threshold (typically p < .05) for rejecting the null hypothesis"),
            (Discipline::History, "lasting importance of an event for later developments"),
            (Discipline::Literature, "interpretive weight a text or motif carries"),
        ],
    ),
    (
        "model",
        &[
            (Discipline::ComputerScience, "trained function that maps inputs to predictions"),
            (Discipline::Economics, "simplified formal representation of agents and markets"),
            (Discipline::Biology, "organism studied as a proxy for others, such as mice or zebrafish"),
            (Discipline::Physics, "mathematical description of a physical system"),
        ],
    ),
    (
        "plasticity",
        &[
            (Discipline::Neuroscience, "capacity of synapses and circuits to change with experience"),
            (Discipline::Biology, "ability of one genotype to produce several phenotypes"),
            (Discipline::Engineering, "permanent deformation of a material beyond its yield point"),
        ],
    ),
    (
        "utility",
        &[
            (Discipline::Economics, "numerical measure of preference satisfaction"),
            (Discipline::Philosophy, "the good maximized under utilitarian ethics"),
            (Discipline::ComputerScience, "helper program or library routine"),
        ],
    ),
    (
        "memory",
        &[
            (Discipline::Psychology, "encoding, storage and retrieval of experience"),
            (Discipline::Neuroscience, "lasting change in synaptic connectivity that stores information"),
            (Discipline::ComputerScience, "addressable storage for program data"),
            (Discipline::History, "collective remembrance of the past by a community"),
        ],
    ),
    (
        "culture",
        &[
            (Discipline::Anthropology, "shared beliefs and practices of a group"),
            (Discipline::Biology, "microorganisms grown in a controlled medium"),
            (Discipline::Sociology, "norms and values that organize social life"),
        ],
    ),
    (
        "power",
        &[
            (Discipline::Physics, "rate of energy transfer per unit time"),
            (Discipline::Mathematics, "exponent applied to a base"),
            (Discipline::PoliticalScience, "capacity to shape the behavior of others"),
            (Discipline::Psychology, "probability that a study detects a true effect"),
        ],
    ),
    (
        "equilibrium",
        &[
            (Discipline::Economics, "state in which supply equals demand and no agent deviates"),
            (Discipline::Chemistry, "state in which forward and reverse reaction rates are equal"),
            (Discipline::Physics, "state with zero net force or energy flow"),
        ],
    ),
    (
        "resistance",
        &[
            (Discipline::Physics, "opposition to electric current"),
            (Discipline::Medicine, "reduced responsiveness of a pathogen or tissue to treatment"),
            (Discipline::PoliticalScience, "organized opposition to authority"),
        ],
    ),
    (
        "conditioning",
        &[
            (Discipline::Psychology, "learning through association of stimuli and responses"),
            (Discipline::Engineering, "adjusting a signal or environment to a required range"),
        ],
    ),
    (
        "agent",
        &[
            (Discipline::Economics, "decision-maker with preferences and constraints"),
            (Discipline::ComputerScience, "autonomous program that perceives and acts"),
            (Discipline::Pharmacology, "substance that produces a biological effect"),
            (Discipline::Law, "person authorized to act on behalf of a principal"),
        ],
    ),
    (
        "reinforcement",
        &[
            (Discipline::Psychology, "consequence that increases the likelihood of a behavior"),
            (Discipline::ComputerScience, "reward signal used to train a policy"),
            (Discipline::Engineering, "material added to strengthen a structure"),
        ],
    ),
    (
        "stress",
        &[
            (Discipline::Psychology, "perceived demand exceeding coping resources"),
            (Discipline::Engineering, "internal force per unit area in a material"),
            (Discipline::Linguistics, "relative emphasis on a syllable"),
            (Discipline::Medicine, "physiological response to a threat"),
        ],
    ),
    (
        "validity",
        &[
            (Discipline::Psychology, "degree to which an instrument measures what it claims to"),
            (Discipline::Philosophy, "property of an argument whose conclusion follows from its premises"),
            (Discipline::Law, "legal force of a contract or statute"),
        ],
    ),
    (
        "discourse",
        &[
            (Discipline::Linguistics, "language in use beyond the single sentence"),
            (Discipline::Sociology, "ways of speaking that constitute social knowledge"),
            (Discipline::Philosophy, "structured body of statements governed by rules of formation"),
        ],
    ),
    (
        "evolution",
        &[
            (Discipline::Biology, "change in heritable traits across generations"),
            (Discipline::ComputerScience, "search through mutation and selection of candidate solutions"),
            (Discipline::History, "gradual development of institutions over time"),
        ],
    ),
    (
        "network",
        &[
            (Discipline::ComputerScience, "interconnected computing nodes or a neural network model"),
            (Discipline::Sociology, "set of social ties among actors"),
            (Discipline::Neuroscience, "functionally coupled brain regions"),
        ],
    ),
    (
        "risk",
        &[
            (Discipline::Economics, "variance of returns that investors are compensated for bearing"),
            (Discipline::Psychology, "subjective perception of potential loss"),
            (Discipline::PublicHealth, "probability of an adverse health outcome in a population"),
            (Discipline::Medicine, "likelihood that a patient develops a condition"),
        ],
    ),
];

struct GlossaryEntry {
    term: &'static str,
    meanings: Meanings,
    matcher: Regex,
}

static ENTRIES: LazyLock<Vec<GlossaryEntry>> = LazyLock::new(|| {
    GLOSSARY
        .iter()
        .map(|&(term, meanings)| GlossaryEntry {
            term,
            meanings,
            matcher: keyword_regex(&[term]),
        })
        .collect()
});

/// Every glossary term, in table order
pub fn terms() -> Vec<&'static str> {
    GLOSSARY.iter().map(|(term, _)| *term).collect()
}

/// Meanings of a term in every discipline that defines one
///
/// # Examples
///
/// ```
/// use lyceum_domain::Discipline;
/// use lyceum_synthesizer::glossary;
///
/// let meanings = glossary::translate("Plasticity");
/// assert!(meanings.contains_key(&Discipline::Neuroscience));
/// assert!(glossary::translate("flux capacitor").is_empty());
/// ```
pub fn translate(term: &str) -> BTreeMap<Discipline, &'static str> {
    let wanted = term.trim();
    GLOSSARY
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(wanted))
        .map(|(_, meanings)| meanings.iter().copied().collect())
        .unwrap_or_default()
}

/// Glossary terms that occur in text, as whole words, in table order
pub fn terms_in(text: &str) -> Vec<&'static str> {
    ENTRIES
        .iter()
        .filter(|entry| entry.matcher.is_match(text))
        .map(|entry| entry.term)
        .collect()
}

/// Number of disciplines defining the term
pub fn meaning_count(term: &str) -> usize {
    ENTRIES
        .iter()
        .find(|entry| entry.term.eq_ignore_ascii_case(term.trim()))
        .map_or(0, |entry| entry.meanings.len())
}
