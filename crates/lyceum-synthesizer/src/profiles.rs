//! Discipline keyword profiles and the default classifier

use crate::error::SynthesizerError;
use lyceum_domain::traits::{DisciplineClassifier, DisciplineScore};
use lyceum_domain::Discipline;
use regex::Regex;
use std::sync::LazyLock;

/// Keyword profile for one discipline
#[derive(Debug)]
pub struct DisciplineProfile {
    /// Discipline described
    pub discipline: Discipline,
    /// Lowercase keywords and phrases
    pub keywords: &'static [&'static str],
    matcher: Regex,
}

impl DisciplineProfile {
    fn new(discipline: Discipline, keywords: &'static [&'static str]) -> Self {
        Self {
            discipline,
            keywords,
            matcher: keyword_regex(keywords),
        }
    }

    /// Count word-boundary keyword occurrences in text, ignoring case
    pub fn score(&self, text: &str) -> u32 {
        self.matcher.find_iter(text).count() as u32
    }
}

/// Build a case-insensitive, word-bounded alternation
///
/// Longer phrases are tried first so "machine learning" wins over
/// "learning".
pub(crate) fn keyword_regex(keywords: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = keywords.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = sorted.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("escaped keywords form a valid pattern")
}

const PROFILE_TABLE: &[(Discipline, &[&str])] = &[
    (
        Discipline::ComputerScience,
        &[
            "algorithm", "algorithms", "software", "computation", "computational", "machine learning",
            "neural network", "database", "compiler", "programming", "artificial intelligence",
            "data structure", "encryption",
        ],
    ),
    (
        Discipline::Physics,
        &[
            "quantum", "particle", "relativity", "thermodynamics", "photon", "electromagnetic", "gravity",
            "momentum", "entropy", "wavelength",
        ],
    ),
    (
        Discipline::Chemistry,
        &[
            "molecule", "molecular", "chemical reaction", "compound", "catalyst", "chemical synthesis",
            "polymer", "oxidation", "solvent", "reagent",
        ],
    ),
    (
        Discipline::Biology,
        &[
            "gene", "genes", "genetic", "cell", "cells", "organism", "evolution", "species", "protein", "dna",
            "ecosystem",
        ],
    ),
    (
        Discipline::Mathematics,
        &[
            "theorem", "proof", "algebra", "topology", "equation", "lemma", "calculus", "manifold", "integer",
            "polynomial", "statistical",
        ],
    ),
    (
        Discipline::Engineering,
        &[
            "circuit", "structural load", "prototype", "mechanical", "turbine", "control system", "tolerance",
            "manufacturing", "actuator",
        ],
    ),
    (
        Discipline::EnvironmentalScience,
        &[
            "climate", "emissions", "pollution", "biodiversity", "carbon", "sustainability",
            "ecosystem services", "deforestation", "watershed",
        ],
    ),
    (
        Discipline::Psychology,
        &[
            "cognition", "cognitive", "behavior", "behaviour", "emotion", "emotional", "perception",
            "personality", "memory", "attention", "motivation", "anxiety", "retention", "bias",
        ],
    ),
    (
        Discipline::Economics,
        &[
            "utility", "market", "markets", "price", "prices", "inflation", "gdp", "equilibrium", "supply",
            "demand", "monetary", "fiscal", "incentive", "incentives", "economic", "economy",
        ],
    ),
    (
        Discipline::Sociology,
        &[
            "social", "society", "inequality", "social class", "institution", "institutions",
            "stratification", "community", "socialization", "norms",
        ],
    ),
    (
        Discipline::PoliticalScience,
        &[
            "policy", "election", "elections", "democracy", "governance", "voters", "legislature", "political",
            "sovereignty",
        ],
    ),
    (
        Discipline::Anthropology,
        &[
            "culture", "cultural", "ritual", "kinship", "ethnography", "ethnographic", "indigenous",
            "fieldwork", "artifact",
        ],
    ),
    (
        Discipline::Education,
        &[
            "pedagogy", "curriculum", "students", "teaching", "classroom", "learning outcomes", "instruction",
            "literacy",
        ],
    ),
    (
        Discipline::Linguistics,
        &[
            "syntax", "semantics", "phonology", "morphology", "language acquisition", "lexicon", "grammar",
            "pragmatics", "dialect",
        ],
    ),
    (
        Discipline::Law,
        &[
            "statute", "court", "jurisdiction", "legal", "liability", "contract", "constitution", "precedent",
            "litigation",
        ],
    ),
    (
        Discipline::Medicine,
        &[
            "patient", "patients", "clinical", "diagnosis", "treatment", "disease", "therapy", "symptoms", "mri",
            "surgery",
        ],
    ),
    (
        Discipline::Neuroscience,
        &[
            "neuron", "neurons", "neural", "fmri", "eeg", "cortex", "prefrontal", "hippocampus", "hippocampal",
            "synapse", "synaptic", "dopamine", "neurotransmitter", "amygdala", "brain", "plasticity",
        ],
    ),
    (
        Discipline::PublicHealth,
        &[
            "epidemiology", "epidemiological", "population health", "prevalence", "incidence", "vaccination",
            "mortality", "health policy", "outbreak", "screening",
        ],
    ),
    (
        Discipline::Nursing,
        &["nursing", "nurse", "nurses", "patient care", "caregiving", "bedside", "care plan", "triage"],
    ),
    (
        Discipline::Pharmacology,
        &[
            "drug", "drugs", "dosage", "pharmacokinetics", "receptor", "agonist", "antagonist", "toxicity",
            "medication",
        ],
    ),
    (
        Discipline::Philosophy,
        &[
            "ethics", "epistemology", "ontology", "metaphysics", "moral", "consciousness", "phenomenology",
            "normative",
        ],
    ),
    (
        Discipline::History,
        &[
            "historical", "century", "archive", "archives", "empire", "revolution", "medieval", "colonial",
            "historiography",
        ],
    ),
    (
        Discipline::Literature,
        &["novel", "poetry", "poem", "narrative", "literary", "fiction", "prose", "genre"],
    ),
    (
        Discipline::ArtHistory,
        &[
            "painting", "sculpture", "artwork", "renaissance", "iconography", "museum", "aesthetic", "baroque",
            "portrait",
        ],
    ),
    (
        Discipline::ReligiousStudies,
        &["religion", "religious", "theology", "sacred", "scripture", "faith", "spirituality", "doctrine"],
    ),
];

/// Every discipline profile, in enumeration order
pub static PROFILES: LazyLock<Vec<DisciplineProfile>> = LazyLock::new(|| {
    PROFILE_TABLE
        .iter()
        .map(|(discipline, keywords)| DisciplineProfile::new(*discipline, keywords))
        .collect()
});

/// Profile for a discipline
pub fn profile(discipline: Discipline) -> Option<&'static DisciplineProfile> {
    PROFILES.iter().find(|p| p.discipline == discipline)
}

/// Theoretical frameworks recognized in perspective content
pub const FRAMEWORKS: &[&str] = &[
    "prospect theory",
    "expected utility theory",
    "rational choice theory",
    "game theory",
    "dual process theory",
    "social learning theory",
    "social cognitive theory",
    "self-determination theory",
    "attachment theory",
    "cognitive load theory",
    "systems theory",
    "critical theory",
    "grounded theory",
    "bounded rationality",
    "predictive coding",
    "information processing",
    "behaviorism",
    "constructivism",
    "structural functionalism",
    "symbolic interactionism",
    "evolutionary theory",
    "germ theory",
    "health belief model",
    "social determinants of health",
    "hebbian learning",
];

/// Research methodologies recognized in perspective content
pub const METHODOLOGIES: &[&str] = &[
    "randomized controlled trial",
    "meta-analysis",
    "systematic review",
    "case study",
    "ethnography",
    "survey",
    "longitudinal study",
    "cross-sectional study",
    "cohort study",
    "fmri",
    "eeg",
    "polysomnography",
    "regression analysis",
    "structural equation modeling",
    "qualitative interviews",
    "focus groups",
    "content analysis",
    "discourse analysis",
    "thematic analysis",
    "archival research",
    "mixed methods",
    "simulation",
    "laboratory experiment",
    "field experiment",
    "close reading",
];

static FRAMEWORK_MATCHER: LazyLock<Regex> = LazyLock::new(|| keyword_regex(FRAMEWORKS));
static METHODOLOGY_MATCHER: LazyLock<Regex> = LazyLock::new(|| keyword_regex(METHODOLOGIES));

/// Known frameworks mentioned in text, lowercase, first-mention order
pub fn extract_frameworks(text: &str) -> Vec<String> {
    distinct_matches(&FRAMEWORK_MATCHER, text)
}

/// Known methodologies mentioned in text, lowercase, first-mention order
pub fn extract_methodologies(text: &str) -> Vec<String> {
    distinct_matches(&METHODOLOGY_MATCHER, text)
}

fn distinct_matches(matcher: &Regex, text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in matcher.find_iter(text) {
        let term = m.as_str().to_lowercase();
        if !found.contains(&term) {
            found.push(term);
        }
    }
    found
}

/// Classifier that counts profile keyword hits
///
/// # Examples
///
/// ```
/// use lyceum_domain::traits::DisciplineClassifier;
/// use lyceum_domain::Discipline;
/// use lyceum_synthesizer::KeywordClassifier;
///
/// let scores = KeywordClassifier.score("Dopamine neurons in the prefrontal cortex");
/// let neuro = scores.iter().find(|s| s.discipline == Discipline::Neuroscience).unwrap();
/// assert_eq!(neuro.score, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl DisciplineClassifier for KeywordClassifier {
    fn score(&self, text: &str) -> Vec<DisciplineScore> {
        PROFILES
            .iter()
            .map(|p| DisciplineScore {
                discipline: p.discipline,
                score: p.score(text),
            })
            .collect()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Resolve a discipline by name or identifier
pub fn resolve_discipline(name: &str) -> Result<Discipline, SynthesizerError> {
    Discipline::parse(name).ok_or_else(|| SynthesizerError::UnknownDiscipline(name.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_discipline_has_a_profile() {
        assert_eq!(PROFILES.len(), Discipline::ALL.len());
        for (profile, discipline) in PROFILES.iter().zip(Discipline::ALL) {
            assert_eq!(profile.discipline, discipline);
            assert!(!profile.keywords.is_empty());
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for profile in PROFILES.iter() {
            for keyword in profile.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_word_boundary_matching() {
        let neuro = profile(Discipline::Neuroscience).unwrap();
        assert_eq!(neuro.score("FMRI and fMRI"), 2);
        assert_eq!(neuro.score("neuralgia braindead"), 0);
        assert_eq!(neuro.score("Dopamine neurons in the prefrontal cortex"), 4);

        let medicine = profile(Discipline::Medicine).unwrap();
        assert_eq!(medicine.score("fMRI"), 0);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let cs = profile(Discipline::ComputerScience).unwrap();
        assert_eq!(cs.score("machine learning algorithms"), 2);
    }

    #[test]
    fn test_extract_frameworks_and_methods() {
        let text = "Using fMRI and a longitudinal study, we test Prospect Theory against \
                    expected utility theory; prospect theory wins.";
        assert_eq!(
            extract_frameworks(text),
            vec!["prospect theory".to_string(), "expected utility theory".to_string()]
        );
        assert_eq!(
            extract_methodologies(text),
            vec!["fmri".to_string(), "longitudinal study".to_string()]
        );
    }

    #[test]
    fn test_classifier_covers_all_disciplines() {
        let scores = KeywordClassifier.score("");
        assert_eq!(scores.len(), 25);
        assert!(scores.iter().all(|s| s.score == 0));
        assert_eq!(KeywordClassifier.name(), "keyword");
    }

    #[test]
    fn test_resolve_discipline() {
        assert_eq!(resolve_discipline("public_health"), Ok(Discipline::PublicHealth));
        assert_eq!(
            resolve_discipline(" alchemy "),
            Err(SynthesizerError::UnknownDiscipline("alchemy".to_string()))
        );
    }
}
