//! Interdisciplinary analysis session

use crate::config::AnalyzerConfig;
use crate::error::SynthesizerError;
use crate::glossary;
use crate::profiles::{extract_frameworks, extract_methodologies, KeywordClassifier};
use crate::text::{candidate_phrases, contains_phrase, qualifiers, tokens};
use crate::types::{
    ConvergenceDivergenceInsight, ConvergenceTheme, DisciplinaryPerspective, DivergenceTheme, TerminologyRow,
};
use lyceum_domain::traits::{DisciplineClassifier, DisciplineScore};
use lyceum_domain::{Discipline, Section};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use tracing::{debug, info};

/// Name of the section produced by [`InterdisciplinaryAnalyzer::report_section`]
pub const SYNTHESIS_SECTION: &str = "Interdisciplinary Synthesis";

const DISTINCTIVE_TERMS: usize = 3;

/// Collects disciplinary perspectives and compares them
///
/// The session owns its perspectives; every analysis is recomputed from
/// the current list so results never go stale.
#[derive(Debug, Clone)]
pub struct InterdisciplinaryAnalyzer<C: DisciplineClassifier = KeywordClassifier> {
    config: AnalyzerConfig,
    classifier: C,
    perspectives: Vec<DisciplinaryPerspective>,
}

impl InterdisciplinaryAnalyzer<KeywordClassifier> {
    /// Create an analyzer with the keyword classifier
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, SynthesizerError> {
        Self::new(config, KeywordClassifier)
    }
}

impl Default for InterdisciplinaryAnalyzer<KeywordClassifier> {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            classifier: KeywordClassifier,
            perspectives: Vec::new(),
        }
    }
}

impl<C: DisciplineClassifier> InterdisciplinaryAnalyzer<C> {
    /// Create an analyzer with a custom classifier
    pub fn new(config: AnalyzerConfig, classifier: C) -> Result<Self, SynthesizerError> {
        config.validate().map_err(SynthesizerError::Config)?;
        debug!("Analyzer using {} classifier", classifier.name());
        Ok(Self {
            config,
            classifier,
            perspectives: Vec::new(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get the classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Scores of disciplines at or above the minimum, strongest first
    ///
    /// Ties keep enumeration order.
    pub fn score_disciplines(&self, text: &str) -> Vec<DisciplineScore> {
        let mut scores: Vec<DisciplineScore> = self
            .classifier
            .score(text)
            .into_iter()
            .filter(|s| s.score >= self.config.min_score)
            .collect();
        scores.sort_by_key(|s| (Reverse(s.score), s.discipline));
        debug!("Scored {} disciplines above threshold {}", scores.len(), self.config.min_score);
        scores
    }

    /// Disciplines evident in text, strongest first
    pub fn identify_disciplines(&self, text: &str) -> Vec<Discipline> {
        self.score_disciplines(text).into_iter().map(|s| s.discipline).collect()
    }

    /// Add a perspective
    ///
    /// Perspectives are never deduplicated. Known frameworks and
    /// methodologies are extracted from the content.
    pub fn add_perspective(
        &mut self,
        discipline: Discipline,
        content: impl Into<String>,
        source: impl Into<String>,
    ) -> &DisciplinaryPerspective {
        let content = content.into();
        let perspective = DisciplinaryPerspective {
            discipline,
            frameworks: extract_frameworks(&content),
            methodologies: extract_methodologies(&content),
            content,
            source: source.into(),
        };
        debug!(
            "Added {} perspective ({} frameworks, {} methodologies)",
            discipline,
            perspective.frameworks.len(),
            perspective.methodologies.len()
        );
        self.perspectives.push(perspective);
        &self.perspectives[self.perspectives.len() - 1]
    }

    /// Add a perspective under its strongest identified discipline
    ///
    /// Returns `None`, adding nothing, when no discipline reaches the
    /// minimum score.
    pub fn add_classified_perspective(
        &mut self,
        content: impl Into<String>,
        source: impl Into<String>,
    ) -> Option<&DisciplinaryPerspective> {
        let content = content.into();
        let discipline = self.identify_disciplines(&content).into_iter().next()?;
        Some(self.add_perspective(discipline, content, source))
    }

    /// Perspectives in insertion order
    pub fn perspectives(&self) -> &[DisciplinaryPerspective] {
        &self.perspectives
    }

    /// Distinct disciplines in the session, in enumeration order
    pub fn disciplines(&self) -> BTreeSet<Discipline> {
        self.perspectives.iter().map(|p| p.discipline).collect()
    }

    /// Remove every perspective
    pub fn clear(&mut self) {
        self.perspectives.clear();
    }

    /// Perspective content concatenated per discipline
    fn corpus(&self) -> BTreeMap<Discipline, String> {
        let mut corpus: BTreeMap<Discipline, String> = BTreeMap::new();
        for perspective in &self.perspectives {
            let text = corpus.entry(perspective.discipline).or_default();
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&perspective.content);
        }
        corpus
    }

    /// Compare perspectives across disciplines
    ///
    /// A candidate phrase found in two or more disciplines is a
    /// convergence theme. Shorter phrases contained in a longer theme with
    /// the same discipline set are dropped. A theme is also a divergence
    /// when every discipline qualifies it with a non-empty set of nearby
    /// content words and those sets are pairwise disjoint.
    pub fn analyze_convergence_divergence(&self) -> ConvergenceDivergenceInsight {
        let corpus = self.corpus();
        if corpus.len() < 2 {
            debug!("Fewer than two disciplines, nothing to compare");
            return ConvergenceDivergenceInsight::default();
        }

        let mut owners: BTreeMap<String, BTreeSet<Discipline>> = BTreeMap::new();
        for (discipline, text) in &corpus {
            for phrase in candidate_phrases(text, self.config.max_ngram) {
                owners.entry(phrase).or_default().insert(*discipline);
            }
        }
        let shared: Vec<(String, BTreeSet<Discipline>)> =
            owners.into_iter().filter(|(_, disciplines)| disciplines.len() > 1).collect();

        let mut convergence: Vec<ConvergenceTheme> = shared
            .iter()
            .filter(|(phrase, disciplines)| {
                !shared
                    .iter()
                    .any(|(longer, others)| others == disciplines && contains_phrase(longer, phrase))
            })
            .map(|(phrase, disciplines)| ConvergenceTheme {
                theme: phrase.clone(),
                disciplines: disciplines.clone(),
            })
            .collect();
        convergence.sort_by(|a, b| {
            b.disciplines
                .len()
                .cmp(&a.disciplines.len())
                .then_with(|| word_len(&b.theme).cmp(&word_len(&a.theme)))
                .then_with(|| a.theme.cmp(&b.theme))
        });

        let divergence: Vec<DivergenceTheme> = convergence
            .iter()
            .filter_map(|theme| self.divergence_for(theme, &corpus))
            .collect();

        info!(
            "Analyzed {} perspectives: {} convergence themes, {} divergences",
            self.perspectives.len(),
            convergence.len(),
            divergence.len()
        );
        ConvergenceDivergenceInsight { convergence, divergence }
    }

    fn divergence_for(
        &self,
        theme: &ConvergenceTheme,
        corpus: &BTreeMap<Discipline, String>,
    ) -> Option<DivergenceTheme> {
        let mut framings: BTreeMap<Discipline, BTreeSet<String>> = BTreeMap::new();
        for discipline in &theme.disciplines {
            let text = corpus.get(discipline)?;
            let terms = qualifiers(text, &theme.theme, self.config.qualifier_window);
            if terms.is_empty() {
                return None;
            }
            framings.insert(*discipline, terms);
        }

        let sets: Vec<&BTreeSet<String>> = framings.values().collect();
        for (i, a) in sets.iter().enumerate() {
            if sets[i + 1..].iter().any(|b| !a.is_disjoint(b)) {
                return None;
            }
        }
        debug!("\"{}\" is framed differently by {} disciplines", theme.theme, framings.len());
        Some(DivergenceTheme {
            topic: theme.theme.clone(),
            framings,
        })
    }

    /// Meanings of a glossary term for this session's disciplines
    ///
    /// With no perspectives every defined meaning is returned. Unknown
    /// terms yield an empty map.
    pub fn translate_terminology(&self, term: &str) -> BTreeMap<Discipline, &'static str> {
        let meanings = glossary::translate(term);
        if self.perspectives.is_empty() {
            return meanings;
        }
        let disciplines = self.disciplines();
        meanings.into_iter().filter(|(d, _)| disciplines.contains(d)).collect()
    }

    /// Translation rows for every glossary term used in the session
    pub fn terminology_table(&self) -> Vec<TerminologyRow> {
        let text: String = self
            .perspectives
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        glossary::terms_in(&text)
            .into_iter()
            .filter_map(|term| {
                let meanings = self.translate_terminology(term);
                (!meanings.is_empty()).then(|| TerminologyRow {
                    term: term.to_string(),
                    meanings,
                })
            })
            .collect()
    }

    /// Deterministic narrative of the session
    ///
    /// Lists the disciplines, convergence themes and divergences, then one
    /// insight per discipline in enumeration order.
    pub fn generate_synthesis(&self) -> String {
        if self.perspectives.is_empty() {
            return "No disciplinary perspectives have been added.".to_string();
        }

        let corpus = self.corpus();
        let insight = self.analyze_convergence_divergence();
        let names: Vec<&str> = corpus.keys().map(|d| d.name()).collect();
        let mut out = String::new();

        let _ = writeln!(
            out,
            "This synthesis draws on {} {} from {} {}: {}.",
            self.perspectives.len(),
            plural(self.perspectives.len(), "perspective", "perspectives"),
            corpus.len(),
            plural(corpus.len(), "discipline", "disciplines"),
            names.join(", ")
        );
        out.push('\n');

        if insight.convergence.is_empty() {
            out.push_str("Convergence: no shared themes were found.\n");
        } else {
            let themes: Vec<String> = insight
                .convergence
                .iter()
                .map(|t| format!("\"{}\" ({})", t.theme, join_disciplines(&t.disciplines)))
                .collect();
            let _ = writeln!(out, "Convergence: {}.", themes.join("; "));
        }

        if insight.divergence.is_empty() {
            out.push_str("Divergence: no differing framings were found.\n");
        } else {
            for theme in &insight.divergence {
                let framings: Vec<String> = theme
                    .framings
                    .iter()
                    .map(|(d, terms)| {
                        format!("{} frames it through {}", d, terms.iter().cloned().collect::<Vec<_>>().join(", "))
                    })
                    .collect();
                let _ = writeln!(out, "Divergence on \"{}\": {}.", theme.topic, framings.join("; "));
            }
        }

        out.push('\n');
        for (discipline, text) in &corpus {
            let _ = writeln!(out, "- {}", self.discipline_insight(*discipline, text, &corpus));
        }

        out.trim_end().to_string()
    }

    fn discipline_insight(
        &self,
        discipline: Discipline,
        text: &str,
        corpus: &BTreeMap<Discipline, String>,
    ) -> String {
        let others: BTreeSet<String> = corpus
            .iter()
            .filter(|(d, _)| **d != discipline)
            .flat_map(|(_, t)| candidate_phrases(t, 1))
            .collect();

        let mut distinctive: Vec<String> = Vec::new();
        for token in tokens(text) {
            if distinctive.len() == DISTINCTIVE_TERMS {
                break;
            }
            let is_candidate = candidate_phrases(&token, 1).contains(&token);
            if is_candidate && !others.contains(&token) && !distinctive.contains(&token) {
                distinctive.push(token);
            }
        }

        let count = self.perspectives.iter().filter(|p| p.discipline == discipline).count();
        let mut line = format!(
            "{} ({} {})",
            discipline,
            count,
            plural(count, "perspective", "perspectives")
        );
        if distinctive.is_empty() {
            line.push_str(" adds no terms beyond the shared themes");
        } else {
            let _ = write!(line, " emphasizes {}", distinctive.join(", "));
        }

        let frameworks = self.collect_unique(discipline, |p| &p.frameworks);
        if !frameworks.is_empty() {
            let _ = write!(line, "; frameworks: {}", frameworks.join(", "));
        }
        let methodologies = self.collect_unique(discipline, |p| &p.methodologies);
        if !methodologies.is_empty() {
            let _ = write!(line, "; methods: {}", methodologies.join(", "));
        }
        line.push('.');
        line
    }

    fn collect_unique<F>(&self, discipline: Discipline, field: F) -> Vec<&str>
    where
        F: Fn(&DisciplinaryPerspective) -> &Vec<String>,
    {
        let mut found: Vec<&str> = Vec::new();
        for perspective in self.perspectives.iter().filter(|p| p.discipline == discipline) {
            for item in field(perspective) {
                if !found.contains(&item.as_str()) {
                    found.push(item);
                }
            }
        }
        found
    }

    /// The synthesis narrative and terminology table as a report section
    pub fn report_section(&self) -> Section {
        let mut content = self.generate_synthesis();

        let rows = self.terminology_table();
        if !rows.is_empty() {
            content.push_str("\n\n| Term | Discipline | Meaning |\n| --- | --- | --- |");
            for row in &rows {
                for (discipline, meaning) in &row.meanings {
                    let _ = write!(content, "\n| {} | {} | {} |", row.term, discipline, meaning);
                }
            }
        }

        Section {
            name: SYNTHESIS_SECTION.to_string(),
            content,
        }
    }
}

fn word_len(phrase: &str) -> usize {
    phrase.split(' ').count()
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

fn join_disciplines(disciplines: &BTreeSet<Discipline>) -> String {
    disciplines.iter().map(|d| d.name()).collect::<Vec<_>>().join(", ")
}
