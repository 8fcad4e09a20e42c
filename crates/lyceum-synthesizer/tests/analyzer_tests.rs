//! Analyzer behavior through the public API

use lyceum_domain::traits::{DisciplineClassifier, DisciplineScore};
use lyceum_domain::Discipline;
use lyceum_synthesizer::{glossary, AnalyzerConfig, InterdisciplinaryAnalyzer};
use proptest::prelude::*;
use std::collections::BTreeSet;

const FMRI: &str =
    "fMRI showed prefrontal cortex activation during risky choices, consistent with utility maximization";

#[test]
fn test_fmri_scenario_ranks_neuroscience_first() {
    let analyzer = InterdisciplinaryAnalyzer::default();
    let scores = analyzer.score_disciplines(FMRI);

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].discipline, Discipline::Neuroscience);
    assert_eq!(scores[0].score, 3);
    assert_eq!(scores[1].discipline, Discipline::Economics);
    assert_eq!(scores[1].score, 1);
}

#[test]
fn test_sleep_scenario_converges_on_memory_consolidation() {
    let mut analyzer = InterdisciplinaryAnalyzer::default();
    analyzer.add_perspective(
        Discipline::Psychology,
        "memory consolidation during sleep improves retention",
        "Walker (2017)",
    );
    analyzer.add_perspective(
        Discipline::Neuroscience,
        "hippocampal activity during sleep correlates with memory consolidation",
        "Diekelmann & Born (2010)",
    );

    let insight = analyzer.analyze_convergence_divergence();
    let theme = insight.theme("memory consolidation").expect("shared theme");
    assert_eq!(
        theme.disciplines,
        BTreeSet::from([Discipline::Psychology, Discipline::Neuroscience])
    );
}

#[test]
fn test_analysis_tracks_new_perspectives() {
    let mut analyzer = InterdisciplinaryAnalyzer::default();
    analyzer.add_perspective(Discipline::Sociology, "Social networks shape health behavior.", "A");
    assert!(analyzer.analyze_convergence_divergence().is_empty());

    analyzer.add_perspective(Discipline::PublicHealth, "Health behavior spreads through communities.", "B");
    let insight = analyzer.analyze_convergence_divergence();
    assert_eq!(insight.convergence[0].theme, "health behavior");

    analyzer.clear();
    assert!(analyzer.analyze_convergence_divergence().is_empty());
}

#[test]
fn test_three_way_theme_sorts_first() {
    let mut analyzer = InterdisciplinaryAnalyzer::default();
    analyzer.add_perspective(Discipline::Economics, "Inflation erodes savings and trust.", "A");
    analyzer.add_perspective(Discipline::Sociology, "Inflation erodes trust between neighbours.", "B");
    analyzer.add_perspective(Discipline::History, "Weimar inflation destroyed savings.", "C");

    let insight = analyzer.analyze_convergence_divergence();
    assert_eq!(insight.convergence[0].theme, "inflation");
    assert_eq!(insight.convergence[0].disciplines.len(), 3);
    assert!(insight.theme("inflation erodes").is_some());
}

struct FixedClassifier;

impl DisciplineClassifier for FixedClassifier {
    fn score(&self, _text: &str) -> Vec<DisciplineScore> {
        vec![
            DisciplineScore {
                discipline: Discipline::Law,
                score: 2,
            },
            DisciplineScore {
                discipline: Discipline::Philosophy,
                score: 5,
            },
        ]
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[test]
fn test_custom_classifier() {
    let analyzer = InterdisciplinaryAnalyzer::new(AnalyzerConfig::default(), FixedClassifier).unwrap();
    assert_eq!(analyzer.classifier().name(), "fixed");
    assert_eq!(
        analyzer.identify_disciplines("anything"),
        vec![Discipline::Philosophy, Discipline::Law]
    );
}

#[test]
fn test_session_free_translation() {
    let meanings = glossary::translate("equilibrium");
    assert_eq!(meanings.len(), 3);
    assert!(meanings[&Discipline::Chemistry].contains("reaction"));
}

fn discipline_strategy() -> impl Strategy<Value = Discipline> {
    (0..Discipline::ALL.len()).prop_map(|i| Discipline::ALL[i])
}

proptest! {
    #[test]
    fn test_identification_is_deterministic(text in "[a-zA-Z ,.]{0,200}") {
        let analyzer = InterdisciplinaryAnalyzer::default();
        prop_assert_eq!(analyzer.identify_disciplines(&text), analyzer.identify_disciplines(&text));
    }

    #[test]
    fn test_scores_sorted_descending(text in "(neuron|market|court|poem|gene|voters|\\s){0,40}") {
        let scores = InterdisciplinaryAnalyzer::default().score_disciplines(&text);
        for pair in scores.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].discipline < pair[1].discipline);
            }
        }
    }

    #[test]
    fn test_synthesis_is_deterministic(
        entries in prop::collection::vec((discipline_strategy(), "[a-z]{3,8}( [a-z]{3,8}){0,8}"), 0..6)
    ) {
        let mut a = InterdisciplinaryAnalyzer::default();
        let mut b = InterdisciplinaryAnalyzer::default();
        for (discipline, content) in &entries {
            a.add_perspective(*discipline, content.clone(), "src");
            b.add_perspective(*discipline, content.clone(), "src");
        }
        prop_assert_eq!(a.generate_synthesis(), b.generate_synthesis());
        prop_assert_eq!(a.analyze_convergence_divergence(), b.analyze_convergence_divergence());
    }

    #[test]
    fn test_convergence_themes_span_disciplines(
        entries in prop::collection::vec((discipline_strategy(), "[a-d]{3}( [a-d]{3}){0,5}"), 0..6)
    ) {
        let mut analyzer = InterdisciplinaryAnalyzer::default();
        for (discipline, content) in &entries {
            analyzer.add_perspective(*discipline, content.clone(), "src");
        }
        for theme in analyzer.analyze_convergence_divergence().convergence {
            prop_assert!(theme.disciplines.len() >= 2);
        }
    }
}
