//! Integration tests for disclaimer inference

use medpost_guard::rules::disclaimers::{CONSULTATION, EMERGENCY, RESULTS};
use medpost_guard::{analyze, Channel};

fn disclaimers(text: &str) -> Vec<String> {
    analyze(text, Channel::Instagram).disclaimers
}

#[test]
fn test_baseline_always_present() {
    assert_eq!(disclaimers("Bom dia!"), vec![CONSULTATION]);
    assert_eq!(disclaimers(""), vec![CONSULTATION]);
}

#[test]
fn test_pain_and_treatment() {
    let found = disclaimers("Sente dor nas costas? Conheça nosso tratamento.");
    assert_eq!(found, vec![RESULTS, CONSULTATION]);
}

#[test]
fn test_results_triggers() {
    for text in ["Tratamento facial", "Novo PROCEDIMENTO", "Cuidado estético"] {
        assert_eq!(disclaimers(text), vec![RESULTS, CONSULTATION], "input {:?}", text);
    }
}

#[test]
fn test_emergency_triggers() {
    for text in ["Quadro grave", "Mal-estar súbito", "Em caso de URGÊNCIA"] {
        assert_eq!(disclaimers(text), vec![EMERGENCY, CONSULTATION], "input {:?}", text);
    }
}

#[test]
fn test_triggers_are_substrings() {
    // "dores" contains "dor"
    assert_eq!(disclaimers("Dores musculares"), vec![CONSULTATION]);
    assert_eq!(disclaimers("Tratamentos"), vec![RESULTS, CONSULTATION]);
}

#[test]
fn test_disclaimers_do_not_affect_score() {
    let report = analyze("Tratamento para dor grave", Channel::Facebook);
    assert_eq!(report.score, 100);
    assert!(report.is_compliant);
    assert_eq!(report.disclaimers, vec![RESULTS, CONSULTATION, EMERGENCY]);
}

#[test]
fn test_consultation_trigger_keeps_its_position() {
    // Triggered before emergency, so the baseline adds nothing
    let found = disclaimers("Dor súbita e grave");
    assert_eq!(found, vec![CONSULTATION, EMERGENCY]);
}
