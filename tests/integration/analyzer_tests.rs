//! Integration tests for term detection and scoring

use medpost_guard::rules::disclaimers::CONSULTATION;
use medpost_guard::{analyze, Channel, ComplianceAnalyzer, ComplianceReport, RuleCategory, Severity};

fn check(text: &str) -> ComplianceReport {
    ComplianceAnalyzer::default().analyze(text, Channel::Instagram)
}

fn ids(report: &ComplianceReport) -> Vec<&str> {
    report.findings.iter().map(|f| f.id.as_str()).collect()
}

// ============================================================================
// Clean text
// ============================================================================

#[test]
fn test_empty_text() {
    let report = check("");
    assert!(report.findings.is_empty());
    assert_eq!(report.score, 100);
    assert!(report.is_compliant);
    assert_eq!(report.disclaimers, vec![CONSULTATION]);
}

#[test]
fn test_clean_post() {
    let report = check("Hidratação é essencial para a saúde da pele. Beba água!");
    assert!(report.is_compliant);
    assert_eq!(report.score, 100);
    assert_eq!(report.disclaimers, vec![CONSULTATION]);
}

// ============================================================================
// Error categories
// ============================================================================

#[test]
fn test_guarantees_fail() {
    assert!(!check("Resultado com garantia").is_compliant);
    assert!(!check("Cura garantida em 7 dias").is_compliant);
    assert!(!check("É um milagre").is_compliant);
}

#[test]
fn test_before_after_fail() {
    assert!(!check("Confira o antes e depois").is_compliant);
    assert!(!check("Fotos antes/depois").is_compliant);
    assert!(!check("Antes x depois da paciente").is_compliant);
}

#[test]
fn test_prices_fail() {
    assert!(!check("Apenas R$ 199").is_compliant);
    assert!(!check("Primeira avaliação gratuita? Não: gratuito!").is_compliant);
    assert!(!check("Preço especial").is_compliant);
}

#[test]
fn test_warning_categories_pass_with_penalty() {
    let report = check("Tecnologia revolucionária? Não, revolucionário e exclusivo.");
    assert!(report.is_compliant);
    assert_eq!(
        ids(&report),
        vec!["sensationalism_revolucionário", "sensationalism_exclusivo"]
    );
    assert_eq!(report.score, 80);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_guarantee_and_before_after_scenario() {
    let report = check("Garantimos resultado certo, antes e depois incrível!");
    assert!(!report.is_compliant);
    assert!(report.score <= 50);

    let guarantees = report.findings_in(RuleCategory::Guarantees);
    assert_eq!(guarantees.len(), 1);
    assert_eq!(guarantees[0].term, "resultado certo");
    assert_eq!(guarantees[0].severity, Severity::Error);

    let before_after = report.findings_in(RuleCategory::BeforeAfter);
    assert_eq!(before_after.len(), 1);
    assert_eq!(before_after[0].term, "antes e depois");
    assert_eq!(before_after[0].severity, Severity::Error);
    assert_eq!(
        before_after[0].citation.as_deref(),
        Some("CFM - Res. 1.974/11, Art. 3º, § 1º")
    );
}

#[test]
fn test_score_floor() {
    let report = check("Garantia de 100% com desconto, preço barato e antes e depois. Milagre!");
    assert!(report.count(Severity::Error) >= 5);
    assert_eq!(report.score, 0);
    assert!(!report.is_compliant);
}

#[test]
fn test_repeated_term_single_finding() {
    let report = check("garantia, garantia e mais garantia");
    assert_eq!(ids(&report), vec!["guarantees_garantia"]);
    assert_eq!(report.score, 75);
}

#[test]
fn test_case_insensitive_terms() {
    for text in ["GARANTIA", "Garantia", "garantia"] {
        let report = check(text);
        assert_eq!(ids(&report), vec!["guarantees_garantia"], "input {:?}", text);
    }
}

#[test]
fn test_suffix_not_matched() {
    let report = check("Sem garantias de prazo");
    assert!(report.findings.is_empty());
    assert!(report.is_compliant);
}

#[test]
fn test_overlapping_terms_across_categories() {
    let report = check("Dr. Fulano, o melhor da cidade");
    assert_eq!(
        ids(&report),
        vec!["superlatives_o melhor", "selfPromotion_dr. fulano, o melhor"]
    );
    assert_eq!(report.score, 80);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_idempotent() {
    let text = "Tratamento exclusivo com desconto. Dor? Urgência!";
    let analyzer = ComplianceAnalyzer::default();
    assert_eq!(
        analyzer.analyze(text, Channel::LinkedIn),
        analyzer.analyze(text, Channel::LinkedIn)
    );
    assert_eq!(analyze(text, Channel::LinkedIn), check(text));
}

#[test]
fn test_shared_analyzer_across_threads() {
    let texts = ["garantia", "segredo", "", "antes e depois do tratamento"];
    let handles: Vec<_> = texts
        .iter()
        .map(|t| {
            let t = t.to_string();
            std::thread::spawn(move || analyze(&t, Channel::TikTok))
        })
        .collect();

    for (handle, text) in handles.into_iter().zip(texts) {
        assert_eq!(handle.join().unwrap(), check(text));
    }
}
