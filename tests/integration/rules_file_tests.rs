//! Integration tests for custom rule sets loaded from TOML

use std::io::Write;

use medpost_guard::{Channel, ComplianceAnalyzer, Config, RuleCategory, RuleSet, Severity};
use tempfile::NamedTempFile;

const DENTAL_RULES: &str = r#"
baseline_disclaimer = "Consulte seu dentista."

[[category]]
category = "prices"
terms = ["parcelado", "r$"]

[[category]]
category = "superlatives"
severity = "info"
terms = ["sorriso perfeito"]
suggestion = "Evite prometer um \"{term}\"."

[[disclaimer]]
triggers = ["implante", "clareamento"]
disclaimer = "Procedimentos odontológicos exigem avaliação prévia."
"#;

fn rules_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_custom_rules_replace_builtin() {
    let file = rules_file(DENTAL_RULES);
    let rules = RuleSet::from_file(file.path()).unwrap();
    let analyzer = ComplianceAnalyzer::new(rules).unwrap();

    // Built-in guarantee terms are not part of this rule set
    let report = analyzer.analyze("Garantia de sorriso perfeito", Channel::Instagram);
    assert!(report.is_compliant);
    assert_eq!(report.score, 100);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].severity, Severity::Info);
    assert_eq!(
        report.findings[0].suggestion.as_deref(),
        Some("Evite prometer um \"sorriso perfeito\".")
    );
    assert_eq!(report.findings[0].citation.as_deref(), Some("CFM - Art. 114"));
    assert_eq!(report.disclaimers, vec!["Consulte seu dentista."]);
}

#[test]
fn test_custom_category_default_severity() {
    let file = rules_file(DENTAL_RULES);
    let analyzer = ComplianceAnalyzer::new(RuleSet::from_file(file.path()).unwrap()).unwrap();

    let report = analyzer.analyze("Implante parcelado em 10x", Channel::Facebook);
    assert!(!report.is_compliant);
    assert_eq!(report.score, 75);
    assert_eq!(report.findings[0].category, RuleCategory::Prices);
    assert_eq!(
        report.disclaimers,
        vec![
            "Procedimentos odontológicos exigem avaliação prévia.",
            "Consulte seu dentista.",
        ]
    );
}

#[test]
fn test_config_points_at_rules_file() {
    let file = rules_file(DENTAL_RULES);
    let config_toml = format!(
        "[rules]\nrules_file = {:?}\n",
        file.path().to_string_lossy()
    );
    let config_file = rules_file(&config_toml);

    let config = Config::load_from(config_file.path()).unwrap();
    let rules = config.rule_set().unwrap();
    assert_eq!(rules.categories.len(), 2);
    assert_eq!(rules.baseline_disclaimer.as_deref(), Some("Consulte seu dentista."));
}

#[test]
fn test_invalid_rules_file() {
    let file = rules_file("[[category]]\ncategory = \"guarantees\"\nterms = [\"\"]\n");
    assert!(RuleSet::from_file(file.path()).is_err());

    let file = rules_file("this is not toml = = =");
    assert!(RuleSet::from_file(file.path()).is_err());
}

#[test]
fn test_repeated_terms_yield_one_finding() {
    let file = rules_file(
        "[[category]]\ncategory = \"guarantees\"\nterms = [\"garantia\", \"GARANTIA\", \" Garantia \"]\n",
    );
    let analyzer = ComplianceAnalyzer::new(RuleSet::from_file(file.path()).unwrap()).unwrap();

    let report = analyzer.analyze("garantia", Channel::Instagram);
    let ids: Vec<&str> = report.findings.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["guarantees_garantia"]);
    assert_eq!(report.score, 75);
}

#[test]
fn test_repeated_category_block_rejected() {
    let file = rules_file(
        "[[category]]\ncategory = \"guarantees\"\nterms = [\"garantia\"]\n\n\
         [[category]]\ncategory = \"guarantees\"\nterms = [\"GARANTIA\"]\n",
    );
    assert!(RuleSet::from_file(file.path()).is_err());
}

#[test]
fn test_padded_term_matches_whole_word() {
    let file = rules_file("[[category]]\ncategory = \"prices\"\nterms = [\" desconto \"]\n");
    let analyzer = ComplianceAnalyzer::new(RuleSet::from_file(file.path()).unwrap()).unwrap();

    let report = analyzer.analyze("Desconto!", Channel::Instagram);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].term, "desconto");
}

#[test]
fn test_mixed_case_trigger_fires() {
    let file = rules_file(
        "[[disclaimer]]\ntriggers = [\"Cirurgia\"]\ndisclaimer = \"Toda cirurgia envolve riscos.\"\n",
    );
    let analyzer = ComplianceAnalyzer::new(RuleSet::from_file(file.path()).unwrap()).unwrap();

    let report = analyzer.analyze("Cirurgia plástica", Channel::Instagram);
    assert_eq!(report.disclaimers, vec!["Toda cirurgia envolve riscos."]);
}

#[test]
fn test_blank_trigger_rejected() {
    let file = rules_file("[[disclaimer]]\ntriggers = [\" \"]\ndisclaimer = \"X\"\n");
    assert!(RuleSet::from_file(file.path()).is_err());
}
