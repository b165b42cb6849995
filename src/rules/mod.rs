//! Compliance rules for medpost-guard
//!
//! Defines rule categories, severities, and the `RuleSet` an analyzer is
//! built from. The compiled-in tables live in [`terms`] and [`disclaimers`];
//! custom tables can be loaded from TOML.

pub mod disclaimers;
pub mod terms;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Group of prohibited terms sharing a severity, remediation and citation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleCategory {
    /// Promises of results ("garantia", "100%")
    Guarantees,

    /// Sensationalist claims ("revolucionário", "segredo")
    Sensationalism,

    /// Before/after comparisons
    BeforeAfter,

    /// Prices, discounts and promotions
    Prices,

    /// Superlatives ("o melhor", "incomparável")
    Superlatives,

    /// Exaggerated self-promotion
    SelfPromotion,
}

impl RuleCategory {
    /// All categories, in built-in iteration order
    pub const ALL: [RuleCategory; 6] = [
        RuleCategory::Guarantees,
        RuleCategory::Sensationalism,
        RuleCategory::BeforeAfter,
        RuleCategory::Prices,
        RuleCategory::Superlatives,
        RuleCategory::SelfPromotion,
    ];

    /// Stable key used in finding ids and rule files
    pub fn key(&self) -> &'static str {
        match self {
            RuleCategory::Guarantees => "guarantees",
            RuleCategory::Sensationalism => "sensationalism",
            RuleCategory::BeforeAfter => "beforeAfter",
            RuleCategory::Prices => "prices",
            RuleCategory::Superlatives => "superlatives",
            RuleCategory::SelfPromotion => "selfPromotion",
        }
    }

    /// Severity applied to every term of this category unless overridden
    pub fn default_severity(&self) -> Severity {
        match self {
            RuleCategory::Guarantees | RuleCategory::BeforeAfter | RuleCategory::Prices => {
                Severity::Error
            }
            RuleCategory::Sensationalism
            | RuleCategory::Superlatives
            | RuleCategory::SelfPromotion => Severity::Warning,
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Severity of a finding; drives both scoring and pass/fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Lowercase name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of one rule category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    pub category: RuleCategory,
    pub severity: Severity,

    /// Prohibited terms, matched case-insensitively as whole words
    pub terms: Vec<String>,

    /// Remediation template; `{term}` is replaced by the matched term
    pub suggestion: String,

    /// Regulatory citation
    pub citation: String,
}

impl CategoryRules {
    /// Render the suggestion for a matched term
    pub fn suggestion_for(&self, term: &str) -> String {
        self.suggestion.replace("{term}", term)
    }
}

/// Maps topic triggers to a required disclaimer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisclaimerRule {
    /// Substrings looked up in the lowercased text
    pub triggers: Vec<String>,

    /// Disclaimer required when any trigger is present
    pub disclaimer: String,
}

/// Immutable rule configuration injected into the analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Categories in iteration order
    pub categories: Vec<CategoryRules>,

    /// Disclaimer triggers in iteration order
    pub disclaimers: Vec<DisclaimerRule>,

    /// Disclaimer required regardless of triggers
    pub baseline_disclaimer: Option<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// The compiled-in medical-advertising tables
    pub fn builtin() -> Self {
        let categories = terms::CATEGORY_TABLE
            .iter()
            .map(|def| CategoryRules {
                category: def.category,
                severity: def.category.default_severity(),
                terms: def.terms.iter().map(|t| t.to_string()).collect(),
                suggestion: def.suggestion.to_string(),
                citation: def.citation.to_string(),
            })
            .collect();

        let disclaimers = disclaimers::TRIGGER_TABLE
            .iter()
            .map(|def| DisclaimerRule {
                triggers: def.triggers.iter().map(|t| t.to_string()).collect(),
                disclaimer: def.disclaimer.to_string(),
            })
            .collect();

        Self {
            categories,
            disclaimers,
            baseline_disclaimer: Some(disclaimers::CONSULTATION.to_string()),
        }
    }

    /// Load a rule set from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a rule set from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file: RuleSetFile = toml::from_str(content)?;
        Self::from_file_config(file)
    }

    fn from_file_config(file: RuleSetFile) -> Result<Self, Box<dyn std::error::Error>> {
        let mut categories: Vec<CategoryRules> = Vec::with_capacity(file.category.len());

        for entry in file.category {
            if categories.iter().any(|c| c.category == entry.category) {
                return Err(
                    format!("category {} is defined more than once", entry.category).into(),
                );
            }

            if let Some(term) = entry.terms.iter().find(|t| t.trim().is_empty()) {
                return Err(format!(
                    "category {} has an empty term ({:?})",
                    entry.category, term
                )
                .into());
            }

            let builtin = terms::definition(entry.category);

            categories.push(CategoryRules {
                category: entry.category,
                severity: entry
                    .severity
                    .unwrap_or_else(|| entry.category.default_severity()),
                terms: unique_terms(&entry.terms),
                suggestion: entry
                    .suggestion
                    .unwrap_or_else(|| builtin.suggestion.to_string()),
                citation: entry
                    .citation
                    .unwrap_or_else(|| builtin.citation.to_string()),
            });
        }

        let mut disclaimers = Vec::with_capacity(file.disclaimer.len());
        for rule in file.disclaimer {
            if rule.disclaimer.trim().is_empty() {
                return Err("disclaimer rule has an empty disclaimer".into());
            }
            if rule.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(format!(
                    "disclaimer rule {:?} has an empty trigger",
                    rule.disclaimer
                )
                .into());
            }

            // Triggers are looked up in lowercased text
            disclaimers.push(DisclaimerRule {
                triggers: rule.triggers.iter().map(|t| t.to_lowercase()).collect(),
                disclaimer: rule.disclaimer,
            });
        }

        if let Some(baseline) = &file.baseline_disclaimer {
            if baseline.trim().is_empty() {
                return Err("baseline_disclaimer must not be empty".into());
            }
        }

        Ok(Self {
            categories,
            disclaimers,
            baseline_disclaimer: file.baseline_disclaimer,
        })
    }

    /// Look up the rules for a category
    pub fn category(&self, category: RuleCategory) -> Option<&CategoryRules> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Total number of prohibited terms across all categories
    pub fn term_count(&self) -> usize {
        self.categories.iter().map(|c| c.terms.len()).sum()
    }
}

/// Trimmed terms, keeping the first of any that differ only in case
fn unique_terms(terms: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(terms.len());
    let mut unique = Vec::with_capacity(terms.len());

    for term in terms {
        let term = term.trim();
        let key = term.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            unique.push(term.to_string());
        }
    }

    unique
}

/// On-disk rule file structure
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RuleSetFile {
    baseline_disclaimer: Option<String>,
    category: Vec<CategoryEntry>,
    disclaimer: Vec<DisclaimerRule>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    category: RuleCategory,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    terms: Vec<String>,
    #[serde(default)]
    suggestion: Option<String>,
    #[serde(default)]
    citation: Option<String>,
}
