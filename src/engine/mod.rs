//! Compliance engine for medpost-guard
//!
//! Compiles a `RuleSet` once and analyzes post text against it.

pub mod disclaimers;
pub mod matcher;
pub mod scoring;

use std::collections::HashSet;

use crate::input::{AnalysisRequest, Channel};
use crate::output::{ComplianceReport, Finding};
use crate::rules::{CategoryRules, RuleSet};

use matcher::TermMatcher;

/// A category's rules with its terms compiled
#[derive(Debug, Clone)]
struct CompiledCategory {
    rules: CategoryRules,
    matchers: Vec<TermMatcher>,
}

/// The main compliance analyzer
///
/// Holds only immutable compiled rules, so a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct ComplianceAnalyzer {
    rules: RuleSet,
    categories: Vec<CompiledCategory>,
}

impl ComplianceAnalyzer {
    /// Create an analyzer for the given rule set
    pub fn new(rules: RuleSet) -> Result<Self, regex::Error> {
        let categories = rules
            .categories
            .iter()
            .map(|category| {
                let matchers = category
                    .terms
                    .iter()
                    .map(|term| TermMatcher::new(term))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, regex::Error>(CompiledCategory {
                    rules: category.clone(),
                    matchers,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules, categories })
    }

    /// Main entry point: analyze a post and return its report
    ///
    /// The channel is accepted for callers' benefit; the rule tables do not
    /// vary by channel.
    pub fn analyze(&self, text: &str, _channel: Channel) -> ComplianceReport {
        let findings = self.findings(text);
        let disclaimers = disclaimers::infer(text, &self.rules);

        ComplianceReport {
            is_compliant: scoring::is_compliant(&findings),
            score: scoring::score(&findings),
            findings,
            disclaimers,
        }
    }

    /// Analyze a parsed request, using `fallback` when it names no channel
    pub fn analyze_request(&self, request: &AnalysisRequest, fallback: Channel) -> ComplianceReport {
        self.analyze(&request.text, request.channel_or(fallback))
    }

    /// One finding per (category, term) present in `text`
    ///
    /// Terms repeated within a category, in any letter case, count once.
    pub fn findings(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut seen = HashSet::new();

        if text.is_empty() {
            return findings;
        }

        for compiled in &self.categories {
            let rules = &compiled.rules;
            for matcher in &compiled.matchers {
                if !matcher.is_match(text) {
                    continue;
                }

                let term = matcher.term();
                if !seen.insert((rules.category, term.to_lowercase())) {
                    continue;
                }

                findings.push(Finding {
                    id: format!("{}_{}", rules.category.key(), term),
                    category: rules.category,
                    term: term.to_string(),
                    severity: rules.severity,
                    message: Finding::message_for(term),
                    suggestion: Some(rules.suggestion_for(term)),
                    citation: Some(rules.citation.clone()),
                });
            }
        }

        findings
    }

    /// Get the rule set
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for ComplianceAnalyzer {
    fn default() -> Self {
        // Built-in terms are escaped literals; compilation cannot fail.
        Self::new(RuleSet::builtin()).expect("built-in rule tables compile")
    }
}
