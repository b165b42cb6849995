//! Compliance report types and rendering
//!
//! Reports serialize to camelCase JSON for the surrounding application and
//! render to plain text for the terminal.

use serde::Serialize;
use std::fmt::Write as _;

use crate::engine::scoring::ScoreBand;
use crate::rules::{RuleCategory, Severity};

/// One flagged compliance issue from a single matched term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// `<categoryKey>_<term>`
    pub id: String,

    pub category: RuleCategory,

    /// The configured term that matched
    pub term: String,

    pub severity: Severity,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Finding {
    /// Message shown for a matched term
    pub fn message_for(term: &str) -> String {
        format!("O termo \"{}\" pode violar o código de ética médica.", term)
    }

    /// Check if this finding fails the report
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Result of analyzing one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// True iff no finding has severity `error`
    pub is_compliant: bool,

    /// 0..=100
    pub score: u8,

    /// Category order, then term order
    pub findings: Vec<Finding>,

    /// De-duplicated, first-seen order
    pub disclaimers: Vec<String>,
}

impl ComplianceReport {
    /// Band for the report's score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Count findings with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    /// Findings of a given category
    pub fn findings_in(&self, category: RuleCategory) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable report
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let verdict = if self.is_compliant {
            "PASS: no critical issues found. Review the post once more before publishing."
        } else {
            "FAIL: critical issues may violate medical-advertising rules. Review the items below."
        };
        let _ = writeln!(out, "{}", verdict);
        let _ = writeln!(out, "Score: {}/100 ({})", self.score, self.band());

        if !self.findings.is_empty() {
            let _ = writeln!(
                out,
                "\nFindings ({} error, {} warning, {} info):",
                self.count(Severity::Error),
                self.count(Severity::Warning),
                self.count(Severity::Info)
            );
            for finding in &self.findings {
                let _ = writeln!(out, "  [{}] {}", finding.severity, finding.message);
                if let Some(suggestion) = &finding.suggestion {
                    let _ = writeln!(out, "      suggestion: {}", suggestion);
                }
                if let Some(citation) = &finding.citation {
                    let _ = writeln!(out, "      reference: {}", citation);
                }
            }
        }

        if !self.disclaimers.is_empty() {
            let _ = writeln!(out, "\nRecommended disclaimers:");
            for disclaimer in &self.disclaimers {
                let _ = writeln!(out, "  - {}", disclaimer);
            }
        }

        out
    }
}
