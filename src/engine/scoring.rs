//! Compliance scoring
//!
//! Additive penalty model: start at 100, subtract a fixed amount per finding,
//! floor at zero.

use serde::Serialize;
use std::fmt;

use crate::output::Finding;
use crate::rules::Severity;

pub const MAX_SCORE: u8 = 100;
pub const ERROR_PENALTY: u32 = 25;
pub const WARNING_PENALTY: u32 = 10;
pub const INFO_PENALTY: u32 = 0;

/// Points deducted for a finding of the given severity
pub fn penalty(severity: Severity) -> u32 {
    match severity {
        Severity::Error => ERROR_PENALTY,
        Severity::Warning => WARNING_PENALTY,
        Severity::Info => INFO_PENALTY,
    }
}

/// Score a list of findings, 0..=100
pub fn score(findings: &[Finding]) -> u8 {
    let deducted: u32 = findings.iter().map(|f| penalty(f.severity)).sum();
    u32::from(MAX_SCORE).saturating_sub(deducted) as u8
}

/// Compliant iff no finding is an error
pub fn is_compliant(findings: &[Finding]) -> bool {
    !findings.iter().any(|f| f.severity == Severity::Error)
}

/// Coarse reading of a score, as shown to the author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Above 85
    Good,

    /// Above 60
    Attention,

    Critical,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score > 85 {
            ScoreBand::Good
        } else if score > 60 {
            ScoreBand::Attention
        } else {
            ScoreBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Attention => "attention",
            ScoreBand::Critical => "critical",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
