//! medpost-guard - Medical-advertising compliance checks for healthcare posts
//!
//! This library scores social-media post text against Brazilian
//! medical-advertising rules (CFM), flagging prohibited terms and recommending
//! disclaimers.
//!
//! # Features
//!
//! - **Term detection**: Case-insensitive whole-word matching of prohibited terms
//! - **Scoring**: Fixed penalties per finding (error 25, warning 10, info 0)
//! - **Disclaimers**: Topic-triggered legal and informational notices
//! - **Custom rules**: Rule tables injected at construction, loadable from TOML
//! - **Audit logging**: JSONL log of every analysis
//!
//! # Example
//!
//! ```
//! use medpost_guard::{Channel, ComplianceAnalyzer};
//!
//! let analyzer = ComplianceAnalyzer::default();
//! let report = analyzer.analyze("Garantimos resultado certo!", Channel::Instagram);
//!
//! assert!(!report.is_compliant);
//! assert_eq!(report.score, 75);
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod rules;

use once_cell::sync::Lazy;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use engine::scoring::ScoreBand;
pub use engine::ComplianceAnalyzer;
pub use input::{AnalysisRequest, Channel};
pub use output::{ComplianceReport, Finding};
pub use rules::{CategoryRules, DisclaimerRule, RuleCategory, RuleSet, Severity};

static BUILTIN: Lazy<ComplianceAnalyzer> = Lazy::new(ComplianceAnalyzer::default);

/// Analyze text with the built-in rule tables
///
/// The tables are compiled once per process and shared by every caller.
pub fn analyze(text: &str, channel: Channel) -> ComplianceReport {
    BUILTIN.analyze(text, channel)
}
