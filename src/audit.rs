//! JSONL audit logging for medpost-guard
//!
//! Records every analysis to a JSONL file for later review.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::scoring::ScoreBand;
use crate::input::{AnalysisRequest, Channel};
use crate::output::ComplianceReport;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No error findings
    Passed,

    /// At least one error finding
    Flagged,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the analysis
    pub timestamp: DateTime<Utc>,

    /// PASSED or FLAGGED
    pub level: LogLevel,

    /// Channel the post targets
    pub channel: Channel,

    pub score: u8,

    pub band: ScoreBand,

    /// Ids of the findings, in report order
    pub findings: Vec<String>,

    /// Number of recommended disclaimers
    pub disclaimers: usize,

    /// Summary of the input
    pub input_summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from a request and its report
    pub fn new(request: &AnalysisRequest, channel: Channel, report: &ComplianceReport) -> Self {
        let level = if report.is_compliant {
            LogLevel::Passed
        } else {
            LogLevel::Flagged
        };

        Self {
            timestamp: Utc::now(),
            level,
            channel,
            score: report.score,
            band: report.band(),
            findings: report.findings.iter().map(|f| f.id.clone()).collect(),
            disclaimers: report.disclaimers.len(),
            input_summary: request.summary(),
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` or an unopenable path disables it
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log an analysis
    pub fn log_report(
        &mut self,
        request: &AnalysisRequest,
        channel: Channel,
        report: &ComplianceReport,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(request, channel, report);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
