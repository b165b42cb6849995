//! Configuration loading for medpost-guard
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::PathBuf;

use crate::input::Channel;
use crate::rules::RuleSet;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,

    /// Single-line JSON report
    Json,
}

impl OutputFormat {
    /// Parse from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Channel assumed when a request names none
    pub default_channel: Channel,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_channel: Channel::Instagram,
            audit_log: true,
            audit_path: Some("~/.config/medpost-guard/audit.jsonl".to_string()),
        }
    }
}

/// Rule table configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Custom rule file replacing the built-in tables
    pub rules_file: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub rules: RulesConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::config_dir().map(|p| p.join("medpost-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/medpost-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded)
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }

    /// Get the custom rules file path (expanded)
    pub fn rules_path(&self) -> Option<PathBuf> {
        self.rules.rules_file.as_ref().map(|p| Self::expand_path(p))
    }

    /// Rule set to analyze with: the configured file, or the built-in tables
    pub fn rule_set(&self) -> Result<RuleSet, Box<dyn std::error::Error>> {
        match self.rules_path() {
            Some(path) => RuleSet::from_file(&path).map_err(|e| {
                let message = format!("failed to load rules from {}: {}", path.display(), e);
                Box::<dyn std::error::Error>::from(message)
            }),
            None => Ok(RuleSet::builtin()),
        }
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
default_channel = "Instagram"
audit_log = true
audit_path = "~/.config/medpost-guard/audit.jsonl"

[rules]
# rules_file = "~/.config/medpost-guard/rules.toml"

[output]
format = "text"
"#;
