//! Analysis input
//!
//! The publishing channel and the JSON request format accepted by the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target publishing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Channel {
    #[default]
    Instagram,
    Facebook,
    LinkedIn,
    TikTok,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Instagram,
        Channel::Facebook,
        Channel::LinkedIn,
        Channel::TikTok,
    ];

    /// Display name, as serialized
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Instagram => "Instagram",
            Channel::Facebook => "Facebook",
            Channel::LinkedIn => "LinkedIn",
            Channel::TikTok => "TikTok",
        }
    }

    /// Parse a channel name, ignoring case
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Some(Channel::Instagram),
            "facebook" => Some(Channel::Facebook),
            "linkedin" => Some(Channel::LinkedIn),
            "tiktok" => Some(Channel::TikTok),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A post submitted for analysis
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// Post text
    pub text: String,

    /// Channel the post targets; falls back to the configured default
    #[serde(default)]
    pub channel: Option<Channel>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, channel: Channel) -> Self {
        Self {
            text: text.into(),
            channel: Some(channel),
        }
    }

    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Channel, or `fallback` when none was given
    pub fn channel_or(&self, fallback: Channel) -> Channel {
        self.channel.unwrap_or(fallback)
    }

    /// Short preview of the text for logging
    pub fn summary(&self) -> String {
        const MAX_CHARS: usize = 100;

        let single_line = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if single_line.chars().count() > MAX_CHARS {
            let truncated: String = single_line.chars().take(MAX_CHARS).collect();
            format!("{}...", truncated)
        } else {
            single_line
        }
    }
}
