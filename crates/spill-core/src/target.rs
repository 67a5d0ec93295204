use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a journal reflection is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionTarget {
    /// The Spill voice agent.
    Voice,
    ChatGpt,
    Claude,
}

impl ReflectionTarget {
    pub const ALL: [ReflectionTarget; 3] = [
        ReflectionTarget::Voice,
        ReflectionTarget::ChatGpt,
        ReflectionTarget::Claude,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReflectionTarget::Voice => "voice",
            ReflectionTarget::ChatGpt => "chatgpt",
            ReflectionTarget::Claude => "claude",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "voice" => Some(ReflectionTarget::Voice),
            "chatgpt" => Some(ReflectionTarget::ChatGpt),
            "claude" => Some(ReflectionTarget::Claude),
            _ => None,
        }
    }
}

impl fmt::Display for ReflectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
