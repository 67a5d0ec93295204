use serde::Serialize;
use spill_core::{JournalEntry, SpillError};

use crate::instructions::voice_agent_instructions;

/// Configuration handed to the voice-agent platform when a session starts.
///
/// The instructions are always the fixed Spill prompt. The journal entry, if
/// any, travels alongside as initial context rather than being spliced into
/// the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceSessionConfig {
    pub instructions: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_context: Option<String>,
}

impl VoiceSessionConfig {
    pub fn new(entry: Option<&JournalEntry>) -> Self {
        Self {
            instructions: voice_agent_instructions(),
            initial_context: entry.map(|e| e.as_str().to_string()),
        }
    }

    pub fn to_json(&self) -> Result<String, SpillError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SpillError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
