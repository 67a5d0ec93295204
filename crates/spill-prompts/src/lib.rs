pub mod chat;
pub mod claude;
pub mod instructions;
pub mod session;

pub use instructions::{voice_agent_instructions, VOICE_AGENT_INSTRUCTIONS};
pub use session::VoiceSessionConfig;
use spill_core::{JournalEntry, ReflectionTarget};
use tracing::debug;

/// The fixed prompt text for a target, without any entry attached.
pub fn prompt_for(target: ReflectionTarget) -> &'static str {
    match target {
        ReflectionTarget::Voice => instructions::VOICE_AGENT_INSTRUCTIONS,
        ReflectionTarget::ChatGpt => chat::CHAT_PROMPT,
        ReflectionTarget::Claude => claude::CLAUDE_PROMPT,
    }
}

/// Assemble the full prompt for a given entry and target.
///
/// For [`ReflectionTarget::Voice`] this is the instruction text verbatim; the
/// entry reaches the voice agent as session context (see [`VoiceSessionConfig`]).
pub fn assemble_prompt(entry: &JournalEntry, target: ReflectionTarget) -> String {
    let mut prompt = String::new();

    match target {
        ReflectionTarget::Voice => prompt.push_str(voice_agent_instructions()),
        ReflectionTarget::ChatGpt => chat::append_prompt(&mut prompt, entry),
        ReflectionTarget::Claude => claude::append_prompt(&mut prompt, entry),
    }

    debug!(
        target_name = target.as_str(),
        entry_words = entry.word_count(),
        prompt_len = prompt.len(),
        "assembled reflection prompt"
    );
    prompt
}
