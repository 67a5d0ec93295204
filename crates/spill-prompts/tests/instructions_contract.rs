//! Contract tests for the voice agent instruction text as an external caller sees it.

use std::thread;

use spill_prompts::instructions::{
    voice_agent_instructions, MAX_RESPONSE_WORDS, OPENING_UTTERANCE, PERSONA_NAME,
    VOICE_AGENT_INSTRUCTIONS,
};

#[test]
fn non_empty() {
    assert!(!voice_agent_instructions().trim().is_empty());
}

#[test]
fn repeated_reads_are_identical() {
    let first = voice_agent_instructions();
    let len = first.len();
    for _ in 0..100 {
        let again = voice_agent_instructions();
        assert_eq!(again, first);
        assert_eq!(again.len(), len);
        assert_eq!(again.as_ptr(), first.as_ptr());
    }
}

const GOLDEN: &str = include_str!("fixtures/voice_agent_instructions.txt");

#[test]
fn byte_identical_to_golden_text() {
    assert_eq!(voice_agent_instructions().as_bytes(), GOLDEN.as_bytes());
    assert_eq!(VOICE_AGENT_INSTRUCTIONS.len(), GOLDEN.len());
}

#[test]
fn first_and_last_lines_pinned() {
    let text = voice_agent_instructions();
    assert_eq!(
        text.lines().next(),
        Some("Your name is Spill. You would interact with users via voice.")
    );
    assert_eq!(
        text.lines().last(),
        Some(
            "Finally, end with a thought provoking \"question\" to the user based on what \
             they've written. Their answer should help you understand what they're thinking. \
             Preferably yes or no questions, or something that can be answered in a few words."
        )
    );
}

#[test]
fn contains_mandated_opening_utterance() {
    assert!(voice_agent_instructions()
        .contains("Hey, please wait while I reflect on your journal entry. Sit tight!"));
    assert!(voice_agent_instructions().contains(OPENING_UTTERANCE));
}

#[test]
fn contains_persona_name() {
    assert!(voice_agent_instructions().contains("Spill"));
    assert_eq!(PERSONA_NAME, "Spill");
}

#[test]
fn word_cap_is_150() {
    assert_eq!(MAX_RESPONSE_WORDS, 150);
    assert!(voice_agent_instructions().contains("150 words or less"));
}

#[test]
fn concurrent_reads_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| voice_agent_instructions().to_string()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), GOLDEN);
    }
}
