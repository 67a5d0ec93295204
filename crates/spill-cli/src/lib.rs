pub mod config;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use config::{CliConfig, Command};
use spill_core::{JournalEntry, ReflectionTarget};
use spill_prompts::{assemble_prompt, prompt_for, voice_agent_instructions, VoiceSessionConfig};
use tracing::{debug, info};

/// Read a journal entry from `path`, or from `stdin` when no path is given.
pub fn read_entry(path: Option<&Path>, stdin: &mut impl Read) -> Result<JournalEntry> {
    let text = match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("read entry {}", p.display()))?
        }
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("read entry from stdin")?;
            buf
        }
    };
    let entry = JournalEntry::new(text)?;
    debug!(words = entry.word_count(), "loaded journal entry");
    Ok(entry)
}

/// Execute a parsed command, writing prompt output to `out`.
pub fn run(config: CliConfig, stdin: &mut impl Read, out: &mut impl Write) -> Result<()> {
    match config.command {
        Command::Instructions => {
            out.write_all(voice_agent_instructions().as_bytes())?;
        }
        Command::Reflect { target, entry } => {
            let target = ReflectionTarget::from(target);
            // The voice agent gets the entry as session context, never in its prompt.
            if target == ReflectionTarget::Voice {
                out.write_all(prompt_for(target).as_bytes())?;
            } else {
                let entry = read_entry(entry.as_deref(), stdin)?;
                info!("assembling {target} reflection prompt");
                out.write_all(assemble_prompt(&entry, target).as_bytes())?;
            }
        }
        Command::Session { entry, pretty } => {
            let entry = match entry {
                Some(p) => Some(read_entry(Some(p.as_path()), stdin)?),
                None => None,
            };
            let session = VoiceSessionConfig::new(entry.as_ref());
            let json = if pretty {
                session.to_json_pretty()?
            } else {
                session.to_json()?
            };
            info!(
                with_context = session.initial_context.is_some(),
                "rendered voice session config"
            );
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
