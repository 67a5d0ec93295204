use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use spill_core::ReflectionTarget;

#[derive(Debug, Parser)]
#[command(name = "spill", about = "Spill journal reflection prompts")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the voice agent instructions
    Instructions,

    /// Print the full reflection prompt for a journal entry
    Reflect {
        /// Where the reflection is going
        #[arg(long, value_enum, default_value = "voice")]
        target: TargetArg,

        /// Journal entry file; read from stdin when omitted. Unused for the voice target
        #[arg(long)]
        entry: Option<PathBuf>,
    },

    /// Print the voice session configuration as JSON
    Session {
        /// Journal entry file to attach as initial context
        #[arg(long)]
        entry: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Voice,
    #[value(name = "chatgpt")]
    ChatGpt,
    Claude,
}

impl From<TargetArg> for ReflectionTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Voice => ReflectionTarget::Voice,
            TargetArg::ChatGpt => ReflectionTarget::ChatGpt,
            TargetArg::Claude => ReflectionTarget::Claude,
        }
    }
}
