use std::io;

use anyhow::Result;
use clap::Parser;
use spill_cli::config::CliConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::parse();
    spill_cli::run(config, &mut io::stdin().lock(), &mut io::stdout().lock())
}
