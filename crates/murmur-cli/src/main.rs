//! Murmur CLI - Voice-journal insight extraction
//!
//! Usage:
//!   murmur analyze --file entry.txt          Extract insights from a transcript
//!   murmur analyze < entry.txt               Same, reading stdin
//!   murmur diff --before a.json --after b.json   Audit diff of two snapshots

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Analyze { file, lexicon } => {
            commands::cmd_analyze(file.as_deref(), lexicon.as_deref())
        }
        Commands::Diff {
            before,
            after,
            exclude,
        } => commands::cmd_diff(&before, &after, &exclude),
    }
}
