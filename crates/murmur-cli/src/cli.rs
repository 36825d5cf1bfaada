//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Murmur - Extract structured insights from voice-journal transcripts
#[derive(Parser)]
#[command(name = "murmur")]
#[command(about = "Bilingual journal insight extraction and audit diffing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract wins, regrets, tasks, and keywords from a transcript
    Analyze {
        /// Transcript file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Lexicon TOML override (defaults to the embedded lexicon)
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
    },

    /// Diff two entry snapshots for the audit log
    Diff {
        /// JSON file with the snapshot before the edit
        #[arg(short, long)]
        before: PathBuf,

        /// JSON file with the snapshot after the edit
        #[arg(short, long)]
        after: PathBuf,

        /// Extra field names to exclude, on top of the default set
        #[arg(short, long)]
        exclude: Vec<String>,
    },
}
