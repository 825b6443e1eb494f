//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conference track scheduler.
///
/// Packs timed talks into conference tracks (a 3-hour morning session and
/// a 3-to-4-hour afternoon session per track) and prints a time-stamped
/// agenda.
#[derive(Debug, Parser)]
#[command(name = "ct", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Schedule talks read from a file, or from stdin when omitted.
    Schedule {
        /// File with one talk description per line (e.g. `Woah 30min`).
        input: Option<PathBuf>,
    },

    /// Schedule the bundled demonstration input.
    Sample,
}
