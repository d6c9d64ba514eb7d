//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Progression table generator
#[derive(Parser, Debug)]
#[command(name = "progressionctl")]
#[command(about = "Generate XP curve and fishing progression tables", long_about = None)]
#[command(version = env!("PROGRESSION_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to progression.toml (defaults to ./progression.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not print computed XP values to stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand (if not provided, generates both tables)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the XP curve JSON
    Xp {
        /// Highest level in the curve
        #[arg(long)]
        max_level: Option<u32>,

        /// Destination JSON file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate the fishing catch-time CSV
    Fishing {
        /// Highest fishing level (inclusive)
        #[arg(long)]
        max_level: Option<u32>,

        /// Level step between rows
        #[arg(long)]
        step: Option<u32>,

        /// Destination CSV file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate both tables (default)
    All,

    /// Show the level reached with a given amount of XP
    Level {
        /// Total XP
        #[arg(long)]
        xp: u64,

        /// Read an exported XP table instead of computing the curve
        #[arg(long)]
        table: Option<PathBuf>,
    },
}
