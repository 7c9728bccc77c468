//! # tda CLI Module
//!
//! This module implements the CLI interface for tda.
//!
//! ## Available Commands
//!
//! - `greet` - Push the configured words and pop them into one line (default)
//! - `reverse` - Push the given words and pop them one per line

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// tda - a LIFO stack of strings
///
/// Pushes words onto a stack and prints them back in last-in-first-out order.
#[derive(Parser, Debug)]
#[command(name = "tda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (overrides TDA_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute (defaults to `greet`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Push the configured words, then pop them into a single line
    Greet,

    /// Push each word, then pop them one per line
    Reverse {
        /// Words to push, in push order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

// =============================================================================
// COMMAND DISPATCH
// =============================================================================

/// Execute the parsed CLI command, writing its output to stdout.
pub fn execute(cli: Cli) -> Result<(), crate::AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_to(cli, &mut out)
}

/// Execute the parsed CLI command, writing its output to `out`.
pub fn execute_to<W: std::io::Write>(cli: Cli, out: &mut W) -> Result<(), crate::AppError> {
    match cli.command.unwrap_or(Commands::Greet) {
        Commands::Greet => cmd_greet(cli.config.as_deref(), cli.json_mode, out),
        Commands::Reverse { words } => cmd_reverse(&words, cli.json_mode, out),
    }
}
