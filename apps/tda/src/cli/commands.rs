//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::greeting::{self, Report};
use crate::{AppError, GreetingConfig};
use std::io::Write;
use std::path::Path;

/// Run the greeting demo with the resolved config.
pub fn cmd_greet<W: Write>(
    config_path: Option<&Path>,
    json_mode: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let config = GreetingConfig::resolve(config_path)?;

    if json_mode {
        let report = greeting::greet(&config.words, &mut std::io::sink())?;
        write_json(&report, out)
    } else {
        let report = greeting::greet(&config.words, out)?;
        tracing::debug!("Greeting popped {} words", report.popped);
        Ok(())
    }
}

/// Push `words` and pop them back, one per line.
pub fn cmd_reverse<W: Write>(
    words: &[String],
    json_mode: bool,
    out: &mut W,
) -> Result<(), AppError> {
    if json_mode {
        let report = greeting::reverse(words, &mut std::io::sink())?;
        write_json(&report, out)
    } else {
        let report = greeting::reverse(words, out)?;
        tracing::debug!("Reverse popped {} words", report.popped);
        Ok(())
    }
}

fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
