//! # Config Module
//!
//! Words fed to the greeting demo.
//!
//! ## Sources (highest priority first)
//!
//! 1. `--config <path>` on the command line
//! 2. `TDA_CONFIG` environment variable
//! 3. Built-in default: `["world!", "Hello, "]`
//!
//! ## File Format
//!
//! ```toml
//! words = ["world!", "Hello, "]
//! ```

use crate::AppError;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TDA_CONFIG";

/// Words pushed by default, in push order.
pub const DEFAULT_WORDS: [&str; 2] = ["world!", "Hello, "];

/// Configuration for the greeting demo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Words to push, in push order. They are printed in reverse.
    pub words: Vec<String>,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl GreetingConfig {
    /// Parse a config from TOML text.
    ///
    /// A missing `words` key falls back to the default list.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Config(format!("Invalid TOML: {}", e)))
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the config from the CLI flag, then `TDA_CONFIG`, then defaults.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self, AppError> {
        Self::resolve_with(cli_path, std::env::var_os(CONFIG_ENV))
    }

    /// Resolve with an explicit environment value.
    pub fn resolve_with(
        cli_path: Option<&Path>,
        env_path: Option<OsString>,
    ) -> Result<Self, AppError> {
        let path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
