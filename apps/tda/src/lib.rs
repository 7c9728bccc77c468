//! # tda
//!
//! Library half of the tda binary: the greeting demo, its configuration,
//! and the CLI that drives it. The stack itself lives in `tda-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod greeting;

pub use config::GreetingConfig;
pub use error::AppError;
pub use greeting::Report;
