//! # tda - LIFO stack demo
//!
//! Pushes `"world!"` then `"Hello, "` onto a stack and pops them back out,
//! printing `Hello, world!`.
//!
//! ## Usage
//!
//! ```bash
//! # Default greeting
//! tda
//!
//! # Words from a config file
//! tda --config greeting.toml greet
//!
//! # Pop arbitrary words back in LIFO order
//! tda reverse one two three
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = tda::cli::Cli::parse();

    // Initialize tracing on stderr — TDA_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("TDA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose { "tda=debug" } else { "tda=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Execute command
    if let Err(e) = tda::cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
