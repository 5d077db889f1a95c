//! Study Guide CLI library.
//!
//! This library provides the core functionality for the `studyguide` command-line
//! interface, including configuration management, command execution, progress
//! display, output formatting, the interactive flashcard viewer and HTML export.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod html;
pub mod output;
pub mod progress;
pub mod viewer;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks warn, info or debug.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
