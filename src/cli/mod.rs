//! CLI layer for the text summarizer.
//!
//! Provides the command-line interface using clap, with commands for
//! summarizing text or a `.txt` file and inspecting the configuration.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
