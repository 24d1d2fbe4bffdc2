//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::config::SummarizerConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Text Summarizer: condense pasted text or a `.txt` file.
///
/// Summaries come from a pretrained abstractive model
/// (`facebook/bart-large-cnn` by default).
#[derive(Parser, Debug)]
#[command(name = "text-summarizer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Summarization backend (huggingface, extractive).
    #[arg(long, env = "SUMMARIZER_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Model id used by remote backends.
    #[arg(long, env = "SUMMARIZER_MODEL", global = true)]
    pub model: Option<String>,

    /// Base URL of the inference endpoint.
    #[arg(long, env = "HF_API_BASE_URL", global = true)]
    pub api_url: Option<String>,

    /// Inference API token.
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true, global = true)]
    pub api_token: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize text or a `.txt` file.
    ///
    /// When a file is given it is used and the text argument is ignored.
    Summarize {
        /// Text to summarize.
        #[arg(conflicts_with = "stdin")]
        text: Option<String>,

        /// Path to a `.txt` file to summarize.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Read the text from standard input.
        #[arg(long)]
        stdin: bool,

        /// Validate the input without calling the model.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the summarizer configuration.
    Info,
}

impl Cli {
    /// Builds the summarizer configuration from flags and environment,
    /// falling back to defaults.
    #[must_use]
    pub fn summarizer_config(&self) -> SummarizerConfig {
        let mut config = SummarizerConfig::default();
        if let Some(backend) = &self.backend {
            config = config.with_backend(backend);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url);
        }
        if let Some(token) = self.api_token.as_ref().filter(|t| !t.trim().is_empty()) {
            config = config.with_api_token(token);
        }
        config
    }
}
