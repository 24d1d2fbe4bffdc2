//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{InputSource, OutputFormat, format_info, format_payload, format_summary};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::input::{LocalFile, UploadedFile, resolve_payload};
use crate::config::SummarizerConfig;
use crate::summarize::{SummaryParams, available_backends, shared_or_init, try_summarize_with};
use std::io::{self, Read};
use std::path::Path;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute. Request errors
/// (missing text, bad upload, model faults) render the exact user-facing
/// message.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Summarize {
            text,
            file,
            stdin,
            dry_run,
        } => cmd_summarize(
            &cli.summarizer_config(),
            text.as_deref(),
            file.as_deref(),
            *stdin,
            *dry_run,
            format,
        ),
        Commands::Info => Ok(cmd_info(cli, format)),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| CommandError::Stdin(e.to_string()))?;
    Ok(buffer)
}

fn cmd_summarize(
    config: &SummarizerConfig,
    text: Option<&str>,
    file: Option<&Path>,
    stdin: bool,
    dry_run: bool,
    format: OutputFormat,
) -> Result<String> {
    // Only read stdin when no file would take precedence over it
    let input_text = if stdin && file.is_none() {
        read_stdin()?
    } else {
        text.unwrap_or_default().to_string()
    };

    let mut upload = file.map(LocalFile::new);
    let source = match &upload {
        Some(local) => InputSource::File(local.name().to_string()),
        None if stdin => InputSource::Stdin,
        None => InputSource::Text,
    };
    let upload = upload.as_mut().map(|f| f as &mut dyn UploadedFile);

    let payload = resolve_payload(&input_text, upload)?;
    if dry_run {
        return Ok(format_payload(&payload, &source, format));
    }

    // The model is only touched once the input is known to be valid
    let summarizer = shared_or_init(config)?;
    tracing::debug!(backend = summarizer.name(), %source, "summarizing");
    let summary = try_summarize_with(summarizer, &payload)?;

    Ok(format_summary(&summary, summarizer.name(), &source, format))
}

fn cmd_info(cli: &Cli, format: OutputFormat) -> String {
    format_info(
        &cli.summarizer_config(),
        &SummaryParams::default(),
        &available_backends(),
        format,
    )
}
