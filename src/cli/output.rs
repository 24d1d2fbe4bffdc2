//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::config::SummarizerConfig;
use crate::error::Error;
use crate::io::{truncate_graphemes, word_count};
use crate::summarize::SummaryParams;
use serde::Serialize;
use std::fmt::Write;

/// Graphemes shown when previewing a resolved payload.
const PREVIEW_GRAPHEMES: usize = 200;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Where a payload came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum InputSource {
    /// Text passed on the command line.
    Text,
    /// Text read from standard input.
    Stdin,
    /// An uploaded file, by name.
    File(String),
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Stdin => f.write_str("stdin"),
            Self::File(name) => write!(f, "file {name}"),
        }
    }
}

/// Formats a generated summary.
#[must_use]
pub fn format_summary(
    summary: &str,
    backend: &str,
    source: &InputSource,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = summary.to_string();
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct SummaryOutput<'a> {
                summary: &'a str,
                backend: &'a str,
                source: &'a InputSource,
                words: usize,
            }
            format_json(&SummaryOutput {
                summary,
                backend,
                source,
                words: word_count(summary),
            })
        }
    }
}

/// Formats a resolved payload for `--dry-run`.
#[must_use]
pub fn format_payload(payload: &str, source: &InputSource, format: OutputFormat) -> String {
    let preview = truncate_graphemes(payload.trim(), PREVIEW_GRAPHEMES);

    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(
                output,
                "Resolved {} bytes ({} words) from {source}",
                payload.len(),
                word_count(payload)
            );
            output.push_str("---\n");
            output.push_str(preview);
            if preview.len() < payload.trim().len() {
                output.push_str("...");
            }
            output.push_str("\n---\n");
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PayloadOutput<'a> {
                source: &'a InputSource,
                bytes: usize,
                words: usize,
                preview: &'a str,
            }
            format_json(&PayloadOutput {
                source,
                bytes: payload.len(),
                words: word_count(payload),
                preview,
            })
        }
    }
}

/// Formats the summarizer configuration.
#[must_use]
pub fn format_info(
    config: &SummarizerConfig,
    params: &SummaryParams,
    backends: &[&str],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Text Summarizer\n");
            output.push_str("===============\n\n");
            let _ = writeln!(output, "  Backend:     {}", config.backend);
            let _ = writeln!(output, "  Model:       {}", config.model);
            let _ = writeln!(output, "  Endpoint:    {}", config.base_url);
            let _ = writeln!(
                output,
                "  API token:   {}",
                if config.has_api_token() { "set" } else { "not set" }
            );
            let _ = writeln!(output, "  Max length:  {}", params.max_length);
            let _ = writeln!(output, "  Min length:  {}", params.min_length);
            let _ = writeln!(output, "  Sampling:    {}", if params.do_sample { "on" } else { "off" });
            let _ = writeln!(output, "  Available:   {}", backends.join(", "));
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct InfoOutput<'a> {
                #[serde(flatten)]
                config: &'a SummarizerConfig,
                api_token_set: bool,
                parameters: &'a SummaryParams,
                available_backends: &'a [&'a str],
            }
            format_json(&InfoOutput {
                config,
                api_token_set: config.has_api_token(),
                parameters: params,
                available_backends: backends,
            })
        }
    }
}

/// Formats an error.
///
/// Request errors already carry their full user-facing message.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if error.is_request_error() {
                error.to_string()
            } else {
                format!("Error: {error}")
            }
        }
        OutputFormat::Json => format_json(&serde_json::json!({ "error": error.to_string() })),
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, SummarizeError};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_summary_text() {
        let out = format_summary("Short.", "extractive", &InputSource::Text, OutputFormat::Text);
        assert_eq!(out, "Short.\n");
    }

    #[test]
    fn test_format_summary_json() {
        let source = InputSource::File("notes.txt".to_string());
        let out = format_summary("Two words.", "extractive", &source, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"], "Two words.");
        assert_eq!(value["backend"], "extractive");
        assert_eq!(value["source"]["kind"], "file");
        assert_eq!(value["source"]["name"], "notes.txt");
        assert_eq!(value["words"], 2);
    }

    #[test]
    fn test_format_payload_preview() {
        let payload = "word ".repeat(100);
        let out = format_payload(&payload, &InputSource::Stdin, OutputFormat::Text);
        assert!(out.starts_with("Resolved 500 bytes (100 words) from stdin"));
        assert!(out.contains("..."));
    }

    #[test]
    fn test_format_info() {
        let config = SummarizerConfig::default().with_api_token("hf_secret");
        let params = SummaryParams::default();

        let text = format_info(&config, &params, &["extractive"], OutputFormat::Text);
        assert!(text.contains("facebook/bart-large-cnn"));
        assert!(text.contains("API token:   set"));
        assert!(text.contains("Max length:  150"));
        assert!(!text.contains("hf_secret"));

        let json = format_info(&config, &params, &["extractive"], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"], "facebook/bart-large-cnn");
        assert_eq!(value["api_token_set"], true);
        assert_eq!(value["parameters"]["min_length"], 40);
        assert!(!json.contains("hf_secret"));
    }

    #[test]
    fn test_format_error() {
        let err: Error = InputError::NoInput.into();
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "Error: No text provided for summarization."
        );

        let err: Error = SummarizeError::EmptyText.into();
        let json: serde_json::Value =
            serde_json::from_str(&format_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(json["error"], "Error: Provided text is empty.");

        let err = Error::Config {
            message: "bad".to_string(),
        };
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "Error: configuration error: bad"
        );
    }
}
