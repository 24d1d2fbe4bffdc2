//! Summarization backends and the invoker that calls them.
//!
//! A [`Summarizer`] is the external abstractive model seen as a black box:
//! text plus [`SummaryParams`] in, a list of [`SummaryCandidate`]s out.
//!
//! # Feature Flags
//!
//! - `hf-inference`: Enables [`HuggingFaceSummarizer`] (`facebook/bart-large-cnn`
//!   through the Hugging Face Inference API)
//! - Without the feature: only the offline [`ExtractiveSummarizer`] is available

mod extractive;
#[cfg(feature = "hf-inference")]
mod huggingface;
mod invoker;
mod shared;

pub use extractive::ExtractiveSummarizer;
#[cfg(feature = "hf-inference")]
pub use huggingface::HuggingFaceSummarizer;
pub use invoker::{summarize_text, summarize_with, try_summarize_with};
pub use shared::{init_shared, shared, shared_or_init};

use crate::config::{BACKEND_EXTRACTIVE, BACKEND_HUGGINGFACE, SummarizerConfig};
use crate::error::{BackendError, Error, Result};
use serde::{Deserialize, Serialize};

/// Maximum summary length in tokens.
pub const MAX_SUMMARY_LENGTH: usize = 150;

/// Minimum summary length in tokens.
pub const MIN_SUMMARY_LENGTH: usize = 40;

/// Generation parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    /// Maximum output length in tokens.
    pub max_length: usize,
    /// Minimum output length in tokens.
    pub min_length: usize,
    /// Sampling toggle; `false` selects deterministic decoding.
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: MAX_SUMMARY_LENGTH,
            min_length: MIN_SUMMARY_LENGTH,
            do_sample: false,
        }
    }
}

/// One generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    /// The generated summary text.
    pub summary_text: String,
}

impl SummaryCandidate {
    /// Creates a candidate from summary text.
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}

/// Trait for summarization backends.
///
/// Implementations must be thread-safe (`Send + Sync`) so one instance can
/// be shared process-wide.
///
/// # Examples
///
/// ```
/// use text_summarizer::summarize::{ExtractiveSummarizer, Summarizer, SummaryParams};
///
/// let summarizer = ExtractiveSummarizer::new();
/// let candidates = summarizer
///     .summarize("Rust is fast. Rust is safe.", &SummaryParams::default())
///     .unwrap();
/// assert_eq!(candidates.len(), 1);
/// ```
pub trait Summarizer: Send + Sync {
    /// Returns the backend name.
    fn name(&self) -> &str;

    /// Generates summary candidates for the given text.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if generation fails.
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> std::result::Result<Vec<SummaryCandidate>, BackendError>;
}

/// Returns the backend names compiled into this build.
#[must_use]
pub fn available_backends() -> Vec<&'static str> {
    let mut backends = Vec::with_capacity(2);
    if cfg!(feature = "hf-inference") {
        backends.push(BACKEND_HUGGINGFACE);
    }
    backends.push(BACKEND_EXTRACTIVE);
    backends
}

/// Creates a summarizer from configuration.
///
/// # Errors
///
/// Returns [`Error::Config`] for unknown backend names, for backends that
/// were compiled out, or if the backend fails to initialise.
pub fn create_summarizer(config: &SummarizerConfig) -> Result<Box<dyn Summarizer>> {
    match config.backend.to_lowercase().as_str() {
        BACKEND_EXTRACTIVE => Ok(Box::new(ExtractiveSummarizer::new())),
        #[cfg(feature = "hf-inference")]
        BACKEND_HUGGINGFACE => Ok(Box::new(HuggingFaceSummarizer::from_config(config)?)),
        #[cfg(not(feature = "hf-inference"))]
        BACKEND_HUGGINGFACE => Err(Error::Config {
            message: "huggingface backend requires the `hf-inference` feature".to_string(),
        }),
        other => Err(Error::Config {
            message: format!(
                "unknown summarizer backend: {other} (available: {})",
                available_backends().join(", ")
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SummaryParams::default();
        assert_eq!(params.max_length, 150);
        assert_eq!(params.min_length, 40);
        assert!(!params.do_sample);
    }

    #[test]
    fn test_available_backends() {
        let backends = available_backends();
        assert!(backends.contains(&"extractive"));
        assert_eq!(
            backends.contains(&"huggingface"),
            cfg!(feature = "hf-inference")
        );
    }

    #[test]
    fn test_create_extractive() {
        let config = SummarizerConfig::default().with_backend("Extractive");
        let summarizer = create_summarizer(&config).unwrap();
        assert_eq!(summarizer.name(), "extractive");
    }

    #[cfg(feature = "hf-inference")]
    #[test]
    fn test_create_huggingface() {
        let config = SummarizerConfig::default().with_backend("huggingface");
        let summarizer = create_summarizer(&config).unwrap();
        assert_eq!(summarizer.name(), "huggingface");
    }

    #[test]
    fn test_create_unknown_backend() {
        let config = SummarizerConfig::default().with_backend("pegasus");
        let err = create_summarizer(&config).err().unwrap();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("pegasus"));
    }

    #[test]
    fn test_candidate_deserialize() {
        let candidates: Vec<SummaryCandidate> =
            serde_json::from_str(r#"[{"summary_text": "short"}]"#).unwrap();
        assert_eq!(candidates, vec![SummaryCandidate::new("short")]);
    }
}
