//! Hugging Face Inference API summarizer.
//!
//! Sends text to a hosted summarization pipeline (`facebook/bart-large-cnn`
//! by default) and returns the generated candidates. Only available when
//! the `hf-inference` feature is enabled.

use crate::config::{BACKEND_HUGGINGFACE, DEFAULT_BASE_URL, SummarizerConfig};
use crate::error::{BackendError, Error, Result};
use crate::summarize::{Summarizer, SummaryCandidate, SummaryParams};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

/// Summarizer backed by the Hugging Face Inference API.
///
/// Calls block until the model answers; no request timeout is applied.
///
/// # Examples
///
/// ```no_run
/// use text_summarizer::summarize::{HuggingFaceSummarizer, Summarizer, SummaryParams};
///
/// let summarizer = HuggingFaceSummarizer::new("facebook/bart-large-cnn")?;
/// let candidates = summarizer.summarize("Long article text ...", &SummaryParams::default())?;
/// println!("{}", candidates[0].summary_text);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct HuggingFaceSummarizer {
    client: Client,
    model: String,
    base_url: String,
    api_token: Option<String>,
}

/// JSON body of a summarization request.
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
}

impl HuggingFaceSummarizer {
    /// Creates a summarizer for the given model on the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
        })
    }

    /// Creates a summarizer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        let mut summarizer = Self::new(&config.model)?.with_base_url(&config.base_url);
        if let Some(token) = &config.api_token {
            summarizer = summarizer.with_api_token(token);
        }
        Ok(summarizer)
    }

    /// Overrides the inference endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the bearer token sent with each request.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Returns the model id.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Interprets a response status and body.
    fn parse_response(
        status: u16,
        body: &str,
    ) -> std::result::Result<Vec<SummaryCandidate>, BackendError> {
        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| {
                    v.get("error").map(|e| {
                        e.as_str()
                            .map_or_else(|| e.to_string(), ToString::to_string)
                    })
                })
                .unwrap_or_else(|| body.trim().to_string());
            return Err(BackendError::Api { status, message });
        }

        let candidates: Vec<SummaryCandidate> = serde_json::from_str(body)?;
        if candidates.is_empty() {
            return Err(BackendError::NoCandidates);
        }
        Ok(candidates)
    }
}

impl Summarizer for HuggingFaceSummarizer {
    fn name(&self) -> &str {
        BACKEND_HUGGINGFACE
    }

    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> std::result::Result<Vec<SummaryCandidate>, BackendError> {
        let url = self.endpoint();
        tracing::debug!(%url, bytes = text.len(), "sending summarization request");

        let mut request = self.client.post(&url).json(&InferenceRequest {
            inputs: text,
            parameters: params,
        });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Self::parse_response(status, &body)
            .inspect_err(|e| tracing::warn!(status, error = %e, "summarization request failed"))
    }
}
