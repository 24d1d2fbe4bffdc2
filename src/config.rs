//! Summarizer configuration.
//!
//! Values come from CLI flags, then environment variables, then the
//! defaults below. The CLI layer does the flag/env merging through clap;
//! [`SummarizerConfig::from_env`] covers library callers.

use serde::Serialize;

/// Backend name for the Hugging Face Inference API.
pub const BACKEND_HUGGINGFACE: &str = "huggingface";

/// Backend name for the offline extractive summarizer.
pub const BACKEND_EXTRACTIVE: &str = "extractive";

/// Default backend for this build.
#[cfg(feature = "hf-inference")]
pub const DEFAULT_BACKEND: &str = BACKEND_HUGGINGFACE;

/// Default backend for this build.
#[cfg(not(feature = "hf-inference"))]
pub const DEFAULT_BACKEND: &str = BACKEND_EXTRACTIVE;

/// Default pretrained abstractive summarization model.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Default Hugging Face inference endpoint.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference";

/// Environment variable selecting the backend.
pub const ENV_BACKEND: &str = "SUMMARIZER_BACKEND";

/// Environment variable selecting the model id.
pub const ENV_MODEL: &str = "SUMMARIZER_MODEL";

/// Environment variable overriding the inference endpoint.
pub const ENV_BASE_URL: &str = "HF_API_BASE_URL";

/// Environment variable holding the inference API token.
pub const ENV_API_TOKEN: &str = "HF_API_TOKEN";

/// Settings used to build a summarizer backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizerConfig {
    /// Backend name (`huggingface` or `extractive`).
    pub backend: String,
    /// Model id passed to remote backends.
    pub model: String,
    /// Base URL of the inference endpoint.
    pub base_url: String,
    /// Bearer token for the inference endpoint.
    #[serde(skip)]
    pub api_token: Option<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
        }
    }
}

impl SummarizerConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            backend: get(ENV_BACKEND).unwrap_or(defaults.backend),
            model: get(ENV_MODEL).unwrap_or(defaults.model),
            base_url: get(ENV_BASE_URL).unwrap_or(defaults.base_url),
            api_token: get(ENV_API_TOKEN),
        }
    }

    /// Sets the backend name.
    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    /// Sets the model id.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the inference endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the inference API token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Returns true if an API token is configured.
    #[must_use]
    pub const fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }
}
