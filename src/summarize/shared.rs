//! Process-wide summarizer instance.
//!
//! The model is installed once and then only read. [`init_shared`] is the
//! explicit start-up hook; [`shared`] falls back to the environment
//! configuration on first use when nothing was installed.

use crate::config::SummarizerConfig;
use crate::error::{Error, Result};
use crate::summarize::{Summarizer, create_summarizer};
use std::sync::OnceLock;

/// Thread-safe singleton for the summarization model.
static SHARED_SUMMARIZER: OnceLock<Box<dyn Summarizer>> = OnceLock::new();

fn already_initialized() -> Error {
    Error::Config {
        message: "shared summarizer is already initialized".to_string(),
    }
}

/// Installs the process-wide summarizer.
///
/// # Errors
///
/// Returns [`Error::Config`] if a summarizer is already installed or the
/// backend cannot be created.
pub fn init_shared(config: &SummarizerConfig) -> Result<&'static dyn Summarizer> {
    if SHARED_SUMMARIZER.get().is_some() {
        return Err(already_initialized());
    }

    let summarizer = create_summarizer(config)?;
    tracing::debug!(
        backend = summarizer.name(),
        model = %config.model,
        "installing shared summarizer"
    );

    SHARED_SUMMARIZER
        .set(summarizer)
        .map_err(|_| already_initialized())?;

    shared()
}

/// Returns the process-wide summarizer, installing one built from `config`
/// if none exists yet.
///
/// # Errors
///
/// Returns [`Error::Config`] if the backend cannot be created.
pub fn shared_or_init(config: &SummarizerConfig) -> Result<&'static dyn Summarizer> {
    if let Some(summarizer) = SHARED_SUMMARIZER.get() {
        return Ok(summarizer.as_ref());
    }
    init_shared(config).or_else(|e| SHARED_SUMMARIZER.get().map(AsRef::as_ref).ok_or(e))
}

/// Returns the process-wide summarizer, creating it from the environment
/// configuration if [`init_shared`] was never called.
///
/// # Errors
///
/// Returns an error if lazy initialization fails.
pub fn shared() -> Result<&'static dyn Summarizer> {
    if let Some(summarizer) = SHARED_SUMMARIZER.get() {
        return Ok(summarizer.as_ref());
    }

    let summarizer = create_summarizer(&SummarizerConfig::from_env())?;

    // Store the summarizer, ignoring if another thread beat us to it
    let _ = SHARED_SUMMARIZER.set(summarizer);

    SHARED_SUMMARIZER
        .get()
        .map(AsRef::as_ref)
        .ok_or_else(|| Error::Config {
            message: "shared summarizer initialization race".to_string(),
        })
}
