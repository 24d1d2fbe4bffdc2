//! Error types for text summarization.
//!
//! The user-facing variants render exactly the messages the front-end shows,
//! so flattening an [`Error`] with `to_string()` yields the final result
//! string. Backend faults carry their own [`BackendError`] and are folded into
//! [`SummarizeError::Failed`] at the invoker boundary.

use thiserror::Error;

/// Result type alias for summarizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for summarizer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input resolution failed (no text, bad upload).
    #[error(transparent)]
    Input(#[from] InputError),

    /// Summarization failed (blank text, model fault).
    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised while resolving the text payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Neither text nor file supplied, or the text is blank.
    #[error("Error: No text provided for summarization.")]
    NoInput,

    /// Uploaded file name lacks the `.txt` suffix.
    #[error("Error: Unsupported file format. Please upload a .txt file.")]
    UnsupportedFormat,

    /// Uploaded file decodes to blank content.
    #[error("Error: Uploaded file is empty.")]
    EmptyFile,

    /// Reading or decoding the uploaded file failed.
    #[error("Error reading file: {reason}")]
    FileRead {
        /// Underlying fault description.
        reason: String,
    },
}

/// Errors raised by the summarization invoker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// Text handed to the invoker is blank.
    #[error("Error: Provided text is empty.")]
    EmptyText,

    /// The summarization backend raised a fault.
    #[error("Error during summarization: {reason}")]
    Failed {
        /// Underlying fault description.
        reason: String,
    },
}

/// Faults raised inside a summarization backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport failure talking to a remote model.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Remote model answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the API.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Model returned no candidates.
    #[error("model returned no summary candidates")]
    NoCandidates,

    /// Backend received text it cannot process.
    #[error("cannot summarize blank text")]
    EmptyInput,

    /// Backend panicked during generation.
    #[error("backend panic: {0}")]
    Panicked(String),
}

/// Faults reading an upload from local disk.
#[derive(Error, Debug)]
pub enum IoError {
    /// Nothing exists at the path.
    #[error("no such file: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: String,
    },

    /// Opening or reading the file failed.
    #[error("cannot read {path}: {reason}")]
    ReadFailed {
        /// Path of the upload.
        path: String,
        /// Underlying fault description.
        reason: String,
    },

    /// Mapping a large file into memory failed.
    #[error("cannot map {path} into memory: {reason}")]
    MmapFailed {
        /// Path of the upload.
        path: String,
        /// Underlying fault description.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Standard input could not be read.
    #[error("failed to read from stdin: {0}")]
    Stdin(String),
}

impl Error {
    /// Returns true for errors produced by resolving or summarizing a request.
    ///
    /// These carry the exact user-facing message; everything else is an
    /// operational failure of the tool itself.
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Summarize(_))
    }
}

impl From<BackendError> for SummarizeError {
    fn from(err: BackendError) -> Self {
        Self::Failed {
            reason: err.to_string(),
        }
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Self::Summarize(err.into())
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::FileRead {
            reason: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for InputError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::FileRead {
            reason: format!("invalid UTF-8: {}", err.utf8_error()),
        }
    }
}

impl From<IoError> for std::io::Error {
    fn from(err: IoError) -> Self {
        let kind = match err {
            IoError::FileNotFound { .. } => std::io::ErrorKind::NotFound,
            IoError::ReadFailed { .. } | IoError::MmapFailed { .. } => std::io::ErrorKind::Other,
        };
        Self::new(kind, err)
    }
}

#[cfg(feature = "hf-inference")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
