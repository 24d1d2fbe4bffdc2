//! # Text Summarizer
//!
//! Condenses pasted text or an uploaded `.txt` file into a short summary
//! using a pretrained abstractive model.
//!
//! The crate is split into an input resolver, which picks the single text
//! payload from direct text and an optional upload, and a summarization
//! invoker, which hands that payload to a process-wide [`Summarizer`] with
//! fixed generation parameters. Every failure surfaces as a plain message
//! beginning with `Error`.
//!
//! ## Features
//!
//! - **Hugging Face Inference**: `facebook/bart-large-cnn` over HTTP (`hf-inference`)
//! - **Offline fallback**: frequency-based extractive summaries
//! - **Memory Mapping**: Efficient handling of large uploads
//! - **Unicode Aware**: Sentence and word segmentation per UAX #29
//!
//! ## Example
//!
//! ```
//! use text_summarizer::input::{Upload, resolve_with};
//! use text_summarizer::summarize::ExtractiveSummarizer;
//!
//! let summarizer = ExtractiveSummarizer::new();
//! let mut file = Upload::from_bytes("notes.txt", "Rust is fast. Rust is safe.");
//! let summary = resolve_with("", Some(&mut file), &summarizer);
//! assert!(!summary.starts_with("Error"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod summarize;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export configuration
pub use config::{DEFAULT_MODEL, SummarizerConfig};

// Re-export input resolution
pub use input::{LocalFile, Upload, UploadedFile, resolve, resolve_payload, try_resolve};

// Re-export summarization types
#[cfg(feature = "hf-inference")]
pub use summarize::HuggingFaceSummarizer;
pub use summarize::{
    ExtractiveSummarizer, MAX_SUMMARY_LENGTH, MIN_SUMMARY_LENGTH, Summarizer, SummaryCandidate,
    SummaryParams, available_backends, create_summarizer, init_shared, summarize_text,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

pub use logging::setup_logging;
