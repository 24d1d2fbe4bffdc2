//! I/O utilities for the summarizer.
//!
//! Provides file reading with memory mapping support for uploads that
//! live on disk, along with Unicode text helpers.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, MAX_UPLOAD_SIZE, MMAP_THRESHOLD, ReadStrategy, read_bytes};
pub use unicode::{
    collapse_whitespace, is_blank, sentences, truncate_graphemes, truncate_words, word_count,
};
