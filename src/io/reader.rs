//! Reading uploads from local disk.
//!
//! Small files are read with a single `read_to_end`; large ones go through a
//! read-only memory map. Anything above [`MAX_UPLOAD_SIZE`] is refused before
//! a byte is read.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::IoError;
use memmap2::Mmap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Files at or above this size are memory mapped (1 MiB).
pub const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Largest upload accepted (1 GiB).
pub const MAX_UPLOAD_SIZE: u64 = 1024 * 1024 * 1024;

/// How a file's content is pulled into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Plain buffered read.
    Direct,
    /// Read-only memory map.
    Mapped,
}

impl ReadStrategy {
    /// Picks the strategy for a file of `size` bytes.
    #[must_use]
    pub const fn for_size(size: u64) -> Self {
        if size >= MMAP_THRESHOLD {
            Self::Mapped
        } else {
            Self::Direct
        }
    }
}

/// An open upload on disk.
///
/// # Examples
///
/// ```no_run
/// use text_summarizer::io::FileReader;
///
/// let reader = FileReader::open("article.txt").unwrap();
/// let bytes = reader.read_to_bytes().unwrap();
/// ```
#[derive(Debug)]
pub struct FileReader {
    file: File,
    size: u64,
    path: PathBuf,
}

impl FileReader {
    /// Opens a file and checks its size against [`MAX_UPLOAD_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] for a missing path and
    /// [`IoError::ReadFailed`] when the file cannot be opened or is too large.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let path = path.as_ref().to_path_buf();

        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IoError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => read_failed(&path, e),
        })?;
        let size = file.metadata().map_err(|e| read_failed(&path, e))?.len();

        if size > MAX_UPLOAD_SIZE {
            return Err(read_failed(
                &path,
                format!("file too large: {size} bytes (max: {MAX_UPLOAD_SIZE} bytes)"),
            ));
        }

        Ok(Self { file, size, path })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the strategy [`Self::read_to_bytes`] will use.
    #[must_use]
    pub const fn strategy(&self) -> ReadStrategy {
        ReadStrategy::for_size(self.size)
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ReadFailed`] or [`IoError::MmapFailed`].
    pub fn read_to_bytes(&self) -> Result<Vec<u8>, IoError> {
        let bytes = match self.strategy() {
            ReadStrategy::Mapped => {
                // Safety: the map is read-only and dropped before returning
                let mmap = unsafe { Mmap::map(&self.file) }.map_err(|e| IoError::MmapFailed {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })?;
                mmap.to_vec()
            }
            ReadStrategy::Direct => {
                let mut buffer = Vec::with_capacity(usize::try_from(self.size).unwrap_or(0));
                (&self.file)
                    .read_to_end(&mut buffer)
                    .map_err(|e| read_failed(&self.path, e))?;
                buffer
            }
        };

        tracing::debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            strategy = ?self.strategy(),
            "read upload from disk"
        );
        Ok(bytes)
    }
}

fn read_failed(path: &Path, reason: impl ToString) -> IoError {
    IoError::ReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Opens and reads a file in one step.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, IoError> {
    FileReader::open(path)?.read_to_bytes()
}
