//! Uploaded file abstraction.
//!
//! The resolver only needs a file's name and one read of its bytes. The
//! caller keeps ownership; nothing here retains the content.

use crate::io::read_bytes;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

/// A caller-owned uploaded file.
pub trait UploadedFile {
    /// Returns the file name as provided by the uploader.
    fn name(&self) -> &str;

    /// Reads the entire content.
    ///
    /// The resolver calls this at most once per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be read.
    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

/// An upload backed by any reader.
///
/// # Examples
///
/// ```
/// use text_summarizer::input::{Upload, UploadedFile};
///
/// let mut upload = Upload::from_bytes("notes.txt", b"hello".to_vec());
/// assert_eq!(upload.name(), "notes.txt");
/// assert_eq!(upload.read_all().unwrap(), b"hello");
/// ```
#[derive(Debug)]
pub struct Upload<R> {
    name: String,
    reader: R,
}

impl<R: Read> Upload<R> {
    /// Creates an upload from a name and a reader.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl Upload<Cursor<Vec<u8>>> {
    /// Creates an in-memory upload.
    pub fn from_bytes(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::new(name, Cursor::new(content.into()))
    }
}

impl<R: Read> UploadedFile for Upload<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut content = Vec::new();
        self.reader.read_to_end(&mut content)?;
        Ok(content)
    }
}

/// An upload that lives on local disk.
///
/// Creating one touches nothing on disk; the file is opened by
/// [`UploadedFile::read_all`], so a missing file surfaces as a read fault.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    /// Creates an upload for the given path, named after its last component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
            .to_string();
        Self { path, name }
    }

    /// Returns the path on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UploadedFile for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        Ok(read_bytes(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_upload_from_bytes() {
        let mut upload = Upload::from_bytes("a.txt", "content");
        assert_eq!(upload.name(), "a.txt");
        assert_eq!(upload.read_all().unwrap(), b"content");
    }

    #[test]
    fn test_upload_consumes_reader() {
        let mut upload = Upload::new("a.txt", "once".as_bytes());
        assert_eq!(upload.read_all().unwrap(), b"once");
        assert!(upload.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_local_file_name() {
        let file = LocalFile::new("/some/dir/report.txt");
        assert_eq!(file.name(), "report.txt");
        assert_eq!(file.path(), Path::new("/some/dir/report.txt"));
    }

    #[test]
    fn test_local_file_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.txt");
        std::fs::write(&path, "on disk").unwrap();

        let mut file = LocalFile::new(&path);
        assert_eq!(file.read_all().unwrap(), b"on disk");
    }

    #[test]
    fn test_local_file_missing() {
        let mut file = LocalFile::new("/nonexistent/path/doc.txt");
        let err = file.read_all().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("no such file"));
    }
}
