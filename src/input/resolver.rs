//! Input resolution.
//!
//! Chooses the single text payload to summarize from direct text and an
//! optional upload, then hands it to the summarization invoker. An upload
//! always takes precedence over direct text.

use crate::error::{InputError, Result};
use crate::input::UploadedFile;
use crate::io::is_blank;
use crate::summarize::{Summarizer, summarize_text, try_summarize_with};

/// Required suffix for uploaded files. Matched case-sensitively.
pub const SUPPORTED_SUFFIX: &str = ".txt";

/// Reads, decodes and validates an upload.
fn read_upload(file: &mut dyn UploadedFile) -> std::result::Result<String, InputError> {
    if !file.name().ends_with(SUPPORTED_SUFFIX) {
        return Err(InputError::UnsupportedFormat);
    }

    let bytes = file.read_all()?;
    let content = String::from_utf8(bytes)?;

    if is_blank(&content) {
        return Err(InputError::EmptyFile);
    }

    Ok(content)
}

/// Resolves the text payload without summarizing it.
///
/// Consumes the upload's content when one is given.
///
/// # Errors
///
/// Returns the [`InputError`] describing why no payload could be resolved.
pub fn resolve_payload(input_text: &str, file: Option<&mut dyn UploadedFile>) -> Result<String> {
    let payload = match file {
        Some(file) => {
            let name = file.name().to_string();
            read_upload(file)
                .inspect(|content| tracing::debug!(%name, bytes = content.len(), "resolved upload"))
                .inspect_err(|e| tracing::debug!(%name, error = %e, "rejected upload"))?
        }
        None => {
            if is_blank(input_text) {
                return Err(InputError::NoInput.into());
            }
            tracing::debug!(bytes = input_text.len(), "resolved direct text");
            input_text.to_string()
        }
    };

    Ok(payload)
}

/// Resolves the payload and summarizes it with the given summarizer.
///
/// # Errors
///
/// Returns an [`InputError`] or [`crate::error::SummarizeError`] wrapped in
/// [`crate::Error`].
pub fn try_resolve(
    input_text: &str,
    file: Option<&mut dyn UploadedFile>,
    summarizer: &dyn Summarizer,
) -> Result<String> {
    let payload = resolve_payload(input_text, file)?;
    try_summarize_with(summarizer, &payload)
}

/// Resolves and summarizes with the given summarizer, returning the summary
/// or the error message.
pub fn resolve_with(
    input_text: &str,
    file: Option<&mut dyn UploadedFile>,
    summarizer: &dyn Summarizer,
) -> String {
    try_resolve(input_text, file, summarizer).unwrap_or_else(|e| e.to_string())
}

/// Resolves and summarizes with the process-wide summarizer.
///
/// This is the entry point for presentation layers: the result is either
/// the summary or a message starting with `Error`.
///
/// # Examples
///
/// ```
/// use text_summarizer::input::{Upload, resolve};
///
/// assert_eq!(resolve("", None), "Error: No text provided for summarization.");
///
/// let mut pdf = Upload::from_bytes("document.pdf", b"...".to_vec());
/// assert_eq!(
///     resolve("", Some(&mut pdf)),
///     "Error: Unsupported file format. Please upload a .txt file."
/// );
/// ```
pub fn resolve(input_text: &str, file: Option<&mut dyn UploadedFile>) -> String {
    match resolve_payload(input_text, file) {
        Ok(payload) => summarize_text(&payload),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Upload;
    use crate::summarize::ExtractiveSummarizer;
    use std::io::{self, Read};

    /// Reader that fails on first use.
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "upload interrupted"))
        }
    }

    fn extractive(input_text: &str, file: Option<&mut dyn UploadedFile>) -> String {
        resolve_with(input_text, file, &ExtractiveSummarizer::new())
    }

    #[test]
    fn test_no_input() {
        assert_eq!(extractive("", None), "Error: No text provided for summarization.");
        assert_eq!(
            extractive(" \n\t ", None),
            "Error: No text provided for summarization."
        );
    }

    #[test]
    fn test_plain_text() {
        let input = "Ceci est un long texte qui doit être résumé. ".repeat(20);
        let result = extractive(&input, None);
        assert!(!result.contains("Error"));
        assert_ne!(result, input);
    }

    #[test]
    fn test_unsupported_format() {
        let mut file = Upload::from_bytes("document.pdf", "Ceci est le contenu du fichier");
        assert_eq!(
            extractive("", Some(&mut file)),
            "Error: Unsupported file format. Please upload a .txt file."
        );
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let mut file = Upload::from_bytes("NOTES.TXT", "Some content here.");
        assert_eq!(
            extractive("", Some(&mut file)),
            "Error: Unsupported file format. Please upload a .txt file."
        );
    }

    #[test]
    fn test_format_checked_before_read() {
        let mut file = Upload::new("broken.pdf", BrokenReader);
        assert_eq!(
            extractive("", Some(&mut file)),
            "Error: Unsupported file format. Please upload a .txt file."
        );
    }

    #[test]
    fn test_empty_file() {
        let mut file = Upload::from_bytes("empty.txt", Vec::new());
        assert_eq!(extractive("", Some(&mut file)), "Error: Uploaded file is empty.");

        let mut file = Upload::from_bytes("blank.txt", "  \n\n  ");
        assert_eq!(extractive("", Some(&mut file)), "Error: Uploaded file is empty.");
    }

    #[test]
    fn test_valid_file() {
        let content = "Ceci est un texte à résumer. ".repeat(20);
        let mut file = Upload::from_bytes("texte.txt", content.clone());
        let result = extractive("", Some(&mut file));
        assert!(!result.contains("Error"));
        assert_ne!(result, content);
    }

    #[test]
    fn test_file_takes_precedence_over_text() {
        let mut file = Upload::from_bytes("empty.txt", "");
        assert_eq!(
            extractive("Plenty of direct text here.", Some(&mut file)),
            "Error: Uploaded file is empty."
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = Upload::from_bytes("latin1.txt", vec![0x63, 0x61, 0x66, 0xe9]);
        let result = extractive("", Some(&mut file));
        assert!(result.starts_with("Error reading file: invalid UTF-8"));
    }

    #[test]
    fn test_read_failure() {
        let mut file = Upload::new("stream.txt", BrokenReader);
        assert_eq!(
            extractive("", Some(&mut file)),
            "Error reading file: upload interrupted"
        );
    }

    #[test]
    fn test_payload_untrimmed() {
        let mut file = Upload::from_bytes("pad.txt", "\n  body text  \n");
        let payload = resolve_payload("", Some(&mut file)).unwrap();
        assert_eq!(payload, "\n  body text  \n");

        assert_eq!(resolve_payload("  direct  ", None).unwrap(), "  direct  ");
    }

    #[test]
    fn test_resolve_summarizes_with_shared_model() {
        // Another test may have installed it already
        let _ = crate::summarize::init_shared(
            &crate::config::SummarizerConfig::default().with_backend("extractive"),
        );

        let input = "The river flooded the valley. Crews rebuilt the bridge. \
                     The river flooded the valley. Schools reopened on Monday. "
            .repeat(5);
        let result = resolve(&input, None);
        assert!(!result.contains("Error"));
        assert_ne!(result, input);

        let mut file = Upload::from_bytes("report.txt", input.clone());
        let result = resolve("", Some(&mut file));
        assert!(!result.contains("Error"));
        assert_ne!(result, input);
    }

    #[test]
    fn test_resolve_validation_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(resolve("", None), "Error: No text provided for summarization.");
            let mut file = Upload::from_bytes("empty.txt", "");
            assert_eq!(resolve("", Some(&mut file)), "Error: Uploaded file is empty.");
        }
    }
}
