//! Summarization invoker.
//!
//! Calls a [`Summarizer`] with the fixed generation parameters and returns
//! the first candidate's text. Every backend fault, panics included, is
//! turned into [`SummarizeError::Failed`] here.

use crate::error::{BackendError, Result, SummarizeError};
use crate::io::is_blank;
use crate::summarize::{Summarizer, SummaryParams, shared};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    panic_info
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic_info.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Summarizes text with the given summarizer.
///
/// # Errors
///
/// Returns [`SummarizeError::EmptyText`] for blank text and
/// [`SummarizeError::Failed`] for any backend fault.
pub fn try_summarize_with(summarizer: &dyn Summarizer, text: &str) -> Result<String> {
    if is_blank(text) {
        return Err(SummarizeError::EmptyText.into());
    }

    let params = SummaryParams::default();

    // Backends may wrap native code that panics on inputs it cannot handle.
    let candidates = catch_unwind(AssertUnwindSafe(|| summarizer.summarize(text, &params)))
        .map_err(|panic_info| BackendError::Panicked(panic_message(panic_info.as_ref())))?
        .inspect_err(|e| {
            tracing::warn!(backend = summarizer.name(), error = %e, "summarization failed");
        })?;

    let summary = candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.summary_text)
        .ok_or(BackendError::NoCandidates)?;

    Ok(summary)
}

/// Summarizes text with the given summarizer, flattening errors into their
/// message.
pub fn summarize_with(summarizer: &dyn Summarizer, text: &str) -> String {
    try_summarize_with(summarizer, text).unwrap_or_else(|e| e.to_string())
}

/// Summarizes text with the process-wide summarizer.
///
/// Returns the summary, or the error message if the text is blank or the
/// model fails.
///
/// # Examples
///
/// ```
/// use text_summarizer::summarize::summarize_text;
///
/// assert_eq!(summarize_text("   "), "Error: Provided text is empty.");
/// ```
pub fn summarize_text(text: &str) -> String {
    if is_blank(text) {
        return SummarizeError::EmptyText.to_string();
    }

    summarize_looked_up(shared(), text)
}

/// Summarizes with a summarizer that may have failed to load.
fn summarize_looked_up(summarizer: Result<&dyn Summarizer>, text: &str) -> String {
    match summarizer {
        Ok(summarizer) => summarize_with(summarizer, text),
        Err(e) => SummarizeError::Failed {
            reason: e.to_string(),
        }
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::summarize::{ExtractiveSummarizer, SummaryCandidate};
    use std::sync::Mutex;

    type Outcome = fn() -> std::result::Result<Vec<SummaryCandidate>, BackendError>;

    /// Backend returning a fixed outcome and recording what it was given.
    struct StubSummarizer {
        outcome: Outcome,
        calls: Mutex<Vec<(String, SummaryParams)>>,
    }

    impl StubSummarizer {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Summarizer for StubSummarizer {
        fn name(&self) -> &str {
            "stub"
        }

        fn summarize(
            &self,
            text: &str,
            params: &SummaryParams,
        ) -> std::result::Result<Vec<SummaryCandidate>, BackendError> {
            self.calls.lock().unwrap().push((text.to_string(), *params));
            (self.outcome)()
        }
    }

    #[test]
    fn test_blank_text_never_reaches_backend() {
        let stub = StubSummarizer::new(|| Ok(vec![SummaryCandidate::new("x")]));
        assert_eq!(summarize_with(&stub, " \n\t "), "Error: Provided text is empty.");
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_candidate_wins() {
        let stub = StubSummarizer::new(|| {
            Ok(vec![
                SummaryCandidate::new("first"),
                SummaryCandidate::new("second"),
            ])
        });
        assert_eq!(summarize_with(&stub, "some text"), "first");

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "some text");
        assert_eq!(calls[0].1, SummaryParams::default());
    }

    #[test]
    fn test_text_passed_untrimmed() {
        let stub = StubSummarizer::new(|| Ok(vec![SummaryCandidate::new("s")]));
        summarize_with(&stub, "  padded  ");
        assert_eq!(stub.calls.lock().unwrap()[0].0, "  padded  ");
    }

    #[test]
    fn test_backend_fault() {
        let stub = StubSummarizer::new(|| {
            Err(BackendError::Api {
                status: 503,
                message: "Model is loading".to_string(),
            })
        });
        assert_eq!(
            summarize_with(&stub, "text"),
            "Error during summarization: API error: 503 - Model is loading"
        );
    }

    #[test]
    fn test_no_candidates() {
        let stub = StubSummarizer::new(|| Ok(Vec::new()));
        let err = try_summarize_with(&stub, "text").unwrap_err();
        assert!(matches!(
            err,
            Error::Summarize(SummarizeError::Failed { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Error during summarization: model returned no summary candidates"
        );
    }

    #[test]
    fn test_backend_panic_is_contained() {
        let stub = StubSummarizer::new(|| panic!("tensor shape mismatch"));
        assert_eq!(
            summarize_with(&stub, "text"),
            "Error during summarization: backend panic: tensor shape mismatch"
        );
    }

    #[test]
    fn test_extractive_backend() {
        let text = "Ceci est un texte à résumer. ".repeat(20);
        let summary = summarize_with(&ExtractiveSummarizer::new(), &text);
        assert!(!summary.contains("Error"));
        assert_ne!(summary, text);
    }

    #[test]
    fn test_model_load_failure_is_a_summarization_fault() {
        let missing = Err(Error::Config {
            message: "unknown summarizer backend: missing".to_string(),
        });
        assert_eq!(
            summarize_looked_up(missing, "Some text."),
            "Error during summarization: configuration error: unknown summarizer backend: missing"
        );
    }

    #[test]
    fn test_summarize_text_uses_shared() {
        let _ = crate::summarize::init_shared(
            &crate::config::SummarizerConfig::default().with_backend("extractive"),
        );
        let text = "Le conseil a voté le budget. Les habitants ont applaudi. ".repeat(10);
        let summary = summarize_text(&text);
        assert!(!summary.contains("Error"));
        assert_ne!(summary, text);
    }

    #[test]
    fn test_summarize_text_blank() {
        assert_eq!(summarize_text(""), "Error: Provided text is empty.");
        assert_eq!(summarize_text("   "), "Error: Provided text is empty.");
    }
}
