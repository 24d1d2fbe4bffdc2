//! Frequency-based extractive summarizer.
//!
//! Offline, deterministic stand-in for the abstractive model. It picks the
//! most representative sentences instead of generating new ones, so its
//! output is only as good as the input's own sentences.

use crate::error::BackendError;
use crate::io::{collapse_whitespace, sentences, truncate_words, word_count};
use crate::summarize::{Summarizer, SummaryCandidate, SummaryParams};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Words shorter than this carry no weight in sentence scoring.
const MIN_SCORED_WORD_LEN: usize = 3;

/// Extractive summarizer based on normalised word frequency.
///
/// Sentences are scored by the average frequency of their words across the
/// whole text. The top sentences are taken until `min_length` words are
/// reached, emitted in their original order, and clipped to `max_length`
/// words. Repeated sentences are considered once.
///
/// Input shorter than `min_length` words is returned whole, so a single
/// clean sentence comes back unchanged. Unlike the abstractive model, this
/// backend never guarantees output that differs from its input.
///
/// # Examples
///
/// ```
/// use text_summarizer::summarize::{ExtractiveSummarizer, Summarizer, SummaryParams};
///
/// let text = "Rust is fast. Rust is fast. Rust is memory safe.";
/// let summarizer = ExtractiveSummarizer::new();
/// let summary = &summarizer.summarize(text, &SummaryParams::default()).unwrap()[0];
/// assert_eq!(summary.summary_text, "Rust is fast. Rust is memory safe.");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractiveSummarizer;

/// A candidate sentence with its position in the source text.
struct ScoredSentence<'a> {
    index: usize,
    text: &'a str,
    score: f64,
}

impl ExtractiveSummarizer {
    /// Creates a new extractive summarizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn scored_words(sentence: &str) -> impl Iterator<Item = String> + '_ {
        sentence
            .unicode_words()
            .filter(|w| w.chars().count() >= MIN_SCORED_WORD_LEN)
            .map(str::to_lowercase)
    }

    /// Counts scored words over all unique sentences.
    fn frequencies(unique: &[(usize, &str)]) -> HashMap<String, usize> {
        let mut freq = HashMap::new();
        for (_, sentence) in unique {
            for word in Self::scored_words(sentence) {
                *freq.entry(word).or_insert(0) += 1;
            }
        }
        freq
    }

    #[allow(clippy::cast_precision_loss)]
    fn score_sentences<'a>(unique: &[(usize, &'a str)]) -> Vec<ScoredSentence<'a>> {
        let freq = Self::frequencies(unique);
        let max_freq = freq.values().copied().max().unwrap_or(1).max(1) as f64;

        unique
            .par_iter()
            .map(|&(index, text)| {
                let (total, count) = Self::scored_words(text)
                    .fold((0.0, 0usize), |(total, count), word| {
                        let weight = freq.get(&word).copied().unwrap_or(0) as f64 / max_freq;
                        (total + weight, count + 1)
                    });
                let score = if count == 0 { 0.0 } else { total / count as f64 };
                ScoredSentence { index, text, score }
            })
            .collect()
    }

    /// Builds the summary text, or `None` when the text has no sentences.
    fn extract(text: &str, params: &SummaryParams) -> Option<String> {
        let mut seen = HashSet::new();
        let unique: Vec<(usize, &str)> = sentences(text)
            .into_iter()
            .filter(|s| seen.insert(*s))
            .enumerate()
            .collect();

        if unique.is_empty() {
            return None;
        }

        let mut ranked = Self::score_sentences(&unique);
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));

        let mut selected = Vec::new();
        let mut words = 0;
        for sentence in ranked {
            if words >= params.min_length && !selected.is_empty() {
                break;
            }
            words += word_count(sentence.text);
            selected.push(sentence);
        }
        selected.sort_by_key(|s| s.index);

        let joined = selected
            .iter()
            .map(|s| collapse_whitespace(s.text))
            .collect::<Vec<_>>()
            .join(" ");

        Some(truncate_words(&joined, params.max_length).to_string())
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn name(&self) -> &str {
        crate::config::BACKEND_EXTRACTIVE
    }

    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, BackendError> {
        let summary = Self::extract(text, params).ok_or(BackendError::EmptyInput)?;
        tracing::debug!(
            input_words = word_count(text),
            summary_words = word_count(&summary),
            "extractive summary generated"
        );
        Ok(vec![SummaryCandidate::new(summary)])
    }
}
