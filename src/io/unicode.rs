//! Unicode utilities for text processing.
//!
//! Sentence and word segmentation follow UAX #29 so that non-English input
//! is split the same way as English.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// Returns true if the text is empty after trimming Unicode whitespace.
///
/// # Examples
///
/// ```
/// use text_summarizer::io::is_blank;
///
/// assert!(is_blank(" \n\t\u{3000}"));
/// assert!(!is_blank("  a "));
/// ```
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Splits text into trimmed, non-empty sentences.
#[must_use]
pub fn sentences(s: &str) -> Vec<&str> {
    s.unicode_sentences()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Collapses every run of whitespace into a single space.
///
/// # Examples
///
/// ```
/// use text_summarizer::io::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("line one\n  line two"), "line one line two");
/// ```
#[must_use]
#[allow(clippy::expect_used)]
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    WHITESPACE_RUN
        .get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
        .replace_all(s, " ")
}

/// Counts the words in a string.
#[must_use]
pub fn word_count(s: &str) -> usize {
    s.unicode_words().count()
}

/// Truncates a string after its `max_words`-th word.
///
/// Punctuation between words is kept; trailing text after the last kept
/// word is dropped.
///
/// # Examples
///
/// ```
/// use text_summarizer::io::truncate_words;
///
/// assert_eq!(truncate_words("one, two, three", 2), "one, two");
/// assert_eq!(truncate_words("one two", 5), "one two");
/// ```
#[must_use]
pub fn truncate_words(s: &str, max_words: usize) -> &str {
    if max_words == 0 {
        return "";
    }

    s.split_word_bound_indices()
        .filter(|(_, token)| token.chars().any(char::is_alphanumeric))
        .nth(max_words - 1)
        .map_or(s, |(offset, token)| &s[..offset + token.len()])
}

/// Truncates a string at a grapheme cluster boundary.
///
/// # Returns
///
/// A string slice containing at most `max_graphemes` grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max_graphemes: usize) -> &str {
    let mut end_byte = 0;

    for (count, grapheme) in s.graphemes(true).enumerate() {
        if count >= max_graphemes {
            break;
        }
        end_byte += grapheme.len();
    }

    &s[..end_byte]
}
