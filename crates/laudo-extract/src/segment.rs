//! Text segmentation into paragraph and sentence units.
//!
//! Paragraphs are the preferred classification unit; sentences are the
//! fallback when a document has no usable paragraph breaks (e.g. text
//! pasted out of a PDF viewer as one long line).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Paragraphs must be longer than this many characters to be kept.
pub const MIN_PARAGRAPH_CHARS: usize = 20;
/// Sentences must be longer than this many characters to be kept.
pub const MIN_SENTENCE_CHARS: usize = 30;

static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A contiguous piece of the source text with its position among the kept units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextUnit {
    pub index: usize,
    pub content: String,
}

/// Both candidate partitionings of one document.
#[derive(Debug, Clone, Default)]
pub struct Segments {
    pub paragraphs: Vec<TextUnit>,
    pub sentences: Vec<TextUnit>,
}

/// Segment text into paragraphs and sentences in one call.
pub fn segment(text: &str) -> Segments {
    Segments {
        paragraphs: split_paragraphs(text),
        sentences: split_sentences(text),
    }
}

/// Collapse every whitespace run to a single space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Length in characters, not bytes; Portuguese text is full of accents.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split on blank-line boundaries.
pub fn split_paragraphs(text: &str) -> Vec<TextUnit> {
    BLANK_LINE_RE
        .split(text)
        .map(normalize_whitespace)
        .filter(|p| char_len(p) > MIN_PARAGRAPH_CHARS)
        .enumerate()
        .map(|(index, content)| TextUnit { index, content })
        .collect()
}

/// Split whitespace-normalized text after `.`, `!` or `?` followed by whitespace.
///
/// The terminal punctuation stays attached to its sentence and counts toward
/// its length, so 30 letters plus a full stop clear `MIN_SENTENCE_CHARS`.
pub fn split_sentences(text: &str) -> Vec<TextUnit> {
    let normalized = normalize_whitespace(text);
    let bytes = normalized.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'.' || b == b'!' || b == b'?')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            pieces.push(normalized[start..=i].trim());
            start = i + 1;
        }
    }
    pieces.push(normalized[start..].trim());

    pieces
        .into_iter()
        .filter(|s| char_len(s) > MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(index, s)| TextUnit {
            index,
            content: s.to_string(),
        })
        .collect()
}
