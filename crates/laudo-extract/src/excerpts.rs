//! Topic-tagged excerpt extraction from defense documents.
//!
//! Pipeline: raw text → paragraphs/sentences → keyword gating per category →
//! dedup + rank → formatted block. Every call is independent and pure; the
//! only input besides the text is the read-only keyword tables.

pub mod category;
pub mod classify;
pub mod format;
pub mod rank;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use category::{Category, KeywordSet, KeywordTables, DEFAULT_TABLES};

use crate::segment::{self, TextUnit};

/// Ranked excerpts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub label: String,
    pub excerpts: Vec<String>,
}

/// Which partitioning produced a category's candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitKind {
    Paragraph,
    Sentence,
}

/// Excerpt extractor bound to one set of keyword tables.
#[derive(Debug, Clone, Default)]
pub struct ExcerptExtractor {
    tables: KeywordTables,
}

static DEFAULT_EXTRACTOR: Lazy<ExcerptExtractor> = Lazy::new(ExcerptExtractor::default);

impl ExcerptExtractor {
    pub fn new(tables: KeywordTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Classify `text` for each requested category, in request order.
    ///
    /// Repeated categories are ignored after their first occurrence. Every
    /// requested category yields a result, possibly with no excerpts.
    pub fn classify(&self, text: &str, categories: &[Category]) -> Vec<ClassificationResult> {
        let requested = dedup_categories(categories);
        if requested.is_empty() {
            return Vec::new();
        }

        let segments = segment::segment(text);
        debug!(
            "Segmented {} chars into {} paragraphs, {} sentences",
            text.len(),
            segments.paragraphs.len(),
            segments.sentences.len()
        );

        requested
            .into_iter()
            .map(|category| {
                let (kind, candidates) = self.candidates(&segments, category);
                let set = self.tables.for_category(category);
                let excerpts =
                    rank::rank_candidates(candidates.iter().map(|u| u.content.as_str()), set);
                debug!(
                    "Category {}: {} {:?} candidates, {} excerpts",
                    category,
                    candidates.len(),
                    kind,
                    excerpts.len()
                );
                ClassificationResult {
                    category,
                    label: category.label().to_string(),
                    excerpts,
                }
            })
            .collect()
    }

    /// Classify and render as a single text block; empty when nothing matched.
    pub fn extract(&self, text: &str, categories: &[Category]) -> String {
        format::format_block(&self.classify(text, categories))
    }

    /// Paragraphs that pass gating, or sentences when no paragraph does.
    fn candidates<'s>(
        &self,
        segments: &'s segment::Segments,
        category: Category,
    ) -> (UnitKind, Vec<&'s TextUnit>) {
        let passing = |units: &'s [TextUnit]| -> Vec<&'s TextUnit> {
            units
                .iter()
                .filter(|u| classify::is_relevant(&u.content, category, &self.tables))
                .collect()
        };

        let paragraphs = passing(segments.paragraphs.as_slice());
        if !paragraphs.is_empty() {
            return (UnitKind::Paragraph, paragraphs);
        }
        (UnitKind::Sentence, passing(segments.sentences.as_slice()))
    }
}

/// Extract excerpts with the built-in keyword tables.
pub fn extract_excerpts(text: &str, categories: &[Category]) -> String {
    DEFAULT_EXTRACTOR.extract(text, categories)
}

fn dedup_categories(categories: &[Category]) -> Vec<Category> {
    let mut requested = Vec::with_capacity(categories.len());
    for category in categories {
        if !requested.contains(category) {
            requested.push(*category);
        }
    }
    requested
}
