//! Keyword gating for a single text unit.
//!
//! Matching is plain case-insensitive substring search, not whole-word:
//! "insalubre" also matches "insalubres", and "nr-15" matches "NR-15,".

use super::category::{Category, KeywordSet, KeywordTables};

/// Whether `content` is relevant to `category`.
///
/// Passes iff at least one required keyword is present and neither a global
/// exclusion nor a category exclusion is.
pub fn is_relevant(content: &str, category: Category, tables: &KeywordTables) -> bool {
    let lower = content.to_lowercase();
    let set = tables.for_category(category);

    set.required.iter().any(|kw| lower.contains(kw.as_str()))
        && !tables.global_excluded.iter().any(|kw| lower.contains(kw.as_str()))
        && !set.excluded.iter().any(|kw| lower.contains(kw.as_str()))
}

/// Number of distinct required keywords present; repeats count once.
pub fn required_match_count(content: &str, set: &KeywordSet) -> usize {
    let lower = content.to_lowercase();
    set.required
        .iter()
        .filter(|kw| lower.contains(kw.as_str()))
        .count()
}
