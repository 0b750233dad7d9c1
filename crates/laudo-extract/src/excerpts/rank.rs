//! Deduplication, length floor, ranking and truncation of candidates.

use std::collections::HashSet;

use super::category::KeywordSet;
use super::classify::required_match_count;
use crate::segment::char_len;

/// Most excerpts kept per category.
pub const MAX_EXCERPTS: usize = 5;
/// Excerpts must be longer than this many characters.
pub const MIN_EXCERPT_CHARS: usize = 50;

/// Rank candidates that already passed classification.
///
/// Order of operations matters: duplicates are removed before sorting so the
/// first occurrence keeps its position for tie-breaking, and the sort is
/// stable so equal match counts stay in document order.
pub fn rank_candidates<'a, I>(candidates: I, set: &KeywordSet) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut scored: Vec<(usize, &str)> = candidates
        .into_iter()
        .filter(|c| seen.insert(*c))
        .filter(|c| char_len(c) > MIN_EXCERPT_CHARS)
        .map(|c| (required_match_count(c, set), c))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(MAX_EXCERPTS)
        .map(|(_, c)| c.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> KeywordSet {
        KeywordSet {
            required: vec!["ruído".into(), "calor".into(), "poeira".into()],
            excluded: vec![],
        }
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let a = "Exposição a ruído contínuo durante toda a jornada de trabalho diária.";
        let b = "Exposição a calor radiante de fornos sem pausas para recuperação térmica.";
        let ranked = rank_candidates([a, b, a], &set());
        assert_eq!(ranked, vec![a, b]);
    }

    #[test]
    fn test_length_floor() {
        let short = "Ruído e calor no setor.";
        let exact = "x".repeat(45) + "ruído"; // exactly 50 chars
        let long = "Ruído intenso registrado na medição do setor de caldeiraria pesada.";
        let ranked = rank_candidates([short, exact.as_str(), long], &set());
        assert_eq!(ranked, vec![long]);
    }

    #[test]
    fn test_sort_by_match_count_is_stable() {
        let one_a = "Primeira menção isolada de ruído na área de produção da empresa.";
        let two = "Ruído e calor simultâneos na linha de montagem durante todo o turno.";
        let one_b = "Segunda menção isolada de poeira na área de ensacamento da fábrica.";
        let three = "Ruído, calor e poeira foram constatados em conjunto na inspeção local.";
        let ranked = rank_candidates([one_a, two, one_b, three], &set());
        assert_eq!(ranked, vec![three, two, one_a, one_b]);
    }

    #[test]
    fn test_cap_of_five() {
        let candidates: Vec<String> = (0..8)
            .map(|i| format!("Trecho número {} descrevendo exposição a ruído ocupacional contínuo.", i))
            .collect();
        let ranked = rank_candidates(candidates.iter().map(String::as_str), &set());
        assert_eq!(ranked.len(), MAX_EXCERPTS);
        assert_eq!(ranked[0], candidates[0]);
        assert_eq!(ranked[4], candidates[4]);
    }

    #[test]
    fn test_empty_input() {
        let ranked = rank_candidates(std::iter::empty::<&str>(), &set());
        assert!(ranked.is_empty());
    }
}
