//! Rendering of ranked excerpts into the text block pasted into a report field.

use super::ClassificationResult;

/// Separator between category blocks.
pub const CATEGORY_SEPARATOR: &str = "\n\n---\n\n";

/// Header line for one category block.
pub fn header(label: &str) -> String {
    format!("Trechos extraídos (tipo: {})", label)
}

/// Header, blank line, then the excerpts separated by blank lines.
pub fn format_category(label: &str, excerpts: &[String]) -> String {
    format!("{}\n\n{}", header(label), excerpts.join("\n\n"))
}

/// Join every non-empty result in order; empty string when none matched.
pub fn format_block(results: &[ClassificationResult]) -> String {
    results
        .iter()
        .filter(|r| !r.excerpts.is_empty())
        .map(|r| format_category(&r.label, &r.excerpts))
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excerpts::Category;

    fn result(category: Category, excerpts: &[&str]) -> ClassificationResult {
        ClassificationResult {
            category,
            label: category.label().to_string(),
            excerpts: excerpts.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_category() {
        let block = format_category("insalubridade", &["Primeiro.".to_string(), "Segundo.".to_string()]);
        assert_eq!(
            block,
            "Trechos extraídos (tipo: insalubridade)\n\nPrimeiro.\n\nSegundo."
        );
    }

    #[test]
    fn test_format_block_skips_empty_categories() {
        let results = vec![
            result(Category::Insalubrity, &[]),
            result(Category::Periculosity, &["Trecho A."]),
            result(Category::WorkAccident, &["Trecho B."]),
        ];
        assert_eq!(
            format_block(&results),
            "Trechos extraídos (tipo: periculosidade)\n\nTrecho A.\n\n---\n\nTrechos extraídos (tipo: acidente de trabalho)\n\nTrecho B."
        );
    }

    #[test]
    fn test_format_block_all_empty() {
        let results = vec![result(Category::Insalubrity, &[])];
        assert_eq!(format_block(&results), "");
        assert_eq!(format_block(&[]), "");
    }
}
