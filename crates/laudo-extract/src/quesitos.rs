//! Parser for numbered questionnaire items ("quesitos") pasted as free text.
//!
//! Court questionnaires arrive in every shape: `1.`, `1)`, `1 -`, `1º)`,
//! `Quesito 3:`, `Quesito nº 4 -`. A line that opens with one of these
//! markers starts a new item; any other line continues the current item.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::segment::normalize_whitespace;

/// Item-start marker. After `Quesito N` the body may start with anything
/// once a separator or whitespace follows the number. After a bare number a
/// digit-initial body needs whitespace after the separator, so `3. 8 horas`
/// opens item 3 while `1.5 metros` on a continuation line does not.
static ITEM_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:(?i:quesito\s*(?:n[º°o]?\.?\s*)?)(?P<qnum>\d{1,3})\s*[º°]?(?:\s*[.)\-–:]+|\s+|$)(?P<qbody>.*)|(?P<num>\d{1,3})\s*(?:[º°]\s*[.)\-–:]*|[.)\-–:]+)(?P<body>(?:\s|[^\d\s]).*)?)$",
    )
    .unwrap()
});

/// One numbered questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quesito {
    pub number: u32,
    pub text: String,
}

/// Parse numbered items in document order.
///
/// Text before the first marker is ignored, items whose body stays empty are
/// dropped, and repeated numbers are kept as separate items.
pub fn parse_quesitos(text: &str) -> Vec<Quesito> {
    let mut items: Vec<(u32, String)> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = ITEM_START_RE.captures(line) {
            let number = caps
                .name("qnum")
                .or_else(|| caps.name("num"))
                .and_then(|m| m.as_str().parse::<u32>().ok());
            if let Some(number) = number {
                let body = caps
                    .name("qbody")
                    .or_else(|| caps.name("body"))
                    .map(|m| m.as_str().trim())
                    .unwrap_or("");
                items.push((number, body.to_string()));
                continue;
            }
        }

        if let Some((_, body)) = items.last_mut() {
            if !line.trim().is_empty() {
                body.push(' ');
                body.push_str(line);
            }
        }
    }

    let quesitos: Vec<Quesito> = items
        .into_iter()
        .map(|(number, body)| Quesito {
            number,
            text: normalize_whitespace(&body),
        })
        .filter(|q| !q.text.is_empty())
        .collect();

    debug!("Parsed {} quesitos", quesitos.len());
    quesitos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[Quesito]) -> Vec<u32> {
        items.iter().map(|q| q.number).collect()
    }

    #[test]
    fn test_common_markers() {
        let text = "QUESITOS DO RECLAMANTE\n\
                    1. Qual a função exercida pelo reclamante?\n\
                    2) Havia exposição a ruído?\n\
                    3 - Os EPIs eram fornecidos?\n\
                    4º) Havia fiscalização do uso?\n\
                    5: O ambiente era periculoso?";
        let items = parse_quesitos(text);
        assert_eq!(numbers(&items), vec![1, 2, 3, 4, 5]);
        assert_eq!(items[0].text, "Qual a função exercida pelo reclamante?");
        assert_eq!(items[3].text, "Havia fiscalização do uso?");
    }

    #[test]
    fn test_quesito_prefix() {
        let text = "Quesito 1: Descreva o local de trabalho.\nQUESITO Nº 2 - Qual o agente nocivo?\nquesito 3 Houve perícia anterior?";
        let items = parse_quesitos(text);
        assert_eq!(numbers(&items), vec![1, 2, 3]);
        assert_eq!(items[1].text, "Qual o agente nocivo?");
        assert_eq!(items[2].text, "Houve perícia anterior?");
    }

    #[test]
    fn test_continuation_lines() {
        let text = "1. Qual a intensidade do ruído\n   medido no setor de prensas,\nem dB(A)?\n\n2. Havia pausas?";
        let items = parse_quesitos(text);
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].text,
            "Qual a intensidade do ruído medido no setor de prensas, em dB(A)?"
        );
    }

    #[test]
    fn test_marker_with_body_on_next_line() {
        let text = "Quesito 1:\nQual a jornada de trabalho?\nQuesito 2:";
        let items = parse_quesitos(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Qual a jornada de trabalho?");
    }

    #[test]
    fn test_numbers_inside_text_are_not_markers() {
        let text = "1. Qual a altura da plataforma?\n1.5 metros segundo a reclamada.\n2023 foi o ano do acidente.";
        let items = parse_quesitos(text);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].text,
            "Qual a altura da plataforma? 1.5 metros segundo a reclamada. 2023 foi o ano do acidente."
        );
    }

    #[test]
    fn test_bodies_starting_with_digits() {
        let text = "Quesito 1: Qual a função?\n\
                    Quesito 2: 15 dias de afastamento foram concedidos?\n\
                    3. 8 horas diárias de exposição ao ruído?\n\
                    quesito 4 30 minutos de intervalo eram respeitados?";
        let items = parse_quesitos(text);
        assert_eq!(numbers(&items), vec![1, 2, 3, 4]);
        assert_eq!(items[1].text, "15 dias de afastamento foram concedidos?");
        assert_eq!(items[2].text, "8 horas diárias de exposição ao ruído?");
        assert_eq!(items[3].text, "30 minutos de intervalo eram respeitados?");
    }

    #[test]
    fn test_glued_decimal_is_continuation() {
        let text = "2) Qual a distância até o tanque?\n2.5 metros conforme planta.";
        let items = parse_quesitos(text);
        assert_eq!(numbers(&items), vec![2]);
        assert_eq!(
            items[0].text,
            "Qual a distância até o tanque? 2.5 metros conforme planta."
        );
    }

    #[test]
    fn test_preamble_ignored_and_duplicates_kept() {
        let text = "Seguem os quesitos da reclamada:\n1. Primeira pergunta?\n1. Pergunta repetida?";
        let items = parse_quesitos(text);
        assert_eq!(numbers(&items), vec![1, 1]);
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_quesitos("").is_empty());
        assert!(parse_quesitos("  \n\n ").is_empty());
        assert!(parse_quesitos("Texto sem nenhuma numeração.").is_empty());
    }
}
