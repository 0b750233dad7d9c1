//! Laudo Extract — excerpt classification, questionnaire parsing and
//! file-to-text conversion for expert-report drafting.

pub mod excerpts;
pub mod file;
pub mod quesitos;
pub mod segment;

pub use excerpts::{
    extract_excerpts, Category, ClassificationResult, ExcerptExtractor, KeywordSet,
    KeywordTables,
};
pub use file::{extract_text, FileType};
pub use quesitos::{parse_quesitos, Quesito};
pub use segment::TextUnit;
