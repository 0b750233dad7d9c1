//! Conversion of uploaded documents to plain text.
//!
//! This is the boundary in front of the excerpt pipeline: anything that
//! cannot become text fails here with `UnsupportedFormat` or
//! `ExtractionFailed`, so the pipeline itself only ever sees strings.

use std::path::Path;

use laudo_core::{Error, Result};
use tracing::{info, warn};

/// Supported file types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Pdf,
    Docx,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "md" | "csv" => Self::PlainText,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a file name.
    pub fn from_file_name(file_name: &str) -> Self {
        Self::from_extension(extension_of(file_name).as_str())
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Extract text content from an uploaded file's bytes.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String> {
    let extension = extension_of(file_name);
    info!("Extracting text from {} (type: {})", file_name, extension);

    match FileType::from_extension(&extension) {
        FileType::PlainText => String::from_utf8(data.to_vec())
            .map_err(|e| Error::ExtractionFailed(format!("invalid UTF-8 content: {}", e))),
        FileType::Pdf => extract_pdf_text(data),
        FileType::Docx => extract_docx_text(data),
        FileType::Unknown => {
            let shown = if extension.is_empty() {
                "(no extension)".to_string()
            } else {
                extension
            };
            Err(Error::UnsupportedFormat(shown))
        }
    }
}

/// PDFs without a text layer (scanned pages) come back blank and are
/// reported as failures rather than as an empty document.
fn extract_pdf_text(data: &[u8]) -> Result<String> {
    // pdf-extract panics on some malformed fonts and encodings.
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data))
        .map_err(|_| {
            warn!("PDF extraction panicked");
            Error::ExtractionFailed("failed to read PDF".into())
        })?
        .map_err(|e| {
            warn!("PDF extraction failed: {}", e);
            Error::ExtractionFailed(format!("failed to read PDF: {}", e))
        })?;

    if text.trim().is_empty() {
        warn!("PDF has no extractable text");
        return Err(Error::ExtractionFailed(
            "PDF has no extractable text layer".into(),
        ));
    }

    info!("PDF extraction successful: {} characters", text.len());
    Ok(text)
}

/// Paragraphs are joined with blank lines so the segmenter keeps them apart.
/// Each table row becomes one paragraph.
fn extract_docx_text(data: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(data).map_err(|e| {
        warn!("DOCX extraction failed: {}", e);
        Error::ExtractionFailed(format!("failed to read DOCX: {}", e))
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                push_non_blank(&mut paragraphs, paragraph_text(para))
            }
            docx_rs::DocumentChild::Table(table) => collect_table_rows(table, &mut paragraphs),
            _ => {}
        }
    }

    if paragraphs.is_empty() {
        warn!("DOCX has no extractable text");
        return Err(Error::ExtractionFailed("DOCX has no extractable text".into()));
    }

    let text = paragraphs.join("\n\n");
    info!("DOCX extraction successful: {} characters", text.len());
    Ok(text)
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| match pc {
            docx_rs::ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|rc| match rc {
                        docx_rs::RunChild::Text(t) => Some(t.text.as_str()),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

/// Cell texts of a row are joined with spaces; nested tables add their own rows.
fn collect_table_rows(table: &docx_rs::Table, out: &mut Vec<String>) {
    for docx_rs::TableChild::TableRow(row) in &table.rows {
        let mut cells: Vec<String> = Vec::new();
        let mut nested: Vec<&docx_rs::Table> = Vec::new();
        for docx_rs::TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => {
                        push_non_blank(&mut cells, paragraph_text(para))
                    }
                    docx_rs::TableCellContent::Table(inner) => nested.push(inner),
                    _ => {}
                }
            }
        }
        push_non_blank(out, cells.join(" "));
        for inner in nested {
            collect_table_rows(inner, out);
        }
    }
}

fn push_non_blank(out: &mut Vec<String>, text: String) {
    if !text.trim().is_empty() {
        out.push(text);
    }
}
