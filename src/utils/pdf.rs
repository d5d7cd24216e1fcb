//! PDF text extraction utilities.
//!
//! Text is pulled page by page with lopdf so pages come out in document
//! order. Files lopdf cannot parse are handed to the pdf-extract crate,
//! which trades page granularity for broader format coverage.

use lopdf::Document;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during PDF extraction
#[derive(Debug, Error)]
pub enum PdfExtractError {
    #[error("File not found or not a valid PDF: {0}")]
    InvalidFile(String),

    #[error("Failed to extract text from PDF: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract text from a PDF file.
///
/// Pages are visited in page order and their text concatenated. The
/// document handle is owned by this call and released on every exit path.
///
/// # Arguments
///
/// * `path` - Path to the PDF file
pub fn extract_text(path: &Path) -> Result<String, PdfExtractError> {
    if !path.exists() {
        return Err(PdfExtractError::InvalidFile(format!(
            "File not found: {}",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(PdfExtractError::InvalidFile(format!(
            "Not a file: {}",
            path.display()
        )));
    }

    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(
                "lopdf could not parse {}: {}, falling back to pdf-extract",
                path.display(),
                e
            );
            return pdf_extract::extract_text(path)
                .map_err(|e| PdfExtractError::ExtractionFailed(e.to_string()));
        }
    };

    let mut text = String::new();
    for (page_number, _) in doc.get_pages() {
        let page_text = doc.extract_text(&[page_number]).map_err(|e| {
            PdfExtractError::ExtractionFailed(format!("page {}: {}", page_number, e))
        })?;
        text.push_str(&page_text);
    }

    if text.trim().is_empty() {
        // Likely a scanned or image-only PDF
        tracing::debug!("Extracted empty text from PDF: {}", path.display());
    }

    Ok(text)
}
