//! Resolved full-text representation for a preprint.

use serde::{Deserialize, Serialize};

/// Full text resolved for a preprint, tagged with the representation it
/// came from. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullText {
    /// Raw body of the structured-markup (HTML) page
    Html(String),
    /// Text extracted from the PDF fallback
    PdfText(String),
}

impl FullText {
    /// The text content regardless of representation
    pub fn as_str(&self) -> &str {
        match self {
            FullText::Html(text) | FullText::PdfText(text) => text,
        }
    }

    /// Consume and return the text content
    pub fn into_string(self) -> String {
        match self {
            FullText::Html(text) | FullText::PdfText(text) => text,
        }
    }

    /// Whether this text came from the PDF fallback
    pub fn is_pdf(&self) -> bool {
        matches!(self, FullText::PdfText(_))
    }
}
