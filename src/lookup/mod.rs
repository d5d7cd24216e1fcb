//! Secondary lookups for a harvested article: full text and citation count.
//!
//! These run one article at a time against URLs taken from listing records;
//! neither is part of the listing traversal itself.

mod citations;
mod fulltext;

pub use citations::CitationResolver;
pub use fulltext::DocumentFetcher;

use crate::utils::PdfExtractError;

/// Errors that can occur during a full-text or citation lookup
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Neither the structured-markup page nor the PDF is available
    #[error("Document unavailable: {0}")]
    Unavailable(String),

    /// Text extraction from the downloaded PDF failed
    #[error("PDF extraction error: {0}")]
    Extract(#[from] PdfExtractError),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Network(err.to_string())
    }
}
