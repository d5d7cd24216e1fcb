//! Utility modules supporting the harvester.
//!
//! - [`HttpClient`]: shared HTTP client with timeouts and a user agent
//! - [`extract_text`]: extract text content from PDF files, page by page
//! - [`PdfExtractError`]: errors that can occur during PDF extraction

mod http;
mod pdf;

pub use http::HttpClient;
pub use pdf::{extract_text, PdfExtractError};
