//! Full-text resolution with HTML-to-PDF fallback.

use reqwest::StatusCode;
use std::io::Write;
use std::path::PathBuf;

use crate::lookup::LookupError;
use crate::models::FullText;
use crate::utils::{extract_text, HttpClient};

/// Resolves the full text of a preprint from its structured-markup URL.
///
/// The HTML page is probed first; a 404 falls back to the PDF variant,
/// which is downloaded to a scoped temporary file, extracted, and removed
/// before the call returns. Any other response returns its body verbatim.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: HttpClient,
    temp_dir: PathBuf,
}

impl DocumentFetcher {
    /// Create a fetcher writing fallback downloads to the system temp dir
    pub fn new(client: HttpClient) -> Self {
        Self::with_temp_dir(client, std::env::temp_dir())
    }

    /// Create a fetcher with an explicit directory for fallback downloads
    pub fn with_temp_dir(client: HttpClient, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            temp_dir: temp_dir.into(),
        }
    }

    /// Resolve full text for `structured_url`.
    ///
    /// No retries: a failed attempt at either stage is terminal for this call.
    pub async fn resolve(&self, structured_url: &str) -> Result<FullText, LookupError> {
        let response = self.client.get(structured_url).send().await?;

        if response.status() != StatusCode::NOT_FOUND {
            return Ok(FullText::Html(response.text().await?));
        }

        let pdf_url = derive_pdf_url(structured_url);
        tracing::debug!(%structured_url, %pdf_url, "structured page missing, trying PDF");

        let pdf_response = self.client.get(&pdf_url).send().await?;
        if !pdf_response.status().is_success() {
            return Err(LookupError::Unavailable(format!(
                "neither {} nor {} is available",
                structured_url, pdf_url
            )));
        }
        let bytes = pdf_response.bytes().await?;

        // NamedTempFile is removed on drop, so the artifact is gone even
        // when extraction fails partway through.
        let mut temp = tempfile::Builder::new()
            .prefix("preprint-")
            .suffix(".pdf")
            .tempfile_in(&self.temp_dir)?;
        temp.write_all(&bytes)?;
        temp.flush()?;

        let text = extract_text(temp.path())?;
        Ok(FullText::PdfText(text))
    }
}

/// Swap the structured-content path segment for the binary-content one
fn derive_pdf_url(structured_url: &str) -> String {
    structured_url.replace("/html/", "/pdf/")
}
