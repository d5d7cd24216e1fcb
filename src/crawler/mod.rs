//! Listing traversal: the crawler that walks paginated category listings.
//!
//! A branch is the traversal of one (category, year) pair. Each branch
//! walks listing pages with strictly increasing offsets until the endpoint
//! reports the exhaustion sentinel. Entries missing required fields are
//! skipped and counted, never fatal.

mod listing;
mod parser;

pub use listing::{BranchStats, CrawlSummary, ListingCrawler};
pub use parser::{is_exhausted, parse_listing, ParsedListing};

/// Errors that can occur while crawling a listing branch
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Listing endpoint answered with a non-success status
    #[error("Listing endpoint error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for CrawlError {
    fn from(err: reqwest::Error) -> Self {
        CrawlError::Network(err.to_string())
    }
}
