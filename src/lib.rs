//! # Preprint Harvester
//!
//! A crawler for paginated arXiv category listings, with optional per-article
//! full-text and citation-count lookups.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (ArticleRecord, Cursor, FullText)
//! - [`crawler`]: Listing traversal and page parsing
//! - [`lookup`]: Full-text resolution with PDF fallback, citation counts
//! - [`utils`]: HTTP client and PDF text extraction
//! - [`config`]: Configuration management

pub mod config;
pub mod crawler;
pub mod lookup;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::ListingCrawler;
pub use lookup::{CitationResolver, DocumentFetcher};
pub use models::ArticleRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
