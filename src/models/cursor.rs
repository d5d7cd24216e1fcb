//! Traversal cursor for paginated category listings.

use serde::{Deserialize, Serialize};

/// Position in one (category, year) branch of the paginated listing.
///
/// Advancing never mutates in place; each page produces a successor cursor
/// with a strictly larger offset, so a branch can never revisit an offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub category: String,
    pub year: String,
    pub offset: usize,
}

impl Cursor {
    /// Cursor at the first page of a branch
    pub fn start(category: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            year: year.into(),
            offset: 0,
        }
    }

    /// Successor cursor for the next page
    pub fn advance(&self, page_size: usize) -> Self {
        Self {
            category: self.category.clone(),
            year: self.year.clone(),
            offset: self.offset + page_size,
        }
    }

    /// Render the listing-page URL for this position
    pub fn listing_url(&self, base_url: &str, page_size: usize) -> String {
        format!(
            "{}/list/{}/{}?skip={}&show={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&self.category),
            urlencoding::encode(&self.year),
            self.offset,
            page_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_increases_offset() {
        let start = Cursor::start("cs.AI", "2025");
        assert_eq!(start.offset, 0);

        let next = start.advance(2000);
        let after = next.advance(2000);
        assert_eq!(next.offset, 2000);
        assert_eq!(after.offset, 4000);
        assert_eq!(after.category, "cs.AI");
        assert_eq!(after.year, "2025");
    }

    #[test]
    fn test_listing_url() {
        let cursor = Cursor::start("cs.AI", "2025").advance(2000);
        assert_eq!(
            cursor.listing_url("https://export.arxiv.org", 2000),
            "https://export.arxiv.org/list/cs.AI/2025?skip=2000&show=2000"
        );
    }

    #[test]
    fn test_listing_url_trims_trailing_slash() {
        let cursor = Cursor::start("cs.LG", "2024");
        assert_eq!(
            cursor.listing_url("https://export.arxiv.org/", 500),
            "https://export.arxiv.org/list/cs.LG/2024?skip=0&show=500"
        );
    }
}
