//! Article record model for harvested listing entries.

use serde::{Deserialize, Serialize};

/// One article as it appears on a category listing page
///
/// Records are built once per listing entry and emitted downstream; the
/// crawler never retains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Raw preprint identifier, e.g. "2501.00001"
    pub id: String,

    /// Title with whitespace collapsed to single spaces
    pub title: String,

    /// Author names in listing order, individually trimmed
    pub authors: Vec<String>,

    /// Canonical abstract-page link as found in the listing (not absolutized)
    pub url: String,
}

impl ArticleRecord {
    /// Create a record, normalizing the title
    pub fn new(
        id: impl Into<String>,
        title: &str,
        authors: Vec<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: normalize_title(title),
            authors,
            url: url.into(),
        }
    }

    /// A record is emittable only when identifier, title, and authors are all present
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.title.is_empty() && !self.authors.is_empty()
    }
}

/// Collapse embedded newlines and redundant whitespace into single spaces.
///
/// Idempotent: normalizing an already-normalized title yields the same string.
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
