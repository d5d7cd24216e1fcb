//! The traversal driver for paginated category listings.

use crate::config::CrawlConfig;
use crate::crawler::{parser, CrawlError};
use crate::models::{ArticleRecord, Cursor};
use crate::utils::HttpClient;

/// Counters for one (category, year) branch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchStats {
    /// Listing pages processed (the sentinel page is not counted)
    pub pages: usize,
    /// Records emitted
    pub records: usize,
    /// Entries dropped for missing fields
    pub skipped: usize,
}

/// Aggregate counters for a whole crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Branches that ran to their sentinel
    pub completed_branches: usize,
    /// Branches aborted by a fetch failure
    pub failed_branches: usize,
    pub pages: usize,
    pub records: usize,
    pub skipped: usize,
}

/// Crawler over every (category, year) pair of a [`CrawlConfig`].
///
/// Each branch pages through the listing with strictly increasing offsets
/// until the endpoint returns the exhaustion sentinel. Only the sentinel
/// ends a branch: a page with zero entries still schedules the next page.
#[derive(Debug, Clone)]
pub struct ListingCrawler {
    client: HttpClient,
    config: CrawlConfig,
}

impl ListingCrawler {
    /// Create a crawler over an explicit crawl plan
    pub fn new(client: HttpClient, config: CrawlConfig) -> Self {
        Self { client, config }
    }

    /// The crawl plan this crawler was built with
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Traverse every configured (category, year) pair.
    ///
    /// A branch that fails is logged and counted; the remaining branches
    /// still run.
    pub async fn crawl<F>(&self, sink: &mut F) -> CrawlSummary
    where
        F: FnMut(ArticleRecord),
    {
        let mut summary = CrawlSummary::default();

        for category in &self.config.categories {
            for year in &self.config.years {
                match self.crawl_branch(category, year, sink).await {
                    Ok(stats) => {
                        summary.completed_branches += 1;
                        summary.pages += stats.pages;
                        summary.records += stats.records;
                        summary.skipped += stats.skipped;
                    }
                    Err(e) => {
                        tracing::error!(%category, %year, "branch aborted: {}", e);
                        summary.failed_branches += 1;
                    }
                }
            }
        }

        summary
    }

    /// Traverse one (category, year) branch until the sentinel appears.
    pub async fn crawl_branch<F>(
        &self,
        category: &str,
        year: &str,
        sink: &mut F,
    ) -> Result<BranchStats, CrawlError>
    where
        F: FnMut(ArticleRecord),
    {
        let mut cursor = Cursor::start(category, year);
        let mut stats = BranchStats::default();

        loop {
            let url = cursor.listing_url(&self.config.base_url, self.config.page_size);
            tracing::info!(%url, "fetching listing page");

            let response = self.client.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(CrawlError::Api(format!(
                    "{} returned status {}",
                    url,
                    response.status()
                )));
            }
            let body = response.text().await?;

            if parser::is_exhausted(&body) {
                tracing::info!(category, year, "no updates for this time period");
                return Ok(stats);
            }

            let parsed = parser::parse_listing(&body);
            stats.pages += 1;
            stats.skipped += parsed.skipped;
            if parsed.skipped > 0 {
                tracing::debug!(
                    category,
                    year,
                    offset = cursor.offset,
                    skipped = parsed.skipped,
                    "dropped entries with missing fields"
                );
            }

            for record in parsed.records {
                stats.records += 1;
                sink(record);
            }

            // Only the sentinel stops a branch, so a short or empty page
            // still schedules the next offset.
            cursor = cursor.advance(self.config.page_size);
        }
    }
}
