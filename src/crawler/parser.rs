//! Listing-page parsing.
//!
//! Listing pages pair each `<dt>` (identifier and abstract link) with a
//! following `<dd>` (title and authors) inside `<dl id="articles">`. The
//! title is taken from the direct text children of the title div so the
//! "Title:" descriptor span is excluded.

use scraper::{ElementRef, Html, Selector};

use crate::models::ArticleRecord;

/// Literal phrase the endpoint returns when a branch is exhausted
pub(crate) const EXHAUSTED_SENTINEL: &str = "No updates for this time period.";

/// Whether a listing page body signals the end of a branch
pub fn is_exhausted(body: &str) -> bool {
    body.contains(EXHAUSTED_SENTINEL)
}

/// Outcome of parsing one listing page
#[derive(Debug, Default)]
pub struct ParsedListing {
    /// Complete records, in page order
    pub records: Vec<ArticleRecord>,
    /// Entries dropped for missing identifier, title, or authors
    pub skipped: usize,
}

struct ListingSelectors {
    articles: Selector,
    entry: Selector,
    abstract_link: Selector,
    title: Selector,
    authors: Selector,
}

impl ListingSelectors {
    fn new() -> Self {
        Self {
            articles: Selector::parse("dl#articles").expect("valid selector"),
            entry: Selector::parse("dt").expect("valid selector"),
            abstract_link: Selector::parse(r#"a[title="Abstract"]"#).expect("valid selector"),
            title: Selector::parse("div.list-title").expect("valid selector"),
            authors: Selector::parse("div.list-authors a").expect("valid selector"),
        }
    }
}

/// Extract article records from a listing page body.
///
/// Entries missing any required field are counted in
/// [`ParsedListing::skipped`] rather than surfaced as errors.
pub fn parse_listing(body: &str) -> ParsedListing {
    let document = Html::parse_document(body);
    let selectors = ListingSelectors::new();
    let mut parsed = ParsedListing::default();

    for articles in document.select(&selectors.articles) {
        for entry in articles.select(&selectors.entry) {
            match parse_entry(&entry, &selectors) {
                Some(record) => parsed.records.push(record),
                None => parsed.skipped += 1,
            }
        }
    }

    parsed
}

fn parse_entry(entry: &ElementRef<'_>, selectors: &ListingSelectors) -> Option<ArticleRecord> {
    let anchor = entry.select(&selectors.abstract_link).next()?;
    let id = anchor.text().collect::<String>().trim().to_string();
    let url = anchor.value().attr("href")?.trim().to_string();

    // Details live in the first dd sibling following the dt
    let details = entry
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "dd")?;

    let title_parts: Vec<String> = details
        .select(&selectors.title)
        .next()?
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim().to_string())
        .collect();
    let title = title_parts.join(" ");

    let authors: Vec<String> = details
        .select(&selectors.authors)
        .map(|author| author.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    let record = ArticleRecord::new(id, &title, authors, url);
    record.is_complete().then_some(record)
}
