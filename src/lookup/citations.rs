//! Citation-count lookup against a citation-tracking page.

use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};

use crate::lookup::LookupError;
use crate::utils::HttpClient;

/// The tracking service blocks default client identities, so requests go
/// out with a mobile browser User-Agent.
const MOBILE_USER_AGENT: &str =
    "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";

/// Resolves a citation count from a citation-tracking page.
#[derive(Debug, Clone)]
pub struct CitationResolver {
    client: HttpClient,
}

impl CitationResolver {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetch `citation_url` and parse the citation count out of the page.
    ///
    /// A page without a count region resolves to 0.
    pub async fn resolve(&self, citation_url: &str) -> Result<u32, LookupError> {
        let response = self
            .client
            .get(citation_url)
            .header(USER_AGENT, MOBILE_USER_AGENT)
            .send()
            .await?;

        let body = response.text().await?;
        Ok(parse_citation_count(&body))
    }
}

/// Parse the first `span.num-items` region, e.g. `(42)` -> 42.
///
/// Absent or malformed regions resolve to 0; malformed ones are logged.
fn parse_citation_count(html: &str) -> u32 {
    let document = Html::parse_document(html);
    let selector = Selector::parse("span.num-items").expect("valid selector");

    let Some(span) = document.select(&selector).next() else {
        return 0;
    };

    let raw = span.text().collect::<String>();
    let digits = raw.trim().trim_matches(|c| c == '(' || c == ')');
    match digits.parse() {
        Ok(count) => count,
        Err(_) => {
            tracing::warn!(raw = raw.trim(), "unparseable citation count region");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        let html = r#"<html><body><span class="num-items">(42)</span></body></html>"#;
        assert_eq!(parse_citation_count(html), 42);
    }

    #[test]
    fn test_parse_count_without_parens() {
        let html = r#"<span class="num-items">7</span>"#;
        assert_eq!(parse_citation_count(html), 7);
    }

    #[test]
    fn test_missing_region_is_zero() {
        assert_eq!(parse_citation_count("<html><body>nothing</body></html>"), 0);
    }

    #[test]
    fn test_malformed_region_is_zero() {
        let html = r#"<span class="num-items">(many)</span>"#;
        assert_eq!(parse_citation_count(html), 0);
    }

    #[test]
    fn test_first_region_wins() {
        let html = concat!(
            r#"<span class="num-items">(3)</span>"#,
            r#"<span class="num-items">(9)</span>"#,
        );
        assert_eq!(parse_citation_count(html), 3);
    }
}
