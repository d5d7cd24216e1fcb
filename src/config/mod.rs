//! Configuration management.
//!
//! The crawl plan (categories, years, page size, listing base URL) is an
//! explicit value handed to the crawler at construction. Values come from
//! compiled-in defaults, an optional TOML file, and `PREPRINT_HARVESTER_*`
//! environment overrides, in that order.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Crawl plan for the listing traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Base URL of the listing endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Categories to traverse
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Years to traverse, newest first
    #[serde(default = "default_years")]
    pub years: Vec<String>,

    /// Entries requested per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            categories: default_categories(),
            years: default_years(),
            page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "https://export.arxiv.org".to_string()
}

fn default_categories() -> Vec<String> {
    ["cs.AI", "cs.CL", "cs.CV", "cs.LG", "cs.MA"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_years() -> Vec<String> {
    vec!["2025".to_string()]
}

fn default_page_size() -> usize {
    2000
}

/// Load configuration from a file, with environment overrides applied on top
pub fn load_config(path: &PathBuf) -> Result<CrawlConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PREPRINT_HARVESTER"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the working directory, then the user config dir
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("preprint-harvester.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("preprint-harvester").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CrawlConfig::default();
        assert_eq!(config.base_url, "https://export.arxiv.org");
        assert_eq!(config.page_size, 2000);
        assert_eq!(config.categories.len(), 5);
        assert!(config.categories.contains(&"cs.AI".to_string()));
        assert_eq!(config.years, vec!["2025".to_string()]);
    }

    #[test]
    fn test_load_config_partial_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "categories = [\"math.CO\"]\npage_size = 250").unwrap();

        let config = load_config(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.categories, vec!["math.CO".to_string()]);
        assert_eq!(config.page_size, 250);
        // untouched fields fall back to defaults
        assert_eq!(config.base_url, "https://export.arxiv.org");
    }
}
