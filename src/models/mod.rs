//! Core data models for harvested articles and listing traversal.

mod article;
mod cursor;
mod fulltext;

pub use article::{normalize_title, ArticleRecord};
pub use cursor::Cursor;
pub use fulltext::FullText;
