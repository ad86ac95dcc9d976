// Catalog module.
// Fetches, labels, and caches the badge catalog, and builds image URLs and
// embed snippets from it.

pub mod badge;
pub mod cache;
pub mod label;
pub mod types;

pub use badge::{ASSET_BASE, BadgeStyle, badge_url, html_snippet, markdown_snippet};
pub use cache::{CATALOG_ROOT, CatalogCache, fetch_catalog};
pub use label::derive_label;
pub use types::{BadgeFile, Category};
