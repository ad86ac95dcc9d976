// Catalog fetch and in-memory cache.
// Builds the category list from two stages of contents listings and holds
// the result in a populate-once slot.

use tracing::{debug, info};

use crate::error::Result;
use crate::github::GitHubClient;

use super::label::derive_label;
use super::types::{BadgeFile, Category};

/// Top-level path listed to discover categories. Every badge exists under
/// each style directory; one is enough to enumerate the catalog.
pub const CATALOG_ROOT: &str = "assets/cozy";

/// Fetch the full catalog from the badge repository.
///
/// The top-level listing yields one category per directory entry, in listing
/// order. Each directory is then listed in turn and its `.svg` entries become
/// that category's files, also in listing order. Any failure aborts the whole
/// fetch; no partial catalog is ever returned.
pub async fn fetch_catalog(client: &mut GitHubClient) -> Result<Vec<Category>> {
    let entries = client.get_contents(CATALOG_ROOT).await?;

    let mut categories = Vec::new();
    for entry in entries {
        if !entry.is_dir() {
            continue;
        }

        let children = client.get_contents(&entry.path).await?;
        let files: Vec<BadgeFile> = children
            .into_iter()
            .filter(|child| child.name.ends_with(".svg"))
            .map(|child| BadgeFile {
                label: derive_label(&child.name),
                url: format!("{}/{}", entry.name, child.name),
                value: child.name,
            })
            .collect();

        debug!(category = %entry.name, files = files.len(), "listed category");
        categories.push(Category {
            label: derive_label(&entry.name),
            value: entry.name,
            files,
        });
    }

    info!(categories = categories.len(), "catalog fetched");
    Ok(categories)
}

/// In-memory catalog cache.
///
/// A single slot with no TTL and no invalidation: once populated it serves
/// the same snapshot for the life of the process unless `refresh` is called
/// explicitly. Created at the composition root and owned by the fetch
/// worker, so the check-then-populate sequence is never raced.
#[derive(Debug, Default)]
pub struct CatalogCache {
    slot: Option<Vec<Category>>,
}

impl CatalogCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached catalog without fetching.
    pub fn get(&self) -> Option<&[Category]> {
        self.slot.as_deref()
    }

    /// Whether the slot has been populated.
    pub fn is_populated(&self) -> bool {
        self.slot.is_some()
    }

    /// Return the cached catalog, fetching it first if the slot is empty.
    ///
    /// Once populated no remote call is ever made again through this path.
    /// A failed fetch leaves the slot empty so the next call retries.
    pub async fn get_or_refresh(&mut self, client: &mut GitHubClient) -> Result<&[Category]> {
        if self.slot.is_none() {
            let categories = fetch_catalog(client).await?;
            self.slot = Some(categories);
        }

        Ok(self.slot.get_or_insert_with(Vec::new))
    }

    /// Re-fetch the catalog and replace the slot.
    ///
    /// The slot is only replaced on success; on failure the previous
    /// snapshot (if any) stays in place.
    pub async fn refresh(&mut self, client: &mut GitHubClient) -> Result<&[Category]> {
        let categories = fetch_catalog(client).await?;
        Ok(self.slot.insert(categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cache_is_empty() {
        let cache = CatalogCache::new();
        assert!(!cache.is_populated());
        assert!(cache.get().is_none());
    }
}
