// Background catalog worker.
// Owns the GitHub client and the catalog cache on a spawned task, serving
// load and refresh commands from the UI over channels.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::catalog::{CatalogCache, Category};
use crate::github::GitHubClient;

/// Commands the UI sends to the catalog worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogCommand {
    /// Serve the cached catalog, fetching only if the cache is empty.
    Load,
    /// Re-fetch the catalog and replace the cache.
    Refresh,
}

/// Events the catalog worker sends back to the UI.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    Catalog(Vec<Category>),
    Failed(String),
}

/// Spawn the catalog worker task.
///
/// The worker takes sole ownership of the client and cache; because every
/// command runs to completion before the next is received, cache reads and
/// writes are never interleaved.
pub fn spawn_catalog_worker(
    client: GitHubClient,
    cache: CatalogCache,
) -> (UnboundedSender<CatalogCommand>, UnboundedReceiver<CatalogEvent>) {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<CatalogEvent>();

    tokio::spawn(async move {
        let mut client = client;
        let mut cache = cache;

        while let Some(command) = command_rx.recv().await {
            let result = match command {
                CatalogCommand::Load => cache.get_or_refresh(&mut client).await,
                CatalogCommand::Refresh => cache.refresh(&mut client).await,
            };

            let event = match result {
                Ok(categories) => CatalogEvent::Catalog(categories.to_vec()),
                Err(e) => {
                    warn!(error = %e, "catalog fetch failed");
                    CatalogEvent::Failed(e.to_string())
                }
            };

            if event_tx.send(event).is_err() {
                break;
            }
        }
    });

    (command_tx, event_rx)
}
