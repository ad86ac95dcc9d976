// Integration tests for the catalog fetch and cache path.
// Drives a real GitHubClient against a local mock server.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use badgedex::catalog::{CatalogCache, fetch_catalog};
use badgedex::error::BadgedexError;
use badgedex::github::GitHubClient;

const ROOT_PATH: &str = "/repos/intergrav/devins-badges/contents/assets/cozy";

fn client_for(server: &ServerGuard) -> GitHubClient {
    GitHubClient::with_base_url("test-token", server.url()).unwrap()
}

fn root_listing() -> serde_json::Value {
    json!([
        {
            "name": "discord-plugin",
            "path": "assets/cozy/discord-plugin",
            "type": "dir"
        },
        {
            "name": "README.md",
            "path": "assets/cozy/README.md",
            "type": "file"
        },
        {
            "name": "made-with",
            "path": "assets/cozy/made-with",
            "type": "dir"
        }
    ])
}

fn discord_plugin_listing() -> serde_json::Value {
    json!([
        {
            "name": "online_vector.svg",
            "path": "assets/cozy/discord-plugin/online_vector.svg",
            "type": "file"
        },
        {
            "name": "notes.txt",
            "path": "assets/cozy/discord-plugin/notes.txt",
            "type": "file"
        },
        {
            "name": "offline_vector.svg",
            "path": "assets/cozy/discord-plugin/offline_vector.svg",
            "type": "file"
        }
    ])
}

fn made_with_listing() -> serde_json::Value {
    json!([
        {
            "name": "made-with-rust_vector.svg",
            "path": "assets/cozy/made-with/made-with-rust_vector.svg",
            "type": "file"
        }
    ])
}

/// Mount success mocks for the full two-stage listing, each expecting a
/// single hit.
async fn mount_catalog_mocks(server: &mut ServerGuard) -> Vec<mockito::Mock> {
    let root = server
        .mock("GET", ROOT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(root_listing().to_string())
        .expect(1)
        .create_async()
        .await;

    let discord = server
        .mock("GET", "/repos/intergrav/devins-badges/contents/assets/cozy/discord-plugin")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(discord_plugin_listing().to_string())
        .expect(1)
        .create_async()
        .await;

    let made_with = server
        .mock("GET", "/repos/intergrav/devins-badges/contents/assets/cozy/made-with")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(made_with_listing().to_string())
        .expect(1)
        .create_async()
        .await;

    vec![root, discord, made_with]
}

#[tokio::test]
async fn fetch_filters_dirs_and_svgs_preserving_order() {
    let mut server = Server::new_async().await;
    let mocks = mount_catalog_mocks(&mut server).await;
    let mut client = client_for(&server);

    let categories = fetch_catalog(&mut client).await.unwrap();

    // Only dir entries become categories, in top-level listing order.
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].value, "discord-plugin");
    assert_eq!(categories[0].label, "Discord Plugin");
    assert_eq!(categories[1].value, "made-with");
    assert_eq!(categories[1].label, "Made With");

    // Only .svg names become files, in directory listing order.
    let files = &categories[0].files;
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].value, "online_vector.svg");
    assert_eq!(files[0].label, "Online");
    assert_eq!(files[0].url, "discord-plugin/online_vector.svg");
    assert_eq!(files[1].value, "offline_vector.svg");

    assert_eq!(categories[1].files[0].label, "Made With Rust");

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn get_or_refresh_fetches_once_per_process() {
    let mut server = Server::new_async().await;
    let mocks = mount_catalog_mocks(&mut server).await;
    let mut client = client_for(&server);
    let mut cache = CatalogCache::new();

    let first = cache.get_or_refresh(&mut client).await.unwrap().to_vec();
    assert!(cache.is_populated());

    // Second call serves the cached snapshot; the expect(1) mocks verify no
    // further remote calls happen.
    let second = cache.get_or_refresh(&mut client).await.unwrap().to_vec();
    assert_eq!(first, second);

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn failed_fetch_leaves_slot_empty_and_next_call_retries() {
    let mut server = Server::new_async().await;
    let unauthorized = server
        .mock("GET", ROOT_PATH)
        .with_status(401)
        .with_body(json!({"message": "Bad credentials"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let mut client = client_for(&server);
    let mut cache = CatalogCache::new();

    let err = cache.get_or_refresh(&mut client).await.unwrap_err();
    assert!(matches!(err, BadgedexError::Unauthorized));
    assert!(!cache.is_populated());

    unauthorized.assert_async().await;
    unauthorized.remove_async().await;

    // The slot stayed empty, so the next call retries and succeeds.
    let mocks = mount_catalog_mocks(&mut server).await;
    let categories = cache.get_or_refresh(&mut client).await.unwrap();
    assert_eq!(categories.len(), 2);

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn mid_fetch_failure_caches_nothing() {
    let mut server = Server::new_async().await;
    let root = server
        .mock("GET", ROOT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(root_listing().to_string())
        .create_async()
        .await;

    // First directory resolves, the second 404s mid-fetch.
    let discord = server
        .mock("GET", "/repos/intergrav/devins-badges/contents/assets/cozy/discord-plugin")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(discord_plugin_listing().to_string())
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/repos/intergrav/devins-badges/contents/assets/cozy/made-with")
        .with_status(404)
        .with_body(json!({"message": "Not Found"}).to_string())
        .create_async()
        .await;

    let mut client = client_for(&server);
    let mut cache = CatalogCache::new();

    let err = cache.get_or_refresh(&mut client).await.unwrap_err();
    assert!(matches!(err, BadgedexError::NotFound(_)));

    // No partial catalog: the categories discovered before the failure are
    // not retained.
    assert!(!cache.is_populated());

    root.assert_async().await;
    discord.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn failed_refresh_retains_previous_snapshot() {
    let mut server = Server::new_async().await;
    let mocks = mount_catalog_mocks(&mut server).await;
    let mut client = client_for(&server);
    let mut cache = CatalogCache::new();

    let first = cache.get_or_refresh(&mut client).await.unwrap().to_vec();
    for mock in mocks {
        mock.assert_async().await;
        mock.remove_async().await;
    }

    let broken = server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let err = cache.refresh(&mut client).await.unwrap_err();
    assert!(matches!(err, BadgedexError::Other(_)));
    broken.assert_async().await;

    // The previous snapshot is still served.
    assert_eq!(cache.get(), Some(first.as_slice()));
}

#[tokio::test]
async fn successful_refresh_replaces_snapshot() {
    let mut server = Server::new_async().await;
    let mocks = mount_catalog_mocks(&mut server).await;
    let mut client = client_for(&server);
    let mut cache = CatalogCache::new();

    let first = cache.get_or_refresh(&mut client).await.unwrap().to_vec();
    assert_eq!(first.len(), 2);
    for mock in mocks {
        mock.assert_async().await;
        mock.remove_async().await;
    }

    // Upstream shrank to a single empty category.
    let root = server
        .mock("GET", ROOT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{"name": "built-with", "path": "assets/cozy/built-with", "type": "dir"}])
                .to_string(),
        )
        .create_async()
        .await;
    let built_with = server
        .mock("GET", "/repos/intergrav/devins-badges/contents/assets/cozy/built-with")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([]).to_string())
        .create_async()
        .await;

    let refreshed = cache.refresh(&mut client).await.unwrap().to_vec();
    assert_eq!(refreshed.len(), 1);
    assert_eq!(refreshed[0].label, "Built With");
    assert!(refreshed[0].files.is_empty());
    assert_ne!(first, refreshed);

    root.assert_async().await;
    built_with.assert_async().await;
}
