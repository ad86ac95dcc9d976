// GitHub API module.
// Provides the client and types for listing the badge repository contents.

pub mod client;
pub mod contents;
pub mod types;

pub use client::GitHubClient;
pub use contents::BADGES_REPO;
pub use types::{ContentEntry, EntryType, RateLimit};
