// Contents listing endpoint.
// Lists files and directories of the badge repository via the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::ContentEntry;

/// Repository all badge assets are listed from.
pub const BADGES_REPO: &str = "intergrav/devins-badges";

impl GitHubClient {
    /// List the contents of a path in the badge repository.
    ///
    /// Returns entries in the order the API reports them; callers rely on
    /// that order and must not re-sort.
    pub async fn get_contents(&mut self, path: &str) -> Result<Vec<ContentEntry>> {
        let response = self
            .get(&format!("/repos/{}/contents/{}", BADGES_REPO, path))
            .await?;
        let entries: Vec<ContentEntry> = response.json().await?;
        Ok(entries)
    }
}
