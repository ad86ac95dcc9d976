// GitHub API response types.
// Defines structs for deserializing contents-listing responses.

use serde::{Deserialize, Serialize};

/// Entry type discriminator in a contents listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Dir,
    File,
    Symlink,
    Submodule,
    #[serde(other)]
    Unknown,
}

/// One entry of a repository contents listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl ContentEntry {
    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing() {
        let json = r#"[
            {"name": "discord-plugin", "path": "assets/cozy/discord-plugin", "type": "dir", "sha": "abc"},
            {"name": "README.md", "path": "assets/cozy/README.md", "type": "file", "size": 120}
        ]"#;

        let entries: Vec<ContentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "discord-plugin");
        assert_eq!(entries[0].entry_type, EntryType::Dir);
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].entry_type, EntryType::File);
        assert!(!entries[1].is_dir());
    }

    #[test]
    fn test_unknown_entry_type() {
        let json = r#"{"name": "weird", "path": "assets/cozy/weird", "type": "something-new"}"#;

        let entry: ContentEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Unknown);
    }
}
