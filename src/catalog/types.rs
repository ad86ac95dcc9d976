// Catalog data model.
// Categories are remote directories; badge files are the SVGs inside them.

use serde::{Deserialize, Serialize};

/// One badge family, backed by a directory in the badge repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Remote directory name, e.g. "discord-plugin".
    pub value: String,
    /// Derived display title, e.g. "Discord Plugin".
    pub label: String,
    /// Badge files in remote listing order.
    pub files: Vec<BadgeFile>,
}

/// One badge image within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeFile {
    /// Remote filename, extension included.
    pub value: String,
    /// Derived display title.
    pub label: String,
    /// Relative path, `{category.value}/{file.value}`.
    pub url: String,
}
