// Badge style variants, image URL construction, and embed snippets.

use super::types::BadgeFile;

/// Static asset mirror all image URLs point at.
pub const ASSET_BASE: &str = "https://cdn.jsdelivr.net/gh/intergrav/devins-badges/assets";

/// Height used in HTML embed snippets.
const HTML_EMBED_HEIGHT: u32 = 56;

/// Rendering style of a badge, selected via a URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    #[default]
    Minimal,
    Cozy,
    Compact,
}

impl BadgeStyle {
    /// All styles, in display order.
    pub const ALL: [BadgeStyle; 3] = [BadgeStyle::Minimal, BadgeStyle::Cozy, BadgeStyle::Compact];

    /// URL path segment for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Minimal => "minimal",
            BadgeStyle::Cozy => "cozy",
            BadgeStyle::Compact => "compact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BadgeStyle::Minimal => BadgeStyle::Cozy,
            BadgeStyle::Cozy => BadgeStyle::Compact,
            BadgeStyle::Compact => BadgeStyle::Minimal,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            BadgeStyle::Minimal => BadgeStyle::Compact,
            BadgeStyle::Cozy => BadgeStyle::Minimal,
            BadgeStyle::Compact => BadgeStyle::Cozy,
        }
    }
}

impl std::fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute image URL for a badge file in the given style.
pub fn badge_url(style: BadgeStyle, file: &BadgeFile) -> String {
    format!("{}/{}/{}", ASSET_BASE, style.as_str(), file.url)
}

/// Markdown embed snippet for a badge image URL.
pub fn markdown_snippet(file: &BadgeFile, url: &str) -> String {
    format!("![{}]({})", file.label, url)
}

/// HTML embed snippet for a badge image URL.
pub fn html_snippet(file: &BadgeFile, url: &str) -> String {
    format!(
        "<img alt=\"{} badge\" height=\"{}\" src=\"{}\">",
        file.label, HTML_EMBED_HEIGHT, url
    )
}
