// Error types for badgedex.
// Covers GitHub API failures, terminal IO, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgedexError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BadgedexError>;
