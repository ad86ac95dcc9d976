// GitHub API HTTP client.
// Handles authentication, rate limiting, and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{BadgedexError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("badgedex/", env!("CARGO_PKG_VERSION"));

/// GitHub API client with authentication and rate limit tracking.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a new GitHub client with the given token.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API_BASE)
    }

    /// Create a client against a non-default base URL (mock servers in tests).
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| BadgedexError::Other(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(BadgedexError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            rate_limit: RateLimit::default(),
        })
    }

    /// Create a client from the GITHUB_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| BadgedexError::MissingToken)?;
        Self::new(&token)
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&mut self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BadgedexError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        if let Some(limit) = response
            .headers()
            .get("x-ratelimit-limit")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
        {
            self.rate_limit.limit = limit;
        }

        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
        {
            self.rate_limit.remaining = remaining;
        }

        if let Some(reset) = response
            .headers()
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
        {
            self.rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED => Err(BadgedexError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(BadgedexError::NotFound(url))
            }
            StatusCode::FORBIDDEN => {
                // Check if rate limited
                if self.rate_limit.remaining == 0 {
                    let reset_at =
                        chrono::DateTime::from_timestamp(self.rate_limit.reset as i64, 0)
                            .map(|dt| dt.format("%H:%M:%S").to_string())
                            .unwrap_or_else(|| "unknown".to_string());
                    Err(BadgedexError::RateLimited { reset_at })
                } else {
                    Err(BadgedexError::Other(format!(
                        "Forbidden: {}",
                        response.text().await.unwrap_or_default()
                    )))
                }
            }
            status => Err(BadgedexError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}
