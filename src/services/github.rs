use crate::models::ProfileSnapshot;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the GitHub API
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("GitHub API returned {status}")]
    Upstream { status: StatusCode },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// GitHub REST API client
///
/// Only reads public profiles, so no token is ever sent.
pub struct GithubClient {
    base_url: String,
    timeout: Option<Duration>,
    client: Client,
}

impl GithubClient {
    /// Create a new GitHub client
    ///
    /// Without `timeout_secs` requests are bounded only by the network stack.
    pub fn new(base_url: String, user_agent: &str, timeout_secs: Option<u64>) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| GithubError::InvalidConfig(format!("user agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let timeout = timeout_secs.map(Duration::from_secs);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            timeout,
            client: builder.build()?,
        })
    }

    /// URL of the public profile for `username`
    pub fn profile_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(username)
        )
    }

    /// Fetch the public profile of a user
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileSnapshot, GithubError> {
        let url = self.profile_url(username);

        tracing::debug!("Fetching GitHub profile from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GitHub returned {} for user {}", status, username);
            return Err(GithubError::Upstream { status });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| GithubError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }
}
