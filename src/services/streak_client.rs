use crate::models::{ErrorResponse, StreakResult};
use reqwest::Client;
use thiserror::Error;

/// Message used when the endpoint fails without a readable error body
pub const FALLBACK_ERROR: &str = "Failed to fetch GitHub data";

/// Errors surfaced to the page when a streak lookup fails
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Username is empty")]
    EmptyUsername,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Client for the local streak endpoint
#[derive(Clone)]
pub struct StreakClient {
    base_url: String,
    client: Client,
}

impl StreakClient {
    pub fn new(base_url: String) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }

    /// Look up the streak for `username`
    ///
    /// Blank usernames are rejected without a request. No retry, no timeout
    /// beyond what the underlying client enforces.
    pub async fn fetch_streak(&self, username: &str) -> Result<u32, ClientError> {
        if username.trim().is_empty() {
            return Err(ClientError::EmptyUsername);
        }

        let url = format!(
            "{}/api/github/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(username)
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| FALLBACK_ERROR.to_string());

            tracing::error!("Error fetching GitHub streak for {}: {}", username, message);

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: StreakResult = response.json().await?;
        Ok(data.streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_rejected() {
        let client = StreakClient::new("http://127.0.0.1:1".to_string());

        let result = tokio_test::block_on(client.fetch_streak("   "));
        assert!(matches!(result, Err(ClientError::EmptyUsername)));
    }

    #[test]
    fn test_api_error_displays_message() {
        let err = ClientError::Api {
            status: 404,
            message: "GitHub user not found".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub user not found");
    }
}
