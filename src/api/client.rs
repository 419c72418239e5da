//! Homework review API client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Connection timeout for review API requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall timeout for review API requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while fetching homework statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: connection refused, timeout, DNS and friends.
    #[error("review API request failed: {0}")]
    Transport(String),

    /// The API answered with something other than 200.
    #[error("review API returned status {0}")]
    HttpStatus(u16),

    /// The response body is not valid JSON.
    #[error("review API returned a body that is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the homework review API.
///
/// Owns transport concerns only; the shape of the returned document is
/// checked separately by [`check_response`](super::check_response).
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: Client,

    /// Endpoint serving homework statuses.
    endpoint: String,

    /// OAuth token sent with every request.
    token: String,
}

impl ApiClient {
    /// Creates a client for the given endpoint and OAuth token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: &str, token: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_owned(),
            token: token.to_owned(),
        })
    }

    /// Fetches homework statuses changed since `from_date`.
    ///
    /// Returns the decoded document as-is, without shape validation.
    /// Failures are never retried here; the poll loop's cadence is the
    /// retry mechanism.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-200 status code, or a
    /// body that does not decode as JSON.
    pub async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        debug!("Requesting homework statuses since {}", from_date);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let document = serde_json::from_str(&body)?;

        debug!("Review API answered with {} bytes", body.len());
        Ok(document)
    }
}
