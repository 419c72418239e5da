//! Review API module.
//!
//! Fetches raw homework-status documents and enforces the response shape
//! contract before anything downstream trusts them.

mod client;
mod response;

pub use client::{ApiClient, ApiError};
pub use response::{ResponseError, check_response, current_date};

use async_trait::async_trait;
use serde_json::Value;

/// Source of raw homework-status documents.
///
/// The poll loop talks to the review API only through this seam, so tests
/// can substitute a scripted source.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches statuses changed since `from_date`.
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

#[async_trait]
impl StatusSource for ApiClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        ApiClient::fetch(self, from_date).await
    }
}
