//! The fetch capability every navigation step goes through.

use async_trait::async_trait;

/// Fetch a URL and return the response body as text.
///
/// Implementations decide transport details (TLS, headers, status handling).
/// Errors are passed to callers unchanged, wrapped as
/// [`DejureError::Transport`](crate::DejureError::Transport).
#[async_trait]
pub trait Fetch: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn fetch(&self, url: &str) -> Result<String, Self::Error>;
}

