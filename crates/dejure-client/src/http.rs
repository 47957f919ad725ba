//! reqwest-backed [`Fetch`] implementation.

use async_trait::async_trait;
use dejure_core::Fetch;
use thiserror::Error;
use tracing::debug;

use crate::ClientConfig;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {url}: {body}")]
    Server { status: u16, url: String, body: String },
}

/// Fetches pages over HTTPS with the configured User-Agent.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = resp.text().await?;
        debug!(url = %url, bytes = body.len(), "fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        assert!(HttpFetcher::new(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn server_error_message_names_status_and_url() {
        let err = FetchError::Server {
            status: 503,
            url: "https://dejure.org/".into(),
            body: "busy".into(),
        };
        assert_eq!(err.to_string(), "server returned 503 for https://dejure.org/: busy");
    }
}
