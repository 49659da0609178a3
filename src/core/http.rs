//! Raw HTTP fetcher: one GET, status and body, no interpretation.

use crate::Result;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Status and body of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Final request URL, query string included.
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Thin wrapper over a shared `reqwest::Client`. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct RawFetcher {
    client: Client,
}

impl RawFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<RawResponse> {
        self.fetch_with_query(url, &[]).await
    }

    /// GET `url` with `query` appended. Non-success statuses are returned, not raised.
    pub async fn fetch_with_query(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse> {
        let request = self.client.get(url).query(query).build()?;
        let url = request.url().to_string();
        debug!(%url, "GET");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%url, %status, bytes = body.len(), "Response received");

        Ok(RawResponse { url, status, body })
    }
}
