// HTTP client for news site pages, a thin reqwest wrapper.
//
// All fetches are plain GETs returning the HTML body as a string; element
// selection happens elsewhere. Non-success statuses are errors here rather
// than leaking into the parsing layer.

use anyhow::{Context, Result};
use tracing::debug;

/// HTTP client shared across both sources for one run.
pub struct NewsClient {
    client: reqwest::Client,
}

impl NewsClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("hamta/0.1 (news-similarity)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the response body.
    pub async fn get_html(&self, url: &str) -> Result<String> {
        debug!(url = url, "GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("{url} returned {status}");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))
    }
}
