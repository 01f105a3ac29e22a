//! Content transport.
//!
//! Loaders talk to a [`ContentFetcher`] rather than to reqwest directly,
//! so the whole repository layer runs headless in tests against an
//! in-memory content tree.

use anyhow::{Context, Result, bail};

/// Fetches one text resource by URL.
pub trait ContentFetcher {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// HTTP fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;

        if !response.status().is_success() {
            bail!("{url} returned {}", response.status());
        }

        response
            .text()
            .await
            .with_context(|| format!("reading body of {url}"))
    }
}
