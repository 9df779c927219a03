use std::time::Duration;

use async_trait::async_trait;
use shloka_kernel::settings::UpstreamSettings;

use crate::{UpstreamError, VerseSource};

/// Reqwest-backed source issuing a single GET per fetch.
pub struct HttpVerseSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVerseSource {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|e| UpstreamError::Transport(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }
}

#[async_trait]
impl VerseSource for HttpVerseSource {
    async fn fetch_chapter(&self, chapter: u32) -> Result<String, UpstreamError> {
        let url = format!("{}?q={}", self.base_url, chapter);

        tracing::debug!(chapter, %url, "fetching chapter from upstream");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        // Read as text: the upstream labels JSON bodies as HTML.
        let body = response.text().await?;

        tracing::debug!(chapter, bytes = body.len(), "upstream responded");

        Ok(body)
    }
}
