use std::time::Duration;

use async_trait::async_trait;

use crate::{UpstreamError, VerseSource};

/// Retries transport failures with a fixed delay between attempts.
///
/// Non-success statuses pass through untouched: the upstream answered, so a
/// second identical request is not issued for them.
pub struct RetrySource<S> {
    inner: S,
    max_attempts: u32,
    delay: Duration,
}

impl<S> RetrySource<S> {
    pub fn new(inner: S, max_attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

#[async_trait]
impl<S: VerseSource> VerseSource for RetrySource<S> {
    async fn fetch_chapter(&self, chapter: u32) -> Result<String, UpstreamError> {
        let mut attempt = 1;

        loop {
            match self.inner.fetch_chapter(chapter).await {
                Ok(body) => return Ok(body),
                Err(err) if !err.is_transient() => return Err(err),
                Err(err) if attempt >= self.max_attempts => {
                    tracing::warn!(chapter, attempt, error = %err, "giving up on upstream");
                    return Err(err);
                }
                Err(err) => {
                    tracing::warn!(chapter, attempt, error = %err, "transport failure, will retry");
                    attempt += 1;
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}
