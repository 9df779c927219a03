use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{UpstreamError, VerseSource};

struct CacheEntry {
    body: String,
    fetched_at: Instant,
}

/// Time-bounded cache of chapter bodies in front of another source.
///
/// A fresh entry short-circuits the inner fetch entirely. The lock is not
/// held across the inner call, so concurrent misses on the same chapter may
/// each fetch once; last writer wins, which is harmless for identical bodies.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entries: Mutex<HashMap<u32, CacheEntry>>,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<S: VerseSource> VerseSource for CachedSource<S> {
    async fn fetch_chapter(&self, chapter: u32) -> Result<String, UpstreamError> {
        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(&chapter) {
                if entry.fetched_at.elapsed() < self.ttl {
                    tracing::debug!(chapter, "serving chapter from cache");
                    return Ok(entry.body.clone());
                }
            }
        }

        let body = self.inner.fetch_chapter(chapter).await?;

        let mut entries = self.entries.lock().await;
        entries.insert(
            chapter,
            CacheEntry {
                body: body.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(body)
    }
}
