//! Outbound client for the verse API.
//!
//! `HttpVerseSource` does the raw GET; `RetrySource` and `CachedSource` wrap
//! any source to add a fixed-delay retry on transport failures and a
//! time-bounded per-chapter cache. `build_source` composes the chain from
//! settings.

pub mod cache;
pub mod error;
pub mod http;
pub mod retry;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shloka_kernel::settings::UpstreamSettings;

pub use cache::CachedSource;
pub use error::UpstreamError;
pub use http::HttpVerseSource;
pub use retry::RetrySource;

/// A source of raw chapter text from the upstream verse API.
///
/// The body is returned as text, never re-parsed: the upstream is known to
/// mislabel its JSON responses, so callers decide what to do with the bytes.
#[async_trait]
pub trait VerseSource: Send + Sync {
    async fn fetch_chapter(&self, chapter: u32) -> Result<String, UpstreamError>;
}

#[async_trait]
impl<S: VerseSource + ?Sized> VerseSource for Arc<S> {
    async fn fetch_chapter(&self, chapter: u32) -> Result<String, UpstreamError> {
        (**self).fetch_chapter(chapter).await
    }
}

/// Compose the configured source chain: HTTP, optionally wrapped in retry,
/// optionally wrapped in the chapter cache.
pub fn build_source(settings: &UpstreamSettings) -> Result<Arc<dyn VerseSource>, UpstreamError> {
    let http = HttpVerseSource::new(settings)?;

    let fetcher: Arc<dyn VerseSource> = if settings.retry.max_attempts > 1 {
        Arc::new(RetrySource::new(
            http,
            settings.retry.max_attempts,
            Duration::from_millis(settings.retry.delay_ms),
        ))
    } else {
        Arc::new(http)
    };

    if settings.cache.enabled {
        Ok(Arc::new(CachedSource::new(
            fetcher,
            Duration::from_millis(settings.cache.duration_ms),
        )))
    } else {
        Ok(fetcher)
    }
}
