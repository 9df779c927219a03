use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use shloka_http::error::AppError;
use shloka_upstream::VerseSource;

use super::models::ChapterQuery;

const MIN_CHAPTER: i64 = 1;
const MAX_CHAPTER: i64 = 18;

/// Routes for the gita module, with the upstream source as shared state.
pub fn router(source: Arc<dyn VerseSource>) -> Router {
    Router::new()
        .route("/", get(get_chapter))
        .route("/health", get(health_check))
        .with_state(source)
}

/// Relay one chapter from the upstream API.
///
/// The upstream body is forwarded verbatim as text with a forced JSON content
/// type: the upstream declares its JSON as HTML, so its content type is never
/// relayed.
async fn get_chapter(
    State(source): State<Arc<dyn VerseSource>>,
    Query(params): Query<ChapterQuery>,
) -> Result<Response, AppError> {
    let chapter = validate_chapter(params.q.as_deref())?;

    let body = source
        .fetch_chapter(chapter)
        .await
        .map_err(|e| AppError::upstream(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "gita module is healthy"
}

/// Validate the raw `q` parameter into a chapter number.
fn validate_chapter(q: Option<&str>) -> Result<u32, AppError> {
    let raw = q
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation("Missing query parameter 'q'"))?;

    match raw.parse::<i64>() {
        Ok(chapter) if (MIN_CHAPTER..=MAX_CHAPTER).contains(&chapter) => Ok(chapter as u32),
        _ => Err(AppError::validation("Chapter must be between 1 and 18")),
    }
}
