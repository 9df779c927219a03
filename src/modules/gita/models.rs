use serde::Deserialize;

/// Query parameters accepted by the chapter endpoint.
///
/// `q` stays a raw string so the handler owns validation and can answer with
/// the proxy's fixed error bodies instead of axum's rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterQuery {
    #[serde(default)]
    pub q: Option<String>,
}
