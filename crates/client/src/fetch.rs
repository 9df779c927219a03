//! Fetching verses through the proxy.

use serde_json::Value;

use crate::error::ApiError;
use crate::model::Verse;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/gita";

/// Client for the verse proxy endpoint.
pub struct GitaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GitaClient {
    /// Client against the default local proxy endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against a specific proxy endpoint, e.g. a deployed instance.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch all verses of a chapter.
    ///
    /// The body is read as text and then parsed as JSON: the data path is
    /// known to mislabel its content type, so the declared type is never
    /// trusted.
    pub async fn fetch_verses_by_chapter(&self, chapter: u32) -> Result<Vec<Verse>, ApiError> {
        let result = self.fetch_chapter_inner(chapter).await;

        if let Err(error) = &result {
            tracing::error!(chapter, %error, "failed to fetch verses");
        }

        result
    }

    async fn fetch_chapter_inner(&self, chapter: u32) -> Result<Vec<Verse>, ApiError> {
        let url = format!("{}?q={}", self.endpoint, chapter);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = format!("API Error: {}", status.as_u16());
            return Err(if status == reqwest::StatusCode::NOT_FOUND {
                ApiError::not_found(message)
            } else {
                ApiError::server(status.as_u16(), message)
            });
        }

        let text = response.text().await?;
        parse_verses(&text, chapter)
    }

    /// Fetch a single verse by its `geeta_id`.
    ///
    /// Not implemented: the upstream offers no by-id endpoint. Logs a warning
    /// and returns nothing rather than failing hard.
    pub async fn fetch_verse_by_id(&self, gita_id: &str) -> Result<Option<Verse>, ApiError> {
        tracing::warn!(gita_id, "fetch_verse_by_id not yet implemented");
        Ok(None)
    }
}

impl Default for GitaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a proxy response body into a verse list.
///
/// Accepts either a bare array or an object carrying a `data` array. An empty
/// list is an error: a valid chapter always has verses.
fn parse_verses(text: &str, chapter: u32) -> Result<Vec<Verse>, ApiError> {
    let json: Value = serde_json::from_str(text)?;

    let items = match json {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    if items.is_empty() {
        return Err(ApiError::parse(format!(
            "No verses found for chapter {chapter}"
        )));
    }

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::from))
        .collect()
}

/// Defensive check that a candidate value is a non-empty verse array.
///
/// Every element must carry the identifying `geeta_id`, `chapter`, and
/// `verse` fields.
pub fn is_valid_verse_array(data: &Value) -> bool {
    match data.as_array() {
        Some(items) if !items.is_empty() => items.iter().all(|item| {
            item.get("geeta_id").is_some() && item.get("chapter").is_some() && item.get("verse").is_some()
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn parses_bare_verse_array() {
        let body = r#"[{"geeta_id":"1:1","chapter":1,"verse":1,"shlok":"dharmakshetre"}]"#;

        let verses = parse_verses(body, 1).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].geeta_id, "1:1");
        assert_eq!(verses[0].shlok, "dharmakshetre");
    }

    #[test]
    fn parses_data_wrapper_object() {
        let body = r#"{"data":[{"geeta_id":"2:47","chapter":2,"verse":47,"shlok":"karmany"}]}"#;

        let verses = parse_verses(body, 2).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].chapter, 2);
    }

    #[test]
    fn empty_array_is_an_error_naming_the_chapter() {
        let err = parse_verses("[]", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::Parse);
        assert!(err.message.contains("No verses found"));
        assert!(err.message.contains('1'));
    }

    #[test]
    fn object_without_data_array_is_an_error() {
        let err = parse_verses(r#"{"status":"ok"}"#, 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::Parse);
        assert!(err.message.contains("chapter 3"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_verses("<html>not json</html>", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::Parse);
    }

    #[test]
    fn valid_verse_array_accepts_complete_elements() {
        let data = json!([
            {"geeta_id": "1:1", "chapter": 1, "verse": 1, "shlok": "..."},
            {"geeta_id": "1:2", "chapter": 1, "verse": 2}
        ]);
        assert!(is_valid_verse_array(&data));
    }

    #[test]
    fn valid_verse_array_rejects_empty_null_and_incomplete() {
        assert!(!is_valid_verse_array(&json!([])));
        assert!(!is_valid_verse_array(&json!(null)));
        assert!(!is_valid_verse_array(&json!({"data": []})));
        assert!(!is_valid_verse_array(&json!([
            {"geeta_id": "1:1", "chapter": 1}
        ])));
    }

    #[tokio::test]
    async fn verse_by_id_is_a_quiet_no_op() {
        let client = GitaClient::new();
        let verse = client.fetch_verse_by_id("1:1").await.unwrap();
        assert!(verse.is_none());
    }

    /// Serve a router on an ephemeral port and return its base URL.
    async fn spawn_proxy(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetch_parses_mislabeled_json_body() {
        use axum::http::header;
        use axum::routing::get;

        // The data path declares HTML for JSON bodies; the client must not care.
        let router = axum::Router::new().route(
            "/",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html")],
                    r#"[{"geeta_id":"1:1","chapter":1,"verse":1,"shlok":"dharmakshetre"}]"#,
                )
            }),
        );

        let client = GitaClient::with_endpoint(spawn_proxy(router).await);
        let verses = client.fetch_verses_by_chapter(1).await.unwrap();

        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].geeta_id, "1:1");
    }

    #[tokio::test]
    async fn not_found_status_classifies_as_not_found() {
        use axum::http::StatusCode;
        use axum::routing::get;

        let router = axum::Router::new()
            .route("/", get(|| async { (StatusCode::NOT_FOUND, "no such chapter") }));

        let client = GitaClient::with_endpoint(spawn_proxy(router).await);
        let err = client.fetch_verses_by_chapter(1).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "API Error: 404");
    }

    #[tokio::test]
    async fn server_error_status_classifies_as_server_error() {
        use axum::http::StatusCode;
        use axum::routing::get;

        let router = axum::Router::new()
            .route("/", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }));

        let client = GitaClient::with_endpoint(spawn_proxy(router).await);
        let err = client.fetch_verses_by_chapter(1).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Server);
        assert_eq!(err.status, 503);
        assert_eq!(err.message, "API Error: 503");
    }
}
