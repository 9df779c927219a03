//! Error handling for the shloka HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types that map to HTTP responses.
///
/// The response bodies are the fixed shapes the proxy's callers rely on:
/// validation failures answer `{"error": ...}` and upstream failures answer
/// `{"error": "Failed to fetch data", "message": ...}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("upstream error: {message}")]
    Upstream { message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a validation error (HTTP 400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an upstream error (HTTP 500).
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message } => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Upstream { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to fetch data",
                    "message": message,
                }),
            ),
            AppError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to fetch data",
                    "message": e.to_string(),
                }),
            ),
        };

        tracing::error!(
            status_code = %status.as_u16(),
            body = %body,
            "request error"
        );

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_error_field() {
        let response = AppError::validation("Missing query parameter 'q'").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Missing query parameter 'q'" }));
    }

    #[tokio::test]
    async fn upstream_error_is_500_with_fixed_envelope() {
        let response = AppError::upstream("API returned status 503").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch data");
        assert_eq!(body["message"], "API returned status 503");
    }

    #[tokio::test]
    async fn internal_error_maps_to_500() {
        let error = AppError::Internal(anyhow::anyhow!("listener bind failed"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
