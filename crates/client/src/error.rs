//! Error taxonomy for the client fetch layer.
//!
//! Every failure becomes an [`ApiError`] with a stable code; the code maps to
//! a fixed user-facing message, decoupling error kind from display text.

use std::fmt;
use std::future::Future;

use serde::Serialize;
use thiserror::Error;

/// Stable error codes the fetch layer classifies failures into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "NETWORK_ERROR")]
    Network,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(rename = "SERVER_ERROR")]
    Server,
    #[serde(rename = "PARSE_ERROR")]
    Parse,
    #[serde(rename = "TIMEOUT")]
    Timeout,
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Network => "NETWORK_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Server => "SERVER_ERROR",
            Self::Parse => "PARSE_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Unknown => "UNKNOWN_ERROR",
        };
        f.write_str(code)
    }
}

/// A classified API failure.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, status: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Network, 0, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, 404, message)
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Server, status, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Parse, 500, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, 0, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unknown, 500, message)
    }

    /// The fixed user-facing message for this error's code.
    pub fn user_message(&self) -> String {
        match self.code {
            ErrorCode::Network => {
                "Unable to connect to the server. Please check your internet connection."
            }
            ErrorCode::NotFound => "The requested chapter or verse was not found.",
            ErrorCode::Server => "The server encountered an error. Please try again later.",
            ErrorCode::Parse => "Failed to process the response from the server.",
            ErrorCode::Timeout => "The request took too long. Please try again.",
            ErrorCode::Unknown => {
                return if self.message.is_empty() {
                    "An unexpected error occurred.".to_string()
                } else {
                    self.message.clone()
                };
            }
        }
        .to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            Self::network("Network request failed")
        } else if let Some(status) = err.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                Self::not_found(err.to_string())
            } else {
                Self::server(status.as_u16(), err.to_string())
            }
        } else {
            Self::unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(format!("Failed to parse response: {err}"))
    }
}

/// Uniform success/error envelope returned by [`with_error_handling`].
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Run a fallible operation and fold the outcome into an [`ApiResponse`]
/// instead of letting the failure propagate. The error branch is logged here
/// so callers only decide presentation.
pub async fn with_error_handling<T, F>(op: F) -> ApiResponse<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match op.await {
        Ok(data) => ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        },
        Err(error) => {
            tracing::error!(code = %error.code, message = %error.message, "api call failed");
            ApiResponse {
                success: false,
                data: None,
                error: Some(error),
            }
        }
    }
}
