use thiserror::Error;

/// Failures reaching or reading from the upstream verse API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status.
    #[error("API returned status {status}")]
    Status { status: u16 },

    /// The request never produced a usable response (connect, timeout, body
    /// read, or client construction failure).
    #[error("upstream request failed: {0}")]
    Transport(String),
}

impl UpstreamError {
    /// Whether a retry could plausibly help. Non-success statuses are final.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_in_message() {
        let err = UpstreamError::Status { status: 503 };
        assert_eq!(err.to_string(), "API returned status 503");
        assert!(!err.is_transient());
    }

    #[test]
    fn transport_errors_are_transient() {
        let err = UpstreamError::Transport("connection refused".to_string());
        assert!(err.is_transient());
    }
}
