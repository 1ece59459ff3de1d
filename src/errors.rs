use std::time::Duration;

use thiserror::Error;

pub const BUSY_MESSAGE: &str = "The server is busy. Please try again in a few seconds.";
pub const NO_HTML_MESSAGE: &str = "No HTML content found in response";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Invalid request")] InvalidRequest(String),
    #[error("CLAUDE_API_KEY not configured; set it in the environment or config file")] MissingCredential,
    #[error("upstream request timeout after {0:?}")] UpstreamTimeout(Duration),
    #[error("upstream gateway timeout (504)")] UpstreamGatewayTimeout,
    #[error("API error ({status}): {message}")] UpstreamError { status: u16, message: String },
    #[error("No HTML content found in response")] ExtractionFailure { excerpt: String },
    #[error("failed to parse upstream response: {0}")] ParseFailure(String),
    #[error("Invalid response format: {0}")] InvalidResponseFormat(String),
    #[error("connection failed: {0}")] Connection(String),
}

impl GenerateError {
    /// Timeouts and gateway timeouts are the only classes worth a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamTimeout(_) | Self::UpstreamGatewayTimeout)
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRequest(_) | Self::MissingCredential | Self::ExtractionFailure { .. } => {
                self.to_string()
            }
            other => normalize_error_message(&other.to_string()),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::UpstreamError { status, .. } if (400..=599).contains(status) => *status,
            _ => 500,
        }
    }

    /// Raw upstream text worth showing the caller. Request-parsing detail
    /// stays in the logs.
    pub fn debug_excerpt(&self) -> Option<String> {
        match self {
            Self::ExtractionFailure { excerpt } => Some(excerpt.clone()),
            _ => None,
        }
    }
}

/// Maps raw transport/upstream error text to the phrasing shown to users.
pub fn normalize_error_message(raw: &str) -> String {
    if raw.contains("504") || raw.contains("timeout") {
        BUSY_MESSAGE.to_string()
    } else if raw.contains("parse") {
        "Received invalid response. Please try again.".to_string()
    } else if raw.contains("API error") {
        "Service temporarily unavailable. Please try again.".to_string()
    } else {
        format!("Generation failed: {raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_substrings() {
        assert_eq!(normalize_error_message("got 504 from gateway"), BUSY_MESSAGE);
        assert_eq!(normalize_error_message("socket timeout"), BUSY_MESSAGE);
        assert_eq!(
            normalize_error_message("could not parse body"),
            "Received invalid response. Please try again."
        );
        assert_eq!(
            normalize_error_message("API error (529): overloaded"),
            "Service temporarily unavailable. Please try again."
        );
    }

    #[test]
    fn unknown_errors_pass_through_with_prefix() {
        assert_eq!(normalize_error_message("dns lookup failed"), "Generation failed: dns lookup failed");
    }

    #[test]
    fn retry_classes() {
        assert!(GenerateError::UpstreamTimeout(Duration::from_secs(45)).is_retryable());
        assert!(GenerateError::UpstreamGatewayTimeout.is_retryable());
        assert!(!GenerateError::UpstreamError { status: 500, message: "x".into() }.is_retryable());
        assert!(!GenerateError::ParseFailure("x".into()).is_retryable());
    }

    #[test]
    fn user_messages_and_status() {
        let timeout = GenerateError::UpstreamTimeout(Duration::from_secs(120));
        assert_eq!(timeout.user_message(), BUSY_MESSAGE);
        assert_eq!(timeout.status_code(), 500);

        let gateway = GenerateError::UpstreamGatewayTimeout;
        assert_eq!(gateway.user_message(), BUSY_MESSAGE);

        let invalid = GenerateError::InvalidRequest("expected value".into());
        assert_eq!(invalid.user_message(), "Invalid request");
        assert_eq!(invalid.status_code(), 400);
        assert_eq!(invalid.debug_excerpt(), None);

        let upstream = GenerateError::UpstreamError { status: 429, message: "rate limited".into() };
        assert_eq!(upstream.status_code(), 429);
        assert_eq!(upstream.user_message(), "Service temporarily unavailable. Please try again.");

        let extraction = GenerateError::ExtractionFailure { excerpt: "plain words".into() };
        assert_eq!(extraction.user_message(), NO_HTML_MESSAGE);
        assert_eq!(extraction.debug_excerpt().as_deref(), Some("plain words"));
    }
}
