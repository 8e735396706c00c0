//! Flowise client error types.

use thiserror::Error;

/// Result type for Flowise client operations.
pub type FlowiseResult<T> = Result<T, FlowiseError>;

/// Errors raised while talking to the Flowise REST API.
#[derive(Debug, Error)]
pub enum FlowiseError {
    /// The API answered with a non-success status.
    #[error("Flowise API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A body could not be encoded or a response could not be decoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying HTTP client could not be built.
    #[error("Client error: {0}")]
    Client(String),
}

impl FlowiseError {
    /// Create an API error from a status code and the raw response text.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a client construction error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = FlowiseError::api(404, "Chatflow not found");
        assert_eq!(
            err.to_string(),
            "Flowise API error (404): Chatflow not found"
        );
    }

    #[test]
    fn test_api_error_keeps_empty_body() {
        let err = FlowiseError::api(500, "");
        assert_eq!(err.to_string(), "Flowise API error (500): ");
    }
}
