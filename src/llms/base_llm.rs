//! Base LLM trait.
//!
//! [`BaseLLM`] is the opaque handle the diagnostics work against: a model
//! name, optional endpoint and credentials, and a single `call` entry point.
//! Implementations should map transport failures onto [`LLMError`] so callers
//! can classify them; any other error type is treated as unexpected.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LLMMessage {
    pub role: String,
    pub content: String,
}

impl LLMMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Boxed error returned by [`BaseLLM::call`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of an LLM call, as seen by the caller.
#[derive(Debug, Error)]
pub enum LLMError {
    /// The endpoint could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request did not complete in time.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Credentials were missing or rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The endpoint or model does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The handle itself is misconfigured.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl LLMError {
    /// Stable category name used in diagnostic reports.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "ConnectionError",
            Self::Timeout(_) => "TimeoutError",
            Self::Authentication(_) => "AuthenticationError",
            Self::NotFound(_) => "NotFoundError",
            Self::Api { .. } => "ApiError",
            Self::InvalidResponse(_) => "InvalidResponseError",
            Self::Configuration(_) => "ConfigurationError",
        }
    }
}

/// An LLM handle.
#[async_trait]
pub trait BaseLLM: Send + Sync + fmt::Debug {
    /// Model identifier, possibly provider-prefixed (e.g. `ollama/llama3`).
    fn model(&self) -> &str;

    /// Custom endpoint, if any.
    fn base_url(&self) -> Option<&str> {
        None
    }

    /// API key, if any.
    fn api_key(&self) -> Option<&str> {
        None
    }

    /// Send `messages` and return the text of the reply.
    async fn call(&self, messages: Vec<LLMMessage>) -> Result<String, BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(LLMError::Connection("x".into()).category(), "ConnectionError");
        assert_eq!(LLMError::Timeout("x".into()).category(), "TimeoutError");
        assert_eq!(
            LLMError::Api {
                status: 500,
                body: "boom".into()
            }
            .category(),
            "ApiError"
        );
    }

    #[test]
    fn test_messages_mention_their_kind() {
        assert!(LLMError::Connection("refused".into())
            .to_string()
            .contains("connection"));
        assert!(LLMError::Timeout("5s".into()).to_string().contains("timeout"));
        assert!(LLMError::Authentication("bad key".into())
            .to_string()
            .contains("authentication"));
        assert!(LLMError::NotFound("model llama9".into())
            .to_string()
            .contains("not found"));
    }

    #[test]
    fn test_user_message() {
        let msg = LLMMessage::user("hi");
        assert_eq!(msg.role, "user");
        assert_eq!(serde_json::to_value(&msg).unwrap()["content"], "hi");
    }
}
