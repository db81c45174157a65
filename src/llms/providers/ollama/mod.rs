//! Ollama local server wire formats.
//!
//! Default API endpoint: `http://localhost:11434`. Chat goes to `/api/chat`
//! (non-streaming); the installed models are listed at `/api/tags`.

use serde_json::{json, Value};

use crate::llms::base_llm::{LLMError, LLMMessage};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// `POST {base_url}/api/chat`
pub fn endpoint(base_url: &str) -> String {
    format!("{}/api/chat", base_url.trim_end_matches('/'))
}

/// `GET {base_url}/api/tags`
pub fn tags_endpoint(base_url: &str) -> String {
    format!("{}/api/tags", base_url.trim_end_matches('/'))
}

pub fn request_body(model: &str, messages: &[LLMMessage]) -> Value {
    json!({
        "model": model,
        "messages": messages,
        "stream": false,
    })
}

/// Extract `message.content`.
pub fn parse_response(response: &Value) -> Result<String, LLMError> {
    response
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| LLMError::InvalidResponse("missing message.content".to_string()))
}

/// The `models` array of an `/api/tags` response; absent means empty.
pub fn parse_tags(response: &Value) -> Vec<Value> {
    response
        .get("models")
        .and_then(|m| m.as_array())
        .cloned()
        .unwrap_or_default()
}
