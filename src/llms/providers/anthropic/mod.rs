//! Anthropic Messages API wire format.
//!
//! System messages are lifted out of the message list into the top-level
//! `system` field, as the API requires.

use serde_json::{json, Value};

use crate::llms::base_llm::{LLMError, LLMMessage};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Maximum tokens requested; the API requires an explicit value.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// `POST {base_url}/v1/messages`
pub fn endpoint(base_url: &str) -> String {
    format!("{}/v1/messages", base_url.trim_end_matches('/'))
}

pub fn request_body(model: &str, messages: &[LLMMessage]) -> Value {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == "system")
        .map(|m| m.content.as_str())
        .collect();
    let conversation: Vec<&LLMMessage> = messages.iter().filter(|m| m.role != "system").collect();

    let mut body = json!({
        "model": model,
        "max_tokens": DEFAULT_MAX_TOKENS,
        "messages": conversation,
    });
    if !system.is_empty() {
        body["system"] = Value::String(system.join("\n\n"));
    }
    body
}

pub fn authorize(request: reqwest::RequestBuilder, api_key: Option<&str>) -> reqwest::RequestBuilder {
    let request = request.header("anthropic-version", ANTHROPIC_VERSION);
    match api_key {
        Some(key) => request.header("x-api-key", key),
        None => request,
    }
}

/// Concatenate the `text` blocks of `content`.
pub fn parse_response(response: &Value) -> Result<String, LLMError> {
    let blocks = response
        .get("content")
        .and_then(|c| c.as_array())
        .ok_or_else(|| LLMError::InvalidResponse("missing content blocks".to_string()))?;

    let text: Vec<&str> = blocks
        .iter()
        .filter(|b| b.get("type").and_then(|t| t.as_str()) == Some("text"))
        .filter_map(|b| b.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(LLMError::InvalidResponse("no text content block".to_string()));
    }
    Ok(text.concat())
}
