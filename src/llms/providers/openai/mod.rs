//! OpenAI Chat Completions wire format.
//!
//! Also used for models whose provider is unknown: most self-hosted gateways
//! speak this protocol.

use serde_json::{json, Value};

use crate::llms::base_llm::{LLMError, LLMMessage};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// `POST {base_url}/chat/completions`
pub fn endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Build the request body.
pub fn request_body(model: &str, messages: &[LLMMessage]) -> Value {
    json!({
        "model": model,
        "messages": messages,
    })
}

/// Add authentication headers.
pub fn authorize(request: reqwest::RequestBuilder, api_key: Option<&str>) -> reqwest::RequestBuilder {
    match api_key {
        Some(key) => request.bearer_auth(key),
        None => request,
    }
}

/// Extract `choices[0].message.content`.
pub fn parse_response(response: &Value) -> Result<String, LLMError> {
    response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            LLMError::InvalidResponse("missing choices[0].message.content".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_slash() {
        assert_eq!(
            endpoint("http://localhost:8000/v1/"),
            "http://localhost:8000/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body() {
        let body = request_body("gpt-4o", &[LLMMessage::user("hello")]);
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_parse_response() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "Test successful"}}]
        });
        assert_eq!(parse_response(&response).unwrap(), "Test successful");
        assert!(matches!(
            parse_response(&json!({"choices": []})),
            Err(LLMError::InvalidResponse(_))
        ));
    }
}
