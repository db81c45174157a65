//! Google Gemini `generateContent` wire format.

use serde_json::{json, Value};

use crate::llms::base_llm::{LLMError, LLMMessage};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// `POST {base_url}/v1beta/models/{model}:generateContent`
pub fn endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

pub fn request_body(messages: &[LLMMessage]) -> Value {
    let system: Vec<Value> = messages
        .iter()
        .filter(|m| m.role == "system")
        .map(|m| json!({ "text": m.content }))
        .collect();

    let contents: Vec<Value> = messages
        .iter()
        .filter(|m| m.role != "system")
        .map(|m| {
            let role = if m.role == "assistant" { "model" } else { "user" };
            json!({ "role": role, "parts": [{ "text": m.content }] })
        })
        .collect();

    let mut body = json!({ "contents": contents });
    if !system.is_empty() {
        body["systemInstruction"] = json!({ "parts": system });
    }
    body
}

pub fn authorize(request: reqwest::RequestBuilder, api_key: Option<&str>) -> reqwest::RequestBuilder {
    match api_key {
        Some(key) => request.header("x-goog-api-key", key),
        None => request,
    }
}

/// Concatenate `candidates[0].content.parts[*].text`.
pub fn parse_response(response: &Value) -> Result<String, LLMError> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            LLMError::InvalidResponse("missing candidates[0].content.parts".to_string())
        })?;

    Ok(parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint(DEFAULT_BASE_URL, "gemini-1.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_roles() {
        let body = request_body(&[
            LLMMessage::system("Be brief."),
            LLMMessage::user("hi"),
            LLMMessage {
                role: "assistant".to_string(),
                content: "hello".to_string(),
            },
        ]);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
    }

    #[test]
    fn test_api_key_sent_as_header() {
        let request = authorize(
            reqwest::Client::new().post(endpoint(DEFAULT_BASE_URL, "gemini-pro")),
            Some("g-key"),
        )
        .build()
        .unwrap();
        assert_eq!(
            request.headers().get("x-goog-api-key").unwrap(),
            "g-key"
        );
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_parse_response() {
        let response = json!({
            "candidates": [{"content": {"parts": [{"text": "Test "}, {"text": "successful"}]}}]
        });
        assert_eq!(parse_response(&response).unwrap(), "Test successful");
        assert!(parse_response(&json!({"candidates": []})).is_err());
    }
}
