//! Concrete LLM handle.
//!
//! [`LLM`] holds a model name plus optional endpoint and credentials, infers
//! the provider from the model name, and speaks that provider's wire format
//! over `reqwest`. Transport and HTTP failures are mapped onto [`LLMError`]
//! so the connection diagnostics can classify them.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llms::base_llm::{BaseLLM, BoxError, LLMError, LLMMessage};
use crate::llms::providers::{anthropic, gemini, ollama, openai, Provider};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: f64 = 120.0;

/// An LLM handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLM {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

impl LLM {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout(mut self, secs: f64) -> Self {
        self.timeout = Some(secs);
        self
    }

    /// Provider inferred from the model name.
    pub fn provider(&self) -> Provider {
        Provider::classify(&self.model)
    }

    fn endpoint_base(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.provider().default_base_url())
    }

    fn key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    fn build_request(
        &self,
        client: &reqwest::Client,
        messages: &[LLMMessage],
    ) -> reqwest::RequestBuilder {
        let provider = self.provider();
        let base = self.endpoint_base();
        let model = provider.api_model_name(&self.model);
        let key = self.key();

        match provider {
            Provider::Anthropic => anthropic::authorize(
                client.post(anthropic::endpoint(base)),
                key,
            )
            .json(&anthropic::request_body(model, messages)),
            Provider::Google => gemini::authorize(client.post(gemini::endpoint(base, model)), key)
                .json(&gemini::request_body(messages)),
            Provider::Ollama => {
                client.post(ollama::endpoint(base)).json(&ollama::request_body(model, messages))
            }
            Provider::OpenAI | Provider::Unknown => {
                openai::authorize(client.post(openai::endpoint(base)), key)
                    .json(&openai::request_body(model, messages))
            }
        }
    }

    fn parse_response(&self, body: &Value) -> Result<String, LLMError> {
        match self.provider() {
            Provider::Anthropic => anthropic::parse_response(body),
            Provider::Google => gemini::parse_response(body),
            Provider::Ollama => ollama::parse_response(body),
            Provider::OpenAI | Provider::Unknown => openai::parse_response(body),
        }
    }

    /// Send `messages` and return the reply text.
    pub async fn complete(&self, messages: &[LLMMessage]) -> Result<String, LLMError> {
        let provider = self.provider();
        if provider.requires_api_key() && self.key().is_none() {
            return Err(LLMError::Authentication(format!(
                "no api_key configured for {} (set {})",
                provider.display_name(),
                provider.api_key_env().unwrap_or("an API key")
            )));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if !timeout.is_finite() || timeout <= 0.0 {
            return Err(LLMError::Configuration(format!(
                "timeout must be a positive number of seconds, got {}",
                timeout
            )));
        }

        let timeout = Duration::try_from_secs_f64(timeout).map_err(|e| {
            LLMError::Configuration(format!("timeout of {} seconds is out of range: {}", timeout, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::Configuration(e.to_string()))?;

        log::debug!(
            "Calling {} model '{}' at {}",
            provider.display_name(),
            self.model,
            self.endpoint_base()
        );

        let response = self
            .build_request(&client, messages)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(map_status(status.as_u16(), text));
        }

        let json: Value = serde_json::from_str(&text).map_err(|e| {
            LLMError::InvalidResponse(format!(
                "{} - body: {}",
                e,
                text.chars().take(200).collect::<String>()
            ))
        })?;
        self.parse_response(&json)
    }
}

fn map_transport_error(err: reqwest::Error) -> LLMError {
    if err.is_timeout() {
        LLMError::Timeout(err.to_string())
    } else if err.is_connect() || err.is_request() {
        LLMError::Connection(err.to_string())
    } else if err.is_decode() || err.is_body() {
        LLMError::InvalidResponse(err.to_string())
    } else if err.is_builder() {
        LLMError::Configuration(err.to_string())
    } else {
        LLMError::Connection(err.to_string())
    }
}

fn map_status(status: u16, body: String) -> LLMError {
    match status {
        401 | 403 => LLMError::Authentication(format!("HTTP {}: {}", status, body)),
        404 => LLMError::NotFound(format!("HTTP 404: {}", body)),
        _ => LLMError::Api { status, body },
    }
}

#[async_trait]
impl BaseLLM for LLM {
    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    async fn call(&self, messages: Vec<LLMMessage>) -> Result<String, BoxError> {
        Ok(self.complete(&messages).await?)
    }
}
