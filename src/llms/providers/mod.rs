//! Provider detection and per-provider wire formats.

pub mod anthropic;
pub mod gemini;
pub mod ollama;
pub mod openai;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The providers the diagnostics know how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Google,
    Ollama,
    Unknown,
}

/// Ordered `(keyword, provider)` pairs; the first keyword found in the
/// lowercased model name decides the provider.
pub const PROVIDER_KEYWORDS: &[(&str, Provider)] = &[
    ("ollama", Provider::Ollama),
    ("gpt", Provider::OpenAI),
    ("openai", Provider::OpenAI),
    ("claude", Provider::Anthropic),
    ("anthropic", Provider::Anthropic),
    ("gemini", Provider::Google),
    ("google", Provider::Google),
];

impl Provider {
    /// Infer the provider from a model name by case-insensitive substring match.
    pub fn classify(model: &str) -> Self {
        let model = model.to_lowercase();
        PROVIDER_KEYWORDS
            .iter()
            .find(|(keyword, _)| model.contains(keyword))
            .map(|&(_, provider)| provider)
            .unwrap_or(Provider::Unknown)
    }

    /// Lowercase tag (`openai`, `anthropic`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::Ollama => "ollama",
            Provider::Unknown => "unknown",
        }
    }

    /// Human-readable name used in report headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Google => "Google AI",
            Provider::Ollama => "Ollama",
            Provider::Unknown => "Unknown",
        }
    }

    /// Environment variable conventionally holding this provider's API key.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAI => Some("OPENAI_API_KEY"),
            Provider::Anthropic => Some("ANTHROPIC_API_KEY"),
            Provider::Google => Some("GOOGLE_API_KEY"),
            Provider::Ollama | Provider::Unknown => None,
        }
    }

    /// Endpoint used when the handle has no base URL.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::OpenAI | Provider::Unknown => openai::DEFAULT_BASE_URL,
            Provider::Anthropic => anthropic::DEFAULT_BASE_URL,
            Provider::Google => gemini::DEFAULT_BASE_URL,
            Provider::Ollama => ollama::DEFAULT_BASE_URL,
        }
    }

    /// Whether calls to this provider need an API key.
    pub fn requires_api_key(&self) -> bool {
        matches!(
            self,
            Provider::OpenAI | Provider::Anthropic | Provider::Google
        )
    }

    /// Model name as the provider's API expects it, without a routing prefix.
    pub fn api_model_name<'a>(&self, model: &'a str) -> &'a str {
        let prefixes: &[&str] = match self {
            Provider::OpenAI => &["openai/"],
            Provider::Anthropic => &["anthropic/", "claude/"],
            Provider::Google => &["gemini/", "google/"],
            Provider::Ollama => &["ollama/", "ollama_chat/"],
            Provider::Unknown => &[],
        };
        prefixes
            .iter()
            .find_map(|prefix| model.strip_prefix(prefix))
            .unwrap_or(model)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
