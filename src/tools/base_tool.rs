//! Tool descriptors attached to agents and tasks.
//!
//! Tool execution belongs to the orchestration runtime; the crew only records
//! which tools each agent and task may use, and which credentials they need.

use serde::{Deserialize, Serialize};

/// Environment variable definition used by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Name of the environment variable.
    pub name: String,
    /// Human-readable description of the environment variable.
    pub description: String,
    /// Whether the environment variable is required.
    #[serde(default = "default_true")]
    pub required: bool,
}

fn default_true() -> bool {
    true
}

impl EnvVar {
    /// Create a new required environment variable.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
        }
    }
}

/// A named tool an agent or task is allowed to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// The unique name of the tool.
    pub name: String,
    /// Description used to tell the model how/when/why to use the tool.
    pub description: String,
    /// Environment variables the tool reads.
    #[serde(default)]
    pub env_vars: Vec<EnvVar>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            env_vars: Vec::new(),
        }
    }

    /// Add an environment variable the tool depends on.
    pub fn with_env_var(mut self, env_var: EnvVar) -> Self {
        self.env_vars.push(env_var);
        self
    }

    /// Required environment variables that `lookup` reports as unset or empty.
    pub fn missing_env_vars<F>(&self, lookup: F) -> Vec<&str>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.env_vars
            .iter()
            .filter(|var| var.required)
            .filter(|var| lookup(&var.name).map_or(true, |value| value.is_empty()))
            .map(|var| var.name.as_str())
            .collect()
    }
}
