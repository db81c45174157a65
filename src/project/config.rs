//! Typed agent and task configuration entries.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::utilities::config::{load_config_map, parse_config_map, process_config, ConfigMap};
use crate::utilities::errors::{CrewError, CrewResult};

/// Default path of the agents configuration file.
pub const DEFAULT_AGENTS_CONFIG: &str = "config/agents.yaml";

/// Default path of the tasks configuration file.
pub const DEFAULT_TASKS_CONFIG: &str = "config/tasks.yaml";

/// One agent entry of `agents.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub allow_delegation: bool,
    /// Optional model name for this agent.
    #[serde(default)]
    pub llm: Option<String>,
}

fn default_verbose() -> bool {
    true
}

/// One task entry of `tasks.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub description: String,
    pub expected_output: String,
    /// Agent key overriding the binding registered in code.
    #[serde(default)]
    pub agent: Option<String>,
}

/// A snapshot of both configuration mappings.
#[derive(Debug, Clone, Default)]
pub struct CrewConfig {
    agents: ConfigMap,
    tasks: ConfigMap,
}

impl CrewConfig {
    pub fn new(agents: ConfigMap, tasks: ConfigMap) -> Self {
        Self { agents, tasks }
    }

    /// Load both configuration files.
    pub fn load(agents_path: impl AsRef<Path>, tasks_path: impl AsRef<Path>) -> CrewResult<Self> {
        Ok(Self {
            agents: load_config_map(agents_path)?,
            tasks: load_config_map(tasks_path)?,
        })
    }

    /// Load the default `config/agents.yaml` and `config/tasks.yaml` below `root`.
    pub fn load_from_dir(root: impl AsRef<Path>) -> CrewResult<Self> {
        let root = root.as_ref();
        Self::load(root.join(DEFAULT_AGENTS_CONFIG), root.join(DEFAULT_TASKS_CONFIG))
    }

    /// Parse both mappings from YAML text.
    pub fn from_yaml(agents: &str, tasks: &str) -> CrewResult<Self> {
        Ok(Self {
            agents: parse_config_map(agents, &PathBuf::from("<agents>"))?,
            tasks: parse_config_map(tasks, &PathBuf::from("<tasks>"))?,
        })
    }

    /// Whether an agent entry named `key` exists.
    pub fn has_agent(&self, key: &str) -> bool {
        self.agents.contains_key(key)
    }

    /// Typed agent entry, with defaults applied.
    pub fn agent(&self, key: &str) -> CrewResult<AgentConfig> {
        let entry = self
            .agents
            .get(key)
            .ok_or_else(|| CrewError::configuration(format!("missing agent entry '{}'", key)))?;
        let merged = process_config(
            entry,
            &[
                ("verbose", Value::Bool(true)),
                ("allow_delegation", Value::Bool(false)),
            ],
        );
        serde_yaml::from_value(merged).map_err(|e| {
            CrewError::configuration(format!("invalid agent entry '{}': {}", key, e))
        })
    }

    /// Typed task entry.
    pub fn task(&self, key: &str) -> CrewResult<TaskConfig> {
        let entry = self
            .tasks
            .get(key)
            .ok_or_else(|| CrewError::configuration(format!("missing task entry '{}'", key)))?;
        serde_yaml::from_value(entry.clone()).map_err(|e| {
            CrewError::configuration(format!("invalid task entry '{}': {}", key, e))
        })
    }
}
