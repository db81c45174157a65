//! Task struct.
//!
//! A task is a description plus the output expected from it, bound to exactly
//! one agent of the same crew.

use md5::{Digest, Md5};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;
use uuid::Uuid;

use crate::agent::Agent;
use crate::project::config::TaskConfig;
use crate::tools::ToolSpec;

/// Represents a task to be executed by its agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: Uuid,
    /// Configuration key the task was built from (e.g. `research_task`).
    pub name: String,
    /// Descriptive text detailing the task's purpose and execution.
    pub description: String,
    /// Clear definition of expected task outcome.
    pub expected_output: String,
    /// Tools the agent is limited to use for this task.
    pub tools: Vec<ToolSpec>,
    /// Configuration key of the agent responsible for execution.
    pub agent: String,
    /// Id of the bound agent.
    pub agent_id: Uuid,
}

impl Task {
    /// Build a task from its configuration entry, bound to `agent`.
    pub fn from_config(name: impl Into<String>, config: &TaskConfig, agent: &Agent) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: config.description.trim().to_string(),
            expected_output: config.expected_output.trim().to_string(),
            tools: Vec::new(),
            agent: agent.name.clone(),
            agent_id: agent.id,
        }
    }

    /// Replace the task's tools.
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Names of the task's tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    /// Render the prompt handed to the agent.
    pub fn prompt(&self) -> String {
        format!(
            "{}\n\nExpected Output: {}",
            self.description, self.expected_output
        )
    }

    /// MD5 fingerprint of description|expected_output.
    pub fn key(&self) -> String {
        let source = format!("{}|{}", self.description, self.expected_output);
        let mut hasher = Md5::new();
        hasher.update(source.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Copy of this task with `{name}` placeholders replaced from `inputs`.
    pub fn interpolated(&self, inputs: &HashMap<String, String>) -> Self {
        Self {
            description: interpolate_string(&self.description, inputs),
            expected_output: interpolate_string(&self.expected_output, inputs),
            ..self.clone()
        }
    }

    /// Placeholder names still present in the description or expected output.
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut names = placeholders_in(&self.description);
        names.extend(placeholders_in(&self.expected_output));
        names
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task(description={}, expected_output={})",
            self.description, self.expected_output
        )
    }
}

/// Replace each `{key}` with its input in a single pass; unknown keys stay as
/// written and substituted values are never re-scanned.
pub(crate) fn interpolate_string(template: &str, inputs: &HashMap<String, String>) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &regex::Captures<'_>| match inputs.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// `{name}` placeholders in `text`.
pub(crate) fn placeholders_in(text: &str) -> BTreeSet<String> {
    placeholder_pattern()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
