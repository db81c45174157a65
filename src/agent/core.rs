//! Core Agent struct.
//!
//! An agent is a role with a goal and a backstory, plus the tools it may use
//! and a couple of behavior flags. Agents are built from YAML entries and are
//! not mutated after crew assembly.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::project::config::AgentConfig;
use crate::tools::ToolSpec;

/// Represents an agent in the crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier for the agent.
    pub id: Uuid,
    /// Configuration key the agent was built from (e.g. `research_agent`).
    pub name: String,
    /// Role of the agent.
    pub role: String,
    /// Objective of the agent.
    pub goal: String,
    /// Backstory of the agent.
    pub backstory: String,
    /// Tools at the agent's disposal.
    pub tools: Vec<ToolSpec>,
    /// Verbose mode for the agent execution.
    pub verbose: bool,
    /// Enable the agent to delegate and ask questions of other agents.
    pub allow_delegation: bool,
    /// Language model identifier that will run the agent.
    pub llm: Option<String>,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            tools: Vec::new(),
            verbose: true,
            allow_delegation: false,
            llm: None,
        }
    }

    /// Build an agent from its configuration entry.
    pub fn from_config(name: impl Into<String>, config: &AgentConfig) -> Self {
        Self {
            verbose: config.verbose,
            allow_delegation: config.allow_delegation,
            llm: config.llm.clone(),
            ..Self::new(
                name,
                config.role.trim(),
                config.goal.trim(),
                config.backstory.trim(),
            )
        }
    }

    /// Replace the agent's tools.
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Names of the agent's tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    /// MD5 fingerprint of role|goal|backstory.
    pub fn key(&self) -> String {
        let source = format!("{}|{}|{}", self.role, self.goal, self.backstory);
        let mut hasher = Md5::new();
        hasher.update(source.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Copy of this agent with `{name}` placeholders replaced from `inputs`.
    ///
    /// The id is kept so tasks stay bound to the same agent.
    pub fn interpolated(&self, inputs: &HashMap<String, String>) -> Self {
        Self {
            role: crate::task::interpolate_string(&self.role, inputs),
            goal: crate::task::interpolate_string(&self.goal, inputs),
            backstory: crate::task::interpolate_string(&self.backstory, inputs),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent(role={}, goal={})", self.role, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AgentConfig {
        AgentConfig {
            role: "  {topic} Researcher\n".to_string(),
            goal: "Find facts about {topic}".to_string(),
            backstory: "Seasoned analyst".to_string(),
            verbose: false,
            allow_delegation: true,
            llm: Some("gpt-4o-mini".to_string()),
        }
    }

    #[test]
    fn test_from_config_trims_and_copies_flags() {
        let agent = Agent::from_config("research_agent", &config());
        assert_eq!(agent.name, "research_agent");
        assert_eq!(agent.role, "{topic} Researcher");
        assert!(!agent.verbose);
        assert!(agent.allow_delegation);
        assert_eq!(agent.llm.as_deref(), Some("gpt-4o-mini"));
        assert!(agent.tools.is_empty());
    }

    #[test]
    fn test_interpolated_keeps_id() {
        let agent = Agent::from_config("research_agent", &config());
        let inputs = HashMap::from([("topic".to_string(), "Rust".to_string())]);
        let rendered = agent.interpolated(&inputs);

        assert_eq!(rendered.id, agent.id);
        assert_eq!(rendered.role, "Rust Researcher");
        assert_eq!(rendered.goal, "Find facts about Rust");
        assert_eq!(agent.role, "{topic} Researcher");
    }

    #[test]
    fn test_key_is_stable() {
        let a = Agent::new("a", "Role", "Goal", "Story");
        let b = Agent::new("b", "Role", "Goal", "Story");
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key().len(), 32);
    }
}
