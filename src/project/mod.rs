//! Crew project assembly.
//!
//! A [`CrewBase`] holds the ordered agent and task definitions of a crew
//! project. Building it against a [`CrewConfig`] snapshot produces an
//! immutable [`Crew`]. Registration order is the order the definitions are
//! passed in; configuration key order never matters.

pub mod config;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::crew::Crew;
use crate::process::Process;
use crate::task::Task;
use crate::tools::ToolSpec;
use crate::utilities::errors::{CrewError, CrewResult};
use crate::utilities::logger::Logger;
use crate::utilities::printer::PrinterColor;

pub use config::{AgentConfig, CrewConfig, TaskConfig};

/// An agent slot: the configuration key it is built from and its tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    pub key: String,
    pub tools: Vec<ToolSpec>,
}

impl AgentDefinition {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tools: Vec::new(),
        }
    }

    pub fn tool(mut self, tool: ToolSpec) -> Self {
        self.tools.push(tool);
        self
    }
}

/// A task slot: its configuration key, the agent key it is bound to, and its tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    pub key: String,
    pub agent: String,
    pub tools: Vec<ToolSpec>,
}

impl TaskDefinition {
    pub fn new(key: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            agent: agent.into(),
            tools: Vec::new(),
        }
    }

    pub fn tool(mut self, tool: ToolSpec) -> Self {
        self.tools.push(tool);
        self
    }
}

/// Descriptive metadata of a crew project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMetadata {
    pub name: String,
    pub crew_type: String,
    pub version: String,
    pub created: String,
}

/// Summary of a crew project as reported by `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewInfo {
    pub name: String,
    pub crew_type: String,
    pub version: String,
    pub created: String,
    pub agents: usize,
    pub tasks: usize,
}

/// Explicitly registered crew project.
#[derive(Debug, Clone)]
pub struct CrewBase {
    metadata: CrewMetadata,
    agents: Vec<AgentDefinition>,
    tasks: Vec<TaskDefinition>,
    process: Process,
    verbose: bool,
}

impl CrewBase {
    /// Register agents and tasks in the order they should appear in the crew.
    pub fn new(
        metadata: CrewMetadata,
        agents: Vec<AgentDefinition>,
        tasks: Vec<TaskDefinition>,
    ) -> Self {
        Self {
            metadata,
            agents,
            tasks,
            process: Process::Sequential,
            verbose: false,
        }
    }

    /// Print timestamped assembly progress.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn metadata(&self) -> &CrewMetadata {
        &self.metadata
    }

    /// Agent keys in registration order.
    pub fn agent_keys(&self) -> Vec<&str> {
        self.agents.iter().map(|def| def.key.as_str()).collect()
    }

    /// Task keys in registration order.
    pub fn task_keys(&self) -> Vec<&str> {
        self.tasks.iter().map(|def| def.key.as_str()).collect()
    }

    pub fn info(&self) -> CrewInfo {
        CrewInfo {
            name: self.metadata.name.clone(),
            crew_type: self.metadata.crew_type.clone(),
            version: self.metadata.version.clone(),
            created: self.metadata.created.clone(),
            agents: self.agents.len(),
            tasks: self.tasks.len(),
        }
    }

    /// Build the crew, reading tool credentials from the process environment.
    pub fn build(&self, config: &CrewConfig) -> CrewResult<Crew> {
        self.build_with_env(config, |name| std::env::var(name).ok())
    }

    /// Build the crew with an explicit environment lookup.
    ///
    /// Every agent entry is resolved before any task, so a missing agent key
    /// is reported as a configuration error even when tasks are also broken.
    pub fn build_with_env<F>(&self, config: &CrewConfig, lookup: F) -> CrewResult<Crew>
    where
        F: Fn(&str) -> Option<String>,
    {
        let logger = Logger::new(self.verbose);

        let mut agents: Vec<Agent> = Vec::with_capacity(self.agents.len());
        for def in &self.agents {
            if agents.iter().any(|agent| agent.name == def.key) {
                return Err(CrewError::configuration(format!(
                    "agent '{}' is registered twice",
                    def.key
                )));
            }
            let entry = config.agent(&def.key)?;
            let agent = Agent::from_config(&def.key, &entry).with_tools(def.tools.clone());
            logger.log("info", &format!("Registered agent '{}' ({})", def.key, agent.role), None);
            agents.push(agent);
        }

        let mut tasks: Vec<Task> = Vec::with_capacity(self.tasks.len());
        for def in &self.tasks {
            if tasks.iter().any(|task| task.name == def.key) {
                return Err(CrewError::configuration(format!(
                    "task '{}' is registered twice",
                    def.key
                )));
            }
            let entry = config.task(&def.key)?;
            let binding = entry.agent.clone().unwrap_or_else(|| def.agent.clone());
            let agent = agents
                .iter()
                .find(|agent| agent.name == binding)
                .ok_or_else(|| CrewError::Reference {
                    task: def.key.clone(),
                    agent: binding.clone(),
                })?;
            let task = Task::from_config(&def.key, &entry, agent).with_tools(def.tools.clone());
            logger.log("info", &format!("Registered task '{}' -> '{}'", def.key, binding), None);
            tasks.push(task);
        }

        warn_missing_tool_credentials(&agents, &tasks, &logger, &lookup);

        let crew = Crew::new(self.metadata.name.clone(), agents, tasks, self.process)?
            .with_verbose(self.verbose);
        logger.log(
            "info",
            &format!("Assembled {}", crew),
            Some(PrinterColor::BoldGreen),
        );
        Ok(crew)
    }
}

fn warn_missing_tool_credentials<F>(agents: &[Agent], tasks: &[Task], logger: &Logger, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let mut seen = HashSet::new();
    let tools = agents
        .iter()
        .flat_map(|agent| agent.tools.iter())
        .chain(tasks.iter().flat_map(|task| task.tools.iter()));

    for tool in tools {
        if !seen.insert(tool.name.as_str()) {
            continue;
        }
        for var in tool.missing_env_vars(lookup) {
            logger.log(
                "warning",
                &format!("Tool '{}' needs {} which is not set", tool.name, var),
                Some(PrinterColor::Yellow),
            );
        }
    }
}
