//! The assembled crew: ordered agents and tasks run as one sequential process.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use crate::agent::Agent;
use crate::process::Process;
use crate::task::{placeholders_in, Task};
use crate::utilities::errors::{CrewError, CrewResult};

/// A group of agents and the tasks they perform, in a fixed order.
///
/// Fields are private: once built, the order of agents and tasks cannot be
/// changed. Input interpolation returns a new crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CrewData")]
pub struct Crew {
    id: Uuid,
    name: String,
    agents: Vec<Agent>,
    tasks: Vec<Task>,
    process: Process,
    verbose: bool,
}

/// Serialized form of a [`Crew`]; deserialization goes through [`Crew::new`].
#[derive(Deserialize)]
struct CrewData {
    id: Uuid,
    name: String,
    agents: Vec<Agent>,
    tasks: Vec<Task>,
    process: Process,
    verbose: bool,
}

impl TryFrom<CrewData> for Crew {
    type Error = CrewError;

    fn try_from(data: CrewData) -> CrewResult<Self> {
        let crew = Crew::new(data.name, data.agents, data.tasks, data.process)?;
        Ok(Self {
            id: data.id,
            ..crew.with_verbose(data.verbose)
        })
    }
}

impl Crew {
    /// Bind agents and tasks into a crew.
    ///
    /// Fails with [`CrewError::Reference`] if a task is bound to an agent that
    /// is not in `agents`.
    pub fn new(
        name: impl Into<String>,
        agents: Vec<Agent>,
        tasks: Vec<Task>,
        process: Process,
    ) -> CrewResult<Self> {
        for task in &tasks {
            if !agents.iter().any(|agent| agent.id == task.agent_id) {
                return Err(CrewError::Reference {
                    task: task.name.clone(),
                    agent: task.agent.clone(),
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            agents,
            tasks,
            process,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Tasks in execution order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn process(&self) -> Process {
        self.process
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The agent a task is bound to.
    pub fn agent_for(&self, task: &Task) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == task.agent_id)
    }

    /// Execution plan as `(task, agent)` pairs in order.
    pub fn plan(&self) -> impl Iterator<Item = (&Task, &Agent)> {
        self.tasks
            .iter()
            .filter_map(move |task| self.agent_for(task).map(|agent| (task, agent)))
    }

    /// MD5 fingerprint over agent roles and task keys.
    pub fn key(&self) -> String {
        let mut source: Vec<String> = self.agents.iter().map(|a| a.role.clone()).collect();
        for task in &self.tasks {
            source.push(task.key());
        }
        let combined = source.join("|");
        let mut hasher = Md5::new();
        hasher.update(combined.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Placeholder names still present in any agent or task text.
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for agent in &self.agents {
            names.extend(placeholders_in(&agent.role));
            names.extend(placeholders_in(&agent.goal));
            names.extend(placeholders_in(&agent.backstory));
        }
        for task in &self.tasks {
            names.extend(task.placeholders());
        }
        names
    }

    /// A copy of this crew with inputs interpolated into agents and tasks.
    ///
    /// Ids, bindings and order are preserved.
    pub fn with_inputs(&self, inputs: &HashMap<String, String>) -> Self {
        Self {
            agents: self.agents.iter().map(|a| a.interpolated(inputs)).collect(),
            tasks: self.tasks.iter().map(|t| t.interpolated(inputs)).collect(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Crew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Crew(name={}, process={}, number_of_agents={}, number_of_tasks={})",
            self.name,
            self.process,
            self.agents.len(),
            self.tasks.len()
        )
    }
}
