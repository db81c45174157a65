//! # research-crew
//!
//! A three-agent research crew (research, summarization, fact-checking)
//! assembled from YAML agent and task definitions, plus diagnostics for LLM
//! provider connectivity and environment configuration.
//!
//! Crews are built through [`project::CrewBase`], which resolves each
//! registered agent and task against the loaded [`project::CrewConfig`] and
//! binds every task to its agent. [`crews::research_crew`] is the registered
//! research crew. The diagnostics live in [`utilities::llm_connection_test`]
//! and [`utilities::env_check`].

pub mod agent;
pub mod cli;
pub mod crew;
pub mod crews;
pub mod llm;
pub mod llms;
pub mod process;
pub mod project;
pub mod task;
pub mod tools;
pub mod utilities;

pub use agent::Agent;
pub use crew::Crew;
pub use crews::research_crew;
pub use llm::LLM;
pub use llms::base_llm::{BaseLLM, LLMError};
pub use llms::providers::Provider;
pub use process::Process;
pub use project::{CrewBase, CrewConfig};
pub use task::Task;
pub use utilities::env_check::check_environment_variables;
pub use utilities::errors::{CrewError, CrewResult};
pub use utilities::llm_connection_test::{test_llm_connection, ConnectionTester};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
