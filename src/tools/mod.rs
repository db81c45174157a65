//! Tools available to the research crew.

pub mod base_tool;

pub use base_tool::{EnvVar, ToolSpec};

/// Name of the web search tool used by the research and fact-checking roles.
pub const SERPER_DEV_TOOL: &str = "serper_dev_tool";

/// Environment variable holding the Serper API key.
pub const SERPER_API_KEY: &str = "SERPER_API_KEY";

/// The Serper.dev web search tool.
pub fn serper_dev_tool() -> ToolSpec {
    ToolSpec::new(
        SERPER_DEV_TOOL,
        "Search the internet with Serper and return the most relevant results",
    )
    .with_env_var(EnvVar::new(SERPER_API_KEY, "API key for serper.dev search"))
}
