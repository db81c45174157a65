//! The research crew: research → summarization → fact-checking.
//!
//! The research and fact-checking roles search the web; the summarizer works
//! only from what it is handed.

use std::path::Path;

use crate::crew::Crew;
use crate::project::{AgentDefinition, CrewBase, CrewConfig, CrewMetadata, TaskDefinition};
use crate::tools::serper_dev_tool;
use crate::utilities::errors::CrewResult;

pub const RESEARCH_AGENT: &str = "research_agent";
pub const SUMMARIZATION_AGENT: &str = "summarization_agent";
pub const FACT_CHECKER_AGENT: &str = "fact_checker_agent";

pub const RESEARCH_TASK: &str = "research_task";
pub const SUMMARIZATION_TASK: &str = "summarization_task";
pub const FACT_CHECKING_TASK: &str = "fact_checking_task";

/// Registered definition of the research crew.
pub fn research_crew_base() -> CrewBase {
    let metadata = CrewMetadata {
        name: "ResearchCrew".to_string(),
        crew_type: "research".to_string(),
        version: "1.0".to_string(),
        created: "2025".to_string(),
    };

    let agents = vec![
        AgentDefinition::new(RESEARCH_AGENT).tool(serper_dev_tool()),
        AgentDefinition::new(SUMMARIZATION_AGENT),
        AgentDefinition::new(FACT_CHECKER_AGENT).tool(serper_dev_tool()),
    ];

    let tasks = vec![
        TaskDefinition::new(RESEARCH_TASK, RESEARCH_AGENT).tool(serper_dev_tool()),
        TaskDefinition::new(SUMMARIZATION_TASK, SUMMARIZATION_AGENT),
        TaskDefinition::new(FACT_CHECKING_TASK, FACT_CHECKER_AGENT).tool(serper_dev_tool()),
    ];

    CrewBase::new(metadata, agents, tasks)
}

/// Assemble the research crew from two configuration files.
pub fn research_crew(
    agents_path: impl AsRef<Path>,
    tasks_path: impl AsRef<Path>,
    verbose: bool,
) -> CrewResult<Crew> {
    let config = CrewConfig::load(agents_path, tasks_path)?;
    research_crew_base().verbose(verbose).build(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::SERPER_DEV_TOOL;

    const AGENTS: &str = r#"
research_agent:
  role: Research Specialist
  goal: Research interesting facts about the topic {topic}
  backstory: You are an expert at finding relevant and factual data.
summarization_agent:
  role: Summarizer
  goal: Summarize the research findings into concise insights
  backstory: You distill long documents into crisp summaries.
fact_checker_agent:
  role: Fact Checker
  goal: Verify the accuracy of the summary
  backstory: You cross-check every claim against reliable sources.
  allow_delegation: true
"#;

    const TASKS: &str = r#"
research_task:
  description: Research the latest developments on {topic}.
  expected_output: A list of recent findings with sources.
summarization_task:
  description: Summarize the research findings.
  expected_output: A concise summary.
fact_checking_task:
  description: Check the summary for factual accuracy.
  expected_output: A verified summary with corrections.
"#;

    // Same entries, keys in reverse order.
    const TASKS_REVERSED: &str = r#"
fact_checking_task:
  description: Check the summary for factual accuracy.
  expected_output: A verified summary with corrections.
summarization_task:
  description: Summarize the research findings.
  expected_output: A concise summary.
research_task:
  description: Research the latest developments on {topic}.
  expected_output: A list of recent findings with sources.
"#;

    const AGENTS_REVERSED: &str = r#"
fact_checker_agent:
  role: Fact Checker
  goal: Verify the accuracy of the summary
  backstory: You cross-check every claim against reliable sources.
summarization_agent:
  role: Summarizer
  goal: Summarize the research findings into concise insights
  backstory: You distill long documents into crisp summaries.
research_agent:
  role: Research Specialist
  goal: Research interesting facts about the topic {topic}
  backstory: You are an expert at finding relevant and factual data.
"#;

    fn build(agents: &str, tasks: &str) -> CrewResult<Crew> {
        let config = CrewConfig::from_yaml(agents, tasks)?;
        research_crew_base().build_with_env(&config, |_| None)
    }

    fn task_names(crew: &Crew) -> Vec<&str> {
        crew.tasks().iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_task_order_is_fixed() {
        let expected = vec![RESEARCH_TASK, SUMMARIZATION_TASK, FACT_CHECKING_TASK];

        let crew = build(AGENTS, TASKS).unwrap();
        assert_eq!(task_names(&crew), expected);

        let crew = build(AGENTS_REVERSED, TASKS_REVERSED).unwrap();
        assert_eq!(task_names(&crew), expected);

        let agent_names: Vec<&str> = crew.agents().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            agent_names,
            vec![RESEARCH_AGENT, SUMMARIZATION_AGENT, FACT_CHECKER_AGENT]
        );
    }

    #[test]
    fn test_each_task_bound_to_its_agent() {
        let crew = build(AGENTS, TASKS).unwrap();
        let pairs: Vec<(&str, &str)> = crew
            .plan()
            .map(|(task, agent)| (task.name.as_str(), agent.name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (RESEARCH_TASK, RESEARCH_AGENT),
                (SUMMARIZATION_TASK, SUMMARIZATION_AGENT),
                (FACT_CHECKING_TASK, FACT_CHECKER_AGENT),
            ]
        );
    }

    #[test]
    fn test_search_tool_assignment() {
        let crew = build(AGENTS, TASKS).unwrap();
        let agents = crew.agents();
        assert_eq!(agents[0].tool_names(), vec![SERPER_DEV_TOOL]);
        assert!(agents[1].tools.is_empty());
        assert_eq!(agents[2].tool_names(), vec![SERPER_DEV_TOOL]);

        let tasks = crew.tasks();
        assert_eq!(tasks[0].tool_names(), vec![SERPER_DEV_TOOL]);
        assert!(tasks[1].tools.is_empty());
        assert_eq!(tasks[2].tool_names(), vec![SERPER_DEV_TOOL]);
    }

    #[test]
    fn test_flags_from_config() {
        let crew = build(AGENTS, TASKS).unwrap();
        assert!(crew.agents().iter().all(|a| a.verbose));
        assert!(!crew.agents()[0].allow_delegation);
        assert!(crew.agents()[2].allow_delegation);
    }

    #[test]
    fn test_missing_research_agent_is_configuration_error() {
        let agents = AGENTS.replace("research_agent:", "researcher:");
        let err = build(&agents, TASKS).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(RESEARCH_AGENT));
    }

    #[test]
    fn test_missing_task_is_configuration_error() {
        let tasks = TASKS.replace("summarization_task:", "summary:");
        assert!(build(AGENTS, &tasks).unwrap_err().is_configuration());
    }

    #[test]
    fn test_dangling_agent_reference() {
        let tasks = TASKS.replace(
            "  expected_output: A concise summary.",
            "  expected_output: A concise summary.\n  agent: editor_agent",
        );
        let err = build(AGENTS, &tasks).unwrap_err();
        assert!(err.is_reference());
        assert!(err.to_string().contains("editor_agent"));
    }

    #[test]
    fn test_research_crew_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let agents_path = dir.path().join("agents.yaml");
        let tasks_path = dir.path().join("tasks.yaml");
        std::fs::write(&agents_path, AGENTS).unwrap();
        std::fs::write(&tasks_path, TASKS).unwrap();

        let crew = research_crew(&agents_path, &tasks_path, false).unwrap();
        assert_eq!(crew.name(), "ResearchCrew");
        assert_eq!(crew.tasks().len(), 3);
    }

    #[test]
    fn test_research_crew_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = research_crew(
            dir.path().join("agents.yaml"),
            dir.path().join("tasks.yaml"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, crate::utilities::errors::CrewError::Io { .. }));
    }

    #[test]
    fn test_info() {
        let info = research_crew_base().info();
        assert_eq!(info.crew_type, "research");
        assert_eq!(info.version, "1.0");
        assert_eq!(info.agents, 3);
        assert_eq!(info.tasks, 3);
    }

    #[test]
    fn test_shipped_config_assembles() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = CrewConfig::load_from_dir(root).unwrap();
        let crew = research_crew_base().build_with_env(&config, |_| None).unwrap();
        assert_eq!(
            task_names(&crew),
            vec![RESEARCH_TASK, SUMMARIZATION_TASK, FACT_CHECKING_TASK]
        );
        assert!(crew.placeholders().contains("topic"));
    }
}
