//! Command-line interface.
//!
//! `env` and `test-llm` run the provider diagnostics, `crew` assembles the
//! research crew and prints its execution plan, `info` prints its metadata.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::crew::Crew;
use crate::crews::{research_crew, research_crew_base};
use crate::llm::LLM;
use crate::llms::providers::Provider;
use crate::project::config::{DEFAULT_AGENTS_CONFIG, DEFAULT_TASKS_CONFIG};
use crate::utilities::env_check::check_environment_variables;
use crate::utilities::llm_connection_test::test_llm_connection;
use crate::utilities::printer::{plain_text, Printer, PrinterColor, ReportLine};

/// Research crew assembly and LLM connectivity diagnostics.
#[derive(Parser, Debug)]
#[command(name = "research-crew")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Report which LLM provider environment variables are set
    Env,

    /// Test connectivity to an LLM
    TestLlm {
        /// Model name, e.g. `ollama/llama3` or `gpt-4o-mini`
        #[arg(short, long)]
        model: String,

        /// Custom API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// API key (falls back to the provider's environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<f64>,
    },

    /// Assemble the research crew and print its plan
    Crew {
        /// Agents configuration file
        #[arg(long, default_value = DEFAULT_AGENTS_CONFIG)]
        agents: PathBuf,

        /// Tasks configuration file
        #[arg(long, default_value = DEFAULT_TASKS_CONFIG)]
        tasks: PathBuf,

        /// Placeholder value, `key=value`; repeatable
        #[arg(short, long = "input", value_parser = parse_input)]
        inputs: Vec<(String, String)>,

        /// Print agent backstories and task prompts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print crew metadata
    Info,
}

/// Parse a `key=value` input.
pub fn parse_input(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Build the LLM handle for `test-llm`, filling gaps from the environment.
pub fn resolve_llm<F>(
    model: &str,
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<f64>,
    lookup: F,
) -> LLM
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());
    let provider = Provider::classify(model);

    let base_url = base_url.or_else(|| match provider {
        Provider::Ollama => non_empty("OLLAMA_API_BASE")
            .or_else(|| non_empty("OLLAMA_HOST"))
            .map(with_scheme),
        _ => None,
    });
    let api_key = api_key.or_else(|| provider.api_key_env().and_then(|var| non_empty(var)));

    let mut llm = LLM::new(model);
    llm.base_url = base_url;
    llm.api_key = api_key;
    llm.timeout = timeout;
    llm
}

// `OLLAMA_HOST` is often given as a bare `host:port`.
fn with_scheme(url: String) -> String {
    if url.contains("://") {
        url
    } else {
        format!("http://{}", url)
    }
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Env => {
            check_environment_variables();
        }
        Command::TestLlm {
            model,
            base_url,
            api_key,
            timeout,
        } => {
            let llm = resolve_llm(&model, base_url, api_key, timeout, |name| {
                std::env::var(name).ok()
            });
            test_llm_connection(&llm).await;
        }
        Command::Crew {
            agents,
            tasks,
            inputs,
            verbose,
        } => run_crew(agents, tasks, inputs, verbose)?,
        Command::Info => {
            let info = research_crew_base().info();
            let printer = Printer::new();
            printer.print(&format!("=== {} ===", info.name), PrinterColor::BoldCyan);
            println!("Type: {}", info.crew_type);
            println!("Version: {}", info.version);
            println!("Created: {}", info.created);
            println!("Agents: {}", info.agents);
            println!("Tasks: {}", info.tasks);
        }
    }
    Ok(())
}

fn run_crew(
    agents: PathBuf,
    tasks: PathBuf,
    inputs: Vec<(String, String)>,
    verbose: bool,
) -> Result<()> {
    let crew = research_crew(&agents, &tasks, verbose).with_context(|| {
        format!(
            "failed to assemble crew from {} and {}",
            agents.display(),
            tasks.display()
        )
    })?;

    let inputs: HashMap<String, String> = inputs.into_iter().collect();
    let crew = crew.with_inputs(&inputs);
    Printer::new().print_lines(&plan_lines(&crew, verbose));
    Ok(())
}

/// Render the execution plan; `verbose` adds agent backstories and task prompts.
pub fn plan_lines(crew: &Crew, verbose: bool) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::colored(crew.to_string(), PrinterColor::BoldCyan)];

    for (step, (task, agent)) in crew.plan().enumerate() {
        lines.push(ReportLine::colored(
            format!("{}. {} -> {} ({})", step + 1, task.name, agent.name, agent.role),
            PrinterColor::BoldWhite,
        ));
        if !task.tools.is_empty() {
            lines.push(ReportLine::plain(format!(
                "   tools: {}",
                task.tool_names().join(", ")
            )));
        }
        if verbose {
            lines.push(ReportLine::plain(format!(
                "   backstory: {}",
                agent.backstory.replace('\n', "\n   ")
            )));
            lines.push(ReportLine::plain(format!(
                "   {}",
                task.prompt().replace('\n', "\n   ")
            )));
        }
    }

    let unresolved = crew.placeholders();
    if !unresolved.is_empty() {
        let names: Vec<String> = unresolved.into_iter().collect();
        lines.push(ReportLine::colored(
            format!(
                "Unresolved placeholders: {} (pass --input key=value)",
                names.join(", ")
            ),
            PrinterColor::Yellow,
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("topic=Rust async").unwrap(),
            ("topic".to_string(), "Rust async".to_string())
        );
        assert_eq!(
            parse_input("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_input("topic").is_err());
        assert!(parse_input("=x").is_err());
    }

    #[test]
    fn test_parse_crew_command() {
        let cli = Cli::try_parse_from([
            "research-crew",
            "crew",
            "--input",
            "topic=quantum computing",
            "-i",
            "year=2025",
        ])
        .unwrap();
        match cli.command {
            Command::Crew {
                agents,
                tasks,
                inputs,
                verbose,
            } => {
                assert_eq!(agents, PathBuf::from(DEFAULT_AGENTS_CONFIG));
                assert_eq!(tasks, PathBuf::from(DEFAULT_TASKS_CONFIG));
                assert_eq!(inputs.len(), 2);
                assert_eq!(inputs[0].1, "quantum computing");
                assert!(!verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_test_llm_command() {
        let cli = Cli::try_parse_from([
            "research-crew",
            "test-llm",
            "--model",
            "ollama/llama3",
            "--timeout",
            "30",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::TestLlm {
                model: "ollama/llama3".into(),
                base_url: None,
                api_key: None,
                timeout: Some(30.0),
            }
        );
        assert!(Cli::try_parse_from(["research-crew", "test-llm"]).is_err());
    }

    #[test]
    fn test_resolve_llm_ollama_base_url_fallback() {
        let llm = resolve_llm(
            "ollama/llama3",
            None,
            None,
            None,
            env(&[("OLLAMA_API_BASE", ""), ("OLLAMA_HOST", "http://gpu-box:11434")]),
        );
        assert_eq!(llm.base_url.as_deref(), Some("http://gpu-box:11434"));
        assert_eq!(llm.api_key, None);
    }

    #[test]
    fn test_resolve_llm_bare_ollama_host() {
        let llm = resolve_llm("ollama/llama3", None, None, None, env(&[("OLLAMA_HOST", "127.0.0.1:11434")]));
        assert_eq!(llm.base_url.as_deref(), Some("http://127.0.0.1:11434"));
    }

    #[test]
    fn test_resolve_llm_flags_win() {
        let llm = resolve_llm(
            "gpt-4o",
            Some("http://proxy/v1".into()),
            Some("sk-flag".into()),
            Some(10.0),
            env(&[("OPENAI_API_KEY", "sk-env"), ("OLLAMA_HOST", "http://x")]),
        );
        assert_eq!(llm.base_url.as_deref(), Some("http://proxy/v1"));
        assert_eq!(llm.api_key.as_deref(), Some("sk-flag"));
        assert_eq!(llm.timeout, Some(10.0));
    }

    #[test]
    fn test_resolve_llm_api_key_from_env() {
        let llm = resolve_llm("claude-3-haiku", None, None, None, env(&[("ANTHROPIC_API_KEY", "sk-ant")]));
        assert_eq!(llm.api_key.as_deref(), Some("sk-ant"));
        // Non-Ollama models never pick up an Ollama host.
        assert_eq!(llm.base_url, None);
    }

    #[test]
    fn test_plan_lines_verbose_shows_backstories() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let crew = research_crew(
            root.join(DEFAULT_AGENTS_CONFIG),
            root.join(DEFAULT_TASKS_CONFIG),
            false,
        )
        .unwrap();
        let backstory = crew.agents()[0].backstory.lines().next().unwrap().to_string();

        let quiet = plain_text(&plan_lines(&crew, false));
        assert!(quiet.contains("1. research_task -> research_agent"));
        assert!(!quiet.contains("backstory:"));
        assert!(quiet.contains("Unresolved placeholders: topic"));

        let verbose = plain_text(&plan_lines(&crew, true));
        assert!(verbose.contains("backstory:"));
        assert!(verbose.contains(&backstory));

        let inputs = HashMap::from([("topic".to_string(), "Rust".to_string())]);
        let resolved = plain_text(&plan_lines(&crew.with_inputs(&inputs), true));
        assert!(!resolved.contains("Unresolved placeholders"));
    }

    #[test]
    fn test_run_crew_missing_files_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_crew(
            dir.path().join("agents.yaml"),
            dir.path().join("tasks.yaml"),
            Vec::new(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to assemble crew"));
    }

    #[test]
    fn test_run_crew_with_shipped_config() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        run_crew(
            root.join(DEFAULT_AGENTS_CONFIG),
            root.join(DEFAULT_TASKS_CONFIG),
            vec![("topic".into(), "Rust".into())],
            false,
        )
        .unwrap();
    }
}
