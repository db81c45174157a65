//! Environment variable status for the common LLM providers.
//!
//! Only reports whether each variable is set; values are never printed.

use crate::utilities::printer::{plain_text, Printer, PrinterColor, ReportLine};

/// Known provider variables, in report order.
pub const PROVIDER_ENV_VARS: &[(&str, &[&str])] = &[
    ("OpenAI", &["OPENAI_API_KEY", "OPENAI_BASE_URL"]),
    ("Anthropic", &["ANTHROPIC_API_KEY"]),
    ("Google", &["GOOGLE_API_KEY", "GOOGLE_APPLICATION_CREDENTIALS"]),
    ("Cohere", &["COHERE_API_KEY"]),
    ("Hugging Face", &["HUGGINGFACE_API_KEY", "HF_TOKEN"]),
    ("Ollama", &["OLLAMA_API_BASE", "OLLAMA_HOST"]),
    ("Azure OpenAI", &["AZURE_OPENAI_API_KEY", "AZURE_OPENAI_ENDPOINT"]),
    (
        "AWS Bedrock",
        &["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "AWS_REGION"],
    ),
    ("Together AI", &["TOGETHER_API_KEY"]),
    ("Replicate", &["REPLICATE_API_TOKEN"]),
    ("Perplexity", &["PERPLEXITYAI_API_KEY"]),
    ("Groq", &["GROQ_API_KEY"]),
];

/// Status of one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarStatus {
    pub name: &'static str,
    pub set: bool,
}

/// A provider with at least one variable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEnv {
    pub provider: &'static str,
    pub vars: Vec<VarStatus>,
}

/// Result of an environment scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    pub providers: Vec<ProviderEnv>,
}

impl EnvReport {
    /// Names of the configured providers, in table order.
    pub fn configured_providers(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.provider).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::colored(
            "=== Environment Variables Status ===",
            PrinterColor::BoldCyan,
        )];

        if self.providers.is_empty() {
            lines.push(ReportLine::colored(
                "No LLM provider environment variables found.",
                PrinterColor::Yellow,
            ));
            lines.push(ReportLine::plain(
                "Make sure to set the appropriate API keys for your chosen provider.",
            ));
            return lines;
        }

        for provider in &self.providers {
            lines.push(ReportLine::plain(""));
            lines.push(ReportLine::colored(
                format!("{}:", provider.provider),
                PrinterColor::BoldWhite,
            ));
            for var in &provider.vars {
                if var.set {
                    lines.push(ReportLine::colored(
                        format!("  {}: ✅ Set", var.name),
                        PrinterColor::Green,
                    ));
                } else {
                    lines.push(ReportLine::colored(
                        format!("  {}: ❌ Not set", var.name),
                        PrinterColor::Red,
                    ));
                }
            }
        }

        lines.push(ReportLine::plain(""));
        lines.push(ReportLine::plain(format!(
            "Configured providers: {}",
            self.configured_providers().join(", ")
        )));
        lines
    }

    /// Uncolored rendering.
    pub fn render(&self) -> String {
        plain_text(&self.lines())
    }
}

/// Scan provider variables through `lookup`. Empty values count as unset.
pub fn check_environment_variables_with<F>(lookup: F) -> EnvReport
where
    F: Fn(&str) -> Option<String>,
{
    let providers = PROVIDER_ENV_VARS
        .iter()
        .filter_map(|&(provider, names)| {
            let vars: Vec<VarStatus> = names
                .iter()
                .map(|&name| VarStatus {
                    name,
                    set: lookup(name).is_some_and(|v| !v.is_empty()),
                })
                .collect();
            vars.iter()
                .any(|v| v.set)
                .then_some(ProviderEnv { provider, vars })
        })
        .collect();

    EnvReport { providers }
}

/// Scan the process environment and print the report.
pub fn check_environment_variables() -> EnvReport {
    let report = check_environment_variables_with(|name| std::env::var(name).ok());
    log::debug!(
        "Environment check found {} configured provider(s)",
        report.providers.len()
    );
    Printer::new().print_lines(&report.lines());
    report
}
