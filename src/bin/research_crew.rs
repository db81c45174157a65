//! research-crew command-line binary.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter (default: "warn,research_crew=info")
//! - Provider keys (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, ...) and
//!   `OLLAMA_API_BASE`/`OLLAMA_HOST`, optionally from a `.env` file
//!
//! # Usage
//!
//! ```bash
//! research-crew env
//! research-crew test-llm --model ollama/llama3
//! research-crew crew --input topic="solid-state batteries"
//! research-crew info
//! ```

use clap::Parser;

use research_crew::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,research_crew=info".into()),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    cli::run(Cli::parse()).await
}
