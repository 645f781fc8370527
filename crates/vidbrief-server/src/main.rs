use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use vidbrief_core::{Capabilities, PipelineConfig, Provider};
use vidbrief_server::{AppState, router};

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Grok,
    Openai,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Grok => Provider::Grok,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "vidbrief-server")]
#[command(about = "HTTP API for video summarization, follow-up chat, and quizzes")]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    listen: String,

    /// AI provider for summarization and question answering
    #[arg(short, long, default_value = "grok")]
    provider: CliProvider,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::from_env();
    tokio::fs::create_dir_all(&config.work_dir).await?;

    let provider: Provider = cli.provider.into();
    tracing::info!(provider = provider.name(), "loading models");
    let caps = Capabilities::from_config(&config, provider)?;

    let state = AppState {
        caps: Arc::new(caps),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
