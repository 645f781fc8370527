use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use vidbrief_core::{
    Capabilities, PipelineConfig, Provider, generate_quiz, run_chat, run_summarize,
};

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
#[command(name = "vidbrief")]
#[command(about = "Summarize a video, ask questions about it, and generate quizzes")]
struct Cli {
    /// Video URL
    url: String,

    /// Spoken language of the video (ISO 639-1, e.g. "en", "te", "hi")
    #[arg(short, long, default_value = "en")]
    language: String,

    /// AI provider for summarization and question answering
    #[arg(short, long, default_value = "grok")]
    provider: CliProvider,

    /// Ask a follow-up question about the generated summary
    #[arg(short, long)]
    ask: Option<String>,

    /// Print quiz questions for the generated summary
    #[arg(short, long)]
    quiz: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    let config = PipelineConfig::from_env();
    fs::create_dir_all(&config.work_dir).await?;

    println!(
        "\n{}  {}\n",
        style("vidbrief").cyan().bold(),
        style("Video Summarizer").dim()
    );

    let spinner = create_spinner("Loading models...");
    let caps = match Capabilities::from_config(&config, provider) {
        Ok(caps) => caps,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    spinner.finish_with_message(format!(
        "{} Models loaded ({})",
        style("✓").green().bold(),
        provider.name()
    ));

    let spinner = create_spinner("Summarizing video...");
    let result = match run_summarize(&caps, &config, &cli.url, &cli.language).await {
        Ok(result) => result,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    spinner.finish_with_message(format!("{} Summary ready", style("✓").green().bold()));

    println!("\n{}", style("─".repeat(60)).dim());
    println!("{}\n", style("Summary").cyan().bold());
    println!("{}\n", result.summary);
    println!("{}\n", style("Transcript").cyan().bold());
    println!("{}\n", result.transcription);

    if let Some(question) = cli.ask {
        let spinner = create_spinner("Answering question...");
        let answer = run_chat(&caps, &question, &result.summary).await?;
        spinner.finish_and_clear();
        println!("{} {}", style("Q:").yellow().bold(), question);
        println!("{} {}\n", style("A:").green().bold(), answer);
    }

    if cli.quiz {
        println!("{}\n", style("Quiz").cyan().bold());
        for (i, q) in generate_quiz(&result.summary).iter().enumerate() {
            println!("{} {}", style(format!("{}.", i + 1)).bold(), q.question);
            for (j, option) in q.options.iter().enumerate() {
                let marker = if j == q.correct_answer { "✓" } else { " " };
                println!("   {} {}", style(marker).green(), option);
            }
            println!();
        }
    }

    Ok(())
}
