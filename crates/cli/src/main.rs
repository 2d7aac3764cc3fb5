use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use gen_client::GenClient;
use schema::MovieSummary;
use server::GrpcGenerator;
use summarizer::{SamplingParams, StrategyKind, SummaryGenerator};

/// ReelDigest - Movie review summarisation toolkit
#[derive(Parser)]
#[command(name = "reel-digest")]
#[command(about = "Summarise movie reviews with a locally served generative model", long_about = None)]
struct Cli {
    /// Address of the text-generation runtime
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    gen_addr: String,

    /// Model identifier to load
    #[arg(long, default_value = "TinyLlama/TinyLlama-1.1B-Chat-v1.0")]
    model: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a single review end to end
    Summarize {
        /// The review text
        #[arg(long)]
        review: String,

        /// Name of the reviewer
        #[arg(long)]
        reviewer: String,

        /// Extraction strategy to use
        #[arg(long, value_enum, default_value_t = StrategyKind::JsonSpan)]
        strategy: StrategyKind,

        /// Print the summary as machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the runtime is reachable and the model loads
    Probe,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            review,
            reviewer,
            strategy,
            json,
        } => handle_summarize(cli.gen_addr, cli.model, review, reviewer, strategy, json).await?,
        Commands::Probe => handle_probe(cli.gen_addr, cli.model).await?,
    }

    Ok(())
}

/// Handle the 'summarize' command
async fn handle_summarize(
    gen_addr: String,
    model: String,
    review: String,
    reviewer: String,
    strategy: StrategyKind,
    json: bool,
) -> Result<()> {
    let start = Instant::now();
    let client = GenClient::connect(gen_addr, model)
        .await
        .context("Failed to initialize the summarisation pipeline")?;
    if !json {
        println!("{} Model loaded in {:?}", "✓".green(), start.elapsed());
    }

    let generator = SummaryGenerator::new(
        Arc::new(GrpcGenerator::new(client)),
        strategy.build(),
        SamplingParams::default(),
    );

    let digest = generator
        .generate(&review)
        .await
        .context("Failed to summarise the review")?;

    let summary = MovieSummary {
        title: digest.title,
        summary: digest.summary,
        grade: digest.grade,
        reviewer,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Handle the 'probe' command
async fn handle_probe(gen_addr: String, model: String) -> Result<()> {
    let start = Instant::now();
    let client = GenClient::connect(gen_addr, model)
        .await
        .context("Generation runtime is not ready")?;

    println!(
        "{} {} ready at {} ({:?})",
        "✓".green(),
        client.model_id().bold(),
        client.service_address(),
        start.elapsed()
    );
    Ok(())
}

/// Format one summary for the terminal.
fn print_summary(summary: &MovieSummary) {
    println!("{}", summary.title.bold().blue());
    println!(
        "{} {}{}",
        "Grade:".green(),
        "★".repeat(summary.grade as usize),
        "☆".repeat((schema::GRADE_MAX - summary.grade) as usize)
    );
    println!("{}", summary.summary);
    println!("{} {}", "reviewed by".cyan(), summary.reviewer.cyan());
}
