//! Service binary: load the model once, then serve summaries over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gen_client::GenClient;
use server::{AppState, GrpcGenerator, create_router};
use summarizer::{SamplingParams, StrategyKind, SummaryGenerator};

/// ReelDigest - Movie review summarisation service
#[derive(Parser)]
#[command(name = "reel-digest-server")]
#[command(about = "HTTP service that turns movie reviews into graded summaries", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Address of the text-generation runtime
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    gen_addr: String,

    /// Model identifier to load at startup
    #[arg(long, default_value = "TinyLlama/TinyLlama-1.1B-Chat-v1.0")]
    model: String,

    /// Extraction strategy to serve with
    #[arg(long, value_enum, default_value_t = StrategyKind::JsonSpan)]
    strategy: StrategyKind,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.7)]
    temperature: f32,

    /// Nucleus sampling cutoff
    #[arg(long, default_value_t = 0.9)]
    top_p: f32,

    /// Cap on generated tokens per request
    #[arg(long, default_value_t = 300)]
    max_new_tokens: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Starting API and initializing the summarisation pipeline");

    // A failure here is fatal: without a loaded model there is nothing to
    // serve, so the process exits non-zero before binding the listener.
    let client = GenClient::connect(args.gen_addr.clone(), args.model.clone())
        .await
        .context("Failed to initialize the summarisation pipeline")?;

    let params = SamplingParams {
        temperature: args.temperature,
        top_p: args.top_p,
        max_new_tokens: args.max_new_tokens,
        ..SamplingParams::default()
    };

    let generator = SummaryGenerator::new(
        Arc::new(GrpcGenerator::new(client)),
        args.strategy.build(),
        params,
    );

    let state = AppState {
        generator: Arc::new(generator),
        model_id: args.model,
    };

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;

    info!("Serving on http://{}", args.listen);
    axum::serve(listener, create_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
