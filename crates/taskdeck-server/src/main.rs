mod app;
mod error;
mod handlers;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use taskdeck_store::store::TaskStore;

#[derive(Parser)]
#[command(name = "taskdeck-server", about = "HTTP JSON API for the task tracker", version)]
struct Args {
    /// Path of the task file
    #[arg(long, default_value = "tasks.json")]
    file: String,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let state = app::AppState {
        store: Arc::new(TaskStore::new(&args.file)),
    };
    let router = app::build_router(state);

    // Bind failure is fatal to the process.
    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    tracing::info!("listening on http://{}", args.addr);
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
