use anyhow::{Context, Result};
use clap::Parser;
use interview_service::{create_router, AppState, Config, JobCatalog};
use std::net::SocketAddr;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "interview-service", about = "Mock AI interview platform backend")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/interview-service")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    info!("{} v0.1.0", cfg.service.name);

    let catalog = JobCatalog::with_demo_listings();
    info!("Loaded {} job listings", catalog.len());

    let state = AppState::new(catalog, cfg.interview.closing_message.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port)
        .parse()
        .context("Invalid HTTP bind address")?;

    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
