//! Portfolio - Runs the portfolio use cases end to end
//!
//! Usage:
//!   portfolio                          - Run with default validation limits
//!   portfolio --config portfolio.json  - Load limits from a JSON config
//!   portfolio --name "My Project"      - Use a custom headline project name
//!
//! Set `RUST_LOG=debug` to see events as the aggregates record them.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use portfolio_app::{run_showcase, TracingPublisher};
use shared::PortfolioConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio domain showcase")]
#[command(version)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the headline project
    #[arg(short, long, default_value = "Portfolio Engine")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PortfolioConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PortfolioConfig::default(),
    };

    info!(
        min = config.validation.project_name_min_length,
        max = config.validation.project_name_max_length,
        "project name limits"
    );

    let mut publisher = TracingPublisher;
    let summary = run_showcase(
        &cli.name,
        &config.validation,
        Utc::now().date_naive(),
        &mut publisher,
    )?;

    info!("📊 Portfolio summary");
    info!("   Featured projects: {}", summary.featured_projects);
    info!("   Active skills: {}", summary.active_skills);
    info!("   Years of experience: {}", summary.total_years_of_experience);
    info!("   Events published: {}", summary.events_published);

    Ok(())
}
