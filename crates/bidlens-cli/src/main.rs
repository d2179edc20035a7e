//! Bidlens CLI - Procurement bid analytics
//!
//! Usage:
//!   bidlens serve --port 3000                  Start the API server
//!   bidlens check                              Check snapshot consistency
//!   bidlens report success-rate ACME --months 6
//!   bidlens report timelines --type bridge --json

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let snapshot_path = commands::resolve_snapshot_path(cli.snapshot.as_deref());

    match cli.command {
        Commands::Serve { port, host } => {
            commands::cmd_serve(&snapshot_path, cli.config.as_deref(), &host, port).await
        }
        Commands::Check => commands::cmd_check(&snapshot_path),
        Commands::Report { json, report_type } => {
            let analytics = commands::load_analytics(&snapshot_path, cli.config.as_deref())?;
            match report_type {
                ReportType::SuccessRate { company, months } => {
                    commands::cmd_report_success_rate(&analytics, &company, months, json)
                }
                ReportType::Volume { company, months } => {
                    commands::cmd_report_volume(&analytics, &company, months, json)
                }
                ReportType::Distribution { company } => {
                    commands::cmd_report_distribution(&analytics, &company, json)
                }
                ReportType::Statistics { company } => {
                    commands::cmd_report_statistics(&analytics, &company, json)
                }
                ReportType::Performance { company } => {
                    commands::cmd_report_performance(&analytics, &company, json)
                }
                ReportType::Trends { company, timeframe } => {
                    commands::cmd_report_trends(&analytics, &company, timeframe.as_deref(), json)
                }
                ReportType::Timelines { project_type } => {
                    commands::cmd_report_timelines(&analytics, project_type.as_deref(), json)
                }
            }
        }
    }
}
