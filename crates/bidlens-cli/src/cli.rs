//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bidlens - Procurement bid analytics
#[derive(Parser)]
#[command(name = "bidlens")]
#[command(about = "Bid success, volume and project timeline analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Record snapshot (JSON export of bids and tenders)
    ///
    /// Falls back to BIDLENS_SNAPSHOT, then ./snapshot.json.
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Engine config override (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analytics API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Report consistency problems in the snapshot
    Check,

    /// Print an analytics report
    Report {
        /// Print raw JSON instead of a table
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        report_type: ReportType,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Monthly success rate
    SuccessRate {
        /// Company ID
        company: String,

        /// Trailing months (default from config)
        #[arg(long)]
        months: Option<u32>,
    },

    /// Monthly bid volume
    Volume {
        /// Company ID
        company: String,

        /// Trailing months (default from config)
        #[arg(long)]
        months: Option<u32>,
    },

    /// Won / Lost / Pending counts
    Distribution {
        /// Company ID
        company: String,
    },

    /// Headline figures with change against the previous month
    Statistics {
        /// Company ID
        company: String,
    },

    /// Win rate by value and reference metrics
    Performance {
        /// Company ID
        company: String,
    },

    /// Bid amount categories over a trailing window
    Trends {
        /// Company ID
        company: String,

        /// Window: day, week, month, quarter, year (default from config)
        #[arg(long)]
        timeframe: Option<String>,
    },

    /// Duration and budget variance of awarded projects
    Timelines {
        /// Only tenders whose title contains this text ("all" for every tender)
        #[arg(long = "type")]
        project_type: Option<String>,
    },
}
