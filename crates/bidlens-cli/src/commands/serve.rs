//! Server command implementation

use std::path::Path;

use anyhow::Result;
use bidlens_server::ServerConfig;

use super::load_analytics;

pub async fn cmd_serve(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    host: &str,
    port: u16,
) -> Result<()> {
    let analytics = load_analytics(snapshot_path, config_path)?;
    let config = ServerConfig::from_env();

    println!("🚀 Starting Bidlens analytics server...");
    println!("   Snapshot: {}", snapshot_path.display());
    if let Some(path) = config_path {
        println!("   Config: {}", path.display());
    }
    println!("   Listening: http://{}:{}/api/analytics/bids", host, port);
    if config.allowed_origins.is_empty() {
        println!("   CORS: any origin");
    } else {
        println!(
            "   CORS: {} (BIDLENS_CORS_ORIGINS)",
            config.allowed_origins.join(", ")
        );
    }

    bidlens_server::serve(analytics, host, port, config).await
}
