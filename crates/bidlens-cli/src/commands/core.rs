//! Shared utilities for loading records and building the engine

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use bidlens_core::{BidAnalytics, EngineConfig, Snapshot};

/// Snapshot used when neither --snapshot nor BIDLENS_SNAPSHOT is set
pub const DEFAULT_SNAPSHOT: &str = "snapshot.json";

/// Resolve the snapshot path: flag > BIDLENS_SNAPSHOT > ./snapshot.json
pub fn resolve_snapshot_path(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| {
            std::env::var("BIDLENS_SNAPSHOT")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT))
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    Snapshot::load(path).with_context(|| format!("Failed to load snapshot {}", path.display()))
}

/// Load the snapshot and config and build an engine on the system clock
pub fn load_analytics(snapshot_path: &Path, config_path: Option<&Path>) -> Result<BidAnalytics> {
    let snapshot = load_snapshot(snapshot_path)?;

    let issues = snapshot.check();
    if !issues.is_empty() {
        tracing::warn!(
            issues = issues.len(),
            "Snapshot has consistency problems (run `bidlens check` for details)"
        );
    }

    let config = EngineConfig::load(config_path).context("Failed to load engine config")?;
    Ok(BidAnalytics::with_config(Arc::new(snapshot), config))
}
