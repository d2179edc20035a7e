//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use bidlens_core::test_utils::{at, sample_snapshot};
use bidlens_core::{BidAnalytics, FixedClock, Snapshot};
use tempfile::TempDir;

use crate::commands::{self, bar, truncate};

fn setup_analytics() -> BidAnalytics {
    analytics_for(sample_snapshot())
}

fn analytics_for(snapshot: Snapshot) -> BidAnalytics {
    BidAnalytics::new(Arc::new(snapshot))
        .with_clock(Arc::new(FixedClock(at("2024-06-15T12:00:00"))))
}

/// Write the sample snapshot to a temp dir, returning (dir guard, path)
fn write_sample_snapshot() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, serde_json::to_string(&sample_snapshot()).unwrap()).unwrap();
    (dir, path)
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("Bridge", 10), "Bridge");
    assert_eq!(truncate("Bridge Construction", 10), "Bridge ...");
    // Multi-byte titles are cut on character boundaries
    assert_eq!(truncate("Brücke über den Fluss", 8), "Brück...");
}

#[test]
fn test_bar() {
    assert_eq!(bar(0.0, 100.0), "");
    assert_eq!(bar(5.0, 0.0), "");
    assert_eq!(bar(100.0, 100.0).chars().count(), 30);
    assert_eq!(bar(50.0, 100.0).chars().count(), 15);
    // Tiny non-zero values still show
    assert_eq!(bar(0.1, 100.0).chars().count(), 1);
}

#[test]
fn test_resolve_snapshot_path_prefers_flag() {
    let flag = PathBuf::from("/tmp/records.json");
    assert_eq!(commands::resolve_snapshot_path(Some(flag.as_path())), flag);
}

// ========== Loading ==========

#[test]
fn test_load_analytics() {
    let (_dir, path) = write_sample_snapshot();
    let analytics = commands::load_analytics(&path, None).unwrap();
    assert_eq!(analytics.config().defaults.months, 6);
    assert_eq!(analytics.status_distribution("c1").unwrap().data, vec![1, 1, 1]);
}

#[test]
fn test_load_analytics_with_config() {
    let (dir, path) = write_sample_snapshot();
    let config_path = dir.path().join("engine.toml");
    std::fs::write(&config_path, "[defaults]\nmonths = 3\n").unwrap();

    let analytics = commands::load_analytics(&path, Some(config_path.as_path())).unwrap();
    assert_eq!(analytics.config().defaults.months, 3);
}

#[test]
fn test_load_analytics_missing_snapshot() {
    let dir = TempDir::new().unwrap();
    let result = commands::load_analytics(&dir.path().join("missing.json"), None);
    let err = result.err().unwrap();
    assert!(err.to_string().contains("Failed to load snapshot"));
}

#[test]
fn test_load_analytics_bad_config() {
    let (dir, path) = write_sample_snapshot();
    let config_path = dir.path().join("engine.toml");
    std::fs::write(&config_path, "[defaults]\ntimeframe = \"decade\"\n").unwrap();

    assert!(commands::load_analytics(&path, Some(config_path.as_path())).is_err());
}

// ========== Check Command Tests ==========

#[test]
fn test_cmd_check_clean() {
    let (_dir, path) = write_sample_snapshot();
    assert!(commands::cmd_check(&path).is_ok());
}

#[test]
fn test_cmd_check_with_issues_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let mut snapshot = sample_snapshot();
    snapshot.tenders[0].bids_count = 9;
    std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    assert!(commands::cmd_check(&path).is_ok());
}

#[test]
fn test_cmd_check_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(commands::cmd_check(&path).is_err());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_report_success_rate() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_success_rate(&analytics, "c1", None, false).is_ok());
    assert!(commands::cmd_report_success_rate(&analytics, "c1", Some(12), true).is_ok());
}

#[test]
fn test_cmd_report_success_rate_zero_months() {
    let analytics = setup_analytics();
    let err = commands::cmd_report_success_rate(&analytics, "c1", Some(0), false)
        .err()
        .unwrap();
    assert!(err.to_string().contains("months"));
}

#[test]
fn test_cmd_report_volume_months_above_cap() {
    let analytics = setup_analytics();
    let err = commands::cmd_report_volume(&analytics, "c1", Some(u32::MAX), false)
        .err()
        .unwrap();
    assert!(err.to_string().contains("at most 120"));
}

#[test]
fn test_cmd_report_volume() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_volume(&analytics, "c1", Some(3), false).is_ok());
    assert!(commands::cmd_report_volume(&analytics, "nobody", None, false).is_ok());
}

#[test]
fn test_cmd_report_distribution() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_distribution(&analytics, "c1", false).is_ok());
    assert!(commands::cmd_report_distribution(&analytics, "nobody", false).is_ok());
    assert!(commands::cmd_report_distribution(&analytics, "c1", true).is_ok());
}

#[test]
fn test_cmd_report_statistics() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_statistics(&analytics, "c1", false).is_ok());
    assert!(commands::cmd_report_statistics(&analytics, "c1", true).is_ok());
}

#[test]
fn test_cmd_report_statistics_bad_timestamp() {
    let mut snapshot = sample_snapshot();
    snapshot.bids[0].created_at = "soon".to_string();
    let analytics = analytics_for(snapshot);

    assert!(commands::cmd_report_statistics(&analytics, "c1", false).is_err());
}

#[test]
fn test_cmd_report_performance() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_performance(&analytics, "c1", false).is_ok());
}

#[test]
fn test_cmd_report_trends() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_trends(&analytics, "c1", None, false).is_ok());
    assert!(commands::cmd_report_trends(&analytics, "c1", Some("quarter"), true).is_ok());
    // Unknown windows fall back instead of failing
    assert!(commands::cmd_report_trends(&analytics, "c1", Some("eon"), false).is_ok());
}

#[test]
fn test_cmd_report_timelines() {
    let analytics = setup_analytics();
    assert!(commands::cmd_report_timelines(&analytics, None, false).is_ok());
    assert!(commands::cmd_report_timelines(&analytics, Some("bridge"), true).is_ok());
    assert!(commands::cmd_report_timelines(&analytics, Some("nothing-matches"), false).is_ok());
}

#[test]
fn test_cmd_report_timelines_zero_budget() {
    let mut snapshot = sample_snapshot();
    snapshot.tenders[1].budget = 0.0;
    let analytics = analytics_for(snapshot);

    let err = commands::cmd_report_timelines(&analytics, None, false)
        .err()
        .unwrap();
    assert!(err.to_string().contains("Division by zero"));
}
