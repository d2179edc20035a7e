//! Snapshot consistency check

use std::path::Path;

use anyhow::Result;
use bidlens_core::{Snapshot, SnapshotIssue};

use super::load_snapshot;

pub fn cmd_check(snapshot_path: &Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let issues = snapshot.check();
    print_check(snapshot_path, &snapshot, &issues);
    Ok(())
}

fn print_check(path: &Path, snapshot: &Snapshot, issues: &[SnapshotIssue]) {
    println!();
    println!("🔎 Snapshot Check");
    println!("   File: {}", path.display());
    println!(
        "   Records: {} bids, {} tenders",
        snapshot.bids.len(),
        snapshot.tenders.len()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if issues.is_empty() {
        println!("   ✅ No problems found.");
        return;
    }

    for issue in issues {
        println!("   ⚠️  {}", issue);
    }
    println!();
    println!("   {} problem(s) found. Analytics still run on this data.", issues.len());
}
