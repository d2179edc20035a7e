//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (snapshot path resolution, engine loading)
//! - `check` - Snapshot consistency report
//! - `reports` - Analytics report commands
//! - `serve` - Web server command

pub mod check;
pub mod core;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use check::*;
pub use self::core::*;
pub use reports::*;
pub use serve::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
