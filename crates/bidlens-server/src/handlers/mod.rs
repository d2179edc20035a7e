//! HTTP request handlers

pub mod analytics;

// Re-export all handlers for use in router
pub use analytics::*;
