//! Bidlens Core Library
//!
//! Aggregation engine for procurement bid analytics:
//! - Calendar-month success rate and volume series
//! - Status distribution and headline statistics with period deltas
//! - Amount-range trend categories over selectable windows
//! - Project timelines and budget variance from awarded tenders
//! - JSON record snapshots with consistency checks
//! - TOML engine configuration with embedded defaults

pub mod analytics;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod snapshot;

/// Record builders for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analytics::{BidAnalytics, ProjectFilter, TrendCategory, MAX_MONTHS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{EngineConfig, PlaceholderMetrics, RequestDefaults};
pub use error::{Error, Result};
pub use models::{
    Bid, BidStatus, CategoryTrends, HeadlineStatistics, PerformanceMetrics, ProjectTimelines,
    SeriesReport, StatusDistribution, SuccessRateSeries, Tender, Timeframe, TimelineSummary,
    VolumeSeries,
};
pub use snapshot::{RecordSource, Snapshot, SnapshotIssue};
