//! Bid analytics engine
//!
//! Stateless calculators over a company's bid history plus the
//! [`BidAnalytics`] facade that pulls records, samples the clock once per
//! call and dispatches to them.

mod distribution;
mod performance;
mod ratios;
mod series;
mod statistics;
mod timelines;
mod trends;
mod window;

use std::sync::Arc;

pub use distribution::{status_distribution, DISTRIBUTION_LABELS};
pub use performance::{performance_metrics, win_rate_by_value};
pub use ratios::{average_amount, percent_change, round_half_up, success_rate};
pub use series::{success_rate_series, volume_series};
pub use statistics::headline_statistics;
pub use timelines::{project_timelines, ProjectFilter};
pub use trends::{trends_by_category, TrendCategory};
pub use window::{
    bucket_by_month, filter_in_window, months_before, MonthBucket, TimeWindow, MAX_MONTHS,
};

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{
    CategoryTrends, HeadlineStatistics, PerformanceMetrics, ProjectTimelines, StatusDistribution,
    SuccessRateSeries, Timeframe, VolumeSeries,
};
use crate::snapshot::RecordSource;

/// Entry point for every aggregate
///
/// Cheap to clone and safe to share across request handlers.
#[derive(Clone)]
pub struct BidAnalytics {
    source: Arc<dyn RecordSource>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
}

impl BidAnalytics {
    /// Engine over `source` using the system clock and default config
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    pub fn with_config(source: Arc<dyn RecordSource>, config: EngineConfig) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the clock (tests pin `now` with a `FixedClock`)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Monthly success rate; `None` uses the configured default month count
    pub fn success_rate_series(
        &self,
        company_id: &str,
        months: Option<u32>,
    ) -> Result<SuccessRateSeries> {
        let months = months.unwrap_or(self.config.defaults.months);
        let now = self.clock.now();
        let bids = self.source.bids_by_company(company_id)?;

        let series = success_rate_series(&bids, now, months)?;
        tracing::debug!(company_id, months, bids = bids.len(), "Computed success rate series");
        Ok(series)
    }

    /// Monthly bid counts; `None` uses the configured default month count
    pub fn volume_series(&self, company_id: &str, months: Option<u32>) -> Result<VolumeSeries> {
        let months = months.unwrap_or(self.config.defaults.months);
        let now = self.clock.now();
        let bids = self.source.bids_by_company(company_id)?;

        let series = volume_series(&bids, now, months)?;
        tracing::debug!(company_id, months, bids = bids.len(), "Computed volume series");
        Ok(series)
    }

    pub fn status_distribution(&self, company_id: &str) -> Result<StatusDistribution> {
        let bids = self.source.bids_by_company(company_id)?;

        let distribution = status_distribution(&bids);
        tracing::debug!(company_id, bids = bids.len(), "Computed status distribution");
        Ok(distribution)
    }

    pub fn headline_statistics(&self, company_id: &str) -> Result<HeadlineStatistics> {
        let now = self.clock.now();
        let bids = self.source.bids_by_company(company_id)?;

        let stats = headline_statistics(&bids, now)?;
        tracing::debug!(company_id, bids = bids.len(), "Computed headline statistics");
        Ok(stats)
    }

    pub fn performance_metrics(&self, company_id: &str) -> Result<PerformanceMetrics> {
        let bids = self.source.bids_by_company(company_id)?;

        let metrics = performance_metrics(&bids, &self.config.placeholders);
        tracing::debug!(
            company_id,
            bids = bids.len(),
            win_rate_by_value = metrics.win_rate_by_value,
            "Computed performance metrics"
        );
        Ok(metrics)
    }

    /// Amount-range trends; `None` uses the configured default timeframe
    pub fn trends_by_category(
        &self,
        company_id: &str,
        timeframe: Option<Timeframe>,
    ) -> Result<CategoryTrends> {
        let timeframe = timeframe.unwrap_or(self.config.defaults.timeframe);
        let now = self.clock.now();
        let bids = self.source.bids_by_company(company_id)?;

        let trends = trends_by_category(&bids, now, timeframe)?;
        tracing::debug!(
            company_id,
            timeframe = %timeframe,
            bids = bids.len(),
            "Computed category trends"
        );
        Ok(trends)
    }

    /// Timelines for awarded tenders whose title contains `project_type`
    pub fn project_timelines(&self, project_type: Option<&str>) -> Result<ProjectTimelines> {
        let filter = ProjectFilter::new(project_type);

        let timelines = project_timelines(self.source.as_ref(), &filter)?;
        tracing::debug!(
            project_type = project_type.unwrap_or("all"),
            projects = timelines.summary.total_projects,
            "Computed project timelines"
        );
        Ok(timelines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{PlaceholderMetrics, RequestDefaults};
    use crate::error::Error;
    use crate::test_utils::{at, sample_snapshot};

    fn engine() -> BidAnalytics {
        BidAnalytics::new(Arc::new(sample_snapshot()))
            .with_clock(Arc::new(FixedClock(at("2024-06-15T12:00:00"))))
    }

    #[test]
    fn test_defaults_apply_when_omitted() {
        let analytics = engine();
        let series = analytics.success_rate_series("c1", None).unwrap();
        assert_eq!(series.labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(series.data, vec![0.0, 0.0, 0.0, 100.0, 0.0, 0.0]);

        let volume = analytics.volume_series("c1", None).unwrap();
        assert_eq!(volume.data, vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_configured_defaults() {
        let config = EngineConfig {
            placeholders: PlaceholderMetrics {
                average_markup: 20.0,
                ..Default::default()
            },
            defaults: RequestDefaults {
                months: 2,
                timeframe: Timeframe::Day,
            },
        };
        let analytics = BidAnalytics::with_config(Arc::new(sample_snapshot()), config)
            .with_clock(Arc::new(FixedClock(at("2024-06-15T12:00:00"))));

        assert_eq!(analytics.volume_series("c1", None).unwrap().data, vec![1, 1]);
        // Only the June bid falls in the trailing 30 days
        let trends = analytics.trends_by_category("c1", None).unwrap();
        assert_eq!(trends.bid_counts, vec![1, 0, 0, 0]);
        assert_eq!(analytics.performance_metrics("c1").unwrap().average_markup, 20.0);
    }

    #[test]
    fn test_company_scoping() {
        let analytics = engine();
        assert_eq!(analytics.status_distribution("c1").unwrap().data, vec![1, 1, 1]);
        assert_eq!(analytics.status_distribution("c2").unwrap().data, vec![1, 1, 0]);
        assert_eq!(analytics.status_distribution("nobody").unwrap().data, vec![0, 0, 0]);
    }

    #[test]
    fn test_performance_and_trends() {
        let analytics = engine();
        // 45k won of 173k bid
        assert_eq!(analytics.performance_metrics("c1").unwrap().win_rate_by_value, 26);

        let trends = analytics
            .trends_by_category("c1", Some(Timeframe::Month))
            .unwrap();
        assert_eq!(trends.bid_counts, vec![1, 1, 0, 1]);
        assert_eq!(trends.success_rates, vec![0.0, 100.0, 0.0, 0.0]);
    }

    #[test]
    fn test_headline_statistics() {
        let stats = engine().headline_statistics("c1").unwrap();
        assert_eq!(stats.total_bids, 3);
        assert_eq!(stats.active_bids, 1);
        assert_eq!(stats.success_rate, 33);
        // Baseline (2024-04-15, 2024-05-15) holds only b3
        assert_eq!(stats.success_rate_change, 33);
        assert_eq!(stats.total_bids_change, 200);
        assert_eq!(stats.active_bids_change, 0);
    }

    #[test]
    fn test_project_timelines() {
        let analytics = engine();
        assert_eq!(
            analytics.project_timelines(None).unwrap().summary.total_projects,
            2
        );
        assert_eq!(
            analytics
                .project_timelines(Some("renovation"))
                .unwrap()
                .project_names,
            vec!["Office Renovation"]
        );
    }

    #[test]
    fn test_zero_months_is_invalid() {
        let err = engine().success_rate_series("c1", Some(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_huge_months_is_invalid() {
        let err = engine().volume_series("c1", Some(u32::MAX)).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(engine().volume_series("c1", Some(MAX_MONTHS)).is_ok());
    }
}
