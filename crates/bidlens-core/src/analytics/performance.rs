//! Win rate by value plus configured placeholder figures

use super::ratios::round_half_up;
use crate::config::PlaceholderMetrics;
use crate::models::{Bid, PerformanceMetrics};

/// Share of total bid value that was won, in whole percent
pub fn win_rate_by_value(bids: &[Bid]) -> i64 {
    let total: f64 = bids.iter().map(|b| b.amount).sum();
    if total == 0.0 {
        return 0;
    }
    let won: f64 = bids.iter().filter(|b| b.is_accepted()).map(|b| b.amount).sum();
    round_half_up(won / total * 100.0)
}

pub fn performance_metrics(bids: &[Bid], placeholders: &PlaceholderMetrics) -> PerformanceMetrics {
    PerformanceMetrics {
        average_response_time: placeholders.average_response_time,
        win_rate_by_value: win_rate_by_value(bids),
        competitive_index: placeholders.competitive_index,
        average_markup: placeholders.average_markup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BidStatus;
    use crate::test_utils::bid;

    #[test]
    fn test_win_rate_by_value() {
        let bids = vec![
            bid("b1", 30_000.0, BidStatus::Accepted, "2024-01-01T00:00:00"),
            bid("b2", 50_000.0, BidStatus::Rejected, "2024-01-01T00:00:00"),
            bid("b3", 20_000.0, BidStatus::Pending, "2024-01-01T00:00:00"),
        ];
        assert_eq!(win_rate_by_value(&bids), 30);
    }

    #[test]
    fn test_win_rate_rounds_half_up() {
        let bids = vec![
            bid("b1", 1.0, BidStatus::Accepted, "2024-01-01T00:00:00"),
            bid("b2", 7.0, BidStatus::Rejected, "2024-01-01T00:00:00"),
        ];
        // 12.5%
        assert_eq!(win_rate_by_value(&bids), 13);
    }

    #[test]
    fn test_zero_total_value() {
        assert_eq!(win_rate_by_value(&[]), 0);
        let bids = vec![bid("b1", 0.0, BidStatus::Accepted, "2024-01-01T00:00:00")];
        assert_eq!(win_rate_by_value(&bids), 0);
    }

    #[test]
    fn test_placeholders_passed_through() {
        let placeholders = PlaceholderMetrics {
            average_response_time: 4.0,
            competitive_index: 1.5,
            average_markup: 9.0,
        };
        let metrics = performance_metrics(&[], &placeholders);
        assert_eq!(metrics.average_response_time, 4.0);
        assert_eq!(metrics.competitive_index, 1.5);
        assert_eq!(metrics.average_markup, 9.0);
        assert_eq!(metrics.win_rate_by_value, 0);
    }

    #[test]
    fn test_default_placeholders() {
        let metrics = performance_metrics(&[], &PlaceholderMetrics::default());
        assert_eq!(metrics.average_response_time, 2.5);
        assert_eq!(metrics.competitive_index, 8.5);
        assert_eq!(metrics.average_markup, 15.0);
    }
}
