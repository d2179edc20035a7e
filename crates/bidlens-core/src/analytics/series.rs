//! Monthly success-rate and volume series

use chrono::NaiveDateTime;

use super::ratios::success_rate;
use super::window::bucket_by_month;
use crate::error::Result;
use crate::models::{Bid, SuccessRateSeries, VolumeSeries};

/// Share of accepted bids per month over the trailing `months`
pub fn success_rate_series(
    bids: &[Bid],
    now: NaiveDateTime,
    months: u32,
) -> Result<SuccessRateSeries> {
    let buckets = bucket_by_month(bids, now, months)?;

    let mut labels = Vec::with_capacity(buckets.len());
    let mut data = Vec::with_capacity(buckets.len());
    for bucket in &buckets {
        labels.push(bucket.label.clone());
        data.push(success_rate(&bucket.bids));
    }

    Ok(SuccessRateSeries { labels, data })
}

/// Number of bids per month over the trailing `months`
pub fn volume_series(bids: &[Bid], now: NaiveDateTime, months: u32) -> Result<VolumeSeries> {
    let buckets = bucket_by_month(bids, now, months)?;

    let labels = buckets.iter().map(|b| b.label.clone()).collect();
    let data = buckets.iter().map(|b| b.bids.len()).collect();

    Ok(VolumeSeries { labels, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BidStatus;
    use crate::test_utils::{at, bid};

    #[test]
    fn test_single_accepted_bid_one_month() {
        let now = at("2024-01-20T12:00:00");
        let bids = vec![bid("b1", 5000.0, BidStatus::Accepted, "2024-01-05T09:00:00")];

        let series = success_rate_series(&bids, now, 1).unwrap();
        assert_eq!(series.labels, vec!["Jan"]);
        assert_eq!(series.data, vec![100.0]);
    }

    #[test]
    fn test_success_rate_per_month() {
        let now = at("2024-03-15T12:00:00");
        let bids = vec![
            bid("b1", 1.0, BidStatus::Accepted, "2024-03-01T00:00:00"),
            bid("b2", 1.0, BidStatus::Rejected, "2024-03-02T00:00:00"),
            bid("b3", 1.0, BidStatus::Rejected, "2024-02-02T00:00:00"),
            bid("b4", 1.0, BidStatus::Accepted, "2024-01-20T00:00:00"),
        ];

        let series = success_rate_series(&bids, now, 3).unwrap();
        assert_eq!(series.labels, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(series.data, vec![100.0, 0.0, 50.0]);
    }

    #[test]
    fn test_empty_months_are_zero() {
        let now = at("2024-03-15T12:00:00");
        let series = success_rate_series(&[], now, 6).unwrap();
        assert_eq!(series.labels.len(), 6);
        assert_eq!(series.data, vec![0.0; 6]);

        let volume = volume_series(&[], now, 6).unwrap();
        assert_eq!(volume.data, vec![0; 6]);
    }

    #[test]
    fn test_volume_series() {
        let now = at("2024-03-15T12:00:00");
        let bids = vec![
            bid("b1", 1.0, BidStatus::Pending, "2024-03-01T00:00:00"),
            bid("b2", 1.0, BidStatus::Pending, "2024-03-02T00:00:00"),
            bid("b3", 1.0, BidStatus::Other, "2024-02-02T00:00:00"),
        ];

        let volume = volume_series(&bids, now, 2).unwrap();
        assert_eq!(volume.labels, vec!["Feb", "Mar"]);
        assert_eq!(volume.data, vec![1, 2]);
    }

    #[test]
    fn test_series_lengths_match_months() {
        let now = at("2024-03-15T12:00:00");
        let bids = vec![bid("b1", 1.0, BidStatus::Accepted, "2024-03-01T00:00:00")];
        for months in [1, 6, 12, 24] {
            let rates = success_rate_series(&bids, now, months).unwrap();
            assert_eq!(rates.labels.len(), months as usize);
            assert_eq!(rates.data.len(), months as usize);
            assert!(rates.data.iter().all(|r| (0.0..=100.0).contains(r)));

            let volume = volume_series(&bids, now, months).unwrap();
            assert_eq!(volume.data.len(), months as usize);
        }
    }

    #[test]
    fn test_series_is_deterministic() {
        let now = at("2024-03-15T12:00:00");
        let bids = vec![
            bid("b1", 1.0, BidStatus::Accepted, "2024-03-01T00:00:00"),
            bid("b2", 1.0, BidStatus::Rejected, "2024-01-02T00:00:00"),
        ];
        assert_eq!(
            success_rate_series(&bids, now, 6).unwrap(),
            success_rate_series(&bids, now, 6).unwrap()
        );
    }
}
