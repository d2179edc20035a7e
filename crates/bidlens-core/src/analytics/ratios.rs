//! Shared ratio arithmetic
//!
//! Every ratio with a zero denominator evaluates to 0. Operand order
//! (divide first, then scale by 100) is kept stable so results are
//! reproducible to the last bit.

use crate::models::Bid;

/// Percentage of accepted bids; 0 for an empty set
pub fn success_rate(bids: &[&Bid]) -> f64 {
    if bids.is_empty() {
        return 0.0;
    }
    let accepted = bids.iter().filter(|b| b.is_accepted()).count();
    accepted as f64 / bids.len() as f64 * 100.0
}

/// Mean bid amount; 0 for an empty set
pub fn average_amount(bids: &[&Bid]) -> f64 {
    if bids.is_empty() {
        return 0.0;
    }
    bids.iter().map(|b| b.amount).sum::<f64>() / bids.len() as f64
}

/// Relative change of `current` against `baseline`, in percent
pub fn percent_change(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (current - baseline) / baseline * 100.0
    }
}

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> i64 {
    let nearest = value.round();
    if (nearest - value).abs() == 0.5 {
        value.ceil() as i64
    } else {
        nearest as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BidStatus;
    use crate::test_utils::bid;

    #[test]
    fn test_success_rate() {
        let bids = vec![
            bid("b1", 10.0, BidStatus::Accepted, "2024-01-01T00:00:00"),
            bid("b2", 10.0, BidStatus::Rejected, "2024-01-01T00:00:00"),
            bid("b3", 10.0, BidStatus::Pending, "2024-01-01T00:00:00"),
        ];
        let refs: Vec<&Bid> = bids.iter().collect();
        let rate = success_rate(&refs);
        assert!((rate - 33.333333333333336).abs() < 1e-9);
        assert_eq!(success_rate(&[]), 0.0);
    }

    #[test]
    fn test_average_amount() {
        let bids = vec![
            bid("b1", 100.0, BidStatus::Accepted, "2024-01-01T00:00:00"),
            bid("b2", 300.0, BidStatus::Rejected, "2024-01-01T00:00:00"),
        ];
        let refs: Vec<&Bid> = bids.iter().collect();
        assert_eq!(average_amount(&refs), 200.0);
        assert_eq!(average_amount(&[]), 0.0);
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, 100.0), 50.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
        assert_eq!(percent_change(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(33.33), 33);
        assert_eq!(round_half_up(66.67), 67);
        assert_eq!(round_half_up(0.0), 0);
    }
}
