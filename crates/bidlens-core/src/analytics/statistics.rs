//! Headline statistics with month-over-month change
//!
//! The headline figures are computed over every bid the company ever made.
//! Each change compares that all-time figure against the same metric
//! computed over the previous calendar-month period only, i.e. bids created
//! strictly between `now - 2 months` and `now - 1 month`.

use chrono::NaiveDateTime;

use super::ratios::{average_amount, percent_change, round_half_up, success_rate};
use super::window::months_before;
use crate::clock::parse_timestamp;
use crate::error::Result;
use crate::models::{Bid, HeadlineStatistics};

/// Raw (unrounded) figures for one set of bids
#[derive(Debug, Clone, Copy, PartialEq)]
struct Figures {
    success_rate: f64,
    average_bid: f64,
    total_bids: usize,
    active_bids: usize,
}

impl Figures {
    fn of(bids: &[&Bid]) -> Self {
        Self {
            success_rate: success_rate(bids),
            average_bid: average_amount(bids),
            total_bids: bids.len(),
            active_bids: bids.iter().filter(|b| b.is_pending()).count(),
        }
    }
}

/// Bids created in the open interval `(now - 2 months, now - 1 month)`
fn previous_period<'a>(bids: &'a [Bid], now: NaiveDateTime) -> Result<Vec<&'a Bid>> {
    let start = months_before(now, 2);
    let end = months_before(now, 1);

    let mut previous = Vec::new();
    for bid in bids {
        let created = parse_timestamp("createdAt", &bid.created_at)?;
        if created > start && created < end {
            previous.push(bid);
        }
    }
    Ok(previous)
}

/// Compute headline statistics for a company's bids
pub fn headline_statistics(bids: &[Bid], now: NaiveDateTime) -> Result<HeadlineStatistics> {
    let all: Vec<&Bid> = bids.iter().collect();
    let current = Figures::of(&all);
    let previous = Figures::of(&previous_period(bids, now)?);

    Ok(HeadlineStatistics {
        success_rate: round_half_up(current.success_rate),
        // Absolute points, not relative percent
        success_rate_change: round_half_up(current.success_rate - previous.success_rate),
        average_bid: round_half_up(current.average_bid),
        average_bid_change: round_half_up(percent_change(
            current.average_bid,
            previous.average_bid,
        )),
        total_bids: current.total_bids,
        total_bids_change: round_half_up(percent_change(
            current.total_bids as f64,
            previous.total_bids as f64,
        )),
        active_bids: current.active_bids,
        active_bids_change: round_half_up(percent_change(
            current.active_bids as f64,
            previous.active_bids as f64,
        )),
    })
}
