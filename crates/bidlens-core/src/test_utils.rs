//! Test utilities for bidlens-core
//!
//! Record builders and a fixed-time parser shared by unit tests, the
//! integration tests and the server/CLI crates (via the `test-utils` feature).

use chrono::NaiveDateTime;

use crate::models::{Bid, BidStatus, Tender};
use crate::snapshot::Snapshot;

/// Parse `YYYY-MM-DDTHH:MM:SS` into a naive local timestamp
pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|e| panic!("bad test timestamp {s}: {e}"))
}

/// Bid from company `c1` on tender `t1`, without a proposed deadline
pub fn bid(id: &str, amount: f64, status: BidStatus, created_at: &str) -> Bid {
    Bid {
        id: id.to_string(),
        company_id: "c1".to_string(),
        tender_id: "t1".to_string(),
        amount,
        status,
        created_at: created_at.to_string(),
        proposed_deadline: None,
    }
}

/// Same as [`bid`] but for an explicit company
pub fn company_bid(
    company_id: &str,
    id: &str,
    amount: f64,
    status: BidStatus,
    created_at: &str,
) -> Bid {
    Bid {
        company_id: company_id.to_string(),
        ..bid(id, amount, status, created_at)
    }
}

/// Accepted bid on `tender_id` with a proposed deadline
pub fn awarded_bid(id: &str, tender_id: &str, amount: f64, created_at: &str, deadline: &str) -> Bid {
    Bid {
        tender_id: tender_id.to_string(),
        proposed_deadline: Some(deadline.to_string()),
        ..bid(id, amount, BidStatus::Accepted, created_at)
    }
}

/// Open tender with the given associated bid ids
///
/// `bids_count` matches `bid_ids`; `lowest_bid` is left empty and filled in
/// by [`snapshot`].
pub fn tender(id: &str, title: &str, budget: f64, created_at: &str, bid_ids: &[&str]) -> Tender {
    Tender {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        budget,
        deadline: None,
        status: "open".to_string(),
        created_at: created_at.to_string(),
        bid_ids: bid_ids.iter().map(|s| s.to_string()).collect(),
        bids_count: bid_ids.len(),
        lowest_bid: None,
    }
}

/// Consistent snapshot: each tender's `lowest_bid` is derived from `bids`
pub fn snapshot(bids: Vec<Bid>, mut tenders: Vec<Tender>) -> Snapshot {
    for tender in &mut tenders {
        tender.lowest_bid = bids
            .iter()
            .filter(|b| tender.bid_ids.contains(&b.id))
            .map(|b| b.amount)
            .reduce(f64::min);
    }
    Snapshot { bids, tenders }
}

/// A small, well-formed data set for one company (`c1`) with two projects
///
/// Intended for `now = 2024-06-15T12:00:00`.
pub fn sample_snapshot() -> Snapshot {
    let bids = vec![
        awarded_bid(
            "b1",
            "t1",
            45_000.0,
            "2024-04-02T10:00:00",
            "2024-07-01T00:00:00",
        ),
        company_bid("c2", "b2", 48_000.0, BidStatus::Rejected, "2024-04-03T10:00:00"),
        Bid {
            tender_id: "t2".to_string(),
            ..bid("b3", 120_000.0, BidStatus::Rejected, "2024-05-10T09:00:00")
        },
        Bid {
            company_id: "c2".to_string(),
            ..awarded_bid(
                "b4",
                "t2",
                95_000.0,
                "2024-05-11T09:00:00",
                "2024-09-01T00:00:00",
            )
        },
        Bid {
            tender_id: "t3".to_string(),
            ..bid("b5", 8_000.0, BidStatus::Pending, "2024-06-01T08:00:00")
        },
    ];
    let tenders = vec![
        tender(
            "t1",
            "Office Renovation",
            50_000.0,
            "2024-04-01T00:00:00",
            &["b1", "b2"],
        ),
        tender(
            "t2",
            "Bridge Construction",
            100_000.0,
            "2024-05-01T00:00:00",
            &["b3", "b4"],
        ),
        tender(
            "t3",
            "Software License",
            10_000.0,
            "2024-05-20T00:00:00",
            &["b5"],
        ),
    ];
    snapshot(bids, tenders)
}
