//! Won / Lost / Pending histogram

use crate::models::{Bid, BidStatus, StatusDistribution};

/// Fixed chart labels, in output order
pub const DISTRIBUTION_LABELS: [&str; 3] = ["Won", "Lost", "Pending"];

/// Count bids by status over the full, undated collection
///
/// Statuses outside accepted/rejected/pending are not counted anywhere.
pub fn status_distribution(bids: &[Bid]) -> StatusDistribution {
    let count = |status: BidStatus| bids.iter().filter(|b| b.status == status).count();

    StatusDistribution {
        labels: DISTRIBUTION_LABELS.iter().map(|l| l.to_string()).collect(),
        data: vec![
            count(BidStatus::Accepted),
            count(BidStatus::Rejected),
            count(BidStatus::Pending),
        ],
    }
}
