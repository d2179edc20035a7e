//! Record access for the engine
//!
//! [`RecordSource`] is the read-only seam between the engine and whatever
//! owns the bids and tenders. [`Snapshot`] is the in-memory implementation:
//! a JSON export of both collections, loaded once and shared.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{null_as_default, Bid, Tender};

/// Read-only access to bid and tender records
pub trait RecordSource: Send + Sync {
    /// All bids placed by `company_id`
    fn bids_by_company(&self, company_id: &str) -> Result<Vec<Bid>>;

    /// Every tender
    fn all_tenders(&self) -> Result<Vec<Tender>>;

    /// Bids with the given ids, in the order of `ids`; unknown ids are skipped
    fn bids_by_ids(&self, ids: &[String]) -> Result<Vec<Bid>>;
}

/// Full record set exported from the procurement backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bids: Vec<Bid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenders: Vec<Tender>,
}

impl Snapshot {
    /// Read a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read snapshot {}: {}", path.display(), e),
            ))
        })?;
        let snapshot = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            bids = snapshot.bids.len(),
            tenders = snapshot.tenders.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Report consistency problems without rejecting the data
    ///
    /// The engine tolerates every issue listed here; they are surfaced so
    /// operators can fix the export.
    pub fn check(&self) -> Vec<SnapshotIssue> {
        let bids: HashMap<&str, &Bid> = self.bids.iter().map(|b| (b.id.as_str(), b)).collect();
        let mut issues = Vec::new();

        for bid in &self.bids {
            if bid.amount < 0.0 {
                issues.push(SnapshotIssue::NegativeAmount {
                    bid_id: bid.id.clone(),
                    amount: bid.amount,
                });
            }
        }

        for tender in &self.tenders {
            if tender.bids_count != tender.bid_ids.len() {
                issues.push(SnapshotIssue::BidsCountMismatch {
                    tender_id: tender.id.clone(),
                    bids_count: tender.bids_count,
                    listed: tender.bid_ids.len(),
                });
            }

            let mut seen = HashSet::new();
            let mut associated = Vec::new();
            for id in &tender.bid_ids {
                if !seen.insert(id.as_str()) {
                    continue;
                }
                match bids.get(id.as_str()) {
                    Some(bid) => associated.push(*bid),
                    None => issues.push(SnapshotIssue::DanglingBidId {
                        tender_id: tender.id.clone(),
                        bid_id: id.clone(),
                    }),
                }
            }

            let lowest = associated.iter().map(|b| b.amount).reduce(f64::min);
            if lowest != tender.lowest_bid {
                issues.push(SnapshotIssue::LowestBidMismatch {
                    tender_id: tender.id.clone(),
                    recorded: tender.lowest_bid,
                    actual: lowest,
                });
            }

            let accepted = associated.iter().filter(|b| b.is_accepted()).count();
            if accepted > 1 {
                issues.push(SnapshotIssue::MultipleAccepted {
                    tender_id: tender.id.clone(),
                    count: accepted,
                });
            }
        }

        issues
    }
}

impl RecordSource for Snapshot {
    fn bids_by_company(&self, company_id: &str) -> Result<Vec<Bid>> {
        Ok(self
            .bids
            .iter()
            .filter(|b| b.company_id == company_id)
            .cloned()
            .collect())
    }

    fn all_tenders(&self) -> Result<Vec<Tender>> {
        Ok(self.tenders.clone())
    }

    fn bids_by_ids(&self, ids: &[String]) -> Result<Vec<Bid>> {
        let by_id: HashMap<&str, &Bid> = self.bids.iter().map(|b| (b.id.as_str(), b)).collect();
        Ok(ids
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).map(|b| (*b).clone()))
            .collect())
    }
}

/// A consistency problem found by [`Snapshot::check`]
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotIssue {
    BidsCountMismatch {
        tender_id: String,
        bids_count: usize,
        listed: usize,
    },
    LowestBidMismatch {
        tender_id: String,
        recorded: Option<f64>,
        actual: Option<f64>,
    },
    DanglingBidId {
        tender_id: String,
        bid_id: String,
    },
    MultipleAccepted {
        tender_id: String,
        count: usize,
    },
    NegativeAmount {
        bid_id: String,
        amount: f64,
    },
}

fn fmt_amount(amount: Option<f64>) -> String {
    amount.map_or_else(|| "none".to_string(), |a| format!("{:.2}", a))
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BidsCountMismatch {
                tender_id,
                bids_count,
                listed,
            } => write!(
                f,
                "tender {}: bidsCount is {} but {} bid ids are listed",
                tender_id, bids_count, listed
            ),
            Self::LowestBidMismatch {
                tender_id,
                recorded,
                actual,
            } => write!(
                f,
                "tender {}: lowestBid is {} but the lowest associated bid is {}",
                tender_id,
                fmt_amount(*recorded),
                fmt_amount(*actual)
            ),
            Self::DanglingBidId { tender_id, bid_id } => {
                write!(f, "tender {}: bid {} does not exist", tender_id, bid_id)
            }
            Self::MultipleAccepted { tender_id, count } => write!(
                f,
                "tender {}: {} accepted bids (the first one is used)",
                tender_id, count
            ),
            Self::NegativeAmount { bid_id, amount } => {
                write!(f, "bid {}: negative amount {:.2}", bid_id, amount)
            }
        }
    }
}
