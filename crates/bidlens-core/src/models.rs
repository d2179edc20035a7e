//! Domain models for Bidlens

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ========== Record Models ==========

/// Lifecycle status of a bid
///
/// Transitions (pending -> accepted | rejected) are enforced by whoever owns
/// the records; the engine only reads them. Status strings outside the known
/// three, or a `null` status, deserialize to `Other` and are ignored by
/// every calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
    #[default]
    #[serde(other)]
    Other,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for BidStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "Unknown bid status: {} (valid: pending, accepted, rejected)",
                s
            )),
        }
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A company's offer against a tender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub company_id: String,
    pub tender_id: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: BidStatus,
    /// ISO-8601 timestamp, parsed on demand by the engine
    pub created_at: String,
    /// Only required for accepted bids that feed timeline analysis
    #[serde(default)]
    pub proposed_deadline: Option<String>,
}

impl Bid {
    pub fn is_accepted(&self) -> bool {
        self.status == BidStatus::Accepted
    }

    pub fn is_pending(&self) -> bool {
        self.status == BidStatus::Pending
    }
}

/// A procurement request that receives bids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub budget: f64,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub created_at: String,
    /// Associated bids, in the order the record source returns them
    #[serde(default, deserialize_with = "null_as_default")]
    pub bid_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bids_count: usize,
    #[serde(default)]
    pub lowest_bid: Option<f64>,
}

// ========== Request Parameters ==========

/// Trend window selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Lenient parse: unknown tokens fall back to the month window
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_: String| {
            tracing::debug!(timeframe = s, "Unknown timeframe, using month window");
            Self::default()
        })
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(format!(
                "Unknown timeframe: {} (valid: day, week, month, quarter, year)",
                s
            )),
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ========== Report Models ==========

/// Chart-ready series: parallel labels and values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport<T> {
    pub labels: Vec<String>,
    pub data: Vec<T>,
}

/// Monthly success rate in percent (0-100)
pub type SuccessRateSeries = SeriesReport<f64>;

/// Monthly bid counts
pub type VolumeSeries = SeriesReport<usize>;

/// Won / Lost / Pending counts
pub type StatusDistribution = SeriesReport<usize>;

/// Headline figures with their change against the previous month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineStatistics {
    pub success_rate: i64,
    pub success_rate_change: i64,
    pub average_bid: i64,
    pub average_bid_change: i64,
    pub total_bids: usize,
    pub total_bids_change: i64,
    pub active_bids: usize,
    pub active_bids_change: i64,
}

/// Performance figures; only `win_rate_by_value` is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Days (configured placeholder)
    pub average_response_time: f64,
    pub win_rate_by_value: i64,
    /// Configured placeholder
    pub competitive_index: f64,
    /// Percent (configured placeholder)
    pub average_markup: f64,
}

/// Amount-range histogram over a trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTrends {
    pub categories: Vec<String>,
    pub bid_counts: Vec<usize>,
    pub success_rates: Vec<f64>,
    pub average_values: Vec<f64>,
}

/// Per-project timeline and cost data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTimelines {
    pub project_names: Vec<String>,
    pub durations: Vec<i64>,
    pub budgets: Vec<f64>,
    pub actual_costs: Vec<f64>,
    pub budget_variances: Vec<f64>,
    pub summary: TimelineSummary,
}

/// Averages over all qualifying projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub average_duration: f64,
    pub average_budget_variance: f64,
    pub total_projects: usize,
}
