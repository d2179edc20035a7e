//! Amount-range categorization over a timeframe window

use chrono::NaiveDateTime;

use super::ratios::{average_amount, success_rate};
use super::window::{filter_in_window, TimeWindow};
use crate::error::Result;
use crate::models::{Bid, CategoryTrends, Timeframe};

/// Bid amount ranges, lower bound inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendCategory {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl TrendCategory {
    /// All categories in output order
    pub fn all() -> &'static [TrendCategory] {
        &[Self::Small, Self::Medium, Self::Large, Self::VeryLarge]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (< $10K)",
            Self::Medium => "Medium ($10K - $50K)",
            Self::Large => "Large ($50K - $100K)",
            Self::VeryLarge => "Very Large (> $100K)",
        }
    }

    /// `[min, max)` amount bounds
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Small => (f64::NEG_INFINITY, 10_000.0),
            Self::Medium => (10_000.0, 50_000.0),
            Self::Large => (50_000.0, 100_000.0),
            Self::VeryLarge => (100_000.0, f64::INFINITY),
        }
    }

    pub fn for_amount(amount: f64) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|c| {
                let (min, max) = c.bounds();
                amount >= min && amount < max
            })
            // Only NaN escapes every range
            .unwrap_or(Self::Small)
    }
}

/// Count, success rate and mean amount per category for bids inside the
/// trailing window selected by `timeframe`
pub fn trends_by_category(
    bids: &[Bid],
    now: NaiveDateTime,
    timeframe: Timeframe,
) -> Result<CategoryTrends> {
    let window = TimeWindow::for_timeframe(now, timeframe);
    let recent = filter_in_window(bids, &window)?;

    let categories = TrendCategory::all();
    let mut report = CategoryTrends {
        categories: Vec::with_capacity(categories.len()),
        bid_counts: Vec::with_capacity(categories.len()),
        success_rates: Vec::with_capacity(categories.len()),
        average_values: Vec::with_capacity(categories.len()),
    };

    for category in categories {
        let members: Vec<&Bid> = recent
            .iter()
            .copied()
            .filter(|b| TrendCategory::for_amount(b.amount) == *category)
            .collect();

        report.categories.push(category.label().to_string());
        report.bid_counts.push(members.len());
        report.success_rates.push(success_rate(&members));
        report.average_values.push(average_amount(&members));
    }

    Ok(report)
}
