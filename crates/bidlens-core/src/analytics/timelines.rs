//! Project duration and budget variance per awarded tender

use crate::clock::parse_timestamp;
use crate::error::{Error, Result};
use crate::models::{ProjectTimelines, Tender, TimelineSummary};
use crate::snapshot::RecordSource;

/// Case-insensitive title substring filter; empty or "all" matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter(Option<String>);

impl ProjectFilter {
    pub fn new(project_type: Option<&str>) -> Self {
        match project_type {
            Some(t) if !t.is_empty() && !t.eq_ignore_ascii_case("all") => {
                Self(Some(t.to_lowercase()))
            }
            _ => Self(None),
        }
    }

    pub fn matches(&self, tender: &Tender) -> bool {
        match &self.0 {
            Some(needle) => tender.title.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

/// Join each matching tender to its first accepted bid
///
/// Tenders without an accepted bid are skipped. A zero budget or an awarded
/// bid without a proposed deadline fails the whole call.
pub fn project_timelines(
    source: &dyn RecordSource,
    filter: &ProjectFilter,
) -> Result<ProjectTimelines> {
    let tenders = source.all_tenders()?;

    let mut report = ProjectTimelines {
        project_names: Vec::new(),
        durations: Vec::new(),
        budgets: Vec::new(),
        actual_costs: Vec::new(),
        budget_variances: Vec::new(),
        summary: TimelineSummary {
            average_duration: 0.0,
            average_budget_variance: 0.0,
            total_projects: 0,
        },
    };

    for tender in tenders.iter().filter(|t| filter.matches(t)) {
        if tender.bids_count != tender.bid_ids.len() {
            tracing::warn!(
                tender_id = %tender.id,
                bids_count = tender.bids_count,
                listed = tender.bid_ids.len(),
                "Tender bidsCount disagrees with its bid list"
            );
        }

        let bids = source.bids_by_ids(&tender.bid_ids)?;
        let mut accepted = bids.iter().filter(|b| b.is_accepted());
        let Some(awarded) = accepted.next() else {
            continue;
        };
        let others = accepted.count();
        if others > 0 {
            tracing::warn!(
                tender_id = %tender.id,
                accepted = others + 1,
                bid_id = %awarded.id,
                "Tender has several accepted bids, using the first"
            );
        }

        let created = parse_timestamp("tender.createdAt", &tender.created_at)?;
        let deadline = awarded.proposed_deadline.as_deref().ok_or_else(|| {
            Error::DataFormat(format!(
                "accepted bid {} on tender {} has no proposedDeadline",
                awarded.id, tender.id
            ))
        })?;
        let deadline = parse_timestamp("proposedDeadline", deadline)?;

        if tender.budget == 0.0 {
            return Err(Error::DivisionByZero(format!(
                "tender {} has a zero budget",
                tender.id
            )));
        }

        report.project_names.push(tender.title.clone());
        report.durations.push((deadline - created).num_days());
        report.budgets.push(tender.budget);
        report.actual_costs.push(awarded.amount);
        report
            .budget_variances
            .push((awarded.amount - tender.budget) / tender.budget * 100.0);
    }

    let count = report.project_names.len();
    report.summary = TimelineSummary {
        average_duration: mean(report.durations.iter().map(|d| *d as f64), count),
        average_budget_variance: mean(report.budget_variances.iter().copied(), count),
        total_projects: count,
    };

    Ok(report)
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        values.sum::<f64>() / count as f64
    }
}
