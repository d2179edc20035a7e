//! Report command implementations

use anyhow::Result;
use bidlens_core::{BidAnalytics, Timeframe};
use serde::Serialize;

use super::truncate;

/// Width of the bar column in series tables
const BAR_WIDTH: usize = 30;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Horizontal bar scaled against `max`
pub fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.clamp(1, BAR_WIDTH))
}

pub fn cmd_report_success_rate(
    analytics: &BidAnalytics,
    company: &str,
    months: Option<u32>,
    json: bool,
) -> Result<()> {
    let series = analytics.success_rate_series(company, months)?;
    if json {
        return print_json(&series);
    }

    println!();
    println!("📈 Success Rate: {}", company);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:6} │ {:>7} │", "Month", "Rate");
    println!("   ───────┼─────────┼────────────────────────────────");

    for (label, rate) in series.labels.iter().zip(&series.data) {
        println!("   {:6} │ {:>6.1}% │ {}", label, rate, bar(*rate, 100.0));
    }

    Ok(())
}

pub fn cmd_report_volume(
    analytics: &BidAnalytics,
    company: &str,
    months: Option<u32>,
    json: bool,
) -> Result<()> {
    let series = analytics.volume_series(company, months)?;
    if json {
        return print_json(&series);
    }

    println!();
    println!("📊 Bid Volume: {}", company);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:6} │ {:>5} │", "Month", "Bids");
    println!("   ───────┼───────┼────────────────────────────────");

    let max = series.data.iter().copied().max().unwrap_or(0) as f64;
    for (label, count) in series.labels.iter().zip(&series.data) {
        println!("   {:6} │ {:>5} │ {}", label, count, bar(*count as f64, max));
    }

    let total: usize = series.data.iter().sum();
    println!("   ───────┼───────┼────────────────────────────────");
    println!("   {:6} │ {:>5} │", "Total", total);

    Ok(())
}

pub fn cmd_report_distribution(analytics: &BidAnalytics, company: &str, json: bool) -> Result<()> {
    let dist = analytics.status_distribution(company)?;
    if json {
        return print_json(&dist);
    }

    println!();
    println!("🥧 Bid Outcomes: {}", company);
    println!("   ─────────────────────────────────────────────────────────────");

    let total: usize = dist.data.iter().sum();
    if total == 0 {
        println!("   No bids found.");
        return Ok(());
    }

    println!("   {:8} │ {:>5} │ {:>6}", "Outcome", "Count", "%");
    println!("   ─────────┼───────┼────────");
    for (label, count) in dist.labels.iter().zip(&dist.data) {
        println!(
            "   {:8} │ {:>5} │ {:>5.1}%",
            label,
            count,
            *count as f64 / total as f64 * 100.0
        );
    }

    Ok(())
}

/// Signed change with an arrow
fn change(value: i64) -> String {
    match value {
        v if v > 0 => format!("▲ {}", v),
        v if v < 0 => format!("▼ {}", v.abs()),
        _ => "–".to_string(),
    }
}

pub fn cmd_report_statistics(analytics: &BidAnalytics, company: &str, json: bool) -> Result<()> {
    let stats = analytics.headline_statistics(company)?;
    if json {
        return print_json(&stats);
    }

    println!();
    println!("📋 Bid Statistics: {}", company);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:14} │ {:>10} │ {:>10}", "Metric", "Value", "Change");
    println!("   ───────────────┼────────────┼────────────");
    println!(
        "   {:14} │ {:>9}% │ {:>10}",
        "Success rate",
        stats.success_rate,
        format!("{} pts", change(stats.success_rate_change))
    );
    println!(
        "   {:14} │ {:>10} │ {:>10}",
        "Average bid",
        stats.average_bid,
        format!("{}%", change(stats.average_bid_change))
    );
    println!(
        "   {:14} │ {:>10} │ {:>10}",
        "Total bids",
        stats.total_bids,
        format!("{}%", change(stats.total_bids_change))
    );
    println!(
        "   {:14} │ {:>10} │ {:>10}",
        "Active bids",
        stats.active_bids,
        format!("{}%", change(stats.active_bids_change))
    );

    Ok(())
}

pub fn cmd_report_performance(analytics: &BidAnalytics, company: &str, json: bool) -> Result<()> {
    let metrics = analytics.performance_metrics(company)?;
    if json {
        return print_json(&metrics);
    }

    println!();
    println!("🏆 Performance: {}", company);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Win rate by value:     {}%", metrics.win_rate_by_value);
    println!(
        "   \x1b[2mAvg response time:     {} days\x1b[0m",
        metrics.average_response_time
    );
    println!(
        "   \x1b[2mCompetitive index:     {}\x1b[0m",
        metrics.competitive_index
    );
    println!("   \x1b[2mAverage markup:        {}%\x1b[0m", metrics.average_markup);

    Ok(())
}

pub fn cmd_report_trends(
    analytics: &BidAnalytics,
    company: &str,
    timeframe: Option<&str>,
    json: bool,
) -> Result<()> {
    let timeframe = timeframe.map(Timeframe::parse_or_default);
    let trends = analytics.trends_by_category(company, timeframe)?;
    if json {
        return print_json(&trends);
    }

    let shown = timeframe.unwrap_or(analytics.config().defaults.timeframe);
    println!();
    println!("📈 Bid Size Trends: {} ({})", company, shown);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:22} │ {:>5} │ {:>7} │ {:>12}",
        "Category", "Bids", "Won", "Avg Value"
    );
    println!("   ───────────────────────┼───────┼─────────┼──────────────");

    for i in 0..trends.categories.len() {
        println!(
            "   {:22} │ {:>5} │ {:>6.1}% │ {:>12.2}",
            trends.categories[i],
            trends.bid_counts[i],
            trends.success_rates[i],
            trends.average_values[i]
        );
    }

    Ok(())
}

pub fn cmd_report_timelines(
    analytics: &BidAnalytics,
    project_type: Option<&str>,
    json: bool,
) -> Result<()> {
    let report = analytics.project_timelines(project_type)?;
    if json {
        return print_json(&report);
    }

    println!();
    println!("🏗️  Project Timelines");
    if let Some(filter) = project_type {
        println!("   Filter: {}", filter);
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if report.project_names.is_empty() {
        println!("   No awarded projects found.");
        return Ok(());
    }

    println!(
        "   {:24} │ {:>6} │ {:>12} │ {:>12} │ {:>8}",
        "Project", "Days", "Budget", "Actual", "Var"
    );
    println!("   ─────────────────────────┼────────┼──────────────┼──────────────┼──────────");

    for i in 0..report.project_names.len() {
        println!(
            "   {:24} │ {:>6} │ {:>12.2} │ {:>12.2} │ {:>+7.1}%",
            truncate(&report.project_names[i], 24),
            report.durations[i],
            report.budgets[i],
            report.actual_costs[i],
            report.budget_variances[i]
        );
    }

    println!("   ─────────────────────────┼────────┼──────────────┼──────────────┼──────────");
    println!(
        "   {} projects, average {:.1} days, average variance {:+.1}%",
        report.summary.total_projects,
        report.summary.average_duration,
        report.summary.average_budget_variance
    );

    Ok(())
}
