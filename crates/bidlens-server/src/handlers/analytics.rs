//! Bid analytics handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState, HealthResponse};
use bidlens_core::models::{
    CategoryTrends, HeadlineStatistics, PerformanceMetrics, ProjectTimelines, StatusDistribution,
    SuccessRateSeries, Timeframe, VolumeSeries,
};

/// Query parameters for monthly series
#[derive(Debug, Deserialize)]
pub struct MonthsQuery {
    /// Trailing month count (default from engine config)
    pub months: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TimeframeQuery {
    /// day, week, month, quarter or year; anything else means month
    pub timeframe: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimelinesQuery {
    /// Title substring; "all" or empty disables filtering
    #[serde(rename = "type")]
    pub project_type: Option<String>,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/analytics/bids/success-rate/:company_id
pub async fn success_rate(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
    Query(params): Query<MonthsQuery>,
) -> Result<Json<SuccessRateSeries>, AppError> {
    let series = state
        .analytics
        .success_rate_series(&company_id, params.months)?;
    Ok(Json(series))
}

/// GET /api/analytics/bids/volume/:company_id
pub async fn volume(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
    Query(params): Query<MonthsQuery>,
) -> Result<Json<VolumeSeries>, AppError> {
    let series = state.analytics.volume_series(&company_id, params.months)?;
    Ok(Json(series))
}

/// GET /api/analytics/bids/distribution/:company_id
pub async fn distribution(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
) -> Result<Json<StatusDistribution>, AppError> {
    Ok(Json(state.analytics.status_distribution(&company_id)?))
}

/// GET /api/analytics/bids/statistics/:company_id
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
) -> Result<Json<HeadlineStatistics>, AppError> {
    Ok(Json(state.analytics.headline_statistics(&company_id)?))
}

/// GET /api/analytics/bids/performance/:company_id
pub async fn performance(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
) -> Result<Json<PerformanceMetrics>, AppError> {
    Ok(Json(state.analytics.performance_metrics(&company_id)?))
}

/// GET /api/analytics/bids/trends/:company_id
pub async fn trends(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
    Query(params): Query<TimeframeQuery>,
) -> Result<Json<CategoryTrends>, AppError> {
    let timeframe = params.timeframe.as_deref().map(Timeframe::parse_or_default);
    let trends = state.analytics.trends_by_category(&company_id, timeframe)?;
    Ok(Json(trends))
}

/// GET /api/analytics/bids/projects/timelines
pub async fn project_timelines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TimelinesQuery>,
) -> Result<Json<ProjectTimelines>, AppError> {
    let timelines = state
        .analytics
        .project_timelines(params.project_type.as_deref())?;
    Ok(Json(timelines))
}
