//! Bidlens Web Server
//!
//! Axum-based REST API serving bid analytics aggregates to dashboard
//! clients. Every request is computed fresh from the shared engine.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use bidlens_core::BidAnalytics;

mod handlers;

/// CORS preflight cache lifetime
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read `BIDLENS_CORS_ORIGINS` (comma-separated)
    pub fn from_env() -> Self {
        let allowed_origins = std::env::var("BIDLENS_CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();
        Self { allowed_origins }
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Shared application state
pub struct AppState {
    pub analytics: BidAnalytics,
}

/// Health response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Create the application router
pub fn create_router(analytics: BidAnalytics, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { analytics });

    let bid_routes = Router::new()
        .route("/success-rate/:company_id", get(handlers::success_rate))
        .route("/volume/:company_id", get(handlers::volume))
        .route("/distribution/:company_id", get(handlers::distribution))
        .route("/statistics/:company_id", get(handlers::statistics))
        .route("/performance/:company_id", get(handlers::performance))
        .route("/trends/:company_id", get(handlers::trends))
        .route("/projects/timelines", get(handlers::project_timelines));

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .nest("/analytics/bids", bid_routes);

    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };
    let cors = cors
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(CORS_MAX_AGE);

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(
    analytics: BidAnalytics,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        info!("CORS open to any origin (set BIDLENS_CORS_ORIGINS to restrict)");
    }

    let app = create_router(analytics, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn unprocessable(msg: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<bidlens_core::Error> for AppError {
    fn from(err: bidlens_core::Error) -> Self {
        use bidlens_core::Error;

        match err {
            Error::InvalidData(_) => Self::bad_request(&err.to_string()),
            Error::DataFormat(_) | Error::DivisionByZero(_) => {
                Self::unprocessable(&err.to_string())
            }
            other => Self::internal(other.into()),
        }
    }
}
