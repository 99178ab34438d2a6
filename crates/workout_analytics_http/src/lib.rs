//! HTTP surface for the workout statistics core.

use std::sync::Arc;
use std::time::Duration;

use axum::debug_handler;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use workout_stats::{OverallStatistics, Workout};

pub mod config;
pub mod error;

use config::ServerConfig;
use error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for the `nweeks` parameter: a century of weekly buckets.
pub const MAX_NWEEKS: i64 = 5200;

pub struct AppState {
    pub metrics: PrometheusHandle,
}

#[derive(Debug, Deserialize)]
pub struct AnalyseQuery {
    nweeks: i64,
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("cache-control", "no-cache")],
        Json(serde_json::json!({ "status": "available" })),
    )
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([("content-type", "text/plain; version=0.0.4")], body)
}

#[debug_handler]
async fn analyse(
    Query(params): Query<AnalyseQuery>,
    Json(workouts): Json<Vec<Workout>>,
) -> Result<Json<OverallStatistics>, ApiError> {
    metrics::counter!("analyse_requests_total").increment(1);
    if !(1..=MAX_NWEEKS).contains(&params.nweeks) {
        metrics::counter!("analyse_failures_total").increment(1);
        return Err(ApiError::InvalidWeeks(params.nweeks));
    }
    info!(
        nweeks = params.nweeks,
        workouts = workouts.len(),
        "new analysis request"
    );

    let now = Utc::now().fixed_offset();
    let statistics = workout_stats::aggregate(now, params.nweeks, &workouts).inspect_err(|e| {
        metrics::counter!("analyse_failures_total").increment(1);
        info!(error = %e, "analysis rejected");
    })?;

    Ok(Json(statistics))
}

/// Build the application router. Kept separate from `main` so tests can
/// serve it on an ephemeral port.
pub fn app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/analyse", post(analyse))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}
