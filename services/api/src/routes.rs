use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use backoffice::catalog::{items_router, ItemService, ItemsRepository};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Serialize)]
pub(crate) struct HealthReport {
    pub(crate) status: &'static str,
    pub(crate) checks: Vec<HealthCheckEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthCheckEntry {
    pub(crate) name: &'static str,
    pub(crate) status: &'static str,
    pub(crate) duration: String,
    pub(crate) exception: String,
}

pub(crate) fn with_item_routes(
    service: Arc<ItemService<dyn ItemsRepository>>,
) -> axum::Router {
    items_router(service)
        .route("/health/live", axum::routing::get(liveness_endpoint))
        .route("/health/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

/// Runs no checks; answering at all is proof of life.
pub(crate) async fn liveness_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "status": "Healthy" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if !state.readiness.load(Ordering::Relaxed) {
        let payload = HealthReport {
            status: "Unhealthy",
            checks: Vec::new(),
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(payload));
    }

    let started = Instant::now();
    let outcome = state.store.check_health().await;
    let duration = format!("{:?}", started.elapsed());

    let (status, entry) = match outcome {
        Ok(()) => (
            StatusCode::OK,
            HealthCheckEntry {
                name: "store",
                status: "Healthy",
                duration,
                exception: "none".to_string(),
            },
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthCheckEntry {
                name: "store",
                status: "Unhealthy",
                duration,
                exception: err.to_string(),
            },
        ),
    };

    let payload = HealthReport {
        status: entry.status,
        checks: vec![entry],
    };
    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
