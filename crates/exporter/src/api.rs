//! HTTP surface: Prometheus exposition plus optional debug routes

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use exporter_lib::source::fixture::{SAMPLE_TASK_METADATA, SAMPLE_TASK_STATS};
use exporter_lib::Source;
use prometheus::{Encoder, Registry, TextEncoder};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
    pub source: Arc<dyn Source>,
}

/// Prometheus metrics endpoint.
///
/// Gathering runs the collection pass, which performs blocking HTTP
/// against the metadata endpoint, so it is moved off the async runtime.
async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let registry = state.registry.clone();
    let encoded = tokio::task::spawn_blocking(move || {
        let metric_families = registry.gather();
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).map(|_| buffer)
    })
    .await;

    match encoded {
        Ok(Ok(buffer)) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            buffer,
        )
            .into_response(),
        Ok(Err(err)) => {
            error!(error = %err, "failed to encode metric families");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(err) => {
            error!(error = %err, "metrics gathering task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Raw dump of the task metadata payload, for operator troubleshooting.
/// No correlation or derivation happens here.
async fn debug_metadata(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let source = state.source.clone();
    match tokio::task::spawn_blocking(move || source.metadata()).await {
        Ok(Ok(metadata)) => (StatusCode::OK, Json(metadata)).into_response(),
        Ok(Err(err)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("getting metadata from source: {}", err) })),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "metadata fetch task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Raw dump of the per-container stats payload.
async fn debug_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let source = state.source.clone();
    match tokio::task::spawn_blocking(move || source.stats()).await {
        Ok(Ok(stats)) => (StatusCode::OK, Json(stats)).into_response(),
        Ok(Err(err)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("getting stats from source: {}", err) })),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "stats fetch task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Create the API router. The debug routes dump raw source payloads and
/// are only mounted when explicitly enabled.
pub fn create_router(state: Arc<AppState>, expose_raw_data: bool) -> Router {
    let mut router = Router::new().route("/metrics", get(metrics));
    if expose_raw_data {
        router = router
            .route("/_debug/metadata", get(debug_metadata))
            .route("/_debug/stats", get(debug_stats));
    }
    router.with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, expose_raw_data: bool, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state, expose_raw_data);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting metrics server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constant-response stand-in for the ECS task metadata service, used in
/// local mode. Always answers with the documented sample payloads.
pub fn fixture_router() -> Router {
    Router::new()
        .route(
            "/task",
            get(|| async { ([("content-type", "application/json")], SAMPLE_TASK_METADATA) }),
        )
        .route(
            "/task/stats",
            get(|| async { ([("content-type", "application/json")], SAMPLE_TASK_STATS) }),
        )
}
