//! Integration tests for the exporter HTTP endpoints
//!
//! These rebuild the binary's router shape against a fixture-backed
//! source and exercise one full scrape through the Prometheus text
//! encoding.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use exporter_lib::source::fixture::{SAMPLE_TASK_METADATA, SAMPLE_TASK_STATS};
use exporter_lib::{Source, SourceError, TaskCollector, TaskMetadata, UsageSampleSet};
use prometheus::{Encoder, Registry, TextEncoder};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

#[derive(Clone)]
struct AppState {
    registry: Registry,
    source: Arc<dyn Source>,
}

/// Fixture-backed source; `None` simulates a fetch failure.
struct StaticSource {
    metadata: Option<TaskMetadata>,
    stats: Option<UsageSampleSet>,
}

impl StaticSource {
    fn fixture() -> Self {
        Self {
            metadata: Some(serde_json::from_str(SAMPLE_TASK_METADATA).unwrap()),
            stats: Some(serde_json::from_str(SAMPLE_TASK_STATS).unwrap()),
        }
    }

    fn failure() -> SourceError {
        SourceError::Status {
            url: "http://test/task".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }
    }
}

impl Source for StaticSource {
    fn metadata(&self) -> Result<TaskMetadata, SourceError> {
        self.metadata.clone().ok_or_else(Self::failure)
    }

    fn stats(&self) -> Result<UsageSampleSet, SourceError> {
        self.stats.clone().ok_or_else(Self::failure)
    }
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let metric_families = state.registry.gather();
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

async fn debug_metadata(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.source.metadata() {
        Ok(metadata) => (StatusCode::OK, Json(metadata)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("getting metadata from source: {}", err) })),
        )
            .into_response(),
    }
}

fn create_test_router(source: StaticSource) -> Router {
    let registry = Registry::new();
    let source: Arc<dyn Source> = Arc::new(source);
    registry
        .register(Box::new(TaskCollector::new(source.clone())))
        .unwrap();
    let state = Arc::new(AppState { registry, source });
    Router::new()
        .route("/metrics", get(metrics))
        .route("/_debug/metadata", get(debug_metadata))
        .with_state(state)
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_metrics_endpoint_returns_prometheus_format() {
    let app = create_test_router(StaticSource::fixture());

    let (status, text) = get_body(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    // Derived gauges for the one normal container.
    assert!(text.contains("# TYPE ecs_container_mem_usage_bytes gauge"));
    assert!(text.contains("ContainerName=\"nginx-curl\""));
    assert!(text.contains("Cluster=\"default\""));
    assert!(text.contains("AvailabilityZone=\"us-east-2b\""));
    assert!(text.contains("ecs_container_mem_max_usage_bytes"));
    assert!(text.contains("ecs_container_mem_limit_bytes"));
    assert!(text.contains("ecs_container_cpu_usage"));

    // The pause container is never reported.
    assert!(!text.contains("~internal~ecs~pause"));

    // Healthy scrape.
    let up_line = text
        .lines()
        .find(|l| l.starts_with("ecs_container_exporter_up"))
        .unwrap();
    assert!(up_line.ends_with(" 1"));
    assert!(!up_line.contains("ContainerName"));
}

#[tokio::test]
async fn test_metrics_endpoint_reports_unhealthy_on_stats_failure() {
    let mut source = StaticSource::fixture();
    source.stats = None;
    let app = create_test_router(source);

    let (status, text) = get_body(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    // Exactly the health gauge, nothing else.
    assert!(!text.contains("ecs_container_mem_usage_bytes"));
    let up_line = text
        .lines()
        .find(|l| l.starts_with("ecs_container_exporter_up"))
        .unwrap();
    assert!(up_line.ends_with(" 0"));
}

#[tokio::test]
async fn test_metrics_endpoint_is_empty_on_metadata_failure() {
    let source = StaticSource {
        metadata: None,
        stats: None,
    };
    let app = create_test_router(source);

    let (status, text) = get_body(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn test_debug_metadata_dumps_raw_payload() {
    let app = create_test_router(StaticSource::fixture());

    let (status, body) = get_body(app, "/_debug/metadata").await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["Cluster"], "default");
    assert_eq!(value["Containers"][1]["Name"], "nginx-curl");
}

#[tokio::test]
async fn test_debug_metadata_reports_source_failure() {
    let source = StaticSource {
        metadata: None,
        stats: None,
    };
    let app = create_test_router(source);

    let (status, body) = get_body(app, "/_debug/metadata").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("getting metadata from source"));
}
