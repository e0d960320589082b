//! HTTP source backed by the ECS task metadata endpoint

use super::Source;
use crate::error::SourceError;
use crate::metadata::TaskMetadata;
use crate::stats::UsageSampleSet;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Requests go to a link-local endpoint and should answer quickly; the
/// timeout bounds a whole scrape to at most two network waits.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A [`Source`] that issues blocking GETs against the task metadata
/// endpoint base URI (`/task` and `/task/stats`).
///
/// The client is blocking because collection runs inside the exposition
/// framework's synchronous collect path; callers on an async runtime
/// dispatch the scrape to a blocking worker.
pub struct MetadataEndpointSource {
    endpoint: String,
    client: Client,
}

impl MetadataEndpointSource {
    /// Create a source for the given base URI with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a source whose individual requests are bounded by `timeout`.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client for the metadata endpoint")?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.endpoint, path);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let body = response.text().map_err(|source| SourceError::Request {
            url: url.clone(),
            source,
        })?;
        if !status.is_success() {
            return Err(SourceError::Status { url, status, body });
        }
        serde_json::from_str(&body).map_err(|source| SourceError::Decode { url, source })
    }
}

impl Source for MetadataEndpointSource {
    fn metadata(&self) -> Result<TaskMetadata, SourceError> {
        self.fetch("/task")
    }

    fn stats(&self) -> Result<UsageSampleSet, SourceError> {
        self.fetch("/task/stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ContainerKind;
    use crate::source::fixture::{SAMPLE_TASK_METADATA, SAMPLE_TASK_STATS};
    use axum::routing::get;
    use axum::Router;
    use std::net::SocketAddr;
    use tokio::runtime::Runtime;

    const NGINX_ID: &str = "43481a6ce4842eec8fe72fc28500c6b52edcc0917f105b83379f88cac1ff3946";

    /// Serve `router` on an ephemeral local port. The returned runtime
    /// keeps the server alive for the duration of the test.
    fn serve(router: Router) -> (SocketAddr, Runtime) {
        let rt = Runtime::new().unwrap();
        let listener = rt
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();
        rt.spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (addr, rt)
    }

    fn fixture_router() -> Router {
        Router::new()
            .route("/task", get(|| async { SAMPLE_TASK_METADATA }))
            .route("/task/stats", get(|| async { SAMPLE_TASK_STATS }))
    }

    #[test]
    fn test_fetches_and_parses_fixture_payloads() {
        let (addr, _rt) = serve(fixture_router());
        let source = MetadataEndpointSource::new(format!("http://{}", addr)).unwrap();

        let meta = source.metadata().unwrap();
        assert_eq!(meta.cluster, "default");
        assert_eq!(meta.family, "nginx");
        assert_eq!(meta.revision, "5");
        assert_eq!(meta.availability_zone.as_deref(), Some("us-east-2b"));
        assert_eq!(meta.containers.len(), 2);
        assert_eq!(meta.containers[0].kind, ContainerKind::CniPause);
        assert_eq!(meta.containers[1].kind, ContainerKind::Normal);
        assert_eq!(meta.containers[1].docker_id, NGINX_ID);

        let stats = source.stats().unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[NGINX_ID].memory_stats.usage, 4390912);
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        // A router without the expected routes answers 404 to everything.
        let (addr, _rt) = serve(Router::new());
        let source = MetadataEndpointSource::new(format!("http://{}", addr)).unwrap();

        match source.metadata() {
            Err(SourceError::Status { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND)
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        let router = Router::new().route("/task", get(|| async { "not json" }));
        let (addr, _rt) = serve(router);
        let source = MetadataEndpointSource::new(format!("http://{}", addr)).unwrap();

        assert!(matches!(
            source.metadata(),
            Err(SourceError::Decode { .. })
        ));
    }

    #[test]
    fn test_unreachable_endpoint_is_a_request_error() {
        let source = MetadataEndpointSource::with_timeout(
            "http://127.0.0.1:9",
            Duration::from_millis(200),
        )
        .unwrap();

        assert!(matches!(source.stats(), Err(SourceError::Request { .. })));
    }
}
