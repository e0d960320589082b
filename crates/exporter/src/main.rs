//! ECS task metadata exporter
//!
//! Runs as a sidecar inside an ECS task, scrapes the task metadata
//! endpoint, and republishes derived per-container resource metrics in
//! Prometheus format.

use anyhow::{Context, Result};
use exporter_lib::{MetadataEndpointSource, Source, TaskCollector};
use prometheus::Registry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

/// Fixed address of the in-process stand-in metadata service.
const LOCAL_FIXTURE_ADDR: &str = "127.0.0.1:8912";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting ecs-task-metadata-exporter");

    let config = config::ExporterConfig::load()?;

    let endpoint = if config.local {
        let listener = tokio::net::TcpListener::bind(LOCAL_FIXTURE_ADDR)
            .await
            .context("binding local fixture metadata service")?;
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, api::fixture_router()).await {
                error!(error = %err, "fixture metadata service exited");
            }
        });
        let endpoint = format!("http://{}", LOCAL_FIXTURE_ADDR);
        info!(uri = %endpoint, "serving fixture payloads in local mode");
        endpoint
    } else {
        config::ExporterConfig::detect_metadata_endpoint().context(
            "couldn't detect the ECS metadata endpoint \
             (tried ECS_CONTAINER_METADATA_URI_V4 and ECS_CONTAINER_METADATA_URI)",
        )?
    };

    let source: Arc<dyn Source> = Arc::new(MetadataEndpointSource::with_timeout(
        endpoint,
        Duration::from_secs(config.request_timeout_secs),
    )?);

    // A dedicated registry keeps the scrape output limited to this
    // exporter's own families.
    let registry = Registry::new();
    registry
        .register(Box::new(TaskCollector::new(source.clone())))
        .context("registering the task collector")?;

    let state = Arc::new(api::AppState { registry, source });

    let _server = tokio::spawn(api::serve(config.port, config.expose_raw_data, state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}
