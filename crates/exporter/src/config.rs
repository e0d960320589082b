//! Exporter configuration

use anyhow::Result;
use serde::Deserialize;
use tracing::info;

/// Environment variables published by the ECS agent that carry the task
/// metadata endpoint URI, newest supported version first. V4 is set on
/// Fargate platform version >= 1.4.0 or container agent >= 1.39.0; V3 on
/// Fargate >= 1.3.0 or agent >= 1.21.0. There is also a V2 at a fixed
/// link-local address, but it uses different routes and is not supported.
const METADATA_URI_V4_VAR: &str = "ECS_CONTAINER_METADATA_URI_V4";
const METADATA_URI_V3_VAR: &str = "ECS_CONTAINER_METADATA_URI";

/// Exporter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExporterConfig {
    /// Port the metrics server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve fixture payloads from an in-process stand-in metadata
    /// service instead of talking to ECS.
    #[serde(default)]
    pub local: bool,

    /// Expose the raw metadata and stats payloads under /_debug.
    #[serde(default)]
    pub expose_raw_data: bool,

    /// Timeout for each metadata endpoint request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    9659
}

fn default_request_timeout() -> u64 {
    5
}

impl ExporterConfig {
    /// Load configuration from EXPORTER_-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("EXPORTER"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| ExporterConfig {
            port: default_port(),
            local: false,
            expose_raw_data: false,
            request_timeout_secs: default_request_timeout(),
        }))
    }

    /// Detect the task metadata endpoint from the agent-published
    /// environment variables, newest version first.
    pub fn detect_metadata_endpoint() -> Option<String> {
        for var in [METADATA_URI_V4_VAR, METADATA_URI_V3_VAR] {
            if let Ok(uri) = std::env::var(var) {
                if !uri.is_empty() {
                    info!(source = var, uri = %uri, "using task metadata endpoint");
                    return Some(uri);
                }
            }
        }
        None
    }
}
