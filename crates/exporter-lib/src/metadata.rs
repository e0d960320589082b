//! Serde models for the ECS task metadata endpoint
//!
//! Field names follow the v3 task metadata endpoint response; the v4
//! response is identical for everything modeled here. See
//! <https://docs.aws.amazon.com/AmazonECS/latest/developerguide/task-metadata-endpoint-v4.html>.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `GET ${ECS_CONTAINER_METADATA_URI}/task`.
///
/// A fresh snapshot is fetched on every scrape; instances carry no
/// identity across scrapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskMetadata {
    pub cluster: String,
    #[serde(rename = "TaskARN")]
    pub task_arn: String,
    pub family: String,
    pub revision: String,
    #[serde(default)]
    pub desired_status: String,
    #[serde(default)]
    pub known_status: String,
    /// Omitted when no task-level limits are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
    #[serde(default)]
    pub pull_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pull_stopped_at: Option<DateTime<Utc>>,
    /// Only present on Fargate platform version 1.4.0 and later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default)]
    pub execution_stopped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub containers: Vec<ContainerMetadata>,
}

/// One container entry within [`TaskMetadata`], also the response shape of
/// `GET ${ECS_CONTAINER_METADATA_URI}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerMetadata {
    /// Stable container identity; the correlation key into the stats map.
    pub docker_id: String,
    pub name: String,
    #[serde(default)]
    pub docker_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "ImageID")]
    pub image_id: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub desired_status: String,
    #[serde(default)]
    pub known_status: String,
    /// Omitted when no container-level limits are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// ECS uses this tag to distinguish containers internal to the
    /// orchestrator from the ones defined in the task definition.
    #[serde(rename = "Type")]
    pub kind: ContainerKind,
}

/// The `Type` tag on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerKind {
    /// Defined in the task definition; eligible for metric emission.
    Normal,
    /// Network pause container injected by the awsvpc network mode.
    CniPause,
    /// Namespace pause container on Fargate.
    NamespacePause,
    /// Forward-compatible catch-all for kinds newer than this exporter.
    #[serde(other)]
    Other,
}

impl ContainerKind {
    /// Only normal containers are reported; internal helpers are skipped.
    pub fn is_normal(self) -> bool {
        matches!(self, ContainerKind::Normal)
    }
}

/// CPU/memory limits of a container or the whole task. Only the limits
/// that have been set are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceLimits {
    #[serde(default, rename = "CPU")]
    pub cpu: Option<f64>,
    #[serde(default)]
    pub memory: Option<u64>,
}
