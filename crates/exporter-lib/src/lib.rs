//! Library crate for the ECS task metadata exporter
//!
//! This crate provides the core functionality for:
//! - Deserializing task metadata and Docker stats payloads
//! - Fetching both payloads from the ECS task metadata endpoint
//! - Correlating containers to usage samples and deriving gauges
//! - Reporting per-scrape health via `ecs_container_exporter_up`

pub mod collector;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod source;
pub mod stats;

pub use collector::TaskCollector;
pub use error::SourceError;
pub use metadata::{ContainerKind, ContainerMetadata, ResourceLimits, TaskMetadata};
pub use source::{MetadataEndpointSource, Source};
pub use stats::{UsageSample, UsageSampleSet};
