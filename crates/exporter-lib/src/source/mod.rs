//! Providers of task metadata and per-container stats
//!
//! In production the provider is the ECS task metadata endpoint
//! ([`MetadataEndpointSource`]); tests and local mode substitute
//! fixture-backed implementations.

mod endpoint;
pub mod fixture;

pub use endpoint::MetadataEndpointSource;

use crate::error::SourceError;
use crate::metadata::TaskMetadata;
use crate::stats::UsageSampleSet;

/// A provider of task metadata plus per-container usage samples.
///
/// Each call is a fresh, independent request; implementations must be
/// safe for concurrent use so that overlapping scrapes stay independent.
pub trait Source: Send + Sync {
    /// Retrieve the metadata snapshot for the task.
    fn metadata(&self) -> Result<TaskMetadata, SourceError>;

    /// Retrieve the map from container identity to its latest usage
    /// sample.
    fn stats(&self) -> Result<UsageSampleSet, SourceError>;
}
