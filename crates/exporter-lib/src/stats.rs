//! Serde models for the per-container Docker stats samples
//!
//! `GET ${ECS_CONTAINER_METADATA_URI}/task/stats` returns the Docker
//! daemon's stats shape keyed by container ID. Only the accounting needed
//! for the derived metrics is modeled; every field is default-tolerant
//! because the first sample for a container ships an empty `precpu_stats`
//! block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from container identity to its latest usage sample.
///
/// Keys are not guaranteed to be a superset or subset of the metadata's
/// container set; correlation must tolerate either side missing entries
/// the other has.
pub type UsageSampleSet = HashMap<String, UsageSample>;

/// A raw point-in-time resource snapshot for one container.
///
/// Two temporally adjacent CPU accountings are embedded in a single
/// sample (`cpu_stats` and `precpu_stats`), which is what makes the
/// windowed CPU ratio derivable without cross-scrape state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    #[serde(default)]
    pub read: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preread: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cpu_stats: CpuStats,
    #[serde(default)]
    pub precpu_stats: CpuStats,
    #[serde(default)]
    pub memory_stats: MemoryStats,
}

/// Cumulative CPU accounting at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuStats {
    #[serde(default)]
    pub cpu_usage: CpuUsage,
    /// Cumulative CPU time consumed by the whole host, in nanoseconds,
    /// totaled across all CPUs.
    #[serde(default)]
    pub system_cpu_usage: u64,
    #[serde(default)]
    pub online_cpus: u32,
}

/// Container CPU time counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    /// Cumulative CPU time consumed by the container, in nanoseconds,
    /// totaled across all CPUs.
    #[serde(default)]
    pub total_usage: u64,
    #[serde(default)]
    pub percpu_usage: Vec<u64>,
    #[serde(default)]
    pub usage_in_kernelmode: u64,
    #[serde(default)]
    pub usage_in_usermode: u64,
}

/// Memory accounting for one container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    #[serde(default)]
    pub usage: u64,
    #[serde(default)]
    pub max_usage: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub failcnt: u64,
    #[serde(default)]
    pub stats: HashMap<String, u64>,
}
