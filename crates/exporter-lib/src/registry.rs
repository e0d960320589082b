//! Declarative table of metrics derived from a usage sample
//!
//! Each entry pairs an exposition name/help with a pure extraction
//! function, so adding a metric is one table row. The table is built once
//! at startup and never mutated.

use crate::stats::UsageSample;
use prometheus::core::Collector as _;
use prometheus::proto::{MetricFamily, MetricType};
use prometheus::{Counter, Gauge, Opts};
use std::collections::HashMap;

/// Prepended to every metric name so the exporter's series can be told
/// apart from similar metrics coming from other sources.
pub const METRIC_PREFIX: &str = "ecs_container_";

/// A single metric that can be extracted from a usage sample.
pub struct MetricSpec {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricType,
    pub value: fn(&UsageSample) -> f64,
}

/// The fixed set of metrics reported for every eligible container.
pub const DEFAULT_METRICS: &[MetricSpec] = &[
    MetricSpec {
        name: "mem_usage_bytes",
        help: "Current memory usage",
        kind: MetricType::GAUGE,
        value: |s| s.memory_stats.usage as f64,
    },
    MetricSpec {
        name: "mem_max_usage_bytes",
        help: "Maximum memory usage",
        kind: MetricType::GAUGE,
        value: |s| s.memory_stats.max_usage as f64,
    },
    MetricSpec {
        name: "mem_limit_bytes",
        help: "Memory limit",
        kind: MetricType::GAUGE,
        value: |s| s.memory_stats.limit as f64,
    },
    MetricSpec {
        name: "cpu_usage",
        help: "CPU usage from 0 to 1 of the container as a ratio of total CPU usage on the host",
        kind: MetricType::GAUGE,
        value: cpu_usage_ratio,
    },
];

/// Convert one usage sample into constant metric families, one
/// single-series family per table entry, with `labels` attached to every
/// series.
///
/// Fails only if the exposition library rejects a metric name or label
/// set, which cannot happen with the well-formed static defaults; callers
/// treat a failure as failing the whole container.
pub fn sample_to_families(
    sample: &UsageSample,
    specs: &[MetricSpec],
    labels: &HashMap<String, String>,
) -> Result<Vec<MetricFamily>, prometheus::Error> {
    let mut families = Vec::with_capacity(specs.len());
    for spec in specs {
        let opts = Opts::new(format!("{}{}", METRIC_PREFIX, spec.name), spec.help)
            .const_labels(labels.clone());
        let value = (spec.value)(sample);
        let mut produced = match spec.kind {
            MetricType::COUNTER => {
                let counter = Counter::with_opts(opts)?;
                counter.inc_by(value);
                counter.collect()
            }
            _ => {
                let gauge = Gauge::with_opts(opts)?;
                gauge.set(value);
                gauge.collect()
            }
        };
        families.append(&mut produced);
    }
    Ok(families)
}

/// Fraction from 0 to 1 of host CPU time consumed by the container over
/// the sampling window.
///
/// Docker reports cumulative nanosecond CPU-time counters for the
/// container and for the whole host, and embeds the previous reading in
/// the same sample under `precpu_stats`, so the ratio of the two deltas
/// is the container's share of host CPU over that window. Both counters
/// already sum over all host CPUs; the core count never enters the
/// calculation. A non-positive delta on either side (first-ever sample,
/// counter reset, or an idle window) yields exactly 0.0.
fn cpu_usage_ratio(sample: &UsageSample) -> f64 {
    let system_delta =
        sample.cpu_stats.system_cpu_usage as f64 - sample.precpu_stats.system_cpu_usage as f64;
    let container_delta = sample.cpu_stats.cpu_usage.total_usage as f64
        - sample.precpu_stats.cpu_usage.total_usage as f64;

    if system_delta > 0.0 && container_delta > 0.0 {
        container_delta / system_delta
    } else {
        0.0
    }
}
