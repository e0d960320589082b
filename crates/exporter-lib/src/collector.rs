//! The per-scrape correlation and emission pass
//!
//! [`TaskCollector`] implements [`prometheus::core::Collector`]: every
//! scrape of the exposition endpoint triggers one fresh metadata fetch
//! plus one stats fetch, correlates the two payloads by container
//! identity, and emits the derived families together with an
//! `ecs_container_exporter_up` health gauge. Partial failures degrade the
//! health gauge instead of aborting the scrape.

use crate::metadata::TaskMetadata;
use crate::registry::{self, MetricSpec, DEFAULT_METRICS, METRIC_PREFIX};
use crate::source::Source;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, Opts};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;

const UP_HELP: &str = "1 if no issues were encountered during the scrape, 0 if errors occurred";

/// Collects per-container resource metrics for one ECS task.
///
/// Holds no mutable state; concurrent scrapes are independent as long as
/// the source is safe for concurrent use.
pub struct TaskCollector {
    source: Arc<dyn Source>,
    specs: &'static [MetricSpec],
}

impl TaskCollector {
    /// Create a collector reporting the default metric set.
    pub fn new(source: Arc<dyn Source>) -> Self {
        Self {
            source,
            specs: DEFAULT_METRICS,
        }
    }

    /// Task-level labels shared by every series of a scrape, and by the
    /// health gauge. Computed once per scrape.
    fn common_labels(meta: &TaskMetadata) -> HashMap<String, String> {
        let mut labels = HashMap::from([
            ("Cluster".to_string(), meta.cluster.clone()),
            ("TaskARN".to_string(), meta.task_arn.clone()),
            ("TaskDefinitionFamily".to_string(), meta.family.clone()),
            ("TaskDefinitionRevision".to_string(), meta.revision.clone()),
        ]);
        // An absent availability zone means a platform that does not
        // publish one (pre-1.4 Fargate); the label is simply left off.
        if let Some(az) = &meta.availability_zone {
            labels.insert("AvailabilityZone".to_string(), az.clone());
        }
        labels
    }

    /// Build the health gauge family. The label set always equals the
    /// common labels, so it reports per-task health, never per-container.
    fn up_family(common_labels: &HashMap<String, String>, up: f64) -> Option<MetricFamily> {
        let opts = Opts::new(format!("{}exporter_up", METRIC_PREFIX), UP_HELP)
            .const_labels(common_labels.clone());
        match Gauge::with_opts(opts) {
            Ok(gauge) => {
                gauge.set(up);
                gauge.collect().into_iter().next()
            }
            Err(err) => {
                error!(error = %err, up, "failed to build the exporter_up metric");
                None
            }
        }
    }
}

impl Collector for TaskCollector {
    fn desc(&self) -> Vec<&Desc> {
        // By construction no metric ever changes shape at runtime, but the
        // label set is only knowable after inspecting the task metadata,
        // so descriptors are discovered by running a collection pass.
        Vec::new()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let meta = match self.source.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                // Metadata is a precondition for any observation; without
                // it the whole cycle is invalid and nothing is emitted,
                // not even the health gauge.
                error!(error = %err, "failed to retrieve task metadata");
                return Vec::new();
            }
        };

        let common_labels = Self::common_labels(&meta);

        let stats = match self.source.stats() {
            Ok(stats) => stats,
            Err(err) => {
                error!(error = %err, "failed to retrieve task stats");
                return Self::up_family(&common_labels, 0.0).into_iter().collect();
            }
        };

        let mut families = Vec::new();
        let mut healthy = true;
        for container in &meta.containers {
            if !container.kind.is_normal() {
                continue;
            }

            let mut labels = common_labels.clone();
            labels.insert("ContainerName".to_string(), container.name.clone());

            let Some(sample) = stats.get(&container.docker_id) else {
                let eligible: Vec<&str> = meta
                    .containers
                    .iter()
                    .filter(|c| c.kind.is_normal())
                    .map(|c| c.docker_id.as_str())
                    .collect();
                let observed: Vec<&str> = stats.keys().map(String::as_str).collect();
                error!(
                    missing = %container.docker_id,
                    container = %container.name,
                    eligible_containers = ?eligible,
                    containers_in_stats = ?observed,
                    "container present in metadata but absent from stats"
                );
                healthy = false;
                continue;
            };

            match registry::sample_to_families(sample, self.specs, &labels) {
                Ok(converted) => families.extend(converted),
                Err(err) => {
                    error!(
                        error = %err,
                        container = %container.name,
                        "failed to convert stats sample"
                    );
                    healthy = false;
                }
            }
        }

        families.extend(Self::up_family(
            &common_labels,
            if healthy { 1.0 } else { 0.0 },
        ));
        families
    }
}
