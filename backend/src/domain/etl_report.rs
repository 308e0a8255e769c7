//! One load-and-aggregate cycle, packaged for callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use super::{LoadResult, MetricsSnapshot, UserRecord, aggregate};

const FALLBACK_METRICS_JSON: &str = include_str!("../../fixtures/etl-fallback-metrics.json");

/// Metrics shown when a load yields no users at all.
///
/// Read from the bundled fixture; an unreadable fixture degrades to
/// [`MetricsSnapshot::EMPTY`].
pub fn fallback_metrics() -> MetricsSnapshot {
    serde_json::from_str(FALLBACK_METRICS_JSON).unwrap_or_else(|error| {
        warn!(%error, "bundled fallback metrics fixture is invalid");
        MetricsSnapshot::EMPTY
    })
}

/// Users, metrics and provenance from one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtlReport {
    /// Loaded records.
    pub users: Vec<UserRecord>,
    /// Metrics over `users`, or the bundled snapshot when `users` is empty.
    pub metrics: MetricsSnapshot,
    /// Whether mock users replaced the live feed.
    pub fallback_used: bool,
    /// Endpoint the fetch was attempted against.
    pub source_url: String,
    /// Instant the fetch attempt resolved.
    pub fetched_at: DateTime<Utc>,
}

impl EtlReport {
    /// Aggregate a load result, anchoring registration ages at its fetch time.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{EtlReport, LoadResult, fallback_metrics};
    /// use chrono::Utc;
    ///
    /// let result = LoadResult {
    ///     users: Vec::new(),
    ///     fallback_used: false,
    ///     source_url: "https://example.test".to_owned(),
    ///     fetched_at: Utc::now(),
    /// };
    /// let report = EtlReport::from_load(result);
    /// assert_eq!(report.metrics, fallback_metrics());
    /// ```
    pub fn from_load(result: LoadResult) -> Self {
        let LoadResult {
            users,
            fallback_used,
            source_url,
            fetched_at,
        } = result;

        let metrics = if users.is_empty() {
            fallback_metrics()
        } else {
            aggregate(&users, fetched_at)
        };

        Self {
            users,
            metrics,
            fallback_used,
            source_url,
            fetched_at,
        }
    }
}
