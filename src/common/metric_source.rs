// MetricSource trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    MetricQuery,
    MetricResult,
    TimeWindow,
};

/// `MetricSource` represents a metrics backend that can answer statistical
/// queries over a window of time.
///
/// This should be implemented by all `Client`s talking to a metrics service.
#[async_trait]
pub trait MetricSource {
    /// Returns one `MetricResult` per answered query.
    ///
    /// Queries with no samples in the `window` may come back as a result with
    /// no values, or not at all. Neither is an error.
    async fn get_metric_data(
        &self,
        queries: &[MetricQuery],
        window: &TimeWindow,
    ) -> Result<Vec<MetricResult>>;
}
