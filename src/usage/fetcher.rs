// Fetches single scalar values from a MetricSource
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use crate::common::{
    MetricQuery,
    MetricResult,
    MetricSource,
    TimeWindow,
};
use std::collections::HashMap;
use std::slice;
use tracing::debug;

/// Returns the newest value for `query` over `window`.
///
/// A window with no samples returns `0.0`, a quiet bucket and one with no
/// published metrics look the same. Backend errors are returned as is.
pub async fn fetch_metric<S>(
    source: &S,
    query: &MetricQuery,
    window: &TimeWindow,
) -> Result<f64>
where
    S: MetricSource + ?Sized,
{
    window.validate()?;

    let results = source
        .get_metric_data(slice::from_ref(query), window)
        .await?;

    let value = first_value(&results, &query.id);

    debug!("fetch_metric: {} = {}", query.metric_name, value);

    Ok(value)
}

/// Returns the newest value for each of `queries` in a single request,
/// keyed by query id.
///
/// Every query id is present in the returned map.
pub async fn fetch_metrics<S>(
    source: &S,
    queries: &[MetricQuery],
    window: &TimeWindow,
) -> Result<HashMap<String, f64>>
where
    S: MetricSource + ?Sized,
{
    window.validate()?;

    let results = source.get_metric_data(queries, window).await?;

    let values = queries.iter()
        .map(|query| (query.id.clone(), first_value(&results, &query.id)))
        .collect();

    debug!("fetch_metrics: {:?}", values);

    Ok(values)
}

fn first_value(results: &[MetricResult], id: &str) -> f64 {
    results.iter()
        .find(|result| result.id == id)
        .and_then(MetricResult::first_value)
        .unwrap_or(0.0)
}
