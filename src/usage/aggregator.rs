// Builds a UsageSnapshot from a MetricSource
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use chrono::{
    DateTime,
    Utc,
};
use crate::common::{
    Dimension,
    MetricQuery,
    MetricSource,
    Statistic,
    TimeWindow,
    ACTIVITY_PERIOD,
    CAPACITY_PERIOD,
    DIMENSION_BUCKET_NAME,
    DIMENSION_FILTER_ID,
    DIMENSION_STORAGE_TYPE,
    FILTER_ID_ENTIRE_BUCKET,
    S3_4XX_ERRORS,
    S3_5XX_ERRORS,
    S3_ALL_REQUESTS,
    S3_BUCKET_SIZE_BYTES,
    S3_BYTES_DOWNLOADED,
    S3_BYTES_UPLOADED,
    S3_GET_REQUESTS,
    S3_NUMBER_OF_OBJECTS,
    S3_PUT_REQUESTS,
    STORAGE_TYPE_ALL,
    STORAGE_TYPE_STANDARD,
};
use super::fetcher::{
    fetch_metric,
    fetch_metrics,
};
use super::units::{
    bytes_to_gb,
    bytes_to_mb,
    to_count,
};
use super::UsageSnapshot;
use tracing::{
    debug,
    info,
};

// Query ids for the batched capacity request.
const SIZE_ID: &str = "size";
const OBJECTS_ID: &str = "objects";

/// Aggregates capacity and activity metrics for a single bucket.
pub struct UsageAggregator<'a, S: ?Sized> {
    source:      &'a S,
    bucket_name: String,
}

impl<'a, S> UsageAggregator<'a, S>
where
    S: MetricSource + ?Sized,
{
    /// Return a new `UsageAggregator` querying `source` for `bucket_name`.
    pub fn new(source: &'a S, bucket_name: &str) -> Self {
        Self {
            source:      source,
            bucket_name: bucket_name.to_string(),
        }
    }

    /// Queries for the daily storage metrics.
    ///
    /// Size only covers standard storage, object count covers everything.
    pub fn capacity_queries(&self) -> Vec<MetricQuery> {
        let storage_query = |id, metric_name, storage_type| {
            MetricQuery::s3(
                id,
                metric_name,
                vec![
                    Dimension::new(DIMENSION_BUCKET_NAME, &self.bucket_name),
                    Dimension::new(DIMENSION_STORAGE_TYPE, storage_type),
                ],
                CAPACITY_PERIOD,
                Statistic::Average,
            )
        };

        vec![
            storage_query(SIZE_ID, S3_BUCKET_SIZE_BYTES, STORAGE_TYPE_STANDARD),
            storage_query(OBJECTS_ID, S3_NUMBER_OF_OBJECTS, STORAGE_TYPE_ALL),
        ]
    }

    /// Query for a request metric over the entire bucket.
    ///
    /// These metrics only exist if a request metrics configuration with the
    /// `EntireBucket` filter id has been set up on the bucket.
    pub fn activity_query(&self, metric_name: &str) -> MetricQuery {
        MetricQuery::s3(
            "m",
            metric_name,
            vec![
                Dimension::new(DIMENSION_BUCKET_NAME, &self.bucket_name),
                Dimension::new(DIMENSION_FILTER_ID, FILTER_ID_ENTIRE_BUCKET),
            ],
            ACTIVITY_PERIOD,
            Statistic::Sum,
        )
    }

    /// Take a `UsageSnapshot` of the bucket as of `now`.
    ///
    /// All fetches must succeed, there is no partial snapshot.
    pub async fn snapshot(&self, now: DateTime<Utc>) -> Result<UsageSnapshot> {
        info!("snapshot: Fetching metrics for '{}'", self.bucket_name);

        let capacity_window = TimeWindow::capacity(now);
        let activity_window = TimeWindow::activity(now);

        let capacity_queries = self.capacity_queries();
        let all_requests     = self.activity_query(S3_ALL_REQUESTS);
        let get_requests     = self.activity_query(S3_GET_REQUESTS);
        let put_requests     = self.activity_query(S3_PUT_REQUESTS);
        let downloaded       = self.activity_query(S3_BYTES_DOWNLOADED);
        let uploaded         = self.activity_query(S3_BYTES_UPLOADED);
        let errors_4xx       = self.activity_query(S3_4XX_ERRORS);
        let errors_5xx       = self.activity_query(S3_5XX_ERRORS);

        let source = self.source;
        let window = &activity_window;

        // None of these depend on each other, so run them concurrently.
        let (
            capacity,
            all_requests,
            get_requests,
            put_requests,
            downloaded,
            uploaded,
            errors_4xx,
            errors_5xx,
        ) = tokio::try_join!(
            fetch_metrics(source, &capacity_queries, &capacity_window),
            fetch_metric(source, &all_requests, window),
            fetch_metric(source, &get_requests, window),
            fetch_metric(source, &put_requests, window),
            fetch_metric(source, &downloaded, window),
            fetch_metric(source, &uploaded, window),
            fetch_metric(source, &errors_4xx, window),
            fetch_metric(source, &errors_5xx, window),
        ).with_context(|| {
            format!("Failed to fetch metrics for bucket '{}'", self.bucket_name)
        })?;

        let size_bytes = capacity.get(SIZE_ID).copied().unwrap_or_default();
        let objects    = capacity.get(OBJECTS_ID).copied().unwrap_or_default();

        let snapshot = UsageSnapshot {
            bucket_name:         self.bucket_name.clone(),
            size_gb:             bytes_to_gb(size_bytes),
            object_count:        to_count(objects),
            all_requests:        to_count(all_requests),
            get_requests:        to_count(get_requests),
            put_requests:        to_count(put_requests),
            bytes_downloaded_mb: bytes_to_mb(downloaded),
            bytes_uploaded_mb:   bytes_to_mb(uploaded),
            errors_4xx:          to_count(errors_4xx),
            errors_5xx:          to_count(errors_5xx),
        };

        debug!("snapshot: {:#?}", snapshot);

        Ok(snapshot)
    }
}
