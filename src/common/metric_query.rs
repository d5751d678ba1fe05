// Metric queries and the results returned for them
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;

/// Namespace that all S3 metrics are published under.
pub const S3_NAMESPACE: &str = "AWS/S3";

// Storage capacity metric names.
pub const S3_BUCKET_SIZE_BYTES: &str = "BucketSizeBytes";
pub const S3_NUMBER_OF_OBJECTS: &str = "NumberOfObjects";

// Request activity metric names.
pub const S3_ALL_REQUESTS: &str = "AllRequests";
pub const S3_GET_REQUESTS: &str = "GetRequests";
pub const S3_PUT_REQUESTS: &str = "PutRequests";
pub const S3_BYTES_DOWNLOADED: &str = "BytesDownloaded";
pub const S3_BYTES_UPLOADED: &str = "BytesUploaded";
pub const S3_4XX_ERRORS: &str = "4xxErrors";
pub const S3_5XX_ERRORS: &str = "5xxErrors";

// Dimension names.
pub const DIMENSION_BUCKET_NAME: &str = "BucketName";
pub const DIMENSION_STORAGE_TYPE: &str = "StorageType";
pub const DIMENSION_FILTER_ID: &str = "FilterId";

// Dimension values qualifying the measured scope.
pub const STORAGE_TYPE_STANDARD: &str = "StandardStorage";
pub const STORAGE_TYPE_ALL: &str = "AllStorageTypes";
pub const FILTER_ID_ENTIRE_BUCKET: &str = "EntireBucket";

/// Storage metrics are only published once per day.
pub const CAPACITY_PERIOD: i32 = 86_400;

/// Request metrics are published at one minute resolution, we sum them into
/// five minute buckets.
pub const ACTIVITY_PERIOD: i32 = 300;

/// The aggregation applied to samples within a period.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Statistic {
    Average,
    Maximum,
    Minimum,
    SampleCount,
    Sum,
}

impl Statistic {
    /// Name of the statistic as understood by CloudWatch.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average     => "Average",
            Self::Maximum     => "Maximum",
            Self::Minimum     => "Minimum",
            Self::SampleCount => "SampleCount",
            Self::Sum         => "Sum",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name/value pair narrowing a metric to a single resource.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dimension {
    pub name:  String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name:  name.to_string(),
            value: value.to_string(),
        }
    }
}

/// A single statistical request for one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricQuery {
    /// Identifier used to match this query to its `MetricResult`.
    ///
    /// CloudWatch requires this to start with a lowercase letter.
    pub id: String,

    /// Logical group of the metric, eg. `AWS/S3`.
    pub namespace: String,

    /// Name of the metric, eg. `BucketSizeBytes`.
    pub metric_name: String,

    /// Dimensions identifying the measured resource.
    pub dimensions: Vec<Dimension>,

    /// Aggregation period in seconds.
    pub period: i32,

    /// Statistic applied over each period.
    pub statistic: Statistic,
}

impl MetricQuery {
    /// Returns a query in the S3 namespace.
    pub fn s3(
        id: &str,
        metric_name: &str,
        dimensions: Vec<Dimension>,
        period: i32,
        statistic: Statistic,
    ) -> Self {
        Self {
            id:          id.to_string(),
            namespace:   S3_NAMESPACE.to_string(),
            metric_name: metric_name.to_string(),
            dimensions:  dimensions,
            period:      period,
            statistic:   statistic,
        }
    }
}

/// Samples returned for a single `MetricQuery`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricResult {
    /// The `id` of the `MetricQuery` this result answers.
    pub id: String,

    /// Label CloudWatch attached to the result, if any.
    pub label: Option<String>,

    /// Sample values, newest first. Empty means no activity in the window.
    pub values: Vec<f64>,
}

impl MetricResult {
    /// Returns the newest sample, if there is one.
    pub fn first_value(&self) -> Option<f64> {
        self.values.first().copied()
    }
}
