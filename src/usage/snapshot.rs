// UsageSnapshot
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Point in time usage of a single bucket.
///
/// Sizes are already converted and rounded for display, raw byte counts are
/// not kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsageSnapshot {
    /// Name of the bucket the snapshot was taken for.
    pub bucket_name: String,

    /// Size of standard storage in GB, rounded to 3 decimal places.
    pub size_gb: f64,

    /// Number of objects across all storage types.
    pub object_count: u64,

    /// Requests of any type over the activity window.
    pub all_requests: u64,

    /// GET requests over the activity window.
    pub get_requests: u64,

    /// PUT requests over the activity window.
    pub put_requests: u64,

    /// Bytes downloaded over the activity window, in MB to 2 decimal places.
    pub bytes_downloaded_mb: f64,

    /// Bytes uploaded over the activity window, in MB to 2 decimal places.
    pub bytes_uploaded_mb: f64,

    /// Client errors over the activity window.
    pub errors_4xx: u64,

    /// Server errors over the activity window.
    pub errors_5xx: u64,
}
