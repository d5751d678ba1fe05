// Bucket usage aggregation, idle classification and reporting
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Builds a `UsageSnapshot` from a `MetricSource`.
mod aggregator;

/// In-memory `MetricSource` for tests.
#[cfg(test)]
pub mod fake_source;

/// Idle thresholds and verdicts.
mod classifier;

/// Single value fetches from a `MetricSource`.
mod fetcher;

/// Text reports for an operator.
mod report;

/// The `UsageSnapshot` type.
mod snapshot;

/// Byte and count conversions.
mod units;

pub use aggregator::*;
pub use classifier::*;
pub use report::*;
pub use snapshot::*;
