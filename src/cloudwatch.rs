// Imports all of the components needed for cloudwatch::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// CloudWatch `Client`.
mod client;

/// Implementation of the `MetricSource` trait for our CloudWatch `Client`.
mod metric_source;

pub use client::*;
