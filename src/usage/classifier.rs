// Idle classification of a UsageSnapshot
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;
use super::UsageSnapshot;
use tracing::debug;

/// Default upper bound, exclusive, on size for an idle bucket.
pub const DEFAULT_MAX_IDLE_SIZE_GB: f64 = 1.0;

/// Default upper bound, exclusive, on object count for an idle bucket.
pub const DEFAULT_MAX_IDLE_OBJECTS: u64 = 50;

/// Default upper bound, exclusive, on requests in the activity window for an
/// idle bucket.
pub const DEFAULT_MAX_IDLE_REQUESTS: u64 = 20;

/// Classification of a bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdleVerdict {
    /// The bucket appears idle or underutilized.
    Idle,

    /// The bucket is actively used.
    Active,
}

impl IdleVerdict {
    pub fn is_idle(&self) -> bool {
        *self == Self::Idle
    }
}

impl fmt::Display for IdleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle   => f.write_str("idle"),
            Self::Active => f.write_str("active"),
        }
    }
}

/// Thresholds below which a bucket is considered idle.
///
/// A bucket is idle only when it is under all three at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleThresholds {
    pub max_size_gb:  f64,
    pub max_objects:  u64,
    pub max_requests: u64,
}

impl Default for IdleThresholds {
    fn default() -> Self {
        Self {
            max_size_gb:  DEFAULT_MAX_IDLE_SIZE_GB,
            max_objects:  DEFAULT_MAX_IDLE_OBJECTS,
            max_requests: DEFAULT_MAX_IDLE_REQUESTS,
        }
    }
}

impl IdleThresholds {
    /// Classify the given `snapshot`.
    pub fn classify(&self, snapshot: &UsageSnapshot) -> IdleVerdict {
        let idle = snapshot.size_gb < self.max_size_gb
            && snapshot.object_count < self.max_objects
            && snapshot.all_requests < self.max_requests;

        let verdict = if idle {
            IdleVerdict::Idle
        }
        else {
            IdleVerdict::Active
        };

        debug!(
            "classify: '{}' is {} under {:?}",
            snapshot.bucket_name,
            verdict,
            self,
        );

        verdict
    }
}
