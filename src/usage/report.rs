// Human readable reports
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;
use super::{
    IdleVerdict,
    UsageSnapshot,
};

// Floats always show at least one decimal place, so 2 GB is "2.0".
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        }
        else {
            write!(f, "{}", self.0)
        }
    }
}

/// Size, object count and recent requests with the idle verdict.
pub struct IdleReport<'a> {
    pub snapshot: &'a UsageSnapshot,
    pub verdict:  IdleVerdict,
}

impl fmt::Display for IdleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;

        writeln!(f, "--- S3 Idle Check Report ---")?;
        writeln!(f, "Bucket: {}", snapshot.bucket_name)?;
        writeln!(f, "Bucket Size (GB): {}", Decimal(snapshot.size_gb))?;
        writeln!(f, "Object Count: {}", snapshot.object_count)?;
        writeln!(f, "Requests (last 1 hr): {}", snapshot.all_requests)?;
        writeln!(f)?;

        if self.verdict.is_idle() {
            writeln!(f, "STATUS: Bucket appears idle / underutilized.")
        }
        else {
            writeln!(f, "STATUS: Bucket is actively used.")
        }
    }
}

/// Every field of the snapshot, one per line.
pub struct UsageReport<'a> {
    pub snapshot: &'a UsageSnapshot,
}

impl fmt::Display for UsageReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;

        writeln!(f, "--- S3 Usage Monitoring Report ---")?;
        writeln!(f, "BucketSizeGB: {}", Decimal(snapshot.size_gb))?;
        writeln!(f, "ObjectCount: {}", snapshot.object_count)?;
        writeln!(f, "AllRequests: {}", snapshot.all_requests)?;
        writeln!(f, "GetRequests: {}", snapshot.get_requests)?;
        writeln!(f, "PutRequests: {}", snapshot.put_requests)?;
        writeln!(f, "BytesDownloadedMB: {}", Decimal(snapshot.bytes_downloaded_mb))?;
        writeln!(f, "BytesUploadedMB: {}", Decimal(snapshot.bytes_uploaded_mb))?;
        writeln!(f, "4xxErrors: {}", snapshot.errors_4xx)?;
        writeln!(f, "5xxErrors: {}", snapshot.errors_5xx)
    }
}
