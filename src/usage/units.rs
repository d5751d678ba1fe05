// Unit conversions for metric values
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::cmp::Ordering;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

// Rounds to a fixed number of decimal places, halves go to the even digit.
// The decision is made on the exact value, not on `value * factor`, which can
// land on or drift off a half once it has been rounded.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let scaled = value * factor;

    if !scaled.is_finite() {
        return value;
    }

    // What the multiplication lost, exactly representable with a fused
    // multiply-add.
    let error = value.mul_add(factor, -scaled);

    let floor    = scaled.floor();
    let midpoint = floor + 0.5;

    // Exact, both sides are within a unit of each other.
    let distance = scaled - midpoint;

    let ordering = if distance == 0.0 {
        error.partial_cmp(&0.0)
    }
    else {
        distance.partial_cmp(&0.0)
    };

    let rounded = match ordering {
        Some(Ordering::Less)    => floor,
        Some(Ordering::Greater) => floor + 1.0,
        _                       => scaled.round_ties_even(),
    };

    rounded / factor
}

/// Convert bytes to binary gigabytes, rounded to 3 decimal places.
pub fn bytes_to_gb(bytes: f64) -> f64 {
    round_to(bytes / BYTES_PER_GB, 3)
}

/// Convert bytes to binary megabytes, rounded to 2 decimal places.
pub fn bytes_to_mb(bytes: f64) -> f64 {
    round_to(bytes / BYTES_PER_MB, 2)
}

/// Truncate a metric value to a whole count.
///
/// Counts can't be negative, anything below zero becomes zero.
pub fn to_count(value: f64) -> u64 {
    // `as` saturates, NaN and negatives become 0.
    value.trunc() as u64
}
