// TimeWindow
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    ensure,
    Result,
};
use chrono::{
    DateTime,
    Duration,
    Utc,
};

/// A half open `[start, end)` window of time that metrics are queried over.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end:   DateTime<Utc>,
}

impl TimeWindow {
    /// Returns an error if `start` isn't before `end`.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.start < self.end,
            "time window start ({}) must be before end ({})",
            self.start,
            self.end,
        );

        Ok(())
    }

    /// Window for the daily storage metrics.
    ///
    /// Today's datapoint may not exist yet, so this covers the last two days.
    pub fn capacity(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(2),
            end:   now,
        }
    }

    /// Window for the request metrics, covering the last hour.
    pub fn activity(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::hours(1),
            end:   now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 3, 1, 20, 59, 0).unwrap()
    }

    #[test]
    fn test_capacity_window() {
        let window = TimeWindow::capacity(now());

        assert_eq!(window.start, Utc.with_ymd_and_hms(2020, 2, 28, 20, 59, 0).unwrap());
        assert_eq!(window.end, now());
    }

    #[test]
    fn test_activity_window() {
        let window = TimeWindow::activity(now());

        assert_eq!(window.start, Utc.with_ymd_and_hms(2020, 3, 1, 19, 59, 0).unwrap());
        assert_eq!(window.end, now());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let tests = vec![
            (now(), now() - Duration::seconds(1), false),
            (now(), now(),                        false),
            (now() - Duration::seconds(1), now(), true),
        ];

        for (start, end, ok) in tests {
            let window = TimeWindow {
                start: start,
                end:   end,
            };

            assert_eq!(window.validate().is_ok(), ok);
        }
    }
}
