// ReportMode
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use std::str::FromStr;

/// Reports that `s3idle` can produce.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReportMode {
    /// Size, object count and recent requests, with an idle/active verdict.
    #[default]
    Idle,

    /// Every capacity and activity metric for the bucket.
    Usage,
}

// This is used to work out which report we want after parsing the CLI.
// We shouldn't ever hit the error condition here.
impl FromStr for ReportMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle"  => Ok(Self::Idle),
            "usage" => Ok(Self::Usage),
            _       => Err("no match"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_mode_from_str() {
        let tests = vec![
            ("idle",    Ok(ReportMode::Idle)),
            ("usage",   Ok(ReportMode::Usage)),
            ("metrics", Err("no match")),
        ];

        for (input, expected) in tests {
            assert_eq!(ReportMode::from_str(input), expected);
        }
    }
}
