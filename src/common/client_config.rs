// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    Result,
};
use crate::usage::IdleThresholds;
use super::{
    ConfigFile,
    Region,
    ReportMode,
};

/// Client configuration.
#[derive(Debug, PartialEq)]
pub struct ClientConfig {
    /// The bucket name that the report is produced for.
    ///
    /// There is no default, this must come from the command line, the
    /// environment or a config file.
    pub bucket_name: Option<String>,

    /// The report that `s3idle` will print.
    pub mode: ReportMode,

    /// The region that our CloudWatch client should be created in.
    pub region: Region,

    /// Thresholds used to classify the bucket as idle.
    pub thresholds: IdleThresholds,
}

impl Default for ClientConfig {
    /// Returns a default `ClientConfig`.
    ///
    /// ```rust
    /// ClientConfig {
    ///     bucket_name: None,
    ///     mode:        ReportMode::Idle,
    ///     region:      Region::new(),
    ///     thresholds:  IdleThresholds::default(),
    /// }
    /// ```
    fn default() -> Self {
        Self {
            bucket_name: None,
            mode:        ReportMode::default(),
            region:      Region::new(),
            thresholds:  IdleThresholds::default(),
        }
    }
}

impl ClientConfig {
    /// Layer the settings from a `ConfigFile` over `self`.
    ///
    /// Anything the file leaves out is kept as it was.
    pub fn with_config_file(mut self, file: ConfigFile) -> Self {
        if let Some(bucket) = file.bucket {
            self.bucket_name = Some(bucket);
        }

        if let Some(region) = file.region {
            self.region = self.region.set_region(&region);
        }

        let thresholds = file.thresholds;

        if let Some(max_size_gb) = thresholds.max_size_gb {
            self.thresholds.max_size_gb = max_size_gb;
        }

        if let Some(max_objects) = thresholds.max_objects {
            self.thresholds.max_objects = max_objects;
        }

        if let Some(max_requests) = thresholds.max_requests {
            self.thresholds.max_requests = max_requests;
        }

        self
    }

    /// Returns the configured bucket name, or an error if there isn't one.
    pub fn require_bucket_name(&self) -> Result<&str> {
        self.bucket_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow!(
                "No bucket name given, use --bucket, S3IDLE_BUCKET or a config file",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ThresholdsFile;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_config_file() {
        let file = ConfigFile {
            bucket:     Some("file-bucket".into()),
            region:     Some("ap-south-1".into()),
            thresholds: ThresholdsFile {
                max_size_gb:  None,
                max_objects:  Some(10),
                max_requests: None,
            },
        };

        let config = ClientConfig {
            region: Region::default(),
            ..Default::default()
        };

        let ret = config.with_config_file(file);

        let expected = ClientConfig {
            bucket_name: Some("file-bucket".into()),
            mode:        ReportMode::Idle,
            region:      Region::default().set_region("ap-south-1"),
            thresholds:  IdleThresholds {
                max_size_gb:  1.0,
                max_objects:  10,
                max_requests: 20,
            },
        };

        assert_eq!(ret, expected);
    }

    #[test]
    fn test_require_bucket_name() {
        let tests = vec![
            (None,                 false),
            (Some(String::new()),  false),
            (Some("a".to_string()), true),
        ];

        for (bucket_name, ok) in tests {
            let config = ClientConfig {
                bucket_name: bucket_name,
                ..Default::default()
            };

            assert_eq!(config.require_bucket_name().is_ok(), ok);
        }
    }
}
