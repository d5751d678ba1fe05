// Optional TOML configuration file
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Settings that may be given in a configuration file.
///
/// ```toml
/// bucket = "some-bucket-name"
/// region = "ap-south-1"
///
/// [thresholds]
/// max_size_gb = 1.0
/// max_objects = 50
/// max_requests = 20
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Name of the bucket to report on.
    pub bucket: Option<String>,

    /// Region the CloudWatch client is created in.
    pub region: Option<String>,

    /// Overrides for the idle classification thresholds.
    #[serde(default)]
    pub thresholds: ThresholdsFile,
}

/// The `[thresholds]` table, any field left out keeps its default.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsFile {
    pub max_size_gb:  Option<f64>,
    pub max_objects:  Option<u64>,
    pub max_requests: Option<u64>,
}

impl ConfigFile {
    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("ConfigFile::load: Reading {}", path.display());

        let s = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::load_from_str(&s)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse configuration from a string.
    pub fn load_from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_from_str_full() {
        let toml = r#"
            bucket = "some-bucket-name"
            region = "ap-south-1"

            [thresholds]
            max_size_gb = 2.5
            max_objects = 100
            max_requests = 5
        "#;

        let ret = ConfigFile::load_from_str(toml).unwrap();

        let expected = ConfigFile {
            bucket:     Some("some-bucket-name".into()),
            region:     Some("ap-south-1".into()),
            thresholds: ThresholdsFile {
                max_size_gb:  Some(2.5),
                max_objects:  Some(100),
                max_requests: Some(5),
            },
        };

        assert_eq!(ret, expected);
    }

    #[test]
    fn test_load_from_str_partial() {
        let ret = ConfigFile::load_from_str("bucket = \"b\"").unwrap();

        let expected = ConfigFile {
            bucket: Some("b".into()),
            ..Default::default()
        };

        assert_eq!(ret, expected);
    }

    #[test]
    fn test_load_from_str_unknown_key() {
        let ret = ConfigFile::load_from_str("bukket = \"b\"");

        assert!(ret.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let ret = ConfigFile::load(Path::new("does-not-exist/s3idle.toml"));

        assert!(ret.is_err());
    }
}
