// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Error,
    Result,
};
use clap::{
    crate_description,
    crate_name,
    crate_version,
    value_parser,
    Arg,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    ConfigFile,
    ReportMode,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

// Default report that s3idle prints
const DEFAULT_MODE: &str = "idle";

// This should match the string values in the ReportMode FromStr impl
const VALID_MODES: &[&str] = &[
    "idle",
    "usage",
];

// Create the clap command
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("BUCKET")
                .env("S3IDLE_BUCKET")
                .long("bucket")
                .short('b')
                .value_name("BUCKET")
                .help("Name of the S3 bucket to report on")
        )
        .arg(
            Arg::new("CONFIG")
                .env("S3IDLE_CONFIG")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file to read bucket, region and thresholds from")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("MODE")
                .env("S3IDLE_MODE")
                .hide_env_values(true)
                .long("mode")
                .short('m')
                .value_name("MODE")
                .help("Print the idle check or the full usage report")
                .default_value(DEFAULT_MODE)
                .value_parser(VALID_MODES.to_vec())
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in")
        )
        .arg(
            Arg::new("MAX_SIZE_GB")
                .long("max-size-gb")
                .value_name("GB")
                .help("Buckets at or over this size are active")
                .value_parser(value_parser!(f64))
        )
        .arg(
            Arg::new("MAX_OBJECTS")
                .long("max-objects")
                .value_name("COUNT")
                .help("Buckets with at least this many objects are active")
                .value_parser(value_parser!(u64))
        )
        .arg(
            Arg::new("MAX_REQUESTS")
                .long("max-requests")
                .value_name("COUNT")
                .help("Buckets with at least this many requests in the last hour are active")
                .value_parser(value_parser!(u64))
        )
}

/// Parse the command line into `ArgMatches`.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build a `ClientConfig` from parsed arguments.
///
/// Command line and environment values win over the config file, which wins
/// over the defaults.
pub fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(path) = matches.get_one::<PathBuf>("CONFIG") {
        let file = ConfigFile::load(path)?;

        config = config.with_config_file(file);
    }

    if let Some(bucket) = matches.get_one::<String>("BUCKET") {
        config.bucket_name = Some(bucket.to_owned());
    }

    if let Some(region) = matches.get_one::<String>("REGION") {
        config.region = config.region.set_region(region);
    }

    // clap has already checked this against VALID_MODES.
    if let Some(mode) = matches.get_one::<String>("MODE") {
        config.mode = ReportMode::from_str(mode).map_err(Error::msg)?;
    }

    if let Some(max_size_gb) = matches.get_one::<f64>("MAX_SIZE_GB") {
        config.thresholds.max_size_gb = *max_size_gb;
    }

    if let Some(max_objects) = matches.get_one::<u64>("MAX_OBJECTS") {
        config.thresholds.max_objects = *max_objects;
    }

    if let Some(max_requests) = matches.get_one::<u64>("MAX_REQUESTS") {
        config.thresholds.max_requests = *max_requests;
    }

    debug!("client_config: {:?}", config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::IdleThresholds;
    use pretty_assertions::assert_eq;

    // Parse the given args, ignoring the environment so that tests aren't
    // affected by AWS_REGION and friends.
    fn matches(args: &[&str]) -> ArgMatches {
        let app = create_app();

        let app = app.mut_args(|arg| arg.env(None::<&str>));

        app.try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = client_config(&matches(&["s3idle"])).unwrap();

        assert_eq!(config.bucket_name, None);
        assert_eq!(config.mode, ReportMode::Idle);
        assert_eq!(config.thresholds, IdleThresholds::default());
    }

    #[test]
    fn test_all_args() {
        let args = matches(&[
            "s3idle",
            "--bucket", "some-bucket",
            "--region", "ap-south-1",
            "--mode", "usage",
            "--max-size-gb", "2.5",
            "--max-objects", "500",
            "--max-requests", "1",
        ]);

        let config = client_config(&args).unwrap();

        assert_eq!(config.bucket_name, Some("some-bucket".into()));
        assert_eq!(config.region.name(), "ap-south-1");
        assert_eq!(config.mode, ReportMode::Usage);
        assert_eq!(config.thresholds, IdleThresholds {
            max_size_gb:  2.5,
            max_objects:  500,
            max_requests: 1,
        });
    }

    #[test]
    fn test_invalid_mode() {
        let app = create_app().mut_args(|arg| arg.env(None::<&str>));
        let ret = app.try_get_matches_from(["s3idle", "--mode", "metrics"]);

        assert!(ret.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = matches(&["s3idle", "--config", "does-not-exist.toml"]);

        assert!(client_config(&args).is_err());
    }
}
