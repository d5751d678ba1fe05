// s3idle: Report on how much an S3 bucket is being used, from CloudWatch.
#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod cloudwatch;
mod common;
mod usage;

use common::{
    ClientConfig,
    MetricSource,
    ReportMode,
};
use usage::{
    IdleReport,
    UsageAggregator,
    UsageReport,
};

// Logs go to stderr so they never end up mixed into the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Take a snapshot of the bucket and render the requested report.
async fn report<S>(source: &S, config: &ClientConfig) -> Result<String>
where
    S: MetricSource + ?Sized,
{
    let bucket_name = config.require_bucket_name()?;

    let aggregator = UsageAggregator::new(source, bucket_name);
    let snapshot   = aggregator.snapshot(Utc::now()).await?;

    let report = match config.mode {
        ReportMode::Idle => {
            let verdict = config.thresholds.classify(&snapshot);

            info!("report: '{}' is {}", bucket_name, verdict);

            IdleReport {
                snapshot: &snapshot,
                verdict:  verdict,
            }.to_string()
        },
        ReportMode::Usage => {
            UsageReport {
                snapshot: &snapshot,
            }.to_string()
        },
    };

    Ok(report)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let matches = cli::parse_args();
    let config  = cli::client_config(&matches)?;

    // Fail on a missing bucket before going anywhere near AWS.
    config.require_bucket_name()?;

    let client = cloudwatch::Client::new(&config).await;

    let report = report(&client, &config).await?;

    println!();
    print!("{}", report);

    Ok(())
}
