// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::operation::get_metric_data::GetMetricDataOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    Dimension,
    Metric,
    MetricDataQuery,
    MetricStat,
    ScanBy,
};
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    ClientConfig,
    MetricQuery,
    TimeWindow,
};
use tracing::debug;

/// A `CloudWatch` `Client`
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,
}

impl Client {
    /// Return a new `Client` with the given `ClientConfig`.
    ///
    /// Credentials are resolved by the AWS SDK default provider chain.
    pub async fn new(config: &ClientConfig) -> Self {
        let region = config.region.clone();

        debug!("new: Creating CloudWatchClient in region '{}'", region.name());

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let client = CloudWatchClient::new(&config);

        Self {
            client,
        }
    }

    /// Returns every page of `GetMetricDataOutput` for the given `queries`
    /// over `window`.
    ///
    /// Results are requested newest first.
    pub async fn get_metric_data_outputs(
        &self,
        queries: &[MetricQuery],
        window: &TimeWindow,
    ) -> Result<Vec<GetMetricDataOutput>> {
        debug!(
            "get_metric_data_outputs: {} queries from {} to {}",
            queries.len(),
            window.start,
            window.end,
        );

        let start_time = DateTime::from_chrono_utc(window.start);
        let end_time   = DateTime::from_chrono_utc(window.end);

        let metric_data_queries: Vec<MetricDataQuery> = queries.iter()
            .map(metric_data_query)
            .collect();

        let mut outputs    = Vec::new();
        let mut next_token = None;

        // We loop until we've processed everything.
        loop {
            let output = self.client.get_metric_data()
                .set_metric_data_queries(Some(metric_data_queries.clone()))
                .start_time(start_time)
                .end_time(end_time)
                .scan_by(ScanBy::TimestampDescending)
                .set_next_token(next_token)
                .send()
                .await
                .context("GetMetricData request failed")?;

            debug!("get_metric_data_outputs: API returned: {:#?}", output);

            next_token = output.next_token.clone();

            outputs.push(output);

            if next_token.is_none() {
                break;
            }
        }

        Ok(outputs)
    }
}

// Converts our MetricQuery into the query type expected by the SDK.
fn metric_data_query(query: &MetricQuery) -> MetricDataQuery {
    let dimensions = query.dimensions.iter()
        .map(|dimension| {
            Dimension::builder()
                .name(dimension.name.clone())
                .value(dimension.value.clone())
                .build()
        })
        .collect();

    let metric = Metric::builder()
        .namespace(query.namespace.clone())
        .metric_name(query.metric_name.clone())
        .set_dimensions(Some(dimensions))
        .build();

    let metric_stat = MetricStat::builder()
        .metric(metric)
        .period(query.period)
        .stat(query.statistic.as_str())
        .build();

    MetricDataQuery::builder()
        .id(query.id.clone())
        .metric_stat(metric_stat)
        .return_data(true)
        .build()
}
