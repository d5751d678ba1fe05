// Implements the MetricSource trait for CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_cloudwatch::operation::get_metric_data::GetMetricDataOutput;
use crate::common::{
    MetricQuery,
    MetricResult,
    MetricSource,
    TimeWindow,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl MetricSource for Client {
    /// Query CloudWatch for the given `queries`, following pagination.
    async fn get_metric_data(
        &self,
        queries: &[MetricQuery],
        window: &TimeWindow,
    ) -> Result<Vec<MetricResult>> {
        let outputs = self.get_metric_data_outputs(queries, window).await?;

        Ok(metric_results(outputs))
    }
}

// Flattens the pages of output into one MetricResult per query id.
//
// A query's values may be split over several pages, those are appended in
// the order the pages arrived, which keeps them newest first.
fn metric_results(outputs: Vec<GetMetricDataOutput>) -> Vec<MetricResult> {
    let mut results: Vec<MetricResult> = Vec::new();

    for output in outputs {
        let metric_data_results = match output.metric_data_results {
            Some(r) => r,
            None    => continue,
        };

        for data in metric_data_results {
            // Results without an id can't be matched to a query.
            let id = match data.id {
                Some(id) => id,
                None     => continue,
            };

            let values = data.values.unwrap_or_default();

            debug!(
                "metric_results: '{}' returned {} values",
                id,
                values.len(),
            );

            match results.iter_mut().find(|r| r.id == id) {
                Some(result) => result.values.extend(values),
                None         => {
                    results.push(MetricResult {
                        id:     id,
                        label:  data.label,
                        values: values,
                    });
                },
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudwatch::client::tests::{
        cloudwatch_get_metric_data,
        mock_client,
        query,
        window,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_get_metric_data() {
        let cbor = cloudwatch_get_metric_data(
            &[
                ("size",    &[1_073_741_824.0]),
                ("objects", &[10.0, 9.0]),
            ],
            None,
        );

        let client = mock_client(vec![cbor]);

        let queries = vec![
            query("size", "BucketSizeBytes"),
            query("objects", "NumberOfObjects"),
        ];

        let ret = client.get_metric_data(&queries, &window())
            .await
            .unwrap();

        let expected = vec![
            MetricResult {
                id:     "size".into(),
                label:  Some("size".into()),
                values: vec![1_073_741_824.0],
            },
            MetricResult {
                id:     "objects".into(),
                label:  Some("objects".into()),
                values: vec![10.0, 9.0],
            },
        ];

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_get_metric_data_no_values() {
        let cbor = cloudwatch_get_metric_data(&[("requests", &[])], None);
        let client = mock_client(vec![cbor]);

        let ret = client.get_metric_data(
            &[query("requests", "AllRequests")],
            &window(),
        ).await.unwrap();

        assert_eq!(ret.len(), 1);
        assert!(ret[0].values.is_empty());
    }

    #[tokio::test]
    async fn test_get_metric_data_merges_pages() {
        let first = cloudwatch_get_metric_data(
            &[("requests", &[7.0, 6.0])],
            Some("token"),
        );

        let second = cloudwatch_get_metric_data(
            &[("requests", &[5.0])],
            None,
        );

        let client = mock_client(vec![first, second]);

        let ret = client.get_metric_data(
            &[query("requests", "AllRequests")],
            &window(),
        ).await.unwrap();

        assert_eq!(ret.len(), 1);
        assert_eq!(ret[0].values, vec![7.0, 6.0, 5.0]);
    }
}
