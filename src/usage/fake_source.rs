// In-memory MetricSource used by tests
#![forbid(unsafe_code)]
use anyhow::{
    anyhow,
    Result,
};
use async_trait::async_trait;
use crate::common::{
    MetricQuery,
    MetricResult,
    MetricSource,
    TimeWindow,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory `MetricSource`, keyed by metric name.
///
/// Metrics without any values are left out of the response entirely.
#[derive(Default)]
pub struct FakeSource {
    pub values:   HashMap<String, Vec<f64>>,
    pub fail_on:  Option<String>,
    pub requests: Mutex<Vec<(Vec<MetricQuery>, TimeWindow)>>,
}

impl FakeSource {
    pub fn with_values(values: &[(&str, f64)]) -> Self {
        let values = values.iter()
            .map(|(name, value)| (name.to_string(), vec![*value]))
            .collect();

        Self {
            values: values,
            ..Default::default()
        }
    }

    pub fn failing_on(metric_name: &str) -> Self {
        Self {
            fail_on: Some(metric_name.to_string()),
            ..Default::default()
        }
    }

    // All queries sent so far, in the order they were sent.
    pub fn queries(&self) -> Vec<(MetricQuery, TimeWindow)> {
        self.requests.lock()
            .unwrap()
            .iter()
            .flat_map(|(queries, window)| {
                queries.iter().map(move |q| (q.clone(), *window))
            })
            .collect()
    }
}

#[async_trait]
impl MetricSource for FakeSource {
    async fn get_metric_data(
        &self,
        queries: &[MetricQuery],
        window: &TimeWindow,
    ) -> Result<Vec<MetricResult>> {
        self.requests.lock()
            .unwrap()
            .push((queries.to_vec(), *window));

        let failing = queries.iter()
            .any(|q| Some(&q.metric_name) == self.fail_on.as_ref());

        if failing {
            return Err(anyhow!("Throttling: Rate exceeded"));
        }

        let results = queries.iter()
            .filter_map(|q| {
                self.values.get(&q.metric_name).map(|values| {
                    MetricResult {
                        id:     q.id.clone(),
                        label:  Some(q.metric_name.clone()),
                        values: values.clone(),
                    }
                })
            })
            .collect();

        Ok(results)
    }
}
