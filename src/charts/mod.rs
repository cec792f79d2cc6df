//! Chart-facing projections of comparison results.
//!
//! Chart components want parallel label/value arrays, one slot per
//! subject. Missing values stay `None` so a line chart renders a gap,
//! never a zero.

use serde::{Deserialize, Serialize};

use crate::models::comparison::MetricValue;
use crate::models::result::ComparisonResult;

/// One metric's values across all compared subjects, chart-ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric_key: String,
    pub metric_label: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

/// Project one metric into parallel label/value arrays.
pub fn metric_series(metric: &MetricValue) -> MetricSeries {
    MetricSeries {
        metric_key: metric.key.clone(),
        metric_label: metric.label.clone(),
        labels: metric.values.iter().map(|v| v.subject_label.clone()).collect(),
        values: metric.values.iter().map(|v| v.value).collect(),
    }
}

/// Look up one metric anywhere in a result by indicator key.
pub fn find_metric<'a>(result: &'a ComparisonResult, key: &str) -> Option<&'a MetricValue> {
    result
        .metrics_by_group()
        .values()
        .flatten()
        .find(|m| m.key == key)
}

/// Series for one metric of a result, if the key was part of it.
pub fn series_for(result: &ComparisonResult, key: &str) -> Option<MetricSeries> {
    find_metric(result, key).map(metric_series)
}
