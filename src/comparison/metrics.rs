//! Metric extraction across resolved comparison subjects.

use tracing::warn;

use crate::indicators::registry::get_indicator;
use crate::models::comparison::{MetricStats, MetricValue, SubjectValue};
use crate::models::profile::SitioProfile;

/// A resolved comparison subject: an id/label pair plus the profile the
/// metrics are read from. `profile` is `None` when the sitio has no data
/// for the year in question; the subject keeps its slot so value arrays
/// stay aligned across metrics and charts.
#[derive(Debug, Clone)]
pub struct Subject {
    pub id: String,
    pub label: String,
    pub profile: Option<SitioProfile>,
}

impl Subject {
    pub fn new(id: impl Into<String>, label: impl Into<String>, profile: Option<SitioProfile>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            profile,
        }
    }
}

/// Produce one `MetricValue` per known indicator key, each holding one
/// value per subject in subject order. Unknown keys are skipped (and
/// logged) rather than propagated as empty metrics.
pub fn extract_metrics(subjects: &[Subject], indicator_keys: &[&str]) -> Vec<MetricValue> {
    let mut metrics = Vec::with_capacity(indicator_keys.len());

    for &key in indicator_keys {
        let Some(def) = get_indicator(key) else {
            warn!(key, "unknown indicator key requested, skipping");
            continue;
        };

        let values = subjects
            .iter()
            .map(|subject| match subject.profile.as_ref() {
                Some(profile) => {
                    let value = def.value(profile);
                    SubjectValue {
                        subject_id: subject.id.clone(),
                        subject_label: subject.label.clone(),
                        value: Some(value),
                        display_value: def.format.render(value),
                    }
                }
                None => SubjectValue {
                    subject_id: subject.id.clone(),
                    subject_label: subject.label.clone(),
                    value: None,
                    display_value: "N/A".to_string(),
                },
            })
            .collect();

        metrics.push(MetricValue {
            key: def.key.to_string(),
            label: def.label.to_string(),
            short_label: def.short_label.to_string(),
            category: def.category,
            is_percentage: def.is_percentage(),
            polarity: def.polarity,
            values,
        });
    }

    metrics
}

/// Min/max/average over the non-null values of one metric. `None` when
/// every subject is missing data.
pub fn metric_stats(metric: &MetricValue) -> Option<MetricStats> {
    let present: Vec<f64> = metric.values.iter().filter_map(|v| v.value).collect();
    if present.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for value in &present {
        min = min.min(*value);
        max = max.max(*value);
        sum += value;
    }

    Some(MetricStats {
        min,
        max,
        average: sum / present.len() as f64,
    })
}
