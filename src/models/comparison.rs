//! Comparison request and metric value types.

use serde::{Deserialize, Serialize};

use crate::indicators::registry::IndicatorCategory;

/// Directionality of an indicator: whether a higher value is an
/// improvement, a deterioration, or carries no judgment at all.
///
/// This is deliberately a three-valued enum, not an `Option<bool>`:
/// ranking and trend coloring branch on all three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher is better (e.g. electrification rate).
    Positive,
    /// Higher is worse (e.g. flood exposure rate).
    Negative,
    /// No judgment rendered (e.g. average household size).
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Change between two values of the same indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDiff {
    pub change: f64,
    pub change_percent: f64,
    pub trend: Trend,
    /// Whether the change is an improvement. Always `false` for
    /// `Polarity::Neutral` indicators; UI color-coding depends on this.
    pub is_positive: bool,
}

/// One subject's value for one metric. `value` is `None` when the subject
/// has no profile for the year in question; the subject still occupies
/// its slot so positions stay aligned across metrics and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectValue {
    pub subject_id: String,
    pub subject_label: String,
    pub value: Option<f64>,
    pub display_value: String,
}

/// One metric realized across all compared subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub key: String,
    pub label: String,
    pub short_label: String,
    pub category: IndicatorCategory,
    pub is_percentage: bool,
    pub polarity: Polarity,
    pub values: Vec<SubjectValue>,
}

/// Min/max/average over the non-null subject values of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonType {
    Temporal,
    Spatial,
    Aggregate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateLevel {
    Municipality,
    Barangay,
}

impl AggregateLevel {
    pub fn label(self) -> &'static str {
        match self {
            AggregateLevel::Municipality => "municipality",
            AggregateLevel::Barangay => "barangay",
        }
    }
}

/// A comparison request as submitted by the dashboard controls.
///
/// Shape rules (enforced by validation, not by construction, so every
/// violation can be reported at once):
/// - temporal: exactly one sitio, 2..=max_years distinct years
/// - spatial: 2..=max_sitios sitios, exactly one year
/// - aggregate: a level plus 2..=max_sitios entity names, exactly one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub comparison_type: ComparisonType,
    #[serde(default)]
    pub sitio_ids: Vec<String>,
    #[serde(default)]
    pub years: Vec<u16>,
    #[serde(default)]
    pub aggregate_level: Option<AggregateLevel>,
    #[serde(default)]
    pub aggregate_entities: Vec<String>,
    #[serde(default)]
    pub metric_groups: Vec<IndicatorCategory>,
}
