//! Immutable comparison result shapes.
//!
//! A result is a full snapshot: recomputed from scratch on every request,
//! never patched. All maps are `BTreeMap` so identical inputs serialize
//! to identical output, which the UI relies on for cache keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::indicators::registry::IndicatorCategory;
use crate::models::comparison::{
    AggregateLevel, ComparisonDiff, MetricStats, MetricValue,
};

/// Metrics realized per requested category, in registry order.
pub type MetricsByGroup = BTreeMap<IndicatorCategory, Vec<MetricValue>>;

/// Per-metric ranking: indicator key -> (subject id -> rank).
pub type Rankings = BTreeMap<String, BTreeMap<String, u32>>;

/// A compared subject's identity as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
    pub label: String,
}

/// Diffs between one consecutive pair of compared years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPairDiff {
    pub from_year: u16,
    pub to_year: u16,
    /// Indicator key -> diff. A key is absent when either endpoint value
    /// is missing for that indicator.
    pub diffs: BTreeMap<String, ComparisonDiff>,
}

/// One sitio across several years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalComparison {
    pub sitio_id: String,
    pub sitio_label: String,
    pub years: Vec<u16>,
    pub subjects: Vec<SubjectRef>,
    pub metrics_by_group: MetricsByGroup,
    pub year_over_year: Vec<YearPairDiff>,
    /// First requested year to last, per indicator key.
    pub overall_trend: BTreeMap<String, ComparisonDiff>,
}

/// Several sitios in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialComparison {
    pub year: u16,
    pub subjects: Vec<SubjectRef>,
    pub metrics_by_group: MetricsByGroup,
    pub rankings: Rankings,
    pub stats: BTreeMap<String, MetricStats>,
}

/// A sitio that contributed an older year's profile to an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaleContributor {
    pub sitio_id: String,
    pub sitio_name: String,
    pub year_used: u16,
}

/// One aggregated entity's composition, exposed so consumers can flag
/// roll-ups built from stale per-sitio years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    pub sitio_count: u32,
    pub stale_contributors: Vec<StaleContributor>,
}

/// Municipalities or barangays compared via member-sitio roll-ups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateComparison {
    pub year: u16,
    pub level: AggregateLevel,
    pub entities: Vec<EntitySummary>,
    pub subjects: Vec<SubjectRef>,
    pub metrics_by_group: MetricsByGroup,
    pub rankings: Rankings,
    pub stats: BTreeMap<String, MetricStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComparisonResult {
    Temporal(TemporalComparison),
    Spatial(SpatialComparison),
    Aggregate(AggregateComparison),
}

impl ComparisonResult {
    pub fn subjects(&self) -> &[SubjectRef] {
        match self {
            ComparisonResult::Temporal(r) => &r.subjects,
            ComparisonResult::Spatial(r) => &r.subjects,
            ComparisonResult::Aggregate(r) => &r.subjects,
        }
    }

    pub fn metrics_by_group(&self) -> &MetricsByGroup {
        match self {
            ComparisonResult::Temporal(r) => &r.metrics_by_group,
            ComparisonResult::Spatial(r) => &r.metrics_by_group,
            ComparisonResult::Aggregate(r) => &r.metrics_by_group,
        }
    }
}
