//! Comparison orchestrator.
//!
//! Stateless: every call is a pure function of `(config, records,
//! limits)` and returns either a complete immutable result or the full
//! validation reason list. Nothing is extracted before validation
//! passes, so there is no partial-result state to represent.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::comparison::aggregation::{aggregate_entity, sitios_in_entity};
use crate::comparison::diff::compute_diff;
use crate::comparison::metrics::{extract_metrics, metric_stats, Subject};
use crate::comparison::ranking::rank_subjects;
use crate::comparison::validation::validate;
use crate::config::ComparisonLimits;
use crate::error::ComparisonError;
use crate::indicators::registry::{indicators_by_category, IndicatorCategory};
use crate::models::comparison::{
    ComparisonConfig, ComparisonDiff, ComparisonType, MetricStats, MetricValue,
};
use crate::models::profile::SitioRecord;
use crate::models::result::{
    AggregateComparison, ComparisonResult, EntitySummary, MetricsByGroup, Rankings,
    SpatialComparison, SubjectRef, TemporalComparison, YearPairDiff,
};

pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Run one comparison. Invalid configs are rejected with every
    /// failure reason before any metric is extracted.
    pub fn compare(
        config: &ComparisonConfig,
        records: &[SitioRecord],
        limits: &ComparisonLimits,
    ) -> Result<ComparisonResult, ComparisonError> {
        let reasons = validate(config, records, limits);
        if !reasons.is_empty() {
            return Err(ComparisonError::InvalidConfig(reasons));
        }

        debug!(?config.comparison_type, "running comparison");
        match config.comparison_type {
            ComparisonType::Temporal => Self::compare_temporal(config, records),
            ComparisonType::Spatial => Self::compare_spatial(config, records),
            ComparisonType::Aggregate => Self::compare_aggregate(config, records),
        }
    }

    fn compare_temporal(
        config: &ComparisonConfig,
        records: &[SitioRecord],
    ) -> Result<ComparisonResult, ComparisonError> {
        let sitio_id = &config.sitio_ids[0];
        // Validation guarantees the record exists.
        let record = records
            .iter()
            .find(|r| &r.id == sitio_id)
            .ok_or_else(|| ComparisonError::InvalidConfig(vec![format!("Unknown sitio: {}", sitio_id)]))?;

        let years: Vec<u16> = config
            .years
            .iter()
            .copied()
            .collect::<BTreeSet<u16>>()
            .into_iter()
            .collect();

        let subjects: Vec<Subject> = years
            .iter()
            .map(|&year| {
                Subject::new(
                    year.to_string(),
                    year.to_string(),
                    record.profile_for(year).cloned(),
                )
            })
            .collect();

        let keys = Self::indicator_keys(&config.metric_groups);
        let metrics = extract_metrics(&subjects, &keys);

        let year_over_year = years
            .windows(2)
            .map(|pair| YearPairDiff {
                from_year: pair[0],
                to_year: pair[1],
                diffs: Self::diffs_between(&metrics, pair[0], pair[1]),
            })
            .collect();

        let first = years[0];
        let last = years[years.len() - 1];
        let overall_trend = Self::diffs_between(&metrics, first, last);

        Ok(ComparisonResult::Temporal(TemporalComparison {
            sitio_id: record.id.clone(),
            sitio_label: record.name.clone(),
            years,
            subjects: Self::subject_refs(&subjects),
            metrics_by_group: Self::group_metrics(metrics),
            year_over_year,
            overall_trend,
        }))
    }

    fn compare_spatial(
        config: &ComparisonConfig,
        records: &[SitioRecord],
    ) -> Result<ComparisonResult, ComparisonError> {
        let year = config.years[0];

        let mut subjects = Vec::new();
        let mut seen = BTreeSet::new();
        for id in &config.sitio_ids {
            if !seen.insert(id.clone()) {
                continue;
            }
            let record = records
                .iter()
                .find(|r| &r.id == id)
                .ok_or_else(|| ComparisonError::InvalidConfig(vec![format!("Unknown sitio: {}", id)]))?;
            subjects.push(Subject::new(
                record.id.clone(),
                record.name.clone(),
                record.profile_for(year).cloned(),
            ));
        }

        let keys = Self::indicator_keys(&config.metric_groups);
        let metrics = extract_metrics(&subjects, &keys);
        let (rankings, stats) = Self::rank_and_summarize(&metrics);

        Ok(ComparisonResult::Spatial(SpatialComparison {
            year,
            subjects: Self::subject_refs(&subjects),
            metrics_by_group: Self::group_metrics(metrics),
            rankings,
            stats,
        }))
    }

    fn compare_aggregate(
        config: &ComparisonConfig,
        records: &[SitioRecord],
    ) -> Result<ComparisonResult, ComparisonError> {
        let year = config.years[0];
        // Validation guarantees the level is present.
        let level = config.aggregate_level.ok_or_else(|| {
            ComparisonError::InvalidConfig(vec![
                "Aggregate comparison requires an aggregate level".to_string(),
            ])
        })?;

        let mut subjects = Vec::new();
        let mut entities = Vec::new();
        let mut seen = BTreeSet::new();
        for name in &config.aggregate_entities {
            if !seen.insert(name.clone()) {
                continue;
            }
            let members = sitios_in_entity(records, level, name);
            let aggregated = aggregate_entity(name, level, &members, year);
            // An entity whose member sitios have no usable year renders
            // as N/A rather than as a row of zeroes.
            let profile = (aggregated.sitio_count > 0).then_some(aggregated.profile);
            subjects.push(Subject::new(name.clone(), name.clone(), profile));
            entities.push(EntitySummary {
                name: aggregated.name,
                sitio_count: aggregated.sitio_count,
                stale_contributors: aggregated.stale_contributors,
            });
        }

        let keys = Self::indicator_keys(&config.metric_groups);
        let metrics = extract_metrics(&subjects, &keys);
        let (rankings, stats) = Self::rank_and_summarize(&metrics);

        Ok(ComparisonResult::Aggregate(AggregateComparison {
            year,
            level,
            entities,
            subjects: Self::subject_refs(&subjects),
            metrics_by_group: Self::group_metrics(metrics),
            rankings,
            stats,
        }))
    }

    /// All indicator keys for the requested categories, registry order,
    /// duplicate categories collapsed.
    fn indicator_keys(groups: &[IndicatorCategory]) -> Vec<&'static str> {
        let mut seen = BTreeSet::new();
        let mut keys = Vec::new();
        for &group in groups {
            if !seen.insert(group) {
                continue;
            }
            for def in indicators_by_category(group) {
                keys.push(def.key);
            }
        }
        keys
    }

    fn group_metrics(metrics: Vec<MetricValue>) -> MetricsByGroup {
        let mut grouped: MetricsByGroup = BTreeMap::new();
        for metric in metrics {
            grouped.entry(metric.category).or_default().push(metric);
        }
        grouped
    }

    fn subject_refs(subjects: &[Subject]) -> Vec<SubjectRef> {
        subjects
            .iter()
            .map(|s| SubjectRef {
                id: s.id.clone(),
                label: s.label.clone(),
            })
            .collect()
    }

    /// Per-metric diffs between two temporal subjects (keyed by year).
    /// A metric is skipped when either endpoint value is missing.
    fn diffs_between(
        metrics: &[MetricValue],
        from_year: u16,
        to_year: u16,
    ) -> BTreeMap<String, ComparisonDiff> {
        let from_id = from_year.to_string();
        let to_id = to_year.to_string();
        let mut diffs = BTreeMap::new();
        for metric in metrics {
            let previous = Self::value_of(metric, &from_id);
            let current = Self::value_of(metric, &to_id);
            if let (Some(previous), Some(current)) = (previous, current) {
                diffs.insert(
                    metric.key.clone(),
                    compute_diff(previous, current, metric.polarity),
                );
            }
        }
        diffs
    }

    fn value_of(metric: &MetricValue, subject_id: &str) -> Option<f64> {
        metric
            .values
            .iter()
            .find(|v| v.subject_id == subject_id)
            .and_then(|v| v.value)
    }

    fn rank_and_summarize(metrics: &[MetricValue]) -> (Rankings, BTreeMap<String, MetricStats>) {
        let mut rankings: Rankings = BTreeMap::new();
        let mut stats = BTreeMap::new();
        for metric in metrics {
            let values: Vec<(String, Option<f64>)> = metric
                .values
                .iter()
                .map(|v| (v.subject_id.clone(), v.value))
                .collect();
            rankings.insert(metric.key.clone(), rank_subjects(&values, metric.polarity));
            if let Some(summary) = metric_stats(metric) {
                stats.insert(metric.key.clone(), summary);
            }
        }
        (rankings, stats)
    }
}
