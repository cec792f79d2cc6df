//! Comparison config validation.
//!
//! Every check runs and every failure is collected, so the dashboard can
//! show all corrective messages at once instead of one per submit.

use std::collections::BTreeSet;

use crate::comparison::aggregation::sitios_in_entity;
use crate::config::ComparisonLimits;
use crate::models::comparison::{ComparisonConfig, ComparisonType};
use crate::models::profile::SitioRecord;

/// Validate a config against the records and limits. An empty list means
/// the config is runnable. Counts are over distinct values, so duplicate
/// entries cannot sneak a degenerate comparison past the bounds.
pub fn validate(
    config: &ComparisonConfig,
    records: &[SitioRecord],
    limits: &ComparisonLimits,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let distinct_years: BTreeSet<u16> = config.years.iter().copied().collect();
    let distinct_sitios: BTreeSet<&String> = config.sitio_ids.iter().collect();
    let distinct_entities: BTreeSet<&String> = config.aggregate_entities.iter().collect();

    match config.comparison_type {
        ComparisonType::Temporal => {
            if distinct_sitios.len() != 1 {
                reasons.push("Temporal comparison requires exactly one sitio".to_string());
            }
            if distinct_years.len() < 2 {
                reasons.push("Select at least 2 years".to_string());
            } else if distinct_years.len() > limits.max_years {
                reasons.push(format!("Select at most {} years", limits.max_years));
            }
        }
        ComparisonType::Spatial => {
            if distinct_sitios.len() < 2 {
                reasons.push("Select at least 2 sitios".to_string());
            } else if distinct_sitios.len() > limits.max_sitios {
                reasons.push(format!("Select at most {} sitios", limits.max_sitios));
            }
            if distinct_years.len() != 1 {
                reasons.push("Select exactly 1 year".to_string());
            }
        }
        ComparisonType::Aggregate => {
            if config.aggregate_level.is_none() {
                reasons.push("Aggregate comparison requires an aggregate level".to_string());
            }
            if distinct_entities.len() < 2 {
                reasons.push("Select at least 2 entities".to_string());
            } else if distinct_entities.len() > limits.max_sitios {
                reasons.push(format!("Select at most {} entities", limits.max_sitios));
            }
            if distinct_years.len() != 1 {
                reasons.push("Select exactly 1 year".to_string());
            }
        }
    }

    if config.metric_groups.is_empty() {
        reasons.push("Select at least one metric group".to_string());
    }

    match config.comparison_type {
        ComparisonType::Temporal | ComparisonType::Spatial => {
            for id in &distinct_sitios {
                if !records.iter().any(|r| &r.id == *id) {
                    reasons.push(format!("Unknown sitio: {}", id));
                }
            }
        }
        ComparisonType::Aggregate => {
            if let Some(level) = config.aggregate_level {
                for name in &distinct_entities {
                    if sitios_in_entity(records, level, name).is_empty() {
                        reasons.push(format!(
                            "No sitios found for {} '{}'",
                            level.label(),
                            name
                        ));
                    }
                }
            }
        }
    }

    reasons
}
