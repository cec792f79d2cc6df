//! Comparison pipeline: diffing, ranking, aggregation, validation, and
//! the orchestrating engine.

pub mod aggregation;
pub mod diff;
pub mod engine;
pub mod metrics;
pub mod ranking;
pub mod validation;

pub use aggregation::{aggregate_entity, sitios_in_entity, AggregatedEntity};
pub use diff::compute_diff;
pub use engine::ComparisonEngine;
pub use metrics::{extract_metrics, metric_stats, Subject};
pub use ranking::rank_subjects;
pub use validation::validate;
