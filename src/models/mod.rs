//! Shared data models spanning the engine layers.

pub mod comparison;
pub mod profile;
pub mod result;

pub use comparison::{
    AggregateLevel, ComparisonConfig, ComparisonDiff, ComparisonType, MetricStats, MetricValue,
    Polarity, SubjectValue, Trend,
};
pub use profile::{SitioProfile, SitioRecord};
pub use result::{
    AggregateComparison, ComparisonResult, EntitySummary, SpatialComparison, StaleContributor,
    SubjectRef, TemporalComparison, YearPairDiff,
};
