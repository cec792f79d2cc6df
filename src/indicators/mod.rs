//! Indicator derivation: accessor functions and the registry.
//!
//! Every accessor is a total, side-effect-free function over a single
//! `SitioProfile`. Missing sections and zero denominators yield `0.0`,
//! never `NaN` or a panic, so the ranking and diff layers can treat all
//! indicator values as plain finite numbers.

pub mod format;
pub mod registry;

pub mod demographics;
pub mod education;
pub mod facilities;
pub mod hazards;
pub mod infrastructure;
pub mod livelihood;
pub mod priorities;
pub mod utilities;
pub mod water;

pub use format::ValueFormat;
pub use registry::*;

/// Percentage share with a guarded denominator.
pub(crate) fn share(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    (numerator / denominator) * 100.0
}

/// Plain ratio with a guarded denominator.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Boolean facts map to 0/1 so every indicator is uniformly numeric.
pub(crate) fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
