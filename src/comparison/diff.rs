//! Year-over-year diff and trend classification.

use crate::models::comparison::{ComparisonDiff, Polarity, Trend};

/// Compute the change between two values of the same indicator.
///
/// Percentage policy: a move from 0 to any nonzero value is reported as
/// a 100% increase and 0 to 0 as 0%. This is a product convention for
/// trend badges, not derived math; do not "fix" it to infinity.
///
/// `is_positive` renders the improvement judgment: growth is good for
/// `Positive` indicators, shrinkage is good for `Negative` ones, and
/// `Neutral` indicators are never judged (`false` regardless of change).
pub fn compute_diff(previous: f64, current: f64, polarity: Polarity) -> ComparisonDiff {
    let change = current - previous;

    let change_percent = if previous == 0.0 {
        if current == 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        (change / previous) * 100.0
    };

    let trend = if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        Trend::Flat
    };

    let is_positive = match polarity {
        Polarity::Positive => change > 0.0,
        Polarity::Negative => change < 0.0,
        Polarity::Neutral => false,
    };

    ComparisonDiff {
        change,
        change_percent,
        trend,
        is_positive,
    }
}
