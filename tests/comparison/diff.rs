use sitiometrics::comparison::diff::compute_diff;
use sitiometrics::models::comparison::{Polarity, Trend};

#[test]
fn growth_on_positive_indicator_is_an_improvement() {
    let diff = compute_diff(100.0, 150.0, Polarity::Positive);
    assert_eq!(diff.change, 50.0);
    assert_eq!(diff.change_percent, 50.0);
    assert_eq!(diff.trend, Trend::Up);
    assert!(diff.is_positive);
}

#[test]
fn decline_on_positive_indicator_is_not() {
    let diff = compute_diff(10.0, 5.0, Polarity::Positive);
    assert_eq!(diff.change, -5.0);
    assert_eq!(diff.change_percent, -50.0);
    assert_eq!(diff.trend, Trend::Down);
    assert!(!diff.is_positive);
}

#[test]
fn decline_on_negative_indicator_is_an_improvement() {
    let diff = compute_diff(10.0, 5.0, Polarity::Negative);
    assert_eq!(diff.trend, Trend::Down);
    assert!(diff.is_positive);
}

#[test]
fn neutral_indicators_are_never_judged() {
    assert!(!compute_diff(10.0, 15.0, Polarity::Neutral).is_positive);
    assert!(!compute_diff(15.0, 10.0, Polarity::Neutral).is_positive);
    assert!(!compute_diff(10.0, 10.0, Polarity::Neutral).is_positive);
}

#[test]
fn change_from_zero_is_reported_as_hundred_percent() {
    // Product convention, not math: 0 -> N renders as a 100% increase.
    let diff = compute_diff(0.0, 5.0, Polarity::Positive);
    assert_eq!(diff.change_percent, 100.0);
    assert_eq!(diff.trend, Trend::Up);
}

#[test]
fn zero_to_zero_is_flat_at_zero_percent() {
    let diff = compute_diff(0.0, 0.0, Polarity::Positive);
    assert_eq!(diff.change_percent, 0.0);
    assert_eq!(diff.trend, Trend::Flat);
    assert!(!diff.is_positive);
}

#[test]
fn no_change_is_flat_for_every_polarity() {
    for polarity in [Polarity::Positive, Polarity::Negative, Polarity::Neutral] {
        let diff = compute_diff(7.0, 7.0, polarity);
        assert_eq!(diff.trend, Trend::Flat);
        assert!(!diff.is_positive);
    }
}

#[test]
fn any_nonzero_change_is_directional() {
    assert_eq!(compute_diff(100.0, 100.001, Polarity::Neutral).trend, Trend::Up);
    assert_eq!(compute_diff(100.0, 99.999, Polarity::Neutral).trend, Trend::Down);
}
