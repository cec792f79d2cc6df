use std::collections::HashSet;

use sitiometrics::indicators::registry::{
    all_indicators, get_indicator, indicators_by_category, IndicatorCategory,
};
use sitiometrics::models::comparison::Polarity;
use sitiometrics::models::profile::SitioProfile;

#[test]
fn keys_are_globally_unique() {
    let keys: HashSet<&str> = all_indicators().iter().map(|d| d.key).collect();
    assert_eq!(keys.len(), all_indicators().len());
}

#[test]
fn lookup_finds_known_keys() {
    let def = get_indicator("electricityPercent").expect("registered indicator");
    assert_eq!(def.category, IndicatorCategory::Utilities);
    assert!(def.is_percentage());
}

#[test]
fn lookup_returns_none_for_unknown_key() {
    assert!(get_indicator("definitelyNotAnIndicator").is_none());
}

#[test]
fn every_category_has_indicators() {
    for &category in IndicatorCategory::all() {
        assert!(
            !indicators_by_category(category).is_empty(),
            "{:?} has no indicators",
            category
        );
    }
}

#[test]
fn category_listing_respects_default_order() {
    for &category in IndicatorCategory::all() {
        let defs = indicators_by_category(category);
        for pair in defs.windows(2) {
            assert!(pair[0].default_order <= pair[1].default_order);
            assert_eq!(pair[0].category, category);
        }
    }
}

#[test]
fn accessors_are_total_over_an_empty_profile() {
    let empty = SitioProfile::default();
    for def in all_indicators() {
        let value = def.value(&empty);
        assert!(value.is_finite(), "{} produced a non-finite value", def.key);
        assert_eq!(value, 0.0, "{} is nonzero on an empty profile", def.key);
    }
}

#[test]
fn polarity_covers_all_three_states() {
    assert_eq!(
        get_indicator("totalPopulation").unwrap().polarity,
        Polarity::Positive
    );
    assert_eq!(
        get_indicator("openDefecationPercent").unwrap().polarity,
        Polarity::Negative
    );
    assert_eq!(
        get_indicator("averageHouseholdSize").unwrap().polarity,
        Polarity::Neutral
    );
}

#[test]
fn priority_ratings_rank_lower_as_better() {
    for def in indicators_by_category(IndicatorCategory::Priorities) {
        assert_eq!(def.polarity, Polarity::Negative, "{}", def.key);
    }
}
