use sitiometrics::comparison::aggregation::{aggregate_entity, sitios_in_entity};
use sitiometrics::indicators::utilities;
use sitiometrics::models::comparison::AggregateLevel;
use sitiometrics::models::profile::SitioProfile;

use crate::fixtures;

#[test]
fn rates_come_from_summed_fields_not_averaged_percentages() {
    // 5/10 = 50% and 15/20 = 75%; the correct roll-up is 20/30 = 66.7%,
    // not the naive (50+75)/2 = 62.5%.
    let a = fixtures::sitio("s1", "Proper", "BANGA", "Linao")
        .with_year(2023, fixtures::profile_with_electricity(10, 5));
    let b = fixtures::sitio("s2", "Riverside", "BANGA", "Linao")
        .with_year(2023, fixtures::profile_with_electricity(20, 15));

    let entity = aggregate_entity("BANGA", AggregateLevel::Municipality, &[&a, &b], 2023);
    assert_eq!(entity.sitio_count, 2);

    let rate = utilities::electricity_percent(&entity.profile);
    assert!((rate - 66.666_666).abs() < 0.001, "got {}", rate);
    assert!((rate - 62.5).abs() > 1.0);
}

#[test]
fn missing_year_falls_back_to_latest_prior_with_visible_marker() {
    let current = fixtures::sitio("s1", "Proper", "BANGA", "Linao")
        .with_year(2023, fixtures::profile_with_electricity(10, 5));
    let stale = fixtures::sitio("s2", "Hilltop", "BANGA", "Linao")
        .with_year(2021, fixtures::profile_with_electricity(20, 15));

    let entity = aggregate_entity("BANGA", AggregateLevel::Municipality, &[&current, &stale], 2023);
    assert_eq!(entity.sitio_count, 2);
    assert_eq!(entity.stale_contributors.len(), 1);
    assert_eq!(entity.stale_contributors[0].sitio_id, "s2");
    assert_eq!(entity.stale_contributors[0].year_used, 2021);

    // The stale profile's counts are still in the totals.
    let rate = utilities::electricity_percent(&entity.profile);
    assert!((rate - 66.666_666).abs() < 0.001);
}

#[test]
fn sitio_with_only_future_data_is_excluded_from_the_count() {
    let current = fixtures::sitio("s1", "Proper", "BANGA", "Linao")
        .with_year(2023, fixtures::profile_with_electricity(10, 5));
    let future_only = fixtures::sitio("s2", "Newsite", "BANGA", "Linao")
        .with_year(2024, fixtures::profile_with_electricity(50, 50));

    let entity =
        aggregate_entity("BANGA", AggregateLevel::Municipality, &[&current, &future_only], 2023);
    assert_eq!(entity.sitio_count, 1);
    assert!(entity.stale_contributors.is_empty());
    assert_eq!(utilities::electricity_percent(&entity.profile), 50.0);
}

#[test]
fn flags_merge_with_or_and_priorities_with_max() {
    let with_facility = fixtures::sitio("s1", "Proper", "BANGA", "Linao").with_year(2023, {
        let mut p = fixtures::profile_with_facilities(true, 2);
        p.priorities = Some(fixtures::priorities(2, 5));
        p
    });
    let without = fixtures::sitio("s2", "Hilltop", "BANGA", "Linao").with_year(2023, {
        let mut p = fixtures::profile_with_facilities(false, 3);
        p.priorities = Some(fixtures::priorities(4, 1));
        p
    });

    let entity =
        aggregate_entity("BANGA", AggregateLevel::Municipality, &[&with_facility, &without], 2023);
    let facilities = entity.profile.facilities.as_ref().unwrap();
    assert!(facilities.has_health_station);
    assert_eq!(facilities.sari_sari_stores, 5);

    let priorities = entity.profile.priorities.as_ref().unwrap();
    assert_eq!(priorities.water, 4);
    assert_eq!(priorities.roads, 5);
}

#[test]
fn custom_fields_sum_per_key() {
    let mut p1 = SitioProfile::default();
    p1.custom_fields.insert("motorBoats".to_string(), 3.0);
    let mut p2 = SitioProfile::default();
    p2.custom_fields.insert("motorBoats".to_string(), 4.0);
    p2.custom_fields.insert("tricycles".to_string(), 7.0);

    let a = fixtures::sitio("s1", "Proper", "BANGA", "Linao").with_year(2023, p1);
    let b = fixtures::sitio("s2", "Riverside", "BANGA", "Linao").with_year(2023, p2);

    let entity = aggregate_entity("BANGA", AggregateLevel::Municipality, &[&a, &b], 2023);
    assert_eq!(entity.profile.custom_fields["motorBoats"], 7.0);
    assert_eq!(entity.profile.custom_fields["tricycles"], 7.0);
}

#[test]
fn entity_membership_filters_by_level() {
    let records = vec![
        fixtures::sitio("s1", "Proper", "BANGA", "Linao"),
        fixtures::sitio("s2", "Hilltop", "BANGA", "Mabini"),
        fixtures::sitio("s3", "Coastal", "DAO", "Linao"),
    ];

    let by_municipality = sitios_in_entity(&records, AggregateLevel::Municipality, "BANGA");
    assert_eq!(by_municipality.len(), 2);

    let by_barangay = sitios_in_entity(&records, AggregateLevel::Barangay, "Linao");
    assert_eq!(by_barangay.len(), 2);

    assert!(sitios_in_entity(&records, AggregateLevel::Municipality, "NOWHERE").is_empty());
}
