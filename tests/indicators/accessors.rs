use sitiometrics::indicators::{
    demographics, education, facilities, infrastructure, livelihood, utilities, water,
};
use sitiometrics::models::profile::{
    Demographics, Education, Infrastructure, Livelihood, SitioProfile,
};

use crate::fixtures;

#[test]
fn employment_rate_from_labor_force() {
    let profile = SitioProfile {
        demographics: Some(Demographics {
            labor_force: 100,
            unemployed: 20,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(demographics::employment_percent(&profile), 80.0);
}

#[test]
fn employment_rate_guards_zero_labor_force() {
    let profile = SitioProfile {
        demographics: Some(Demographics::default()),
        ..Default::default()
    };
    assert_eq!(demographics::employment_percent(&profile), 0.0);
}

#[test]
fn average_household_size() {
    let profile = fixtures::profile_with_population(100);
    // 100 people over 20 households.
    assert_eq!(demographics::average_household_size(&profile), 5.0);
}

#[test]
fn electricity_rate_uses_household_denominator() {
    let profile = fixtures::profile_with_electricity(20, 10);
    assert_eq!(utilities::electricity_percent(&profile), 50.0);
}

#[test]
fn electricity_rate_is_zero_without_demographics() {
    let mut profile = fixtures::profile_with_electricity(20, 10);
    profile.demographics = None;
    assert_eq!(utilities::electricity_percent(&profile), 0.0);
}

#[test]
fn safe_water_counts_level_two_and_three() {
    let profile = fixtures::profile_with_water(20, 5, 5);
    assert_eq!(water::safe_water_percent(&profile), 50.0);
    assert_eq!(water::piped_water_percent(&profile), 25.0);
}

#[test]
fn paved_road_share() {
    let profile = SitioProfile {
        infrastructure: Some(Infrastructure {
            concrete_road_km: 2.0,
            gravel_road_km: 1.0,
            footpath_km: 1.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(infrastructure::paved_road_percent(&profile), 50.0);
    assert_eq!(infrastructure::total_road_km(&profile), 4.0);
}

#[test]
fn road_share_guards_zero_length() {
    let profile = SitioProfile {
        infrastructure: Some(Infrastructure::default()),
        ..Default::default()
    };
    assert_eq!(infrastructure::paved_road_percent(&profile), 0.0);
    assert_eq!(infrastructure::street_lights_per_km(&profile), 0.0);
}

#[test]
fn boolean_facts_map_to_unit_values() {
    let with_station = fixtures::profile_with_facilities(true, 0);
    let without = fixtures::profile_with_facilities(false, 0);
    assert_eq!(facilities::has_health_station(&with_station), 1.0);
    assert_eq!(facilities::has_health_station(&without), 0.0);
}

#[test]
fn store_density_per_hundred_households() {
    let mut profile = fixtures::profile_with_facilities(false, 5);
    profile.demographics = Some(fixtures::demographics(500, 100));
    assert_eq!(facilities::stores_per_hundred_households(&profile), 5.0);
}

#[test]
fn enrollment_rate_guards_zero_school_age() {
    let profile = SitioProfile {
        education: Some(Education {
            enrolled_children: 40,
            school_age_children: 50,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(education::enrollment_percent(&profile), 80.0);

    let empty = SitioProfile {
        education: Some(Education::default()),
        ..Default::default()
    };
    assert_eq!(education::enrollment_percent(&empty), 0.0);
}

#[test]
fn irrigation_share_of_rice_area() {
    let profile = SitioProfile {
        livelihood: Some(Livelihood {
            rice_area_hectares: 4.0,
            irrigated_area_hectares: 2.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(livelihood::irrigation_percent(&profile), 50.0);
}

#[test]
fn missing_sections_yield_zero_not_panic() {
    let empty = SitioProfile::default();
    assert_eq!(utilities::electricity_percent(&empty), 0.0);
    assert_eq!(water::sanitary_toilet_percent(&empty), 0.0);
    assert_eq!(livelihood::farming_percent(&empty), 0.0);
}
