use sitiometrics::models::profile::SitioRecord;

use crate::fixtures;

#[test]
fn year_list_stays_sorted_through_mutation() {
    let mut record = fixtures::sitio("s1", "Proper", "BANGA", "Linao");
    record.set_year_profile(2023, fixtures::profile_with_population(120));
    record.set_year_profile(2021, fixtures::profile_with_population(100));
    record.set_year_profile(2022, fixtures::profile_with_population(110));

    assert_eq!(record.available_years(), &[2021, 2022, 2023]);

    record.remove_year(2022);
    assert_eq!(record.available_years(), &[2021, 2023]);
    assert!(record.profile_for(2022).is_none());
}

#[test]
fn replacing_a_year_does_not_duplicate_it() {
    let mut record = fixtures::sitio("s1", "Proper", "BANGA", "Linao");
    record.set_year_profile(2023, fixtures::profile_with_population(100));
    record.set_year_profile(2023, fixtures::profile_with_population(150));

    assert_eq!(record.available_years(), &[2023]);
    assert_eq!(
        record.profile_for(2023).unwrap().demographics.as_ref().unwrap().total_population,
        150
    );
}

#[test]
fn latest_on_or_before_picks_the_nearest_prior_year() {
    let record = fixtures::sitio("s1", "Proper", "BANGA", "Linao")
        .with_year(2019, fixtures::profile_with_population(90))
        .with_year(2021, fixtures::profile_with_population(100));

    let (year, _) = record.latest_on_or_before(2023).unwrap();
    assert_eq!(year, 2021);
    let (year, _) = record.latest_on_or_before(2021).unwrap();
    assert_eq!(year, 2021);
    let (year, _) = record.latest_on_or_before(2020).unwrap();
    assert_eq!(year, 2019);
    assert!(record.latest_on_or_before(2018).is_none());

    assert_eq!(record.latest_year(), Some(2021));
}

#[test]
fn deserialization_rebuilds_the_year_list() {
    let original = fixtures::sitio("s1", "Proper", "BANGA", "Linao")
        .with_year(2021, fixtures::profile_with_population(100))
        .with_year(2023, fixtures::profile_with_population(120));

    let json = serde_json::to_string(&original).unwrap();
    let restored: SitioRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.available_years(), &[2021, 2023]);
    assert_eq!(restored, original);
}

#[test]
fn records_deserialize_from_storage_shape() {
    let json = r#"{
        "id": "s9",
        "name": "Bayanihan",
        "municipality": "DAO",
        "barangay": "Poblacion",
        "yearly_data": {
            "2022": { "demographics": { "total_population": 300 } }
        }
    }"#;
    let record: SitioRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.available_years(), &[2022]);
    assert_eq!(
        record.profile_for(2022).unwrap().demographics.as_ref().unwrap().total_population,
        300
    );
}
