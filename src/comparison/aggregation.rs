//! Administrative roll-ups: many sitios merged into one municipality or
//! barangay profile.
//!
//! Counts are summed across member sitios and rate indicators are then
//! re-derived from the merged profile, which is summed-numerator over
//! summed-denominator math. Averaging per-sitio percentages across
//! differently sized sitios would weight a 10-household sitio equally
//! with a 500-household one; this module never does that.

use tracing::debug;

use crate::models::comparison::AggregateLevel;
use crate::models::profile::{SitioProfile, SitioRecord};
use crate::models::result::StaleContributor;

/// One rolled-up administrative entity.
#[derive(Debug, Clone)]
pub struct AggregatedEntity {
    pub name: String,
    pub level: AggregateLevel,
    pub year: u16,
    /// Sitios that actually contributed a profile (after fallback).
    pub sitio_count: u32,
    /// Contributors whose profile came from a year before the target.
    pub stale_contributors: Vec<StaleContributor>,
    pub profile: SitioProfile,
}

/// Roll up `sitios` into one entity for `year`.
///
/// A sitio without data for the target year contributes its latest
/// earlier profile and is recorded in `stale_contributors` with the year
/// actually used — stale data is included visibly, never silently, and
/// never silently dropped. A sitio with no profile at or before the
/// target year is excluded and does not count toward `sitio_count`.
pub fn aggregate_entity(
    name: &str,
    level: AggregateLevel,
    sitios: &[&SitioRecord],
    year: u16,
) -> AggregatedEntity {
    let mut merged = SitioProfile::default();
    let mut sitio_count = 0u32;
    let mut stale_contributors = Vec::new();

    for sitio in sitios {
        let Some((year_used, profile)) = sitio.latest_on_or_before(year) else {
            debug!(sitio = %sitio.id, year, "no profile at or before target year, excluded");
            continue;
        };
        if year_used != year {
            stale_contributors.push(StaleContributor {
                sitio_id: sitio.id.clone(),
                sitio_name: sitio.name.clone(),
                year_used,
            });
        }
        merge_profile(&mut merged, profile);
        sitio_count += 1;
    }

    AggregatedEntity {
        name: name.to_string(),
        level,
        year,
        sitio_count,
        stale_contributors,
        profile: merged,
    }
}

/// Member sitios of one entity at the given level, in input order.
pub fn sitios_in_entity<'a>(
    records: &'a [SitioRecord],
    level: AggregateLevel,
    name: &str,
) -> Vec<&'a SitioRecord> {
    records
        .iter()
        .filter(|r| match level {
            AggregateLevel::Municipality => r.municipality == name,
            AggregateLevel::Barangay => r.barangay == name,
        })
        .collect()
}

/// Field-wise merge of one sitio's profile into the accumulator: counts
/// and continuous quantities sum, boolean facts OR, priority ratings
/// take the maximum, custom fields sum per key.
fn merge_profile(into: &mut SitioProfile, from: &SitioProfile) {
    if let Some(d) = from.demographics.as_ref() {
        let acc = into.demographics.get_or_insert_with(Default::default);
        acc.total_population += d.total_population;
        acc.male_population += d.male_population;
        acc.female_population += d.female_population;
        acc.household_count += d.household_count;
        acc.registered_voters += d.registered_voters;
        acc.labor_force += d.labor_force;
        acc.unemployed += d.unemployed;
        acc.minors += d.minors;
        acc.senior_citizens += d.senior_citizens;
        acc.pwd_count += d.pwd_count;
        acc.indigenous_population += d.indigenous_population;
        acc.malnourished_children += d.malnourished_children;
        acc.solo_parents += d.solo_parents;
        acc.fourps_beneficiaries += d.fourps_beneficiaries;
    }

    if let Some(u) = from.utilities.as_ref() {
        let acc = into.utilities.get_or_insert_with(Default::default);
        acc.households_with_electricity += u.households_with_electricity;
        acc.households_with_solar_power += u.households_with_solar_power;
        acc.households_with_internet += u.households_with_internet;
        acc.has_mobile_signal |= u.has_mobile_signal;
    }

    if let Some(f) = from.facilities.as_ref() {
        let acc = into.facilities.get_or_insert_with(Default::default);
        acc.has_health_station |= f.has_health_station;
        acc.has_multipurpose_hall |= f.has_multipurpose_hall;
        acc.has_daycare_center |= f.has_daycare_center;
        acc.has_chapel |= f.has_chapel;
        acc.has_basketball_court |= f.has_basketball_court;
        acc.sari_sari_stores += f.sari_sari_stores;
        acc.rice_mills += f.rice_mills;
        acc.water_refilling_stations += f.water_refilling_stations;
    }

    if let Some(i) = from.infrastructure.as_ref() {
        let acc = into.infrastructure.get_or_insert_with(Default::default);
        acc.concrete_road_km += i.concrete_road_km;
        acc.gravel_road_km += i.gravel_road_km;
        acc.footpath_km += i.footpath_km;
        acc.bridge_count += i.bridge_count;
        acc.street_light_count += i.street_light_count;
        acc.has_public_transport |= i.has_public_transport;
    }

    if let Some(e) = from.education.as_ref() {
        let acc = into.education.get_or_insert_with(Default::default);
        acc.has_kindergarten |= e.has_kindergarten;
        acc.has_elementary_school |= e.has_elementary_school;
        acc.has_high_school |= e.has_high_school;
        acc.school_age_children += e.school_age_children;
        acc.enrolled_children += e.enrolled_children;
        acc.out_of_school_youth += e.out_of_school_youth;
        acc.college_graduates += e.college_graduates;
    }

    if let Some(w) = from.water_sanitation.as_ref() {
        let acc = into.water_sanitation.get_or_insert_with(Default::default);
        acc.households_level1_water += w.households_level1_water;
        acc.households_level2_water += w.households_level2_water;
        acc.households_level3_water += w.households_level3_water;
        acc.households_with_sanitary_toilet += w.households_with_sanitary_toilet;
        acc.open_defecation_households += w.open_defecation_households;
        acc.households_segregating_waste += w.households_segregating_waste;
        acc.has_garbage_collection |= w.has_garbage_collection;
    }

    if let Some(l) = from.livelihood.as_ref() {
        let acc = into.livelihood.get_or_insert_with(Default::default);
        acc.farming_households += l.farming_households;
        acc.fishing_households += l.fishing_households;
        acc.livestock_households += l.livestock_households;
        acc.rice_area_hectares += l.rice_area_hectares;
        acc.corn_area_hectares += l.corn_area_hectares;
        acc.irrigated_area_hectares += l.irrigated_area_hectares;
        acc.farmers_with_land_title += l.farmers_with_land_title;
        acc.cooperative_members += l.cooperative_members;
    }

    if let Some(h) = from.hazards.as_ref() {
        let acc = into.hazards.get_or_insert_with(Default::default);
        acc.flood_prone_households += h.flood_prone_households;
        acc.landslide_prone_households += h.landslide_prone_households;
        acc.trained_responders += h.trained_responders;
        acc.disaster_events_last_year += h.disaster_events_last_year;
        acc.has_evacuation_center |= h.has_evacuation_center;
    }

    if let Some(r) = from.priorities.as_ref() {
        let acc = into.priorities.get_or_insert_with(Default::default);
        acc.water = acc.water.max(r.water);
        acc.roads = acc.roads.max(r.roads);
        acc.electricity = acc.electricity.max(r.electricity);
        acc.health = acc.health.max(r.health);
        acc.education = acc.education.max(r.education);
        acc.livelihood = acc.livelihood.max(r.livelihood);
    }

    for (key, value) in &from.custom_fields {
        *into.custom_fields.entry(key.clone()).or_insert(0.0) += value;
    }
}
