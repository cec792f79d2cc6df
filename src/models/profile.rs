//! Sitio profile and record data model.
//!
//! A `SitioProfile` is one year's survey answers for one sitio, grouped
//! into sections. Sections are optional: a partially encoded survey is a
//! valid profile, and every indicator accessor treats a missing section
//! as zeroes. Counts are stored raw; percentage-like values are always
//! derived by the indicator layer, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub total_population: u32,
    pub male_population: u32,
    pub female_population: u32,
    pub household_count: u32,
    pub registered_voters: u32,
    pub labor_force: u32,
    pub unemployed: u32,
    pub minors: u32,
    pub senior_citizens: u32,
    pub pwd_count: u32,
    pub indigenous_population: u32,
    pub malnourished_children: u32,
    pub solo_parents: u32,
    pub fourps_beneficiaries: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Utilities {
    pub households_with_electricity: u32,
    pub households_with_solar_power: u32,
    pub households_with_internet: u32,
    pub has_mobile_signal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facilities {
    pub has_health_station: bool,
    pub has_multipurpose_hall: bool,
    pub has_daycare_center: bool,
    pub has_chapel: bool,
    pub has_basketball_court: bool,
    pub sari_sari_stores: u32,
    pub rice_mills: u32,
    pub water_refilling_stations: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infrastructure {
    pub concrete_road_km: f64,
    pub gravel_road_km: f64,
    pub footpath_km: f64,
    pub bridge_count: u32,
    pub street_light_count: u32,
    pub has_public_transport: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub has_kindergarten: bool,
    pub has_elementary_school: bool,
    pub has_high_school: bool,
    pub school_age_children: u32,
    pub enrolled_children: u32,
    pub out_of_school_youth: u32,
    pub college_graduates: u32,
}

/// Water service levels follow the PH classification: Level I is a point
/// source, Level II a communal faucet, Level III a piped connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSanitation {
    pub households_level1_water: u32,
    pub households_level2_water: u32,
    pub households_level3_water: u32,
    pub households_with_sanitary_toilet: u32,
    pub open_defecation_households: u32,
    pub households_segregating_waste: u32,
    pub has_garbage_collection: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Livelihood {
    pub farming_households: u32,
    pub fishing_households: u32,
    pub livestock_households: u32,
    pub rice_area_hectares: f64,
    pub corn_area_hectares: f64,
    pub irrigated_area_hectares: f64,
    pub farmers_with_land_title: u32,
    pub cooperative_members: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hazards {
    pub flood_prone_households: u32,
    pub landslide_prone_households: u32,
    pub trained_responders: u32,
    pub disaster_events_last_year: u32,
    pub has_evacuation_center: bool,
}

/// Community-assessed urgency ratings on a 0..=5 scale, 5 being the most
/// urgent. Collected per sector during the annual survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityRatings {
    pub water: u8,
    pub roads: u8,
    pub electricity: u8,
    pub health: u8,
    pub education: u8,
    pub livelihood: u8,
}

/// One year's survey profile for one sitio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitioProfile {
    pub demographics: Option<Demographics>,
    pub utilities: Option<Utilities>,
    pub facilities: Option<Facilities>,
    pub infrastructure: Option<Infrastructure>,
    pub education: Option<Education>,
    pub water_sanitation: Option<WaterSanitation>,
    pub livelihood: Option<Livelihood>,
    pub hazards: Option<Hazards>,
    pub priorities: Option<PriorityRatings>,
    /// Open-ended numeric fields added by administrators. Not read by any
    /// registry indicator, but carried through aggregation.
    pub custom_fields: BTreeMap<String, f64>,
}

/// A sitio's identity plus its year-keyed profiles.
///
/// Invariant: `available_years` is always sorted ascending and contains
/// exactly the keys of `yearly_data`. Every mutator maintains this, and
/// deserialization rebuilds the list from the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSitioRecord")]
pub struct SitioRecord {
    pub id: String,
    pub name: String,
    pub code: String,
    pub municipality: String,
    pub barangay: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_coastal: bool,
    pub is_gida: bool,
    pub updated_at: Option<DateTime<Utc>>,
    available_years: Vec<u16>,
    yearly_data: BTreeMap<u16, SitioProfile>,
}

/// Wire shape for `SitioRecord`; the sorted year list is derived, not trusted.
#[derive(Deserialize)]
struct RawSitioRecord {
    id: String,
    name: String,
    #[serde(default)]
    code: String,
    municipality: String,
    barangay: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    is_coastal: bool,
    #[serde(default)]
    is_gida: bool,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    yearly_data: BTreeMap<u16, SitioProfile>,
}

impl From<RawSitioRecord> for SitioRecord {
    fn from(raw: RawSitioRecord) -> Self {
        let available_years = raw.yearly_data.keys().copied().collect();
        Self {
            id: raw.id,
            name: raw.name,
            code: raw.code,
            municipality: raw.municipality,
            barangay: raw.barangay,
            latitude: raw.latitude,
            longitude: raw.longitude,
            is_coastal: raw.is_coastal,
            is_gida: raw.is_gida,
            updated_at: raw.updated_at,
            available_years,
            yearly_data: raw.yearly_data,
        }
    }
}

impl SitioRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        municipality: impl Into<String>,
        barangay: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: String::new(),
            municipality: municipality.into(),
            barangay: barangay.into(),
            latitude: None,
            longitude: None,
            is_coastal: false,
            is_gida: false,
            updated_at: None,
            available_years: Vec::new(),
            yearly_data: BTreeMap::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_year(mut self, year: u16, profile: SitioProfile) -> Self {
        self.set_year_profile(year, profile);
        self
    }

    /// Years with survey data, sorted ascending.
    pub fn available_years(&self) -> &[u16] {
        &self.available_years
    }

    pub fn profile_for(&self, year: u16) -> Option<&SitioProfile> {
        self.yearly_data.get(&year)
    }

    pub fn latest_year(&self) -> Option<u16> {
        self.available_years.last().copied()
    }

    /// The most recent profile at or before `year`, with the year it
    /// belongs to. Used by aggregation's explicit stale-year fallback.
    pub fn latest_on_or_before(&self, year: u16) -> Option<(u16, &SitioProfile)> {
        self.yearly_data
            .range(..=year)
            .next_back()
            .map(|(y, p)| (*y, p))
    }

    /// Add or replace the profile for a year (explicit admin action).
    pub fn set_year_profile(&mut self, year: u16, profile: SitioProfile) {
        self.yearly_data.insert(year, profile);
        if let Err(pos) = self.available_years.binary_search(&year) {
            self.available_years.insert(pos, year);
        }
    }

    /// Remove a year's profile (explicit admin action).
    pub fn remove_year(&mut self, year: u16) -> Option<SitioProfile> {
        let removed = self.yearly_data.remove(&year);
        if removed.is_some() {
            if let Ok(pos) = self.available_years.binary_search(&year) {
                self.available_years.remove(pos);
            }
        }
        removed
    }
}
