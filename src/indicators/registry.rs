//! The indicator registry: a closed, data-driven table of every
//! indicator the engine can derive.
//!
//! Each entry pairs a pure accessor with its display metadata. Ranking
//! and diff logic never look inside an accessor; adding an indicator is
//! a one-line table edit.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::indicators::format::ValueFormat;
use crate::indicators::{
    demographics, education, facilities, hazards, infrastructure, livelihood, priorities,
    utilities, water,
};
use crate::models::comparison::Polarity;
use crate::models::profile::SitioProfile;

/// Indicator category, doubling as the metric-group unit a comparison
/// request selects. Enum order is dashboard display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Demographics,
    Utilities,
    Facilities,
    Infrastructure,
    Education,
    WaterSanitation,
    Livelihood,
    Hazards,
    Priorities,
}

impl IndicatorCategory {
    pub fn all() -> &'static [IndicatorCategory] {
        &[
            IndicatorCategory::Demographics,
            IndicatorCategory::Utilities,
            IndicatorCategory::Facilities,
            IndicatorCategory::Infrastructure,
            IndicatorCategory::Education,
            IndicatorCategory::WaterSanitation,
            IndicatorCategory::Livelihood,
            IndicatorCategory::Hazards,
            IndicatorCategory::Priorities,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            IndicatorCategory::Demographics => "Demographics",
            IndicatorCategory::Utilities => "Utilities",
            IndicatorCategory::Facilities => "Facilities",
            IndicatorCategory::Infrastructure => "Infrastructure",
            IndicatorCategory::Education => "Education",
            IndicatorCategory::WaterSanitation => "Water & Sanitation",
            IndicatorCategory::Livelihood => "Livelihood & Agriculture",
            IndicatorCategory::Hazards => "Hazards & Preparedness",
            IndicatorCategory::Priorities => "Priority Ratings",
        }
    }
}

/// One indicator definition: a pure accessor plus display metadata.
#[derive(Clone, Copy)]
pub struct IndicatorDef {
    pub key: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub category: IndicatorCategory,
    pub accessor: fn(&SitioProfile) -> f64,
    pub default_order: u16,
    pub format: ValueFormat,
    pub polarity: Polarity,
}

impl IndicatorDef {
    pub fn value(&self, profile: &SitioProfile) -> f64 {
        (self.accessor)(profile)
    }

    pub fn is_percentage(&self) -> bool {
        self.format.is_percentage()
    }
}

const fn def(
    key: &'static str,
    label: &'static str,
    short_label: &'static str,
    category: IndicatorCategory,
    accessor: fn(&SitioProfile) -> f64,
    default_order: u16,
    format: ValueFormat,
    polarity: Polarity,
) -> IndicatorDef {
    IndicatorDef {
        key,
        label,
        short_label,
        category,
        accessor,
        default_order,
        format,
        polarity,
    }
}

use self::IndicatorCategory as Cat;
use crate::indicators::format::ValueFormat as Fmt;
use crate::models::comparison::Polarity::{Negative, Neutral, Positive};

#[rustfmt::skip]
static INDICATORS: &[IndicatorDef] = &[
    // Demographics
    def("totalPopulation", "Total Population", "Population", Cat::Demographics, demographics::total_population, 10, Fmt::Count, Positive),
    def("householdCount", "Number of Households", "Households", Cat::Demographics, demographics::household_count, 20, Fmt::Count, Positive),
    def("averageHouseholdSize", "Average Household Size", "HH Size", Cat::Demographics, demographics::average_household_size, 30, Fmt::Decimal, Neutral),
    def("sexRatio", "Males per 100 Females", "Sex Ratio", Cat::Demographics, demographics::sex_ratio, 40, Fmt::Decimal, Neutral),
    def("voterRegistrationPercent", "Voter Registration Rate", "Voters", Cat::Demographics, demographics::voter_registration_percent, 50, Fmt::Percent, Positive),
    def("employmentPercent", "Employment Rate", "Employment", Cat::Demographics, demographics::employment_percent, 60, Fmt::Percent, Positive),
    def("youthPercent", "Youth Share of Population", "Youth", Cat::Demographics, demographics::youth_percent, 70, Fmt::Percent, Neutral),
    def("seniorPercent", "Senior Citizen Share", "Seniors", Cat::Demographics, demographics::senior_percent, 80, Fmt::Percent, Neutral),
    def("pwdPercent", "PWD Share of Population", "PWD", Cat::Demographics, demographics::pwd_percent, 90, Fmt::Percent, Neutral),
    def("malnutritionPercent", "Child Malnutrition Rate", "Malnutrition", Cat::Demographics, demographics::malnutrition_percent, 100, Fmt::Percent, Negative),
    def("fourPsCoveragePercent", "4Ps Household Coverage", "4Ps", Cat::Demographics, demographics::four_ps_coverage_percent, 110, Fmt::Percent, Neutral),
    // Utilities
    def("electricityPercent", "Household Electrification Rate", "Electricity", Cat::Utilities, utilities::electricity_percent, 10, Fmt::Percent, Positive),
    def("solarPowerPercent", "Solar Power Adoption", "Solar", Cat::Utilities, utilities::solar_power_percent, 20, Fmt::Percent, Positive),
    def("internetPercent", "Household Internet Access", "Internet", Cat::Utilities, utilities::internet_percent, 30, Fmt::Percent, Positive),
    def("hasMobileSignal", "Mobile Signal Available", "Signal", Cat::Utilities, utilities::has_mobile_signal, 40, Fmt::Flag, Positive),
    // Facilities
    def("hasHealthStation", "Barangay Health Station Present", "Health Stn", Cat::Facilities, facilities::has_health_station, 10, Fmt::Flag, Positive),
    def("hasDaycareCenter", "Daycare Center Present", "Daycare", Cat::Facilities, facilities::has_daycare_center, 20, Fmt::Flag, Positive),
    def("hasMultipurposeHall", "Multipurpose Hall Present", "MP Hall", Cat::Facilities, facilities::has_multipurpose_hall, 30, Fmt::Flag, Positive),
    def("sariSariStores", "Sari-sari Stores", "Stores", Cat::Facilities, facilities::sari_sari_stores, 40, Fmt::Count, Neutral),
    def("storesPerHundredHouseholds", "Stores per 100 Households", "Store Density", Cat::Facilities, facilities::stores_per_hundred_households, 50, Fmt::Decimal, Neutral),
    def("riceMills", "Rice Mills", "Rice Mills", Cat::Facilities, facilities::rice_mills, 60, Fmt::Count, Neutral),
    def("waterRefillingStations", "Water Refilling Stations", "Refill Stns", Cat::Facilities, facilities::water_refilling_stations, 70, Fmt::Count, Neutral),
    // Infrastructure
    def("totalRoadKm", "Total Road Length", "Roads", Cat::Infrastructure, infrastructure::total_road_km, 10, Fmt::Kilometers, Neutral),
    def("pavedRoadPercent", "Paved Share of Roads", "Paved", Cat::Infrastructure, infrastructure::paved_road_percent, 20, Fmt::Percent, Positive),
    def("bridgeCount", "Bridges", "Bridges", Cat::Infrastructure, infrastructure::bridge_count, 30, Fmt::Count, Neutral),
    def("streetLightsPerKm", "Street Lights per km", "Lighting", Cat::Infrastructure, infrastructure::street_lights_per_km, 40, Fmt::Decimal, Positive),
    def("hasPublicTransport", "Public Transport Available", "Transport", Cat::Infrastructure, infrastructure::has_public_transport, 50, Fmt::Flag, Positive),
    // Education
    def("hasKindergarten", "Kindergarten Present", "Kinder", Cat::Education, education::has_kindergarten, 10, Fmt::Flag, Positive),
    def("hasElementarySchool", "Elementary School Present", "Elementary", Cat::Education, education::has_elementary_school, 20, Fmt::Flag, Positive),
    def("hasHighSchool", "High School Present", "High School", Cat::Education, education::has_high_school, 30, Fmt::Flag, Positive),
    def("enrollmentPercent", "School Enrollment Rate", "Enrollment", Cat::Education, education::enrollment_percent, 40, Fmt::Percent, Positive),
    def("outOfSchoolPercent", "Out-of-School Youth Rate", "OSY", Cat::Education, education::out_of_school_percent, 50, Fmt::Percent, Negative),
    def("collegeGraduates", "College Graduates", "Graduates", Cat::Education, education::college_graduates, 60, Fmt::Count, Neutral),
    // Water & Sanitation
    def("safeWaterPercent", "Safe Water Access (Level II/III)", "Safe Water", Cat::WaterSanitation, water::safe_water_percent, 10, Fmt::Percent, Positive),
    def("pipedWaterPercent", "Piped Water Access (Level III)", "Piped Water", Cat::WaterSanitation, water::piped_water_percent, 20, Fmt::Percent, Positive),
    def("sanitaryToiletPercent", "Sanitary Toilet Coverage", "Toilets", Cat::WaterSanitation, water::sanitary_toilet_percent, 30, Fmt::Percent, Positive),
    def("openDefecationPercent", "Open Defecation Rate", "Open Defecation", Cat::WaterSanitation, water::open_defecation_percent, 40, Fmt::Percent, Negative),
    def("wasteSegregationPercent", "Waste Segregation Rate", "Segregation", Cat::WaterSanitation, water::waste_segregation_percent, 50, Fmt::Percent, Positive),
    def("hasGarbageCollection", "Garbage Collection Available", "Collection", Cat::WaterSanitation, water::has_garbage_collection, 60, Fmt::Flag, Positive),
    // Livelihood & Agriculture
    def("farmingPercent", "Farming Household Share", "Farming", Cat::Livelihood, livelihood::farming_percent, 10, Fmt::Percent, Neutral),
    def("fishingPercent", "Fishing Household Share", "Fishing", Cat::Livelihood, livelihood::fishing_percent, 20, Fmt::Percent, Neutral),
    def("livestockPercent", "Livestock Household Share", "Livestock", Cat::Livelihood, livelihood::livestock_percent, 30, Fmt::Percent, Neutral),
    def("cropAreaHectares", "Crop Area", "Crop Area", Cat::Livelihood, livelihood::crop_area_hectares, 40, Fmt::Hectares, Neutral),
    def("irrigationPercent", "Irrigated Share of Rice Area", "Irrigation", Cat::Livelihood, livelihood::irrigation_percent, 50, Fmt::Percent, Positive),
    def("landTenurePercent", "Farm Land Tenure Rate", "Land Tenure", Cat::Livelihood, livelihood::land_tenure_percent, 60, Fmt::Percent, Positive),
    def("cooperativePercent", "Cooperative Membership Rate", "Co-ops", Cat::Livelihood, livelihood::cooperative_percent, 70, Fmt::Percent, Positive),
    // Hazards & Preparedness
    def("floodPronePercent", "Flood-prone Household Share", "Flood Risk", Cat::Hazards, hazards::flood_prone_percent, 10, Fmt::Percent, Negative),
    def("landslidePronePercent", "Landslide-prone Household Share", "Landslide Risk", Cat::Hazards, hazards::landslide_prone_percent, 20, Fmt::Percent, Negative),
    def("respondersPerThousand", "Trained Responders per 1,000", "Responders", Cat::Hazards, hazards::responders_per_thousand, 30, Fmt::Decimal, Positive),
    def("disasterEvents", "Disaster Events Last Year", "Events", Cat::Hazards, hazards::disaster_events, 40, Fmt::Count, Negative),
    def("hasEvacuationCenter", "Evacuation Center Present", "Evac Center", Cat::Hazards, hazards::has_evacuation_center, 50, Fmt::Flag, Positive),
    // Priority Ratings
    def("waterPriority", "Water Supply Priority", "Water Need", Cat::Priorities, priorities::water_priority, 10, Fmt::Rating, Negative),
    def("roadsPriority", "Road Improvement Priority", "Road Need", Cat::Priorities, priorities::roads_priority, 20, Fmt::Rating, Negative),
    def("electricityPriority", "Electrification Priority", "Power Need", Cat::Priorities, priorities::electricity_priority, 30, Fmt::Rating, Negative),
    def("healthPriority", "Health Services Priority", "Health Need", Cat::Priorities, priorities::health_priority, 40, Fmt::Rating, Negative),
    def("educationPriority", "Education Priority", "Education Need", Cat::Priorities, priorities::education_priority, 50, Fmt::Rating, Negative),
    def("livelihoodPriority", "Livelihood Support Priority", "Livelihood Need", Cat::Priorities, priorities::livelihood_priority, 60, Fmt::Rating, Negative),
];

static INDEX: Lazy<HashMap<&'static str, &'static IndicatorDef>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(INDICATORS.len());
    for indicator in INDICATORS {
        let previous = index.insert(indicator.key, indicator);
        debug_assert!(previous.is_none(), "duplicate indicator key {}", indicator.key);
    }
    index
});

pub fn all_indicators() -> &'static [IndicatorDef] {
    INDICATORS
}

pub fn get_indicator(key: &str) -> Option<&'static IndicatorDef> {
    INDEX.get(key).copied()
}

/// Indicators in one category, sorted by their default display order.
pub fn indicators_by_category(category: IndicatorCategory) -> Vec<&'static IndicatorDef> {
    let mut defs: Vec<_> = INDICATORS
        .iter()
        .filter(|d| d.category == category)
        .collect();
    defs.sort_by_key(|d| d.default_order);
    defs
}
