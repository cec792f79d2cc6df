//! Community facility indicators.

use crate::indicators::{flag, ratio};
use crate::models::profile::SitioProfile;

pub fn has_health_station(p: &SitioProfile) -> f64 {
    p.facilities
        .as_ref()
        .map_or(0.0, |f| flag(f.has_health_station))
}

pub fn has_daycare_center(p: &SitioProfile) -> f64 {
    p.facilities
        .as_ref()
        .map_or(0.0, |f| flag(f.has_daycare_center))
}

pub fn has_multipurpose_hall(p: &SitioProfile) -> f64 {
    p.facilities
        .as_ref()
        .map_or(0.0, |f| flag(f.has_multipurpose_hall))
}

pub fn sari_sari_stores(p: &SitioProfile) -> f64 {
    p.facilities.as_ref().map_or(0.0, |f| f.sari_sari_stores as f64)
}

/// Sari-sari stores per 100 households, a rough commerce density.
pub fn stores_per_hundred_households(p: &SitioProfile) -> f64 {
    let Some(f) = p.facilities.as_ref() else {
        return 0.0;
    };
    let households = p
        .demographics
        .as_ref()
        .map_or(0.0, |d| d.household_count as f64);
    ratio(f.sari_sari_stores as f64, households) * 100.0
}

pub fn rice_mills(p: &SitioProfile) -> f64 {
    p.facilities.as_ref().map_or(0.0, |f| f.rice_mills as f64)
}

pub fn water_refilling_stations(p: &SitioProfile) -> f64 {
    p.facilities
        .as_ref()
        .map_or(0.0, |f| f.water_refilling_stations as f64)
}
