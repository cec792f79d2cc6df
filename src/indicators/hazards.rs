//! Hazard exposure and disaster preparedness indicators.

use crate::indicators::{flag, ratio, share};
use crate::models::profile::SitioProfile;

fn households(p: &SitioProfile) -> f64 {
    p.demographics
        .as_ref()
        .map_or(0.0, |d| d.household_count as f64)
}

pub fn flood_prone_percent(p: &SitioProfile) -> f64 {
    let Some(h) = p.hazards.as_ref() else {
        return 0.0;
    };
    share(h.flood_prone_households as f64, households(p))
}

pub fn landslide_prone_percent(p: &SitioProfile) -> f64 {
    let Some(h) = p.hazards.as_ref() else {
        return 0.0;
    };
    share(h.landslide_prone_households as f64, households(p))
}

pub fn responders_per_thousand(p: &SitioProfile) -> f64 {
    let Some(h) = p.hazards.as_ref() else {
        return 0.0;
    };
    let population = p
        .demographics
        .as_ref()
        .map_or(0.0, |d| d.total_population as f64);
    ratio(h.trained_responders as f64, population) * 1000.0
}

pub fn disaster_events(p: &SitioProfile) -> f64 {
    p.hazards
        .as_ref()
        .map_or(0.0, |h| h.disaster_events_last_year as f64)
}

pub fn has_evacuation_center(p: &SitioProfile) -> f64 {
    p.hazards
        .as_ref()
        .map_or(0.0, |h| flag(h.has_evacuation_center))
}
