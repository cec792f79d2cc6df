//! Road and infrastructure indicators.

use crate::indicators::{flag, ratio, share};
use crate::models::profile::SitioProfile;

pub fn total_road_km(p: &SitioProfile) -> f64 {
    p.infrastructure
        .as_ref()
        .map_or(0.0, |i| i.concrete_road_km + i.gravel_road_km + i.footpath_km)
}

/// Concrete share of all recorded road length.
pub fn paved_road_percent(p: &SitioProfile) -> f64 {
    let Some(i) = p.infrastructure.as_ref() else {
        return 0.0;
    };
    let total = i.concrete_road_km + i.gravel_road_km + i.footpath_km;
    share(i.concrete_road_km, total)
}

pub fn bridge_count(p: &SitioProfile) -> f64 {
    p.infrastructure
        .as_ref()
        .map_or(0.0, |i| i.bridge_count as f64)
}

pub fn street_lights_per_km(p: &SitioProfile) -> f64 {
    let Some(i) = p.infrastructure.as_ref() else {
        return 0.0;
    };
    let total = i.concrete_road_km + i.gravel_road_km + i.footpath_km;
    ratio(i.street_light_count as f64, total)
}

pub fn has_public_transport(p: &SitioProfile) -> f64 {
    p.infrastructure
        .as_ref()
        .map_or(0.0, |i| flag(i.has_public_transport))
}
