//! Livelihood and agriculture indicators.

use crate::indicators::share;
use crate::models::profile::SitioProfile;

fn households(p: &SitioProfile) -> f64 {
    p.demographics
        .as_ref()
        .map_or(0.0, |d| d.household_count as f64)
}

pub fn farming_percent(p: &SitioProfile) -> f64 {
    let Some(l) = p.livelihood.as_ref() else {
        return 0.0;
    };
    share(l.farming_households as f64, households(p))
}

pub fn fishing_percent(p: &SitioProfile) -> f64 {
    let Some(l) = p.livelihood.as_ref() else {
        return 0.0;
    };
    share(l.fishing_households as f64, households(p))
}

pub fn livestock_percent(p: &SitioProfile) -> f64 {
    let Some(l) = p.livelihood.as_ref() else {
        return 0.0;
    };
    share(l.livestock_households as f64, households(p))
}

pub fn crop_area_hectares(p: &SitioProfile) -> f64 {
    p.livelihood
        .as_ref()
        .map_or(0.0, |l| l.rice_area_hectares + l.corn_area_hectares)
}

/// Irrigated share of rice area.
pub fn irrigation_percent(p: &SitioProfile) -> f64 {
    let Some(l) = p.livelihood.as_ref() else {
        return 0.0;
    };
    share(l.irrigated_area_hectares, l.rice_area_hectares)
}

/// Farming households holding a land title.
pub fn land_tenure_percent(p: &SitioProfile) -> f64 {
    let Some(l) = p.livelihood.as_ref() else {
        return 0.0;
    };
    share(l.farmers_with_land_title as f64, l.farming_households as f64)
}

pub fn cooperative_percent(p: &SitioProfile) -> f64 {
    let Some(l) = p.livelihood.as_ref() else {
        return 0.0;
    };
    share(l.cooperative_members as f64, households(p))
}
