//! Water access and sanitation indicators. Household denominators come
//! from the demographics section.

use crate::indicators::{flag, share};
use crate::models::profile::SitioProfile;

fn households(p: &SitioProfile) -> f64 {
    p.demographics
        .as_ref()
        .map_or(0.0, |d| d.household_count as f64)
}

/// Households on Level II or Level III systems (communal faucet or
/// piped). Level I point sources do not count as safe access here.
pub fn safe_water_percent(p: &SitioProfile) -> f64 {
    let Some(w) = p.water_sanitation.as_ref() else {
        return 0.0;
    };
    share(
        (w.households_level2_water + w.households_level3_water) as f64,
        households(p),
    )
}

pub fn piped_water_percent(p: &SitioProfile) -> f64 {
    let Some(w) = p.water_sanitation.as_ref() else {
        return 0.0;
    };
    share(w.households_level3_water as f64, households(p))
}

pub fn sanitary_toilet_percent(p: &SitioProfile) -> f64 {
    let Some(w) = p.water_sanitation.as_ref() else {
        return 0.0;
    };
    share(w.households_with_sanitary_toilet as f64, households(p))
}

pub fn open_defecation_percent(p: &SitioProfile) -> f64 {
    let Some(w) = p.water_sanitation.as_ref() else {
        return 0.0;
    };
    share(w.open_defecation_households as f64, households(p))
}

pub fn waste_segregation_percent(p: &SitioProfile) -> f64 {
    let Some(w) = p.water_sanitation.as_ref() else {
        return 0.0;
    };
    share(w.households_segregating_waste as f64, households(p))
}

pub fn has_garbage_collection(p: &SitioProfile) -> f64 {
    p.water_sanitation
        .as_ref()
        .map_or(0.0, |w| flag(w.has_garbage_collection))
}
