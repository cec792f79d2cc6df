//! Utility coverage indicators. Rates use the demographics household
//! count as denominator, so both sections must be present for a nonzero
//! value.

use crate::indicators::{flag, share};
use crate::models::profile::SitioProfile;

fn households(p: &SitioProfile) -> f64 {
    p.demographics
        .as_ref()
        .map_or(0.0, |d| d.household_count as f64)
}

pub fn electricity_percent(p: &SitioProfile) -> f64 {
    let Some(u) = p.utilities.as_ref() else {
        return 0.0;
    };
    share(u.households_with_electricity as f64, households(p))
}

pub fn solar_power_percent(p: &SitioProfile) -> f64 {
    let Some(u) = p.utilities.as_ref() else {
        return 0.0;
    };
    share(u.households_with_solar_power as f64, households(p))
}

pub fn internet_percent(p: &SitioProfile) -> f64 {
    let Some(u) = p.utilities.as_ref() else {
        return 0.0;
    };
    share(u.households_with_internet as f64, households(p))
}

pub fn has_mobile_signal(p: &SitioProfile) -> f64 {
    p.utilities.as_ref().map_or(0.0, |u| flag(u.has_mobile_signal))
}
