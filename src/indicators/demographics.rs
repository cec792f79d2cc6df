//! Demographic indicators.

use crate::indicators::{ratio, share};
use crate::models::profile::SitioProfile;

pub fn total_population(p: &SitioProfile) -> f64 {
    p.demographics
        .as_ref()
        .map_or(0.0, |d| d.total_population as f64)
}

pub fn household_count(p: &SitioProfile) -> f64 {
    p.demographics
        .as_ref()
        .map_or(0.0, |d| d.household_count as f64)
}

pub fn average_household_size(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    ratio(d.total_population as f64, d.household_count as f64)
}

/// Males per 100 females.
pub fn sex_ratio(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.male_population as f64, d.female_population as f64)
}

pub fn voter_registration_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.registered_voters as f64, d.total_population as f64)
}

/// Share of the labor force that is employed. Returns 0 when no labor
/// force is recorded rather than treating everyone as employed.
pub fn employment_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    if d.labor_force == 0 {
        return 0.0;
    }
    (1.0 - d.unemployed as f64 / d.labor_force as f64) * 100.0
}

pub fn youth_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.minors as f64, d.total_population as f64)
}

pub fn senior_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.senior_citizens as f64, d.total_population as f64)
}

pub fn pwd_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.pwd_count as f64, d.total_population as f64)
}

/// Malnourished children as a share of minors.
pub fn malnutrition_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.malnourished_children as f64, d.minors as f64)
}

/// Households covered by the 4Ps conditional cash transfer program.
pub fn four_ps_coverage_percent(p: &SitioProfile) -> f64 {
    let Some(d) = p.demographics.as_ref() else {
        return 0.0;
    };
    share(d.fourps_beneficiaries as f64, d.household_count as f64)
}
