//! Priority rating indicators. Higher ratings mean more urgent need, so
//! all of these carry negative polarity.

use crate::models::profile::SitioProfile;

pub fn water_priority(p: &SitioProfile) -> f64 {
    p.priorities.as_ref().map_or(0.0, |r| r.water as f64)
}

pub fn roads_priority(p: &SitioProfile) -> f64 {
    p.priorities.as_ref().map_or(0.0, |r| r.roads as f64)
}

pub fn electricity_priority(p: &SitioProfile) -> f64 {
    p.priorities.as_ref().map_or(0.0, |r| r.electricity as f64)
}

pub fn health_priority(p: &SitioProfile) -> f64 {
    p.priorities.as_ref().map_or(0.0, |r| r.health as f64)
}

pub fn education_priority(p: &SitioProfile) -> f64 {
    p.priorities.as_ref().map_or(0.0, |r| r.education as f64)
}

pub fn livelihood_priority(p: &SitioProfile) -> f64 {
    p.priorities.as_ref().map_or(0.0, |r| r.livelihood as f64)
}
