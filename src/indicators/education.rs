//! Education access and participation indicators.

use crate::indicators::{flag, share};
use crate::models::profile::SitioProfile;

pub fn has_kindergarten(p: &SitioProfile) -> f64 {
    p.education.as_ref().map_or(0.0, |e| flag(e.has_kindergarten))
}

pub fn has_elementary_school(p: &SitioProfile) -> f64 {
    p.education
        .as_ref()
        .map_or(0.0, |e| flag(e.has_elementary_school))
}

pub fn has_high_school(p: &SitioProfile) -> f64 {
    p.education.as_ref().map_or(0.0, |e| flag(e.has_high_school))
}

pub fn enrollment_percent(p: &SitioProfile) -> f64 {
    let Some(e) = p.education.as_ref() else {
        return 0.0;
    };
    share(e.enrolled_children as f64, e.school_age_children as f64)
}

pub fn out_of_school_percent(p: &SitioProfile) -> f64 {
    let Some(e) = p.education.as_ref() else {
        return 0.0;
    };
    share(e.out_of_school_youth as f64, e.school_age_children as f64)
}

pub fn college_graduates(p: &SitioProfile) -> f64 {
    p.education
        .as_ref()
        .map_or(0.0, |e| e.college_graduates as f64)
}
