use crate::models::{SiteAssessment, SiteRequest, SiteValues, Suitability};

/// Reference city for the accessibility score (New Delhi).
pub const CITY_LAT: f64 = 28.6139;
pub const CITY_LON: f64 = 77.2090;

const EARTH_RADIUS_KM: f64 = 6371.0;
/// Beyond this distance from the city a site scores zero accessibility.
const ACCESS_RANGE_KM: f64 = 50.0;

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// Linear rescale of `value` from [low, high] onto [0, 1], clamped.
fn normalize(value: f64, low: f64, high: f64) -> f64 {
    ((value - low) / (high - low)).clamp(0.0, 1.0)
}

/// Great-circle distance in km from (lat, lon) to the reference city.
pub fn distance_to_city_km(lat: f64, lon: f64) -> f64 {
    let dlat = (CITY_LAT - lat).to_radians();
    let dlon = (CITY_LON - lon).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat.to_radians().cos() * CITY_LAT.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Weighted AHP score: irradiance 0.6, flatness 0.25, land availability 0.15.
pub fn ahp_score(irradiance: f64, slope: f64, landai: f64) -> f64 {
    let s_irr = normalize(irradiance, 3.5, 7.5);
    let s_slope = 1.0 - normalize(slope, 0.0, 30.0);
    let s_land = normalize(landai, 0.0, 1.0);
    round3(0.6 * s_irr + 0.25 * s_slope + 0.15 * s_land)
}

pub fn suitability(irradiance: f64, slope: f64, landai: f64) -> Suitability {
    if irradiance >= 5.2 && slope <= 7.0 && landai >= 0.5 {
        Suitability::HighlySuitable
    } else if irradiance >= 4.2 && slope <= 15.0 {
        Suitability::ModeratelySuitable
    } else {
        Suitability::NotSuitable
    }
}

pub fn site_values(site: &SiteRequest) -> SiteValues {
    let distance = distance_to_city_km(site.lat, site.lon);
    SiteValues {
        irradiance: round3(site.irradiance / 7.0),
        slope: round3((1.0 - site.slope / 30.0).max(0.0)),
        elevation: round3((1.0 - site.elevation / 3500.0).max(0.0)),
        land_use: round3(site.landai),
        accessibility: round3((1.0 - distance / ACCESS_RANGE_KM).max(0.0)),
    }
}

pub fn assess(site: &SiteRequest) -> SiteAssessment {
    SiteAssessment {
        label: suitability(site.irradiance, site.slope, site.landai),
        ahp_score: ahp_score(site.irradiance, site.slope, site.landai),
        irradiance: site.irradiance,
        slope: site.slope,
        elevation: site.elevation,
        landai: site.landai,
        site_values: site_values(site),
    }
}
