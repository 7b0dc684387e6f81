use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Measured inputs for one candidate site.
#[derive(Debug, Clone, PartialEq, Deserialize, utoipa::ToSchema)]
#[serde(try_from = "Value")]
pub struct SiteRequest {
    pub lat: f64,
    pub lon: f64,
    /// Daily irradiance, kWh/m².
    pub irradiance: f64,
    /// Terrain slope, degrees.
    pub slope: f64,
    /// Elevation, metres.
    pub elevation: f64,
    /// Land availability index in [0, 1].
    pub landai: f64,
}

#[derive(Deserialize)]
struct SiteFields {
    lat: f64,
    lon: f64,
    irradiance: f64,
    slope: f64,
    elevation: f64,
    landai: f64,
}

impl TryFrom<Value> for SiteRequest {
    type Error = String;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        if !body.is_object() {
            return Err(format!("expected a JSON object, found `{}`", body));
        }
        let f: SiteFields = serde_json::from_value(body).map_err(|e| e.to_string())?;
        Ok(Self {
            lat: f.lat,
            lon: f.lon,
            irradiance: f.irradiance,
            slope: f.slope,
            elevation: f.elevation,
            landai: f.landai,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Suitability {
    #[serde(rename = "Not Suitable")]
    NotSuitable,
    #[serde(rename = "Moderately Suitable")]
    ModeratelySuitable,
    #[serde(rename = "Highly Suitable")]
    HighlySuitable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SiteValues {
    #[serde(rename = "Irradiance Score")]
    pub irradiance: f64,
    #[serde(rename = "Slope Score")]
    pub slope: f64,
    #[serde(rename = "Elevation Score")]
    pub elevation: f64,
    #[serde(rename = "Land Use Score")]
    pub land_use: f64,
    #[serde(rename = "Accessibility Score")]
    pub accessibility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SiteAssessment {
    pub label: Suitability,
    pub ahp_score: f64,
    pub irradiance: f64,
    pub slope: f64,
    pub elevation: f64,
    pub landai: f64,
    pub site_values: SiteValues,
}
