use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub headline: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    pub forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: ForecastProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    pub name: Option<String>,
    pub temperature: Option<f64>,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<String>,
    #[serde(rename = "shortForecast")]
    pub short_forecast: Option<String>,
}

// ============================================================================
// Geocoding Models
// ============================================================================

/// One Nominatim search hit. Coordinates arrive as decimal strings.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// Sunrise/Sunset Models
// ============================================================================

/// Sun event timestamps, shaped like the usual sunrise/sunset API response.
/// Each list holds one entry for the requested day.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunriseSunset {
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub civil_twilight_begin: Vec<String>,
    pub civil_twilight_end: Vec<String>,
    pub nautical_twilight_begin: Vec<String>,
    pub nautical_twilight_end: Vec<String>,
    pub astronomical_twilight_begin: Vec<String>,
    pub astronomical_twilight_end: Vec<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// The two-letter state code to get alerts for (e.g. 'CA', 'NY')
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LocationRequest {
    /// The location to look up (e.g., 'California', 'Los Angeles', 'San Francisco, CA')
    pub location: String,
}
