use percent_encoding::utf8_percent_encode;

use crate::error::FetchError;
use crate::http::{HttpClient, QUERY_COMPONENT};
use crate::models::{Coordinates, GeocodeResult};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Resolves free-text locations to coordinates via a Nominatim-style search endpoint
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: HttpClient,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Looks up `location` and returns the coordinates of the first match
    pub async fn geocode(&self, location: &str) -> Result<Coordinates, FetchError> {
        let url = self.search_url(location);
        let results = self.http.fetch_json::<Vec<GeocodeResult>>(&url, None).await?;

        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound(format!("no geocoding match for {location}")))?;

        tracing::debug!(
            message = "geocoded location",
            location = %location,
            display_name = first.display_name.as_deref().unwrap_or("")
        );

        Ok(Coordinates {
            latitude: parse_coordinate(&first.lat, MAX_LATITUDE)?,
            longitude: parse_coordinate(&first.lon, MAX_LONGITUDE)?,
        })
    }

    fn search_url(&self, location: &str) -> String {
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            utf8_percent_encode(location, QUERY_COMPONENT)
        )
    }
}

// Rejects anything that is not a finite degree value within +/- `limit`.
fn parse_coordinate(raw: &str, limit: f64) -> Result<f64, FetchError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= limit)
        .ok_or_else(|| FetchError::InvalidCoordinates(raw.to_string()))
}
