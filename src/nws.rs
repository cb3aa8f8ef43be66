use percent_encoding::utf8_percent_encode;
use reqwest::StatusCode;

use crate::constants::GEO_JSON;
use crate::error::FetchError;
use crate::http::{HttpClient, QUERY_COMPONENT};
use crate::models::{
    AlertFeature, AlertsResponse, Coordinates, ForecastPeriod, ForecastResponse, PointsResponse,
};

/// Client for the National Weather Service API
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: HttpClient,
    base_url: String,
}

impl NwsClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Active alerts for a state. The code is upper-cased before the request.
    pub async fn alerts(&self, state: &str) -> Result<Vec<AlertFeature>, FetchError> {
        let state_code = state.to_uppercase();
        let url = format!(
            "{}/alerts?area={}",
            self.base_url,
            utf8_percent_encode(&state_code, QUERY_COMPONENT)
        );
        let alerts = self.http.fetch_json::<AlertsResponse>(&url, Some(GEO_JSON)).await?;
        Ok(alerts.features)
    }

    /// Resolves the grid-point forecast URL for a coordinate pair.
    ///
    /// A 404 from the points endpoint or a response without `properties.forecast`
    /// both mean the location is outside the forecast grid and map to `NotFound`.
    pub async fn forecast_url(&self, coords: Coordinates) -> Result<String, FetchError> {
        let url = format!(
            "{}/points/{:.4},{:.4}",
            self.base_url, coords.latitude, coords.longitude
        );

        let points = match self.http.fetch_json::<PointsResponse>(&url, Some(GEO_JSON)).await {
            Ok(points) => points,
            Err(FetchError::BadStatus { status, .. }) if status == StatusCode::NOT_FOUND => {
                return Err(FetchError::NotFound(format!("no grid point at {url}")));
            }
            Err(e) => return Err(e),
        };

        points
            .properties
            .and_then(|p| p.forecast)
            .ok_or_else(|| FetchError::NotFound(format!("no forecast URL in {url}")))
    }

    /// Forecast periods served at a URL obtained from [`NwsClient::forecast_url`]
    pub async fn forecast(&self, forecast_url: &str) -> Result<Vec<ForecastPeriod>, FetchError> {
        let forecast = self
            .http
            .fetch_json::<ForecastResponse>(forecast_url, Some(GEO_JSON))
            .await?;
        Ok(forecast.properties.periods)
    }
}
