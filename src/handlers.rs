//! Tool orchestration. Every upstream failure ends as user-facing text;
//! nothing here returns an error to the MCP runtime.

use chrono::NaiveDate;

use crate::error::FetchError;
use crate::formatters::{alerts_report, forecast_report, sunrise_sunset_report};
use crate::geocoding::GeocodingClient;
use crate::nws::NwsClient;
use crate::sun;

pub async fn get_alerts(nws: &NwsClient, state: &str) -> String {
    let state_code = state.to_uppercase();

    match nws.alerts(&state_code).await {
        Ok(features) if !features.is_empty() => alerts_report(&state_code, &features),
        _ => format!("No weather alerts found for {}.", state_code),
    }
}

pub async fn get_forecast(nws: &NwsClient, geocoder: &GeocodingClient, location: &str) -> String {
    let coords = match geocoder.geocode(location).await {
        Ok(coords) => coords,
        Err(e) => return geocode_failure(location, &e),
    };

    let forecast_url = match nws.forecast_url(coords).await {
        Ok(url) => url,
        Err(e) if e.is_not_found() => {
            return format!(
                "No weather forecast found for {}, {}. This location is not covered by the NWS forecast grid.",
                coords.latitude, coords.longitude
            );
        }
        Err(_) => {
            return format!(
                "Failed to retrieve grid point data for {}, {}.",
                coords.latitude, coords.longitude
            );
        }
    };

    let periods = match nws.forecast(&forecast_url).await {
        Ok(periods) => periods,
        Err(_) => return "Failed to retrieve forecast data".to_string(),
    };

    if periods.is_empty() {
        return "No forecast periods available for this location.".to_string();
    }

    forecast_report(coords, &periods)
}

pub async fn get_sunrise_sunset(
    geocoder: &GeocodingClient,
    location: &str,
    today: NaiveDate,
) -> String {
    let coords = match geocoder.geocode(location).await {
        Ok(coords) => coords,
        Err(e) => return geocode_failure(location, &e),
    };

    let table = sun::estimate(coords.latitude, today);
    let sunrise = sun::entry_for_date(&table.sunrise, today);
    let sunset = sun::entry_for_date(&table.sunset, today);

    sunrise_sunset_report(location, today, sunrise, sunset)
}

fn geocode_failure(location: &str, error: &FetchError) -> String {
    if error.is_not_found() {
        format!(
            "Could not find location: {}. Please provide a more specific location (e.g., 'Los Angeles, CA' or 'San Francisco, California').",
            location
        )
    } else {
        format!(
            "Error geocoding location: {}. Please try again or provide more specific coordinates.",
            location
        )
    }
}
