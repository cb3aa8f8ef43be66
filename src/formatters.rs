use chrono::NaiveDate;

use crate::models::{AlertFeature, Coordinates, ForecastPeriod};

const UNKNOWN: &str = "Unknown";
const SEPARATOR: &str = "---";

/// Formats a single weather alert into a display block ending with `---`
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    [
        format!("Event: {}", or_default(&props.event, UNKNOWN)),
        format!("Area: {}", or_default(&props.area_desc, UNKNOWN)),
        format!("Severity: {}", or_default(&props.severity, UNKNOWN)),
        format!("Status: {}", or_default(&props.status, UNKNOWN)),
        format!("Headline: {}", or_default(&props.headline, "No headline")),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Formats a single forecast period into a display block ending with `---`
pub fn format_forecast_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    [
        format!("{}:", or_default(&period.name, UNKNOWN)),
        format!(
            "Temperature: {}\u{00b0}{}",
            temperature,
            or_default(&period.temperature_unit, "F")
        ),
        format!(
            "Wind: {} {}",
            or_default(&period.wind_speed, UNKNOWN),
            or_default(&period.wind_direction, "")
        ),
        or_default(&period.short_forecast, "No forecast available").to_string(),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Header plus every alert block, for a state with at least one alert
pub fn alerts_report(state_code: &str, features: &[AlertFeature]) -> String {
    let alerts: Vec<String> = features.iter().map(format_alert).collect();
    format!("Active alerts for {}:\n\n{}", state_code, alerts.join("\n"))
}

/// Header plus every forecast period block
pub fn forecast_report(coords: Coordinates, periods: &[ForecastPeriod]) -> String {
    let periods: Vec<String> = periods.iter().map(format_forecast_period).collect();
    format!(
        "Forecast for {}, {}:\n\n{}",
        coords.latitude,
        coords.longitude,
        periods.join("\n")
    )
}

pub fn sunrise_sunset_report(location: &str, date: NaiveDate, sunrise: &str, sunset: &str) -> String {
    format!(
        "Sunrise and Sunset Times for {}:\n\nToday ({}):\nSunrise: {}\nSunset: {}",
        location,
        date.format("%Y-%m-%d"),
        sunrise,
        sunset
    )
}

// Empty strings count as missing, same as an absent field.
fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertProperties;

    fn full_alert() -> AlertFeature {
        AlertFeature {
            properties: AlertProperties {
                event: Some("Flood Warning".to_string()),
                area_desc: Some("Sacramento County".to_string()),
                severity: Some("Severe".to_string()),
                status: Some("Actual".to_string()),
                headline: Some("Flood Warning issued October 16".to_string()),
            },
        }
    }

    #[test]
    fn alert_renders_all_fields() {
        assert_eq!(
            format_alert(&full_alert()),
            "Event: Flood Warning\n\
             Area: Sacramento County\n\
             Severity: Severe\n\
             Status: Actual\n\
             Headline: Flood Warning issued October 16\n\
             ---"
        );
    }

    #[test]
    fn alert_missing_fields_use_placeholders() {
        let text = format_alert(&AlertFeature::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Event: Unknown",
                "Area: Unknown",
                "Severity: Unknown",
                "Status: Unknown",
                "Headline: No headline",
                "---",
            ]
        );
    }

    #[test]
    fn period_defaults() {
        let text = format_forecast_period(&ForecastPeriod::default());
        assert_eq!(
            text,
            "Unknown:\nTemperature: Unknown\u{00b0}F\nWind: Unknown \nNo forecast available\n---"
        );
    }

    #[test]
    fn period_without_unit_defaults_to_fahrenheit() {
        let period = ForecastPeriod {
            name: Some("Tonight".to_string()),
            temperature: Some(54.0),
            wind_speed: Some("5 to 10 mph".to_string()),
            wind_direction: Some("SW".to_string()),
            short_forecast: Some("Mostly Clear".to_string()),
            ..ForecastPeriod::default()
        };
        assert_eq!(
            format_forecast_period(&period),
            "Tonight:\nTemperature: 54\u{00b0}F\nWind: 5 to 10 mph SW\nMostly Clear\n---"
        );
    }

    #[test]
    fn zero_temperature_is_shown() {
        let period = ForecastPeriod {
            temperature: Some(0.0),
            temperature_unit: Some("C".to_string()),
            ..ForecastPeriod::default()
        };
        assert!(format_forecast_period(&period).contains("Temperature: 0\u{00b0}C"));
    }

    #[test]
    fn alerts_report_joins_blocks_with_newline() {
        let text = alerts_report("CA", &[full_alert(), AlertFeature::default()]);
        assert!(text.starts_with("Active alerts for CA:\n\nEvent: Flood Warning\n"));
        assert!(text.contains("---\nEvent: Unknown"));
        assert!(text.ends_with("Headline: No headline\n---"));
    }

    #[test]
    fn forecast_report_header_uses_coordinates() {
        let coords = Coordinates {
            latitude: 34.0536909,
            longitude: -118.242766,
        };
        let text = forecast_report(coords, &[ForecastPeriod::default()]);
        assert!(text.starts_with("Forecast for 34.0536909, -118.242766:\n\nUnknown:"));
    }

    #[test]
    fn sunrise_sunset_report_layout() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            sunrise_sunset_report("Quito", date, "2026-10-16T06:30:00", "2026-10-16T18:30:00"),
            "Sunrise and Sunset Times for Quito:\n\nToday (2026-10-16):\n\
             Sunrise: 2026-10-16T06:30:00\nSunset: 2026-10-16T18:30:00"
        );
    }
}
