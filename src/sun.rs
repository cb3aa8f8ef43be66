//! Sunrise and sunset estimates.
//!
//! This is a coarse placeholder model, not an ephemeris: times shift linearly
//! with latitude around a 06:30/18:30 baseline and ignore longitude, season
//! and time zone. Twilight boundaries are reported equal to sunrise/sunset.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::SunriseSunset;

const BASE_SUNRISE_HOURS: f64 = 6.5;
const BASE_SUNSET_HOURS: f64 = 18.5;

pub const NOT_AVAILABLE: &str = "Not available";

/// Estimated sunrise, in hours after local midnight
pub fn sunrise_hours(latitude: f64) -> f64 {
    BASE_SUNRISE_HOURS + latitude_offset(latitude)
}

/// Estimated sunset, in hours after local midnight
pub fn sunset_hours(latitude: f64) -> f64 {
    BASE_SUNSET_HOURS - latitude_offset(latitude)
}

fn latitude_offset(latitude: f64) -> f64 {
    (latitude / 15.0) * 0.5
}

/// Builds the sun event table for `date` at `latitude`.
///
/// A time that cannot be placed on the calendar leaves its lists empty.
pub fn estimate(latitude: f64, date: NaiveDate) -> SunriseSunset {
    let sunrise: Vec<String> = timestamp(date, sunrise_hours(latitude)).into_iter().collect();
    let sunset: Vec<String> = timestamp(date, sunset_hours(latitude)).into_iter().collect();

    SunriseSunset {
        sunrise: sunrise.clone(),
        sunset: sunset.clone(),
        civil_twilight_begin: sunrise.clone(),
        civil_twilight_end: sunset.clone(),
        nautical_twilight_begin: sunrise.clone(),
        nautical_twilight_end: sunset.clone(),
        astronomical_twilight_begin: sunrise,
        astronomical_twilight_end: sunset,
    }
}

/// First entry falling on `date`, or "Not available"
pub fn entry_for_date(entries: &[String], date: NaiveDate) -> &str {
    let prefix = date.format("%Y-%m-%d").to_string();
    entries
        .iter()
        .find(|entry| entry.starts_with(&prefix))
        .map(String::as_str)
        .unwrap_or(NOT_AVAILABLE)
}

// Local wall-clock time, rounded to the minute
fn timestamp(date: NaiveDate, hours: f64) -> Option<String> {
    let minutes = (hours * 60.0).round();
    if !minutes.is_finite() {
        return None;
    }
    let offset = Duration::try_minutes(minutes as i64)?;
    let at = date.and_time(NaiveTime::MIN).checked_add_signed(offset)?;
    Some(at.format("%Y-%m-%dT%H:%M:%S").to_string())
}
