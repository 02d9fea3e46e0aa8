//! Scene brightness estimate from sun altitude and weather attenuation.

use chrono::{DateTime, Utc};

use crate::condition::WeatherCondition;
use crate::time_model::{sun_altitude, sun_altitude_from_fraction};

/// Per-condition light attenuation, in `[0.30, 1.0]`.
pub fn condition_brightness_multiplier(condition: WeatherCondition) -> f32 {
    match condition {
        WeatherCondition::Clear => 1.0,
        WeatherCondition::PartlyCloudy => 0.9,
        WeatherCondition::Cloudy => 0.8,
        WeatherCondition::Overcast => 0.65,
        WeatherCondition::Fog => 0.7,
        WeatherCondition::Drizzle => 0.75,
        WeatherCondition::Rain => 0.6,
        WeatherCondition::HeavyRain => 0.45,
        WeatherCondition::Thunderstorm => 0.30,
        WeatherCondition::Snow => 0.8,
        WeatherCondition::Sleet => 0.65,
        WeatherCondition::Hail => 0.5,
        WeatherCondition::Windy => 0.9,
    }
}

/// Solar light term: night band `[0.05, 0.15]`, day band `[0.15, 1.0]`.
pub fn solar_light(altitude: f32) -> f32 {
    if altitude < 0.0 {
        0.05 + (1.0 + altitude) * 0.10
    } else {
        0.15 + altitude * 0.85
    }
}

fn attenuate(altitude: f32, condition: WeatherCondition) -> f32 {
    (solar_light(altitude) * condition_brightness_multiplier(condition)).clamp(0.0, 1.0)
}

/// Scene brightness in `[0, 1]` for an instant.
pub fn scene_brightness(timestamp: Option<&DateTime<Utc>>, condition: WeatherCondition) -> f32 {
    attenuate(sun_altitude(timestamp), condition)
}

/// Scene brightness in `[0, 1]` for a raw day fraction.
pub fn scene_brightness_from_fraction(fraction: f32, condition: WeatherCondition) -> f32 {
    attenuate(sun_altitude_from_fraction(fraction), condition)
}
