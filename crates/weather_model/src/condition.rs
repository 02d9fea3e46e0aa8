//! Observation input types: the 13 discrete weather conditions, precipitation
//! levels, and the per-render `WeatherObservation` resource.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_model::parse_timestamp;

/// Discrete weather state driving preset selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Thunderstorm,
    Snow,
    Sleet,
    Hail,
    Windy,
}

impl WeatherCondition {
    /// Every condition, in declaration order.
    pub const ALL: [WeatherCondition; 13] = [
        WeatherCondition::Clear,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Overcast,
        WeatherCondition::Fog,
        WeatherCondition::Drizzle,
        WeatherCondition::Rain,
        WeatherCondition::HeavyRain,
        WeatherCondition::Thunderstorm,
        WeatherCondition::Snow,
        WeatherCondition::Sleet,
        WeatherCondition::Hail,
        WeatherCondition::Windy,
    ];

    /// Wire keyword, identical to the serde representation.
    pub fn keyword(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::PartlyCloudy => "partly-cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Overcast => "overcast",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Drizzle => "drizzle",
            WeatherCondition::Rain => "rain",
            WeatherCondition::HeavyRain => "heavy-rain",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Sleet => "sleet",
            WeatherCondition::Hail => "hail",
            WeatherCondition::Windy => "windy",
        }
    }
}

/// Reported precipitation level. Absent means `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationLevel {
    #[default]
    None,
    Light,
    Moderate,
    Heavy,
}

/// A single meteorological observation, supplied once per render.
///
/// Optional fields fall back to documented defaults during mapping: noon for
/// a missing timestamp, 0 mph wind, no precipitation, 10 miles visibility.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub condition: WeatherCondition,
    /// Wind speed in mph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<PrecipitationLevel>,
    /// Relative humidity in percent. Carried for completeness; no effect
    /// parameter depends on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f32>,
    /// Visibility in miles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
    /// ISO-8601 instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl WeatherObservation {
    pub fn new(condition: WeatherCondition) -> Self {
        Self {
            condition,
            ..Default::default()
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_wind_speed(mut self, mph: f32) -> Self {
        self.wind_speed = Some(mph);
        self
    }

    pub fn with_precipitation(mut self, level: PrecipitationLevel) -> Self {
        self.precipitation = Some(level);
        self
    }

    pub fn with_visibility(mut self, miles: f32) -> Self {
        self.visibility = Some(miles);
        self
    }

    /// Parsed timestamp. Unparseable strings are treated as absent.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}
