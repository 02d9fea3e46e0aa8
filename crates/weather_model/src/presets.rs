//! Static per-condition base configuration for every effect layer.
//!
//! A layer fragment missing from a condition's preset force-disables that
//! layer: runtime modifiers can tune a layer but never switch one on.

use serde::{Deserialize, Serialize};

use crate::condition::WeatherCondition;

// =============================================================================
// Layer presets
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudPreset {
    pub coverage: f32,
    pub speed: f32,
    pub darkness: f32,
    pub turbulence: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainPreset {
    pub intensity: f32,
    /// Droplets sliding on the glass in front of the scene.
    pub glass_drops: bool,
    /// Streaks falling through the scene.
    pub falling_rain: bool,
    /// Fall angle in degrees from vertical.
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowPreset {
    pub intensity: f32,
    pub wind_drift: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningPreset {
    pub enabled: bool,
    pub auto_trigger: bool,
    /// Seconds between automatic strikes, lower bound.
    pub interval_min: f32,
    /// Seconds between automatic strikes, upper bound.
    pub interval_max: f32,
}

/// Base configuration for one condition. `cloud` is always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionPreset {
    pub cloud: CloudPreset,
    pub rain: Option<RainPreset>,
    pub snow: Option<SnowPreset>,
    pub lightning: Option<LightningPreset>,
}

const fn cloud(coverage: f32, speed: f32, darkness: f32, turbulence: f32) -> CloudPreset {
    CloudPreset {
        coverage,
        speed,
        darkness,
        turbulence,
    }
}

const fn rain(intensity: f32, angle: f32) -> RainPreset {
    RainPreset {
        intensity,
        glass_drops: true,
        falling_rain: true,
        angle,
    }
}

const fn snow(intensity: f32, wind_drift: f32) -> SnowPreset {
    SnowPreset {
        intensity,
        wind_drift,
    }
}

/// Base layer configuration for `condition`.
pub fn condition_preset(condition: WeatherCondition) -> ConditionPreset {
    let only_clouds = |c: CloudPreset| ConditionPreset {
        cloud: c,
        rain: None,
        snow: None,
        lightning: None,
    };

    match condition {
        WeatherCondition::Clear => only_clouds(cloud(0.1, 0.2, 0.0, 0.1)),
        WeatherCondition::PartlyCloudy => only_clouds(cloud(0.4, 0.3, 0.1, 0.2)),
        WeatherCondition::Cloudy => only_clouds(cloud(0.7, 0.3, 0.25, 0.3)),
        WeatherCondition::Overcast => only_clouds(cloud(0.95, 0.2, 0.45, 0.25)),
        WeatherCondition::Fog => only_clouds(cloud(0.8, 0.1, 0.2, 0.1)),
        WeatherCondition::Windy => only_clouds(cloud(0.35, 0.9, 0.1, 0.6)),
        WeatherCondition::Drizzle => ConditionPreset {
            cloud: cloud(0.75, 0.3, 0.35, 0.3),
            rain: Some(RainPreset {
                glass_drops: true,
                falling_rain: false,
                ..rain(0.25, 5.0)
            }),
            snow: None,
            lightning: None,
        },
        WeatherCondition::Rain => ConditionPreset {
            cloud: cloud(0.85, 0.4, 0.5, 0.4),
            rain: Some(rain(0.6, 10.0)),
            snow: None,
            lightning: None,
        },
        WeatherCondition::HeavyRain => ConditionPreset {
            cloud: cloud(0.95, 0.5, 0.65, 0.55),
            rain: Some(rain(0.9, 12.0)),
            snow: None,
            lightning: None,
        },
        WeatherCondition::Thunderstorm => ConditionPreset {
            cloud: cloud(1.0, 0.6, 0.8, 0.7),
            rain: Some(rain(1.0, 15.0)),
            snow: None,
            lightning: Some(LightningPreset {
                enabled: true,
                auto_trigger: true,
                interval_min: 3.0,
                interval_max: 8.0,
            }),
        },
        WeatherCondition::Snow => ConditionPreset {
            cloud: cloud(0.85, 0.2, 0.3, 0.2),
            rain: None,
            snow: Some(snow(0.6, 0.2)),
            lightning: None,
        },
        WeatherCondition::Sleet => ConditionPreset {
            cloud: cloud(0.9, 0.35, 0.45, 0.35),
            rain: Some(rain(0.4, 8.0)),
            snow: Some(snow(0.35, 0.3)),
            lightning: None,
        },
        WeatherCondition::Hail => ConditionPreset {
            cloud: cloud(0.9, 0.5, 0.6, 0.6),
            rain: Some(RainPreset {
                falling_rain: false,
                ..rain(0.3, 8.0)
            }),
            snow: Some(snow(0.5, 0.1)),
            lightning: None,
        },
    }
}

// =============================================================================
// Celestial presets
// =============================================================================

/// Screen placement, size, glow, and ray shape of the sun and moon.
/// Positions are normalized screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialAppearance {
    pub sun_position_x: f32,
    pub sun_position_y: f32,
    pub moon_position_x: f32,
    pub moon_position_y: f32,
    pub sun_size: f32,
    pub moon_size: f32,
    pub sun_glow_intensity: f32,
    pub sun_glow_size: f32,
    pub moon_glow_intensity: f32,
    pub moon_glow_size: f32,
    pub sun_ray_count: u32,
    pub sun_ray_length: f32,
    pub sun_ray_intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialPreset {
    /// Star density used at night.
    pub star_density: f32,
    pub appearance: CelestialAppearance,
}

const DEFAULT_CELESTIAL: CelestialPreset = CelestialPreset {
    star_density: 0.6,
    appearance: CelestialAppearance {
        sun_position_x: 0.75,
        sun_position_y: 0.2,
        moon_position_x: 0.25,
        moon_position_y: 0.2,
        sun_size: 0.12,
        moon_size: 0.08,
        sun_glow_intensity: 0.6,
        sun_glow_size: 0.35,
        moon_glow_intensity: 0.3,
        moon_glow_size: 0.2,
        sun_ray_count: 12,
        sun_ray_length: 0.4,
        sun_ray_intensity: 0.25,
    },
};

/// Celestial preset for `condition`.
///
/// Every condition currently maps to the same values. The keyed lookup is
/// kept so individual conditions can diverge without touching callers.
pub fn celestial_preset(condition: WeatherCondition) -> CelestialPreset {
    match condition {
        WeatherCondition::Clear
        | WeatherCondition::PartlyCloudy
        | WeatherCondition::Cloudy
        | WeatherCondition::Overcast
        | WeatherCondition::Fog
        | WeatherCondition::Drizzle
        | WeatherCondition::Rain
        | WeatherCondition::HeavyRain
        | WeatherCondition::Thunderstorm
        | WeatherCondition::Snow
        | WeatherCondition::Sleet
        | WeatherCondition::Hail
        | WeatherCondition::Windy => DEFAULT_CELESTIAL,
    }
}
