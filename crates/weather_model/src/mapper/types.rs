//! Mapped effect configuration, recomputed per observation and never stored.

use serde::{Deserialize, Serialize};

use crate::presets::CelestialAppearance;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudConfig {
    pub coverage: f32,
    pub speed: f32,
    pub darkness: f32,
    pub turbulence: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainConfig {
    pub intensity: f32,
    pub glass_drops: bool,
    pub falling_rain: bool,
    /// Degrees from vertical.
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningConfig {
    pub enabled: bool,
    pub auto_trigger: bool,
    pub interval_min: f32,
    pub interval_max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowConfig {
    pub intensity: f32,
    pub wind_drift: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialConfig {
    pub time_of_day: f32,
    pub moon_phase: f32,
    /// Zero during the day.
    pub star_density: f32,
    #[serde(flatten)]
    pub appearance: CelestialAppearance,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphereConfig {
    pub haze: f32,
    pub star_visibility: f32,
}

/// Derived post-processing values. Not user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostProcessConfig {
    pub bloom_intensity: f32,
    pub bloom_radius: f32,
    pub exposure_intensity: f32,
    pub god_ray_intensity: f32,
}

/// Complete layer configuration for one observation.
///
/// `None` for an optional layer means the layer is off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectLayerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<RainConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightning: Option<LightningConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<SnowConfig>,
    pub celestial: CelestialConfig,
    pub atmosphere: AtmosphereConfig,
    #[serde(default)]
    pub post: PostProcessConfig,
}
