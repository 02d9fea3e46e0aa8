//! Derived post-processing: bloom, exposure flash, and god rays.

use crate::condition::WeatherCondition;

use super::constants::*;
use super::types::{CloudConfig, LightningConfig, PostProcessConfig};

/// Hermite smoothstep between `edge0` and `edge1`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Extra bloom for conditions that scatter light.
pub fn condition_bloom_boost(condition: WeatherCondition) -> f32 {
    match condition {
        WeatherCondition::Fog => 0.18,
        WeatherCondition::Thunderstorm => 0.12,
        WeatherCondition::HeavyRain => 0.10,
        WeatherCondition::Overcast => 0.08,
        WeatherCondition::Cloudy | WeatherCondition::PartlyCloudy => 0.06,
        _ => 0.04,
    }
}

/// Sun shafts through broken cloud, strongest with a low sun and partial
/// coverage. Zero without a cloud layer.
pub fn god_ray_intensity(cloud: Option<&CloudConfig>, altitude: f32, haze: f32) -> f32 {
    let Some(cloud) = cloud else {
        return 0.0;
    };
    let day = smoothstep(-0.05, 0.08, altitude);
    let sun_low = 1.0 - smoothstep(0.18, 0.7, altitude.max(0.0));
    let coverage = smoothstep(0.25, 0.85, cloud.coverage);
    let not_overcast = 1.0 - smoothstep(0.97, 1.0, cloud.coverage);
    let particles = GOD_RAY_PARTICLE_BASE + GOD_RAY_PARTICLE_HAZE_GAIN * haze;
    (day * sun_low * coverage * not_overcast * particles * GOD_RAY_MAX).clamp(0.0, 1.0)
}

pub fn compute_post_process(
    condition: WeatherCondition,
    haze: f32,
    altitude: f32,
    cloud: Option<&CloudConfig>,
    lightning: Option<&LightningConfig>,
) -> PostProcessConfig {
    let bloom_intensity =
        (BLOOM_BASE + condition_bloom_boost(condition) + haze * BLOOM_HAZE_GAIN).clamp(0.0, 1.0);
    let exposure_intensity = match lightning {
        Some(l) if l.enabled => LIGHTNING_EXPOSURE,
        _ => 0.0,
    };

    PostProcessConfig {
        bloom_intensity,
        bloom_radius: BLOOM_RADIUS_BASE + BLOOM_RADIUS_HAZE_GAIN * haze,
        exposure_intensity,
        god_ray_intensity: god_ray_intensity(cloud, altitude, haze),
    }
}
