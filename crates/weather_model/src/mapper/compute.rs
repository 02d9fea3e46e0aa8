//! Observation to effect-layer mapping.
//!
//! Pure and deterministic: identical observations always produce identical
//! configurations.

use crate::condition::{PrecipitationLevel, WeatherObservation};
use crate::presets::{celestial_preset, condition_preset};
use crate::time_model::{is_night, moon_phase, sun_altitude, time_of_day};

use super::constants::*;
use super::modifiers::{map_precipitation, map_visibility, map_wind_speed};
use super::post::compute_post_process;
use super::types::*;

fn unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Map an observation onto a complete layer configuration.
pub fn map_weather_to_effects(observation: &WeatherObservation) -> EffectLayerConfig {
    let condition = observation.condition;
    let preset = condition_preset(condition);
    let instant = observation.instant();

    let wind = map_wind_speed(observation.wind_speed.unwrap_or(0.0));
    let precipitation =
        map_precipitation(observation.precipitation.unwrap_or(PrecipitationLevel::None));
    let visibility_haze =
        unit(map_visibility(observation.visibility.unwrap_or(VISIBILITY_CLEAR_MILES)));

    let altitude = sun_altitude(instant.as_ref());
    let night = is_night(altitude);

    // --- Atmosphere ---
    let haze = unit(visibility_haze.max(preset.cloud.darkness * CLOUD_DARKNESS_HAZE));
    let star_visibility = if night {
        unit(1.0 - preset.cloud.coverage)
    } else {
        0.0
    };

    // --- Layers ---
    let cloud = CloudConfig {
        coverage: unit(preset.cloud.coverage),
        speed: preset.cloud.speed * (1.0 + WIND_CLOUD_SPEED_GAIN * wind),
        darkness: unit(preset.cloud.darkness),
        turbulence: unit(preset.cloud.turbulence * (1.0 + WIND_CLOUD_TURBULENCE_GAIN * wind)),
    };

    // Runtime precipitation only overrides the preset when non-zero
    let rain = preset.rain.map(|r| RainConfig {
        intensity: unit(if precipitation > 0.0 {
            precipitation
        } else {
            r.intensity
        }),
        glass_drops: r.glass_drops,
        falling_rain: r.falling_rain,
        angle: r.angle + WIND_RAIN_ANGLE_DEGREES * wind,
    });

    let lightning = preset.lightning.map(|l| LightningConfig {
        enabled: l.enabled,
        auto_trigger: l.auto_trigger,
        interval_min: l.interval_min,
        interval_max: l.interval_max,
    });

    let snow = preset.snow.map(|s| SnowConfig {
        intensity: unit(s.intensity),
        wind_drift: s.wind_drift + WIND_SNOW_DRIFT_GAIN * wind,
    });

    // --- Celestial ---
    let celestial_base = celestial_preset(condition);
    let celestial = CelestialConfig {
        time_of_day: time_of_day(instant.as_ref()),
        moon_phase: moon_phase(instant.as_ref()),
        star_density: if night {
            celestial_base.star_density
        } else {
            0.0
        },
        appearance: celestial_base.appearance,
    };

    // Bloom and god rays take visibility haze, not atmosphere haze
    let post = compute_post_process(
        condition,
        visibility_haze,
        altitude,
        Some(&cloud),
        lightning.as_ref(),
    );

    EffectLayerConfig {
        cloud: Some(cloud),
        rain,
        lightning,
        snow,
        celestial,
        atmosphere: AtmosphereConfig {
            haze,
            star_visibility,
        },
        post,
    }
}
