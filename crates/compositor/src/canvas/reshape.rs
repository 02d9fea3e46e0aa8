//! Layer configuration to canvas props translation.

use weather_model::brightness::solar_light;
use weather_model::mapper::{
    CelestialConfig, CloudConfig, EffectLayerConfig, LightningConfig, RainConfig, SnowConfig,
};

use super::constants::{FALLING_ANGLE_SCALE, GLASS_INTENSITY_SCALE};
use super::types::*;

pub fn celestial_props(celestial: &CelestialConfig) -> CelestialProps {
    let a = &celestial.appearance;
    CelestialProps {
        time_of_day: celestial.time_of_day,
        moon_phase: celestial.moon_phase,
        star_density: celestial.star_density,
        sun_position_x: a.sun_position_x,
        sun_position_y: a.sun_position_y,
        moon_position_x: a.moon_position_x,
        moon_position_y: a.moon_position_y,
        sun_size: a.sun_size,
        moon_size: a.moon_size,
        sun_glow_intensity: a.sun_glow_intensity,
        sun_glow_size: a.sun_glow_size,
        moon_glow_intensity: a.moon_glow_intensity,
        moon_glow_size: a.moon_glow_size,
        sun_ray_count: a.sun_ray_count,
        sun_ray_length: a.sun_ray_length,
        sun_ray_intensity: a.sun_ray_intensity,
    }
}

pub fn cloud_props(cloud: &CloudConfig, sun_altitude: f32) -> CloudProps {
    CloudProps {
        coverage: cloud.coverage,
        speed: cloud.speed,
        darkness: cloud.darkness,
        turbulence: cloud.turbulence,
        light_intensity: solar_light(sun_altitude),
    }
}

/// Glass drops and falling streaks are separate renderer passes, each gated
/// by its own preset flag.
pub fn rain_props(rain: &RainConfig) -> RainProps {
    RainProps {
        glass_intensity: if rain.glass_drops {
            rain.intensity * GLASS_INTENSITY_SCALE
        } else {
            0.0
        },
        falling_intensity: if rain.falling_rain {
            rain.intensity
        } else {
            0.0
        },
        falling_angle: rain.angle * FALLING_ANGLE_SCALE,
    }
}

pub fn lightning_props(lightning: &LightningConfig) -> LightningProps {
    LightningProps {
        auto_trigger: lightning.auto_trigger,
        auto_interval: (lightning.interval_min + lightning.interval_max) / 2.0,
    }
}

pub fn snow_props(snow: &SnowConfig) -> SnowProps {
    SnowProps {
        intensity: snow.intensity,
        wind_drift: snow.wind_drift,
    }
}

/// Cross-layer scalars implied by a mapped configuration: refraction follows
/// the glass drops, scene illumination follows the lightning exposure flash.
pub fn derive_interactions(config: &EffectLayerConfig) -> InteractionProps {
    InteractionProps {
        rain_refraction_strength: config
            .rain
            .as_ref()
            .map_or(0.0, |r| rain_props(r).glass_intensity),
        lightning_scene_illumination: config.post.exposure_intensity,
    }
}

/// Reshape a layer configuration into canvas props.
///
/// A layer is enabled only when its toggle is set and the configuration
/// carries a fragment for it. Missing fragments leave zeroed props behind.
pub fn to_canvas_props(
    config: &EffectLayerConfig,
    toggles: LayerToggles,
    sun_altitude: f32,
    interactions: Option<InteractionProps>,
    dpr: f32,
) -> CanvasProps {
    let lightning_on = toggles.lightning && config.lightning.is_some_and(|l| l.enabled);

    CanvasProps {
        layers: LayerToggles {
            celestial: toggles.celestial,
            clouds: toggles.clouds && config.cloud.is_some(),
            rain: toggles.rain && config.rain.is_some(),
            lightning: lightning_on,
            snow: toggles.snow && config.snow.is_some(),
        },
        celestial: celestial_props(&config.celestial),
        cloud: config
            .cloud
            .as_ref()
            .map(|c| cloud_props(c, sun_altitude))
            .unwrap_or_default(),
        rain: config.rain.as_ref().map(rain_props).unwrap_or_default(),
        lightning: config
            .lightning
            .as_ref()
            .map(lightning_props)
            .unwrap_or_default(),
        snow: config.snow.as_ref().map(snow_props).unwrap_or_default(),
        post: PostProps {
            bloom_intensity: config.post.bloom_intensity,
            bloom_radius: config.post.bloom_radius,
            exposure_intensity: config.post.exposure_intensity,
            god_ray_intensity: config.post.god_ray_intensity,
            haze: config.atmosphere.haze,
        },
        interactions,
        dpr,
    }
}
