//! Weather observation to procedural effect parameters.
//!
//! Combines the day-cycle model, the condition preset table, and runtime
//! modifiers (wind, precipitation, visibility) into a complete
//! `EffectLayerConfig`, including derived post-processing values.

pub mod compute;
pub(crate) mod constants;
pub mod modifiers;
pub mod post;
pub mod types;

#[cfg(test)]
mod tests_modifiers;
#[cfg(test)]
mod tests_post;

pub use compute::map_weather_to_effects;
pub use modifiers::{map_precipitation, map_visibility, map_wind_speed};
pub use post::{compute_post_process, condition_bloom_boost, god_ray_intensity, smoothstep};
pub use types::{
    AtmosphereConfig, CelestialConfig, CloudConfig, EffectLayerConfig, LightningConfig,
    PostProcessConfig, RainConfig, SnowConfig,
};
