//! Renderer-native props. Field names follow what the external renderer
//! expects, not the mapper's layer configuration.

use serde::{Deserialize, Serialize};

/// Per-layer enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerToggles {
    pub celestial: bool,
    pub clouds: bool,
    pub rain: bool,
    pub lightning: bool,
    pub snow: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self::all()
    }
}

impl LayerToggles {
    pub const fn all() -> Self {
        Self {
            celestial: true,
            clouds: true,
            rain: true,
            lightning: true,
            snow: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            celestial: false,
            clouds: false,
            rain: false,
            lightning: false,
            snow: false,
        }
    }
}

/// Sun, moon, and star field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialProps {
    pub time_of_day: f32,
    pub moon_phase: f32,
    pub star_density: f32,
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

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudProps {
    pub coverage: f32,
    pub speed: f32,
    pub darkness: f32,
    pub turbulence: f32,
    /// Solar light term for the current sun altitude.
    pub light_intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainProps {
    /// Drops beading on the glass in front of the scene.
    pub glass_intensity: f32,
    pub falling_intensity: f32,
    /// Renderer units, not radians.
    pub falling_angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningProps {
    pub auto_trigger: bool,
    /// Mean seconds between automatic strikes.
    pub auto_interval: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowProps {
    pub intensity: f32,
    pub wind_drift: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostProps {
    pub bloom_intensity: f32,
    pub bloom_radius: f32,
    pub exposure_intensity: f32,
    pub god_ray_intensity: f32,
    pub haze: f32,
}

/// Cross-layer scalars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionProps {
    /// How strongly glass drops refract the scene behind them.
    pub rain_refraction_strength: f32,
    /// Scene brightening during a lightning flash.
    pub lightning_scene_illumination: f32,
}

/// Complete props handed to the renderer. Always rebuilt whole.
///
/// Disabled layers still carry values (zeroed when the source layer was
/// absent); the renderer must check `layers` before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasProps {
    pub layers: LayerToggles,
    pub celestial: CelestialProps,
    pub cloud: CloudProps,
    pub rain: RainProps,
    pub lightning: LightningProps,
    pub snow: SnowProps,
    pub post: PostProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions: Option<InteractionProps>,
    pub dpr: f32,
}
