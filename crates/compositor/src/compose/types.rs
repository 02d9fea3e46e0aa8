use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use weather_model::{EffectLayerConfig, WeatherObservation};

use crate::canvas::{CanvasProps, InteractionProps, LayerToggles};
use crate::tuning::TunedPresets;

/// Rendering quality requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    Low,
    Medium,
    High,
    /// Cap chosen from the viewport width.
    #[default]
    Auto,
}

/// Host-controlled effect settings.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectSettings {
    pub enabled: bool,
    pub quality: RenderQuality,
    /// User asked for reduced motion; no effects are rendered.
    pub reduced_motion: bool,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            quality: RenderQuality::Auto,
            reduced_motion: false,
        }
    }
}

/// Size and pixel density of the surface the renderer draws into.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportInfo {
    /// CSS pixels.
    pub width_px: f32,
    pub device_pixel_ratio: f32,
}

impl Default for ViewportInfo {
    fn default() -> Self {
        Self {
            width_px: 1024.0,
            device_pixel_ratio: 1.0,
        }
    }
}

/// Set by the host once the drawing surface exists. Props are withheld
/// until then.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientMounted(pub bool);

/// Explicit per-layer values supplied by the caller. While this resource
/// exists the weather mapper is bypassed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEffectProps {
    #[serde(default)]
    pub layers: LayerToggles,
    pub config: EffectLayerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions: Option<InteractionProps>,
}

/// Where the compositor takes its layer values from.
#[derive(Debug, Clone, Copy)]
pub enum CompositorInput<'a> {
    /// Map the observation, then apply tuned overrides.
    Auto(&'a WeatherObservation),
    /// Use caller values as-is.
    Custom(&'a CustomEffectProps),
}

/// Outcome of the compositor decision, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectMode {
    Disabled,
    Custom,
    Auto,
}

/// Everything besides the input that shapes the output.
#[derive(Debug, Clone, Copy)]
pub struct CompositorContext<'a> {
    pub settings: &'a EffectSettings,
    pub viewport: &'a ViewportInfo,
    pub mounted: bool,
    pub tuned: &'a TunedPresets,
}

/// Latest props for the renderer. `None` while effects are disabled.
#[derive(Resource, Debug, Clone, Default)]
pub struct CanvasOutput {
    pub props: Option<CanvasProps>,
    /// Incremented on every recompute, including ones that withhold props.
    pub generation: u64,
}
