use weather_model::{
    map_weather_to_effects, sun_altitude, sun_altitude_from_fraction, WeatherObservation,
};

use crate::canvas::{derive_interactions, to_canvas_props, CanvasProps, LayerToggles};
use crate::tuning::{apply_fragment, nearest_checkpoint};

use super::constants::*;
use super::types::*;

/// Device pixel ratio after the quality cap. Never below 1.
pub fn effective_dpr(
    device_pixel_ratio: f32,
    quality: RenderQuality,
    viewport_width_px: f32,
) -> f32 {
    let cap = match quality {
        RenderQuality::Low => DPR_CAP_LOW,
        RenderQuality::Medium => DPR_CAP_MEDIUM,
        RenderQuality::High => DPR_CAP_HIGH,
        RenderQuality::Auto => {
            if viewport_width_px < SMALL_VIEWPORT_PX {
                DPR_CAP_MEDIUM
            } else {
                DPR_CAP_HIGH
            }
        }
    };
    device_pixel_ratio.min(cap).max(MIN_DPR)
}

impl CompositorContext<'_> {
    /// Effects are drawn only after mount, while enabled, and without a
    /// reduced-motion request.
    pub fn is_active(&self) -> bool {
        self.mounted && self.settings.enabled && !self.settings.reduced_motion
    }

    pub fn mode(&self, input: &CompositorInput<'_>) -> EffectMode {
        if !self.is_active() {
            return EffectMode::Disabled;
        }
        match input {
            CompositorInput::Auto(_) => EffectMode::Auto,
            CompositorInput::Custom(_) => EffectMode::Custom,
        }
    }

    pub fn dpr(&self) -> f32 {
        effective_dpr(
            self.viewport.device_pixel_ratio,
            self.settings.quality,
            self.viewport.width_px,
        )
    }
}

/// Map the observation and apply the tuned fragment for the nearest
/// checkpoint, when the condition has one.
pub fn compose_auto(observation: &WeatherObservation, ctx: &CompositorContext<'_>) -> CanvasProps {
    let config = map_weather_to_effects(observation);
    let altitude = sun_altitude(observation.instant().as_ref());
    let props = to_canvas_props(
        &config,
        LayerToggles::all(),
        altitude,
        Some(derive_interactions(&config)),
        ctx.dpr(),
    );

    let checkpoint = nearest_checkpoint(config.celestial.time_of_day);
    match ctx.tuned.fragment_for(observation.condition, checkpoint) {
        Some(fragment) => apply_fragment(&props, fragment),
        None => props,
    }
}

/// Reshape caller values without running the mapper or tuning.
pub fn compose_custom(custom: &CustomEffectProps, ctx: &CompositorContext<'_>) -> CanvasProps {
    let altitude = sun_altitude_from_fraction(custom.config.celestial.time_of_day);
    to_canvas_props(
        &custom.config,
        custom.layers,
        altitude,
        custom.interactions,
        ctx.dpr(),
    )
}

/// Renderer props for `input`, or `None` while effects are disabled.
pub fn compose_canvas_props(
    input: CompositorInput<'_>,
    ctx: &CompositorContext<'_>,
) -> Option<CanvasProps> {
    if !ctx.is_active() {
        return None;
    }
    Some(match input {
        CompositorInput::Auto(observation) => compose_auto(observation, ctx),
        CompositorInput::Custom(custom) => compose_custom(custom, ctx),
    })
}
