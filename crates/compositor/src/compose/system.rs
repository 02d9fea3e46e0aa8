use bevy::prelude::*;
use weather_model::{WeatherModelPlugin, WeatherObservation};

use crate::tuning::TunedPresets;

use super::compute::compose_canvas_props;
use super::types::*;

/// Rebuild `CanvasOutput` whenever any input resource changes, or custom
/// props are inserted or removed.
#[allow(clippy::too_many_arguments)]
pub fn recompose_canvas_props(
    observation: Res<WeatherObservation>,
    settings: Res<EffectSettings>,
    viewport: Res<ViewportInfo>,
    mounted: Res<ClientMounted>,
    tuned: Res<TunedPresets>,
    custom: Option<Res<CustomEffectProps>>,
    mut output: ResMut<CanvasOutput>,
    mut had_custom: Local<bool>,
    mut last_mode: Local<Option<EffectMode>>,
) {
    let has_custom = custom.is_some();
    let custom_toggled = has_custom != *had_custom;
    *had_custom = has_custom;

    let changed = custom_toggled
        || custom.as_ref().is_some_and(|c| c.is_changed())
        || observation.is_changed()
        || settings.is_changed()
        || viewport.is_changed()
        || mounted.is_changed()
        || tuned.is_changed();
    if !changed {
        return;
    }

    let input = match custom.as_deref() {
        Some(custom) => CompositorInput::Custom(custom),
        None => CompositorInput::Auto(&observation),
    };
    let ctx = CompositorContext {
        settings: &settings,
        viewport: &viewport,
        mounted: mounted.0,
        tuned: &tuned,
    };

    let mode = ctx.mode(&input);
    if *last_mode != Some(mode) {
        debug!("effect compositor mode {:?} -> {:?}", *last_mode, mode);
        *last_mode = Some(mode);
    }

    output.props = compose_canvas_props(input, &ctx);
    output.generation += 1;
}

pub struct EffectCompositorPlugin;

impl Plugin for EffectCompositorPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<WeatherModelPlugin>() {
            app.add_plugins(WeatherModelPlugin);
        }
        app.init_resource::<EffectSettings>()
            .init_resource::<ViewportInfo>()
            .init_resource::<ClientMounted>()
            .init_resource::<TunedPresets>()
            .init_resource::<CanvasOutput>()
            .add_systems(Update, recompose_canvas_props);
    }
}
