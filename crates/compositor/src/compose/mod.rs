//! Effect compositor.
//!
//! Chooses between the weather-mapped (auto) and caller-supplied (custom)
//! inputs, applies tuned overrides in auto mode, caps the device pixel ratio
//! for the requested quality, and withholds props until the host reports the
//! drawing surface as mounted.
//!
//! `recompose_canvas_props` runs in `Update` and rebuilds `CanvasOutput`
//! from scratch whenever the observation, settings, viewport, mount flag,
//! tuned table, or custom props change.

pub mod compute;
pub(crate) mod constants;
mod system;
pub mod types;


pub use compute::{compose_auto, compose_canvas_props, compose_custom, effective_dpr};
pub use system::{recompose_canvas_props, EffectCompositorPlugin};
pub use types::{
    CanvasOutput, ClientMounted, CompositorContext, CompositorInput, CustomEffectProps,
    EffectMode, EffectSettings, RenderQuality, ViewportInfo,
};
