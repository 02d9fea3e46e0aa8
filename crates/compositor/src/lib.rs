//! Weather effect compositor.
//!
//! Turns a `WeatherObservation` (or caller-supplied layer values) into the
//! flattened `CanvasProps` an external renderer draws from. Add
//! `EffectCompositorPlugin`, set `ClientMounted(true)` once the surface
//! exists, and read `CanvasOutput`.

pub mod canvas;
pub mod compose;
pub mod tuning;

pub use canvas::{CanvasProps, InteractionProps, LayerToggles};
pub use compose::{
    compose_canvas_props, effective_dpr, CanvasOutput, ClientMounted, CompositorContext,
    CompositorInput, CustomEffectProps, EffectCompositorPlugin, EffectMode, EffectSettings,
    RenderQuality, ViewportInfo,
};
pub use tuning::{merge_overrides, nearest_checkpoint, Checkpoint, OverrideFragment, TunedPresets};
