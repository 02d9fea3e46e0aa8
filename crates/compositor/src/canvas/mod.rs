//! Canvas props: the flattened, renderer-native form of an
//! `EffectLayerConfig`.
//!
//! The renderer never sees the mapper's layer structs. Everything it draws
//! comes from `CanvasProps`, which is rebuilt whole on every recompute.

pub(crate) mod constants;
pub mod reshape;
pub mod types;

#[cfg(test)]
mod tests_reshape;

pub use reshape::{derive_interactions, to_canvas_props};
pub use types::{
    CanvasProps, CelestialProps, CloudProps, InteractionProps, LayerToggles, LightningProps,
    PostProps, RainProps, SnowProps,
};
