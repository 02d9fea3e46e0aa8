//! Designer tuning at four canonical times of day.
//!
//! The compositor resolves the computed time of day to the nearest
//! checkpoint (dawn, noon, dusk, midnight), looks up the override fragment
//! tuned for the active condition at that checkpoint, and merges it over the
//! computed canvas props one group deep.

pub mod checkpoint;
pub mod error;
pub mod patch;
pub mod table;

#[cfg(test)]
mod tests_table;

pub use checkpoint::{circular_distance, nearest_checkpoint, Checkpoint};
pub use error::TuningError;
pub use patch::{
    apply_fragment, merge_overrides, CelestialPatch, CloudPatch, InteractionsPatch, LayersPatch,
    LightningPatch, OverrideFragment, PatchValue, RainPatch, SnowPatch,
};
pub use table::{CheckpointOverrides, TunedPresets};
