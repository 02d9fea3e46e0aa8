//! Tuned preset table: condition -> checkpoint -> override fragment.
//!
//! Loaded once and never written afterwards. A condition without an entry,
//! or whose entry is empty, renders untuned.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use weather_model::WeatherCondition;

use super::checkpoint::Checkpoint;
use super::error::TuningError;
use super::patch::{
    CelestialPatch, CloudPatch, InteractionsPatch, OverrideFragment, RainPatch, SnowPatch,
};

/// Override fragments for the four checkpoints of one condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckpointOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dawn: Option<OverrideFragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noon: Option<OverrideFragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dusk: Option<OverrideFragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midnight: Option<OverrideFragment>,
}

impl CheckpointOverrides {
    pub fn get(&self, checkpoint: Checkpoint) -> Option<&OverrideFragment> {
        match checkpoint {
            Checkpoint::Dawn => self.dawn.as_ref(),
            Checkpoint::Noon => self.noon.as_ref(),
            Checkpoint::Dusk => self.dusk.as_ref(),
            Checkpoint::Midnight => self.midnight.as_ref(),
        }
    }

    /// No checkpoint carries an override.
    pub fn is_empty(&self) -> bool {
        Checkpoint::ORDER
            .iter()
            .all(|c| self.get(*c).map_or(true, |f| f.is_empty()))
    }
}

/// Hand-tuned overrides per condition, as a Bevy resource.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TunedPresets {
    table: BTreeMap<WeatherCondition, CheckpointOverrides>,
}

impl Default for TunedPresets {
    fn default() -> Self {
        BUILTIN_TUNED_PRESETS.clone()
    }
}

impl TunedPresets {
    /// A table with no overrides at all.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    pub fn with_condition(
        mut self,
        condition: WeatherCondition,
        overrides: CheckpointOverrides,
    ) -> Self {
        self.table.insert(condition, overrides);
        self
    }

    /// Parse a designer-exported table keyed by condition keyword.
    ///
    /// Rejects unknown keys, non-finite numbers and unit-range fields
    /// outside `[0, 1]` so a bad export fails at load time instead of at
    /// draw time.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let presets: TunedPresets = serde_json::from_str(json)?;
        presets.validate()?;
        info!(
            "loaded tuned presets for {} condition(s)",
            presets.table.len()
        );
        Ok(presets)
    }

    fn validate(&self) -> Result<(), TuningError> {
        for (condition, overrides) in &self.table {
            for checkpoint in Checkpoint::ORDER {
                let Some(fragment) = overrides.get(checkpoint) else {
                    continue;
                };
                if let Some((group, field)) = fragment.non_finite_field() {
                    return Err(TuningError::NonFinite {
                        condition: *condition,
                        checkpoint,
                        group,
                        field,
                    });
                }
                if let Some((group, field, value)) = fragment.out_of_range_field() {
                    return Err(TuningError::OutOfRange {
                        condition: *condition,
                        checkpoint,
                        group,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn overrides_for(&self, condition: WeatherCondition) -> Option<&CheckpointOverrides> {
        self.table.get(&condition)
    }

    /// Fragment to apply for `condition` at `checkpoint`, if the condition
    /// has a non-empty table and that checkpoint has an entry.
    pub fn fragment_for(
        &self,
        condition: WeatherCondition,
        checkpoint: Checkpoint,
    ) -> Option<&OverrideFragment> {
        self.overrides_for(condition)
            .filter(|overrides| !overrides.is_empty())
            .and_then(|overrides| overrides.get(checkpoint))
    }

    pub fn conditions(&self) -> impl Iterator<Item = WeatherCondition> + '_ {
        self.table.keys().copied()
    }
}

// =============================================================================
// Built-in table
// =============================================================================

static BUILTIN_TUNED_PRESETS: LazyLock<TunedPresets> = LazyLock::new(builtin_tuned_presets);

fn warm_low_sun() -> OverrideFragment {
    OverrideFragment {
        celestial: Some(CelestialPatch {
            sun_glow_intensity: Some(0.85),
            sun_glow_size: Some(0.5),
            sun_ray_intensity: Some(0.4),
            ..Default::default()
        }),
        cloud: Some(CloudPatch {
            light_intensity: Some(0.55),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn builtin_tuned_presets() -> TunedPresets {
    TunedPresets::empty()
        .with_condition(
            WeatherCondition::Clear,
            CheckpointOverrides {
                dawn: Some(warm_low_sun()),
                dusk: Some(warm_low_sun()),
                midnight: Some(OverrideFragment {
                    celestial: Some(CelestialPatch {
                        star_density: Some(0.8),
                        moon_glow_intensity: Some(0.4),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                noon: None,
            },
        )
        .with_condition(
            WeatherCondition::PartlyCloudy,
            CheckpointOverrides {
                dawn: Some(warm_low_sun()),
                dusk: Some(warm_low_sun()),
                ..Default::default()
            },
        )
        .with_condition(
            WeatherCondition::Fog,
            CheckpointOverrides {
                dawn: Some(OverrideFragment {
                    cloud: Some(CloudPatch {
                        turbulence: Some(0.05),
                        speed: Some(0.05),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                midnight: Some(OverrideFragment {
                    celestial: Some(CelestialPatch {
                        moon_glow_size: Some(0.35),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .with_condition(
            WeatherCondition::Thunderstorm,
            CheckpointOverrides {
                noon: Some(OverrideFragment {
                    cloud: Some(CloudPatch {
                        darkness: Some(0.9),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                midnight: Some(OverrideFragment {
                    rain: Some(RainPatch {
                        glass_intensity: Some(0.8),
                        ..Default::default()
                    }),
                    interactions: Some(InteractionsPatch {
                        lightning_scene_illumination: Some(1.0),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .with_condition(
            WeatherCondition::Snow,
            CheckpointOverrides {
                midnight: Some(OverrideFragment {
                    snow: Some(SnowPatch {
                        intensity: Some(0.7),
                        ..Default::default()
                    }),
                    celestial: Some(CelestialPatch {
                        moon_glow_intensity: Some(0.45),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
}
