//! Partial patches over canvas prop groups and the fragment that bundles them.
//!
//! Every patch field is optional. Merging is one level deep: a field set in
//! the override replaces the base field, everything else is kept.

use serde::{Deserialize, Serialize};

use crate::canvas::types::{
    CanvasProps, CelestialProps, CloudProps, InteractionProps, LayerToggles, LightningProps,
    RainProps, SnowProps,
};

/// Values a patch field may hold.
pub trait PatchValue: Copy {
    /// `false` for values the renderer cannot draw (NaN, infinities).
    fn is_finite_value(&self) -> bool;
}

impl PatchValue for f32 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl PatchValue for bool {
    fn is_finite_value(&self) -> bool {
        true
    }
}

impl PatchValue for u32 {
    fn is_finite_value(&self) -> bool {
        true
    }
}

macro_rules! override_patch {
    (
        $(#[$meta:meta])*
        $patch:ident => $target:ident {
            $($field:ident: $ty:ty),+ $(,)?
        }
        $(unit { $($unit:ident),+ $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $patch {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $patch {
            /// Fields set in `over` win; unset fields keep `self`.
            pub fn merged_with(&self, over: &Self) -> Self {
                Self {
                    $($field: over.$field.or(self.$field),)+
                }
            }

            pub fn is_empty(&self) -> bool {
                $(self.$field.is_none())&&+
            }

            pub fn apply_to(&self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )+
            }

            /// Patch that sets every field to the current value of `props`.
            pub fn from_props(props: &$target) -> Self {
                Self {
                    $($field: Some(props.$field),)+
                }
            }

            /// First field holding a value the renderer cannot draw.
            pub fn non_finite_field(&self) -> Option<&'static str> {
                $(
                    if self.$field.is_some_and(|v| !PatchValue::is_finite_value(&v)) {
                        return Some(stringify!($field));
                    }
                )+
                None
            }

            /// First unit-range field set outside `[0, 1]`, with its value.
            pub fn out_of_range_field(&self) -> Option<(&'static str, f32)> {
                $($(
                    if let Some(value) = self.$unit {
                        if !(0.0..=1.0).contains(&value) {
                            return Some((stringify!($unit), value));
                        }
                    }
                )+)?
                None
            }
        }
    };
}

override_patch! {
    LayersPatch => LayerToggles {
        celestial: bool,
        clouds: bool,
        rain: bool,
        lightning: bool,
        snow: bool,
    }
}

override_patch! {
    CelestialPatch => CelestialProps {
        time_of_day: f32,
        moon_phase: f32,
        star_density: f32,
        sun_position_x: f32,
        sun_position_y: f32,
        moon_position_x: f32,
        moon_position_y: f32,
        sun_size: f32,
        moon_size: f32,
        sun_glow_intensity: f32,
        sun_glow_size: f32,
        moon_glow_intensity: f32,
        moon_glow_size: f32,
        sun_ray_count: u32,
        sun_ray_length: f32,
        sun_ray_intensity: f32,
    }
    unit { time_of_day, moon_phase, star_density }
}

override_patch! {
    CloudPatch => CloudProps {
        coverage: f32,
        speed: f32,
        darkness: f32,
        turbulence: f32,
        light_intensity: f32,
    }
    unit { coverage, darkness, turbulence, light_intensity }
}

override_patch! {
    RainPatch => RainProps {
        glass_intensity: f32,
        falling_intensity: f32,
        falling_angle: f32,
    }
    unit { glass_intensity, falling_intensity }
}

override_patch! {
    LightningPatch => LightningProps {
        auto_trigger: bool,
        auto_interval: f32,
    }
}

override_patch! {
    SnowPatch => SnowProps {
        intensity: f32,
        wind_drift: f32,
    }
    unit { intensity }
}

override_patch! {
    InteractionsPatch => InteractionProps {
        rain_refraction_strength: f32,
        lightning_scene_illumination: f32,
    }
    unit { rain_refraction_strength, lightning_scene_illumination }
}

/// Designer override for one condition at one checkpoint. Absent groups are
/// left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverrideFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<LayersPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celestial: Option<CelestialPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<RainPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightning: Option<LightningPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<SnowPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions: Option<InteractionsPatch>,
}

fn merge_group<P: Copy>(base: Option<P>, over: Option<P>, merge: fn(&P, &P) -> P) -> Option<P> {
    match (base, over) {
        (Some(b), Some(o)) => Some(merge(&b, &o)),
        (b, o) => o.or(b),
    }
}

/// Shallow per-group merge of `over` onto `base`.
///
/// Groups missing from both stay missing. Within a group, fields unset in
/// `over` keep their base value. Nothing below the group level is merged.
pub fn merge_overrides(base: &OverrideFragment, over: &OverrideFragment) -> OverrideFragment {
    OverrideFragment {
        layers: merge_group(base.layers, over.layers, LayersPatch::merged_with),
        celestial: merge_group(base.celestial, over.celestial, CelestialPatch::merged_with),
        cloud: merge_group(base.cloud, over.cloud, CloudPatch::merged_with),
        rain: merge_group(base.rain, over.rain, RainPatch::merged_with),
        lightning: merge_group(base.lightning, over.lightning, LightningPatch::merged_with),
        snow: merge_group(base.snow, over.snow, SnowPatch::merged_with),
        interactions: merge_group(
            base.interactions,
            over.interactions,
            InteractionsPatch::merged_with,
        ),
    }
}

impl OverrideFragment {
    /// Fully populated fragment describing `props`. `interactions` is only
    /// present when the props carry them.
    pub fn from_props(props: &CanvasProps) -> Self {
        Self {
            layers: Some(LayersPatch::from_props(&props.layers)),
            celestial: Some(CelestialPatch::from_props(&props.celestial)),
            cloud: Some(CloudPatch::from_props(&props.cloud)),
            rain: Some(RainPatch::from_props(&props.rain)),
            lightning: Some(LightningPatch::from_props(&props.lightning)),
            snow: Some(SnowPatch::from_props(&props.snow)),
            interactions: props.interactions.as_ref().map(InteractionsPatch::from_props),
        }
    }

    /// No group carries any field.
    pub fn is_empty(&self) -> bool {
        self.layers.map_or(true, |p| p.is_empty())
            && self.celestial.map_or(true, |p| p.is_empty())
            && self.cloud.map_or(true, |p| p.is_empty())
            && self.rain.map_or(true, |p| p.is_empty())
            && self.lightning.map_or(true, |p| p.is_empty())
            && self.snow.map_or(true, |p| p.is_empty())
            && self.interactions.map_or(true, |p| p.is_empty())
    }

    /// Write every set field into `props`. An interactions patch on props
    /// without interactions starts from zeroed interactions.
    pub fn apply_to(&self, props: &mut CanvasProps) {
        if let Some(p) = &self.layers {
            p.apply_to(&mut props.layers);
        }
        if let Some(p) = &self.celestial {
            p.apply_to(&mut props.celestial);
        }
        if let Some(p) = &self.cloud {
            p.apply_to(&mut props.cloud);
        }
        if let Some(p) = &self.rain {
            p.apply_to(&mut props.rain);
        }
        if let Some(p) = &self.lightning {
            p.apply_to(&mut props.lightning);
        }
        if let Some(p) = &self.snow {
            p.apply_to(&mut props.snow);
        }
        if let Some(p) = &self.interactions {
            p.apply_to(props.interactions.get_or_insert_with(InteractionProps::default));
        }
    }

    /// `(group, field)` of the first value the renderer cannot draw.
    pub fn non_finite_field(&self) -> Option<(&'static str, &'static str)> {
        let groups = [
            ("layers", self.layers.and_then(|p| p.non_finite_field())),
            ("celestial", self.celestial.and_then(|p| p.non_finite_field())),
            ("cloud", self.cloud.and_then(|p| p.non_finite_field())),
            ("rain", self.rain.and_then(|p| p.non_finite_field())),
            ("lightning", self.lightning.and_then(|p| p.non_finite_field())),
            ("snow", self.snow.and_then(|p| p.non_finite_field())),
            (
                "interactions",
                self.interactions.and_then(|p| p.non_finite_field()),
            ),
        ];
        groups
            .into_iter()
            .find_map(|(group, field)| field.map(|f| (group, f)))
    }

    /// `(group, field, value)` of the first unit-range field outside `[0, 1]`.
    pub fn out_of_range_field(&self) -> Option<(&'static str, &'static str, f32)> {
        let groups = [
            ("celestial", self.celestial.and_then(|p| p.out_of_range_field())),
            ("cloud", self.cloud.and_then(|p| p.out_of_range_field())),
            ("rain", self.rain.and_then(|p| p.out_of_range_field())),
            ("snow", self.snow.and_then(|p| p.out_of_range_field())),
            (
                "interactions",
                self.interactions.and_then(|p| p.out_of_range_field()),
            ),
        ];
        groups
            .into_iter()
            .find_map(|(group, found)| found.map(|(field, value)| (group, field, value)))
    }
}

/// Canvas props with `fragment` merged over them.
pub fn apply_fragment(props: &CanvasProps, fragment: &OverrideFragment) -> CanvasProps {
    let merged = merge_overrides(&OverrideFragment::from_props(props), fragment);
    let mut tuned = *props;
    merged.apply_to(&mut tuned);
    tuned
}
