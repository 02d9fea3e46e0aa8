//! Tuning constants for runtime modifiers and post-processing.

/// Wind speed (mph) where the gentle band ends.
pub(crate) const WIND_CALM_MPH: f32 = 10.0;
/// Wind speed (mph) where the breezy band ends.
pub(crate) const WIND_BREEZY_MPH: f32 = 25.0;
/// Wind intensity at `WIND_CALM_MPH`.
pub(crate) const WIND_CALM_INTENSITY: f32 = 0.3;
/// Wind intensity at `WIND_BREEZY_MPH`.
pub(crate) const WIND_BREEZY_INTENSITY: f32 = 0.7;
/// Extra intensity reachable past `WIND_BREEZY_MPH`.
pub(crate) const WIND_GALE_HEADROOM: f32 = 0.3;

/// Visibility (miles) at and above which there is no haze.
pub(crate) const VISIBILITY_CLEAR_MILES: f32 = 10.0;
/// Visibility (miles) below which haze climbs steeply.
pub(crate) const VISIBILITY_HAZY_MILES: f32 = 5.0;
/// Haze at `VISIBILITY_HAZY_MILES`.
pub(crate) const HAZY_HAZE: f32 = 0.3;

/// Cloud darkness contributes this much haze.
pub(crate) const CLOUD_DARKNESS_HAZE: f32 = 0.3;

/// Per unit wind intensity.
pub(crate) const WIND_CLOUD_SPEED_GAIN: f32 = 0.5;
pub(crate) const WIND_CLOUD_TURBULENCE_GAIN: f32 = 0.3;
/// Degrees of rain tilt at full wind intensity.
pub(crate) const WIND_RAIN_ANGLE_DEGREES: f32 = 10.0;
pub(crate) const WIND_SNOW_DRIFT_GAIN: f32 = 0.3;

pub(crate) const BLOOM_BASE: f32 = 0.04;
pub(crate) const BLOOM_HAZE_GAIN: f32 = 0.22;
pub(crate) const BLOOM_RADIUS_BASE: f32 = 1.1;
pub(crate) const BLOOM_RADIUS_HAZE_GAIN: f32 = 1.2;

/// Exposure flash strength when lightning is enabled.
pub(crate) const LIGHTNING_EXPOSURE: f32 = 0.85;

pub(crate) const GOD_RAY_MAX: f32 = 0.6;
pub(crate) const GOD_RAY_PARTICLE_BASE: f32 = 0.35;
pub(crate) const GOD_RAY_PARTICLE_HAZE_GAIN: f32 = 0.65;
