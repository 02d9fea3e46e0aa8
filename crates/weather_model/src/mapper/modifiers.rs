//! Runtime modifiers: wind, precipitation, and visibility mapped to unit
//! intensities.

use crate::condition::PrecipitationLevel;

use super::constants::*;

/// Wind speed (mph) to intensity in `[0, 1]`.
///
/// Linear `0..=10 -> 0..=0.3`, linear `10..=25 -> 0.3..=0.7`, then
/// `0.7 + min((mph - 25) / 25, 0.3)`. Negative speeds read as calm.
pub fn map_wind_speed(mph: f32) -> f32 {
    let mph = mph.max(0.0);
    if mph <= WIND_CALM_MPH {
        mph / WIND_CALM_MPH * WIND_CALM_INTENSITY
    } else if mph <= WIND_BREEZY_MPH {
        let t = (mph - WIND_CALM_MPH) / (WIND_BREEZY_MPH - WIND_CALM_MPH);
        WIND_CALM_INTENSITY + t * (WIND_BREEZY_INTENSITY - WIND_CALM_INTENSITY)
    } else {
        WIND_BREEZY_INTENSITY + ((mph - WIND_BREEZY_MPH) / WIND_BREEZY_MPH).min(WIND_GALE_HEADROOM)
    }
}

/// Precipitation level to intensity.
pub fn map_precipitation(level: PrecipitationLevel) -> f32 {
    match level {
        PrecipitationLevel::None => 0.0,
        PrecipitationLevel::Light => 0.3,
        PrecipitationLevel::Moderate => 0.6,
        PrecipitationLevel::Heavy => 1.0,
    }
}

/// Visibility (miles) to haze in `[0, 1]`.
///
/// No haze from 10 miles up, linear to 0.3 at 5 miles, then linear to 1.0 at
/// zero visibility.
pub fn map_visibility(miles: f32) -> f32 {
    let miles = miles.max(0.0);
    if miles >= VISIBILITY_CLEAR_MILES {
        0.0
    } else if miles >= VISIBILITY_HAZY_MILES {
        (VISIBILITY_CLEAR_MILES - miles) / (VISIBILITY_CLEAR_MILES - VISIBILITY_HAZY_MILES)
            * HAZY_HAZE
    } else {
        HAZY_HAZE + (VISIBILITY_HAZY_MILES - miles) / VISIBILITY_HAZY_MILES * (1.0 - HAZY_HAZE)
    }
}
