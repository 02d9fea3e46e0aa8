//! Weather observation model.
//!
//! Pure day-cycle, brightness, and preset tables plus the mapper that turns
//! a `WeatherObservation` into an `EffectLayerConfig`. The only stateful
//! piece is the light/dark theme tracker, which lives in a Bevy resource and
//! is driven by `WeatherModelPlugin`.

use bevy::prelude::*;

pub mod brightness;
pub mod condition;
pub mod mapper;
pub mod presets;
pub mod theme;
pub mod time_model;

pub use brightness::{
    condition_brightness_multiplier, scene_brightness, scene_brightness_from_fraction,
    solar_light,
};
pub use condition::{PrecipitationLevel, WeatherCondition, WeatherObservation};
pub use mapper::{map_weather_to_effects, EffectLayerConfig};
pub use presets::{celestial_preset, condition_preset};
pub use theme::{select_theme, Theme, ThemeChangedEvent, ThemeTracker, WeatherTheme};
pub use time_model::{
    is_night, moon_phase, parse_timestamp, sun_altitude, sun_altitude_from_fraction, time_of_day,
};

/// Registers the observation resource and keeps `WeatherTheme` in sync with it.
pub struct WeatherModelPlugin;

impl Plugin for WeatherModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeatherObservation>()
            .init_resource::<WeatherTheme>()
            .add_event::<ThemeChangedEvent>()
            .add_systems(Update, theme::update_weather_theme);
    }
}
