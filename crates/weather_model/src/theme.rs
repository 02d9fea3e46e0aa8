//! Light/dark UI theme selection with hysteresis.
//!
//! Brightness below `DARK_THRESHOLD` commits the dark theme, above
//! `LIGHT_THRESHOLD` commits light. Inside the band the previously committed
//! theme is kept, so a brightness hovering around a single threshold never
//! makes the theme flicker.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::brightness::scene_brightness;
use crate::condition::WeatherObservation;

pub const DARK_THRESHOLD: f32 = 0.35;
pub const LIGHT_THRESHOLD: f32 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Pick a theme for `brightness`, given the last committed theme (if any).
pub fn select_theme(brightness: f32, previous: Option<Theme>) -> Theme {
    if brightness < DARK_THRESHOLD {
        Theme::Dark
    } else if brightness > LIGHT_THRESHOLD {
        Theme::Light
    } else {
        previous.unwrap_or_default()
    }
}

/// Feeds the last committed theme back into `select_theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeTracker {
    committed: Option<Theme>,
}

impl ThemeTracker {
    pub fn starting_from(theme: Theme) -> Self {
        Self {
            committed: Some(theme),
        }
    }

    /// Committed theme, `Dark` until the first observation.
    pub fn current(&self) -> Theme {
        self.committed.unwrap_or_default()
    }

    /// Evaluate a new brightness. Returns the new theme only when it differs
    /// from the committed one.
    pub fn observe(&mut self, brightness: f32) -> Option<Theme> {
        let next = select_theme(brightness, self.committed);
        if self.committed == Some(next) {
            return None;
        }
        self.committed = Some(next);
        Some(next)
    }
}

// =============================================================================
// ECS
// =============================================================================

/// Theme currently committed for the weather surface.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WeatherTheme {
    pub tracker: ThemeTracker,
    /// Last computed scene brightness.
    pub brightness: f32,
}

impl WeatherTheme {
    pub fn theme(&self) -> Theme {
        self.tracker.current()
    }
}

/// Fired only when the committed theme actually changes.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ThemeChangedEvent {
    pub theme: Theme,
    pub brightness: f32,
}

/// Recompute brightness when the observation changes and commit the theme.
pub fn update_weather_theme(
    observation: Res<WeatherObservation>,
    mut theme: ResMut<WeatherTheme>,
    mut changed: EventWriter<ThemeChangedEvent>,
) {
    if !observation.is_changed() {
        return;
    }

    let brightness = scene_brightness(observation.instant().as_ref(), observation.condition);
    theme.brightness = brightness;

    if let Some(next) = theme.tracker.observe(brightness) {
        info!(
            "weather theme -> {:?} (brightness {:.3}, {})",
            next,
            brightness,
            observation.condition.keyword()
        );
        changed.send(ThemeChangedEvent {
            theme: next,
            brightness,
        });
    }
}
