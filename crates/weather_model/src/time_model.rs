//! Day-cycle and lunar helpers.
//!
//! All functions are pure. Timestamps are interpreted in UTC. The
//! timestamp-based sun altitude is computed by reducing the instant to a
//! day fraction and calling `sun_altitude_from_fraction`, so both entry
//! points agree for every instant.

use bevy::prelude::*;
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};

// =============================================================================
// Constants
// =============================================================================

/// Day fraction used when no timestamp is available (noon).
pub const DEFAULT_TIME_OF_DAY: f32 = 0.5;

/// Moon phase used when no timestamp is available.
pub const DEFAULT_MOON_PHASE: f32 = 0.5;

/// Sun altitude used when no timestamp is available.
pub const DEFAULT_SUN_ALTITUDE: f32 = 0.5;

/// Mean length of a lunar cycle in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Reference new moon (2000-01-06T00:00Z) as whole days since the Unix epoch.
const REFERENCE_NEW_MOON_EPOCH_DAY: i64 = 10_962;

const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// Parsing
// =============================================================================

/// Parse an ISO-8601 instant.
///
/// Accepts RFC 3339 (`2025-06-21T12:00:00Z`, offsets) and offset-less
/// date-times, which are read as UTC. Returns `None` and logs a warning for
/// anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    warn!(
        "weather timestamp '{}' is not ISO-8601, falling back to defaults",
        raw
    );
    None
}

// =============================================================================
// Time of day
// =============================================================================

/// Fraction of the UTC day elapsed, in `[0, 1)`. Seconds are ignored.
pub fn time_of_day(timestamp: Option<&DateTime<Utc>>) -> f32 {
    match timestamp {
        Some(ts) => (ts.hour() as f32 + ts.minute() as f32 / 60.0) / 24.0,
        None => DEFAULT_TIME_OF_DAY,
    }
}

/// Lunar phase in `[0, 1)`: 0 = new moon, 0.5 = full moon.
///
/// The date is truncated to UTC midnight so the phase is constant within a day.
pub fn moon_phase(timestamp: Option<&DateTime<Utc>>) -> f32 {
    let Some(ts) = timestamp else {
        return DEFAULT_MOON_PHASE;
    };
    let epoch_day = ts.timestamp().div_euclid(SECONDS_PER_DAY);
    let days = (epoch_day - REFERENCE_NEW_MOON_EPOCH_DAY) as f64;
    let phase = days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    // rem_euclid can round up to the modulus for some negative inputs
    if phase >= 1.0 {
        0.0
    } else {
        phase as f32
    }
}

// =============================================================================
// Sun altitude
// =============================================================================

/// Piecewise-linear sun altitude for a day fraction, in `[-1, 1]`.
///
/// -1 at midnight, 0 at 06:00 and 18:00, 1 at noon. The fraction is wrapped
/// into `[0, 1)` first.
pub fn sun_altitude_from_fraction(fraction: f32) -> f32 {
    let hour = fraction.rem_euclid(1.0) * 24.0;
    let altitude = if hour < 6.0 {
        -1.0 + hour / 6.0
    } else if hour < 12.0 {
        (hour - 6.0) / 6.0
    } else if hour < 18.0 {
        1.0 - (hour - 12.0) / 6.0
    } else {
        -(hour - 18.0) / 6.0
    };
    altitude.clamp(-1.0, 1.0)
}

/// Sun altitude for an instant. Without a timestamp this is
/// `DEFAULT_SUN_ALTITUDE` rather than the noon peak.
pub fn sun_altitude(timestamp: Option<&DateTime<Utc>>) -> f32 {
    match timestamp {
        Some(_) => sun_altitude_from_fraction(time_of_day(timestamp)),
        None => DEFAULT_SUN_ALTITUDE,
    }
}

/// The sun is below the horizon.
pub fn is_night(altitude: f32) -> bool {
    altitude < 0.0
}

// =============================================================================
// Tests
// =============================================================================
