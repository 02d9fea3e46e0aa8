//! The four canonical times of day designers tune against.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Checkpoint {
    Dawn,
    Noon,
    Dusk,
    Midnight,
}

impl Checkpoint {
    /// Resolution order. On an exact tie the earlier entry wins.
    pub const ORDER: [Checkpoint; 4] = [
        Checkpoint::Dawn,
        Checkpoint::Noon,
        Checkpoint::Dusk,
        Checkpoint::Midnight,
    ];

    /// Day fraction of the checkpoint.
    pub fn time_of_day(self) -> f32 {
        match self {
            Checkpoint::Midnight => 0.0,
            Checkpoint::Dawn => 0.25,
            Checkpoint::Noon => 0.5,
            Checkpoint::Dusk => 0.75,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Checkpoint::Dawn => "dawn",
            Checkpoint::Noon => "noon",
            Checkpoint::Dusk => "dusk",
            Checkpoint::Midnight => "midnight",
        }
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance between two day fractions on the 24h circle, in `[0, 0.5]`.
pub fn circular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    if d > 0.5 {
        1.0 - d
    } else {
        d
    }
}

/// Checkpoint closest to `time_of_day`, wrapping around midnight.
pub fn nearest_checkpoint(time_of_day: f32) -> Checkpoint {
    let t = time_of_day.rem_euclid(1.0);
    let mut best = Checkpoint::ORDER[0];
    let mut best_distance = circular_distance(t, best.time_of_day());
    for checkpoint in &Checkpoint::ORDER[1..] {
        let d = circular_distance(t, checkpoint.time_of_day());
        if d < best_distance {
            best = *checkpoint;
            best_distance = d;
        }
    }
    best
}
