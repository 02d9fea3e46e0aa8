// ---------------------------------------------------------------------------
// TuningError: failures loading a designer-exported tuned preset table
// ---------------------------------------------------------------------------

use std::fmt;

use weather_model::WeatherCondition;

use super::checkpoint::Checkpoint;

#[derive(Debug)]
pub enum TuningError {
    /// The table is not valid JSON or does not match the fragment schema.
    Parse(serde_json::Error),
    /// A patch field holds NaN or an infinity.
    NonFinite {
        condition: WeatherCondition,
        checkpoint: Checkpoint,
        group: &'static str,
        field: &'static str,
    },
    /// A unit-range patch field lies outside `[0, 1]`.
    OutOfRange {
        condition: WeatherCondition,
        checkpoint: Checkpoint,
        group: &'static str,
        field: &'static str,
        value: f32,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "Tuned preset table parse error: {e}"),
            TuningError::NonFinite {
                condition,
                checkpoint,
                group,
                field,
            } => write!(
                f,
                "Non-finite override {group}.{field} for {} at {checkpoint}",
                condition.keyword()
            ),
            TuningError::OutOfRange {
                condition,
                checkpoint,
                group,
                field,
                value,
            } => write!(
                f,
                "Override {group}.{field} = {value} for {} at {checkpoint} is outside [0, 1]",
                condition.keyword()
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}
