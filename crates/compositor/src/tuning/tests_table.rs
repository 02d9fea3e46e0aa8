//! Tests for the tuned preset table.

#[cfg(test)]
mod tests {
    use weather_model::WeatherCondition;

    use crate::tuning::checkpoint::Checkpoint;
    use crate::tuning::error::TuningError;
    use crate::tuning::patch::{CloudPatch, OverrideFragment};
    use crate::tuning::table::*;

    #[test]
    fn test_builtin_table_is_finite_and_non_empty() {
        let presets = TunedPresets::default();
        assert!(presets.conditions().count() > 0);
        for condition in presets.conditions() {
            let overrides = presets.overrides_for(condition).expect("listed");
            assert!(!overrides.is_empty(), "{:?} has an empty entry", condition);
            for checkpoint in Checkpoint::ORDER {
                if let Some(fragment) = overrides.get(checkpoint) {
                    assert_eq!(fragment.non_finite_field(), None);
                    assert_eq!(fragment.out_of_range_field(), None);
                }
            }
        }
    }

    #[test]
    fn test_untuned_condition_has_no_fragment() {
        let presets = TunedPresets::default();
        assert!(presets.overrides_for(WeatherCondition::Hail).is_none());
        for checkpoint in Checkpoint::ORDER {
            assert!(presets
                .fragment_for(WeatherCondition::Hail, checkpoint)
                .is_none());
        }
    }

    #[test]
    fn test_fragment_for_missing_checkpoint() {
        let presets = TunedPresets::default();
        assert!(presets
            .fragment_for(WeatherCondition::Clear, Checkpoint::Noon)
            .is_none());
        assert!(presets
            .fragment_for(WeatherCondition::Clear, Checkpoint::Dawn)
            .is_some());
    }

    #[test]
    fn test_empty_entry_is_skipped() {
        let presets = TunedPresets::empty().with_condition(
            WeatherCondition::Rain,
            CheckpointOverrides {
                noon: Some(OverrideFragment::default()),
                ..Default::default()
            },
        );
        assert!(presets.overrides_for(WeatherCondition::Rain).is_some());
        assert!(presets
            .fragment_for(WeatherCondition::Rain, Checkpoint::Noon)
            .is_none());
    }

    #[test]
    fn test_from_json_str_parses_keyword_keys() {
        let presets = TunedPresets::from_json_str(
            r#"{
                "heavy-rain": {
                    "dusk": { "cloud": { "darkness": 0.7 } }
                }
            }"#,
        )
        .expect("table parses");
        let fragment = presets
            .fragment_for(WeatherCondition::HeavyRain, Checkpoint::Dusk)
            .expect("dusk fragment");
        assert_eq!(
            fragment.cloud,
            Some(CloudPatch {
                darkness: Some(0.7),
                ..Default::default()
            })
        );
        assert_eq!(presets.conditions().count(), 1);
    }

    #[test]
    fn test_from_json_str_rejects_unknown_condition() {
        let err = TunedPresets::from_json_str(r#"{ "monsoon": {} }"#).unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_from_json_str_rejects_unknown_checkpoint() {
        let err = TunedPresets::from_json_str(r#"{ "clear": { "teatime": {} } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_from_json_str_rejects_overflowing_numbers() {
        // Fits an f64 but overflows f32 to infinity
        let err = TunedPresets::from_json_str(
            r#"{ "snow": { "midnight": { "snow": { "intensity": 1e39 } } } }"#,
        )
        .unwrap_err();
        match err {
            TuningError::NonFinite {
                condition,
                checkpoint,
                group,
                field,
            } => {
                assert_eq!(condition, WeatherCondition::Snow);
                assert_eq!(checkpoint, Checkpoint::Midnight);
                assert_eq!(group, "snow");
                assert_eq!(field, "intensity");
            }
            other => panic!("expected NonFinite, got {other}"),
        }
    }

    #[test]
    fn test_from_json_str_rejects_coverage_above_one() {
        let err = TunedPresets::from_json_str(
            r#"{ "fog": { "dawn": { "cloud": { "coverage": 3.0 } } } }"#,
        )
        .unwrap_err();
        match err {
            TuningError::OutOfRange {
                condition,
                checkpoint,
                group,
                field,
                value,
            } => {
                assert_eq!(condition, WeatherCondition::Fog);
                assert_eq!(checkpoint, Checkpoint::Dawn);
                assert_eq!(group, "cloud");
                assert_eq!(field, "coverage");
                assert_eq!(value, 3.0);
            }
            other => panic!("expected OutOfRange, got {other}"),
        }
    }

    #[test]
    fn test_from_json_str_rejects_negative_glass_intensity() {
        let err = TunedPresets::from_json_str(
            r#"{ "rain": { "dusk": { "rain": { "glassIntensity": -1 } } } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TuningError::OutOfRange {
                group: "rain",
                field: "glass_intensity",
                ..
            }
        ));
    }

    #[test]
    fn test_from_json_str_accepts_unit_bounds_and_unbounded_fields() {
        let presets = TunedPresets::from_json_str(
            r#"{
                "rain": {
                    "dusk": {
                        "rain": {
                            "glassIntensity": 0.0,
                            "fallingIntensity": 1.0,
                            "fallingAngle": -0.4
                        },
                        "cloud": { "speed": 2.5 }
                    }
                }
            }"#,
        )
        .expect("bounds and free fields load");
        assert!(presets
            .fragment_for(WeatherCondition::Rain, Checkpoint::Dusk)
            .is_some());
    }

    #[test]
    fn test_builtin_table_roundtrips_through_json() {
        let presets = TunedPresets::default();
        let json = serde_json::to_string(&presets).expect("serializes");
        assert_eq!(TunedPresets::from_json_str(&json).expect("parses"), presets);
    }
}
