//! Tests for layer configuration to canvas props translation.

#[cfg(test)]
mod tests {
    use weather_model::{map_weather_to_effects, WeatherCondition, WeatherObservation};

    use crate::canvas::reshape::*;
    use crate::canvas::types::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn mapped(condition: WeatherCondition) -> weather_model::EffectLayerConfig {
        map_weather_to_effects(&WeatherObservation::new(condition))
    }

    #[test]
    fn test_rain_translation_thunderstorm() {
        let config = mapped(WeatherCondition::Thunderstorm);
        let rain = rain_props(config.rain.as_ref().expect("rain"));
        assert!(close(rain.glass_intensity, 0.7));
        assert!(close(rain.falling_intensity, 1.0));
        // 15 degrees without wind
        assert!(close(rain.falling_angle, 0.3));
    }

    #[test]
    fn test_rain_translation_respects_pass_flags() {
        let drizzle = rain_props(&mapped(WeatherCondition::Drizzle).rain.expect("rain"));
        assert_eq!(drizzle.falling_intensity, 0.0);
        assert!(close(drizzle.glass_intensity, 0.25 * 0.7));
        assert!(close(drizzle.falling_angle, 0.1));

        let hail = rain_props(&mapped(WeatherCondition::Hail).rain.expect("rain"));
        assert_eq!(hail.falling_intensity, 0.0);
        assert!(hail.glass_intensity > 0.0);
    }

    #[test]
    fn test_lightning_interval_is_midpoint() {
        let config = mapped(WeatherCondition::Thunderstorm);
        let lightning = lightning_props(config.lightning.as_ref().expect("lightning"));
        assert!(lightning.auto_trigger);
        assert!(close(lightning.auto_interval, 5.5));
    }

    #[test]
    fn test_cloud_light_follows_solar_term() {
        let config = mapped(WeatherCondition::Cloudy);
        let cloud = config.cloud.expect("cloud");
        assert!(close(cloud_props(&cloud, 1.0).light_intensity, 1.0));
        assert!(close(cloud_props(&cloud, -1.0).light_intensity, 0.05));
        assert!(close(cloud_props(&cloud, 0.0).light_intensity, 0.15));
        assert_eq!(cloud_props(&cloud, 0.3).coverage, cloud.coverage);
    }

    #[test]
    fn test_celestial_fields_carried_over() {
        let config = mapped(WeatherCondition::Clear);
        let celestial = celestial_props(&config.celestial);
        assert_eq!(celestial.time_of_day, config.celestial.time_of_day);
        assert_eq!(celestial.sun_ray_count, config.celestial.appearance.sun_ray_count);
        assert_eq!(celestial.moon_glow_size, config.celestial.appearance.moon_glow_size);
    }

    #[test]
    fn test_missing_fragments_disable_layers() {
        let props = to_canvas_props(
            &mapped(WeatherCondition::Clear),
            LayerToggles::all(),
            1.0,
            None,
            1.0,
        );
        assert!(props.layers.celestial);
        assert!(props.layers.clouds);
        assert!(!props.layers.rain);
        assert!(!props.layers.lightning);
        assert!(!props.layers.snow);
        assert_eq!(props.rain, RainProps::default());
    }

    #[test]
    fn test_toggles_disable_present_layers() {
        let toggles = LayerToggles {
            rain: false,
            ..LayerToggles::all()
        };
        let props = to_canvas_props(
            &mapped(WeatherCondition::Thunderstorm),
            toggles,
            -1.0,
            None,
            2.0,
        );
        assert!(!props.layers.rain);
        assert!(props.layers.lightning);
        // Values are still carried for a renderer that fades layers out
        assert!(props.rain.falling_intensity > 0.0);
        assert_eq!(props.dpr, 2.0);
    }

    #[test]
    fn test_post_props_include_haze() {
        let config = map_weather_to_effects(
            &WeatherObservation::new(WeatherCondition::Fog).with_visibility(1.0),
        );
        let props = to_canvas_props(&config, LayerToggles::all(), 0.5, None, 1.0);
        assert_eq!(props.post.haze, config.atmosphere.haze);
        assert_eq!(props.post.bloom_intensity, config.post.bloom_intensity);
    }

    #[test]
    fn test_interactions_derived_from_config() {
        let storm = derive_interactions(&mapped(WeatherCondition::Thunderstorm));
        assert!(close(storm.rain_refraction_strength, 0.7));
        assert!(close(storm.lightning_scene_illumination, 0.85));

        let clear = derive_interactions(&mapped(WeatherCondition::Clear));
        assert_eq!(clear, InteractionProps::default());
    }

    #[test]
    fn test_canvas_props_serialize_camel_case() {
        let props = to_canvas_props(
            &mapped(WeatherCondition::Rain),
            LayerToggles::all(),
            0.5,
            Some(InteractionProps::default()),
            1.5,
        );
        let value = serde_json::to_value(props).expect("serializes");
        assert!(value["rain"]["glassIntensity"].is_number());
        assert!(value["cloud"]["lightIntensity"].is_number());
        assert!(value["interactions"]["rainRefractionStrength"].is_number());
        assert_eq!(value["layers"]["clouds"], true);
        assert_eq!(value["dpr"], 1.5);
    }

    #[test]
    fn test_canvas_props_omit_absent_interactions() {
        let props = to_canvas_props(
            &mapped(WeatherCondition::Rain),
            LayerToggles::all(),
            0.5,
            None,
            1.0,
        );
        let value = serde_json::to_value(props).expect("serializes");
        assert!(value.get("interactions").is_none());
    }
}
