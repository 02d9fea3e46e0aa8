//! Tests for post-processing derivation (bloom, exposure, god rays).

#[cfg(test)]
mod tests {
    use crate::condition::WeatherCondition;
    use crate::mapper::post::*;
    use crate::mapper::types::{CloudConfig, LightningConfig};

    fn cloud_with_coverage(coverage: f32) -> CloudConfig {
        CloudConfig {
            coverage,
            speed: 0.3,
            darkness: 0.2,
            turbulence: 0.2,
        }
    }

    #[test]
    fn test_smoothstep_edges_and_midpoint() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((smoothstep(0.2, 0.4, 0.3) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_bloom_boost_table() {
        assert_eq!(condition_bloom_boost(WeatherCondition::Fog), 0.18);
        assert_eq!(condition_bloom_boost(WeatherCondition::Thunderstorm), 0.12);
        assert_eq!(condition_bloom_boost(WeatherCondition::HeavyRain), 0.10);
        assert_eq!(condition_bloom_boost(WeatherCondition::Overcast), 0.08);
        assert_eq!(condition_bloom_boost(WeatherCondition::Cloudy), 0.06);
        assert_eq!(condition_bloom_boost(WeatherCondition::PartlyCloudy), 0.06);
        assert_eq!(condition_bloom_boost(WeatherCondition::Clear), 0.04);
        assert_eq!(condition_bloom_boost(WeatherCondition::Snow), 0.04);
    }

    #[test]
    fn test_bloom_from_haze() {
        let post = compute_post_process(WeatherCondition::Fog, 0.5, 0.5, None, None);
        // 0.04 + 0.18 + 0.5 * 0.22
        assert!((post.bloom_intensity - 0.33).abs() < 1e-5);
        assert!((post.bloom_radius - 1.7).abs() < 1e-5);
    }

    #[test]
    fn test_bloom_clamped() {
        let post = compute_post_process(WeatherCondition::Fog, 10.0, 0.5, None, None);
        assert_eq!(post.bloom_intensity, 1.0);
    }

    #[test]
    fn test_exposure_follows_lightning_enabled() {
        let enabled = LightningConfig {
            enabled: true,
            auto_trigger: true,
            interval_min: 3.0,
            interval_max: 8.0,
        };
        let disabled = LightningConfig {
            enabled: false,
            ..enabled
        };
        let storm = WeatherCondition::Thunderstorm;
        assert_eq!(
            compute_post_process(storm, 0.0, 0.0, None, Some(&enabled)).exposure_intensity,
            0.85
        );
        assert_eq!(
            compute_post_process(storm, 0.0, 0.0, None, Some(&disabled)).exposure_intensity,
            0.0
        );
        assert_eq!(
            compute_post_process(storm, 0.0, 0.0, None, None).exposure_intensity,
            0.0
        );
    }

    #[test]
    fn test_god_rays_need_cloud_layer() {
        assert_eq!(god_ray_intensity(None, 0.3, 0.5), 0.0);
    }

    #[test]
    fn test_god_rays_low_sun_broken_cloud() {
        let rays = god_ray_intensity(Some(&cloud_with_coverage(0.6)), 0.3, 0.2);
        assert!(rays > 0.05, "expected visible rays, got {}", rays);
        assert!(rays <= 0.6);
    }

    #[test]
    fn test_god_rays_absent_at_night_noon_and_clear_sky() {
        let broken = cloud_with_coverage(0.6);
        assert_eq!(god_ray_intensity(Some(&broken), -0.5, 0.2), 0.0);
        assert_eq!(god_ray_intensity(Some(&broken), 1.0, 0.2), 0.0);
        assert_eq!(god_ray_intensity(Some(&cloud_with_coverage(0.1)), 0.3, 0.2), 0.0);
    }

    #[test]
    fn test_god_rays_absent_under_full_overcast() {
        assert_eq!(god_ray_intensity(Some(&cloud_with_coverage(1.0)), 0.3, 0.2), 0.0);
    }

    #[test]
    fn test_god_rays_grow_with_haze() {
        let cloud = cloud_with_coverage(0.7);
        let thin = god_ray_intensity(Some(&cloud), 0.25, 0.0);
        let thick = god_ray_intensity(Some(&cloud), 0.25, 1.0);
        assert!(thick > thin);
    }
}
