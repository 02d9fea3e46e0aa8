//! Tests for wind, precipitation, and visibility mapping.

#[cfg(test)]
mod tests {
    use crate::condition::PrecipitationLevel;
    use crate::mapper::modifiers::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_wind_band_boundaries() {
        assert!(close(map_wind_speed(0.0), 0.0));
        assert!(close(map_wind_speed(10.0), 0.3));
        assert!(close(map_wind_speed(25.0), 0.7));
        assert!(close(map_wind_speed(50.0), 1.0));
    }

    #[test]
    fn test_wind_band_midpoints() {
        assert!(close(map_wind_speed(5.0), 0.15));
        assert!(close(map_wind_speed(17.5), 0.5));
        assert!(close(map_wind_speed(30.0), 0.9));
    }

    #[test]
    fn test_wind_saturates() {
        assert!(close(map_wind_speed(200.0), 1.0));
    }

    #[test]
    fn test_wind_negative_reads_calm() {
        assert_eq!(map_wind_speed(-12.0), 0.0);
    }

    #[test]
    fn test_wind_monotonic() {
        let mut prev = map_wind_speed(0.0);
        for mph in 1..=80 {
            let current = map_wind_speed(mph as f32);
            assert!(current >= prev, "{} mph: {} < {}", mph, current, prev);
            prev = current;
        }
    }

    #[test]
    fn test_precipitation_levels() {
        assert_eq!(map_precipitation(PrecipitationLevel::None), 0.0);
        assert_eq!(map_precipitation(PrecipitationLevel::Light), 0.3);
        assert_eq!(map_precipitation(PrecipitationLevel::Moderate), 0.6);
        assert_eq!(map_precipitation(PrecipitationLevel::Heavy), 1.0);
    }

    #[test]
    fn test_visibility_scenarios() {
        assert_eq!(map_visibility(10.0), 0.0);
        assert!(close(map_visibility(7.5), 0.15));
        assert!(close(map_visibility(5.0), 0.3));
        assert!(close(map_visibility(0.0), 1.0));
    }

    #[test]
    fn test_visibility_clamps_out_of_range() {
        assert_eq!(map_visibility(42.0), 0.0);
        assert!(close(map_visibility(-3.0), 1.0));
    }

    #[test]
    fn test_visibility_monotonic_decreasing() {
        let mut prev = map_visibility(0.0);
        for tenth in 1..=120 {
            let current = map_visibility(tenth as f32 / 10.0);
            assert!(current <= prev + 1e-6);
            prev = current;
        }
    }
}
