use compressor_lab::audio::*;

fn reference_settings() -> CompressorSettings {
    CompressorSettings::default() // threshold -20, ratio 4, knee 0
}

#[cfg(test)]
mod gain_staging_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_range_gain_matches_curve_at_full_scale() {
        let settings = reference_settings();
        assert_relative_eq!(
            full_range_gain_linear(&settings),
            compress_curve_linear(1.0, &settings),
            max_relative = 1e-7
        );
        assert_relative_eq!(full_range_gain_db(&settings), -15.0, max_relative = 1e-4);
    }

    #[test]
    fn test_makeup_gain_reference_values() {
        // Full range gain -15 dB; makeup = (1/g)^0.6, i.e. +9 dB, ~2.818 linear.
        let settings = reference_settings();
        assert_relative_eq!(makeup_gain_linear(&settings), 2.8184, max_relative = 1e-3);
        assert_relative_eq!(makeup_gain_db(&settings), 9.0, max_relative = 1e-3);
    }

    #[test]
    fn test_makeup_gain_db_is_minus_point_six_of_full_range() {
        for settings in [
            reference_settings(),
            CompressorSettings {
                threshold: -40.0,
                ratio: 10.0,
                ..Default::default()
            },
            CompressorSettings {
                threshold: -6.0,
                ratio: 2.0,
                ..Default::default()
            },
        ] {
            assert_relative_eq!(
                makeup_gain_db(&settings),
                -0.6 * full_range_gain_db(&settings),
                max_relative = 1e-3
            );
        }
    }

    #[test]
    fn test_unity_ratio_needs_no_makeup_gain() {
        let settings = CompressorSettings {
            ratio: 1.0,
            ..Default::default()
        };
        assert_relative_eq!(full_range_gain_linear(&settings), 1.0, max_relative = 1e-5);
        assert_relative_eq!(makeup_gain_linear(&settings), 1.0, max_relative = 1e-5);
    }

    #[test]
    fn test_heavier_compression_needs_more_makeup_gain() {
        let gentle = CompressorSettings {
            ratio: 2.0,
            ..Default::default()
        };
        let heavy = CompressorSettings {
            ratio: 12.0,
            ..Default::default()
        };
        assert!(makeup_gain_linear(&heavy) > makeup_gain_linear(&gentle));
        assert!(full_range_gain_linear(&heavy) < full_range_gain_linear(&gentle));
    }
}
