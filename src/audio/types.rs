use serde::{Deserialize, Serialize};

/// Errors surfaced at the boundary of the compression core, before any of
/// the pure math runs
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Invalid compressor configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Dynamics compressor settings
///
/// An immutable value passed explicitly into every call; the core never
/// reads ambient configuration. Attack and release only matter to the
/// time-domain node, not to the pure transfer curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressorSettings {
    pub threshold: f32, // Threshold in dB (-100 to 0)
    pub ratio: f32,     // Compression ratio (1.0 to 20.0)
    pub knee: f32,      // Knee width in dB above the threshold
    pub attack: f32,    // Attack time in seconds
    pub release: f32,   // Release time in seconds
}

impl Default for CompressorSettings {
    fn default() -> Self {
        Self {
            threshold: -20.0,
            ratio: 4.0,
            knee: 0.0,
            attack: 0.03,
            release: 0.25,
        }
    }
}

impl CompressorSettings {
    /// Reject configurations the curve math cannot handle. Bad values fail
    /// here rather than getting clamped into something plausible.
    pub fn validate(&self) -> Result<(), AudioError> {
        if !self.threshold.is_finite() {
            return Err(AudioError::InvalidConfiguration(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        if !self.ratio.is_finite() {
            return Err(AudioError::InvalidConfiguration(format!(
                "ratio must be finite, got {}",
                self.ratio
            )));
        }
        if self.ratio < 1.0 {
            return Err(AudioError::InvalidConfiguration(format!(
                "ratio must be at least 1.0, got {}",
                self.ratio
            )));
        }
        if !self.knee.is_finite() {
            return Err(AudioError::InvalidConfiguration(format!(
                "knee must be finite, got {}",
                self.knee
            )));
        }
        if !(self.attack >= 0.0) {
            return Err(AudioError::InvalidConfiguration(format!(
                "attack must be zero or positive seconds, got {}",
                self.attack
            )));
        }
        if !(self.release >= 0.0) {
            return Err(AudioError::InvalidConfiguration(format!(
                "release must be zero or positive seconds, got {}",
                self.release
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(CompressorSettings::default().validate().is_ok());
    }

    #[test]
    fn test_ratio_below_one_is_rejected() {
        let settings = CompressorSettings {
            ratio: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(AudioError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_non_finite_fields_are_rejected() {
        for settings in [
            CompressorSettings {
                threshold: f32::NAN,
                ..Default::default()
            },
            CompressorSettings {
                ratio: f32::INFINITY,
                ..Default::default()
            },
            CompressorSettings {
                knee: f32::NEG_INFINITY,
                ..Default::default()
            },
        ] {
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn test_negative_times_are_rejected() {
        let settings = CompressorSettings {
            attack: -0.01,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = CompressorSettings {
            release: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = CompressorSettings {
            threshold: -24.0,
            ratio: 8.0,
            knee: 6.0,
            attack: 0.01,
            release: 0.5,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: CompressorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
