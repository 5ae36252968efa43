use super::curve::attenuation_linear;
use super::gain::makeup_gain_linear;
use crate::audio::db;
use crate::audio::types::{AudioError, CompressorSettings};

/// Offline dynamics compressor node
///
/// Stands in for the platform dynamics-compressor node driven by the offline
/// render pipeline: a dB-domain envelope follower picks the level the
/// transfer curve sees, the curve decides the gain, and the node applies its
/// default makeup gain on the way out. Every gain decision goes through
/// `compress_curve_linear`/`makeup_gain_linear`, the same functions the
/// plotted curves use.
#[derive(Debug)]
pub struct DynamicsCompressor {
    settings: CompressorSettings,
    attack_coeff: f32,
    release_coeff: f32,
    makeup_gain: f32,
    envelope_db: f32,
    reduction_db: f32,
}

impl DynamicsCompressor {
    pub fn new(sample_rate: u32, settings: CompressorSettings) -> Result<Self, AudioError> {
        settings.validate()?;

        Ok(Self {
            settings,
            attack_coeff: time_constant_coeff(settings.attack, sample_rate),
            release_coeff: time_constant_coeff(settings.release, sample_rate),
            makeup_gain: makeup_gain_linear(&settings),
            envelope_db: db::ZERO_DB,
            reduction_db: 0.0,
        })
    }

    pub fn settings(&self) -> &CompressorSettings {
        &self.settings
    }

    /// Gain currently applied by the compression stage, in dB (0 or below).
    /// Excludes makeup gain, matching the platform node's reduction meter.
    pub fn reduction_db(&self) -> f32 {
        self.reduction_db
    }

    pub fn process(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            let level_db = db::linear_to_db(sample.abs());

            // One-pole envelope: fast toward louder levels, slow back down.
            let coeff = if level_db > self.envelope_db {
                self.attack_coeff
            } else {
                self.release_coeff
            };
            self.envelope_db = level_db + (self.envelope_db - level_db) * coeff;

            let gain = attenuation_linear(db::db_to_linear(self.envelope_db), &self.settings);
            self.reduction_db = db::linear_to_db(gain);

            *sample *= gain * self.makeup_gain;
        }
    }

    /// Reset envelope state between renders.
    pub fn reset(&mut self) {
        self.envelope_db = db::ZERO_DB;
        self.reduction_db = 0.0;
    }
}

// A zero time constant divides to -inf and the exp collapses to 0.0, which
// is the right coefficient for an instant attack/release.
fn time_constant_coeff(time_s: f32, sample_rate: u32) -> f32 {
    (-1.0 / (time_s * sample_rate as f32)).exp()
}
