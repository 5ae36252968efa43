// Gain staging derived from the compression curve
//
// https://webaudio.github.io/web-audio-api/#computing-the-makeup-gain

use super::curve::compress_curve_linear;
use crate::audio::db;
use crate::audio::types::CompressorSettings;

/// Gain the curve applies to a full-scale (0 dB) input, i.e. the worst-case
/// attenuation. Linear units.
pub fn full_range_gain_linear(settings: &CompressorSettings) -> f32 {
    compress_curve_linear(1.0, settings)
}

/// See `full_range_gain_linear`; dB units.
pub fn full_range_gain_db(settings: &CompressorSettings) -> f32 {
    db::linear_to_db(full_range_gain_linear(settings))
}

/// Default gain applied to the compressor output to make up for the level
/// lost to compression.
///
/// The platform spec says "inverse of full range gain", which we read as the
/// reciprocal to match Chrome's implementation, then raised to the 0.6
/// power ("Return the result of taking the 0.6 power of full range makeup
/// gain"). Full makeup gain over-corrects perceptually; the 0.6 exponent is
/// the engine's exact damping factor, not an approximation.
pub fn makeup_gain_linear(settings: &CompressorSettings) -> f32 {
    let full_range_gain = full_range_gain_linear(settings);
    let full_range_makeup_gain = 1.0 / full_range_gain;

    full_range_makeup_gain.powf(0.6)
}

/// See `makeup_gain_linear`; dB units.
pub fn makeup_gain_db(settings: &CompressorSettings) -> f32 {
    db::linear_to_db(makeup_gain_linear(settings))
}
