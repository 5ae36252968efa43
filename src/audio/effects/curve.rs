// Compression transfer curve
//
// Maps an input level to an output level according to the threshold/knee/
// ratio law. Stateless; the time-domain node and the plotted curves both go
// through these functions so they cannot drift apart.

use crate::audio::db;
use crate::audio::types::CompressorSettings;

/// dB level at which the knee region ends and the full ratio applies.
pub fn knee_end_db(settings: &CompressorSettings) -> f32 {
    settings.threshold + settings.knee
}

/// Apply the compression curve to a linear value (e.g. the raw number
/// between -1 and 1 from a decoded sample buffer).
///
/// https://www.w3.org/TR/webaudio/#compression-curve
pub fn compress_curve_linear(linear_value: f32, settings: &CompressorSettings) -> f32 {
    let linear_threshold = db::db_to_linear(settings.threshold);
    let linear_knee_end = db::db_to_linear(knee_end_db(settings));

    if linear_value < linear_threshold {
        linear_value
    } else if linear_value < linear_knee_end {
        // The curve inside the knee is user-agent dependent, and knee
        // defaults to 0 which leaves this region empty in normal use. Pass
        // the value through rather than emulating any particular knee shape.
        linear_value
    } else {
        // The platform spec only requires linearity above the knee, not
        // continuity, but mainstream engines keep the curve continuous
        // through the threshold (see Chromium's dynamics_compressor.cc), so
        // apply the ratio after the knee-end limit.
        //
        // The ratio applies to the *decibel* value, not the linear value,
        // hence the conversion back and forth.
        let input_db = db::linear_to_db(linear_value);
        let output_db =
            knee_end_db(settings) + (1.0 / settings.ratio) * (input_db - knee_end_db(settings));
        db::db_to_linear(output_db)
    }
}

/// Apply the compression curve to a dB value (result in dB).
pub fn compress_curve_db(db_value: f32, settings: &CompressorSettings) -> f32 {
    db::linear_to_db(compress_curve_linear(db::db_to_linear(db_value), settings))
}

/// Instantaneous gain the curve applies at a given level: compressed
/// magnitude over raw magnitude. Unity below 1e-4 to keep the division well
/// away from zero.
pub fn attenuation_linear(linear_value: f32, settings: &CompressorSettings) -> f32 {
    let magnitude = linear_value.abs();
    if magnitude < 1e-4 {
        1.0
    } else {
        compress_curve_linear(magnitude, settings) / magnitude
    }
}
