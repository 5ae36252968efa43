// Decibel/linear conversion shared across the compression core
//
// Conventions follow the Web Audio gain-unit definitions:
// https://www.w3.org/TR/webaudio/#linear-to-decibel
// https://www.w3.org/TR/webaudio/#decibels-to-linear-gain-unit

/// Sentinel returned by `linear_to_db` for a zero input. Stands in for
/// negative infinity so downstream arithmetic stays finite.
pub const ZERO_DB: f32 = -1000.0;

/// Convert a decibel value to linear gain. Total over all finite inputs and
/// monotonic increasing.
pub fn db_to_linear(decibel: f32) -> f32 {
    10.0_f32.powf(decibel / 20.0)
}

/// Convert linear gain to decibels. Zero returns the `ZERO_DB` sentinel.
/// Negative inputs are not defended against; callers pass magnitudes.
pub fn linear_to_db(linear: f32) -> f32 {
    if linear == 0.0 {
        return ZERO_DB;
    }

    20.0 * linear.log10()
}

/// dBFS is decibels relative to full scale; 0 dBFS is the maximum possible
/// level and negative values represent levels below the maximum.
///
/// This is useful for labeling waveforms: values of 1.0 and -1.0 correspond
/// to 0 dBFS, while 0.0 corresponds to -Infinity dBFS.
pub fn linear_to_dbfs(linear: f32) -> f32 {
    // dBFS is based on absolute value.
    let db = linear_to_db(linear.abs());

    // Special-case the zero sentinel; display wants a real -Infinity here.
    if db == ZERO_DB {
        return f32::NEG_INFINITY;
    }

    db
}
