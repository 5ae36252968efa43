// Grouped sample statistics
//
// Condenses a long sample buffer into a short ordered sequence of aggregate
// values so a full track can be plotted without drawing every sample. Pure
// derivations; recomputed whenever the source buffer or target count changes.

use serde::{Deserialize, Serialize};

use super::types::AudioError;

/// Aggregate applied to each window when condensing a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleAggregate {
    /// Peak magnitude of the window, ignoring sign
    Peak,
    /// Arithmetic mean of the raw signed values. Oscillating signals can
    /// average close to zero; mostly a baseline/debug aggregate.
    Mean,
    /// Mean of absolute values; tracks average magnitude regardless of sign
    AbsMean,
    /// Root-mean-square, the standard proxy for perceived loudness
    Rms,
    /// First element of each window; a cheap, low-fidelity downsample
    Decimate,
}

impl SampleAggregate {
    /// Reduce one window to a single value. Windows are never empty; the
    /// group size is at least 1.
    pub fn apply(self, window: &[f32]) -> f32 {
        match self {
            SampleAggregate::Peak => window.iter().fold(0.0_f32, |max, v| max.max(v.abs())),
            SampleAggregate::Mean => window.iter().sum::<f32>() / window.len() as f32,
            SampleAggregate::AbsMean => {
                window.iter().map(|v| v.abs()).sum::<f32>() / window.len() as f32
            }
            SampleAggregate::Rms => {
                let sum_of_squares = window.iter().map(|v| v * v).sum::<f32>();
                (sum_of_squares / window.len() as f32).sqrt()
            }
            SampleAggregate::Decimate => window[0],
        }
    }
}

/// Number of source samples condensed into each output value. At least 1,
/// even when the target count exceeds the source length.
pub fn group_size(total_len: usize, target_samples: usize) -> Result<usize, AudioError> {
    if target_samples == 0 {
        return Err(AudioError::InvalidArgument(
            "target sample count must be at least 1".to_string(),
        ));
    }

    Ok((total_len / target_samples).max(1))
}

/// Condense `buffer` into roughly `target_samples` values by applying `f` to
/// contiguous, non-overlapping windows, left to right. The group size is
/// computed once from the original buffer length; a trailing window shorter
/// than the group size is dropped, not padded.
pub fn group_samples_with<F>(
    buffer: &[f32],
    target_samples: usize,
    f: F,
) -> Result<Vec<f32>, AudioError>
where
    F: Fn(&[f32]) -> f32,
{
    let group_size = group_size(buffer.len(), target_samples)?;
    let actual_samples = buffer.len() / group_size;

    let mut output = Vec::with_capacity(actual_samples);
    for index in 0..actual_samples {
        let begin = group_size * index;
        output.push(f(&buffer[begin..begin + group_size]));
    }

    Ok(output)
}

/// `group_samples_with` using one of the built-in aggregates.
pub fn group_samples(
    buffer: &[f32],
    target_samples: usize,
    aggregate: SampleAggregate,
) -> Result<Vec<f32>, AudioError> {
    group_samples_with(buffer, target_samples, |window| aggregate.apply(window))
}
