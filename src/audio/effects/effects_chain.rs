use anyhow::Result;
use colored::*;
use tracing::{debug, info};

use super::compressor::DynamicsCompressor;
use super::gain::{full_range_gain_db, full_range_gain_linear, makeup_gain_db, makeup_gain_linear};
use crate::audio::db;
use crate::audio::timing::Timer;
use crate::audio::types::{AudioError, CompressorSettings};

/// Samples processed per pass of the offline render loop, matching the
/// platform render quantum.
pub const RENDER_QUANTUM: usize = 128;

/// Seconds of audio time between gain-reduction snapshots.
const REDUCTION_SNAPSHOT_INTERVAL_S: f32 = 0.1;

/// Output of an offline compressed render
#[derive(Debug, Clone)]
pub struct CompressedRenderResult {
    /// The compressed, gain-staged samples
    pub output: Vec<f32>,
    /// Gain reduction in dB, snapshotted every 100ms of audio time starting
    /// at t=0 (so the first entry is always 0, taken before any processing)
    pub reduction: Vec<f32>,
}

/// Offline effects chain: dynamics compressor followed by an output gain
/// stage
#[derive(Debug)]
pub struct OfflineEffectsChain {
    compressor: DynamicsCompressor,
    output_gain: f32,
}

impl OfflineEffectsChain {
    /// Build the chain. When `remove_makeup_gain` is set, the output stage
    /// inverts the compressor's default makeup gain so the raw attenuation
    /// effect of compression can be heard without automatic loudness
    /// compensation.
    pub fn new(
        sample_rate: u32,
        settings: CompressorSettings,
        remove_makeup_gain: bool,
    ) -> Result<Self, AudioError> {
        let compressor = DynamicsCompressor::new(sample_rate, settings)?;

        let makeup_gain = makeup_gain_linear(&settings);
        let invert_makeup_gain = 1.0 / makeup_gain;
        let output_gain = if remove_makeup_gain {
            invert_makeup_gain
        } else {
            1.0
        };

        debug!(
            "{}: Default makeup gain: {:.2}dB ({:.2} linear), full range gain: {:.2}dB ({:.2} linear)",
            "OFFLINE_CHAIN".on_cyan().white(),
            makeup_gain_db(&settings),
            makeup_gain,
            full_range_gain_db(&settings),
            full_range_gain_linear(&settings),
        );
        debug!(
            "{}: {} inverted makeup gain: {:.2}dB ({:.2} linear)",
            "OFFLINE_CHAIN".on_cyan().white(),
            if remove_makeup_gain {
                "Applied"
            } else {
                "Did not apply"
            },
            db::linear_to_db(invert_makeup_gain),
            invert_makeup_gain,
        );

        Ok(Self {
            compressor,
            output_gain,
        })
    }

    pub fn process(&mut self, samples: &mut [f32]) {
        self.compressor.process(samples);

        for sample in samples.iter_mut() {
            *sample *= self.output_gain;
        }
    }

    /// See `DynamicsCompressor::reduction_db`.
    pub fn reduction_db(&self) -> f32 {
        self.compressor.reduction_db()
    }

    pub fn reset(&mut self) {
        self.compressor.reset();
    }
}

/// Render `input` through a compressor chain offline, snapshotting the
/// instantaneous gain reduction every 100ms of audio time. Fails before any
/// processing when the settings are invalid.
pub fn render_compressed_chain(
    input: &[f32],
    sample_rate: u32,
    settings: CompressorSettings,
    remove_makeup_gain: bool,
) -> Result<CompressedRenderResult> {
    let timer = Timer::start();
    let mut chain = OfflineEffectsChain::new(sample_rate, settings, remove_makeup_gain)?;

    let interval_samples =
        ((REDUCTION_SNAPSHOT_INTERVAL_S * sample_rate as f32) as usize).max(RENDER_QUANTUM);

    let mut output = input.to_vec();
    let mut reduction = Vec::with_capacity(input.len() / interval_samples + 1);
    let mut next_snapshot = 0_usize;
    let mut processed = 0_usize;

    for quantum in output.chunks_mut(RENDER_QUANTUM) {
        // Snapshots land on quantum boundaries, the same granularity the
        // platform gives suspend callbacks.
        if processed >= next_snapshot {
            reduction.push(chain.reduction_db());
            next_snapshot += interval_samples;
        }

        chain.process(quantum);
        processed += quantum.len();
    }

    info!(
        "{}: Rendered {} samples in {}ms ({} reduction snapshots)",
        "OFFLINE_RENDER".purple(),
        output.len(),
        timer.stop(),
        reduction.len(),
    );

    Ok(CompressedRenderResult { output, reduction })
}
