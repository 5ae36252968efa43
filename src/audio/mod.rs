// Audio module - offline dynamics-compression core for Compressor Lab
//
// This module provides the numeric core behind the compressor visualizer:
// - types: Compressor settings, validation, and the error taxonomy
// - db: Decibel/linear conversion utilities
// - samples: Grouped sample statistics for condensing waveforms
// - effects: Compression curve, gain staging, and the offline render pipeline
// - timing: Wall-clock timer for render diagnostics

pub mod db;
pub mod effects;
pub mod samples;
pub mod timing;
pub mod types;

// Re-export commonly used types for easier imports
pub use types::{AudioError, CompressorSettings};

pub use db::{db_to_linear, linear_to_db, linear_to_dbfs, ZERO_DB};

pub use samples::{group_samples, group_samples_with, group_size, SampleAggregate};

pub use effects::{
    attenuation_linear, compress_curve_db, compress_curve_linear, full_range_gain_db,
    full_range_gain_linear, knee_end_db, makeup_gain_db, makeup_gain_linear,
    render_compressed_chain, CompressedRenderResult, DynamicsCompressor, OfflineEffectsChain,
    RENDER_QUANTUM,
};

pub use timing::Timer;
