pub mod audio;

// Re-export audio types for testing and external use
pub use audio::{
    attenuation_linear, compress_curve_db, compress_curve_linear, db_to_linear,
    full_range_gain_db, full_range_gain_linear, group_samples, group_samples_with, group_size,
    knee_end_db, linear_to_db, linear_to_dbfs, makeup_gain_db, makeup_gain_linear,
    render_compressed_chain, AudioError, CompressedRenderResult, CompressorSettings,
    DynamicsCompressor, OfflineEffectsChain, SampleAggregate, Timer,
};
