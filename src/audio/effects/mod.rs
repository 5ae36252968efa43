pub mod compressor;
pub mod curve;
pub mod effects_chain;
pub mod gain;

pub use compressor::DynamicsCompressor;
pub use curve::{attenuation_linear, compress_curve_db, compress_curve_linear, knee_end_db};
pub use effects_chain::{
    render_compressed_chain, CompressedRenderResult, OfflineEffectsChain, RENDER_QUANTUM,
};
pub use gain::{full_range_gain_db, full_range_gain_linear, makeup_gain_db, makeup_gain_linear};
