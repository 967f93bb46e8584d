//! Audio output module.
//!
//! Provides WAV file writing for rendered sample blocks.

pub mod wav;

// Re-export commonly used items
pub use wav::{samples_to_duration, WavSink, BITS_PER_SAMPLE, CHANNELS};
