//! WAV file writer for audio output.
//!
//! Streams 16-bit PCM blocks into a WAV container using the hound
//! crate and fixes up the header lengths on close.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{ConvertError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Append-only WAV output stream.
///
/// A sink starts empty, grows by whole blocks, and is closed with
/// [`WavSink::finalize`], which writes the container's length fields.
/// Because `finalize` consumes the sink, nothing can be written after
/// close. A sink dropped on an error path still rewrites the header
/// for the frames written so far, leaving a shorter but well-formed
/// file.
pub struct WavSink {
    writer: WavWriter<BufWriter<File>>,
    frames: usize,
}

impl WavSink {
    /// Creates a WAV file at `path` configured for mono 16-bit PCM at
    /// the given sample rate.
    pub fn create(path: &Path, sample_rate: u32) -> Result<Self> {
        let spec = WavSpec {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        };

        let writer = WavWriter::create(path, spec).map_err(|e| {
            ConvertError::io(format!("Failed to create {}: {}", path.display(), e), e)
        })?;

        Ok(Self { writer, frames: 0 })
    }

    /// Appends one block of samples to the stream.
    pub fn write_block(&mut self, samples: &[i16]) -> Result<()> {
        for &sample in samples {
            self.writer
                .write_sample(sample)
                .map_err(|e| ConvertError::io(format!("Failed to write sample: {}", e), e))?;
        }
        self.frames += samples.len();
        Ok(())
    }

    /// Returns the number of frames (mono samples) written so far.
    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Finishes the stream and writes the container's length fields.
    pub fn finalize(self) -> Result<()> {
        self.writer
            .finalize()
            .map_err(|e| ConvertError::io(format!("Failed to finalize WAV file: {}", e), e))
    }
}

/// Calculates the duration of audio in seconds from a frame count.
pub fn samples_to_duration(frames: usize, sample_rate: u32) -> f32 {
    frames as f32 / sample_rate as f32
}
