//! Additive sine-wave synthesis into PCM blocks.
//!
//! Renders a list of notes into a fixed-duration block of signed
//! 16-bit samples: the sine waves for all notes are summed with equal
//! weight, averaged so chords stay in range, and scaled by the
//! configured volume.

use std::f32::consts::PI;

use crate::config::SynthConfig;
use crate::notes::{note_to_frequency, Midi};

/// Largest positive 16-bit sample value; mixed samples in [-1, 1] are
/// scaled by this before quantization.
const MAX_AMPLITUDE: f32 = i16::MAX as f32;

/// Synthesizes one audio block for the given notes.
///
/// The block holds `round(duration_secs * sample_rate)` samples. For
/// sample index `i` at time `t = i / sample_rate`, the output is the
/// sum of `sin(2π · freq · t)` over all notes, divided by the note
/// count, scaled by the configured volume, and quantized by truncation
/// toward zero. A zero duration produces an empty block; an empty note
/// list produces silence.
pub fn synthesize_block(notes: &[Midi], duration_secs: f32, config: &SynthConfig) -> Vec<i16> {
    let n_samples = config.samples_for(duration_secs);
    if notes.is_empty() {
        return vec![0; n_samples];
    }

    let frequencies: Vec<f32> = notes.iter().map(|&note| note_to_frequency(note)).collect();
    let mut samples = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let t = i as f32 / config.sample_rate as f32;
        let sum: f32 = frequencies.iter().map(|&freq| (2.0 * PI * freq * t).sin()).sum();
        let mixed = sum / frequencies.len() as f32 * config.volume;
        // `as` truncates toward zero and saturates at the i16 bounds.
        samples.push((mixed * MAX_AMPLITUDE) as i16);
    }
    samples
}

/// Produces a block of silence with the same length policy as
/// [`synthesize_block`].
pub fn silence_block(duration_secs: f32, config: &SynthConfig) -> Vec<i16> {
    vec![0; config.samples_for(duration_secs)]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ceiling of the loudest sample the default volume can produce.
    const VOLUME_CEILING: u16 = 13_107; // 0.4 * 32767, rounded up

    #[test]
    fn block_length_follows_duration() {
        let config = SynthConfig::default();
        assert_eq!(synthesize_block(&[69], 0.30, &config).len(), 13_230);
        assert_eq!(synthesize_block(&[69], 1.0, &config).len(), 44_100);
    }

    #[test]
    fn zero_duration_yields_empty_block() {
        let config = SynthConfig::default();
        assert!(synthesize_block(&[69], 0.0, &config).is_empty());
    }

    #[test]
    fn blocks_start_at_zero_crossing() {
        let config = SynthConfig::default();
        let block = synthesize_block(&[69, 72, 76], 0.30, &config);
        assert_eq!(block[0], 0);
    }

    #[test]
    fn chord_stays_below_volume_ceiling() {
        let config = SynthConfig::default();
        let block = synthesize_block(&[69, 72, 76], 0.30, &config);
        assert!(block.iter().all(|s| s.unsigned_abs() <= VOLUME_CEILING));
        assert!(block.iter().any(|&s| s != 0));
    }

    #[test]
    fn single_note_reaches_near_full_volume() {
        let config = SynthConfig::default();
        let block = synthesize_block(&[69], 0.30, &config);
        let peak = block.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak >= 13_000, "peak {} too quiet for a 440 Hz tone", peak);
        assert!(peak <= VOLUME_CEILING);
    }

    #[test]
    fn silence_block_is_all_zeros() {
        let config = SynthConfig::default();
        let block = silence_block(0.05, &config);
        assert_eq!(block.len(), 2_205);
        assert!(block.iter().all(|&s| s == 0));
    }

    #[test]
    fn empty_note_list_renders_silence() {
        let config = SynthConfig::default();
        let block = synthesize_block(&[], 0.10, &config);
        assert_eq!(block.len(), 4_410);
        assert!(block.iter().all(|&s| s == 0));
    }
}
