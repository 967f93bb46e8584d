//! Text-to-WAV conversion pipeline.
//!
//! Orchestrates symbol classification, sine synthesis, and the WAV
//! sink to turn a text file into a melody.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::wav::{samples_to_duration, WavSink};
use crate::config::SynthConfig;
use crate::error::{ConvertError, Result};
use crate::symbols::classify;
use crate::synth::{silence_block, synthesize_block};

/// Converts a text file into a WAV melody next to it.
///
/// # Arguments
///
/// * `input` - Path to the UTF-8 text file to sonify
/// * `config` - Synthesis parameters (sample rate, volume, durations)
///
/// # Returns
///
/// The path of the written WAV file: the input path with its extension
/// replaced by `wav`.
///
/// # Example
///
/// ```ignore
/// use txt2wav::config::SynthConfig;
/// use txt2wav::convert::convert_file;
///
/// let output = convert_file(Path::new("song.txt"), &SynthConfig::default())?;
/// println!("{}", output.display());
/// ```
pub fn convert_file(input: &Path, config: &SynthConfig) -> Result<PathBuf> {
    let text = fs::read_to_string(input)
        .map_err(|e| ConvertError::io(format!("Failed to read {}: {}", input.display(), e), e))?;

    let output = input.with_extension("wav");
    convert_text(&text, &output, config)?;

    Ok(output)
}

/// Renders `text` as audio and writes it to `output`.
///
/// The text is uppercased before classification, so lowercase letters
/// and characters whose uppercase expands to several letters fold
/// into their mapped forms. Each mapped character contributes one
/// block of notes followed by a short pause; unmapped characters are
/// skipped without producing any audio. Text with no mapped
/// characters still yields a valid, empty WAV file.
pub fn convert_text(text: &str, output: &Path, config: &SynthConfig) -> Result<()> {
    // Uppercase the whole text first: characters like U+FB00 expand
    // to "FF" here, and the expanded letters reach the lookup tables.
    let text = text.to_uppercase();

    let mut sink = WavSink::create(output, config.sample_rate)?;

    // The pause is identical after every symbol, so render it once.
    let pause = silence_block(config.pause_secs, config);

    let mut mapped = 0usize;
    for ch in text.chars() {
        let symbol = classify(ch);
        if let Some(notes) = symbol.notes() {
            let block = synthesize_block(notes, config.symbol_secs, config);
            sink.write_block(&block)?;
            sink.write_block(&pause)?;
            mapped += 1;
        }
    }

    let seconds = samples_to_duration(sink.frames_written(), config.sample_rate);
    sink.finalize()?;

    eprintln!("Rendered {} symbols ({:.2}s of audio)", mapped, seconds);
    Ok(())
}
