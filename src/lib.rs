//! txt2wav: renders a text file as a WAV melody.
//!
//! This library provides the core functionality for the txt2wav
//! converter, which maps characters to notes and chords and renders
//! them as 16-bit PCM audio.
//!
//! # Modules
//!
//! - [`symbols`]: Character classification (digits, letters A-H, rest)
//! - [`notes`]: MIDI note numbers and equal-tempered frequencies
//! - [`synth`]: Additive sine synthesis into PCM blocks
//! - [`audio`]: WAV container output ([`audio::wav::WavSink`])
//! - [`convert`]: The file-to-WAV pipeline
//! - [`config`]: Synthesis parameters (SynthConfig)
//! - [`error`]: Error types and codes (ConvertError, ErrorCode)
//! - [`cli`]: Argument parsing and the interactive prompt
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! use txt2wav::config::SynthConfig;
//! use txt2wav::convert::convert_file;
//!
//! // Render song.txt into song.wav next to it
//! let output = convert_file(Path::new("song.txt"), &SynthConfig::default())?;
//! println!("{}", output.display());
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod notes;
pub mod symbols;
pub mod synth;

// Re-export commonly used types at crate root for convenience
pub use config::SynthConfig;
pub use convert::{convert_file, convert_text};
pub use error::{ConvertError, ErrorCode, Result};
pub use symbols::{classify, Symbol};
