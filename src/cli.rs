//! CLI argument parser for the converter.
//!
//! One optional positional argument names the input file; when it is
//! omitted the user is prompted on stderr instead.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{ConvertError, Result};

/// txt2wav: renders a text file as a WAV melody
#[derive(Parser, Debug)]
#[command(name = "txt2wav")]
#[command(about = "Renders a text file as a WAV melody")]
#[command(version)]
pub struct Cli {
    /// Text file to convert (prompted for when omitted)
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the input path from the argument or the prompt.
    ///
    /// Both sources pass through the same normalization: surrounding
    /// whitespace and one pair of double quotes are removed. A name
    /// that is empty after normalization is rejected before any file
    /// access is attempted.
    pub fn resolve_input(&self) -> Result<PathBuf> {
        let raw = match &self.input {
            Some(path) => path.to_string_lossy().into_owned(),
            None => prompt_for_path()?,
        };

        let cleaned = clean_filename(&raw);
        if cleaned.is_empty() {
            return Err(ConvertError::invalid_input("No input filename supplied"));
        }
        Ok(PathBuf::from(cleaned))
    }
}

/// Asks for a filename on stderr and reads one line from stdin.
fn prompt_for_path() -> Result<String> {
    eprint!("Text file to convert: ");

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| ConvertError::io(format!("Failed to read from stdin: {}", e), e))?;

    // EOF at the prompt is the cancel path (Ctrl-D).
    if bytes == 0 {
        return Err(ConvertError::cancelled());
    }

    Ok(line)
}

/// Strips surrounding whitespace and one matched pair of double
/// quotes, as left by drag-and-drop or copy-pasted shell paths.
fn clean_filename(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(trimmed)
}
