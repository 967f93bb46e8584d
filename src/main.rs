//! txt2wav: renders a text file as a WAV melody.
//!
//! Reads the input file named on the command line (or asked for at a
//! prompt), synthesizes one short tone block per mapped character, and
//! writes a WAV file next to the input. The only stdout line is the
//! resolved output path; progress and errors go to stderr.

use std::fs;

use txt2wav::cli::Cli;
use txt2wav::config::SynthConfig;
use txt2wav::convert::convert_file;
use txt2wav::error::{ErrorCode, Result};

fn main() {
    match run() {
        Ok(()) => {}
        // Backing out at the prompt is not an error.
        Err(e) if e.code == ErrorCode::Cancelled => {
            eprintln!("{}", e.message);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let input = cli.resolve_input()?;

    eprintln!("Converting {}", input.display());
    let output = convert_file(&input, &SynthConfig::default())?;

    // The only stdout line is the resolved output path.
    let resolved = fs::canonicalize(&output).unwrap_or(output);
    println!("{}", resolved.display());

    Ok(())
}
