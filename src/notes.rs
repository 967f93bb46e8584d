//! MIDI pitch numbers and frequency conversion.
//!
//! Symbols carry integer MIDI note numbers; the synthesizer needs them
//! as frequencies in Hz.

/// Integer MIDI note number (69 = A4 = 440 Hz).
pub type Midi = u8;

/// Converts a MIDI note number to its frequency in Hz.
///
/// Uses the equal-tempered scale referenced to A4 = 440 Hz at MIDI 69,
/// so adding 12 to a note doubles its frequency.
pub fn note_to_frequency(note: Midi) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concert_pitch_is_exact() {
        assert_eq!(note_to_frequency(69), 440.0);
    }

    #[test]
    fn octaves_around_concert_pitch() {
        assert!((note_to_frequency(81) - 880.0).abs() < 1e-3);
        assert!((note_to_frequency(57) - 220.0).abs() < 1e-3);
    }

    #[test]
    fn adding_twelve_doubles_frequency() {
        for note in 60..=71u8 {
            let low = note_to_frequency(note);
            let high = note_to_frequency(note + 12);
            assert!(
                (high / low - 2.0).abs() < 1e-4,
                "octave ratio broken at MIDI {}",
                note
            );
        }
    }

    #[test]
    fn middle_c() {
        assert!((note_to_frequency(60) - 261.63).abs() < 1e-2);
    }
}
