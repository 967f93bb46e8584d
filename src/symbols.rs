//! Symbol mapping from input characters to notes and chords.
//!
//! Two fixed tables drive the conversion: each digit becomes a
//! three-note chord, each of the letters A-H a single note, and every
//! other character is unmapped and produces no audio.

use crate::notes::Midi;

/// Triads for the digits '0'..='9', indexed by digit value.
///
/// Diatonic triads climbing the C major scale from middle C: '0' is
/// C-E-G, '1' is D-F-A, and so on up to '9' at E5-G5-B5.
pub const DIGIT_CHORDS: [[Midi; 3]; 10] = [
    [60, 64, 67],
    [62, 65, 69],
    [64, 67, 71],
    [65, 69, 72],
    [67, 71, 74],
    [69, 72, 76],
    [71, 74, 77],
    [72, 76, 79],
    [74, 77, 81],
    [76, 79, 83],
];

/// Single notes for the letters 'A'..='H', indexed by offset from 'A'.
///
/// A through G sound their musical namesakes in the octave around
/// middle C (A4 = 69 down to C4 = 60); H lands on 70 (B-flat 4).
pub const LETTER_NOTES: [Midi; 8] = [69, 71, 60, 62, 64, 65, 67, 70];

/// Classification of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A digit: three simultaneous notes.
    Chord([Midi; 3]),
    /// A letter A-H: one note.
    Note(Midi),
    /// Anything else: skipped, produces no audio.
    Unmapped,
}

impl Symbol {
    /// Returns the notes to synthesize for this symbol, if any.
    pub fn notes(&self) -> Option<&[Midi]> {
        match self {
            Symbol::Chord(chord) => Some(chord),
            Symbol::Note(note) => Some(std::slice::from_ref(note)),
            Symbol::Unmapped => None,
        }
    }
}

/// Classifies a single character against the fixed tables.
///
/// Letters match case-insensitively. The function is total: every
/// character maps to exactly one variant, and unmapped input is a
/// valid outcome rather than an error.
pub fn classify(ch: char) -> Symbol {
    let ch = ch.to_ascii_uppercase();
    if let Some(digit) = ch.to_digit(10) {
        Symbol::Chord(DIGIT_CHORDS[digit as usize])
    } else if ('A'..='H').contains(&ch) {
        Symbol::Note(LETTER_NOTES[(ch as u8 - b'A') as usize])
    } else {
        Symbol::Unmapped
    }
}
