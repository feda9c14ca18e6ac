// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives for the practice engine.
//!
//! Provides note identity (letter + accidental), pitch-class conversion,
//! enharmonic normalization, and circle-of-fifths helpers shared by the
//! trainer and the quiz.

pub mod intervals;
pub mod scale;

pub use intervals::{both_fifths_from, fifth_from, seventh_from, triad_from};
pub use scale::{Scale, ScaleId, Tonality};

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Semitones in one octave
pub const OCTAVE: u8 = 12;

/// Note letters A-G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// Pitch class of the natural note (C = 0)
    pub fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

/// Accidental applied to a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

/// Error returned when a note name cannot be parsed
#[derive(Debug, Error, PartialEq)]
#[error("invalid note name: {0:?}")]
pub struct NoteParseError(pub String);

/// A spelled note name: letter plus optional accidental.
///
/// Replaces string-keyed note identity with a tagged variant, so enharmonic
/// handling is a pure function rather than scattered synonym swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Accidental,
}

/// Canonical (sharp-preferring) spelling for each pitch class
const SHARP_SPELLINGS: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Natural),
    (Letter::D, Accidental::Sharp),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Natural),
    (Letter::A, Accidental::Sharp),
    (Letter::B, Accidental::Natural),
];

impl NoteName {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Get the pitch class (0-11) for this spelling
    pub fn pitch_class(self) -> u8 {
        let base = self.letter.natural_pitch_class() as i8;
        let offset = match self.accidental {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        };
        (base + offset).rem_euclid(12) as u8
    }

    /// Canonical sharp-preferring spelling for a pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        let (letter, accidental) = SHARP_SPELLINGS[(pc % 12) as usize];
        Self { letter, accidental }
    }

    /// Collapse alternate enharmonic spellings to one canonical spelling
    /// per pitch class (Db -> C#, Cb -> B, E# -> F, and so on).
    ///
    /// The scale catalog and circle-of-fifths tables are keyed by canonical
    /// spellings only, so unsupported spellings must pass through here
    /// before lookup.
    pub fn canonical(self) -> Self {
        Self::from_pitch_class(self.pitch_class())
    }
}

impl FromStr for NoteName {
    type Err = NoteParseError;

    /// Parse a note name such as "c", "Bb", "f#". Case-insensitive,
    /// at most one accidental.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Letter::A,
            Some('B') => Letter::B,
            Some('C') => Letter::C,
            Some('D') => Letter::D,
            Some('E') => Letter::E,
            Some('F') => Letter::F,
            Some('G') => Letter::G,
            _ => return Err(NoteParseError(s.to_string())),
        };
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('#') => Accidental::Sharp,
            Some('b') => Accidental::Flat,
            _ => return Err(NoteParseError(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(NoteParseError(s.to_string()));
        }
        Ok(Self { letter, accidental })
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.letter {
            Letter::A => 'a',
            Letter::B => 'b',
            Letter::C => 'c',
            Letter::D => 'd',
            Letter::E => 'e',
            Letter::F => 'f',
            Letter::G => 'g',
        };
        match self.accidental {
            Accidental::Natural => write!(f, "{}", letter),
            Accidental::Sharp => write!(f, "{}#", letter),
            Accidental::Flat => write!(f, "{}b", letter),
        }
    }
}

/// Convert a MIDI note to its canonical note name, octave stripped
pub fn note_name(midi: MidiNote) -> NoteName {
    NoteName::from_pitch_class(midi % OCTAVE)
}

/// Major or minor flavor, used by the circle of fifths and the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajMin {
    Major,
    Minor,
}

/// Circle of fifths spellings for a major or minor key set
pub fn circle_of_fifths(maj_min: MajMin) -> [&'static str; 12] {
    match maj_min {
        MajMin::Major => [
            "C", "G", "D", "A", "E", "B", "F#", "C#", "F", "Bb", "Eb", "Ab",
        ],
        MajMin::Minor => [
            "a", "e", "b", "f#", "c#", "g#", "d#", "a#", "d", "g", "c", "f",
        ],
    }
}

/// Check whether `test` sits directly next to `base` on the circle of fifths
pub fn is_adjacent_fifth(maj_min: MajMin, base: &str, test: &str) -> bool {
    let fifths = circle_of_fifths(maj_min);
    let Some(idx) = fifths.iter().position(|&f| f == test) else {
        return false;
    };
    let behind = (idx as i32 - 1).rem_euclid(12) as usize;
    let front = (idx + 1) % 12;
    fifths[behind] == base || fifths[front] == base
}

/// Pick a random playable note name (skips the theoretical E#, B#, Fb)
pub fn random_key<R: Rng>(rng: &mut R) -> NoteName {
    loop {
        let letter = match rng.gen_range(0..7) {
            0 => Letter::A,
            1 => Letter::B,
            2 => Letter::C,
            3 => Letter::D,
            4 => Letter::E,
            5 => Letter::F,
            _ => Letter::G,
        };
        let accidental = match rng.gen_range(0..3) {
            0 => Accidental::Natural,
            1 => Accidental::Sharp,
            _ => Accidental::Flat,
        };
        let name = NoteName::new(letter, accidental);
        let theoretical = matches!(
            (letter, accidental),
            (Letter::E, Accidental::Sharp)
                | (Letter::B, Accidental::Sharp)
                | (Letter::F, Accidental::Flat)
        );
        if !theoretical {
            return name;
        }
    }
}

/// Pick a random key from the circle of fifths
pub fn random_fifth<R: Rng>(rng: &mut R, maj_min: MajMin) -> &'static str {
    let fifths = circle_of_fifths(maj_min);
    fifths[rng.gen_range(0..fifths.len())]
}
