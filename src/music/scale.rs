// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale construction for the practice engine.
//!
//! A scale is a frozen eight-degree walk (root repeated at the octave) built
//! from a tonality's whole/half step pattern, with each degree labeled by its
//! roman numeral.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Accidental, Letter, MidiNote, NoteName, OCTAVE};

/// Number of degrees in a practice scale, octave-doubled root included
pub const SCALE_DEGREES: usize = 8;

/// MIDI note of the reference-octave C every scale root is built from.
/// C roots at 48 and the other roots sit in the octave above it, matching
/// the keyboard range the trainer displays.
pub const REFERENCE_C: MidiNote = 48;

/// Tonalities supported by the trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tonality {
    Major,
    NaturalMinor,
    MelodicMinor,
}

impl Tonality {
    /// Whole/half step pattern in semitones (w = 2, h = 1)
    pub fn steps(self) -> [u8; 7] {
        match self {
            Tonality::Major => [2, 2, 1, 2, 2, 2, 1],
            Tonality::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
            // Ascending form
            Tonality::MelodicMinor => [2, 1, 2, 2, 2, 2, 1],
        }
    }

    /// Roman numeral labels for the eight degrees
    pub fn numerals(self) -> [&'static str; SCALE_DEGREES] {
        match self {
            Tonality::Major => ["I", "ii", "iii", "IV", "V", "vi", "viiº", "I"],
            Tonality::NaturalMinor => ["i", "iiº", "III", "iv", "v", "VI", "VII", "i"],
            Tonality::MelodicMinor => ["i", "iiº", "III+", "IV", "V", "viº", "viiº", "i"],
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Tonality::Major => "Major",
            Tonality::NaturalMinor => "Minor (Natural)",
            Tonality::MelodicMinor => "Minor (Melodic)",
        }
    }

    /// Identifier suffix used in scale ids
    fn id_suffix(self) -> &'static str {
        match self {
            Tonality::Major => "major",
            Tonality::NaturalMinor => "minor-natural",
            Tonality::MelodicMinor => "minor-melodic",
        }
    }

    /// Conventional spelling for a root pitch class in this tonality.
    /// Major keys spell Eb/Ab/Bb with flats; minor keys use sharps.
    fn conventional_root(self, pc: u8) -> NoteName {
        match self {
            Tonality::Major => {
                let (letter, accidental) = match pc % 12 {
                    3 => (Letter::E, Accidental::Flat),
                    8 => (Letter::A, Accidental::Flat),
                    10 => (Letter::B, Accidental::Flat),
                    other => return NoteName::from_pitch_class(other),
                };
                NoteName::new(letter, accidental)
            }
            Tonality::NaturalMinor | Tonality::MelodicMinor => NoteName::from_pitch_class(pc),
        }
    }
}

/// Stable identifier for a scale, rendered kebab-case ("c-major",
/// "f-sharp-minor-natural"). Enharmonic spellings canonicalize before the
/// id is formed, so Cb major and B major share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleId {
    pub root: NoteName,
    pub tonality: Tonality,
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.root.letter {
            Letter::A => 'a',
            Letter::B => 'b',
            Letter::C => 'c',
            Letter::D => 'd',
            Letter::E => 'e',
            Letter::F => 'f',
            Letter::G => 'g',
        };
        match self.root.accidental {
            Accidental::Natural => write!(f, "{}-{}", letter, self.tonality.id_suffix()),
            Accidental::Sharp => write!(f, "{}-sharp-{}", letter, self.tonality.id_suffix()),
            Accidental::Flat => write!(f, "{}-flat-{}", letter, self.tonality.id_suffix()),
        }
    }
}

/// Error returned when a scale id string cannot be parsed
#[derive(Debug, Error, PartialEq)]
#[error("unknown scale id: {0:?}")]
pub struct ScaleParseError(pub String);

impl FromStr for ScaleId {
    type Err = ScaleParseError;

    /// Parse a kebab-case scale id such as "c-major" or
    /// "f-sharp-minor-natural". The root canonicalizes on parse, so synonym
    /// spellings ("d-flat-major") land on the same id they would render as.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (root_part, tonality) = if let Some(root) = s.strip_suffix("-minor-natural") {
            (root, Tonality::NaturalMinor)
        } else if let Some(root) = s.strip_suffix("-minor-melodic") {
            (root, Tonality::MelodicMinor)
        } else if let Some(root) = s.strip_suffix("-major") {
            (root, Tonality::Major)
        } else {
            return Err(ScaleParseError(s.to_string()));
        };

        let spelled = match root_part.split_once('-') {
            None => root_part.to_string(),
            Some((letter, "sharp")) => format!("{}#", letter),
            Some((letter, "flat")) => format!("{}b", letter),
            Some(_) => return Err(ScaleParseError(s.to_string())),
        };
        let root: NoteName = spelled
            .parse()
            .map_err(|_| ScaleParseError(s.to_string()))?;

        Ok(ScaleId {
            root: tonality.conventional_root(root.pitch_class()),
            tonality,
        })
    }
}

/// A frozen eight-degree scale mapping MIDI notes to roman numerals.
///
/// Degrees are strictly ascending and the first and last degree share a
/// pitch class one octave apart. Construction is deterministic for the same
/// root and tonality.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    id: ScaleId,
    label: String,
    degrees: Vec<(MidiNote, &'static str)>,
}

impl Scale {
    /// Build the scale for a root spelling and tonality.
    ///
    /// The root spelling is canonicalized first, so enharmonically duplicate
    /// keys (Cb major, B major) resolve to the same scale and the same MIDI
    /// root.
    pub fn build(root: NoteName, tonality: Tonality) -> Self {
        let pc = root.pitch_class();
        let spelled = tonality.conventional_root(pc);
        let numerals = tonality.numerals();

        let mut midi = REFERENCE_C + pc;
        let mut degrees = Vec::with_capacity(SCALE_DEGREES);
        for (i, step) in tonality.steps().iter().enumerate() {
            degrees.push((midi, numerals[i]));
            midi += step;
        }
        degrees.push((midi, numerals[SCALE_DEGREES - 1]));

        let label = format!("{} {}", display_spelling(spelled), tonality.name());
        Self {
            id: ScaleId {
                root: spelled,
                tonality,
            },
            label,
            degrees,
        }
    }

    /// All scales the trainer offers: every major key plus the minor keys
    /// (natural and melodic) in common pedagogical use.
    pub fn catalog() -> Vec<Scale> {
        let mut scales = Vec::new();
        for pc in 0..12 {
            scales.push(Scale::build(NoteName::from_pitch_class(pc), Tonality::Major));
        }
        // a, b, c, c#, d, e, f, f#, g, g#
        const MINOR_ROOTS: [u8; 10] = [9, 11, 0, 1, 2, 4, 5, 6, 7, 8];
        for tonality in [Tonality::NaturalMinor, Tonality::MelodicMinor] {
            for pc in MINOR_ROOTS {
                scales.push(Scale::build(NoteName::from_pitch_class(pc), tonality));
            }
        }
        scales
    }

    /// Build the scale identified by a stable id
    pub fn from_id(id: ScaleId) -> Self {
        Scale::build(id.root, id.tonality)
    }

    /// Parse a kebab-case id and build its scale
    pub fn parse(id: &str) -> Result<Self, ScaleParseError> {
        id.parse::<ScaleId>().map(Scale::from_id)
    }

    /// Stable identifier
    pub fn id(&self) -> ScaleId {
        self.id
    }

    /// Human-readable label, e.g. "Eb Major"
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The eight (MIDI note, numeral) degrees in ascending order
    pub fn degrees(&self) -> &[(MidiNote, &'static str)] {
        &self.degrees
    }

    /// Number of degrees (always eight)
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// First (root) degree
    pub fn first_note(&self) -> MidiNote {
        self.degrees[0].0
    }

    /// Last (octave root) degree
    pub fn last_note(&self) -> MidiNote {
        self.degrees[self.degrees.len() - 1].0
    }

    /// MIDI note at a 0-based degree index
    pub fn note_at(&self, index: usize) -> MidiNote {
        self.degrees[index % self.degrees.len()].0
    }

    /// Position of a MIDI note among the degrees, if present
    pub fn position(&self, midi: MidiNote) -> Option<usize> {
        self.degrees.iter().position(|&(n, _)| n == midi)
    }

    /// Check whether a MIDI note is one of the degrees (exact pitch)
    pub fn contains(&self, midi: MidiNote) -> bool {
        self.position(midi).is_some()
    }

    /// Octave-independent projection: (pitch class, numeral) per degree,
    /// for rendering degree markers across the whole keyboard.
    pub fn pitch_classes(&self) -> Vec<(u8, &'static str)> {
        self.degrees
            .iter()
            .map(|&(midi, numeral)| (midi % OCTAVE, numeral))
            .collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Uppercase display spelling for labels ("Eb", "C#")
fn display_spelling(name: NoteName) -> String {
    let letter = match name.letter {
        Letter::A => 'A',
        Letter::B => 'B',
        Letter::C => 'C',
        Letter::D => 'D',
        Letter::E => 'E',
        Letter::F => 'F',
        Letter::G => 'G',
    };
    match name.accidental {
        Accidental::Natural => letter.to_string(),
        Accidental::Sharp => format!("{}#", letter),
        Accidental::Flat => format!("{}b", letter),
    }
}
