// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The practice progression engine.
//!
//! Consumes press/release input events, tracks the currently held chord,
//! decides when the practice target is satisfied, and walks the training
//! sequence forward. Owned by exactly one practice session at a time and
//! driven by a serialized event stream; nothing here blocks.

pub mod chord_stack;
pub mod matcher;
pub mod progression;
pub mod session;

pub use chord_stack::ChordStack;
pub use matcher::is_satisfied;
pub use progression::{Direction, Progression};
pub use session::PracticeSession;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What is being practiced; selects the interval derivation used for
/// matching and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PracticeMode {
    Scales,
    Chords,
    SeventhChords,
    Fifths,
}

/// Error returned when a practice mode string cannot be parsed
#[derive(Debug, Error, PartialEq)]
#[error("unknown practice mode: {0:?}")]
pub struct ModeParseError(pub String);

impl PracticeMode {
    pub const ALL: [PracticeMode; 4] = [
        PracticeMode::Scales,
        PracticeMode::Chords,
        PracticeMode::SeventhChords,
        PracticeMode::Fifths,
    ];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            PracticeMode::Scales => "Scales",
            PracticeMode::Chords => "Chords",
            PracticeMode::SeventhChords => "Seventh Chords",
            PracticeMode::Fifths => "Fifths",
        }
    }

    /// Stable identifier
    pub fn value(self) -> &'static str {
        match self {
            PracticeMode::Scales => "scales",
            PracticeMode::Chords => "chords",
            PracticeMode::SeventhChords => "seventhChords",
            PracticeMode::Fifths => "fifths",
        }
    }
}

impl FromStr for PracticeMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "scales" | "scale" => Ok(PracticeMode::Scales),
            "chords" | "chord" | "triads" => Ok(PracticeMode::Chords),
            "seventhchords" | "sevenths" => Ok(PracticeMode::SeventhChords),
            "fifths" => Ok(PracticeMode::Fifths),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Practice flags read by the engine. Injected into the session rather than
/// pulled from ambient state; the surrounding configuration layer owns the
/// persisted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainerSettings {
    /// Walk the scale back down after reaching the top
    #[serde(default)]
    pub ping_pong: bool,
    /// Highlight the previous note instead of the target
    #[serde(default)]
    pub hard_mode: bool,
    /// Hop to a random selected scale each time the sequence wraps
    #[serde(default)]
    pub shuffle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("scales".parse::<PracticeMode>(), Ok(PracticeMode::Scales));
        assert_eq!(
            "seventh-chords".parse::<PracticeMode>(),
            Ok(PracticeMode::SeventhChords)
        );
        assert_eq!("Fifths".parse::<PracticeMode>(), Ok(PracticeMode::Fifths));
        assert!("arpeggios".parse::<PracticeMode>().is_err());
    }

    #[test]
    fn test_mode_values_stable() {
        assert_eq!(PracticeMode::Scales.value(), "scales");
        assert_eq!(PracticeMode::SeventhChords.value(), "seventhChords");
    }

    #[test]
    fn test_all_modes_value_round_trip() {
        for mode in PracticeMode::ALL {
            assert_eq!(mode.value().parse::<PracticeMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_settings_default_off() {
        let settings = TrainerSettings::default();
        assert!(!settings.ping_pong);
        assert!(!settings.hard_mode);
        assert!(!settings.shuffle);
    }
}
