// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session configuration for the trainer.
//!
//! A small YAML file describing what to practice: key, tonality, practice
//! mode, the practice flags, and the keyboard range. Persisting user
//! preferences (sound, language, and so on) belongs to the surrounding
//! application, not here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::music::{MidiNote, NoteName, Scale, Tonality};
use crate::trainer::session::DEFAULT_RANGE;
use crate::trainer::{PracticeMode, PracticeSession, TrainerSettings};

/// Root configuration for a practice session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionFile {
    /// Root key to practice, e.g. "c", "f#", "Bb"
    #[serde(default = "default_key")]
    pub key: String,
    /// Tonality of the practiced scale
    #[serde(default = "default_tonality")]
    pub tonality: Tonality,
    /// Practice mode
    #[serde(default = "default_mode")]
    pub mode: PracticeMode,
    /// Walk back down after reaching the top
    #[serde(default)]
    pub ping_pong: bool,
    /// Highlight the previous note instead of the target
    #[serde(default)]
    pub hard_mode: bool,
    /// Hop between the selected scales when the sequence wraps
    #[serde(default)]
    pub shuffle: bool,
    /// Shuffle pool as scale ids ("c-major", "a-minor-natural"). Empty
    /// means the whole catalog.
    #[serde(default)]
    pub scales: Vec<String>,
    /// Lowest note the keyboard reacts to
    #[serde(default = "default_range_first")]
    pub range_first: MidiNote,
    /// Highest note the keyboard reacts to
    #[serde(default = "default_range_last")]
    pub range_last: MidiNote,
    /// Index of the MIDI source to read from
    #[serde(default)]
    pub midi_source: Option<usize>,
}

fn default_key() -> String {
    "c".to_string()
}
fn default_tonality() -> Tonality {
    Tonality::Major
}
fn default_mode() -> PracticeMode {
    PracticeMode::Scales
}
fn default_range_first() -> MidiNote {
    DEFAULT_RANGE.0
}
fn default_range_last() -> MidiNote {
    DEFAULT_RANGE.1
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            key: default_key(),
            tonality: default_tonality(),
            mode: default_mode(),
            ping_pong: false,
            hard_mode: false,
            shuffle: false,
            scales: Vec::new(),
            range_first: default_range_first(),
            range_last: default_range_last(),
            midi_source: None,
        }
    }
}

impl SessionFile {
    /// Load a session configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a session configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// The configured scale. An unparsable key degrades to C major with a
    /// diagnostic rather than failing; this sits on an interactive path.
    pub fn scale(&self) -> Scale {
        let root: NoteName = match self.key.parse() {
            Ok(root) => root,
            Err(_) => {
                warn!(key = %self.key, "invalid key name, defaulting to C major");
                return Scale::build(NoteName::from_pitch_class(0), Tonality::Major);
            }
        };
        Scale::build(root, self.tonality)
    }

    /// Practice flags
    pub fn settings(&self) -> TrainerSettings {
        TrainerSettings {
            ping_pong: self.ping_pong,
            hard_mode: self.hard_mode,
            shuffle: self.shuffle,
        }
    }

    /// Scales available to shuffle practice. Unknown ids are skipped with a
    /// diagnostic; an empty selection means the whole catalog.
    pub fn shuffle_pool(&self) -> Vec<Scale> {
        if self.scales.is_empty() {
            return Scale::catalog();
        }
        self.scales
            .iter()
            .filter_map(|id| match Scale::parse(id) {
                Ok(scale) => Some(scale),
                Err(_) => {
                    warn!(id = %id, "skipping unknown scale id in shuffle pool");
                    None
                }
            })
            .collect()
    }

    /// Build a practice session from this configuration
    pub fn session(&self) -> PracticeSession {
        PracticeSession::new(self.scale(), self.mode, self.settings())
            .with_range(self.range_first, self.range_last)
            .with_shuffle_pool(self.shuffle_pool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_config() {
        let yaml = r#"
key: "f#"
tonality: natural_minor
mode: chords
ping_pong: true
"#;

        let config = SessionFile::from_yaml(yaml).unwrap();
        assert_eq!(config.key, "f#");
        assert_eq!(config.tonality, Tonality::NaturalMinor);
        assert_eq!(config.mode, PracticeMode::Chords);
        assert!(config.ping_pong);
        assert!(!config.hard_mode);

        let scale = config.scale();
        assert_eq!(scale.id().to_string(), "f-sharp-minor-natural");
    }

    #[test]
    fn test_default_values() {
        let config = SessionFile::from_yaml("{}").unwrap();
        assert_eq!(config, SessionFile::default());
        assert_eq!(config.scale().id().to_string(), "c-major");
        assert_eq!(config.range_first, 48);
        assert_eq!(config.range_last, 72);
    }

    #[test]
    fn test_invalid_key_degrades_to_c_major() {
        let config = SessionFile {
            key: "h".to_string(),
            ..Default::default()
        };
        assert_eq!(config.scale().id().to_string(), "c-major");
    }

    #[test]
    fn test_shuffle_pool() {
        let config = SessionFile {
            scales: vec![
                "c-major".to_string(),
                "a-minor-natural".to_string(),
                "bogus".to_string(),
            ],
            ..Default::default()
        };
        let pool = config.shuffle_pool();
        assert_eq!(pool.len(), 2);

        let everything = SessionFile::default().shuffle_pool();
        assert_eq!(everything.len(), 32);
    }

    #[test]
    fn test_round_trip() {
        let original = SessionFile {
            key: "eb".to_string(),
            tonality: Tonality::Major,
            mode: PracticeMode::Fifths,
            ping_pong: true,
            hard_mode: true,
            shuffle: true,
            scales: vec!["e-flat-major".to_string()],
            range_first: 36,
            range_last: 84,
            midi_source: Some(1),
        };

        let yaml = original.to_yaml().unwrap();
        let parsed = SessionFile::from_yaml(&yaml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");

        let config = SessionFile {
            key: "g".to_string(),
            mode: PracticeMode::SeventhChords,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = SessionFile::load(&path).unwrap();
        assert_eq!(config, loaded);
    }
}
