// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! etude - a piano practice progression engine.
//!
//! Presents a target note, chord, or interval on a keyboard, listens for the
//! player's input, and advances the training sequence when the right notes
//! are played. The engine is a library: rendering, sound, and preference
//! persistence belong to the consuming application. Input arrives as a
//! serialized stream of note-on/note-off events; the engine reacts to one
//! event at a time and never blocks.

pub mod config;
pub mod midi;
pub mod music;
pub mod trainer;
