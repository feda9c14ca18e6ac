// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI input for the trainer.
//!
//! Decodes raw MIDI bytes from a connected keyboard into the note-on and
//! note-off events the practice session consumes. Device enumeration and
//! the transport itself come from midir; the engine only sees decoded
//! events.

pub mod input;

pub use input::{list_sources, print_sources, MidiInput, MidiMessage};

/// MIDI status byte constants
pub mod messages {
    // Channel Voice Messages (upper nibble, lower nibble is channel 0-15)
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
}
