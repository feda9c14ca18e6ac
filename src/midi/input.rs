// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI input handling for receiving note events from a keyboard.
//!
//! Parses raw bytes into note-on/note-off messages and delivers them over a
//! channel so the practice loop can drain them one at a time, in order.

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{anyhow, Result};
use midir::{Ignore, MidiInputConnection};

use super::messages;
use crate::music::MidiNote;

/// Parsed MIDI message types the trainer cares about
#[derive(Debug, Clone, PartialEq)]
pub enum MidiMessage {
    /// Note On: note (0-127), velocity (1-127)
    NoteOn { note: MidiNote, velocity: u8 },
    /// Note Off: note (0-127), velocity (0-127)
    NoteOff { note: MidiNote, velocity: u8 },
    /// Anything else (aftertouch, CC, clock); the trainer ignores these
    Unknown(Vec<u8>),
}

impl MidiMessage {
    /// Parse raw MIDI bytes into a MidiMessage
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        // Channel messages: upper nibble is the type, lower the channel
        let msg_type = data[0] & 0xF0;

        match msg_type {
            messages::NOTE_OFF if data.len() >= 3 => Some(MidiMessage::NoteOff {
                note: data[1] & 0x7F,
                velocity: data[2] & 0x7F,
            }),
            messages::NOTE_ON if data.len() >= 3 => {
                let velocity = data[2] & 0x7F;
                // Note On with velocity 0 is equivalent to Note Off
                if velocity == 0 {
                    Some(MidiMessage::NoteOff {
                        note: data[1] & 0x7F,
                        velocity: 0,
                    })
                } else {
                    Some(MidiMessage::NoteOn {
                        note: data[1] & 0x7F,
                        velocity,
                    })
                }
            }
            _ => Some(MidiMessage::Unknown(data.to_vec())),
        }
    }
}

/// MIDI input handler backed by midir
pub struct MidiInput {
    _connection: MidiInputConnection<()>,
    receiver: Receiver<MidiMessage>,
}

impl MidiInput {
    /// Create a new MIDI input connected to the specified source
    pub fn new(source_index: usize) -> Result<Self> {
        let mut midi_in = midir::MidiInput::new("etude input")
            .map_err(|e| anyhow!("Failed to create MIDI input: {}", e))?;
        midi_in.ignore(Ignore::None);

        let ports = midi_in.ports();
        let port = ports
            .get(source_index)
            .ok_or_else(|| anyhow!("MIDI source {} not found", source_index))?;

        let (tx, rx): (Sender<MidiMessage>, Receiver<MidiMessage>) = mpsc::channel();

        let connection = midi_in
            .connect(
                port,
                "etude input port",
                move |_timestamp, data, _| {
                    if let Some(msg) = MidiMessage::parse(data) {
                        let _ = tx.send(msg);
                    }
                },
                (),
            )
            .map_err(|e| anyhow!("Failed to connect to source: {}", e))?;

        Ok(Self {
            _connection: connection,
            receiver: rx,
        })
    }

    /// Try to receive the next MIDI message (non-blocking)
    pub fn try_recv(&self) -> Option<MidiMessage> {
        self.receiver.try_recv().ok()
    }

    /// Receive all pending MIDI messages
    pub fn recv_all(&self) -> Vec<MidiMessage> {
        let mut messages = Vec::new();
        while let Some(msg) = self.try_recv() {
            messages.push(msg);
        }
        messages
    }
}

/// List all available MIDI sources
pub fn list_sources() -> Vec<(usize, String)> {
    let Ok(midi_in) = midir::MidiInput::new("etude") else {
        return Vec::new();
    };

    midi_in
        .ports()
        .iter()
        .enumerate()
        .map(|(i, port)| {
            let name = midi_in
                .port_name(port)
                .unwrap_or_else(|_| format!("Unknown {}", i));
            (i, name)
        })
        .collect()
}

/// Print all available MIDI sources to stdout
pub fn print_sources() {
    let sources = list_sources();
    if sources.is_empty() {
        println!("No MIDI sources found.");
    } else {
        println!("Available MIDI sources (inputs):");
        for (i, name) in sources {
            println!("  {}: {}", i, name);
        }
    }
}
