// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The sequencing state machine that walks a scale's degrees.
//!
//! Tracks the current, target, and previous notes plus a monotonic step
//! counter. Direction is derived by comparing the current note to the
//! scale's terminal degrees; there is no separate state enum and no
//! terminal state — the progression loops indefinitely.

use crate::music::{MidiNote, Scale};

/// Walking direction through the scale degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Progression state for one practice session.
///
/// Mutated only by [`Progression::advance`] and [`Progression::reset`];
/// any change to the active scale or practice flags must reset it so stale
/// progression never survives a configuration change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    current: MidiNote,
    target: MidiNote,
    prev: MidiNote,
    counter: u32,
    direction: Direction,
}

impl Progression {
    /// Start at the scale's first degree: current, target, and previous all
    /// point at the root and the counter is zero.
    pub fn new(scale: &Scale) -> Self {
        let first = scale.first_note();
        Self {
            current: first,
            target: first,
            prev: first,
            counter: 0,
            direction: Direction::Up,
        }
    }

    /// Reset to the initial condition for the given scale
    pub fn reset(&mut self, scale: &Scale) {
        *self = Progression::new(scale);
    }

    /// The note most recently satisfied
    pub fn current(&self) -> MidiNote {
        self.current
    }

    /// The note the player must satisfy next
    pub fn target(&self) -> MidiNote {
        self.target
    }

    /// The previously satisfied note, shown instead of the target in hard
    /// mode
    pub fn prev(&self) -> MidiNote {
        self.prev
    }

    /// Count of successful advances since the last reset
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Step the progression after a successful match.
    ///
    /// The satisfied target becomes the current (and previous) note and the
    /// next target is chosen by direction: ascending degrees, wrapping to
    /// the root in linear mode, or reversing at the terminal degrees when
    /// `ping_pong` is set. On a linear wrap with `hard_mode` the previous
    /// note jumps to the root so the display leads into the new pass.
    ///
    /// Returns true when the walk arrived back at the first degree, which
    /// is what shuffle practice keys off.
    pub fn advance(&mut self, scale: &Scale, ping_pong: bool, hard_mode: bool) -> bool {
        self.counter += 1;
        self.current = self.target;
        self.prev = self.current;

        let first = scale.first_note();
        let last = scale.last_note();
        let index = scale.position(self.current).unwrap_or(0);

        if ping_pong && self.direction == Direction::Down {
            if self.current == first {
                // Bottom reached; climb again
                self.direction = Direction::Up;
                self.target = scale.note_at(index + 1);
            } else {
                self.target = scale.note_at(index - 1);
            }
        } else if self.current == last {
            if ping_pong {
                self.direction = Direction::Down;
                self.target = scale.note_at(index - 1);
            } else {
                self.target = first;
                if hard_mode {
                    self.prev = first;
                }
            }
        } else {
            self.target = scale.note_at((index + 1) % scale.len());
        }

        self.counter > 1 && self.current == first
    }
}
