// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The practice controller.
//!
//! Routes press/release events into the chord stack, evaluates the match
//! synchronously per event, and drives the progression forward on success.
//! Advancing and clearing the stack happen as one step; events are never
//! interleaved mid-evaluation because the session reacts to one event at a
//! time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::music::{fifth_from, seventh_from, triad_from, MidiNote, Scale};

use super::chord_stack::ChordStack;
use super::matcher::is_satisfied;
use super::progression::Progression;
use super::{PracticeMode, TrainerSettings};

/// Default keyboard range shown by the trainer: C3 through C5
pub const DEFAULT_RANGE: (MidiNote, MidiNote) = (48, 72);

/// One active practice session. Exclusively owns its chord stack and
/// progression state.
pub struct PracticeSession {
    scale: Scale,
    mode: PracticeMode,
    settings: TrainerSettings,
    progression: Progression,
    stack: ChordStack,
    /// Target that last triggered an advance; residual chord-stack entries
    /// for the same target must not trigger a second advance.
    last_processed: Option<MidiNote>,
    range_first: MidiNote,
    range_last: MidiNote,
    shuffle_pool: Vec<Scale>,
    rng: StdRng,
}

impl PracticeSession {
    pub fn new(scale: Scale, mode: PracticeMode, settings: TrainerSettings) -> Self {
        let progression = Progression::new(&scale);
        Self {
            scale,
            mode,
            settings,
            progression,
            stack: ChordStack::new(),
            last_processed: None,
            range_first: DEFAULT_RANGE.0,
            range_last: DEFAULT_RANGE.1,
            shuffle_pool: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Restrict which notes the session reacts to. Events outside the range
    /// are ignored, which also covers stale events from a device that was
    /// configured against a previous session.
    pub fn with_range(mut self, first: MidiNote, last: MidiNote) -> Self {
        self.range_first = first;
        self.range_last = last;
        self
    }

    /// Scales shuffle practice may hop to when the sequence wraps
    pub fn with_shuffle_pool(mut self, pool: Vec<Scale>) -> Self {
        self.shuffle_pool = pool;
        self
    }

    /// Seed the shuffle RNG, for deterministic tests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Handle a key press or MIDI note-on. Returns true when the event
    /// completed the current target and the progression advanced.
    pub fn note_on(&mut self, midi: MidiNote) -> bool {
        if !self.in_range(midi) {
            debug!(midi, "ignoring note-on outside keyboard range");
            return false;
        }
        self.stack.add(midi);
        self.evaluate()
    }

    /// Handle a key release or MIDI note-off
    pub fn note_off(&mut self, midi: MidiNote) {
        if !self.in_range(midi) {
            debug!(midi, "ignoring note-off outside keyboard range");
            return;
        }
        self.stack.remove(midi);
    }

    /// Notes to highlight on the keyboard for the current mode. Hard mode
    /// shows the previously satisfied note instead of the target.
    pub fn active_notes(&self) -> Vec<MidiNote> {
        let basis = if self.settings.hard_mode {
            self.progression.prev()
        } else {
            self.progression.target()
        };

        match self.mode {
            PracticeMode::Scales => vec![basis],
            PracticeMode::Chords => triad_from(basis, &self.scale),
            PracticeMode::SeventhChords => seventh_from(basis, &self.scale),
            PracticeMode::Fifths => vec![basis, fifth_from(basis, &self.scale)],
        }
    }

    /// Swap the active scale. Discards in-flight chord input and restarts
    /// the progression; stale state never survives a configuration change.
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
        self.invalidate();
    }

    pub fn set_mode(&mut self, mode: PracticeMode) {
        self.mode = mode;
        self.invalidate();
    }

    pub fn set_ping_pong(&mut self, ping_pong: bool) {
        self.settings.ping_pong = ping_pong;
        self.invalidate();
    }

    pub fn set_hard_mode(&mut self, hard_mode: bool) {
        self.settings.hard_mode = hard_mode;
        self.invalidate();
    }

    /// Toggling shuffle does not restart the current pass
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.settings.shuffle = shuffle;
    }

    /// Restart the session, e.g. when switching screens
    pub fn reset(&mut self) {
        self.invalidate();
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn settings(&self) -> TrainerSettings {
        self.settings
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn chord_stack(&self) -> &ChordStack {
        &self.stack
    }

    fn in_range(&self, midi: MidiNote) -> bool {
        midi >= self.range_first && midi <= self.range_last
    }

    fn invalidate(&mut self) {
        self.progression.reset(&self.scale);
        self.stack.clear();
        self.last_processed = None;
    }

    /// Evaluate the stack against the current target. On success the
    /// advance and the stack clear happen together, and the satisfied
    /// target is remembered so it cannot re-trigger.
    fn evaluate(&mut self) -> bool {
        let target = self.progression.target();
        if self.last_processed == Some(target) {
            return false;
        }
        if !is_satisfied(&self.stack, target, &self.scale, self.mode) {
            return false;
        }

        self.last_processed = Some(target);
        let wrapped = self.progression.advance(
            &self.scale,
            self.settings.ping_pong,
            self.settings.hard_mode,
        );
        self.stack.clear();

        if wrapped && self.settings.shuffle {
            self.shuffle_scale();
        }
        true
    }

    /// Hop to a random scale from the pool and restart the progression
    fn shuffle_scale(&mut self) {
        if self.shuffle_pool.is_empty() {
            return;
        }
        let pick = self.rng.gen_range(0..self.shuffle_pool.len());
        let next = self.shuffle_pool[pick].clone();
        debug!(scale = %next.id(), "shuffle hop");
        self.scale = next;
        self.invalidate();
    }
}
