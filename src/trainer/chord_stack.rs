// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The multiset of currently-held notes.
//!
//! Press events add, release events remove, and a successful match clears
//! the whole stack. Input devices can deliver duplicate or spurious release
//! events, so removal of an absent note is a no-op rather than an error.

use crate::music::MidiNote;

/// Ordered collection of held MIDI notes. The same pitch pressed on two
/// octaves yields two entries; matching compares by pitch class, not by
/// entry identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordStack {
    notes: Vec<MidiNote>,
}

impl ChordStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pressed note
    pub fn add(&mut self, midi: MidiNote) {
        self.notes.push(midi);
    }

    /// Remove one entry for a released note. Tolerates notes that were
    /// never added.
    pub fn remove(&mut self, midi: MidiNote) {
        if let Some(index) = self.notes.iter().position(|&n| n == midi) {
            self.notes.remove(index);
        }
    }

    /// Drop every held note
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Currently held notes in press order
    pub fn notes(&self) -> &[MidiNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check whether any held note has the given pitch class
    pub fn holds_pitch_class(&self, pc: u8) -> bool {
        self.notes.iter().any(|&n| n % 12 == pc % 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut stack = ChordStack::new();
        stack.add(48);
        stack.add(52);
        stack.add(55);
        assert_eq!(stack.notes(), &[48, 52, 55]);

        stack.remove(52);
        assert_eq!(stack.notes(), &[48, 55]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut stack = ChordStack::new();
        stack.add(48);
        stack.remove(60);
        assert_eq!(stack.notes(), &[48]);

        // Spurious release on an empty stack
        let mut empty = ChordStack::new();
        empty.remove(60);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_duplicate_pitches_are_distinct_entries() {
        let mut stack = ChordStack::new();
        stack.add(48);
        stack.add(60); // same pitch class, higher octave
        stack.add(48);
        assert_eq!(stack.len(), 3);

        // Removing one duplicate leaves the other
        stack.remove(48);
        assert_eq!(stack.notes(), &[60, 48]);
    }

    #[test]
    fn test_clear() {
        let mut stack = ChordStack::new();
        stack.add(48);
        stack.add(52);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_holds_pitch_class() {
        let mut stack = ChordStack::new();
        stack.add(60); // C one octave above the reference root
        assert!(stack.holds_pitch_class(0));
        assert!(stack.holds_pitch_class(48));
        assert!(!stack.holds_pitch_class(7));
    }
}
