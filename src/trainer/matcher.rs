// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Decides whether the held chord satisfies the current practice target.
//!
//! All comparisons are by pitch class, so any octave of a required note
//! counts, and extra simultaneously-held notes never invalidate a match.

use crate::music::{fifth_from, seventh_from, triad_from, MidiNote, Scale};

use super::chord_stack::ChordStack;
use super::PracticeMode;

/// Check whether the chord stack satisfies `target` under the given
/// practice mode.
///
/// Scales need any held note of the target's pitch class; chords, seventh
/// chords, and fifths need every pitch class of the derived set present at
/// once. A target whose derivation fails (root missing from the scale)
/// never matches.
pub fn is_satisfied(
    stack: &ChordStack,
    target: MidiNote,
    scale: &Scale,
    mode: PracticeMode,
) -> bool {
    if stack.is_empty() {
        return false;
    }

    match mode {
        PracticeMode::Scales => stack.holds_pitch_class(target),
        PracticeMode::Chords => all_held(stack, &triad_from(target, scale)),
        PracticeMode::SeventhChords => all_held(stack, &seventh_from(target, scale)),
        PracticeMode::Fifths => all_held(stack, &[target, fifth_from(target, scale)]),
    }
}

fn all_held(stack: &ChordStack, expected: &[MidiNote]) -> bool {
    !expected.is_empty() && expected.iter().all(|&note| stack.holds_pitch_class(note))
}
