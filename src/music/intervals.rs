// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval derivation: triads, seventh chords, and fifths within a scale.
//!
//! All derivations are scale-relative. Chord tones are picked by walking the
//! scale degrees in thirds and octave-correcting upward so the stack is
//! always ascending. A root that is not a degree of the scale yields an
//! empty or identity result, never an error; callers validate membership
//! first when they need strict behavior.

use tracing::{debug, warn};

use super::scale::{Scale, SCALE_DEGREES};
use super::{MidiNote, OCTAVE};

/// Wrap length for chord-tone walking: the seven distinct degrees, skipping
/// the octave-doubled root.
const DISTINCT_DEGREES: usize = SCALE_DEGREES - 1;

/// The triad (three notes stacked in scale thirds) rooted at `root`.
///
/// Returns an empty vector when `root` is not a degree of the scale.
pub fn triad_from(root: MidiNote, scale: &Scale) -> Vec<MidiNote> {
    let Some(root_idx) = scale.position(root) else {
        debug!(root, scale = %scale.id(), "triad root not in scale");
        return Vec::new();
    };

    let mut second = scale.note_at((root_idx + 2) % DISTINCT_DEGREES);
    let second_idx = scale.position(second).unwrap_or(0);
    let mut third = scale.note_at((second_idx + 2) % DISTINCT_DEGREES);

    if second < root {
        second += OCTAVE;
    }
    if third < second {
        third += OCTAVE;
    }

    vec![root, second, third]
}

/// The seventh chord (four notes stacked in scale thirds) rooted at `root`.
///
/// Returns an empty vector when `root` is not a degree of the scale.
pub fn seventh_from(root: MidiNote, scale: &Scale) -> Vec<MidiNote> {
    let Some(root_idx) = scale.position(root) else {
        debug!(root, scale = %scale.id(), "seventh root not in scale");
        return Vec::new();
    };

    let mut second = scale.note_at((root_idx + 2) % DISTINCT_DEGREES);
    let second_idx = scale.position(second).unwrap_or(0);
    let mut third = scale.note_at((second_idx + 2) % DISTINCT_DEGREES);
    let third_idx = scale.position(third).unwrap_or(0);
    let mut fourth = scale.note_at((third_idx + 2) % DISTINCT_DEGREES);

    if second < root {
        second += OCTAVE;
    }
    if third < second {
        third += OCTAVE;
    }
    if fourth < third {
        fourth += OCTAVE;
    }

    vec![root, second, third, fourth]
}

/// The scale fifth of `root`: the degree four steps ahead, wrapping over the
/// full eight-degree list, raised by whole octaves until it sounds at or
/// above the root. One rule for every tonality.
///
/// Returns `root` unchanged when it is not a degree of the scale, so callers
/// treat the result as "no fifth available" rather than a fault.
pub fn fifth_from(root: MidiNote, scale: &Scale) -> MidiNote {
    let Some(root_idx) = scale.position(root) else {
        debug!(root, scale = %scale.id(), "fifth root not in scale");
        return root;
    };

    let mut fifth = scale.note_at((root_idx + 4) % SCALE_DEGREES);
    while fifth < root {
        fifth += OCTAVE;
    }
    fifth
}

/// The fifth above `root` together with its mirror fifth below, as
/// `[below, above]`. The quiz accepts either direction as a correct answer.
///
/// Returns an empty vector when `root` is not a degree of the scale.
pub fn both_fifths_from(root: MidiNote, scale: &Scale) -> Vec<MidiNote> {
    let Some(root_idx) = scale.position(root) else {
        warn!(root, scale = %scale.id(), "cannot derive fifths, root not in scale");
        return Vec::new();
    };

    let above = scale.note_at((root_idx + 4) % SCALE_DEGREES);
    let mirrored: Vec<MidiNote> = scale.degrees().iter().rev().map(|&(n, _)| n).collect();
    let below = mirrored[(root_idx + 4) % SCALE_DEGREES];

    vec![below, above]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale::Tonality;
    use crate::music::note_name;

    fn c_major() -> Scale {
        Scale::build("c".parse().unwrap(), Tonality::Major)
    }

    #[test]
    fn test_triad_from_root() {
        assert_eq!(triad_from(48, &c_major()), vec![48, 52, 55]); // C E G
    }

    #[test]
    fn test_triad_wraps_with_octave_correction() {
        // A minor triad from the 6th degree: A C E, stacked upward
        assert_eq!(triad_from(57, &c_major()), vec![57, 60, 64]);
        // From the octave-doubled root the triad restarts on C
        assert_eq!(triad_from(60, &c_major()), vec![60, 64, 67]);
    }

    #[test]
    fn test_triad_root_not_in_scale() {
        assert!(triad_from(49, &c_major()).is_empty());
    }

    #[test]
    fn test_seventh_from_root() {
        assert_eq!(seventh_from(48, &c_major()), vec![48, 52, 55, 59]); // Cmaj7
    }

    #[test]
    fn test_seventh_wraps_with_octave_correction() {
        // Am7 from the 6th degree: A C E G
        assert_eq!(seventh_from(57, &c_major()), vec![57, 60, 64, 67]);
    }

    #[test]
    fn test_seventh_root_not_in_scale() {
        assert!(seventh_from(49, &c_major()).is_empty());
    }

    #[test]
    fn test_fifth_of_c_is_g() {
        let fifth = fifth_from(48, &c_major());
        assert_eq!(fifth, 55);
        assert_eq!(note_name(fifth).to_string(), "g");
    }

    #[test]
    fn test_fifth_octave_corrects_upward() {
        // From the octave root the wrapped degree (F) sits below; it must be
        // raised above the root
        assert_eq!(fifth_from(60, &c_major()), 65);
    }

    #[test]
    fn test_fifth_never_below_root_any_scale() {
        for scale in Scale::catalog() {
            for &(midi, _) in scale.degrees() {
                assert!(
                    fifth_from(midi, &scale) >= midi,
                    "fifth below root for {} degree {}",
                    scale.id(),
                    midi
                );
            }
        }
    }

    #[test]
    fn test_fifth_identity_when_root_absent() {
        assert_eq!(fifth_from(49, &c_major()), 49);
    }

    #[test]
    fn test_both_fifths() {
        // F is the mirror fifth below C, G the fifth above
        assert_eq!(both_fifths_from(48, &c_major()), vec![53, 55]);
    }

    #[test]
    fn test_both_fifths_root_absent() {
        assert!(both_fifths_from(49, &c_major()).is_empty());
    }
}
