// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for etude
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale construction and catalog building
//! - Chord and interval derivation
//! - Match evaluation throughput
//! - MIDI message parsing
//! - End-to-end event handling in a practice session

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use etude::midi::MidiMessage;
use etude::music::{fifth_from, seventh_from, triad_from, Scale, Tonality};
use etude::trainer::{is_satisfied, ChordStack, PracticeMode, PracticeSession, TrainerSettings};

fn c_major() -> Scale {
    Scale::build("c".parse().unwrap(), Tonality::Major)
}

/// Benchmark building a single scale and the full catalog
fn bench_scale_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_construction");

    group.bench_function("single", |b| {
        let root = "f#".parse().unwrap();
        b.iter(|| Scale::build(black_box(root), Tonality::MelodicMinor))
    });

    group.bench_function("catalog", |b| b.iter(|| black_box(Scale::catalog().len())));

    group.finish();
}

/// Benchmark chord derivation over every degree of the scale
fn bench_chord_derivation(c: &mut Criterion) {
    let scale = c_major();
    let mut group = c.benchmark_group("chord_derivation");

    group.bench_function("triads", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for &(note, _) in scale.degrees() {
                total += triad_from(black_box(note), &scale).len() as u32;
            }
            black_box(total)
        })
    });

    group.bench_function("sevenths", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for &(note, _) in scale.degrees() {
                total += seventh_from(black_box(note), &scale).len() as u32;
            }
            black_box(total)
        })
    });

    group.bench_function("fifths", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for &(note, _) in scale.degrees() {
                total += fifth_from(black_box(note), &scale) as u32;
            }
            black_box(total)
        })
    });

    group.finish();
}

/// Benchmark match evaluation against stacks of varying size
fn bench_match_evaluation(c: &mut Criterion) {
    let scale = c_major();
    let mut group = c.benchmark_group("match_evaluation");

    for size in [1usize, 4, 10].iter() {
        let mut stack = ChordStack::new();
        for i in 0..*size {
            stack.add(48 + (i as u8 % 24));
        }

        group.bench_with_input(BenchmarkId::new("chords", size), &stack, |b, stack| {
            b.iter(|| is_satisfied(black_box(stack), 48, &scale, PracticeMode::Chords))
        });
    }

    group.finish();
}

/// Benchmark raw MIDI byte parsing
fn bench_midi_parsing(c: &mut Criterion) {
    let messages: Vec<Vec<u8>> = vec![
        vec![0x90, 60, 100], // Note on
        vec![0x90, 60, 0],   // Note on, velocity 0
        vec![0x80, 60, 64],  // Note off
        vec![0xB0, 7, 127],  // CC
    ];

    c.bench_function("midi_parsing", |b| {
        b.iter(|| {
            let mut count = 0;
            for _ in 0..1000 {
                for msg in &messages {
                    if MidiMessage::parse(black_box(msg)).is_some() {
                        count += 1;
                    }
                }
            }
            black_box(count)
        })
    });
}

/// Benchmark a full scale pass through the session, key events included
fn bench_session_pass(c: &mut Criterion) {
    c.bench_function("session_scale_pass", |b| {
        b.iter(|| {
            let mut session = PracticeSession::new(
                c_major(),
                PracticeMode::Scales,
                TrainerSettings::default(),
            );
            let mut advances = 0u32;
            for note in [48u8, 50, 52, 53, 55, 57, 59, 60] {
                if session.note_on(black_box(note)) {
                    advances += 1;
                }
                session.note_off(note);
            }
            black_box(advances)
        })
    });
}

criterion_group!(
    benches,
    bench_scale_construction,
    bench_chord_derivation,
    bench_match_evaluation,
    bench_midi_parsing,
    bench_session_pass,
);

criterion_main!(benches);
