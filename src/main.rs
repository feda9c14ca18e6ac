// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};

use etude::config::SessionFile;
use etude::midi::{print_sources, MidiInput, MidiMessage};
use etude::music::note_name;
use etude::trainer::PracticeSession;

fn print_usage() {
    println!("etude - Piano Practice Trainer");
    println!();
    println!("Usage: etude [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-sources          List available MIDI sources (inputs)");
    println!("  --config <FILE>         Load session settings from a YAML file");
    println!("  --source <N>            Read input from MIDI source N");
    println!("  --help                  Show this help message");
}

/// Render the current target as "note (numeral)"
fn describe_target(session: &PracticeSession) -> String {
    let target = session.progression().target();
    let numeral = session
        .scale()
        .position(target)
        .map(|i| session.scale().degrees()[i].1)
        .unwrap_or("?");
    format!("{} ({})", note_name(target), numeral)
}

fn run_practice(config: &SessionFile, source_override: Option<usize>) -> Result<()> {
    let source = source_override
        .or(config.midi_source)
        .ok_or_else(|| anyhow!("No MIDI source given; use --source or set midi_source"))?;

    let input = MidiInput::new(source)?;
    let mut session = config.session();

    println!(
        "Practicing {} / {} (ping-pong: {}, hard: {}, shuffle: {})",
        session.scale().label(),
        session.mode(),
        session.settings().ping_pong,
        session.settings().hard_mode,
        session.settings().shuffle,
    );
    println!("Play: {}", describe_target(&session));

    // Events are drained in arrival order and each one is fully evaluated
    // before the next is looked at
    loop {
        for msg in input.recv_all() {
            match msg {
                MidiMessage::NoteOn { note, .. } => {
                    if session.note_on(note) {
                        println!(
                            "  ok ({} steps) - play: {}",
                            session.progression().counter(),
                            describe_target(&session)
                        );
                    }
                }
                MidiMessage::NoteOff { note, .. } => session.note_off(note),
                MidiMessage::Unknown(_) => {}
            }
        }
        thread::sleep(Duration::from_millis(2));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let mut config = SessionFile::default();
    let mut source_override = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--list-sources" => {
                print_sources();
                return Ok(());
            }
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config = SessionFile::load(path)?;
                i += 1;
            }
            "--source" => {
                let n = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("--source requires an index"))?;
                source_override = Some(n.parse()?);
                i += 1;
            }
            other => {
                println!("Unknown option: {}", other);
                print_usage();
                return Ok(());
            }
        }
        i += 1;
    }

    run_practice(&config, source_override)
}
