// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `fretster` - looks up where notes and chords are played on a fretted instrument.

use std::error::Error;

use log::debug;
use structopt::StructOpt;

use fretster::chord::{self, Chord};
use fretster::fretboard::{self, Fretboard, Tuning};
use fretster::interval::INTERVAL_NAMES;
use fretster::pitch::Pitch;
use fretster::pitch_class::{Accidental, Anchor, PitchClass};
use fretster::render;

#[derive(Debug, StructOpt)]
#[structopt(name = "fretster", about = "Finding notes and chords on the fretboard")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Name of a predefined tuning, see `fretster tunings`.
    #[structopt(short, long, default_value = "standard")]
    tuning: String,

    /// Comma separated open strings, e.g. "D2,A2,D3,G3,B3,E4". Overrides --tuning.
    #[structopt(long)]
    strings: Option<String>,

    /// Number of frets on the neck, at most 36.
    #[structopt(short, long, default_value = "24")]
    frets: u32,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Find a note (e.g. "E") or an exact pitch (e.g. "A3") on every string.
    Find { target: String },
    /// Show the tones of a chord (e.g. "C_Maj7") and where to play them.
    Chord { name: String },
    /// Show the spellings and index of a note.
    Note {
        name: String,
        /// Which note counts as index 0, "c" or "a".
        #[structopt(long, default_value = "c")]
        anchor: Anchor,
    },
    /// List the predefined tunings.
    Tunings,
    /// List the chord formulas.
    Chords,
    /// List the interval names.
    Intervals,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)?;

    let tuning = match &opt.strings {
        Some(list) => Tuning::parse_strings("custom", list)?,
        None => Tuning::preset(&opt.tuning)?,
    };
    debug!("using {} tuning with {} frets", tuning.name(), opt.frets);

    match opt.command {
        Command::Find { target } => {
            let fretboard = Fretboard::new(tuning, opt.frets)?;
            let has_octave = target.chars().last().map_or(false, |ch| ch.is_ascii_digit());
            if has_octave {
                let pitch: Pitch = target.parse()?;
                let positions = fretboard.find_pitch(pitch);
                print!("{}", render::pitch_positions(fretboard.tuning(), &positions));
            } else {
                let note: PitchClass = target.parse()?;
                let positions = fretboard.find_pitch_class(note);
                print!(
                    "{}",
                    render::pitch_class_positions(fretboard.tuning(), &positions)
                );
            }
        }
        Command::Chord { name } => {
            let fretboard = Fretboard::new(tuning, opt.frets)?;
            let chord: Chord = name.parse()?;
            let positions = fretboard.find_chord(&chord);
            print!(
                "{}",
                render::chord_positions(fretboard.tuning(), &chord, &positions)
            );
        }
        Command::Note { name, anchor } => {
            let note: PitchClass = name.parse()?;
            println!("{}", note.display_name());
            println!("spellings: {}", note.spellings().join(", "));
            println!(
                "sharp: {}  flat: {}",
                note.glyph_name(Accidental::Sharp),
                note.glyph_name(Accidental::Flat)
            );
            println!("index ({:?} = 0): {}", anchor, note.anchored_index(anchor));
        }
        Command::Tunings => {
            for preset in fretboard::PRESETS.iter() {
                let strings: Vec<String> =
                    preset.strings().iter().map(|s| s.to_string()).collect();
                println!("{:<16} {}", preset.name(), strings.join(" "));
            }
        }
        Command::Chords => {
            for formula in chord::CATALOG.iter() {
                let intervals: Vec<&str> =
                    formula.intervals().iter().map(|i| i.name()).collect();
                println!(
                    "{:<10} {:<24} {}",
                    formula.name(),
                    formula.aliases().join(", "),
                    intervals.join(" ")
                );
            }
        }
        Command::Intervals => {
            for (semitones, names) in INTERVAL_NAMES.iter().enumerate() {
                println!("{:>2} {}", semitones, names.join(", "));
            }
        }
    }
    Ok(())
}
