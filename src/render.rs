// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Plain text output of fretboard search results, one line per string.

use std::fmt::Write;

use crate::chord::Chord;
use crate::fretboard::{PitchClassPositions, PitchPositions, Tuning};
use crate::pitch_class::PitchClass;

/// List the frets of every string, labelled with the open string.
pub fn pitch_class_positions(tuning: &Tuning, positions: &PitchClassPositions) -> String {
    render_lines(tuning, |string| match positions.get(&string) {
        Some(frets) if !frets.is_empty() => frets
            .iter()
            .map(|fret| fret.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        _ => "-".to_string(),
    })
}

/// List the fret of every string, labelled with the open string.
pub fn pitch_positions(tuning: &Tuning, positions: &PitchPositions) -> String {
    render_lines(tuning, |string| match positions.get(&string) {
        Some(Some(fret)) => fret.to_string(),
        _ => "-".to_string(),
    })
}

/// The tones of a chord followed by the positions of each tone,
/// as returned by [`Fretboard::find_chord`](crate::fretboard::Fretboard::find_chord).
pub fn chord_positions(
    tuning: &Tuning,
    chord: &Chord,
    positions: &[(PitchClass, PitchClassPositions)],
) -> String {
    let tones: Vec<String> = chord.tones().iter().map(|tone| tone.to_string()).collect();
    let mut out = format!("{}: {}\n", chord, tones.join(" "));
    let intervals = chord.formula().intervals();
    for ((tone, tone_positions), interval) in positions.iter().zip(intervals) {
        writeln!(&mut out, "{} ({})", tone, interval).unwrap();
        for line in pitch_class_positions(tuning, tone_positions).lines() {
            writeln!(&mut out, "  {}", line).unwrap();
        }
    }
    out
}

fn render_lines<F: Fn(usize) -> String>(tuning: &Tuning, cell: F) -> String {
    let labels: Vec<String> = tuning.strings().iter().map(|open| open.to_string()).collect();
    let width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (string, label) in labels.iter().enumerate() {
        writeln!(&mut out, "{:<width$} | {}", label, cell(string), width = width).unwrap();
    }
    out
}
