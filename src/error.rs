// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Errors raised when constructing or parsing music values.

use snafu::Snafu;

/// Everything that can go wrong when building pitches, intervals, chords or fretboards.
/// Arithmetic on already constructed values never fails.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TheoryError {
    #[snafu(display("Octave {} is negative", octave))]
    InvalidOctave { octave: i32 },
    #[snafu(display("Interval of {} semitones is outside of 0..=24", semitones))]
    InvalidInterval { semitones: i32 },
    #[snafu(display("Unknown interval name {:?}", name))]
    UnknownInterval { name: String },
    #[snafu(display("Unknown note name {:?}", name))]
    UnknownNote { name: String },
    #[snafu(display("Pitch {:?} is not of the form <note><octave>", name))]
    UnknownPitch { name: String },
    #[snafu(display("Unknown chord formula {:?}", name))]
    UnknownFormula { name: String },
    #[snafu(display("Chord formula {:?} must start with the root interval", name))]
    InvalidFormula { name: String },
    #[snafu(display("Unknown tuning {:?}", name))]
    UnknownTuning { name: String },
    #[snafu(display("Invalid tuning configuration: {}", reason))]
    InvalidTuningConfig { reason: &'static str },
}
