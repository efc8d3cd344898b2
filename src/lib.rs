// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Pitch classes, intervals, chords and pitches, and where to find them on a fretboard.

pub mod chord;
pub mod error;
pub mod fretboard;
pub mod interval;
pub mod pitch;
pub mod pitch_class;
pub mod render;

pub use error::TheoryError;
