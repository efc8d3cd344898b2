// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Pitches are pitch classes in a specific octave.

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::TheoryError;
use crate::interval::Shift;
use crate::pitch_class::PitchClass;

/// Returned by [`Pitch::frequency`] while frequencies are not computed.
pub const FREQUENCY_NOT_COMPUTED: f64 = 0.0;

/// A pitch class bound to an octave, where the octave starts at C.
/// C4 is middle C, and the octave is never negative.
///
/// Pitches are ordered by their absolute semitone count `note + 12 * octave`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pitch {
    note: PitchClass,
    octave: u32,
}

impl Pitch {
    /// The lowest representable pitch. Transposing below it ends up here.
    pub const FLOOR: Pitch = Pitch::at(PitchClass::C, 0);

    /// The highest representable pitch. Transposing above it ends up here.
    pub const CEILING: Pitch = Pitch::at(PitchClass::B, u32::MAX);

    /// Create a pitch, failing if the octave is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use fretster::pitch::*;
    /// use fretster::pitch_class::PitchClass;
    ///
    /// let a3 = Pitch::new(PitchClass::A, 3).unwrap();
    /// assert_eq!(a3.absolute_semitone(), 45);
    /// assert!(Pitch::new(PitchClass::A, -1).is_err());
    /// ```
    pub fn new(note: PitchClass, octave: i32) -> Result<Pitch, TheoryError> {
        if octave < 0 {
            return Err(TheoryError::InvalidOctave { octave });
        }
        Ok(Pitch::at(note, octave as u32))
    }

    /// Create a pitch from an octave that is known to be valid.
    pub const fn at(note: PitchClass, octave: u32) -> Pitch {
        Pitch { note, octave }
    }

    /// The pitch the given number of semitones above C0.
    /// Negative values are clamped to [`Pitch::FLOOR`], values beyond the last octave
    /// to [`Pitch::CEILING`].
    pub fn from_absolute(semitone: i64) -> Pitch {
        if semitone < 0 {
            return Pitch::FLOOR;
        }
        match u32::try_from(semitone / 12) {
            Ok(octave) => Pitch {
                note: PitchClass::new((semitone % 12) as i32),
                octave,
            },
            Err(_) => Pitch::CEILING,
        }
    }

    /// Parse a name of the format `<note><octave>`, e.g. `A3`, `C#4` or `Gb2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretster::pitch::*;
    /// # use fretster::pitch_class::PitchClass;
    ///
    /// assert_eq!(Pitch::from_name("E2"), Pitch::new(PitchClass::E, 2));
    /// assert_eq!(Pitch::from_name("C♯6"), Pitch::new(PitchClass::C_SHARP, 6));
    /// assert!(Pitch::from_name("E").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Pitch, TheoryError> {
        let note_str = name.trim_end_matches(|ch: char| ch.is_ascii_digit());
        let octave_str = &name[note_str.len()..];
        let octave: u32 = octave_str.parse().map_err(|_| TheoryError::UnknownPitch {
            name: name.to_string(),
        })?;
        // Spellings like Cb4 or B#3 cross into the neighbouring octave.
        let semitone = i64::from(PitchClass::spelled_index(note_str)?) + 12 * i64::from(octave);
        if semitone < 0 {
            return Err(TheoryError::InvalidOctave { octave: -1 });
        }
        Ok(Pitch::from_absolute(semitone))
    }

    pub fn note(&self) -> PitchClass {
        self.note
    }

    pub fn octave(&self) -> u32 {
        self.octave
    }

    pub fn set_note(&mut self, note: PitchClass) {
        if self.note == note {
            return;
        }
        trace!("{} changes note to {}", self, note);
        self.note = note;
    }

    /// Move the pitch into another octave, failing if the octave is negative.
    pub fn set_octave(&mut self, octave: i32) -> Result<(), TheoryError> {
        if i64::from(octave) == i64::from(self.octave) {
            return Ok(());
        }
        if octave < 0 {
            return Err(TheoryError::InvalidOctave { octave });
        }
        trace!("{} changes octave to {}", self, octave);
        self.octave = octave as u32;
        Ok(())
    }

    /// Frequency of this pitch in Hz.
    ///
    /// Not computed yet: this always returns [`FREQUENCY_NOT_COMPUTED`].
    // TODO: derive from a concert pitch reference (A4 = 440 Hz) once playback needs it.
    pub fn frequency(&self) -> f64 {
        FREQUENCY_NOT_COMPUTED
    }

    /// Number of semitones above C0.
    pub fn absolute_semitone(&self) -> i64 {
        i64::from(self.note.index()) + 12 * i64::from(self.octave)
    }

    /// Transpose by a number of semitones, moving across octaves as needed.
    /// Going below C0 yields [`Pitch::FLOOR`] instead of a negative octave,
    /// going past the last octave yields [`Pitch::CEILING`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretster::pitch::*;
    /// # use fretster::pitch_class::PitchClass;
    ///
    /// let b3 = Pitch::new(PitchClass::B, 3).unwrap();
    /// assert_eq!(b3.add_semitones(1), Pitch::new(PitchClass::C, 4).unwrap());
    /// assert_eq!(b3.add_semitones(-100), Pitch::FLOOR);
    /// ```
    pub fn add_semitones(self, semitones: i32) -> Pitch {
        Pitch::from_absolute(self.absolute_semitone() + i64::from(semitones))
    }

    pub fn subtract_semitones(self, semitones: i32) -> Pitch {
        Pitch::from_absolute(self.absolute_semitone() - i64::from(semitones))
    }

    /// Transpose upwards by a semitone count or an interval.
    pub fn add<S: Into<Shift>>(self, by: S) -> Pitch {
        self.add_semitones(by.into().semitones())
    }

    /// Transpose downwards by a semitone count or an interval.
    pub fn subtract<S: Into<Shift>>(self, by: S) -> Pitch {
        self.subtract_semitones(by.into().semitones())
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_semitone().cmp(&other.absolute_semitone())
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note.display_name(), self.octave)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pitch::from_name(s)
    }
}
