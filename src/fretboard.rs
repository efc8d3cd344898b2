// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Finding notes on the neck of a fretted instrument.
//!
//! Strings are numbered from 0 in the order the tuning lists them,
//! fret 0 is the open string and every fret raises the pitch by a semitone.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::convert::TryFrom;

use log::{debug, trace};

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::interval::Interval;
use crate::pitch::Pitch;
use crate::pitch_class::PitchClass;

/// Number of frets searched when nothing else is configured.
pub const DEFAULT_FRET_COUNT: u32 = 24;

/// The longest neck a search accepts.
pub const MAX_FRET_COUNT: u32 = 36;

/// For every string, all frets playing a pitch class, in ascending order.
pub type PitchClassPositions = BTreeMap<usize, Vec<u32>>;

/// For every string, the fret playing an exact pitch, if there is one.
pub type PitchPositions = BTreeMap<usize, Option<u32>>;

/// The open strings of an instrument, in the order they are numbered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tuning {
    name: Cow<'static, str>,
    strings: Cow<'static, [Pitch]>,
}

const STANDARD_STRINGS: [Pitch; 6] = [
    Pitch::at(PitchClass::E, 2),
    Pitch::at(PitchClass::A, 2),
    Pitch::at(PitchClass::D, 3),
    Pitch::at(PitchClass::G, 3),
    Pitch::at(PitchClass::B, 3),
    Pitch::at(PitchClass::E, 4),
];
const DROP_D_STRINGS: [Pitch; 6] = [
    Pitch::at(PitchClass::D, 2),
    Pitch::at(PitchClass::A, 2),
    Pitch::at(PitchClass::D, 3),
    Pitch::at(PitchClass::G, 3),
    Pitch::at(PitchClass::B, 3),
    Pitch::at(PitchClass::E, 4),
];
const HALF_STEP_DOWN_STRINGS: [Pitch; 6] = [
    Pitch::at(PitchClass::E_FLAT, 2),
    Pitch::at(PitchClass::A_FLAT, 2),
    Pitch::at(PitchClass::D_FLAT, 3),
    Pitch::at(PitchClass::G_FLAT, 3),
    Pitch::at(PitchClass::B_FLAT, 3),
    Pitch::at(PitchClass::E_FLAT, 4),
];
const OPEN_G_STRINGS: [Pitch; 6] = [
    Pitch::at(PitchClass::D, 2),
    Pitch::at(PitchClass::G, 2),
    Pitch::at(PitchClass::D, 3),
    Pitch::at(PitchClass::G, 3),
    Pitch::at(PitchClass::B, 3),
    Pitch::at(PitchClass::D, 4),
];
const OPEN_D_STRINGS: [Pitch; 6] = [
    Pitch::at(PitchClass::D, 2),
    Pitch::at(PitchClass::A, 2),
    Pitch::at(PitchClass::D, 3),
    Pitch::at(PitchClass::F_SHARP, 3),
    Pitch::at(PitchClass::A, 3),
    Pitch::at(PitchClass::D, 4),
];
const DADGAD_STRINGS: [Pitch; 6] = [
    Pitch::at(PitchClass::D, 2),
    Pitch::at(PitchClass::A, 2),
    Pitch::at(PitchClass::D, 3),
    Pitch::at(PitchClass::G, 3),
    Pitch::at(PitchClass::A, 3),
    Pitch::at(PitchClass::D, 4),
];
const BASS_STRINGS: [Pitch; 4] = [
    Pitch::at(PitchClass::E, 1),
    Pitch::at(PitchClass::A, 1),
    Pitch::at(PitchClass::D, 2),
    Pitch::at(PitchClass::G, 2),
];
const UKULELE_STRINGS: [Pitch; 4] = [
    Pitch::at(PitchClass::G, 4),
    Pitch::at(PitchClass::C, 4),
    Pitch::at(PitchClass::E, 4),
    Pitch::at(PitchClass::A, 4),
];

/// Every predefined tuning. Adding an entry here makes it available by name.
pub static PRESETS: [Tuning; 8] = [
    Tuning::STANDARD,
    Tuning::builtin("drop-d", &DROP_D_STRINGS),
    Tuning::builtin("half-step-down", &HALF_STEP_DOWN_STRINGS),
    Tuning::builtin("open-g", &OPEN_G_STRINGS),
    Tuning::builtin("open-d", &OPEN_D_STRINGS),
    Tuning::builtin("dadgad", &DADGAD_STRINGS),
    Tuning::builtin("bass", &BASS_STRINGS),
    Tuning::builtin("ukulele", &UKULELE_STRINGS),
];

impl Tuning {
    /// E2 A2 D3 G3 B3 E4
    pub const STANDARD: Tuning = Tuning::builtin("standard", &STANDARD_STRINGS);

    const fn builtin(name: &'static str, strings: &'static [Pitch]) -> Tuning {
        Tuning {
            name: Cow::Borrowed(name),
            strings: Cow::Borrowed(strings),
        }
    }

    /// Create a tuning from its open strings. There must be at least one string.
    pub fn new<N: Into<String>>(name: N, strings: Vec<Pitch>) -> Result<Tuning, TheoryError> {
        if strings.is_empty() {
            return Err(TheoryError::InvalidTuningConfig {
                reason: "tuning has no strings",
            });
        }
        Ok(Tuning {
            name: Cow::Owned(name.into()),
            strings: Cow::Owned(strings),
        })
    }

    /// Parse a comma separated list of pitches, e.g. `D2,A2,D3,G3,B3,E4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fretster::fretboard::*;
    ///
    /// let tuning = Tuning::parse_strings("custom", "E2, A2, D3, G3, B3, E4").unwrap();
    /// assert_eq!(tuning.strings(), Tuning::STANDARD.strings());
    /// assert!(Tuning::parse_strings("empty", "").is_err());
    /// ```
    pub fn parse_strings<N: Into<String>>(name: N, list: &str) -> Result<Tuning, TheoryError> {
        let strings = list
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Pitch::from_name)
            .collect::<Result<Vec<_>, _>>()?;
        Tuning::new(name, strings)
    }

    /// Look up one of the [`PRESETS`] by name.
    pub fn preset(name: &str) -> Result<Tuning, TheoryError> {
        PRESETS
            .iter()
            .find(|tuning| tuning.name == name)
            .cloned()
            .ok_or_else(|| TheoryError::UnknownTuning {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    /// The open strings without their octaves.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.strings.iter().map(|string| string.note()).collect()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

fn validate(strings: usize, fret_count: u32) -> Result<(), TheoryError> {
    if strings == 0 {
        Err(TheoryError::InvalidTuningConfig {
            reason: "tuning has no strings",
        })
    } else if fret_count == 0 {
        Err(TheoryError::InvalidTuningConfig {
            reason: "fret count must be positive",
        })
    } else if fret_count > MAX_FRET_COUNT {
        Err(TheoryError::InvalidTuningConfig {
            reason: "fret count exceeds 36",
        })
    } else {
        Ok(())
    }
}

/// Find every fret from 0 up to and including `fret_count` that plays `target`, on every string.
/// Since pitch classes repeat every twelve frets, a string may have several matches.
///
/// # Examples
///
/// ```
/// use fretster::fretboard::*;
/// use fretster::pitch_class::PitchClass;
///
/// let tuning = Tuning::STANDARD.pitch_classes();
/// let positions = find_pitch_class(PitchClass::E, &tuning, 24).unwrap();
/// assert_eq!(positions[&0], vec![0, 12, 24]);
/// assert_eq!(positions[&1], vec![7, 19]);
/// ```
pub fn find_pitch_class(
    target: PitchClass,
    tuning: &[PitchClass],
    fret_count: u32,
) -> Result<PitchClassPositions, TheoryError> {
    validate(tuning.len(), fret_count)?;
    debug!(
        "searching {} on {} strings and {} frets",
        target,
        tuning.len(),
        fret_count
    );
    Ok(scan_pitch_class(target, tuning, fret_count))
}

/// Find the fret from 0 up to and including `fret_count` that plays exactly `target`, on every string.
/// The pitch rises with every fret, so there is at most one such fret per string.
///
/// # Examples
///
/// ```
/// use fretster::fretboard::*;
/// use fretster::pitch::Pitch;
///
/// let a3: Pitch = "A3".parse().unwrap();
/// let positions = find_pitch(a3, Tuning::STANDARD.strings(), 24).unwrap();
/// assert_eq!(positions[&1], Some(12));
/// assert_eq!(positions[&5], None);
/// ```
pub fn find_pitch(
    target: Pitch,
    tuning: &[Pitch],
    fret_count: u32,
) -> Result<PitchPositions, TheoryError> {
    validate(tuning.len(), fret_count)?;
    debug!(
        "searching {} on {} strings and {} frets",
        target,
        tuning.len(),
        fret_count
    );
    Ok(scan_pitch(target, tuning, fret_count))
}

fn scan_pitch_class(
    target: PitchClass,
    tuning: &[PitchClass],
    fret_count: u32,
) -> PitchClassPositions {
    tuning
        .iter()
        .enumerate()
        .map(|(string, &open)| {
            let first = Interval::between(open, target).semitones() as u32;
            let frets: Vec<u32> = (first..=fret_count).step_by(12).collect();
            trace!("string {} ({}): {:?}", string, open, frets);
            (string, frets)
        })
        .collect()
}

fn scan_pitch(target: Pitch, tuning: &[Pitch], fret_count: u32) -> PitchPositions {
    let wanted = target.absolute_semitone();
    tuning
        .iter()
        .enumerate()
        .map(|(string, open)| {
            let base = open.absolute_semitone();
            let fret = u32::try_from(wanted - base)
                .ok()
                .filter(|&fret| fret <= fret_count);
            trace!("string {} ({}): {:?}", string, open, fret);
            (string, fret)
        })
        .collect()
}

/// A tuning together with the number of frets on the neck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fretboard {
    tuning: Tuning,
    fret_count: u32,
}

impl Fretboard {
    pub fn new(tuning: Tuning, fret_count: u32) -> Result<Fretboard, TheoryError> {
        validate(tuning.len(), fret_count)?;
        Ok(Fretboard { tuning, fret_count })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn fret_count(&self) -> u32 {
        self.fret_count
    }

    /// The pitch sounding on a string when held down at a fret.
    /// Returns `None` if the string or the fret is not on this fretboard.
    pub fn pitch_at(&self, string: usize, fret: u32) -> Option<Pitch> {
        if fret > self.fret_count {
            return None;
        }
        let open = self.tuning.strings().get(string)?;
        Some(Pitch::from_absolute(
            open.absolute_semitone() + i64::from(fret),
        ))
    }

    pub fn find_pitch_class(&self, target: PitchClass) -> PitchClassPositions {
        debug!(
            "searching {} in {} tuning with {} frets",
            target,
            self.tuning.name(),
            self.fret_count
        );
        scan_pitch_class(target, &self.tuning.pitch_classes(), self.fret_count)
    }

    pub fn find_pitch(&self, target: Pitch) -> PitchPositions {
        debug!(
            "searching {} in {} tuning with {} frets",
            target,
            self.tuning.name(),
            self.fret_count
        );
        scan_pitch(target, self.tuning.strings(), self.fret_count)
    }

    /// Where each tone of a chord can be played, in the order of the chord's tones.
    pub fn find_chord(&self, chord: &Chord) -> Vec<(PitchClass, PitchClassPositions)> {
        chord
            .tones()
            .iter()
            .map(|&tone| (tone, self.find_pitch_class(tone)))
            .collect()
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Fretboard {
            tuning: Tuning::STANDARD,
            fret_count: DEFAULT_FRET_COUNT,
        }
    }
}
