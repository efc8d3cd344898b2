// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Intervals between notes, counted in semitones.

use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::pitch_class::PitchClass;

/// The widest interval that can be named, two octaves.
pub const MAX_SEMITONES: i32 = 24;

/// Names of every interval, indexed by semitone count.
/// The first name of each entry is the one used for display.
/// Lookup is case sensitive, `m3` is a minor and `M3` a major third.
pub static INTERVAL_NAMES: [&[&str]; 25] = [
    &["P1", "root", "perfect unison", "d2", "dim2"],
    &["m2", "min2", "minor second", "A1", "aug1"],
    &["M2", "maj2", "major second", "d3", "dim3"],
    &["m3", "min3", "minor third", "A2", "aug2"],
    &["M3", "maj3", "major third", "d4", "dim4"],
    &["P4", "perf4", "perfect fourth", "A3", "aug3"],
    &["d5", "dim5", "diminished fifth", "A4", "aug4", "tritone"],
    &["P5", "perf5", "perfect fifth", "d6", "dim6"],
    &["m6", "min6", "minor sixth", "A5", "aug5"],
    &["M6", "maj6", "major sixth", "d7", "dim7"],
    &["m7", "min7", "minor seventh", "A6", "aug6"],
    &["M7", "maj7", "major seventh", "d8", "dim8"],
    &["P8", "perf8", "octave", "A7", "aug7", "d9", "dim9"],
    &["m9", "min9", "minor ninth", "A8", "aug8"],
    &["M9", "maj9", "major ninth", "d10", "dim10"],
    &["m10", "min10", "minor tenth", "A9", "aug9"],
    &["M10", "maj10", "major tenth", "d11", "dim11"],
    &["P11", "perf11", "perfect eleventh", "A10", "aug10"],
    &["d12", "dim12", "diminished twelfth", "A11", "aug11"],
    &["P12", "perf12", "perfect twelfth", "d13", "dim13"],
    &["m13", "min13", "minor thirteenth", "A12", "aug12"],
    &["M13", "maj13", "major thirteenth", "d14", "dim14"],
    &["m14", "min14", "minor fourteenth", "A13", "aug13"],
    &["M14", "maj14", "major fourteenth", "d15", "dim15"],
    &["P15", "perf15", "double octave", "doctave", "A14", "aug14"],
];

/// A distance of 0 to 24 semitones.
///
/// Several names may denote the same interval (an augmented fourth is a diminished fifth),
/// but only the semitone count takes part in comparisons and arithmetic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Interval(u8);

impl Interval {
    pub const UNISON: Interval = Interval(0);
    pub const MINOR_SECOND: Interval = Interval(1);
    pub const MAJOR_SECOND: Interval = Interval(2);
    pub const MINOR_THIRD: Interval = Interval(3);
    pub const MAJOR_THIRD: Interval = Interval(4);
    pub const PERFECT_FOURTH: Interval = Interval(5);
    pub const TRITONE: Interval = Interval(6);
    pub const PERFECT_FIFTH: Interval = Interval(7);
    pub const AUGMENTED_FIFTH: Interval = Interval(8);
    pub const MINOR_SIXTH: Interval = Interval(8);
    pub const MAJOR_SIXTH: Interval = Interval(9);
    pub const DIMINISHED_SEVENTH: Interval = Interval(9);
    pub const MINOR_SEVENTH: Interval = Interval(10);
    pub const MAJOR_SEVENTH: Interval = Interval(11);
    pub const OCTAVE: Interval = Interval(12);
    pub const MINOR_NINTH: Interval = Interval(13);
    pub const MAJOR_NINTH: Interval = Interval(14);
    pub const PERFECT_ELEVENTH: Interval = Interval(17);
    pub const MAJOR_THIRTEENTH: Interval = Interval(21);
    pub const DOUBLE_OCTAVE: Interval = Interval(24);

    /// Create an interval spanning the given number of semitones.
    ///
    /// # Examples
    ///
    /// ```
    /// use fretster::interval::*;
    ///
    /// assert_eq!(Interval::new(7), Ok(Interval::PERFECT_FIFTH));
    /// assert!(Interval::new(25).is_err());
    /// assert!(Interval::new(-1).is_err());
    /// ```
    pub fn new(semitones: i32) -> Result<Interval, TheoryError> {
        if (0..=MAX_SEMITONES).contains(&semitones) {
            Ok(Interval(semitones as u8))
        } else {
            Err(TheoryError::InvalidInterval { semitones })
        }
    }

    /// Look up an interval by any of its names, e.g. `P5`, `perf5` or `perfect fifth`.
    pub fn from_name(name: &str) -> Result<Interval, TheoryError> {
        INTERVAL_NAMES
            .iter()
            .position(|names| names.contains(&name))
            .map(|semitones| Interval(semitones as u8))
            .ok_or_else(|| TheoryError::UnknownInterval {
                name: name.to_string(),
            })
    }

    /// The ascending distance from one pitch class up to the next occurrence of another.
    /// Always within a single octave.
    pub fn between(from: PitchClass, to: PitchClass) -> Interval {
        let distance = (i32::from(to.index()) - i32::from(from.index())).rem_euclid(12);
        Interval(distance as u8)
    }

    pub fn semitones(self) -> i32 {
        i32::from(self.0)
    }

    /// All names of this interval.
    pub fn names(self) -> &'static [&'static str] {
        INTERVAL_NAMES[self.0 as usize]
    }

    /// The short name, e.g. `m3`.
    pub fn name(self) -> &'static str {
        self.names()[0]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::from_name(s)
    }
}

/// An amount to transpose by: either a raw semitone count or a named interval.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shift {
    /// Any number of semitones, negative values shift downwards.
    Semitones(i32),
    Interval(Interval),
}

impl Shift {
    pub fn semitones(self) -> i32 {
        match self {
            Shift::Semitones(semitones) => semitones,
            Shift::Interval(interval) => interval.semitones(),
        }
    }
}

impl From<i32> for Shift {
    fn from(semitones: i32) -> Self {
        Shift::Semitones(semitones)
    }
}

impl From<Interval> for Shift {
    fn from(interval: Interval) -> Self {
        Shift::Interval(interval)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn range() {
        for semitones in 0..=MAX_SEMITONES {
            assert_eq!(Interval::new(semitones).unwrap().semitones(), semitones);
        }
        assert_eq!(
            Interval::new(25),
            Err(TheoryError::InvalidInterval { semitones: 25 })
        );
        assert_eq!(
            Interval::new(-3),
            Err(TheoryError::InvalidInterval { semitones: -3 })
        );
    }

    #[test]
    fn names_are_aliases() {
        assert_eq!(Interval::from_name("P5"), Ok(Interval::PERFECT_FIFTH));
        assert_eq!(Interval::from_name("perfect fifth"), Ok(Interval::PERFECT_FIFTH));
        assert_eq!(Interval::from_name("d5"), Interval::from_name("aug4"));
        assert_eq!(Interval::from_name("tritone"), Ok(Interval::TRITONE));
        assert_eq!(Interval::AUGMENTED_FIFTH, Interval::MINOR_SIXTH);
        assert!(Interval::TRITONE.names().contains(&"A4"));
        assert_eq!("doctave".parse::<Interval>(), Ok(Interval::DOUBLE_OCTAVE));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Interval::from_name("m3"), Ok(Interval::MINOR_THIRD));
        assert_eq!(Interval::from_name("M3"), Ok(Interval::MAJOR_THIRD));
        assert_eq!(
            Interval::from_name("p5"),
            Err(TheoryError::UnknownInterval {
                name: "p5".to_string()
            })
        );
    }

    #[test]
    fn names_are_unique() {
        let mut all: Vec<&str> = INTERVAL_NAMES.iter().flat_map(|n| n.iter().cloned()).collect();
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn display_uses_short_name() {
        assert_eq!(Interval::MAJOR_SEVENTH.to_string(), "M7");
        assert_eq!(Interval::OCTAVE.to_string(), "P8");
    }

    #[test]
    fn between_pitch_classes() {
        assert_eq!(
            Interval::between(PitchClass::C, PitchClass::G),
            Interval::PERFECT_FIFTH
        );
        assert_eq!(
            Interval::between(PitchClass::G, PitchClass::C),
            Interval::PERFECT_FOURTH
        );
        assert_eq!(
            Interval::between(PitchClass::E, PitchClass::E),
            Interval::UNISON
        );
    }

    #[test]
    fn shift_amounts() {
        assert_eq!(Shift::from(-5).semitones(), -5);
        assert_eq!(Shift::from(Interval::MAJOR_NINTH).semitones(), 14);
    }
}
