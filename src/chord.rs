// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Chords are built by stacking the intervals of a formula on top of a root note.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::interval::{Interval, Shift};
use crate::pitch_class::PitchClass;

/// A named chord type, given by its intervals above the root.
/// The first interval is always the unison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChordFormula {
    name: Cow<'static, str>,
    aliases: &'static [&'static str],
    intervals: Cow<'static, [Interval]>,
}

impl ChordFormula {
    pub const MAJOR: ChordFormula = ChordFormula::builtin(
        "Maj",
        &["maj", "major", "M"],
        &[Interval::UNISON, Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH],
    );
    pub const MINOR: ChordFormula = ChordFormula::builtin(
        "Min",
        &["min", "minor", "m"],
        &[Interval::UNISON, Interval::MINOR_THIRD, Interval::PERFECT_FIFTH],
    );
    pub const DIMINISHED: ChordFormula = ChordFormula::builtin(
        "Dim",
        &["dim", "o"],
        &[Interval::UNISON, Interval::MINOR_THIRD, Interval::TRITONE],
    );
    pub const AUGMENTED: ChordFormula = ChordFormula::builtin(
        "Aug",
        &["aug", "+"],
        &[Interval::UNISON, Interval::MAJOR_THIRD, Interval::AUGMENTED_FIFTH],
    );
    pub const SUSPENDED_SECOND: ChordFormula = ChordFormula::builtin(
        "Sus2",
        &["sus2"],
        &[Interval::UNISON, Interval::MAJOR_SECOND, Interval::PERFECT_FIFTH],
    );
    pub const SUSPENDED_FOURTH: ChordFormula = ChordFormula::builtin(
        "Sus4",
        &["sus4", "sus"],
        &[Interval::UNISON, Interval::PERFECT_FOURTH, Interval::PERFECT_FIFTH],
    );
    pub const POWER: ChordFormula =
        ChordFormula::builtin("5", &["power"], &[Interval::UNISON, Interval::PERFECT_FIFTH]);
    pub const MAJOR_SIXTH: ChordFormula = ChordFormula::builtin(
        "Maj6",
        &["maj6", "6"],
        &[Interval::UNISON, Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH, Interval::MAJOR_SIXTH],
    );
    pub const MINOR_SIXTH: ChordFormula = ChordFormula::builtin(
        "Min6",
        &["min6", "m6"],
        &[Interval::UNISON, Interval::MINOR_THIRD, Interval::PERFECT_FIFTH, Interval::MAJOR_SIXTH],
    );
    pub const MAJOR_SEVENTH: ChordFormula = ChordFormula::builtin(
        "Maj7",
        &["maj7", "M7"],
        &[
            Interval::UNISON,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SEVENTH,
        ],
    );
    pub const MINOR_SEVENTH: ChordFormula = ChordFormula::builtin(
        "Min7",
        &["min7", "m7"],
        &[
            Interval::UNISON,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
        ],
    );
    pub const DOMINANT_SEVENTH: ChordFormula = ChordFormula::builtin(
        "Dom7",
        &["dom7", "7"],
        &[
            Interval::UNISON,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
        ],
    );
    pub const DIMINISHED_SEVENTH: ChordFormula = ChordFormula::builtin(
        "Dim7",
        &["dim7", "o7"],
        &[Interval::UNISON, Interval::MINOR_THIRD, Interval::TRITONE, Interval::DIMINISHED_SEVENTH],
    );
    pub const HALF_DIMINISHED_SEVENTH: ChordFormula = ChordFormula::builtin(
        "HalfDim7",
        &["m7b5", "halfdim7"],
        &[Interval::UNISON, Interval::MINOR_THIRD, Interval::TRITONE, Interval::MINOR_SEVENTH],
    );
    pub const MINOR_MAJOR_SEVENTH: ChordFormula = ChordFormula::builtin(
        "MinMaj7",
        &["minmaj7", "mM7"],
        &[
            Interval::UNISON,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SEVENTH,
        ],
    );
    pub const AUGMENTED_SEVENTH: ChordFormula = ChordFormula::builtin(
        "Aug7",
        &["aug7", "7#5"],
        &[
            Interval::UNISON,
            Interval::MAJOR_THIRD,
            Interval::AUGMENTED_FIFTH,
            Interval::MINOR_SEVENTH,
        ],
    );
    pub const ADDED_NINTH: ChordFormula = ChordFormula::builtin(
        "Add9",
        &["add9"],
        &[Interval::UNISON, Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH, Interval::MAJOR_NINTH],
    );
    pub const DOMINANT_NINTH: ChordFormula = ChordFormula::builtin(
        "Dom9",
        &["dom9", "9"],
        &[
            Interval::UNISON,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
            Interval::MAJOR_NINTH,
        ],
    );
    pub const MAJOR_NINTH: ChordFormula = ChordFormula::builtin(
        "Maj9",
        &["maj9", "M9"],
        &[
            Interval::UNISON,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SEVENTH,
            Interval::MAJOR_NINTH,
        ],
    );
    pub const MINOR_NINTH: ChordFormula = ChordFormula::builtin(
        "Min9",
        &["min9", "m9"],
        &[
            Interval::UNISON,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
            Interval::MAJOR_NINTH,
        ],
    );

    const fn builtin(
        name: &'static str,
        aliases: &'static [&'static str],
        intervals: &'static [Interval],
    ) -> ChordFormula {
        ChordFormula {
            name: Cow::Borrowed(name),
            aliases,
            intervals: Cow::Borrowed(intervals),
        }
    }

    /// Define a chord type that is not part of the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use fretster::chord::*;
    /// use fretster::interval::Interval;
    ///
    /// let quartal = ChordFormula::custom(
    ///     "Quartal",
    ///     vec![Interval::UNISON, Interval::PERFECT_FOURTH, Interval::new(10).unwrap()],
    /// );
    /// assert!(quartal.is_ok());
    /// assert!(ChordFormula::custom("Rootless", vec![Interval::MAJOR_THIRD]).is_err());
    /// ```
    pub fn custom<N: Into<String>>(
        name: N,
        intervals: Vec<Interval>,
    ) -> Result<ChordFormula, TheoryError> {
        let name = name.into();
        if intervals.first() != Some(&Interval::UNISON) {
            return Err(TheoryError::InvalidFormula { name });
        }
        Ok(ChordFormula {
            name: Cow::Owned(name),
            aliases: &[],
            intervals: Cow::Owned(intervals),
        })
    }

    /// Look up a formula of the catalog by its name or one of its aliases.
    pub fn from_name(name: &str) -> Result<ChordFormula, TheoryError> {
        CATALOG
            .iter()
            .find(|formula| formula.name == name || formula.aliases.contains(&name))
            .cloned()
            .ok_or_else(|| TheoryError::UnknownFormula {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[&'static str] {
        self.aliases
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

/// Every predefined chord type. Adding an entry here makes it available by name.
pub static CATALOG: [ChordFormula; 20] = [
    ChordFormula::MAJOR,
    ChordFormula::MINOR,
    ChordFormula::DIMINISHED,
    ChordFormula::AUGMENTED,
    ChordFormula::SUSPENDED_SECOND,
    ChordFormula::SUSPENDED_FOURTH,
    ChordFormula::POWER,
    ChordFormula::MAJOR_SIXTH,
    ChordFormula::MINOR_SIXTH,
    ChordFormula::MAJOR_SEVENTH,
    ChordFormula::MINOR_SEVENTH,
    ChordFormula::DOMINANT_SEVENTH,
    ChordFormula::DIMINISHED_SEVENTH,
    ChordFormula::HALF_DIMINISHED_SEVENTH,
    ChordFormula::MINOR_MAJOR_SEVENTH,
    ChordFormula::AUGMENTED_SEVENTH,
    ChordFormula::ADDED_NINTH,
    ChordFormula::DOMINANT_NINTH,
    ChordFormula::MAJOR_NINTH,
    ChordFormula::MINOR_NINTH,
];

/// A chord type on a concrete root note.
///
/// The tones are derived from root and formula, two chords are equal
/// if they share both.
#[derive(Clone, Debug)]
pub struct Chord {
    root: PitchClass,
    formula: ChordFormula,
    tones: Vec<PitchClass>,
}

impl Chord {
    pub fn new(root: PitchClass, formula: ChordFormula) -> Chord {
        let tones = formula
            .intervals()
            .iter()
            .map(|&interval| root.add(interval))
            .collect();
        Chord {
            root,
            formula,
            tones,
        }
    }

    /// Parse a chord of the format `<root>_<formula>`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretster::chord::*;
    /// use fretster::pitch_class::PitchClass;
    ///
    /// let chord = Chord::from_name("C_Maj7").unwrap();
    /// assert_eq!(
    ///     chord.tones(),
    ///     &[PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::B]
    /// );
    /// assert_eq!(Chord::from_name("F#_m7").unwrap().formula(), &ChordFormula::MINOR_SEVENTH);
    /// ```
    pub fn from_name(name: &str) -> Result<Chord, TheoryError> {
        let (root, formula) = match name.find('_') {
            Some(split) => (&name[..split], &name[split + 1..]),
            None => (name, ""),
        };
        let root = PitchClass::from_name(root)?;
        let formula = ChordFormula::from_name(formula)?;
        Ok(Chord::new(root, formula))
    }

    /// Move the chord to another root.
    /// The tones are rebuilt from the formula, so the chord keeps its shape.
    pub fn transpose<S: Into<Shift>>(&self, by: S) -> Chord {
        Chord::new(self.root.add(by), self.formula.clone())
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn formula(&self) -> &ChordFormula {
        &self.formula
    }

    /// The notes of the chord in formula order, starting with the root.
    pub fn tones(&self) -> &[PitchClass] {
        &self.tones
    }

    pub fn contains(&self, note: PitchClass) -> bool {
        self.tones.contains(&note)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.formula == other.formula
    }
}

impl Eq for Chord {}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.root.name(), self.formula.name())
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::from_name(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tones(names: &[&str]) -> Vec<PitchClass> {
        names.iter().map(|name| name.parse().unwrap()).collect()
    }

    #[test]
    fn catalog_is_well_formed() {
        let mut names = Vec::new();
        for formula in CATALOG.iter() {
            assert_eq!(formula.intervals()[0], Interval::UNISON, "{}", formula.name());
            names.push(formula.name());
            names.extend(formula.aliases().iter().cloned());
        }
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count, "formula names must be unique");
    }

    #[test]
    fn tones_from_names() {
        let chord = Chord::from_name("C_Maj7").unwrap();
        assert_eq!(chord.tones(), tones(&["C", "E", "G", "B"]).as_slice());
        assert_eq!(chord.tones()[0], chord.root());

        let chord = Chord::from_name("A_Min").unwrap();
        assert_eq!(chord.tones(), tones(&["A", "C", "E"]).as_slice());

        let chord = Chord::from_name("Bb_7").unwrap();
        assert_eq!(chord.tones(), tones(&["Bb", "D", "F", "Ab"]).as_slice());

        let chord = Chord::from_name("G_9").unwrap();
        assert_eq!(chord.tones(), tones(&["G", "B", "D", "F", "A"]).as_slice());
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            Chord::from_name("Z_Maj"),
            Err(TheoryError::UnknownNote {
                name: "Z".to_string()
            })
        );
        assert_eq!(
            Chord::from_name("C_Xyz"),
            Err(TheoryError::UnknownFormula {
                name: "Xyz".to_string()
            })
        );
        assert_eq!(
            Chord::from_name("C"),
            Err(TheoryError::UnknownFormula {
                name: "".to_string()
            })
        );
    }

    #[test]
    fn transposition_keeps_shape() {
        for formula in CATALOG.iter() {
            for root in PitchClass::ALL.iter().cloned() {
                let chord = Chord::new(root, formula.clone());
                for k in -30..30 {
                    let moved = chord.transpose(k);
                    assert_eq!(moved.formula(), formula);
                    for (i, interval) in formula.intervals().iter().enumerate() {
                        let expected =
                            PitchClass::new(i32::from(root.index()) + interval.semitones() + k);
                        assert_eq!(moved.tones()[i], expected);
                    }
                }
            }
        }
    }

    #[test]
    fn transposition_by_interval() {
        let chord = Chord::from_name("E_Dom9").unwrap();
        let moved = chord.transpose(Interval::PERFECT_FOURTH);
        assert_eq!(moved, Chord::from_name("A_9").unwrap());
        assert_eq!(moved.tones(), tones(&["A", "C#", "E", "G", "B"]).as_slice());
    }

    #[test]
    fn equality_ignores_spelling() {
        assert_eq!(
            Chord::from_name("C#_Maj").unwrap(),
            Chord::from_name("Db_major").unwrap()
        );
        assert_ne!(
            Chord::from_name("C_Maj").unwrap(),
            Chord::from_name("C_Min").unwrap()
        );
    }

    #[test]
    fn custom_formula() {
        let formula = ChordFormula::custom(
            "Quartal",
            vec![
                Interval::UNISON,
                Interval::PERFECT_FOURTH,
                Interval::MINOR_SEVENTH,
            ],
        )
        .unwrap();
        let chord = Chord::new(PitchClass::D, formula);
        assert_eq!(chord.tones(), tones(&["D", "G", "C"]).as_slice());
        assert_eq!(chord.to_string(), "D_Quartal");
        assert_eq!(
            ChordFormula::custom("Empty", vec![]),
            Err(TheoryError::InvalidFormula {
                name: "Empty".to_string()
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Chord::from_name("Db_m7").unwrap().to_string(), "C#_Min7");
        assert_eq!("C#_Min7".parse::<Chord>().unwrap().to_string(), "C#_Min7");
        assert!(Chord::from_name("G_Sus4").unwrap().contains(PitchClass::C));
    }
}
