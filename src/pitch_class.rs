// fretster -- pitch algebra and fretboard lookup
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a pitch class is.

use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::interval::Shift;

/// A note name without an octave, one of the twelve semitones of equal temperament.
/// The cycle starts at C = 0 and all arithmetic wraps around modulo 12.
///
/// Different spellings may refer to the same pitch class, e.g. a G♯ is the same as an A♭,
/// and an F♭ is the same as an E.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PitchClass(u8);

/// Which accidental to prefer when spelling a pitch class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Accidental {
    Sharp,
    Flat,
    Natural,
}

impl Accidental {
    /// The typographic symbol, `♯`, `♭` or `♮`.
    pub fn glyph(self) -> &'static str {
        match self {
            Accidental::Sharp => "♯",
            Accidental::Flat => "♭",
            Accidental::Natural => "♮",
        }
    }

    fn ascii(self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::Natural => "",
        }
    }
}

/// Which pitch class is counted as zero when converting to and from plain indices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Anchor {
    /// C = 0, the numbering used everywhere in this crate.
    C,
    /// A = 0, as used by older fingering tables.
    A,
}

impl Anchor {
    /// Index of the anchor note in the C based numbering.
    pub fn offset(self) -> i32 {
        match self {
            Anchor::C => 0,
            Anchor::A => 9,
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::C
    }
}

impl FromStr for Anchor {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "C" => Ok(Anchor::C),
            "a" | "A" => Ok(Anchor::A),
            _ => Err(TheoryError::UnknownNote {
                name: s.to_string(),
            }),
        }
    }
}

/// The letters spelling a pitch class with each kind of accidental, if such a spelling exists.
struct Spelling {
    natural: Option<char>,
    sharp: Option<char>,
    flat: Option<char>,
}

const fn spelling(natural: Option<char>, sharp: Option<char>, flat: Option<char>) -> Spelling {
    Spelling {
        natural,
        sharp,
        flat,
    }
}

static SPELLINGS: [Spelling; 12] = [
    spelling(Some('C'), Some('B'), None),
    spelling(None, Some('C'), Some('D')),
    spelling(Some('D'), None, None),
    spelling(None, Some('D'), Some('E')),
    spelling(Some('E'), None, Some('F')),
    spelling(Some('F'), Some('E'), None),
    spelling(None, Some('F'), Some('G')),
    spelling(Some('G'), None, None),
    spelling(None, Some('G'), Some('A')),
    spelling(Some('A'), None, None),
    spelling(None, Some('A'), Some('B')),
    spelling(Some('B'), None, Some('C')),
];

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D_FLAT: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E_FLAT: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G_FLAT: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A_FLAT: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B_FLAT: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// All twelve pitch classes in ascending order starting at C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass(0),
        PitchClass(1),
        PitchClass(2),
        PitchClass(3),
        PitchClass(4),
        PitchClass(5),
        PitchClass(6),
        PitchClass(7),
        PitchClass(8),
        PitchClass(9),
        PitchClass(10),
        PitchClass(11),
    ];

    /// Create a pitch class from any integer, wrapping it into the octave.
    ///
    /// # Examples
    ///
    /// ```
    /// use fretster::pitch_class::*;
    ///
    /// assert_eq!(PitchClass::new(4), PitchClass::E);
    /// assert_eq!(PitchClass::new(13), PitchClass::C_SHARP);
    /// assert_eq!(PitchClass::new(-1), PitchClass::B);
    /// ```
    pub fn new(index: i32) -> PitchClass {
        PitchClass::wrap(i64::from(index))
    }

    /// Sums of two `i32` indices are formed in `i64` so they cannot overflow.
    fn wrap(index: i64) -> PitchClass {
        PitchClass(index.rem_euclid(12) as u8)
    }

    /// Interpret an index counted from the given anchor note.
    pub fn from_anchored(index: i32, anchor: Anchor) -> PitchClass {
        PitchClass::wrap(i64::from(index) + i64::from(anchor.offset()))
    }

    /// Parse a name of the format `<letter><accidental>`.
    /// The letter may be upper or lower case, the accidental may be missing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretster::pitch_class::*;
    ///
    /// assert_eq!(PitchClass::from_name("A"), Ok(PitchClass::A));
    /// assert_eq!(PitchClass::from_name("c#"), Ok(PitchClass::C_SHARP));
    /// assert_eq!(PitchClass::from_name("G♭"), Ok(PitchClass::F_SHARP));
    /// assert_eq!(PitchClass::from_name("Fb"), Ok(PitchClass::E));
    /// assert_eq!(PitchClass::from_name("Bsharp"), Ok(PitchClass::C));
    /// ```
    pub fn from_name(name: &str) -> Result<PitchClass, TheoryError> {
        PitchClass::spelled_index(name).map(PitchClass::new)
    }

    /// The index of a spelled name before wrapping, so `Cb` is -1 and `B#` is 12.
    pub(crate) fn spelled_index(name: &str) -> Result<i32, TheoryError> {
        let unknown = || TheoryError::UnknownNote {
            name: name.to_string(),
        };
        let mut chars = name.chars();
        let letter = match chars.next().map(|ch| ch.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(unknown()),
        };
        let offset = match chars.as_str() {
            "" => 0,
            "#" | "♯" | "s" | "sharp" => 1,
            "b" | "♭" | "f" | "flat" => -1,
            _ => return Err(unknown()),
        };
        Ok(letter + offset)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The index counted from the given anchor note.
    pub fn anchored_index(self, anchor: Anchor) -> u8 {
        (i32::from(self.0) - anchor.offset()).rem_euclid(12) as u8
    }

    /// Transpose upwards, wrapping around at the octave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretster::pitch_class::*;
    /// use fretster::interval::Interval;
    ///
    /// assert_eq!(PitchClass::A.add(3), PitchClass::C);
    /// assert_eq!(PitchClass::G.add(Interval::PERFECT_FIFTH), PitchClass::D);
    /// ```
    pub fn add<S: Into<Shift>>(self, by: S) -> PitchClass {
        PitchClass::wrap(i64::from(self.0) + i64::from(by.into().semitones()))
    }

    /// Transpose downwards, wrapping around at the octave.
    pub fn subtract<S: Into<Shift>>(self, by: S) -> PitchClass {
        PitchClass::wrap(i64::from(self.0) - i64::from(by.into().semitones()))
    }

    /// Spell this pitch class with the preferred accidental.
    ///
    /// Pitch classes with a single spelling ignore the preference.
    /// If there is no spelling using the requested accidental,
    /// the neutral [`display_name`](PitchClass::display_name) is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretster::pitch_class::*;
    ///
    /// assert_eq!(PitchClass::D.canonical_name(Accidental::Flat), "D");
    /// assert_eq!(PitchClass::C_SHARP.canonical_name(Accidental::Sharp), "C#");
    /// assert_eq!(PitchClass::C_SHARP.canonical_name(Accidental::Flat), "Db");
    /// assert_eq!(PitchClass::E.canonical_name(Accidental::Flat), "Fb");
    /// assert_eq!(PitchClass::E.canonical_name(Accidental::Natural), "E");
    /// ```
    pub fn canonical_name(self, preference: Accidental) -> String {
        self.spell(preference, Accidental::ascii)
    }

    /// Same as [`canonical_name`](PitchClass::canonical_name), but using `♯` and `♭`.
    pub fn glyph_name(self, preference: Accidental) -> String {
        self.spell(preference, Accidental::glyph)
    }

    /// A name that does not favour any accidental: the letter for natural notes,
    /// both spellings separated by a slash otherwise, e.g. `C#/Db`.
    pub fn display_name(self) -> String {
        let spelling = &SPELLINGS[self.0 as usize];
        match (spelling.natural, spelling.sharp, spelling.flat) {
            (Some(letter), _, _) => letter.to_string(),
            (None, Some(sharp), Some(flat)) => format!("{}#/{}b", sharp, flat),
            // every pitch class without a natural spelling has both of the others
            _ => String::new(),
        }
    }

    /// The shortest spelling: the natural letter if there is one, the sharp spelling otherwise.
    pub fn name(self) -> String {
        let spelling = &SPELLINGS[self.0 as usize];
        match spelling.natural {
            Some(letter) => letter.to_string(),
            None => self.canonical_name(Accidental::Sharp),
        }
    }

    /// Every spelling of this pitch class: natural first, then sharp, then flat.
    pub fn spellings(self) -> Vec<String> {
        let spelling = &SPELLINGS[self.0 as usize];
        let candidates = [
            (spelling.natural, Accidental::Natural),
            (spelling.sharp, Accidental::Sharp),
            (spelling.flat, Accidental::Flat),
        ];
        candidates
            .iter()
            .filter_map(|&(letter, accidental)| {
                letter.map(|letter| format!("{}{}", letter, accidental.ascii()))
            })
            .collect()
    }

    fn spell(self, preference: Accidental, symbol: fn(Accidental) -> &'static str) -> String {
        let spelling = &SPELLINGS[self.0 as usize];
        let preferred = match preference {
            Accidental::Sharp => spelling.sharp,
            Accidental::Flat => spelling.flat,
            Accidental::Natural => spelling.natural,
        };
        // A pitch class with only one spelling reads the same under every preference.
        let chosen = match (spelling.natural, spelling.sharp, spelling.flat) {
            (Some(natural), None, None) => Some((natural, Accidental::Natural)),
            _ => preferred.map(|letter| (letter, preference)),
        };
        match chosen {
            Some((letter, Accidental::Natural)) => letter.to_string(),
            Some((letter, accidental)) => format!("{}{}", letter, symbol(accidental)),
            None => self.display_name(),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval::Interval;

    #[test]
    fn inverse_transposition() {
        for pc in PitchClass::ALL.iter().cloned() {
            for n in -40..40 {
                assert_eq!(pc.add(n).add(-n), pc);
                assert_eq!(pc.add(n).subtract(n), pc);
            }
        }
    }

    #[test]
    fn octave_periodicity() {
        for pc in PitchClass::ALL.iter().cloned() {
            assert_eq!(pc.add(12), pc);
            assert_eq!(pc.add(Interval::OCTAVE), pc);
            assert_eq!(pc.subtract(24), pc);
        }
    }

    #[test]
    fn extreme_shifts() {
        for pc in PitchClass::ALL.iter().cloned() {
            for &n in &[i32::MAX, i32::MIN, i32::MAX - 1, i32::MIN + 1] {
                assert_eq!(pc.add(n).subtract(n), pc);
                assert_eq!(pc.subtract(n).add(n), pc);
                assert_eq!(pc.add(n), PitchClass::new(i32::from(pc.index()) + n % 12));
            }
        }
        // 2^31 - 1 = 12 * 178956970 + 7
        assert_eq!(PitchClass::B.add(i32::MAX), PitchClass::F_SHARP);
        assert_eq!(PitchClass::C.subtract(i32::MIN), PitchClass::G_SHARP);
        assert_eq!(PitchClass::from_anchored(i32::MAX, Anchor::A), PitchClass::E);
    }

    #[test]
    fn wrap_around() {
        assert_eq!(PitchClass::B.add(1), PitchClass::C);
        assert_eq!(PitchClass::C.subtract(1), PitchClass::B);
        assert_eq!(PitchClass::E.add(Interval::MAJOR_NINTH), PitchClass::F_SHARP);
        assert_eq!(PitchClass::C.subtract(Interval::MINOR_THIRD), PitchClass::A);
    }

    #[test]
    fn canonical_names() {
        use Accidental::*;
        assert_eq!(PitchClass::A_SHARP.canonical_name(Sharp), "A#");
        assert_eq!(PitchClass::A_SHARP.canonical_name(Flat), "Bb");
        assert_eq!(PitchClass::A_SHARP.canonical_name(Natural), "A#/Bb");
        assert_eq!(PitchClass::G.canonical_name(Sharp), "G");
        assert_eq!(PitchClass::G.canonical_name(Natural), "G");
        assert_eq!(PitchClass::F.canonical_name(Sharp), "E#");
        assert_eq!(PitchClass::F.canonical_name(Flat), "F");
        assert_eq!(PitchClass::B.canonical_name(Flat), "Cb");
        assert_eq!(PitchClass::C.canonical_name(Sharp), "B#");
        assert_eq!(PitchClass::C.canonical_name(Natural), "C");
    }

    #[test]
    fn glyph_names() {
        assert_eq!(PitchClass::F_SHARP.glyph_name(Accidental::Sharp), "F♯");
        assert_eq!(PitchClass::F_SHARP.glyph_name(Accidental::Flat), "G♭");
        assert_eq!(PitchClass::E.glyph_name(Accidental::Natural), "E");
        assert_eq!(Accidental::Natural.glyph(), "♮");
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = PitchClass::ALL.iter().map(|pc| pc.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B"
            ]
        );
        assert_eq!(PitchClass::D_SHARP.name(), "D#");
        assert_eq!(PitchClass::E.name(), "E");
    }

    #[test]
    fn spellings() {
        assert_eq!(PitchClass::E.spellings(), vec!["E", "Fb"]);
        assert_eq!(PitchClass::C.spellings(), vec!["C", "B#"]);
        assert_eq!(PitchClass::G_FLAT.spellings(), vec!["F#", "Gb"]);
        assert_eq!(PitchClass::A.spellings(), vec!["A"]);
        for pc in PitchClass::ALL.iter().cloned() {
            for name in pc.spellings() {
                assert_eq!(PitchClass::from_name(&name), Ok(pc));
            }
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("e".parse::<PitchClass>(), Ok(PitchClass::E));
        assert_eq!("Cs".parse::<PitchClass>(), Ok(PitchClass::C_SHARP));
        assert_eq!("Df".parse::<PitchClass>(), Ok(PitchClass::C_SHARP));
        assert_eq!("Cb".parse::<PitchClass>(), Ok(PitchClass::B));
        assert_eq!("E#".parse::<PitchClass>(), Ok(PitchClass::F));
        assert_eq!(
            PitchClass::from_name("Z"),
            Err(TheoryError::UnknownNote {
                name: "Z".to_string()
            })
        );
        assert!(PitchClass::from_name("").is_err());
        assert!(PitchClass::from_name("C##").is_err());
        assert!(PitchClass::from_name("C4").is_err());
    }

    #[test]
    fn anchors() {
        assert_eq!(PitchClass::from_anchored(0, Anchor::A), PitchClass::A);
        assert_eq!(PitchClass::from_anchored(3, Anchor::A), PitchClass::C);
        assert_eq!(PitchClass::from_anchored(3, Anchor::C), PitchClass::D_SHARP);
        assert_eq!(PitchClass::C.anchored_index(Anchor::A), 3);
        assert_eq!(PitchClass::G_SHARP.anchored_index(Anchor::A), 11);
        for pc in PitchClass::ALL.iter().cloned() {
            let index = i32::from(pc.anchored_index(Anchor::A));
            assert_eq!(PitchClass::from_anchored(index, Anchor::A), pc);
            assert_eq!(pc.anchored_index(Anchor::C), pc.index());
        }
        assert_eq!("a".parse::<Anchor>(), Ok(Anchor::A));
        assert_eq!(Anchor::default(), Anchor::C);
    }
}
