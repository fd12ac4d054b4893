//! # Pitch Model
//!
//! Fixed mapping between note spellings and the twelve pitch classes.
//!
//! Lookup is case-insensitive and many-to-one (`C#`, `Db` and `B##` all name pitch
//! class 1). Going back the other way always yields the sharp-preferring spelling
//! from [`CANONICAL_SPELLINGS`].

use std::fmt;

/// Semitone class in `0..=11`, with C = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any semitone count, wrapping into `0..=11`
    pub fn new(semitone: i32) -> Self {
        PitchClass(semitone.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move by a signed number of semitones. Any shift is reduced to an octave first,
    /// so the whole `i32` range wraps without overflow.
    pub fn transpose(self, shift: i32) -> Self {
        PitchClass::new(self.0 as i32 + shift.rem_euclid(12))
    }

    /// Sharp-preferring spelling of this pitch class
    pub fn spelling(self) -> &'static str {
        CANONICAL_SPELLINGS[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Output spellings, indexed by pitch class
pub const CANONICAL_SPELLINGS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every spelling the model accepts, with its pitch class.
/// Theoretical spellings (E#, B#, Fb, Cb) and double accidentals are included.
const NOTE_TABLE: &[(&str, u8)] = &[
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("E#", 5),
    ("B#", 0),
    ("Fb", 4),
    ("Cb", 11),
    // Double sharps
    ("C##", 2),
    ("D##", 4),
    ("E##", 6),
    ("F##", 7),
    ("G##", 9),
    ("A##", 11),
    ("B##", 1),
    // Double flats
    ("Cbb", 10),
    ("Dbb", 0),
    ("Ebb", 2),
    ("Fbb", 3),
    ("Gbb", 5),
    ("Abb", 7),
    ("Bbb", 9),
];

/// The table's own capitalization for a spelling, matched case-insensitively.
///
/// `"e#"` and `"E#"` both give `Some("E#")`; `"H"` gives `None`.
pub fn canonical_key(spelling: &str) -> Option<&'static str> {
    NOTE_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spelling))
        .map(|(name, _)| *name)
}

/// Resolve a spelling to its pitch class
///
/// # Examples
/// ```
/// use chordshift::pitch::{pitch_class_of, PitchClass};
///
/// assert_eq!(pitch_class_of("Db"), Some(PitchClass::new(1)));
/// assert_eq!(pitch_class_of("e#"), Some(PitchClass::new(5)));
/// assert_eq!(pitch_class_of("H"), None);
/// ```
pub fn pitch_class_of(spelling: &str) -> Option<PitchClass> {
    NOTE_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spelling))
        .map(|(_, pc)| PitchClass(*pc))
}

/// Sharp-preferring name for a pitch class
pub fn canonical_spelling(pc: PitchClass) -> &'static str {
    pc.spelling()
}
