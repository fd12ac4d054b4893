//! # Line Classifier
//!
//! Decides whether a line of a chord chart holds chords or lyrics.
//!
//! Bar lines and repeat signs are stripped, the rest is split on whitespace and
//! each word is checked against a strict chord pattern. A line is a chord line
//! when at least [`CHORD_LINE_THRESHOLD`] of its words are chords, which leaves
//! room for annotations such as `(2x)` next to real chords.
//!
//! Classification only picks the line. Once a line counts as a chord line, every
//! embedded chord on it is transposed, including the `C` inside an annotation like
//! `N.C.`.

use lazy_static::lazy_static;
use regex::Regex;

/// Fraction of words that must look like chords
pub const CHORD_LINE_THRESHOLD: f64 = 0.75;

/// Notation artifacts removed before splitting, longest first
const BAR_MARKERS: &[&str] = &["||:", ":||", "|:", ":|", "||", "|"];

lazy_static! {
    static ref CHORD_WORD: Regex = Regex::new(concat!(
        r"^[A-G][#b]?",
        r"(?:maj|dim|aug|sus|add|m|M|º|°|-|\+)*\d*(?:maj|dim|aug|sus|add|m|M|º|°|-|\+)*",
        r"(?:\([^)]*\))?(?:/[A-G][#b]?)?$",
    ))
    .unwrap();
}

/// Whether a single whitespace-free word looks like a chord symbol
pub fn is_chord_word(word: &str) -> bool {
    CHORD_WORD.is_match(word)
}

/// Fraction of words in the line that are chords, or `None` for a blank line
pub fn chord_ratio(line: &str) -> Option<f64> {
    let mut cleaned = line.to_string();
    for marker in BAR_MARKERS {
        cleaned = cleaned.replace(marker, " ");
    }

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    let chords = words.iter().filter(|word| is_chord_word(word)).count();
    Some(chords as f64 / words.len() as f64)
}

/// Classify a line as a chord line
///
/// # Example
/// ```
/// use chordshift::is_chord_line;
///
/// assert!(is_chord_line("   G   D   Em   C"));
/// assert!(!is_chord_line("Amazing grace, how sweet the sound"));
/// assert!(!is_chord_line(""));
/// ```
pub fn is_chord_line(line: &str) -> bool {
    chord_ratio(line).is_some_and(|ratio| ratio >= CHORD_LINE_THRESHOLD)
}
