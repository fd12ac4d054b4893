//! # Transposition Engine
//!
//! Moves chord roots and slash basses by a signed number of semitones.
//!
//! ## Request Model
//! A [`TransposeRequest`] is a direction plus a magnitude in tones. One tone is two
//! semitones, so `0.5` is a half step. The semitone count is `tones * 2` cast to an
//! integer, which truncates anything finer than a half tone.
//!
//! ## Failure Policy
//! - [`transpose`] returns the input unchanged when the spelling does not resolve.
//! - [`transpose_sequence`] marks unrecognized tokens with a trailing `?` and keeps
//!   going; the output always has one entry per input token.
//!
//! ## Example
//! ```rust
//! use chordshift::{transpose_sequence, Direction, TransposeRequest};
//!
//! let request = TransposeRequest::new(Direction::Up, 1.0);
//! let result = transpose_sequence(&["G", "D/F#", "Em", "C"], &request);
//! assert_eq!(result.chords, vec!["A", "E/G#", "F#m", "D"]);
//! ```

use crate::annotate::{note_input_root, note_output_root, Annotations};
use crate::chord::{parse_token, ChordToken, Strictness};
use crate::pitch::{canonical_spelling, pitch_class_of};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which way to move the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

/// How far and which way to transpose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransposeRequest {
    pub direction: Direction,
    /// Magnitude in tones (1.0 = whole step, 0.5 = half step)
    pub tones: f64,
}

impl TransposeRequest {
    pub fn new(direction: Direction, tones: f64) -> Self {
        Self { direction, tones }
    }

    /// Unsigned semitone count: `tones * 2`, truncated toward zero
    pub fn semitones(&self) -> i32 {
        (self.tones * 2.0) as i32
    }

    /// Signed semitone shift: positive for up, negative for down.
    ///
    /// Out-of-range magnitudes saturate at the `i32` bounds instead of overflowing.
    pub fn shift(&self) -> i32 {
        match self.direction {
            Direction::Up => self.semitones(),
            Direction::Down => self.semitones().saturating_neg(),
        }
    }
}

/// Result of transposing a list of standalone chord tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequenceTransposition {
    /// One entry per input token, in input order
    pub chords: Vec<String>,
    /// Notes about unusual spellings in the input
    pub input_notes: Annotations,
    /// Notes about unusual spellings in the output
    pub output_notes: Annotations,
}

/// Transpose a single note spelling.
///
/// Returns the original text if it is not a known spelling.
///
/// # Example
/// ```
/// use chordshift::transpose::transpose;
///
/// assert_eq!(transpose("B", 1), "C");
/// assert_eq!(transpose("Db", -2), "B");
/// assert_eq!(transpose("H", 3), "H");
/// ```
pub fn transpose(spelling: &str, shift: i32) -> String {
    match pitch_class_of(spelling) {
        Some(pc) => canonical_spelling(pc.transpose(shift)).to_string(),
        None => spelling.to_string(),
    }
}

/// Transpose the root and bass of a parsed chord, keeping its quality as written
pub fn transpose_token(token: &ChordToken, shift: i32) -> ChordToken {
    ChordToken {
        root: transpose(&token.root, shift),
        quality: token.quality.clone(),
        bass: token.bass.as_deref().map(|bass| transpose(bass, shift)),
    }
}

/// Transpose one standalone chord token, marking it with `?` if unrecognized
pub fn transpose_chord(text: &str, request: &TransposeRequest) -> String {
    transpose_sequence(&[text], request)
        .chords
        .pop()
        .unwrap_or_default()
}

/// Transpose a sequence of standalone chord tokens.
///
/// Callers are expected to reject empty input before getting here; an empty slice
/// simply yields an empty result.
pub fn transpose_sequence<S: AsRef<str>>(
    tokens: &[S],
    request: &TransposeRequest,
) -> SequenceTransposition {
    let shift = request.shift();
    let mut result = SequenceTransposition::default();

    for token in tokens {
        let text = token.as_ref();
        let Some(chord) = parse_token(text, Strictness::Standalone) else {
            debug!(token = text, "unrecognized chord");
            result.chords.push(format!("{}?", text));
            continue;
        };

        note_input_root(&chord.root, &mut result.input_notes);

        let moved = transpose_token(&chord, shift);
        note_output_root(&moved.root, &mut result.output_notes);

        trace!(from = text, to = %moved, shift, "transposed chord");
        result.chords.push(moved.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up(tones: f64) -> TransposeRequest {
        TransposeRequest::new(Direction::Up, tones)
    }

    fn down(tones: f64) -> TransposeRequest {
        TransposeRequest::new(Direction::Down, tones)
    }

    #[test]
    fn test_semitone_conversion() {
        assert_eq!(up(1.0).shift(), 2);
        assert_eq!(up(0.5).shift(), 1);
        assert_eq!(down(1.5).shift(), -3);
        assert_eq!(up(0.0).shift(), 0);
    }

    #[test]
    fn test_semitone_conversion_truncates() {
        assert_eq!(up(0.7).semitones(), 1);
        assert_eq!(up(0.2).semitones(), 0);
        assert_eq!(down(1.9).shift(), -3);
    }

    #[test]
    fn test_basic_progression_up_one_tone() {
        let result = transpose_sequence(&["G", "D", "Em", "C"], &up(1.0));
        assert_eq!(result.chords, vec!["A", "E", "F#m", "D"]);
        assert!(result.input_notes.is_empty());
        assert!(result.output_notes.is_empty());
    }

    #[test]
    fn test_slash_chord_bass_is_transposed() {
        let result = transpose_sequence(&["G", "D/F#", "Em", "C"], &up(1.0));
        assert_eq!(result.chords, vec!["A", "E/G#", "F#m", "D"]);
    }

    #[test]
    fn test_down_half_tone_wraps() {
        let result = transpose_sequence(&["C"], &down(0.5));
        assert_eq!(result.chords, vec!["B"]);
    }

    #[test]
    fn test_theoretical_root_is_canonicalized_and_noted() {
        let result = transpose_sequence(&["E#"], &up(0.0));
        assert_eq!(result.chords, vec!["F"]);
        assert_eq!(result.input_notes.len(), 1);
        assert!(result
            .input_notes
            .iter()
            .any(|n| n.contains("E#") && n.contains("enharmonic to F")));
    }

    #[test]
    fn test_unrecognized_token_is_marked() {
        let result = transpose_sequence(&["H", "G", "X7"], &up(1.0));
        assert_eq!(result.chords, vec!["H?", "A", "X7?"]);
    }

    #[test]
    fn test_flats_come_out_sharp() {
        let result = transpose_sequence(&["Bb", "Eb7", "Abmaj7"], &up(0.5));
        assert_eq!(result.chords, vec!["B", "E7", "Amaj7"]);
    }

    #[test]
    fn test_quality_suffix_is_untouched() {
        for quality in ["m7(b5)", "sus4", "7(#9)", "maj9", "dim", "º", "add9"] {
            let chord = format!("C{}", quality);
            let moved = transpose_chord(&chord, &up(2.5));
            assert_eq!(moved, format!("F{}", quality));
        }
    }

    #[test]
    fn test_unresolvable_bass_passes_through() {
        assert_eq!(transpose_chord("C/9", &up(1.0)), "D/9");
    }

    #[test]
    fn test_round_trip_keeps_pitch_class() {
        let spellings = ["C", "C#", "Db", "E#", "Fb", "Cb", "B#", "G##", "Abb", "Bb"];
        for s in spellings {
            for n in -30..=30 {
                let there = transpose(s, n);
                let back = transpose(&there, -n);
                assert_eq!(pitch_class_of(&back), pitch_class_of(s), "{} by {}", s, n);
            }
        }
    }

    #[test]
    fn test_extreme_shifts_stay_in_range() {
        assert_eq!(transpose("B", i32::MAX), "F#");
        assert_eq!(transpose("B", i32::MIN), "D#");
        assert_eq!(transpose("C", -i32::MAX), "F");
    }

    #[test]
    fn test_huge_requests_saturate() {
        assert_eq!(up(2.0e9).shift(), i32::MAX);
        assert_eq!(up(-2.0e9).shift(), i32::MIN);
        assert_eq!(down(-2.0e9).shift(), i32::MAX);
        assert_eq!(down(2.0e9).shift(), -i32::MAX);

        let result = transpose_sequence(&["B", "Em/G"], &up(2.0e9));
        assert_eq!(result.chords, vec!["F#", "Bm/D"]);
        let result = transpose_sequence(&["B"], &down(-2.0e9));
        assert_eq!(result.chords, vec!["F#"]);
        assert_eq!(transpose_chord("B", &up(f64::INFINITY)), "F#");
    }

    #[test]
    fn test_octave_identity() {
        for s in ["C", "F#", "Gb", "B"] {
            for k in -3..=3 {
                assert_eq!(pitch_class_of(&transpose(s, 12 * k)), pitch_class_of(s));
            }
        }
    }

    #[test]
    fn test_direction_deserializes_lowercase() {
        let dir: Direction = serde_yaml::from_str("down").unwrap();
        assert_eq!(dir, Direction::Down);
    }
}
