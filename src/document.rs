//! # Document Transposer
//!
//! Transposes a chord chart: chords over lyrics, one line at a time.
//!
//! ## Pipeline
//! 1. Split the text on `\n`
//! 2. Classify each line with [`is_chord_line`]
//! 3. Rewrite every embedded chord on chord lines
//! 4. Pass every other line through unchanged
//! 5. Join with `\n`
//!
//! Splitting on `\n` and joining again is lossless, so the line count, a
//! trailing newline and any `\r` before a newline all survive.
//!
//! ## Example
//! ```rust
//! use chordshift::{transpose_document, Direction, TransposeRequest};
//!
//! let chart = "   G   D   Em   C\nAmazing grace, how sweet the sound";
//! let out = transpose_document(chart, &TransposeRequest::new(Direction::Up, 1.0));
//! assert_eq!(out, "   A   E   F#m   D\nAmazing grace, how sweet the sound");
//! ```

use crate::chord::replace_embedded;
use crate::classify::is_chord_line;
use crate::transpose::{transpose_token, TransposeRequest};
use tracing::debug;

/// Transpose every chord line of a document, leaving lyric lines untouched
pub fn transpose_document(text: &str, request: &TransposeRequest) -> String {
    let shift = request.shift();
    let mut chord_lines = 0usize;
    let mut total_lines = 0usize;

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            total_lines += 1;
            if is_chord_line(line) {
                chord_lines += 1;
                transpose_line(line, shift)
            } else {
                line.to_string()
            }
        })
        .collect();

    debug!(total_lines, chord_lines, shift, "transposed document");
    lines.join("\n")
}

/// Rewrite every embedded chord in a line, whether or not it is a chord line
pub fn transpose_line(line: &str, shift: i32) -> String {
    replace_embedded(line, |chord| transpose_token(chord, shift).to_string())
}
