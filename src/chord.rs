//! # Chord Tokenizer
//!
//! Splits a chord symbol into root, quality suffix and optional slash bass.
//!
//! Two grammars share the pitch model:
//!
//! - **Standalone** - the token is known to be a chord (one entry of a sequence).
//!   Root is `[A-G][b#]?[b#]?`, case-insensitive, at the start of the token.
//!   Everything after it is the rest; a `/` in the rest splits quality from bass.
//! - **Embedded** - chords are searched for inside a line of text. Root is an
//!   uppercase `A-G` with at most one accidental, quality is the run of characters
//!   that are not whitespace, not `A-G` and not `/`, then an optional `/Root` bass.
//!
//! The quality is never interpreted. `m7b5`, `sus4`, `(9)` and anything else are
//! carried through character for character.
//!
//! ## Example
//! ```rust
//! use chordshift::chord::{parse_token, Strictness};
//!
//! let chord = parse_token("D/F#", Strictness::Standalone).unwrap();
//! assert_eq!(chord.root, "D");
//! assert_eq!(chord.quality, "");
//! assert_eq!(chord.bass.as_deref(), Some("F#"));
//! ```

use crate::pitch::pitch_class_of;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt;

lazy_static! {
    static ref STANDALONE_CHORD: Regex = Regex::new(r"(?is)^([A-G][b#]?[b#]?)(.*)$").unwrap();
    static ref EMBEDDED_CHORD: Regex =
        Regex::new(r"([A-G][#b]?)([^\sA-G/]*)(?:/([A-G][#b]?))?").unwrap();
}

/// Which grammar to tokenize with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Whole token is a chord; unresolvable roots are rejected
    Standalone,
    /// Chord found in running text; root resolution is left to the transposer
    Embedded,
}

/// A chord symbol split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// Root spelling as written, e.g. `"F#"` or `"bb"`
    pub root: String,
    /// Everything between the root and the slash, copied through untouched
    pub quality: String,
    /// Spelling after the first `/`, if any
    pub bass: Option<String>,
}

impl ChordToken {
    fn from_embedded(caps: &Captures) -> Self {
        ChordToken {
            root: caps[1].to_string(),
            quality: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
            bass: caps.get(3).map(|m| m.as_str().to_string()),
        }
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Parse a chord token with the given grammar.
///
/// Standalone tokens return `None` when the root pattern is missing or does not
/// resolve through the pitch model. Embedded tokens return `None` unless the whole
/// text is a single embedded chord match.
///
/// The embedded arm is a whole-token check. Document transposition searches lines
/// with [`replace_embedded`], which builds tokens from the same pattern.
pub fn parse_token(text: &str, strictness: Strictness) -> Option<ChordToken> {
    match strictness {
        Strictness::Standalone => parse_standalone(text),
        Strictness::Embedded => {
            let caps = EMBEDDED_CHORD.captures(text)?;
            let whole = caps.get(0)?;
            if whole.start() != 0 || whole.end() != text.len() {
                return None;
            }
            Some(ChordToken::from_embedded(&caps))
        }
    }
}

fn parse_standalone(text: &str) -> Option<ChordToken> {
    let caps = STANDALONE_CHORD.captures(text)?;
    let root = &caps[1];
    pitch_class_of(root)?;

    let rest = &caps[2];
    let (quality, bass) = match rest.split_once('/') {
        Some((quality, bass)) => (quality, Some(bass.to_string())),
        None => (rest, None),
    };

    Some(ChordToken {
        root: root.to_string(),
        quality: quality.to_string(),
        bass,
    })
}

/// Rewrite every embedded chord in `line`, left to right, without overlaps.
///
/// Text between matches is kept exactly as it was.
pub fn replace_embedded<F>(line: &str, mut rewrite: F) -> String
where
    F: FnMut(&ChordToken) -> String,
{
    EMBEDDED_CHORD
        .replace_all(line, |caps: &Captures| rewrite(&ChordToken::from_embedded(caps)))
        .into_owned()
}
