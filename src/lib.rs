//! # chordshift
//!
//! Transpose chord symbols up or down by half tones, either as a list of chords
//! (`G D/F# Em C`) or as a whole chord chart with lyrics.
//!
//! ## Modules
//! - `pitch` - spelling to pitch class tables
//! - `chord` - chord token grammars (standalone and embedded)
//! - `transpose` - the transposition engine and request model
//! - `classify` - chord line vs lyric line
//! - `document` - chart transposition, line by line
//! - `annotate` - notes about unusual enharmonic spellings
//! - `reader` - `.txt` / `.docx` decoding
//! - `config` - YAML settings
//!
//! ## Example
//! ```rust
//! use chordshift::{transpose_sequence, Direction, TransposeRequest};
//!
//! let result = transpose_sequence(&["C"], &TransposeRequest::new(Direction::Down, 0.5));
//! assert_eq!(result.chords, vec!["B"]);
//! ```

pub mod annotate;
pub mod chord;
pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod pitch;
pub mod reader;
pub mod transpose;

pub use annotate::Annotations;
pub use chord::{parse_token, ChordToken, Strictness};
pub use classify::is_chord_line;
pub use config::Settings;
pub use document::transpose_document;
pub use error::*;
pub use pitch::PitchClass;
pub use reader::{read_document, suggested_output_name};
pub use transpose::{
    transpose_chord, transpose_sequence, Direction, SequenceTransposition, TransposeRequest,
};
