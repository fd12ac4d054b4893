//! # Error Types
//!
//! This module defines the error types for chordshift.
//!
//! Transposition itself never fails: an unrecognized chord in a sequence comes back
//! with a trailing `?`, and an unresolvable chord inside a document is left as-is.
//! Errors only come from the edges around the engine: reading files, loading
//! configuration and validating what the caller passes in.
//!
//! ## Error Types
//! - `UnreadableFile` - The document could not be decoded (bad UTF-8, corrupt .docx)
//! - `UnsupportedFormat` - The file extension is not `.txt` or `.docx`
//! - `EmptyInput` - No chords or no text were supplied
//! - `Config` / `ConfigFile` - Invalid settings or an unparsable YAML config
//! - `Io` - File system failures
//!
//! ## Usage
//! ```rust
//! use chordshift::{read_document, ChordError};
//!
//! match read_document("song.pdf", b"%PDF") {
//!     Ok(text) => println!("{}", text),
//!     Err(ChordError::UnsupportedFormat { extension, .. }) => {
//!         eprintln!("Cannot read .{} files", extension);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// The file was recognized but its contents could not be decoded.
    ///
    /// # Example
    /// ```
    /// # use chordshift::ChordError;
    /// let err = ChordError::UnreadableFile {
    ///     name: "song.txt".to_string(),
    ///     reason: "invalid utf-8 sequence".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Could not read 'song.txt': invalid utf-8 sequence");
    /// ```
    #[error("Could not read '{name}': {reason}")]
    UnreadableFile { name: String, reason: String },

    /// The file extension is not one the document reader understands.
    ///
    /// # Example
    /// ```
    /// # use chordshift::ChordError;
    /// let err = ChordError::UnsupportedFormat {
    ///     name: "song.pdf".to_string(),
    ///     extension: "pdf".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Unsupported file format '.pdf' for 'song.pdf' (expected .txt or .docx)"
    /// );
    /// ```
    #[error("Unsupported file format '.{extension}' for '{name}' (expected .txt or .docx)")]
    UnsupportedFormat { name: String, extension: String },

    /// Nothing to transpose. The engine is never called with empty input.
    #[error("No chords or text to transpose")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid config file '{path}': {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChordError {
    /// Create an unreadable-file error for the given file name
    pub fn unreadable(name: impl Into<String>, reason: impl ToString) -> Self {
        ChordError::UnreadableFile {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for chordshift operations
pub type Result<T> = std::result::Result<T, ChordError>;
